use mess_core::entities::NewPayment;
use mess_core::enums::PaymentStatus;
use mess_store::repos::payment::PaymentFilter;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::PaymentCommands;
use crate::commands::shared::limit::{effective_limit, take_limited};
use crate::commands::shared::parse::{date_or_today, parse_date, parse_enum};
use crate::context::AppContext;
use crate::output::output;

/// Handle `mess payment`.
pub fn handle(
    action: &PaymentCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        PaymentCommands::Create {
            student_ref,
            name,
            email,
            room,
            period,
            amount,
            due,
        } => {
            let record = ctx.service.create_payment(NewPayment {
                student_ref: student_ref.clone(),
                student_name: name.clone(),
                student_email: email.clone(),
                room: room.clone(),
                period: period.clone(),
                amount_due: *amount,
                due_date: parse_date(due, "due")?,
            })?;
            output(&record, flags.format)
        }
        PaymentCommands::Record { id, paid_on, txn } => {
            let paid_on = date_or_today(paid_on.as_deref(), "paid-on")?;
            let record = ctx.service.record_payment(*id, paid_on, txn.clone())?;
            output(&record, flags.format)
        }
        PaymentCommands::MarkOverdue { id } => {
            let record = ctx.service.mark_overdue(*id)?;
            output(&record, flags.format)
        }
        PaymentCommands::Sweep { today } => {
            let today = date_or_today(today.as_deref(), "today")?;
            let changed = ctx.service.sweep_overdue(today)?;
            output(&changed, flags.format)
        }
        PaymentCommands::List {
            status,
            search,
            limit,
        } => {
            let limit = effective_limit(*limit, flags.limit, ctx.config.general.default_limit);
            let filter = PaymentFilter {
                status: status
                    .as_deref()
                    .map(|value| parse_enum::<PaymentStatus>(value, "status"))
                    .transpose()?,
                search: search.clone(),
            };
            let view = ctx.service.list_payments(filter);
            output(&take_limited(view.iter(), limit), flags.format)
        }
        PaymentCommands::Summary => output(&ctx.service.payment_summary(), flags.format),
        PaymentCommands::Reminders => {
            let recipients = ctx.service.reminder_recipients();
            if !flags.quiet {
                tracing::info!(count = recipients.len(), "reminder recipients selected");
            }
            output(&recipients, flags.format)
        }
        PaymentCommands::History { student_ref } => {
            output(&ctx.service.payment_history(student_ref), flags.format)
        }
    }
}
