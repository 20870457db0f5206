use mess_core::entities::NewPoll;
use mess_core::enums::{EntityType, Meal, PollStatus, VoteChoice};
use mess_core::responses::Outcome;
use mess_store::repos::poll::PollFilter;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::PollCommands;
use crate::commands::shared::limit::{effective_limit, take_limited};
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

/// Handle `mess poll`.
pub fn handle(action: &PollCommands, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        PollCommands::Create {
            meal,
            date,
            question,
            deadline,
            eligible,
        } => {
            let mut fields = NewPoll::for_meal(parse_enum::<Meal>(meal, "meal")?);
            if let Some(date) = date {
                fields.date_label.clone_from(date);
            }
            fields.question.clone_from(question);
            fields.deadline.clone_from(deadline);
            fields.total_eligible = *eligible;
            let poll = ctx.service.create_poll(fields)?;
            output(&poll, flags.format)
        }
        PollCommands::Vote {
            poll_id,
            choice,
            voter,
        } => {
            let choice = parse_enum::<VoteChoice>(choice, "choice")?;
            let poll = ctx.service.vote(*poll_id, choice, voter)?;
            output(&poll, flags.format)
        }
        PollCommands::Close { id } => {
            let poll = ctx.service.close_poll(*id)?;
            output(&poll, flags.format)
        }
        PollCommands::Delete { id } => {
            ctx.service.delete_poll(*id)?;
            output(
                &Outcome::Deleted {
                    entity_type: EntityType::Poll,
                    id: *id,
                },
                flags.format,
            )
        }
        PollCommands::List {
            status,
            meal,
            limit,
        } => {
            let limit = effective_limit(*limit, flags.limit, ctx.config.general.default_limit);
            let filter = PollFilter {
                status: status
                    .as_deref()
                    .map(|value| parse_enum::<PollStatus>(value, "status"))
                    .transpose()?,
                meal: meal
                    .as_deref()
                    .map(|value| parse_enum::<Meal>(value, "meal"))
                    .transpose()?,
            };
            let view = ctx.service.list_polls(filter);
            output(&take_limited(view.iter(), limit), flags.format)
        }
        PollCommands::Stats { id } => output(&ctx.service.poll_stats(*id)?, flags.format),
        PollCommands::Overview => output(&ctx.service.poll_overview(), flags.format),
        PollCommands::View { voter } => output(&ctx.service.polls_for_voter(voter), flags.format),
    }
}
