use mess_core::entities::{NewFeedback, StudentIdentity};
use mess_core::enums::{FeedbackStatus, FeedbackType};
use mess_store::repos::feedback::FeedbackFilter;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::FeedbackCommands;
use crate::commands::shared::limit::{effective_limit, take_limited};
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

/// Handle `mess feedback`.
pub fn handle(
    action: &FeedbackCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        FeedbackCommands::Submit {
            feedback_type,
            category,
            message,
            anonymous,
            student_ref,
            name,
            email,
        } => {
            let feedback_type = feedback_type
                .as_deref()
                .map(|value| parse_enum::<FeedbackType>(value, "type"))
                .transpose()?
                .unwrap_or_default();
            let feedback = ctx.service.submit_feedback(NewFeedback {
                student: StudentIdentity {
                    student_ref: student_ref.clone(),
                    name: name.clone(),
                    email: email.clone(),
                },
                feedback_type,
                category: category.clone(),
                message: message.clone(),
                anonymous: *anonymous,
            })?;
            output(&feedback, flags.format)
        }
        FeedbackCommands::Respond { id, response } => {
            let feedback = ctx.service.respond(*id, response)?;
            output(&feedback, flags.format)
        }
        FeedbackCommands::Resolve { id } => {
            let feedback = ctx.service.resolve(*id)?;
            output(&feedback, flags.format)
        }
        FeedbackCommands::List {
            status,
            feedback_type,
            search,
            author,
            limit,
        } => {
            let limit = effective_limit(*limit, flags.limit, ctx.config.general.default_limit);
            if let Some(student_ref) = author {
                let mine = ctx.service.feedback_by_author(student_ref);
                return output(&take_limited(mine.into_iter(), limit), flags.format);
            }
            let filter = FeedbackFilter {
                status: status
                    .as_deref()
                    .map(|value| parse_enum::<FeedbackStatus>(value, "status"))
                    .transpose()?,
                feedback_type: feedback_type
                    .as_deref()
                    .map(|value| parse_enum::<FeedbackType>(value, "type"))
                    .transpose()?,
                search: search.clone(),
            };
            let view = ctx.service.list_feedback(filter);
            output(&take_limited(view.iter(), limit), flags.format)
        }
        FeedbackCommands::Summary => output(&ctx.service.feedback_summary(), flags.format),
    }
}
