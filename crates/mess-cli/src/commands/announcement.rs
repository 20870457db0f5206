use mess_core::entities::NewAnnouncement;
use mess_core::enums::{AnnouncementCategory, EntityType};
use mess_core::responses::Outcome;
use mess_store::repos::announcement::AnnouncementFilter;
use mess_store::updates::announcement::AnnouncementUpdateBuilder;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AnnouncementCommands;
use crate::commands::shared::limit::{effective_limit, take_limited};
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

/// Handle `mess announcement`.
pub fn handle(
    action: &AnnouncementCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        AnnouncementCommands::Create {
            title,
            message,
            category,
        } => {
            let category = parse_category(category.as_deref())?.unwrap_or_default();
            let created = ctx.service.create_announcement(NewAnnouncement {
                title: title.clone(),
                message: message.clone(),
                category,
            })?;
            output(&created, flags.format)
        }
        AnnouncementCommands::Update {
            id,
            title,
            message,
            category,
        } => {
            let mut builder = AnnouncementUpdateBuilder::new();
            if let Some(title) = title {
                builder = builder.title(title.as_str());
            }
            if let Some(message) = message {
                builder = builder.message(message.as_str());
            }
            if let Some(category) = parse_category(category.as_deref())? {
                builder = builder.category(category);
            }
            let updated = ctx.service.update_announcement(*id, builder.build())?;
            output(&updated, flags.format)
        }
        AnnouncementCommands::Delete { id } => {
            ctx.service.delete_announcement(*id)?;
            output(
                &Outcome::Deleted {
                    entity_type: EntityType::Announcement,
                    id: *id,
                },
                flags.format,
            )
        }
        AnnouncementCommands::List {
            category,
            search,
            limit,
        } => {
            let limit = effective_limit(*limit, flags.limit, ctx.config.general.default_limit);
            let filter = AnnouncementFilter {
                category: parse_category(category.as_deref())?,
                search: search.clone(),
            };
            let view = ctx.service.list_announcements(filter);
            let announcements = take_limited(view.iter(), limit);
            output(&announcements, flags.format)
        }
    }
}

fn parse_category(raw: Option<&str>) -> anyhow::Result<Option<AnnouncementCategory>> {
    raw.map(|value| parse_enum::<AnnouncementCategory>(value, "category"))
        .transpose()
}
