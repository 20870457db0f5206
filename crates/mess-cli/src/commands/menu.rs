use mess_core::enums::Meal;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::MenuCommands;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

/// Handle `mess menu`.
pub fn handle(action: &MenuCommands, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        MenuCommands::Show { meal: Some(meal) } => {
            let timing = ctx.service.menu_for(parse_meal(meal)?)?;
            output(timing, flags.format)
        }
        MenuCommands::Show { meal: None } => output(&ctx.service.menu(), flags.format),
        MenuCommands::SetWindow { meal, start, end } => {
            let timing = ctx.service.set_window(parse_meal(meal)?, start, end)?;
            output(&timing, flags.format)
        }
        MenuCommands::AddItem { meal, name } => {
            let timing = ctx.service.add_item(parse_meal(meal)?, name)?;
            output(&timing, flags.format)
        }
        MenuCommands::RemoveItem { meal, name } => {
            let timing = ctx.service.remove_item(parse_meal(meal)?, name)?;
            output(&timing, flags.format)
        }
    }
}

fn parse_meal(raw: &str) -> anyhow::Result<Meal> {
    parse_enum::<Meal>(raw, "meal")
}
