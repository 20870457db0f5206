use std::path::Path;

use anyhow::Context;
use mess_core::responses::{DashboardSnapshot, ReplayResponse};
use mess_store::replay::CommandReplayer;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ReplayArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct ReplayWithState {
    #[serde(flatten)]
    replay: ReplayResponse,
    state: DashboardSnapshot,
}

/// Handle `mess replay`.
pub fn handle(args: &ReplayArgs, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let path = Path::new(&args.script);
    let response = CommandReplayer::replay(&mut ctx.service, path, args.strict)
        .with_context(|| format!("replay of {} aborted", path.display()))?;

    if args.show_state {
        return output(
            &ReplayWithState {
                replay: response,
                state: ctx.service.dashboard(),
            },
            flags.format,
        );
    }
    output(&response, flags.format)
}
