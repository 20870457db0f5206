use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Handle `mess dashboard`.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&ctx.service.dashboard(), flags.format)
}
