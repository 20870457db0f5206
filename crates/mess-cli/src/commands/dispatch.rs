use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(command: Commands, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Announcement { action } => commands::announcement::handle(&action, ctx, flags),
        Commands::Poll { action } => commands::poll::handle(&action, ctx, flags),
        Commands::Feedback { action } => commands::feedback::handle(&action, ctx, flags),
        Commands::Payment { action } => commands::payment::handle(&action, ctx, flags),
        Commands::Menu { action } => commands::menu::handle(&action, ctx, flags),
        Commands::Dashboard => commands::dashboard::handle(ctx, flags),
        Commands::Audit(args) => commands::audit::handle(&args, ctx, flags),
        Commands::Replay(args) => commands::replay::handle(&args, ctx, flags),
    }
}
