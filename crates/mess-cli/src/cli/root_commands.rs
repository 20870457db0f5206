use clap::{Args, Subcommand};

use crate::cli::subcommands::{
    AnnouncementCommands, FeedbackCommands, MenuCommands, PaymentCommands, PollCommands,
};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Notices posted by the mess manager.
    Announcement {
        #[command(subcommand)]
        action: AnnouncementCommands,
    },
    /// Meal attendance polls.
    Poll {
        #[command(subcommand)]
        action: PollCommands,
    },
    /// Complaints and suggestions.
    Feedback {
        #[command(subcommand)]
        action: FeedbackCommands,
    },
    /// Mess fee records.
    Payment {
        #[command(subcommand)]
        action: PaymentCommands,
    },
    /// Meal timings and menu items.
    Menu {
        #[command(subcommand)]
        action: MenuCommands,
    },
    /// Headline numbers from every collection.
    Dashboard,
    /// Mutations made during this run.
    Audit(AuditArgs),
    /// Apply a JSONL command script.
    Replay(ReplayArgs),
}

/// Arguments for `mess audit`.
#[derive(Clone, Debug, Args)]
pub struct AuditArgs {
    #[arg(long)]
    pub entity_type: Option<String>,
    #[arg(long)]
    pub action: Option<String>,
}

/// Arguments for `mess replay`.
#[derive(Clone, Debug, Args)]
pub struct ReplayArgs {
    /// Path to a `.jsonl` script, one command per line.
    pub script: String,
    /// Stop at the first failing command.
    #[arg(long)]
    pub strict: bool,
    /// Print the dashboard after the script has run.
    #[arg(long)]
    pub show_state: bool,
}
