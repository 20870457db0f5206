use clap::Subcommand;

/// Menu and timing commands.
#[derive(Clone, Debug, Subcommand)]
pub enum MenuCommands {
    /// Show timings and items.
    Show {
        #[arg(long)]
        meal: Option<String>,
    },
    /// Set a meal's serving window.
    SetWindow {
        meal: String,
        /// Start time (HH:MM, 24h).
        #[arg(long)]
        start: String,
        /// End time (HH:MM, 24h).
        #[arg(long)]
        end: String,
    },
    /// Add a menu item.
    AddItem { meal: String, name: String },
    /// Remove a menu item by name.
    RemoveItem { meal: String, name: String },
}
