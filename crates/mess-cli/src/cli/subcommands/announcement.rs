use clap::Subcommand;

/// Announcement commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AnnouncementCommands {
    /// Post an announcement.
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        message: String,
        #[arg(long)]
        category: Option<String>,
    },
    /// Edit an announcement.
    Update {
        id: u64,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        message: Option<String>,
        #[arg(long)]
        category: Option<String>,
    },
    /// Delete an announcement.
    Delete { id: u64 },
    /// List announcements, newest first.
    List {
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        search: Option<String>,
        #[arg(long)]
        limit: Option<u32>,
    },
}
