use clap::Subcommand;

/// Poll commands.
#[derive(Clone, Debug, Subcommand)]
pub enum PollCommands {
    /// Open an attendance poll.
    Create {
        #[arg(long)]
        meal: String,
        /// Day label, e.g. "Today" or "Tomorrow".
        #[arg(long)]
        date: Option<String>,
        #[arg(long)]
        question: Option<String>,
        #[arg(long)]
        deadline: Option<String>,
        #[arg(long)]
        eligible: Option<u32>,
    },
    /// Cast a ballot.
    Vote {
        poll_id: u64,
        /// yes or no
        #[arg(long)]
        choice: String,
        #[arg(long)]
        voter: String,
    },
    /// Close voting.
    Close { id: u64 },
    /// Delete a poll and its ballots.
    Delete { id: u64 },
    /// List polls, newest first.
    List {
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        meal: Option<String>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Tally breakdown for one poll.
    Stats { id: u64 },
    /// Totals across all polls.
    Overview,
    /// Polls as a student sees them.
    View {
        #[arg(long)]
        voter: String,
    },
}
