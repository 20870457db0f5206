use clap::Subcommand;

/// Feedback commands.
#[derive(Clone, Debug, Subcommand)]
pub enum FeedbackCommands {
    /// Submit a complaint or suggestion.
    Submit {
        #[arg(long = "type")]
        feedback_type: Option<String>,
        #[arg(long)]
        category: String,
        #[arg(long)]
        message: String,
        /// Hide the submitter's identity.
        #[arg(long)]
        anonymous: bool,
        #[arg(long, default_value = "")]
        student_ref: String,
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "")]
        email: String,
    },
    /// Respond and move to review.
    Respond {
        id: u64,
        #[arg(long)]
        response: String,
    },
    /// Mark resolved.
    Resolve { id: u64 },
    /// List feedback, newest first.
    List {
        #[arg(long)]
        status: Option<String>,
        #[arg(long = "type")]
        feedback_type: Option<String>,
        #[arg(long)]
        search: Option<String>,
        /// Only this student's named submissions.
        #[arg(long)]
        author: Option<String>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Counts per status.
    Summary,
}
