use clap::Subcommand;

/// Payment commands.
#[derive(Clone, Debug, Subcommand)]
pub enum PaymentCommands {
    /// Bill a student for one period.
    Create {
        #[arg(long)]
        student_ref: String,
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long, default_value = "")]
        room: String,
        /// Billing period label, e.g. "February 2024".
        #[arg(long)]
        period: String,
        #[arg(long)]
        amount: Option<u32>,
        /// Due date (YYYY-MM-DD).
        #[arg(long)]
        due: String,
    },
    /// Record a payment.
    Record {
        id: u64,
        /// Payment date (YYYY-MM-DD), defaults to today.
        #[arg(long)]
        paid_on: Option<String>,
        #[arg(long)]
        txn: Option<String>,
    },
    /// Flip a pending record to overdue.
    MarkOverdue { id: u64 },
    /// Mark every pending record past its due date overdue.
    Sweep {
        /// Reference date (YYYY-MM-DD), defaults to today.
        #[arg(long)]
        today: Option<String>,
    },
    /// List fee records.
    List {
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        search: Option<String>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Collection totals.
    Summary,
    /// Unpaid records to remind.
    Reminders,
    /// One student's fee history.
    History { student_ref: String },
}
