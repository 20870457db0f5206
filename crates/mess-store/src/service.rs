//! Composition root owning every collection.
//!
//! `MessService` holds one store per entity type plus the ballot ledger,
//! menu board, and audit log. Domain operations are implemented as
//! `impl MessService` blocks under `repos/`.

use mess_config::{MessConfig, PaymentConfig, PollConfig};
use mess_core::entities::{Announcement, Feedback, PaymentRecord, Poll};

use crate::audit::{AuditFilter, AuditLog};
use crate::menu::MenuBoard;
use crate::store::EntityStore;
use crate::vote::BallotBox;

/// Orchestrates in-memory mutations with audit logging.
///
/// Every mutation method follows this protocol:
/// 1. Validate inputs and the target record's current state
/// 2. Mutate a draft and commit it to the owning store
/// 3. Append an audit entry
///
/// A failure at step 1 or 2 leaves every collection unchanged.
#[derive(Debug, Clone)]
pub struct MessService {
    pub(crate) announcements: EntityStore<Announcement>,
    pub(crate) polls: EntityStore<Poll>,
    pub(crate) ballots: BallotBox,
    pub(crate) feedback: EntityStore<Feedback>,
    pub(crate) payments: EntityStore<PaymentRecord>,
    pub(crate) menu: MenuBoard,
    pub(crate) audit: AuditLog,
    pub(crate) poll_config: PollConfig,
    pub(crate) payment_config: PaymentConfig,
}

impl MessService {
    /// Create an empty service using the poll and payment defaults from `config`.
    #[must_use]
    pub fn new(config: &MessConfig) -> Self {
        Self {
            announcements: EntityStore::new(),
            polls: EntityStore::new(),
            ballots: BallotBox::default(),
            feedback: EntityStore::new(),
            payments: EntityStore::new(),
            menu: MenuBoard::default(),
            audit: AuditLog::new(),
            poll_config: config.polls.clone(),
            payment_config: config.payments.clone(),
        }
    }

    /// Build the service the way `config` asks: seeded with the demo data or empty.
    ///
    /// # Errors
    ///
    /// Returns `CoreError` if the sample data violates a store invariant.
    pub fn from_config(config: &MessConfig) -> Result<Self, mess_core::errors::CoreError> {
        if config.general.seed_sample_data {
            Self::with_sample_data(config)
        } else {
            Ok(Self::new(config))
        }
    }

    /// Audit entries, newest first.
    #[must_use]
    pub fn audit(&self, filter: &AuditFilter) -> Vec<mess_core::entities::AuditEntry> {
        self.audit.query(filter)
    }

    #[must_use]
    pub const fn poll_config(&self) -> &PollConfig {
        &self.poll_config
    }

    #[must_use]
    pub const fn payment_config(&self) -> &PaymentConfig {
        &self.payment_config
    }
}
