//! Cross-cutting error types for the mess manager.
//!
//! Every failed operation leaves its store untouched, so callers can surface
//! these directly to the user without any rollback. Crate-specific errors
//! (`StoreError`, `ConfigError`) live in their own crates and wrap this one.

use chrono::NaiveDate;
use thiserror::Error;

use crate::RecordId;
use crate::enums::EntityType;

/// Errors raised by store, vote, and workflow operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A required field was missing, blank, or malformed.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity lookup returned no result.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: EntityType, id: String },

    /// A state machine transition was attempted that is not allowed.
    #[error("Invalid state transition: {entity_type} {id} from {from} to {to}")]
    InvalidTransition {
        entity_type: EntityType,
        id: RecordId,
        from: String,
        to: String,
    },

    /// A vote was cast on a poll that no longer accepts ballots.
    #[error("Poll {id} is closed")]
    PollClosed { id: RecordId },

    /// `close` was called on a poll that is already closed.
    #[error("Poll {id} is already closed")]
    AlreadyClosed { id: RecordId },

    /// A payment was recorded against a record that is already paid.
    #[error("Payment {id} was already paid on {paid_on}")]
    AlreadyPaid { id: RecordId, paid_on: NaiveDate },

    /// The voter already has a ballot on this poll.
    #[error("Voter '{voter_id}' has already voted on poll {poll_id}")]
    DuplicateVote { poll_id: RecordId, voter_id: String },
}

impl CoreError {
    /// Shorthand for a `NotFound` keyed by a numeric record id.
    #[must_use]
    pub fn not_found(entity_type: EntityType, id: RecordId) -> Self {
        Self::NotFound {
            entity_type,
            id: id.to_string(),
        }
    }

    /// Shorthand for a `Validation` error.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}
