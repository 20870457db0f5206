//! Typed audit detail payloads.
//!
//! Each audit action can carry a structured `detail` JSON blob. These types
//! give the common shapes a schema.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::VoteChoice;

/// Detail for `AuditAction::StatusChanged`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct StatusChangedDetail {
    pub from: String,
    pub to: String,
}

/// Detail for `AuditAction::Voted`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct VotedDetail {
    pub voter_id: String,
    pub choice: VoteChoice,
}

/// Detail for `AuditAction::Updated` on a meal timing.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(tag = "change", rename_all = "snake_case")]
pub enum MenuChangedDetail {
    Window { start_time: String, end_time: String },
    ItemAdded { name: String },
    ItemRemoved { name: String },
}
