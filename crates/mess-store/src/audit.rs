//! In-memory audit log.
//!
//! Every successful mutation appends one entry. Failed operations append
//! nothing, so the log mirrors exactly what changed.

use chrono::Utc;
use mess_core::RecordId;
use mess_core::entities::AuditEntry;
use mess_core::enums::{AuditAction, EntityType};
use serde::Serialize;

/// Optional narrowing for audit queries.
#[derive(Debug, Clone, Default)]
pub struct AuditFilter {
    pub entity_type: Option<EntityType>,
    pub action: Option<AuditAction>,
    pub limit: Option<usize>,
}

#[derive(Debug, Clone, Default)]
pub struct AuditLog {
    entries: Vec<AuditEntry>,
    next_id: RecordId,
}

impl AuditLog {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 1,
        }
    }

    /// Append an entry. `detail` is serialized to JSON; a detail that fails
    /// to serialize is dropped rather than failing the mutation it records.
    pub fn record<D: Serialize>(
        &mut self,
        entity_type: EntityType,
        entity_id: impl ToString,
        action: AuditAction,
        detail: Option<D>,
    ) {
        let detail = detail.and_then(|d| serde_json::to_value(d).ok());
        let entry = AuditEntry {
            id: self.next_id,
            entity_type,
            entity_id: entity_id.to_string(),
            action,
            detail,
            created_at: Utc::now(),
        };
        self.next_id += 1;
        self.entries.push(entry);
    }

    /// Entries matching `filter`, newest first.
    #[must_use]
    pub fn query(&self, filter: &AuditFilter) -> Vec<AuditEntry> {
        self.entries
            .iter()
            .rev()
            .filter(|e| filter.entity_type.is_none_or(|t| e.entity_type == t))
            .filter(|e| filter.action.is_none_or(|a| e.action == a))
            .take(filter.limit.unwrap_or(usize::MAX))
            .cloned()
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
