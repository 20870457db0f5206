//! Update builder types for entity mutations.
//!
//! Each builder produces an update struct with `Option` fields. Only `Some`
//! fields are merged into the stored record. Status, tallies, and ids are
//! never patchable; they move only through the vote and workflow operations.

pub mod announcement;
pub mod payment;
pub mod poll;

use mess_core::errors::CoreError;

/// A partial update that can be merged into a record of type `T`.
pub trait Patch<T> {
    /// Merge the `Some` fields into `record`.
    ///
    /// # Errors
    ///
    /// Returns `CoreError` if a field is invalid or the record no longer
    /// accepts edits. `record` may be partially written on error, so callers
    /// apply patches to a draft copy.
    fn apply_to(&self, record: &mut T) -> Result<(), CoreError>;

    /// Whether the patch would change nothing.
    fn is_empty(&self) -> bool;
}

/// Reject blank values for a required text field.
pub(crate) fn require_text(field: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::validation(format!("{field} must not be empty")));
    }
    Ok(())
}
