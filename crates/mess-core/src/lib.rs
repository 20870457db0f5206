//! # mess-core
//!
//! Core types, status state machines, and error types for the hostel mess manager.
//!
//! This crate provides the foundational types shared across all mess crates:
//! - Entity structs for every domain record (announcements, polls, feedback,
//!   payment records, meal timings, audit entries)
//! - Status enums with state machine transitions
//! - Cross-cutting error types
//! - Operation outcomes returned to command dispatchers
//! - Response and summary types rendered by the presentation layer
//! - Serde adapters for wall-clock meal times

pub mod audit_detail;
pub mod clock_serde;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod responses;

/// Process-local record identifier. Unique within one collection, never reused.
pub type RecordId = u64;
