//! # mess-store
//!
//! In-memory state for the hostel mess manager.
//!
//! Holds every collection the manager and student pages work with:
//! announcements, attendance polls, feedback, fee records, and the meal
//! menu. `MessService` is the composition root; each domain adds its
//! operations as an `impl MessService` block under [`repos`].
//!
//! All state lives for the lifetime of the process. Nothing is persisted,
//! but every mutation can be expressed as a [`commands::Command`] and
//! replayed from a JSONL script with [`replay::CommandReplayer`].

pub mod audit;
pub mod commands;
pub mod error;
pub mod menu;
pub mod replay;
pub mod repos;
mod seed;
pub mod service;
pub mod store;
mod test_support;
pub mod updates;
pub mod vote;

pub use service::MessService;
