//! Entity structs for all mess domain records.
//!
//! Each entity is owned by exactly one collection in `mess-store`. Every
//! entity has a matching `New*` field set used by `create` operations and
//! command objects. All structs derive `Serialize`, `Deserialize`, and
//! `JsonSchema` for JSON roundtrip and schema validation.

mod announcement;
mod audit;
mod feedback;
mod menu;
mod payment;
mod poll;

pub use announcement::{Announcement, NewAnnouncement};
pub use audit::AuditEntry;
pub use feedback::{
    ANONYMOUS, Author, Feedback, NewFeedback, SUGGESTED_CATEGORIES, StudentIdentity,
};
pub use menu::MealTiming;
pub use payment::{NewPayment, PaymentRecord};
pub use poll::{NewPoll, Poll};
