//! Domain operations on `MessService`, one file per collection.

pub mod announcement;
pub mod dashboard;
pub mod feedback;
pub mod menu;
pub mod payment;
pub mod poll;
