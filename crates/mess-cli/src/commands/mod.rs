pub mod announcement;
pub mod audit;
pub mod dashboard;
pub mod dispatch;
pub mod feedback;
pub mod menu;
pub mod payment;
pub mod poll;
pub mod replay;
pub mod shared;
