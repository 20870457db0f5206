mod announcement;
mod feedback;
mod menu;
mod payment;
mod poll;

pub use announcement::AnnouncementCommands;
pub use feedback::FeedbackCommands;
pub use menu::MenuCommands;
pub use payment::PaymentCommands;
pub use poll::PollCommands;
