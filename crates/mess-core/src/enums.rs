//! Status enums, categories, and entity kinds for the mess manager.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.
//! Status enums with state machines provide `allowed_next_states()` so the
//! service layer can reject invalid transitions before touching a record.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Meal
// ---------------------------------------------------------------------------

/// One of the three daily meal services. Ordered by time of day.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Meal {
    #[serde(alias = "Breakfast")]
    Breakfast,
    #[serde(alias = "Lunch")]
    Lunch,
    #[serde(alias = "Dinner")]
    Dinner,
}

impl Meal {
    pub const ALL: [Self; 3] = [Self::Breakfast, Self::Lunch, Self::Dinner];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Breakfast => "breakfast",
            Self::Lunch => "lunch",
            Self::Dinner => "dinner",
        }
    }

    /// Capitalized name shown to students ("Dinner").
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Breakfast => "Breakfast",
            Self::Lunch => "Lunch",
            Self::Dinner => "Dinner",
        }
    }

    /// Voting cutoff used when a poll is created without an explicit deadline.
    #[must_use]
    pub const fn default_deadline(self) -> &'static str {
        match self {
            Self::Breakfast => "10:00 PM Previous Day",
            Self::Lunch => "10:00 AM",
            Self::Dinner => "6:00 PM",
        }
    }
}

impl fmt::Display for Meal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// AnnouncementCategory
// ---------------------------------------------------------------------------

/// Category badge of an announcement.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum AnnouncementCategory {
    #[default]
    General,
    Menu,
    Timing,
    Holiday,
    Maintenance,
}

impl AnnouncementCategory {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Menu => "menu",
            Self::Timing => "timing",
            Self::Holiday => "holiday",
            Self::Maintenance => "maintenance",
        }
    }
}

impl fmt::Display for AnnouncementCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// PollStatus
// ---------------------------------------------------------------------------

/// Status of an attendance poll.
///
/// ```text
/// active → closed
/// ```
///
/// Voting is a self-loop on `active` and does not change the status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum PollStatus {
    Active,
    Closed,
}

impl PollStatus {
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Active => &[Self::Closed],
            Self::Closed => &[],
        }
    }

    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Closed => "closed",
        }
    }
}

impl fmt::Display for PollStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// VoteChoice
// ---------------------------------------------------------------------------

/// A single yes/no ballot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum VoteChoice {
    Yes,
    No,
}

impl VoteChoice {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Yes => "yes",
            Self::No => "no",
        }
    }
}

impl fmt::Display for VoteChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// FeedbackType
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackType {
    #[default]
    Complaint,
    Suggestion,
}

impl FeedbackType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Complaint => "complaint",
            Self::Suggestion => "suggestion",
        }
    }
}

impl fmt::Display for FeedbackType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// FeedbackStatus
// ---------------------------------------------------------------------------

/// Status of a complaint or suggestion.
///
/// ```text
/// open → review → resolved
/// open ─────────→ resolved
/// ```
///
/// Forward-only; `resolved` is a sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackStatus {
    Open,
    Review,
    Resolved,
}

impl FeedbackStatus {
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Open => &[Self::Review, Self::Resolved],
            Self::Review => &[Self::Resolved],
            Self::Resolved => &[],
        }
    }

    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Review => "review",
            Self::Resolved => "resolved",
        }
    }

    /// Badge text shown in the manager view.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::Review => "In Review",
            Self::Resolved => "Resolved",
        }
    }
}

impl fmt::Display for FeedbackStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// PaymentStatus
// ---------------------------------------------------------------------------

/// Status of a monthly mess fee.
///
/// ```text
/// pending → overdue → paid
/// pending ──────────→ paid
/// ```
///
/// `pending → overdue` is driven by an external clock comparing against the
/// due date. `paid` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Pending,
    Overdue,
    Paid,
}

impl PaymentStatus {
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Pending => &[Self::Overdue, Self::Paid],
            Self::Overdue => &[Self::Paid],
            Self::Paid => &[],
        }
    }

    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    #[must_use]
    pub const fn is_unpaid(self) -> bool {
        matches!(self, Self::Pending | Self::Overdue)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Overdue => "overdue",
            Self::Paid => "paid",
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// EntityType
// ---------------------------------------------------------------------------

/// Record kinds tracked by the audit log and named in errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    Announcement,
    Poll,
    Feedback,
    Payment,
    MealTiming,
}

impl EntityType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Announcement => "announcement",
            Self::Poll => "poll",
            Self::Feedback => "feedback",
            Self::Payment => "payment",
            Self::MealTiming => "meal_timing",
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// AuditAction
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum AuditAction {
    Created,
    Updated,
    Deleted,
    StatusChanged,
    Voted,
}

impl AuditAction {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Updated => "updated",
            Self::Deleted => "deleted",
            Self::StatusChanged => "status_changed",
            Self::Voted => "voted",
        }
    }
}

impl fmt::Display for AuditAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn meal_accepts_capitalized_alias() {
        let meal: Meal = serde_json::from_str("\"Dinner\"").unwrap();
        assert_eq!(meal, Meal::Dinner);
        assert_eq!(serde_json::to_string(&meal).unwrap(), "\"dinner\"");
    }

    #[test]
    fn status_changed_serializes_snake_case() {
        let json = serde_json::to_string(&AuditAction::StatusChanged).unwrap();
        assert_eq!(json, "\"status_changed\"");
        assert_eq!(
            serde_json::to_string(&EntityType::MealTiming).unwrap(),
            "\"meal_timing\""
        );
    }

    #[rstest]
    #[case(FeedbackStatus::Open, FeedbackStatus::Review, true)]
    #[case(FeedbackStatus::Open, FeedbackStatus::Resolved, true)]
    #[case(FeedbackStatus::Review, FeedbackStatus::Resolved, true)]
    #[case(FeedbackStatus::Review, FeedbackStatus::Open, false)]
    #[case(FeedbackStatus::Resolved, FeedbackStatus::Open, false)]
    #[case(FeedbackStatus::Resolved, FeedbackStatus::Review, false)]
    fn feedback_transitions(
        #[case] from: FeedbackStatus,
        #[case] to: FeedbackStatus,
        #[case] allowed: bool,
    ) {
        assert_eq!(from.can_transition_to(to), allowed);
    }

    #[rstest]
    #[case(PaymentStatus::Pending, PaymentStatus::Overdue, true)]
    #[case(PaymentStatus::Pending, PaymentStatus::Paid, true)]
    #[case(PaymentStatus::Overdue, PaymentStatus::Paid, true)]
    #[case(PaymentStatus::Overdue, PaymentStatus::Pending, false)]
    #[case(PaymentStatus::Paid, PaymentStatus::Overdue, false)]
    #[case(PaymentStatus::Paid, PaymentStatus::Pending, false)]
    fn payment_transitions(
        #[case] from: PaymentStatus,
        #[case] to: PaymentStatus,
        #[case] allowed: bool,
    ) {
        assert_eq!(from.can_transition_to(to), allowed);
    }

    #[test]
    fn poll_closed_is_terminal() {
        assert!(PollStatus::Active.can_transition_to(PollStatus::Closed));
        assert!(PollStatus::Closed.allowed_next_states().is_empty());
    }

    #[test]
    fn terminal_states_have_no_successors() {
        assert!(FeedbackStatus::Resolved.allowed_next_states().is_empty());
        assert!(PaymentStatus::Paid.allowed_next_states().is_empty());
    }

    #[test]
    fn unpaid_covers_pending_and_overdue() {
        assert!(PaymentStatus::Pending.is_unpaid());
        assert!(PaymentStatus::Overdue.is_unpaid());
        assert!(!PaymentStatus::Paid.is_unpaid());
    }

    #[test]
    fn default_deadlines_follow_meal() {
        assert_eq!(Meal::Breakfast.default_deadline(), "10:00 PM Previous Day");
        assert_eq!(Meal::Lunch.default_deadline(), "10:00 AM");
        assert_eq!(Meal::Dinner.default_deadline(), "6:00 PM");
    }

    #[test]
    fn display_matches_as_str() {
        assert_eq!(format!("{}", Meal::Lunch), "lunch");
        assert_eq!(format!("{}", AnnouncementCategory::Maintenance), "maintenance");
        assert_eq!(format!("{}", PollStatus::Closed), "closed");
        assert_eq!(format!("{}", VoteChoice::Yes), "yes");
        assert_eq!(format!("{}", FeedbackType::Suggestion), "suggestion");
        assert_eq!(format!("{}", FeedbackStatus::Review), "review");
        assert_eq!(format!("{}", PaymentStatus::Overdue), "overdue");
        assert_eq!(format!("{}", AuditAction::Voted), "voted");
        assert_eq!(FeedbackStatus::Review.label(), "In Review");
    }
}
