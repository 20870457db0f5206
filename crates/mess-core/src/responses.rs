//! Response types rendered by the presentation layer.
//!
//! These structs define the JSON shape of snapshots and summaries such as
//! `mess poll stats`, `mess payment summary`, `mess dashboard`, and
//! `mess replay`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::RecordId;
use crate::entities::{Announcement, Feedback, MealTiming, PaymentRecord, Poll};
use crate::enums::{EntityType, VoteChoice};

/// Percentage of `part` in `whole`, rounded half up. Zero when `whole` is zero.
#[must_use]
pub fn percent(part: u64, whole: u64) -> u32 {
    if whole == 0 {
        return 0;
    }
    let rounded = (part * 200 + whole) / (whole * 2);
    u32::try_from(rounded).unwrap_or(u32::MAX)
}

/// Tally breakdown for a single poll.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct PollStats {
    pub poll_id: RecordId,
    pub yes: u32,
    pub no: u32,
    pub responses: u32,
    /// Eligible students who have not voted yet.
    pub pending: u32,
    /// Share of responses that said yes.
    pub yes_percentage: u32,
    /// Share of eligible students who responded.
    pub response_rate: u32,
}

impl PollStats {
    #[must_use]
    pub fn from_poll(poll: &Poll) -> Self {
        let responses = poll.responses();
        Self {
            poll_id: poll.id,
            yes: poll.yes_count,
            no: poll.no_count,
            responses,
            pending: poll.total_eligible.saturating_sub(responses),
            yes_percentage: percent(u64::from(poll.yes_count), u64::from(responses)),
            response_rate: percent(u64::from(responses), u64::from(poll.total_eligible)),
        }
    }
}

/// Manager-facing headline numbers across all polls.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct PollOverview {
    pub active_polls: u32,
    pub closed_polls: u32,
    /// Sum of yes votes across active polls.
    pub total_yes_active: u32,
    /// Responses over eligible, across active polls.
    pub response_rate: u32,
}

/// Student-facing poll snapshot carrying the viewer's own ballot.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct PollView {
    #[serde(flatten)]
    pub poll: Poll,
    /// `None` when the viewer has not voted.
    pub user_vote: Option<VoteChoice>,
}

/// Complaint counts per status.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct FeedbackSummary {
    pub open: u32,
    pub review: u32,
    pub resolved: u32,
    pub total: u32,
}

/// Fee collection totals.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct PaymentSummary {
    pub paid: u32,
    pub pending: u32,
    pub overdue: u32,
    pub total_collected: u64,
    pub total_outstanding: u64,
    pub currency: String,
}

/// Everything the dashboard pages show at a glance.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DashboardSnapshot {
    pub announcement_count: u32,
    pub latest_announcements: Vec<Announcement>,
    pub polls: PollOverview,
    pub feedback: FeedbackSummary,
    pub payments: PaymentSummary,
    pub menu: Vec<MealTiming>,
}

/// Result of a successful command, carrying the record it touched.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(tag = "kind", content = "record", rename_all = "snake_case")]
pub enum Outcome {
    Announcement(Announcement),
    Poll(Poll),
    Feedback(Feedback),
    Payment(PaymentRecord),
    Payments(Vec<PaymentRecord>),
    MealTiming(MealTiming),
    Deleted { entity_type: EntityType, id: RecordId },
}

/// One failed line of a replayed command script.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ReplayFailure {
    /// 1-based line number in the script.
    pub line: u32,
    pub op: String,
    pub error: String,
}

/// Response from `mess replay`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ReplayResponse {
    pub script_lines: u32,
    pub applied: u32,
    pub failed: u32,
    pub failures: Vec<ReplayFailure>,
    pub duration_ms: u64,
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::enums::{Meal, PollStatus};

    fn poll(yes: u32, no: u32, eligible: u32) -> Poll {
        Poll {
            id: 1,
            meal: Meal::Dinner,
            date_label: "Today".into(),
            question: "Will you come for dinner today?".into(),
            deadline: "6:00 PM".into(),
            status: PollStatus::Active,
            yes_count: yes,
            no_count: no,
            total_eligible: eligible,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn percent_rounds_half_up() {
        assert_eq!(percent(1, 2), 50);
        assert_eq!(percent(1, 3), 33);
        assert_eq!(percent(2, 3), 67);
        assert_eq!(percent(1, 8), 13);
        assert_eq!(percent(5, 0), 0);
    }

    #[test]
    fn stats_match_manager_view() {
        let stats = PollStats::from_poll(&poll(145, 23, 248));
        assert_eq!(stats.responses, 168);
        assert_eq!(stats.pending, 80);
        assert_eq!(stats.yes_percentage, 86);
        assert_eq!(stats.response_rate, 68);
    }

    #[test]
    fn stats_for_empty_poll_are_zero() {
        let stats = PollStats::from_poll(&poll(0, 0, 248));
        assert_eq!(stats.yes_percentage, 0);
        assert_eq!(stats.response_rate, 0);
        assert_eq!(stats.pending, 248);
    }

    #[test]
    fn poll_view_flattens_poll_fields() {
        let view = PollView {
            poll: poll(1, 0, 10),
            user_vote: Some(VoteChoice::Yes),
        };
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["meal"], "dinner");
        assert_eq!(json["user_vote"], "yes");
    }

    #[test]
    fn outcome_is_tagged_by_kind() {
        let outcome = Outcome::Deleted {
            entity_type: EntityType::Announcement,
            id: 4,
        };
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["kind"], "deleted");
        assert_eq!(json["record"]["id"], 4);
    }
}
