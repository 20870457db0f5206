use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::RecordId;
use crate::enums::{Meal, PollStatus};

/// A yes/no attendance poll for one meal occurrence.
///
/// `yes_count + no_count` never exceeds `total_eligible`. Once `status` is
/// `closed` the tallies are frozen.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Poll {
    pub id: RecordId,
    pub meal: Meal,
    /// Free-form day label ("Today", "Tomorrow").
    pub date_label: String,
    pub question: String,
    /// Free-form voting cutoff label ("6:00 PM").
    pub deadline: String,
    pub status: PollStatus,
    pub yes_count: u32,
    pub no_count: u32,
    pub total_eligible: u32,
    pub created_at: DateTime<Utc>,
}

impl Poll {
    /// Number of ballots cast so far.
    #[must_use]
    pub const fn responses(&self) -> u32 {
        self.yes_count + self.no_count
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == PollStatus::Active
    }
}

/// Fields supplied when opening a poll. Omitted fields get meal-based defaults.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewPoll {
    pub meal: Meal,
    #[serde(default = "default_date_label")]
    pub date_label: String,
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub deadline: Option<String>,
    /// Falls back to the configured hostel headcount.
    #[serde(default)]
    pub total_eligible: Option<u32>,
}

fn default_date_label() -> String {
    String::from("Today")
}

impl NewPoll {
    /// A poll for `meal` today with every other field defaulted.
    #[must_use]
    pub fn for_meal(meal: Meal) -> Self {
        Self {
            meal,
            date_label: default_date_label(),
            question: None,
            deadline: None,
            total_eligible: None,
        }
    }
}
