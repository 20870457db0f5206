use chrono::NaiveTime;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::clock_serde;
use crate::enums::Meal;

/// Serving window and menu for one meal. One per meal, keyed by `meal`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct MealTiming {
    pub meal: Meal,
    #[serde(with = "clock_serde::hhmm")]
    #[schemars(with = "String")]
    pub start_time: NaiveTime,
    #[serde(with = "clock_serde::hhmm")]
    #[schemars(with = "String")]
    pub end_time: NaiveTime,
    /// Menu item names in display order. Duplicates are allowed.
    pub items: Vec<String>,
}

impl MealTiming {
    /// Window rendered as `"07:00 - 09:00"`.
    #[must_use]
    pub fn window_label(&self) -> String {
        format!(
            "{} - {}",
            clock_serde::format_hhmm(self.start_time),
            clock_serde::format_hhmm(self.end_time)
        )
    }
}
