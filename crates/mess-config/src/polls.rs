//! Attendance poll configuration.

use serde::{Deserialize, Serialize};

/// Hostel headcount used as the response-rate denominator.
const fn default_total_eligible() -> u32 {
    248
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PollConfig {
    /// Eligible voters stamped onto polls created without an explicit count.
    #[serde(default = "default_total_eligible")]
    pub total_eligible: u32,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            total_eligible: default_total_eligible(),
        }
    }
}
