//! Serde helpers for wall-clock meal times.
//!
//! Meal windows are same-day local times written as 24h `HH:MM` strings
//! (`"07:00"`, `"19:30"`). Use with `#[serde(with = "clock_serde::hhmm")]`.
//!
//! # Example
//! ```ignore
//! use chrono::NaiveTime;
//! use mess_core::clock_serde;
//!
//! #[derive(Serialize, Deserialize)]
//! struct Window {
//!     #[serde(with = "clock_serde::hhmm")]
//!     pub start_time: NaiveTime,
//! }
//! ```

use chrono::NaiveTime;

use crate::errors::CoreError;

const FORMAT: &str = "%H:%M";

/// Parse a `HH:MM` (or `HH:MM:SS`) string into a `NaiveTime`.
///
/// # Errors
///
/// Returns `CoreError::Validation` if the string is not a valid 24h time.
pub fn parse_hhmm(raw: &str) -> Result<NaiveTime, CoreError> {
    let trimmed = raw.trim();
    NaiveTime::parse_from_str(trimmed, FORMAT)
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M:%S"))
        .map_err(|_| CoreError::validation(format!("invalid time '{raw}', expected HH:MM")))
}

/// Format a `NaiveTime` as `HH:MM`.
#[must_use]
pub fn format_hhmm(time: NaiveTime) -> String {
    time.format(FORMAT).to_string()
}

/// Serialize `NaiveTime` as a `HH:MM` string.
pub mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(time: &NaiveTime, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&super::format_hhmm(*time))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(d)?;
        super::parse_hhmm(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_short_and_long_forms() {
        let short = parse_hhmm("07:00").unwrap();
        let long = parse_hhmm("07:00:00").unwrap();
        assert_eq!(short, long);
        assert_eq!(format_hhmm(short), "07:00");
    }

    #[test]
    fn rejects_garbage() {
        let err = parse_hhmm("7 am").unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[test]
    fn rejects_out_of_range_hour() {
        assert!(parse_hhmm("25:00").is_err());
    }
}
