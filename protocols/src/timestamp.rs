//! Date and time values as the inventory API encodes them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Timestamps with more digits than this are milliseconds.
const SECONDS_MAX_DIGITS: usize = 10;

/// Firestore-style timestamp attached to every record (`_created`, `_timestamp`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timestamp {
    #[serde(rename = "_seconds", alias = "seconds")]
    pub seconds: i64,
    #[serde(rename = "_nanoseconds", alias = "nanoseconds", default)]
    pub nanoseconds: u32,
}

impl Timestamp {
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.seconds, self.nanoseconds)
    }
}

/// A date field that is either a Unix timestamp (seconds or milliseconds) or
/// a preformatted string, depending on the record type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DateValue {
    Unix(i64),
    Text(String),
}

impl DateValue {
    /// ISO 8601 rendering (UTC, no offset suffix). Text values pass through.
    pub fn to_iso8601(&self) -> String {
        match self {
            DateValue::Unix(value) => unix_to_iso8601(*value).unwrap_or_else(|| value.to_string()),
            DateValue::Text(text) => text.clone(),
        }
    }
}

impl std::fmt::Display for DateValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_iso8601())
    }
}

/// Converts a Unix timestamp in seconds or milliseconds to ISO 8601.
///
/// Values with more than ten digits are read as milliseconds.
pub fn unix_to_iso8601(value: i64) -> Option<String> {
    let digits = value.unsigned_abs().to_string().len();
    let datetime = if digits > SECONDS_MAX_DIGITS {
        DateTime::from_timestamp_millis(value)?
    } else {
        DateTime::from_timestamp(value, 0)?
    };
    Some(datetime.format("%Y-%m-%dT%H:%M:%S").to_string())
}
