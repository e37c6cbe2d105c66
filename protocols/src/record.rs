//! Bookkeeping fields shared by every detail record.

use serde::{Deserialize, Serialize};

use crate::timestamp::Timestamp;

/// Revision and audit metadata the API attaches to each stored record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordMetadata {
    #[serde(rename = "_rev", default, skip_serializing_if = "Option::is_none")]
    pub rev: Option<String>,
    #[serde(rename = "_version", default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(rename = "_created", default, skip_serializing_if = "Option::is_none")]
    pub created: Option<Timestamp>,
    #[serde(rename = "_timestamp", default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<Timestamp>,
    #[serde(rename = "_timestamp_ms", default, skip_serializing_if = "Option::is_none")]
    pub timestamp_ms: Option<i64>,
}
