//! Hop records.

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull};

use crate::{record::RecordMetadata, timestamp::DateValue};

/// Hop entry as returned by the list endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hop {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(rename = "use", default)]
    pub usage_stage: Option<String>,
    /// Alpha acids, in percent.
    #[serde(default)]
    pub alpha: Option<f64>,
    /// Stock in grams.
    #[serde(default)]
    pub inventory: Option<f64>,
}

/// Full hop record from `/inventory/hops/{id}`.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HopDetail {
    #[serde(flatten)]
    pub summary: Hop,

    pub origin: Option<String>,
    pub usage: Option<String>,
    pub beta: Option<f64>,
    pub time: Option<f64>,
    pub ibu: Option<f64>,
    pub temp: Option<f64>,
    pub amount: Option<f64>,
    pub year: Option<i32>,

    /// Total oil, mL per 100 g.
    pub oil: Option<f64>,
    pub myrcene: Option<f64>,
    pub caryophyllene: Option<f64>,
    pub humulene: Option<f64>,
    pub cohumulone: Option<f64>,
    pub farnesene: Option<f64>,
    /// Hop storage index.
    pub hsi: Option<f64>,

    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub hidden: bool,
    pub notes: Option<String>,
    pub user_notes: Option<String>,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub used_in: String,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub substitutes: String,

    pub lot_number: Option<String>,
    pub best_before_date: Option<DateValue>,
    pub manufacturing_date: Option<DateValue>,

    #[serde(flatten)]
    pub metadata: RecordMetadata,
}
