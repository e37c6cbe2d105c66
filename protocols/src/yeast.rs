//! Yeast records.

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull};

use crate::{record::RecordMetadata, timestamp::DateValue};

/// Yeast entry as returned by the list endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Yeast {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    /// Apparent attenuation, in percent.
    #[serde(default)]
    pub attenuation: Option<f64>,
    /// Stock in packages.
    #[serde(default)]
    pub inventory: Option<f64>,
}

/// Full yeast record from `/inventory/yeasts/{id}`.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YeastDetail {
    #[serde(flatten)]
    pub summary: Yeast,

    pub laboratory: Option<String>,
    pub product_id: Option<String>,
    /// Dry, liquid, slurry or culture.
    pub form: Option<String>,
    pub unit: Option<String>,
    pub amount: Option<f64>,
    pub min_attenuation: Option<f64>,
    pub max_attenuation: Option<f64>,
    pub flocculation: Option<String>,
    pub min_temp: Option<f64>,
    pub max_temp: Option<f64>,
    pub max_abv: Option<f64>,
    pub cells_per_pkg: Option<f64>,
    pub age_rate: Option<f64>,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub ferments_all: bool,
    pub description: Option<String>,

    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub hidden: bool,
    pub user_notes: Option<String>,

    pub lot_number: Option<String>,
    pub best_before_date: Option<DateValue>,
    pub manufacturing_date: Option<DateValue>,

    #[serde(flatten)]
    pub metadata: RecordMetadata,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yeast_detail() {
        let json = r#"{
            "_id": "default-016efc",
            "attenuation": 81,
            "inventory": 2,
            "name": "Safale American",
            "type": "Ale",
            "laboratory": "Fermentis",
            "productId": "US-05",
            "form": "Dry",
            "minTemp": 15,
            "maxTemp": 22,
            "fermentsAll": false,
            "lotNumber": "Y-7"
        }"#;
        let detail: YeastDetail = serde_json::from_str(json).unwrap();
        assert_eq!(detail.summary.attenuation, Some(81.0));
        assert_eq!(detail.product_id.as_deref(), Some("US-05"));
        assert_eq!(detail.form.as_deref(), Some("Dry"));
        assert_eq!(detail.lot_number.as_deref(), Some("Y-7"));
        assert!(detail.best_before_date.is_none());
        assert!(detail.metadata.rev.is_none());
    }
}
