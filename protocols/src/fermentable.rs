//! Fermentable records (malts, grains, adjuncts, sugars).

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull};

use crate::{record::RecordMetadata, timestamp::DateValue};

/// Fermentable entry as returned by the list endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fermentable {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub supplier: Option<String>,
    /// Stock in kilograms.
    #[serde(default)]
    pub inventory: Option<f64>,
    #[serde(default)]
    pub attenuation: Option<f64>,
}

/// Full fermentable record from `/inventory/fermentables/{id}`.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FermentableDetail {
    #[serde(flatten)]
    pub summary: Fermentable,

    pub origin: Option<String>,
    pub grain_category: Option<String>,
    pub potential: Option<f64>,
    /// Extract yield, in percent.
    pub potential_percentage: Option<f64>,
    pub color: Option<f64>,
    pub moisture: Option<f64>,
    pub protein: Option<f64>,
    pub diastatic_power: Option<f64>,
    pub friability: Option<f64>,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub not_fermentable: bool,
    pub max_in_batch: Option<f64>,
    pub coarse_fine_diff: Option<f64>,
    /// Percent extract, fine-ground dry basis.
    pub fgdb: Option<f64>,
    /// Percent extract, coarse-ground dry basis.
    pub cgdb: Option<f64>,
    /// Free amino nitrogen.
    pub fan: Option<f64>,
    pub acid: Option<f64>,
    pub ibu_per_amount: Option<f64>,
    pub percentage: Option<f64>,
    pub amount: Option<f64>,
    pub cost_per_amount: Option<f64>,

    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub hidden: bool,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub excluded: bool,
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_wire_format() {
        let json = r#"{
            "_id": "default-03044fe",
            "attenuation": 0,
            "inventory": 0.7,
            "name": "Rice Hulls",
            "supplier": "Briess",
            "type": "Adjunct"
        }"#;
        let item: Fermentable = serde_json::from_str(json).unwrap();
        assert_eq!(item.id, "default-03044fe");
        assert_eq!(item.kind.as_deref(), Some("Adjunct"));
        assert_eq!(item.inventory, Some(0.7));
    }

    #[test]
    fn test_detail_aliases_and_defaults() {
        let json = r#"{
            "_id": "f-1",
            "name": "Pale Ale Malt",
            "type": "Grain",
            "supplier": "Weyermann",
            "inventory": 12.5,
            "potential": 1.037,
            "potentialPercentage": 80.4,
            "grainCategory": "Base",
            "diastaticPower": 250,
            "notFermentable": null,
            "lotNumber": "L-42",
            "bestBeforeDate": 1767225600000,
            "substitutes": null,
            "_rev": "abc",
            "_version": "2.11.6",
            "_created": {"_seconds": 1612000000, "_nanoseconds": 0}
        }"#;
        let detail: FermentableDetail = serde_json::from_str(json).unwrap();
        assert_eq!(detail.summary.name, "Pale Ale Malt");
        assert_eq!(detail.potential_percentage, Some(80.4));
        assert_eq!(detail.grain_category.as_deref(), Some("Base"));
        assert_eq!(detail.diastatic_power, Some(250.0));
        assert!(!detail.not_fermentable);
        assert!(detail.substitutes.is_empty());
        assert_eq!(detail.lot_number.as_deref(), Some("L-42"));
        assert_eq!(
            detail.best_before_date.unwrap().to_string(),
            "2026-01-01T00:00:00"
        );
        assert_eq!(detail.metadata.rev.as_deref(), Some("abc"));
        assert_eq!(detail.metadata.created.unwrap().seconds, 1_612_000_000);
    }
}
