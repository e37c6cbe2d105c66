//! Inventory categories and their URL segments.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Inventory category, serialized as its URL path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum InventoryCategory {
    /// Malts, grains, adjuncts and sugars.
    Fermentables,
    Hops,
    Yeasts,
}

impl InventoryCategory {
    pub const ALL: [InventoryCategory; 3] = [
        InventoryCategory::Fermentables,
        InventoryCategory::Hops,
        InventoryCategory::Yeasts,
    ];

    /// Path segment used by the inventory endpoints.
    pub fn as_str(&self) -> &'static str {
        match self {
            InventoryCategory::Fermentables => "fermentables",
            InventoryCategory::Hops => "hops",
            InventoryCategory::Yeasts => "yeasts",
        }
    }

    /// Human-readable title.
    pub fn title(&self) -> &'static str {
        match self {
            InventoryCategory::Fermentables => "Fermentables",
            InventoryCategory::Hops => "Hops",
            InventoryCategory::Yeasts => "Yeasts",
        }
    }

    /// Unit the `inventory` quantity of this category is expressed in.
    pub fn inventory_unit(&self) -> &'static str {
        match self {
            InventoryCategory::Fermentables => "kg",
            InventoryCategory::Hops => "grams",
            InventoryCategory::Yeasts => "pkg",
        }
    }
}

impl std::fmt::Display for InventoryCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for InventoryCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("fermentables") || s.eq_ignore_ascii_case("fermentable") {
            Ok(InventoryCategory::Fermentables)
        } else if s.eq_ignore_ascii_case("hops") || s.eq_ignore_ascii_case("hop") {
            Ok(InventoryCategory::Hops)
        } else if s.eq_ignore_ascii_case("yeasts") || s.eq_ignore_ascii_case("yeast") {
            Ok(InventoryCategory::Yeasts)
        } else {
            Err(format!("Unknown inventory category: {}", s))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_round_trips_through_str() {
        for category in InventoryCategory::ALL {
            assert_eq!(category.as_str().parse::<InventoryCategory>(), Ok(category));
            assert_eq!(category.to_string(), category.as_str());
        }
    }

    #[test]
    fn test_category_parse_is_lenient() {
        assert_eq!("Hop".parse(), Ok(InventoryCategory::Hops));
        assert_eq!(" YEASTS ".parse(), Ok(InventoryCategory::Yeasts));
        assert!("miscs".parse::<InventoryCategory>().is_err());
    }

    #[test]
    fn test_category_serde_uses_segment() {
        let json = serde_json::to_string(&InventoryCategory::Fermentables).unwrap();
        assert_eq!(json, "\"fermentables\"");
        let parsed: InventoryCategory = serde_json::from_str("\"hops\"").unwrap();
        assert_eq!(parsed, InventoryCategory::Hops);
    }
}
