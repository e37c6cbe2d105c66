//! Category-tagged views over the per-category record types.

use serde::{Deserialize, Serialize};

use crate::{
    category::InventoryCategory,
    fermentable::{Fermentable, FermentableDetail},
    hop::{Hop, HopDetail},
    yeast::{Yeast, YeastDetail},
};

/// Summary list of one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "category", content = "items", rename_all = "lowercase")]
pub enum InventoryList {
    Fermentables(Vec<Fermentable>),
    Hops(Vec<Hop>),
    Yeasts(Vec<Yeast>),
}

impl InventoryList {
    pub fn category(&self) -> InventoryCategory {
        match self {
            InventoryList::Fermentables(_) => InventoryCategory::Fermentables,
            InventoryList::Hops(_) => InventoryCategory::Hops,
            InventoryList::Yeasts(_) => InventoryCategory::Yeasts,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            InventoryList::Fermentables(items) => items.len(),
            InventoryList::Hops(items) => items.len(),
            InventoryList::Yeasts(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Full record of one item, tagged with its category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "category", content = "item", rename_all = "lowercase")]
pub enum InventoryDetail {
    Fermentable(FermentableDetail),
    Hop(HopDetail),
    Yeast(YeastDetail),
}

impl InventoryDetail {
    pub fn category(&self) -> InventoryCategory {
        match self {
            InventoryDetail::Fermentable(_) => InventoryCategory::Fermentables,
            InventoryDetail::Hop(_) => InventoryCategory::Hops,
            InventoryDetail::Yeast(_) => InventoryCategory::Yeasts,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            InventoryDetail::Fermentable(d) => &d.summary.id,
            InventoryDetail::Hop(d) => &d.summary.id,
            InventoryDetail::Yeast(d) => &d.summary.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            InventoryDetail::Fermentable(d) => &d.summary.name,
            InventoryDetail::Hop(d) => &d.summary.name,
            InventoryDetail::Yeast(d) => &d.summary.name,
        }
    }
}

impl From<FermentableDetail> for InventoryDetail {
    fn from(detail: FermentableDetail) -> Self {
        InventoryDetail::Fermentable(detail)
    }
}

impl From<HopDetail> for InventoryDetail {
    fn from(detail: HopDetail) -> Self {
        InventoryDetail::Hop(detail)
    }
}

impl From<YeastDetail> for InventoryDetail {
    fn from(detail: YeastDetail) -> Self {
        InventoryDetail::Yeast(detail)
    }
}
