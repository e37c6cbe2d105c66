//! Inventory summary assembly.
//!
//! Each category pipeline lists the category, fetches every item's detail
//! record through the batch scheduler and projects summary and detail into a
//! [`SummaryRow`].

mod assembler;
mod row;

use brewfather_batch::BatchSize;
use brewfather_client::InventoryApi;
use brewfather_protocol::InventoryCategory;

pub use assembler::{fermentables_summary, hops_summary, yeasts_summary};
pub use row::SummaryRow;

use crate::error::McpResult;

/// Summary rows of every category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InventoryOverview {
    pub fermentables: Vec<SummaryRow>,
    pub hops: Vec<SummaryRow>,
    pub yeasts: Vec<SummaryRow>,
}

impl InventoryOverview {
    pub fn section(&self, category: InventoryCategory) -> &[SummaryRow] {
        match category {
            InventoryCategory::Fermentables => &self.fermentables,
            InventoryCategory::Hops => &self.hops,
            InventoryCategory::Yeasts => &self.yeasts,
        }
    }
}

/// Runs the three category pipelines concurrently, each bounded by
/// `batch_size`. Fails as soon as any of them fails.
pub async fn inventory_overview<A>(api: &A, batch_size: BatchSize) -> McpResult<InventoryOverview>
where
    A: InventoryApi + ?Sized,
{
    let (fermentables, hops, yeasts) = tokio::try_join!(
        fermentables_summary(api, batch_size),
        hops_summary(api, batch_size),
        yeasts_summary(api, batch_size),
    )?;

    Ok(InventoryOverview {
        fermentables,
        hops,
        yeasts,
    })
}
