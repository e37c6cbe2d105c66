//! Inventory API abstraction.
//!
//! Consumers depend on [`InventoryApi`] rather than on the concrete client so
//! that a test double can stand in for the remote service.

use async_trait::async_trait;
use brewfather_protocol::{
    Fermentable, FermentableDetail, Hop, HopDetail, InventoryCategory, InventoryDetail,
    InventoryList, ListQueryParams, Yeast, YeastDetail,
};

use crate::error::ClientResult;

#[async_trait]
pub trait InventoryApi: Send + Sync {
    async fn fermentables(&self, params: Option<&ListQueryParams>)
        -> ClientResult<Vec<Fermentable>>;

    async fn fermentable(&self, id: &str) -> ClientResult<FermentableDetail>;

    async fn hops(&self, params: Option<&ListQueryParams>) -> ClientResult<Vec<Hop>>;

    async fn hop(&self, id: &str) -> ClientResult<HopDetail>;

    async fn yeasts(&self, params: Option<&ListQueryParams>) -> ClientResult<Vec<Yeast>>;

    async fn yeast(&self, id: &str) -> ClientResult<YeastDetail>;

    /// Summary list of `category`.
    async fn list(
        &self,
        category: InventoryCategory,
        params: Option<&ListQueryParams>,
    ) -> ClientResult<InventoryList> {
        Ok(match category {
            InventoryCategory::Fermentables => {
                InventoryList::Fermentables(self.fermentables(params).await?)
            }
            InventoryCategory::Hops => InventoryList::Hops(self.hops(params).await?),
            InventoryCategory::Yeasts => InventoryList::Yeasts(self.yeasts(params).await?),
        })
    }

    /// Full record of item `id` in `category`.
    async fn detail(&self, category: InventoryCategory, id: &str) -> ClientResult<InventoryDetail> {
        Ok(match category {
            InventoryCategory::Fermentables => self.fermentable(id).await?.into(),
            InventoryCategory::Hops => self.hop(id).await?.into(),
            InventoryCategory::Yeasts => self.yeast(id).await?.into(),
        })
    }
}
