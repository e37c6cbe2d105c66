//! In-memory [`InventoryApi`] for unit tests.

use std::{
    collections::HashSet,
    sync::atomic::{AtomicUsize, Ordering},
    time::Duration,
};

use async_trait::async_trait;
use brewfather_client::{ClientError, ClientResult, InventoryApi};
use brewfather_protocol::{
    Fermentable, FermentableDetail, Hop, HopDetail, ListQueryParams, Yeast, YeastDetail,
};
use reqwest::StatusCode;
use serde_json::Value;

#[derive(Debug, Default)]
pub(crate) struct FakeInventory {
    fermentables: Vec<FermentableDetail>,
    hops: Vec<HopDetail>,
    yeasts: Vec<YeastDetail>,
    failing: HashSet<String>,
    delay: Duration,
    in_flight: AtomicUsize,
    peak: AtomicUsize,
    detail_calls: AtomicUsize,
}

impl FakeInventory {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_fermentable(mut self, record: Value) -> Self {
        self.fermentables
            .push(serde_json::from_value(record).expect("fermentable fixture"));
        self
    }

    pub(crate) fn with_hop(mut self, record: Value) -> Self {
        self.hops
            .push(serde_json::from_value(record).expect("hop fixture"));
        self
    }

    pub(crate) fn with_yeast(mut self, record: Value) -> Self {
        self.yeasts
            .push(serde_json::from_value(record).expect("yeast fixture"));
        self
    }

    /// Detail lookups of `id` answer with a 500.
    pub(crate) fn failing(mut self, id: &str) -> Self {
        self.failing.insert(id.to_string());
        self
    }

    pub(crate) fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub(crate) fn peak(&self) -> usize {
        self.peak.load(Ordering::SeqCst)
    }

    pub(crate) fn detail_calls(&self) -> usize {
        self.detail_calls.load(Ordering::SeqCst)
    }

    async fn lookup<T: Clone>(&self, id: &str, found: Option<&T>) -> ClientResult<T> {
        self.detail_calls.fetch_add(1, Ordering::SeqCst);
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak.fetch_max(now, Ordering::SeqCst);

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        if self.failing.contains(id) {
            return Err(status_error(StatusCode::INTERNAL_SERVER_ERROR, id));
        }
        found
            .cloned()
            .ok_or_else(|| status_error(StatusCode::NOT_FOUND, id))
    }
}

fn status_error(status: StatusCode, id: &str) -> ClientError {
    ClientError::Status {
        status,
        url: format!("http://fake.test/inventory/{id}"),
        body: String::new(),
    }
}

fn page<T: Clone>(items: impl Iterator<Item = T>, params: Option<&ListQueryParams>) -> Vec<T> {
    let limit = params
        .and_then(|p| p.limit)
        .map_or(usize::MAX, |l| l as usize);
    items.take(limit).collect()
}

#[async_trait]
impl InventoryApi for FakeInventory {
    async fn fermentables(
        &self,
        params: Option<&ListQueryParams>,
    ) -> ClientResult<Vec<Fermentable>> {
        Ok(page(
            self.fermentables.iter().map(|d| d.summary.clone()),
            params,
        ))
    }

    async fn fermentable(&self, id: &str) -> ClientResult<FermentableDetail> {
        let found = self.fermentables.iter().find(|d| d.summary.id == id);
        self.lookup(id, found).await
    }

    async fn hops(&self, params: Option<&ListQueryParams>) -> ClientResult<Vec<Hop>> {
        Ok(page(self.hops.iter().map(|d| d.summary.clone()), params))
    }

    async fn hop(&self, id: &str) -> ClientResult<HopDetail> {
        let found = self.hops.iter().find(|d| d.summary.id == id);
        self.lookup(id, found).await
    }

    async fn yeasts(&self, params: Option<&ListQueryParams>) -> ClientResult<Vec<Yeast>> {
        Ok(page(self.yeasts.iter().map(|d| d.summary.clone()), params))
    }

    async fn yeast(&self, id: &str) -> ClientResult<YeastDetail> {
        let found = self.yeasts.iter().find(|d| d.summary.id == id);
        self.lookup(id, found).await
    }
}
