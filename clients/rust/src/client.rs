//! HTTP client for the Brewfather v2 inventory endpoints.

use std::time::Duration;

use async_trait::async_trait;
use brewfather_protocol::{
    Fermentable, FermentableDetail, Hop, HopDetail, InventoryCategory, ListQueryParams, Yeast,
    YeastDetail,
};
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::{
    api::InventoryApi,
    credentials::Credentials,
    error::{ClientError, ClientResult},
    proxy::{apply_proxy_to_builder, ProxyConfig},
};

pub const DEFAULT_BASE_URL: &str = "https://api.brewfather.app/v2";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Error bodies longer than this are cut before they end up in an error.
const MAX_ERROR_BODY_CHARS: usize = 512;

/// Client for the `/inventory` endpoints.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct BrewfatherClient {
    http: reqwest::Client,
    base_url: Url,
    credentials: Credentials,
}

#[derive(Debug, Clone)]
pub struct BrewfatherClientBuilder {
    base_url: String,
    timeout: Duration,
    proxy: Option<ProxyConfig>,
    credentials: Option<Credentials>,
}

impl Default for BrewfatherClientBuilder {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            proxy: None,
            credentials: None,
        }
    }
}

impl BrewfatherClientBuilder {
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn proxy(mut self, proxy: Option<ProxyConfig>) -> Self {
        self.proxy = proxy;
        self
    }

    /// Explicit credentials. Without them `build` reads the environment.
    #[must_use]
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    pub fn build(self) -> ClientResult<BrewfatherClient> {
        let credentials = match self.credentials {
            Some(credentials) => credentials,
            None => Credentials::from_env()?,
        };

        let base_url = Url::parse(&self.base_url).map_err(|e| ClientError::InvalidBaseUrl {
            url: self.base_url.clone(),
            reason: e.to_string(),
        })?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::InvalidBaseUrl {
                url: self.base_url,
                reason: "URL cannot be used as a base".to_string(),
            });
        }

        let mut builder = reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(concat!("brewfather-client/", env!("CARGO_PKG_VERSION")));
        if let Some(proxy) = &self.proxy {
            builder = apply_proxy_to_builder(builder, proxy)?;
        }

        Ok(BrewfatherClient {
            http: builder.build()?,
            base_url,
            credentials,
        })
    }
}

impl BrewfatherClient {
    pub fn builder() -> BrewfatherClientBuilder {
        BrewfatherClientBuilder::default()
    }

    /// Client for the public API with credentials from the environment.
    pub fn from_env() -> ClientResult<Self> {
        Self::builder().build()
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `{base}/inventory/{category}?{params}`
    pub fn list_url(
        &self,
        category: InventoryCategory,
        params: Option<&ListQueryParams>,
    ) -> ClientResult<Url> {
        let mut url = self.endpoint(&[category.as_str()])?;
        if let Some(params) = params {
            params.validate()?;
            if !params.is_empty() {
                url.set_query(Some(&params.to_query_string()));
            }
        }
        Ok(url)
    }

    /// `{base}/inventory/{category}/{id}`, with `id` encoded as one path segment.
    pub fn detail_url(&self, category: InventoryCategory, id: &str) -> ClientResult<Url> {
        self.endpoint(&[category.as_str(), id])
    }

    fn endpoint(&self, segments: &[&str]) -> ClientResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidBaseUrl {
                url: self.base_url.to_string(),
                reason: "URL cannot be used as a base".to_string(),
            })?
            .pop_if_empty()
            .push("inventory")
            .extend(segments);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> ClientResult<T> {
        debug!(url = %url, "Requesting inventory API");

        let response = self
            .http
            .get(url.clone())
            .basic_auth(self.credentials.user_id(), Some(self.credentials.api_key()))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            debug!(url = %url, status = %status, "Inventory API returned an error status");
            return Err(ClientError::Status {
                status,
                url: url.to_string(),
                body: truncate(body),
            });
        }

        serde_json::from_str(&body).map_err(|source| ClientError::Decode {
            url: url.to_string(),
            source,
        })
    }

    async fn get_list<T: DeserializeOwned>(
        &self,
        category: InventoryCategory,
        params: Option<&ListQueryParams>,
    ) -> ClientResult<Vec<T>> {
        let url = self.list_url(category, params)?;
        self.get_json(url).await
    }

    async fn get_detail<T: DeserializeOwned>(
        &self,
        category: InventoryCategory,
        id: &str,
    ) -> ClientResult<T> {
        let url = self.detail_url(category, id)?;
        self.get_json(url).await
    }
}

fn truncate(mut body: String) -> String {
    if let Some((idx, _)) = body.char_indices().nth(MAX_ERROR_BODY_CHARS) {
        body.truncate(idx);
        body.push_str("...");
    }
    body
}

#[async_trait]
impl InventoryApi for BrewfatherClient {
    async fn fermentables(
        &self,
        params: Option<&ListQueryParams>,
    ) -> ClientResult<Vec<Fermentable>> {
        self.get_list(InventoryCategory::Fermentables, params).await
    }

    async fn fermentable(&self, id: &str) -> ClientResult<FermentableDetail> {
        self.get_detail(InventoryCategory::Fermentables, id).await
    }

    async fn hops(&self, params: Option<&ListQueryParams>) -> ClientResult<Vec<Hop>> {
        self.get_list(InventoryCategory::Hops, params).await
    }

    async fn hop(&self, id: &str) -> ClientResult<HopDetail> {
        self.get_detail(InventoryCategory::Hops, id).await
    }

    async fn yeasts(&self, params: Option<&ListQueryParams>) -> ClientResult<Vec<Yeast>> {
        self.get_list(InventoryCategory::Yeasts, params).await
    }

    async fn yeast(&self, id: &str) -> ClientResult<YeastDetail> {
        self.get_detail(InventoryCategory::Yeasts, id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> BrewfatherClient {
        BrewfatherClient::builder()
            .base_url(base)
            .credentials(Credentials::new("user", "key"))
            .build()
            .unwrap()
    }

    #[test]
    fn test_list_url_without_params() {
        let url = client(DEFAULT_BASE_URL)
            .list_url(InventoryCategory::Fermentables, None)
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.brewfather.app/v2/inventory/fermentables"
        );
    }

    #[test]
    fn test_list_url_with_params() {
        let params = ListQueryParams::new()
            .with_inventory_exists(true)
            .with_limit(20);
        let url = client(DEFAULT_BASE_URL)
            .list_url(InventoryCategory::Hops, Some(&params))
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.brewfather.app/v2/inventory/hops?inventory_exists=true&limit=20"
        );
    }

    #[test]
    fn test_list_url_empty_params_has_no_query() {
        let url = client(DEFAULT_BASE_URL)
            .list_url(InventoryCategory::Yeasts, Some(&ListQueryParams::new()))
            .unwrap();
        assert_eq!(url.query(), None);
    }

    #[test]
    fn test_list_url_rejects_invalid_params() {
        let params = ListQueryParams::new().with_limit(500);
        let err = client(DEFAULT_BASE_URL)
            .list_url(InventoryCategory::Hops, Some(&params))
            .unwrap_err();
        assert!(matches!(err, ClientError::Query(_)));
    }

    #[test]
    fn test_detail_url_encodes_id() {
        let url = client("http://localhost:8080/v2/")
            .detail_url(InventoryCategory::Yeasts, "abc/def ghi")
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:8080/v2/inventory/yeasts/abc%2Fdef%20ghi"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        let err = BrewfatherClient::builder()
            .base_url("not a url")
            .credentials(Credentials::new("user", "key"))
            .build()
            .unwrap_err();
        assert!(matches!(err, ClientError::InvalidBaseUrl { .. }));

        let err = BrewfatherClient::builder()
            .base_url("mailto:brewer@example.com")
            .credentials(Credentials::new("user", "key"))
            .build()
            .unwrap_err();
        assert!(matches!(err, ClientError::InvalidBaseUrl { .. }));
    }

    #[test]
    fn test_truncate_long_body() {
        let body = "x".repeat(MAX_ERROR_BODY_CHARS + 10);
        let truncated = truncate(body);
        assert_eq!(truncated.len(), MAX_ERROR_BODY_CHARS + 3);
        assert!(truncated.ends_with("..."));
        assert_eq!(truncate("short".to_string()), "short");
    }
}
