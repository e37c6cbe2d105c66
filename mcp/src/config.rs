//! Server configuration.
//!
//! Loaded from an optional YAML file. Every field has a default, so an empty
//! document (or no file at all) yields a working configuration. Credentials are
//! not part of it; they always come from the environment.

use std::{path::Path, time::Duration};

use brewfather_batch::BatchSize;
use brewfather_client::{BrewfatherClient, BrewfatherClientBuilder, ProxyConfig, DEFAULT_BASE_URL};
use serde::{Deserialize, Serialize};

use crate::error::{McpError, McpResult};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Root of the Brewfather API, e.g. "https://api.brewfather.app/v2"
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Maximum number of detail requests in flight per category
    #[serde(default = "default_detail_batch_size")]
    pub detail_batch_size: usize,

    /// Per-request timeout in seconds
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Outbound proxy. Falls back to the proxy environment variables when unset.
    #[serde(default)]
    pub proxy: Option<ProxyConfig>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_detail_batch_size() -> usize {
    BatchSize::DEFAULT.get()
}

fn default_request_timeout_secs() -> u64 {
    30
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            detail_batch_size: default_detail_batch_size(),
            request_timeout_secs: default_request_timeout_secs(),
            proxy: None,
        }
    }
}

impl ServerConfig {
    /// Load configuration from a YAML file
    pub async fn from_file(path: impl AsRef<Path>) -> McpResult<Self> {
        let path = path.as_ref();
        let content = tokio::fs::read_to_string(path).await.map_err(|e| {
            McpError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(yaml: &str) -> McpResult<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(yaml)
            .map_err(|e| McpError::Config(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Fill the proxy from the environment if the file did not set one.
    #[must_use]
    pub fn with_env_proxy(mut self) -> Self {
        if self.proxy.is_none() {
            self.proxy = ProxyConfig::from_env();
        }
        self
    }

    pub fn validate(&self) -> McpResult<()> {
        self.batch_size()?;
        if self.request_timeout_secs == 0 {
            return Err(McpError::Config(
                "request_timeout_secs must be greater than 0".to_string(),
            ));
        }
        if self.base_url.trim().is_empty() {
            return Err(McpError::Config("base_url must not be empty".to_string()));
        }
        Ok(())
    }

    pub fn batch_size(&self) -> McpResult<BatchSize> {
        Ok(BatchSize::new(self.detail_batch_size)?)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Client builder carrying everything but the credentials.
    pub fn client_builder(&self) -> BrewfatherClientBuilder {
        BrewfatherClient::builder()
            .base_url(self.base_url.clone())
            .timeout(self.request_timeout())
            .proxy(self.proxy.clone())
    }
}
