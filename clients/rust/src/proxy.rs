//! HTTP proxy configuration for API traffic.
//!
//! Resolves proxy settings and applies them to HTTP client builders.

use serde::{Deserialize, Serialize};

use crate::error::{ClientError, ClientResult};

/// Proxy settings for requests to the inventory API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ProxyConfig {
    /// HTTP proxy URL (e.g., "http://proxy.internal:8080")
    #[serde(default)]
    pub http: Option<String>,

    /// HTTPS proxy URL
    #[serde(default)]
    pub https: Option<String>,

    /// Comma-separated hosts to exclude from proxying
    /// Example: "localhost,127.0.0.1,*.internal,10.*"
    #[serde(default)]
    pub no_proxy: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl ProxyConfig {
    /// Load proxy config from environment variables.
    ///
    /// `BREWFATHER_*` variables take precedence over the standard ones.
    pub fn from_env() -> Option<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Option<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let first = |names: [&str; 2]| names.into_iter().find_map(&lookup);

        let http = first(["BREWFATHER_HTTP_PROXY", "HTTP_PROXY"]);
        let https = first(["BREWFATHER_HTTPS_PROXY", "HTTPS_PROXY"]);
        let no_proxy = first(["BREWFATHER_NO_PROXY", "NO_PROXY"]);

        if http.is_some() || https.is_some() {
            Some(Self {
                http,
                https,
                no_proxy,
                username: None,
                password: None,
            })
        } else {
            None
        }
    }
}

/// Apply proxy configuration to a ClientBuilder
///
/// Leaves the builder open so timeouts and other settings can still be added.
pub(crate) fn apply_proxy_to_builder(
    mut builder: reqwest::ClientBuilder,
    proxy_cfg: &ProxyConfig,
) -> ClientResult<reqwest::ClientBuilder> {
    if let Some(ref http_proxy) = proxy_cfg.http {
        let proxy = reqwest::Proxy::http(http_proxy)
            .map_err(|e| ClientError::Proxy(format!("Invalid HTTP proxy: {}", e)))?;
        builder = builder.proxy(configure(proxy, proxy_cfg));
    }

    if let Some(ref https_proxy) = proxy_cfg.https {
        let proxy = reqwest::Proxy::https(https_proxy)
            .map_err(|e| ClientError::Proxy(format!("Invalid HTTPS proxy: {}", e)))?;
        builder = builder.proxy(configure(proxy, proxy_cfg));
    }

    Ok(builder)
}

/// Applies `no_proxy` exclusions and credentials shared by both schemes.
fn configure(mut proxy: reqwest::Proxy, proxy_cfg: &ProxyConfig) -> reqwest::Proxy {
    if let Some(ref no_proxy) = proxy_cfg.no_proxy {
        proxy = proxy.no_proxy(reqwest::NoProxy::from_string(no_proxy));
    }

    if let (Some(ref username), Some(ref password)) = (&proxy_cfg.username, &proxy_cfg.password) {
        proxy = proxy.basic_auth(username, password);
    }

    proxy
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn env(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_proxy_from_env_empty() {
        assert!(ProxyConfig::from_lookup(env(&[("NO_PROXY", "localhost")])).is_none());
    }

    #[test]
    fn test_proxy_from_env_prefers_specific_vars() {
        let config = ProxyConfig::from_lookup(env(&[
            ("HTTP_PROXY", "http://generic:8080"),
            ("BREWFATHER_HTTPS_PROXY", "http://specific:9090"),
            ("HTTPS_PROXY", "http://generic:9090"),
            ("NO_PROXY", "localhost,127.0.0.1"),
        ]))
        .expect("proxy should be configured");

        assert_eq!(config.http.as_deref(), Some("http://generic:8080"));
        assert_eq!(config.https.as_deref(), Some("http://specific:9090"));
        assert_eq!(config.no_proxy.as_deref(), Some("localhost,127.0.0.1"));
    }

    #[test]
    fn test_apply_proxy_to_builder_with_http() {
        let proxy = ProxyConfig {
            http: Some("http://proxy.example.com:8080".to_string()),
            no_proxy: Some("localhost,127.0.0.1".to_string()),
            ..Default::default()
        };

        let result = apply_proxy_to_builder(reqwest::Client::builder(), &proxy);
        assert!(result.is_ok(), "Should apply proxy to builder");
        assert!(result.unwrap().build().is_ok(), "Should build client");
    }

    #[test]
    fn test_apply_proxy_to_builder_with_auth() {
        let proxy = ProxyConfig {
            https: Some("http://proxy.example.com:8080".to_string()),
            username: Some("user".to_string()),
            password: Some("pass".to_string()),
            ..Default::default()
        };

        let result = apply_proxy_to_builder(reqwest::Client::builder(), &proxy);
        assert!(result.is_ok());
        assert!(result.unwrap().build().is_ok(), "Should build client");
    }

    #[test]
    fn test_apply_proxy_to_builder_invalid_url() {
        let proxy = ProxyConfig {
            http: Some("://invalid".to_string()),
            ..Default::default()
        };

        let result = apply_proxy_to_builder(reqwest::Client::builder(), &proxy);
        assert!(matches!(result, Err(ClientError::Proxy(_))));
    }
}
