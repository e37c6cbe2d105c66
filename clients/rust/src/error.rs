//! Client error types.

use brewfather_protocol::QueryParamsError;
use thiserror::Error;

pub type ClientResult<T> = Result<T, ClientError>;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Missing Brewfather credentials in the environment variables: {0}")]
    MissingCredentials(String),

    #[error("Invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("Invalid proxy configuration: {0}")]
    Proxy(String),

    #[error("Invalid query parameters: {0}")]
    Query(#[from] QueryParamsError),

    #[error("Request to {url} failed with status {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
        body: String,
    },

    #[error("Failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

impl ClientError {
    /// HTTP status of the failed response, if the server answered at all.
    pub fn status(&self) -> Option<reqwest::StatusCode> {
        match self {
            ClientError::Status { status, .. } => Some(*status),
            ClientError::Http(e) => e.status(),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(reqwest::StatusCode::NOT_FOUND)
    }
}
