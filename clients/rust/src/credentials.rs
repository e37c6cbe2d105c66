//! API credentials.

use std::fmt;

use crate::error::{ClientError, ClientResult};

pub const USER_ID_ENV: &str = "BREWFATHER_API_USER_ID";
pub const API_KEY_ENV: &str = "BREWFATHER_API_KEY";

/// HTTP Basic credentials: the Brewfather user id and an API key.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    user_id: String,
    api_key: String,
}

impl Credentials {
    pub fn new(user_id: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            api_key: api_key.into(),
        }
    }

    /// Reads `BREWFATHER_API_USER_ID` and `BREWFATHER_API_KEY`.
    pub fn from_env() -> ClientResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Resolves both variables through `lookup`. Unset and blank values are
    /// both treated as missing.
    pub fn from_lookup<F>(lookup: F) -> ClientResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        match (read(USER_ID_ENV), read(API_KEY_ENV)) {
            (Some(user_id), Some(api_key)) => Ok(Self::new(user_id, api_key)),
            (user_id, api_key) => {
                let missing: Vec<&str> = [
                    user_id.is_none().then_some(USER_ID_ENV),
                    api_key.is_none().then_some(API_KEY_ENV),
                ]
                .into_iter()
                .flatten()
                .collect();
                Err(ClientError::MissingCredentials(missing.join(", ")))
            }
        }
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub(crate) fn api_key(&self) -> &str {
        &self.api_key
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("user_id", &self.user_id)
            .field("api_key", &"<redacted>")
            .finish()
    }
}
