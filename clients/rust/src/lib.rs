//! Rust HTTP client for the Brewfather v2 inventory API.
//!
//! ## Modules
//!
//! - [`client`]: [`BrewfatherClient`] and its builder
//! - [`api`]: the [`InventoryApi`] trait consumers program against
//! - [`credentials`]: HTTP Basic credentials loaded from the environment
//! - [`proxy`]: optional HTTP(S) proxy settings

pub mod api;
pub mod client;
pub mod credentials;
pub mod error;
pub mod proxy;

pub use api::InventoryApi;
pub use client::{BrewfatherClient, BrewfatherClientBuilder, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use credentials::{Credentials, API_KEY_ENV, USER_ID_ENV};
pub use error::{ClientError, ClientResult};
pub use proxy::ProxyConfig;
