//! Brewfather inventory MCP server.
//!
//! ## Modules
//!
//! - [`inventory`]: summary assembly over the batch scheduler
//! - [`format`]: plain-text rendering of lists, details and the overview
//! - [`server`]: the rmcp [`ServerHandler`](rmcp::ServerHandler) with tools, resources and prompts
//! - [`config`]: YAML server configuration
//! - [`error`]: error types and their MCP error codes

pub mod config;
pub mod error;
pub mod format;
pub mod inventory;
pub mod server;

#[cfg(test)]
pub(crate) mod test_support;

pub use config::ServerConfig;
pub use error::{McpError, McpResult};
pub use inventory::{inventory_overview, InventoryOverview, SummaryRow};
pub use server::{BrewfatherServer, SERVER_NAME};
