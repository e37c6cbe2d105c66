use std::path::PathBuf;

use clap::Parser;

/// MCP server for the Brewfather inventory, speaking the protocol over stdio.
///
/// Credentials are read from BREWFATHER_API_USER_ID and BREWFATHER_API_KEY,
/// optionally through a `.env` file in the working directory.
#[derive(Debug, Clone, Parser)]
#[command(name = "brewfather-mcp", version, about)]
pub struct Cli {
    /// YAML configuration file
    #[arg(short, long, env = "BREWFATHER_MCP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Default log filter, overridden by RUST_LOG
    #[arg(long, env = "BREWFATHER_MCP_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Also write logs to daily rolling files in this directory
    #[arg(long, env = "BREWFATHER_MCP_LOG_DIR")]
    pub log_dir: Option<PathBuf>,

    /// Emit logs as JSON lines
    #[arg(long, env = "BREWFATHER_MCP_LOG_JSON")]
    pub log_json: bool,
}
