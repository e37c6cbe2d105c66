use std::sync::Arc;

use anyhow::Context;
use brewfather_mcp::{BrewfatherServer, ServerConfig};
use brewfather_server::{
    cli::Cli,
    logging::{init_logging, LoggingConfig},
};
use clap::Parser;
use rmcp::{transport::stdio, ServiceExt};
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Loaded before parsing so a .env file can also provide the CLI defaults.
    let env_file = dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let _log_guard = init_logging(&LoggingConfig {
        level: cli.log_level.clone(),
        log_dir: cli.log_dir.clone(),
        json: cli.log_json,
    })?;
    if let Some(path) = env_file {
        info!(path = %path.display(), "Loaded environment file");
    }

    let config = match &cli.config {
        Some(path) => ServerConfig::from_file(path)
            .await
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => ServerConfig::default(),
    }
    .with_env_proxy();
    let batch_size = config.batch_size()?;

    let client = config
        .client_builder()
        .build()
        .inspect_err(|e| error!(error = %e, "Failed to create the Brewfather client"))?;

    info!(
        base_url = %client.base_url(),
        batch_size = %batch_size,
        timeout_secs = config.request_timeout_secs,
        proxy = config.proxy.is_some(),
        "Starting Brewfather MCP server on stdio"
    );

    let service = BrewfatherServer::new(Arc::new(client), batch_size)
        .serve(stdio())
        .await
        .inspect_err(|e| error!(error = %e, "MCP initialization failed"))?;

    let reason = service.waiting().await?;
    info!(reason = ?reason, "MCP server stopped");
    Ok(())
}
