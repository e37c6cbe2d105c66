//! Tracing setup.
//!
//! stdout carries the MCP protocol, so every layer writes to stderr or to log
//! files, never to stdout.

use std::path::PathBuf;

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry,
};

pub const LOG_FILE_PREFIX: &str = "brewfather-mcp.log";

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync + 'static>;

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Filter directives used when `RUST_LOG` is unset.
    pub level: String,
    pub log_dir: Option<PathBuf>,
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            log_dir: None,
            json: false,
        }
    }
}

/// `RUST_LOG` wins over the configured level when it is set and not blank.
fn build_filter(rust_log: Option<&str>, default_level: &str) -> anyhow::Result<EnvFilter> {
    match rust_log.map(str::trim).filter(|d| !d.is_empty()) {
        Some(directives) => EnvFilter::try_new(directives)
            .with_context(|| format!("Invalid RUST_LOG filter '{}'", directives)),
        None => EnvFilter::try_new(default_level)
            .with_context(|| format!("Invalid log level '{}'", default_level)),
    }
}

fn stderr_layer(json: bool) -> BoxedLayer {
    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(true);
    if json {
        layer.json().boxed()
    } else {
        layer.boxed()
    }
}

/// Installs the global subscriber.
///
/// The returned guard flushes the file writer on drop and must live as long
/// as the process logs.
pub fn init_logging(config: &LoggingConfig) -> anyhow::Result<Option<WorkerGuard>> {
    let rust_log = std::env::var("RUST_LOG").ok();
    let filter = build_filter(rust_log.as_deref(), &config.level)?;

    let mut layers = vec![stderr_layer(config.json)];
    let guard = match &config.log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
            let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().with_writer(writer).with_ansi(false);
            layers.push(if config.json {
                layer.json().boxed()
            } else {
                layer.boxed()
            });
            Some(guard)
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(layers)
        .with(filter)
        .try_init()
        .context("Failed to install the tracing subscriber")?;

    Ok(guard)
}
