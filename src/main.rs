// Documentation search MCP server
//
// Serves the `get_docs` tool over stdio. stdout carries the protocol, so
// logs go to stderr or to DOCS_LOG_FILE.

use anyhow::{Context, Result};
use kodegen_tools_docs::{DocsConfig, DocsPipeline, DocsServer};
use rmcp::{ServiceExt, transport::stdio};
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::{Arc, Mutex};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

fn init_tracing(log_file: Option<&Path>) -> Result<()> {
    let file_layer = match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            Some(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
        }
        None => None,
    };
    let stderr_layer = log_file
        .is_none()
        .then(|| fmt::layer().with_writer(std::io::stderr));

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(file_layer)
        .with(stderr_layer)
        .try_init()
        .context("Failed to install tracing subscriber")
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = DocsConfig::from_env().context("Invalid configuration")?;
    init_tracing(config.log_file())?;

    info!(
        max_results = config.max_results(),
        max_chars = config.max_chars(),
        pages_per_query = config.pages_per_query(),
        max_retries = config.max_retries(),
        fallback_to_next = config.fallback_to_next(),
        "Starting documentation search server"
    );

    let pipeline = Arc::new(DocsPipeline::from_config(config)?);
    let running = DocsServer::new(pipeline)
        .serve(stdio())
        .await
        .context("Failed to start MCP stdio server")?;
    let reason = running.waiting().await?;
    info!(?reason, "Server stopped");
    Ok(())
}
