// Documentation search MCP server
//
// Serves search_docs, scrape_web and count_word_occurrences over stdio.
// Logs go to stderr; stdout carries the protocol.

use anyhow::{Context, Result};
use docs_search::{DocsConfig, DocsServer};
use rmcp::{ServiceExt, transport::stdio};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let config = DocsConfig::builder()
        .build()
        .and_then(DocsConfig::with_env_overrides)
        .context("Invalid configuration")?;

    tracing::info!(
        download_dir = %config.download_dir().display(),
        default_source = config.default_source_url(),
        "Starting docs-search server"
    );

    let service = DocsServer::new(config)
        .serve(stdio())
        .await
        .inspect_err(|e| tracing::error!("Failed to start server: {e}"))?;

    service.waiting().await?;
    tracing::info!("docs-search server stopped");
    Ok(())
}
