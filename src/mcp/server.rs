//! MCP server exposing the documentation tools over rmcp

use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, ServerCapabilities, ServerInfo};
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_handler, tool_router};
use serde::Serialize;

use super::search_docs::search_docs;
use super::types::{CountWordArgs, CountWordOutput, ScrapeWebArgs, SearchDocsArgs};
use crate::cache::IndexCache;
use crate::config::DocsConfig;
use crate::scrape::{ScrapeError, WebScraper, count_word_occurrences};
use crate::search::errors::DocsError;
use crate::search::query::limit_from_f64;

/// Tool server; cheap to clone, all state is shared
#[derive(Clone)]
pub struct DocsServer {
    config: Arc<DocsConfig>,
    cache: Arc<IndexCache>,
    scraper: WebScraper,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl DocsServer {
    pub fn new(config: DocsConfig) -> Self {
        let client = reqwest::Client::new();
        let cache = Arc::new(config.index_cache(client.clone()));
        let scraper = config.web_scraper(client);
        Self::with_parts(config, cache, scraper)
    }

    /// Assemble a server from prebuilt parts (tests inject their own cache)
    pub fn with_parts(config: DocsConfig, cache: Arc<IndexCache>, scraper: WebScraper) -> Self {
        Self {
            config: Arc::new(config),
            cache,
            scraper,
            tool_router: Self::tool_router(),
        }
    }

    #[tool(
        description = "Search a documentation archive (a zip of a repository, e.g. a GitHub \
                       branch download) for files relevant to a query. The archive is downloaded \
                       and indexed on first use and cached afterwards. Returns up to `limit` \
                       markdown files with the first 500 characters of each."
    )]
    async fn search_docs(
        &self,
        Parameters(args): Parameters<SearchDocsArgs>,
    ) -> Result<CallToolResult, McpError> {
        let source_url = args
            .source_url
            .unwrap_or_else(|| self.config.default_source_url().to_string());
        let limit = match args.limit {
            Some(limit) => limit_from_f64(limit).map_err(docs_error)?,
            None => self.config.default_limit(),
        };

        let previews = search_docs(
            &self.cache,
            self.config.download_dir(),
            &args.query,
            &source_url,
            limit,
            self.config.preview_chars(),
        )
        .await
        .map_err(docs_error)?;

        json_result(&previews)
    }

    #[tool(
        description = "Fetch a web page and return its content as markdown, using the Jina \
                       Reader service. The URL must be http or https."
    )]
    async fn scrape_web(
        &self,
        Parameters(args): Parameters<ScrapeWebArgs>,
    ) -> Result<CallToolResult, McpError> {
        let content = self.scraper.scrape(&args.url).await.map_err(scrape_error)?;
        Ok(CallToolResult::success(vec![Content::text(content)]))
    }

    #[tool(
        description = "Count how many times a word appears on a web page. Case-insensitive \
                       unless `case_insensitive` is false."
    )]
    async fn count_word_occurrences(
        &self,
        Parameters(args): Parameters<CountWordArgs>,
    ) -> Result<CallToolResult, McpError> {
        let content = self.scraper.scrape(&args.url).await.map_err(scrape_error)?;
        let case_insensitive = args.case_insensitive.unwrap_or(true);
        let counted = count_word_occurrences(&content, &args.word, case_insensitive);

        json_result(&CountWordOutput {
            word: counted.word,
            count: counted.count,
            case_insensitive: counted.case_insensitive,
            url: args.url,
            content_length: counted.content_length,
        })
    }
}

#[tool_handler]
impl ServerHandler for DocsServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Documentation search tools: search_docs queries an indexed documentation \
                 archive, scrape_web fetches a page as markdown, count_word_occurrences counts \
                 a word on a page."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let body = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("Failed to encode result: {e}"), None))?;
    Ok(CallToolResult::success(vec![Content::text(body)]))
}

fn docs_error(error: DocsError) -> McpError {
    tracing::warn!(kind = error.kind(), error = %error, "search_docs failed");
    let data = Some(serde_json::json!({ "kind": error.kind() }));
    if error.is_input_error() {
        McpError::invalid_params(error.to_string(), data)
    } else {
        McpError::internal_error(error.to_string(), data)
    }
}

fn scrape_error(error: ScrapeError) -> McpError {
    tracing::warn!(error = %error, "Scrape failed");
    match error {
        ScrapeError::InvalidUrl(_) | ScrapeError::InvalidTimeout => {
            McpError::invalid_params(error.to_string(), None)
        }
        _ => McpError::internal_error(error.to_string(), None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::errors::{DownloadError, IndexingError};
    use rmcp::model::ErrorCode;

    #[test]
    fn input_errors_become_invalid_params() {
        let err = docs_error(DocsError::InvalidInput("Query cannot be empty".to_string()));
        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
        assert!(err.message.contains("Query cannot be empty"));
    }

    #[test]
    fn pipeline_errors_become_internal_errors() {
        let download = docs_error(DownloadError::Timeout { secs: 60 }.into());
        let indexing = docs_error(IndexingError::EmptyCorpus.into());
        assert_eq!(download.code, ErrorCode::INTERNAL_ERROR);
        assert_eq!(indexing.code, ErrorCode::INTERNAL_ERROR);
        assert_eq!(download.data, Some(serde_json::json!({ "kind": "download" })));
    }

    #[test]
    fn scrape_url_errors_are_caller_errors() {
        let invalid = scrape_error(ScrapeError::InvalidUrl("x".to_string()));
        let status = scrape_error(ScrapeError::ContentFetch {
            status: 502,
            message: "Bad Gateway".to_string(),
        });
        assert_eq!(invalid.code, ErrorCode::INVALID_PARAMS);
        assert_eq!(status.code, ErrorCode::INTERNAL_ERROR);
    }

    #[test]
    fn server_advertises_tools() {
        let config = DocsConfig::builder().build().unwrap();
        let server = DocsServer::new(config);
        let info = server.get_info();
        assert!(info.capabilities.tools.is_some());
        assert_eq!(server.tool_router.list_all().len(), 3);
    }
}
