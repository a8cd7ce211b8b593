//! Component construction from a `DocsConfig`
//!
//! The binary builds its long-lived pieces (cache, scraper) here so every
//! component sees the same timeouts, suffixes and HTTP client.

use std::sync::Arc;

use reqwest::Client;

use super::types::DocsConfig;
use crate::archive::ArchiveFetcher;
use crate::cache::IndexCache;
use crate::scrape::WebScraper;
use crate::search::engine::TantivyBackend;

impl DocsConfig {
    /// Fetcher bounded by `download_timeout`
    #[must_use]
    pub fn archive_fetcher(&self, client: Client) -> ArchiveFetcher {
        ArchiveFetcher::new(client, self.download_timeout)
    }

    /// Scraper using `reader_base_url` and `scrape_timeout`
    #[must_use]
    pub fn web_scraper(&self, client: Client) -> WebScraper {
        WebScraper::new(client, self.reader_base_url.clone(), self.scrape_timeout)
    }

    /// Empty index cache backed by Tantivy
    #[must_use]
    pub fn index_cache(&self, client: Client) -> IndexCache {
        let backend = Arc::new(TantivyBackend::new(self.index_memory_budget));
        IndexCache::new(self.archive_fetcher(client), backend)
            .with_text_suffixes(self.text_suffixes.clone())
    }

    /// Apply `DOCS_SEARCH_DOWNLOAD_DIR` / `DOCS_SEARCH_SOURCE_URL` overrides
    ///
    /// Used by the binary only; the library never reads the environment on its own.
    pub fn with_env_overrides(self) -> anyhow::Result<Self> {
        let mut builder = Self::builder()
            .download_dir(self.download_dir)
            .download_timeout(self.download_timeout)
            .scrape_timeout(self.scrape_timeout)
            .default_source_url(self.default_source_url)
            .reader_base_url(self.reader_base_url)
            .text_suffixes(self.text_suffixes)
            .default_limit(self.default_limit)
            .preview_chars(self.preview_chars)
            .index_memory_budget(self.index_memory_budget);

        if let Ok(dir) = std::env::var("DOCS_SEARCH_DOWNLOAD_DIR") {
            builder = builder.download_dir(dir);
        }
        if let Ok(url) = std::env::var("DOCS_SEARCH_SOURCE_URL") {
            builder = builder.default_source_url(url);
        }

        builder.build()
    }
}
