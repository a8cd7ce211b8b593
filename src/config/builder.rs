//! Builder for `DocsConfig`
//!
//! Every field has a default, so `DocsConfig::builder().build()` is a valid
//! configuration; `build()` rejects values the pipeline cannot work with.

use anyhow::{Result, anyhow, bail};
use std::path::PathBuf;
use std::time::Duration;

use super::types::DocsConfig;
use crate::utils::constants::{
    DEFAULT_DOWNLOAD_TIMEOUT, DEFAULT_INDEX_MEMORY_BUDGET, DEFAULT_PREVIEW_CHARS,
    DEFAULT_READER_BASE_URL, DEFAULT_RESULT_LIMIT, DEFAULT_SCRAPE_TIMEOUT, DEFAULT_SOURCE_URL,
    DEFAULT_TEXT_SUFFIXES,
};
use crate::utils::url_utils::parse_http_url;

/// Tantivy refuses writer budgets below 15MB per thread
const MIN_INDEX_MEMORY_BUDGET: usize = 15_000_000;

/// Default archive directory: the user cache dir, else `./.docs-search`
fn default_download_dir() -> PathBuf {
    dirs::cache_dir()
        .map(|dir| dir.join("docs-search").join("archives"))
        .unwrap_or_else(|| PathBuf::from(".docs-search"))
}

#[derive(Debug, Clone)]
pub struct DocsConfigBuilder {
    pub(crate) download_dir: Option<PathBuf>,
    pub(crate) download_timeout: Duration,
    pub(crate) scrape_timeout: Duration,
    pub(crate) default_source_url: String,
    pub(crate) reader_base_url: String,
    pub(crate) text_suffixes: Vec<String>,
    pub(crate) default_limit: i64,
    pub(crate) preview_chars: usize,
    pub(crate) index_memory_budget: usize,
}

impl Default for DocsConfigBuilder {
    fn default() -> Self {
        Self {
            download_dir: None,
            download_timeout: DEFAULT_DOWNLOAD_TIMEOUT,
            scrape_timeout: DEFAULT_SCRAPE_TIMEOUT,
            default_source_url: DEFAULT_SOURCE_URL.to_string(),
            reader_base_url: DEFAULT_READER_BASE_URL.to_string(),
            text_suffixes: DEFAULT_TEXT_SUFFIXES
                .iter()
                .map(|s| (*s).to_string())
                .collect(),
            default_limit: DEFAULT_RESULT_LIMIT,
            preview_chars: DEFAULT_PREVIEW_CHARS,
            index_memory_budget: DEFAULT_INDEX_MEMORY_BUDGET,
        }
    }
}

impl DocsConfig {
    /// Create a builder for configuring a `DocsConfig` with a fluent interface
    #[must_use]
    pub fn builder() -> DocsConfigBuilder {
        DocsConfigBuilder::default()
    }
}

impl DocsConfigBuilder {
    #[must_use]
    pub fn download_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.download_dir = Some(dir.into());
        self
    }

    #[must_use]
    pub fn download_timeout(mut self, timeout: Duration) -> Self {
        self.download_timeout = timeout;
        self
    }

    #[must_use]
    pub fn scrape_timeout(mut self, timeout: Duration) -> Self {
        self.scrape_timeout = timeout;
        self
    }

    #[must_use]
    pub fn default_source_url(mut self, url: impl Into<String>) -> Self {
        self.default_source_url = url.into();
        self
    }

    /// Set the reader proxy prefix (the page URL is appended verbatim)
    #[must_use]
    pub fn reader_base_url(mut self, url: impl Into<String>) -> Self {
        self.reader_base_url = url.into();
        self
    }

    /// Replace the suffix list used to pick archive entries
    ///
    /// # Example
    /// ```rust
    /// # use docs_search::config::DocsConfig;
    /// # fn main() -> anyhow::Result<()> {
    /// let config = DocsConfig::builder()
    ///     .text_suffixes([".md", ".rst"])
    ///     .build()?;
    /// assert_eq!(config.text_suffixes(), [".md", ".rst"]);
    /// # Ok(())
    /// # }
    /// ```
    #[must_use]
    pub fn text_suffixes<I, S>(mut self, suffixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.text_suffixes = suffixes.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn default_limit(mut self, limit: i64) -> Self {
        self.default_limit = limit;
        self
    }

    #[must_use]
    pub fn preview_chars(mut self, chars: usize) -> Self {
        self.preview_chars = chars;
        self
    }

    #[must_use]
    pub fn index_memory_budget(mut self, bytes: usize) -> Self {
        self.index_memory_budget = bytes;
        self
    }

    /// Validate and build the configuration
    pub fn build(self) -> Result<DocsConfig> {
        if self.download_timeout.is_zero() {
            bail!("download_timeout must be greater than zero");
        }
        if self.scrape_timeout.is_zero() {
            bail!("scrape_timeout must be greater than zero");
        }
        if self.text_suffixes.is_empty() {
            bail!("text_suffixes must contain at least one suffix");
        }
        if self.text_suffixes.iter().any(String::is_empty) {
            bail!("text_suffixes must not contain empty suffixes");
        }
        if self.default_limit <= 0 {
            bail!("default_limit must be positive, got {}", self.default_limit);
        }
        if self.preview_chars == 0 {
            bail!("preview_chars must be greater than zero");
        }
        if self.index_memory_budget < MIN_INDEX_MEMORY_BUDGET {
            bail!(
                "index_memory_budget must be at least {MIN_INDEX_MEMORY_BUDGET} bytes, got {}",
                self.index_memory_budget
            );
        }

        parse_http_url(&self.default_source_url)
            .map_err(|e| anyhow!("default_source_url: {e}"))?;
        parse_http_url(&self.reader_base_url).map_err(|e| anyhow!("reader_base_url: {e}"))?;

        Ok(DocsConfig {
            download_dir: self.download_dir.unwrap_or_else(default_download_dir),
            download_timeout: self.download_timeout,
            scrape_timeout: self.scrape_timeout,
            default_source_url: self.default_source_url,
            reader_base_url: self.reader_base_url,
            text_suffixes: self.text_suffixes,
            default_limit: self.default_limit,
            preview_chars: self.preview_chars,
            index_memory_budget: self.index_memory_budget,
        })
    }
}
