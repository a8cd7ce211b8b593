//! Getter methods for `DocsConfig`

use std::path::Path;
use std::time::Duration;

use super::types::DocsConfig;

impl DocsConfig {
    #[must_use]
    pub fn download_dir(&self) -> &Path {
        &self.download_dir
    }

    #[must_use]
    pub fn download_timeout(&self) -> Duration {
        self.download_timeout
    }

    #[must_use]
    pub fn scrape_timeout(&self) -> Duration {
        self.scrape_timeout
    }

    #[must_use]
    pub fn default_source_url(&self) -> &str {
        &self.default_source_url
    }

    #[must_use]
    pub fn reader_base_url(&self) -> &str {
        &self.reader_base_url
    }

    #[must_use]
    pub fn text_suffixes(&self) -> &[String] {
        &self.text_suffixes
    }

    #[must_use]
    pub fn default_limit(&self) -> i64 {
        self.default_limit
    }

    #[must_use]
    pub fn preview_chars(&self) -> usize {
        self.preview_chars
    }

    #[must_use]
    pub fn index_memory_budget(&self) -> usize {
        self.index_memory_budget
    }
}
