//! Single-page scraping through a text-extraction proxy
//!
//! The proxy returns a page as markdown when its URL is appended to the
//! proxy's base URL (`https://r.jina.ai/https://example.com`).

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::utils::constants::{DEFAULT_READER_BASE_URL, DEFAULT_SCRAPE_TIMEOUT};
use crate::utils::url_utils::parse_http_url;

/// Scrape failures
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("Invalid URL provided: {0}")]
    InvalidUrl(String),

    #[error("Timeout must be a positive duration")]
    InvalidTimeout,

    #[error("Request timed out after {secs} seconds")]
    Timeout { secs: u64 },

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("HTTP error {status}: {message}")]
    ContentFetch { status: u16, message: String },

    #[error("Request failed: {0}")]
    Request(String),
}

impl ScrapeError {
    /// Timeouts and connection failures
    #[must_use]
    pub fn is_network(&self) -> bool {
        matches!(self, ScrapeError::Timeout { .. } | ScrapeError::Connection(_))
    }

    fn from_reqwest(error: &reqwest::Error, timeout: Duration) -> Self {
        if error.is_timeout() {
            ScrapeError::Timeout {
                secs: timeout.as_secs(),
            }
        } else if error.is_connect() {
            ScrapeError::Connection(error.to_string())
        } else {
            ScrapeError::Request(error.to_string())
        }
    }
}

/// Fetches pages as markdown through the reader proxy
#[derive(Debug, Clone)]
pub struct WebScraper {
    client: Client,
    reader_base_url: String,
    timeout: Duration,
}

impl WebScraper {
    #[must_use]
    pub fn new(client: Client, reader_base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client,
            reader_base_url: reader_base_url.into(),
            timeout,
        }
    }

    /// Return the markdown rendering of `url`
    pub async fn scrape(&self, url: &str) -> Result<String, ScrapeError> {
        if parse_http_url(url).is_err() {
            return Err(ScrapeError::InvalidUrl(url.to_string()));
        }
        if self.timeout.is_zero() {
            return Err(ScrapeError::InvalidTimeout);
        }

        let reader_url = format!("{}{url}", self.reader_base_url);
        let response = self
            .client
            .get(&reader_url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| ScrapeError::from_reqwest(&e, self.timeout))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScrapeError::ContentFetch {
                status: status.as_u16(),
                message: status
                    .canonical_reason()
                    .unwrap_or("unexpected status")
                    .to_string(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| ScrapeError::from_reqwest(&e, self.timeout))?;

        tracing::debug!(url = %url, bytes = body.len(), "Scraped page");
        Ok(body)
    }
}

impl Default for WebScraper {
    fn default() -> Self {
        Self::new(Client::new(), DEFAULT_READER_BASE_URL, DEFAULT_SCRAPE_TIMEOUT)
    }
}

/// Occurrences of a word in a page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
    pub case_insensitive: bool,
    /// Length of the scanned content in characters
    pub content_length: usize,
}

/// Count non-overlapping occurrences of `word` in `content`
#[must_use]
pub fn count_word_occurrences(content: &str, word: &str, case_insensitive: bool) -> WordCount {
    let count = if case_insensitive {
        content.to_lowercase().matches(&word.to_lowercase()).count()
    } else {
        content.matches(word).count()
    };

    WordCount {
        word: word.to_string(),
        count,
        case_insensitive,
        content_length: content.chars().count(),
    }
}
