//! Core configuration types
//!
//! `DocsConfig` carries everything the pipeline and the tools need: where
//! archives are stored, network timeouts, what to extract and how to present
//! results.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Main configuration struct for the documentation search tools
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocsConfig {
    /// Directory downloaded archives are written to (one file per archive name)
    pub(crate) download_dir: PathBuf,

    /// Bound on a whole archive download, including the body stream
    pub(crate) download_timeout: Duration,

    /// Bound on a single-page scrape
    pub(crate) scrape_timeout: Duration,

    /// Archive searched when `search_docs` is called without a source
    pub(crate) default_source_url: String,

    /// Text-extraction proxy prefix for `scrape_web`
    pub(crate) reader_base_url: String,

    /// Archive entries kept by the extractor, matched by suffix
    pub(crate) text_suffixes: Vec<String>,

    pub(crate) default_limit: i64,

    /// Characters of content included per search result
    pub(crate) preview_chars: usize,

    /// Tantivy writer memory budget in bytes
    pub(crate) index_memory_budget: usize,
}
