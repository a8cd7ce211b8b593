//! Error types for the documentation pipeline
//!
//! Every stage (fetch, extract, build, query) reports through `DocsError`,
//! with one nested enum per stage so callers can tell a timeout from an HTTP
//! status, or a missing archive from a corrupt one, when they need to.

use std::path::PathBuf;
use tantivy::TantivyError;
use thiserror::Error;

/// Result type alias for pipeline operations
pub type DocsResult<T> = Result<T, DocsError>;

/// Top-level error for the fetch → extract → build → query pipeline
#[derive(Debug, Error)]
pub enum DocsError {
    /// Caller supplied something malformed (URL, query, limit, document list)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Network-layer failure while fetching an archive
    #[error(transparent)]
    Download(#[from] DownloadError),

    /// Archive missing or not a valid container
    #[error(transparent)]
    Extraction(#[from] ExtractionError),

    /// Index could not be built
    #[error(transparent)]
    Indexing(#[from] IndexingError),

    /// Index query failed after input validation passed
    #[error(transparent)]
    Search(#[from] SearchError),
}

impl DocsError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        DocsError::InvalidInput(message.into())
    }

    /// Short stable name of the error kind, for logs and tool output
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            DocsError::InvalidInput(_) => "invalid_input",
            DocsError::Download(_) => "download",
            DocsError::Extraction(_) => "extraction",
            DocsError::Indexing(_) => "indexing",
            DocsError::Search(_) => "search",
        }
    }

    /// Whether the caller is at fault (as opposed to the network, archive or engine)
    #[must_use]
    pub fn is_input_error(&self) -> bool {
        matches!(self, DocsError::InvalidInput(_))
    }
}

/// Archive download failures, split by cause for diagnostics
#[derive(Debug, Error)]
pub enum DownloadError {
    #[error("Download timed out after {secs} seconds")]
    Timeout { secs: u64 },

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("HTTP error {status} for {url}")]
    HttpStatus { status: u16, url: String },

    #[error("Download failed: {0}")]
    Transport(String),

    #[error("Failed to save archive to {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl DownloadError {
    /// Classify a reqwest failure the way the fetcher reports it
    pub(crate) fn from_reqwest(error: &reqwest::Error, timeout_secs: u64) -> Self {
        if error.is_timeout() {
            DownloadError::Timeout { secs: timeout_secs }
        } else if error.is_connect() {
            DownloadError::Connection(error.to_string())
        } else if let Some(status) = error.status() {
            DownloadError::HttpStatus {
                status: status.as_u16(),
                url: error
                    .url()
                    .map(ToString::to_string)
                    .unwrap_or_default(),
            }
        } else {
            DownloadError::Transport(error.to_string())
        }
    }
}

/// Archive reading failures
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("Zip file not found: {0:?}")]
    NotFound(PathBuf),

    #[error("Invalid or corrupted zip file {path:?}: {message}")]
    CorruptArchive { path: PathBuf, message: String },

    #[error("Failed to read zip file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Extraction task failed: {0}")]
    Task(String),
}

/// Index construction failures
#[derive(Debug, Error)]
pub enum IndexingError {
    #[error("Cannot build index from empty document list")]
    EmptyCorpus,

    #[error("Failed to build index: {0}")]
    Engine(#[from] TantivyError),

    #[error("Index build task failed: {0}")]
    Task(String),
}

/// Query execution failures raised by the index itself
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Search failed: {0}")]
    Engine(#[from] TantivyError),

    #[error("Search failed: stored document {doc} is missing field '{field}'")]
    MissingField { doc: u32, field: &'static str },

    #[error("Search task failed: {0}")]
    Task(String),
}

/// Log a pipeline stage with its duration and outcome
#[macro_export]
macro_rules! log_stage {
    ($stage:expr, $source:expr, $op:expr) => {{
        let start = std::time::Instant::now();
        let result = $op;
        let duration = start.elapsed();

        match &result {
            Ok(_) => {
                tracing::debug!(
                    stage = $stage,
                    source = %$source,
                    duration_ms = duration.as_millis(),
                    "Pipeline stage completed"
                );
            }
            Err(e) => {
                tracing::warn!(
                    stage = $stage,
                    source = %$source,
                    duration_ms = duration.as_millis(),
                    error = %e,
                    "Pipeline stage failed"
                );
            }
        }

        result
    }};
}
