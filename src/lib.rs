//! Documentation search over zipped repository archives
//!
//! A source URL names a zip archive (typically a GitHub branch download). On
//! first use the archive is downloaded, its markdown entries are extracted
//! and indexed in memory; later searches for the same URL reuse the index.
//!
//! ```no_run
//! # async fn run() -> docs_search::DocsResult<()> {
//! use docs_search::{DocsConfig, search_docs};
//!
//! let config = DocsConfig::builder().build().map_err(|e| {
//!     docs_search::DocsError::InvalidInput(e.to_string())
//! })?;
//! let cache = config.index_cache(reqwest::Client::new());
//! let previews = search_docs(
//!     &cache,
//!     config.download_dir(),
//!     "define a tool",
//!     config.default_source_url(),
//!     config.default_limit(),
//!     config.preview_chars(),
//! )
//! .await?;
//! for preview in previews {
//!     println!("{}", preview.filename);
//! }
//! # Ok(())
//! # }
//! ```

pub mod archive;
pub mod cache;
pub mod config;
pub mod mcp;
pub mod scrape;
pub mod search;
pub mod utils;

pub use archive::{ArchiveFetcher, extract_documents, extract_markdown_documents};
pub use cache::IndexCache;
pub use config::{DocsConfig, DocsConfigBuilder};
pub use mcp::{DocsServer, search_docs};
pub use scrape::{ScrapeError, WebScraper, WordCount, count_word_occurrences};
pub use search::{
    DocPreview, Document, DocumentIndex, DocsError, DocsResult, DownloadError, ExtractionError,
    IndexBackend, IndexingError, SearchError, SearchHit, TantivyBackend, build_index, search,
};
