//! MCP tool surface
//!
//! Three tools are served over stdio:
//!
//! - `search_docs`: get-or-build the index for a documentation archive and
//!   return previews of the best matching files
//! - `scrape_web`: fetch a page as markdown through the reader proxy
//! - `count_word_occurrences`: count a word on a scraped page
//!
//! Input problems map to `invalid_params`; download, extraction, indexing and
//! search failures map to `internal_error` with the failure kind attached.

pub mod search_docs;
pub mod server;
pub mod types;

pub use search_docs::search_docs;
pub use server::DocsServer;
pub use types::{CountWordArgs, CountWordOutput, ScrapeWebArgs, SearchDocsArgs};
