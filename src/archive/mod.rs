//! Source archive acquisition and document extraction
//!
//! `fetcher` materializes a remote zip archive on local disk (at most once per
//! derived path); `extractor` reads the text documents out of it.

pub mod extractor;
pub mod fetcher;

pub use extractor::{extract_documents, extract_markdown_documents, strip_root_segment};
pub use fetcher::ArchiveFetcher;
