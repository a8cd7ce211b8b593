//! Full-text search over extracted documentation
//!
//! Documents are indexed with Tantivy behind the narrow `IndexBackend` /
//! `DocumentIndex` seam, so the pipeline never depends on engine internals.

pub mod engine;
pub mod errors;
pub mod query;
pub mod schema;
pub mod types;

pub use engine::{DocumentIndex, IndexBackend, TantivyBackend, TantivyIndex, build_index};
pub use errors::{
    DocsError, DocsResult, DownloadError, ExtractionError, IndexingError, SearchError,
};
pub use query::{limit_from_f64, search};
pub use schema::SearchSchema;
pub use types::{DocPreview, Document, SearchHit, documents_from_json};
