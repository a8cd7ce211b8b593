//! Index capability and its Tantivy implementation
//!
//! The pipeline only needs two things from a full-text engine: build an index
//! from documents, and rank documents for a query. `IndexBackend` and
//! `DocumentIndex` are that seam; `TantivyBackend` is the engine used in
//! production. Tests substitute their own backends.

use std::fmt;
use std::sync::Arc;

use tantivy::collector::TopDocs;
use tantivy::query::QueryParser;
use tantivy::schema::Value;
use tantivy::{Index, IndexReader, ReloadPolicy, TantivyDocument, doc};

use super::errors::{DocsResult, IndexingError, SearchError};
use super::schema::SearchSchema;
use super::types::{Document, SearchHit};
use crate::utils::constants::DEFAULT_INDEX_MEMORY_BUDGET;

/// A built, read-only index
pub trait DocumentIndex: Send + Sync {
    /// Rank documents for `text`, best first, at most `limit` of them
    ///
    /// Callers validate `text` and `limit` before delegating here.
    fn query(&self, text: &str, limit: usize) -> DocsResult<Vec<SearchHit>>;

    /// Number of indexed documents
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Something that turns documents into a `DocumentIndex`
pub trait IndexBackend: Send + Sync {
    /// Build an index over `documents` (never called with an empty list)
    fn build(&self, documents: Vec<Document>) -> DocsResult<Arc<dyn DocumentIndex>>;
}

/// Build an index, rejecting an empty corpus before the backend sees it
pub fn build_index(
    backend: &dyn IndexBackend,
    documents: Vec<Document>,
) -> DocsResult<Arc<dyn DocumentIndex>> {
    if documents.is_empty() {
        return Err(IndexingError::EmptyCorpus.into());
    }
    backend.build(documents)
}

/// In-memory Tantivy backend
#[derive(Debug, Clone)]
pub struct TantivyBackend {
    memory_budget: usize,
}

impl TantivyBackend {
    #[must_use]
    pub fn new(memory_budget: usize) -> Self {
        Self { memory_budget }
    }
}

impl Default for TantivyBackend {
    fn default() -> Self {
        Self::new(DEFAULT_INDEX_MEMORY_BUDGET)
    }
}

impl IndexBackend for TantivyBackend {
    fn build(&self, documents: Vec<Document>) -> DocsResult<Arc<dyn DocumentIndex>> {
        let index = TantivyIndex::build(documents, self.memory_budget)?;
        Ok(Arc::new(index))
    }
}

/// Tantivy index held entirely in RAM
pub struct TantivyIndex {
    schema: SearchSchema,
    reader: IndexReader,
    query_parser: QueryParser,
    num_docs: usize,
}

impl fmt::Debug for TantivyIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TantivyIndex")
            .field("num_docs", &self.num_docs)
            .finish_non_exhaustive()
    }
}

impl TantivyIndex {
    /// Index every document in one commit
    ///
    /// Documents sharing a filename are indexed separately.
    pub fn build(documents: Vec<Document>, memory_budget: usize) -> DocsResult<Self> {
        let start = std::time::Instant::now();
        let schema = SearchSchema::new();

        let index = Index::create_in_ram(schema.schema.clone());
        SearchSchema::register_tokenizers(index.tokenizers());

        let mut writer = index
            .writer_with_num_threads::<TantivyDocument>(1, memory_budget)
            .map_err(IndexingError::from)?;

        let num_docs = documents.len();
        for document in documents {
            writer
                .add_document(doc!(
                    schema.filename => document.filename,
                    schema.content => document.content
                ))
                .map_err(IndexingError::from)?;
        }
        writer.commit().map_err(IndexingError::from)?;

        let reader: IndexReader = index
            .reader_builder()
            .reload_policy(ReloadPolicy::Manual)
            .try_into()
            .map_err(IndexingError::from)?;

        let query_parser = QueryParser::for_index(&index, vec![schema.content]);

        tracing::debug!(
            num_docs,
            duration_ms = start.elapsed().as_millis(),
            "Built in-memory documentation index"
        );

        Ok(Self {
            schema,
            reader,
            query_parser,
            num_docs,
        })
    }

    fn stored_text(
        &self,
        doc: &TantivyDocument,
        field: tantivy::schema::Field,
        name: &'static str,
        doc_id: u32,
    ) -> Result<String, SearchError> {
        doc.get_first(field)
            .and_then(|v| v.as_str())
            .map(ToString::to_string)
            .ok_or(SearchError::MissingField { doc: doc_id, field: name })
    }
}

impl DocumentIndex for TantivyIndex {
    fn query(&self, text: &str, limit: usize) -> DocsResult<Vec<SearchHit>> {
        let searcher = self.reader.searcher();

        // Free text from users: unbalanced quotes or stray colons must not fail
        let (query, parse_errors) = self.query_parser.parse_query_lenient(text);
        if !parse_errors.is_empty() {
            tracing::debug!(
                query = %text,
                ignored = parse_errors.len(),
                "Ignored unparsable parts of query"
            );
        }

        // The collector allocates for `limit` up front; more hits than documents cannot exist
        let limit = limit.min(self.num_docs.max(1));
        let top_docs = searcher
            .search(&query, &TopDocs::with_limit(limit))
            .map_err(SearchError::from)?;

        let mut hits = Vec::with_capacity(top_docs.len());
        for (score, address) in top_docs {
            let doc: TantivyDocument = searcher.doc(address).map_err(SearchError::from)?;
            let filename = self.stored_text(
                &doc,
                self.schema.filename,
                super::schema::FILENAME_FIELD,
                address.doc_id,
            )?;
            let content = self.stored_text(
                &doc,
                self.schema.content,
                super::schema::CONTENT_FIELD,
                address.doc_id,
            )?;
            hits.push(SearchHit {
                filename,
                content,
                score,
            });
        }

        Ok(hits)
    }

    fn len(&self) -> usize {
        self.num_docs
    }
}
