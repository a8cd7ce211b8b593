//! Process-wide index cache with get-or-build semantics
//!
//! Maps a source URL (exact string, no normalization) to the index built from
//! its archive. A miss runs fetch → extract → build; a hit touches neither the
//! network nor the filesystem. Entries are never rebuilt, replaced or evicted
//! for the life of the cache.
//!
//! Builds are single-flight per source: each key owns a `OnceCell`, so
//! concurrent callers for one URL wait for the first build instead of
//! repeating it. A failed build leaves the cell empty and the slot is
//! removed, so the next call starts over from the fetch.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::{debug, info};
use tokio::sync::{Mutex, OnceCell};

use crate::archive::{ArchiveFetcher, extract_documents};
use crate::log_stage;
use crate::search::engine::{DocumentIndex, IndexBackend, build_index};
use crate::search::errors::{DocsResult, ExtractionError, IndexingError};
use crate::utils::constants::DEFAULT_TEXT_SUFFIXES;

/// Initial capacity for the slot map
///
/// Sessions typically search a handful of documentation sources.
const INDEX_CACHE_INITIAL_CAPACITY: usize = 8;

type Slot = Arc<OnceCell<Arc<dyn DocumentIndex>>>;

/// Cache of built indexes keyed by source URL
///
/// Construct once at startup and share behind an `Arc`; tests build their
/// own isolated instances.
pub struct IndexCache {
    slots: Mutex<HashMap<String, Slot>>,
    fetcher: ArchiveFetcher,
    backend: Arc<dyn IndexBackend>,
    text_suffixes: Arc<[String]>,
}

impl IndexCache {
    /// Create an empty cache that builds with `backend`
    pub fn new(fetcher: ArchiveFetcher, backend: Arc<dyn IndexBackend>) -> Self {
        Self {
            slots: Mutex::new(HashMap::with_capacity(INDEX_CACHE_INITIAL_CAPACITY)),
            fetcher,
            backend,
            text_suffixes: DEFAULT_TEXT_SUFFIXES
                .iter()
                .map(|s| (*s).to_string())
                .collect(),
        }
    }

    /// Keep only entries with these suffixes when extracting (default `.md`, `.mdx`)
    #[must_use]
    pub fn with_text_suffixes(mut self, suffixes: Vec<String>) -> Self {
        self.text_suffixes = suffixes.into();
        self
    }

    /// Return the index for `source`, building it on first use
    ///
    /// Errors from any stage are returned unchanged and nothing is cached.
    pub async fn get_or_build(
        &self,
        source: &str,
        dest_dir: &Path,
    ) -> DocsResult<Arc<dyn DocumentIndex>> {
        let slot = {
            let mut slots = self.slots.lock().await;
            Arc::clone(slots.entry(source.to_string()).or_default())
        };

        if let Some(index) = slot.get() {
            debug!("Index cache hit for {source}");
            return Ok(Arc::clone(index));
        }

        let result = slot
            .get_or_try_init(|| self.build_pipeline(source, dest_dir.to_path_buf()))
            .await
            .map(Arc::clone);

        if result.is_err() {
            let mut slots = self.slots.lock().await;
            // Only drop our own slot, and only if nobody has filled it since
            if let Some(current) = slots.get(source)
                && Arc::ptr_eq(current, &slot)
                && !current.initialized()
            {
                slots.remove(source);
            }
        }

        result
    }

    async fn build_pipeline(
        &self,
        source: &str,
        dest_dir: PathBuf,
    ) -> DocsResult<Arc<dyn DocumentIndex>> {
        let start = std::time::Instant::now();
        info!("Building documentation index for {source}");

        let archive_path = log_stage!("fetch", source, self.fetcher.fetch(source, &dest_dir).await)?;

        let suffixes = Arc::clone(&self.text_suffixes);
        let documents = log_stage!(
            "extract",
            source,
            tokio::task::spawn_blocking(move || extract_documents(&archive_path, &suffixes[..]))
                .await
                .map_err(|e| ExtractionError::Task(format!("Extraction task panicked: {e}")))?
        )?;

        let backend = Arc::clone(&self.backend);
        let document_count = documents.len();
        let index = log_stage!(
            "build",
            source,
            tokio::task::spawn_blocking(move || build_index(backend.as_ref(), documents))
                .await
                .map_err(|e| IndexingError::Task(format!("Index build task panicked: {e}")))?
        )?;

        info!(
            "Indexed {document_count} documents for {source} in {}ms",
            start.elapsed().as_millis()
        );

        Ok(index)
    }

    /// Whether a built index is stored for `source`
    pub async fn contains(&self, source: &str) -> bool {
        self.slots
            .lock()
            .await
            .get(source)
            .is_some_and(|slot| slot.initialized())
    }

    /// Number of built indexes
    pub async fn len(&self) -> usize {
        self.slots
            .lock()
            .await
            .values()
            .filter(|slot| slot.initialized())
            .count()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
