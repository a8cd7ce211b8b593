//! `search_docs` operation: get-or-build the source's index, query it, shorten hits

use std::path::Path;

use crate::cache::IndexCache;
use crate::search::errors::{DocsResult, SearchError};
use crate::search::query::{search, validate_limit, validate_query};
use crate::search::types::DocPreview;

/// Search the documentation archive at `source_url`
///
/// Query and limit are checked before the cache is consulted, so invalid
/// input never triggers a download. The query itself runs on the blocking pool.
pub async fn search_docs(
    cache: &IndexCache,
    download_dir: &Path,
    query: &str,
    source_url: &str,
    limit: i64,
    preview_chars: usize,
) -> DocsResult<Vec<DocPreview>> {
    validate_query(query)?;
    validate_limit(limit)?;

    let index = cache.get_or_build(source_url, download_dir).await?;
    let query = query.to_string();
    let hits = tokio::task::spawn_blocking(move || search(index.as_ref(), &query, limit))
        .await
        .map_err(|e| SearchError::Task(format!("Search task panicked: {e}")))??;

    Ok(hits.iter().map(|hit| hit.to_preview(preview_chars)).collect())
}
