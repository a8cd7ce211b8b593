//! Search query validation and execution
//!
//! The executor validates caller input, hands the query to the index, and
//! returns the index's ranking untouched.

mod validation;

pub use validation::{limit_from_f64, validate_limit, validate_query};

use crate::search::engine::DocumentIndex;
use crate::search::errors::DocsResult;
use crate::search::types::SearchHit;

/// Run `query` against a built index, returning at most `limit` hits
pub fn search(index: &dyn DocumentIndex, query: &str, limit: i64) -> DocsResult<Vec<SearchHit>> {
    let query = validate_query(query)?;
    let limit = validate_limit(limit)?;

    let start = std::time::Instant::now();
    let hits = index.query(query, limit)?;

    tracing::info!(
        query = %query,
        limit = limit,
        results_count = hits.len(),
        duration_ms = start.elapsed().as_millis(),
        "Search completed successfully"
    );

    Ok(hits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::errors::{DocsError, SearchError};
    use crate::search::types::SearchHit;

    /// Index that echoes its inputs and can be told to fail
    struct EchoIndex {
        fail: bool,
    }

    impl DocumentIndex for EchoIndex {
        fn query(&self, text: &str, limit: usize) -> DocsResult<Vec<SearchHit>> {
            if self.fail {
                return Err(SearchError::Task("engine down".to_string()).into());
            }
            Ok((0..limit)
                .map(|i| SearchHit {
                    filename: format!("{i}.md"),
                    content: text.to_string(),
                    score: 1.0 / (i as f32 + 1.0),
                })
                .collect())
        }

        fn len(&self) -> usize {
            1
        }
    }

    #[test]
    fn rejects_blank_queries_before_delegating() {
        let index = EchoIndex { fail: true };
        for query in ["", "   ", "\n\t"] {
            let err = search(&index, query, 5).unwrap_err();
            assert!(err.is_input_error(), "{query:?} should be an input error");
        }
    }

    #[test]
    fn rejects_non_positive_limits() {
        let index = EchoIndex { fail: true };
        assert!(search(&index, "x", 0).unwrap_err().is_input_error());
        assert!(search(&index, "x", -1).unwrap_err().is_input_error());
    }

    #[test]
    fn passes_trimmed_query_and_keeps_order() {
        let index = EchoIndex { fail: false };
        let hits = search(&index, "  demo ", 3).unwrap();
        assert_eq!(hits.len(), 3);
        assert_eq!(hits[0].content, "demo");
        assert_eq!(hits[0].filename, "0.md");
        assert_eq!(hits[2].filename, "2.md");
    }

    #[test]
    fn engine_failures_surface_as_search_errors() {
        let index = EchoIndex { fail: true };
        let err = search(&index, "demo", 5).unwrap_err();
        assert!(matches!(err, DocsError::Search(_)));
    }
}
