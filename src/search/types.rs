//! Common types used across the search module

use serde::{Deserialize, Serialize};

use super::errors::{DocsError, DocsResult};
use crate::utils::string_utils::preview;

/// A text document extracted from an archive
///
/// `filename` is the entry path with the archive's root folder removed
/// (e.g. `fastmcp-main/docs/intro.md` becomes `docs/intro.md`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub filename: String,
    pub content: String,
}

impl Document {
    pub fn new(filename: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            content: content.into(),
        }
    }
}

/// Individual search result item, in ranking order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchHit {
    pub filename: String,
    pub content: String,
    pub score: f32,
}

impl SearchHit {
    /// Shorten the hit for display
    #[must_use]
    pub fn to_preview(&self, max_chars: usize) -> DocPreview {
        DocPreview {
            filename: self.filename.clone(),
            content_preview: preview(&self.content, max_chars),
        }
    }
}

/// What `search_docs` hands back to tool callers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocPreview {
    pub filename: String,
    pub content_preview: String,
}

/// Convert an untyped document list into `Document`s
///
/// Absent input and `null` are rejected as missing; anything that is not an
/// array of `{filename, content}` string objects is rejected as malformed.
/// An empty array is accepted here and left for the builder to reject.
pub fn documents_from_json(value: Option<&serde_json::Value>) -> DocsResult<Vec<Document>> {
    let value = match value {
        None | Some(serde_json::Value::Null) => {
            return Err(DocsError::invalid("Documents cannot be None"));
        }
        Some(value) => value,
    };

    let entries = value
        .as_array()
        .ok_or_else(|| DocsError::invalid("Documents must be a list"))?;

    entries
        .iter()
        .enumerate()
        .map(|(position, entry)| {
            Document::deserialize(entry).map_err(|e| {
                DocsError::invalid(format!(
                    "Document at position {position} must have string 'filename' and 'content': {e}"
                ))
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_and_malformed_lists_are_distinct_input_errors() {
        let missing = documents_from_json(None).unwrap_err();
        let null = documents_from_json(Some(&serde_json::Value::Null)).unwrap_err();
        let not_list = documents_from_json(Some(&json!({"filename": "a.md"}))).unwrap_err();

        assert!(missing.to_string().contains("cannot be None"));
        assert!(null.to_string().contains("cannot be None"));
        assert!(not_list.to_string().contains("must be a list"));
        assert!(missing.is_input_error() && not_list.is_input_error());
    }

    #[test]
    fn entries_must_carry_filename_and_content() {
        let err = documents_from_json(Some(&json!([{"filename": "a.md"}]))).unwrap_err();
        assert!(err.is_input_error());

        let docs = documents_from_json(Some(&json!([
            {"filename": "a.md", "content": "alpha"},
            {"filename": "a.md", "content": "again"}
        ])))
        .unwrap();
        assert_eq!(docs.len(), 2);
        assert_eq!(docs[1], Document::new("a.md", "again"));
    }

    #[test]
    fn empty_list_is_not_an_input_error() {
        let docs = documents_from_json(Some(&json!([]))).unwrap();
        assert!(docs.is_empty());
    }
}
