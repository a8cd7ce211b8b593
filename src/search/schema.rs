//! Tantivy schema for extracted documentation files
//!
//! Two fields: the document identifier, indexed verbatim so it can be used as
//! an exact-match filter, and the document body, indexed as stemmed free text.

use tantivy::{
    schema::{Field, IndexRecordOption, STORED, STRING, Schema, TextFieldIndexing, TextOptions},
    tokenizer::{
        AlphaNumOnlyFilter, Language, LowerCaser, SimpleTokenizer, Stemmer, TextAnalyzer,
        TokenizerManager,
    },
};

/// Tokenizer used for document bodies
pub const CONTENT_SEARCH_TOKENIZER: &str = "content_search";

/// Field names, shared with anything that inspects stored documents
pub const FILENAME_FIELD: &str = "filename";
pub const CONTENT_FIELD: &str = "content";

/// Search schema with handles for both fields
#[derive(Debug, Clone)]
pub struct SearchSchema {
    pub schema: Schema,
    pub filename: Field,
    pub content: Field,
}

impl SearchSchema {
    /// Build the schema used by every documentation index
    #[must_use]
    pub fn new() -> Self {
        let mut builder = Schema::builder();

        // Exact match: the raw tokenizer keeps "docs/intro.md" as one term
        let filename = builder.add_text_field(FILENAME_FIELD, STRING | STORED);

        let content_options = TextOptions::default().set_stored().set_indexing_options(
            TextFieldIndexing::default()
                .set_tokenizer(CONTENT_SEARCH_TOKENIZER)
                .set_index_option(IndexRecordOption::WithFreqsAndPositions),
        );
        let content = builder.add_text_field(CONTENT_FIELD, content_options);

        Self {
            schema: builder.build(),
            filename,
            content,
        }
    }

    /// Register the content tokenizer with an index's tokenizer manager
    pub fn register_tokenizers(tokenizer_manager: &TokenizerManager) {
        let content_tokenizer = TextAnalyzer::builder(SimpleTokenizer::default())
            .filter(LowerCaser)
            .filter(AlphaNumOnlyFilter)
            .filter(Stemmer::new(Language::English))
            .build();

        tokenizer_manager.register(CONTENT_SEARCH_TOKENIZER, content_tokenizer);
    }
}

impl Default for SearchSchema {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tantivy::schema::FieldType;

    #[test]
    fn filename_is_exact_match_and_content_is_free_text() {
        let schema = SearchSchema::new();

        let filename_entry = schema.schema.get_field_entry(schema.filename);
        let FieldType::Str(filename_options) = filename_entry.field_type() else {
            panic!("filename must be a text field");
        };
        assert!(filename_options.is_stored());
        assert_eq!(
            filename_options.get_indexing_options().map(|o| o.tokenizer()),
            Some("raw")
        );

        let content_entry = schema.schema.get_field_entry(schema.content);
        let FieldType::Str(content_options) = content_entry.field_type() else {
            panic!("content must be a text field");
        };
        assert_eq!(
            content_options.get_indexing_options().map(|o| o.tokenizer()),
            Some(CONTENT_SEARCH_TOKENIZER)
        );
    }
}
