//! Tool argument and output types

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct SearchDocsArgs {
    /// Search query, e.g. "how to define a tool"
    pub query: String,

    /// URL of a zip archive of the documentation; defaults to the configured source
    #[serde(default)]
    pub source_url: Option<String>,

    /// Maximum number of results (positive integer, default 5)
    #[serde(default)]
    pub limit: Option<f64>,
}

#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct ScrapeWebArgs {
    /// Page to fetch (http or https)
    pub url: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct CountWordArgs {
    /// Page to fetch (http or https)
    pub url: String,

    /// Word or substring to count
    pub word: String,

    /// Ignore case when matching (default true)
    #[serde(default)]
    pub case_insensitive: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountWordOutput {
    pub word: String,
    pub count: usize,
    pub case_insensitive: bool,
    pub url: String,
    pub content_length: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_fields_default_to_none() {
        let args: SearchDocsArgs = serde_json::from_str(r#"{"query": "demo"}"#).unwrap();
        assert_eq!(args.query, "demo");
        assert!(args.source_url.is_none());
        assert!(args.limit.is_none());

        let args: CountWordArgs =
            serde_json::from_str(r#"{"url": "https://a.io", "word": "x"}"#).unwrap();
        assert!(args.case_insensitive.is_none());
    }

    #[test]
    fn integral_limit_accepts_json_integers() {
        let args: SearchDocsArgs =
            serde_json::from_str(r#"{"query": "demo", "limit": 3}"#).unwrap();
        assert_eq!(args.limit, Some(3.0));
    }
}
