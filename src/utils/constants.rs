//! Shared configuration constants for docs_search
//!
//! Default values used by `DocsConfig` and the pipeline stages, kept in one
//! place so the config builder and the stages agree.

use std::time::Duration;

/// Archive fetched when a caller does not name one
pub const DEFAULT_SOURCE_URL: &str = "https://github.com/jlowin/fastmcp/archive/refs/heads/main.zip";

/// Suffix a URL's last path segment needs to be used as the local filename
pub const ARCHIVE_SUFFIX: &str = ".zip";

/// Local filename when the URL has no `*.zip` segment
pub const DEFAULT_ARCHIVE_NAME: &str = "download.zip";

/// Entries kept by the extractor: markdown and MDX
pub const DEFAULT_TEXT_SUFFIXES: &[&str] = &[".md", ".mdx"];

/// Archive download timeout
pub const DEFAULT_DOWNLOAD_TIMEOUT: Duration = Duration::from_secs(60);

/// Single-page scrape timeout
pub const DEFAULT_SCRAPE_TIMEOUT: Duration = Duration::from_secs(30);

/// Text-extraction proxy: the page URL is appended verbatim
pub const DEFAULT_READER_BASE_URL: &str = "https://r.jina.ai/";

/// Results returned by `search_docs` when the caller gives no limit
pub const DEFAULT_RESULT_LIMIT: i64 = 5;

/// Characters of content shown per search result
pub const DEFAULT_PREVIEW_CHARS: usize = 500;

/// Marker appended to truncated previews
pub const PREVIEW_ELLIPSIS: &str = "...";

/// Tantivy writer budget: 50MB
///
/// Must stay above Tantivy's 15MB per-thread minimum.
pub const DEFAULT_INDEX_MEMORY_BUDGET: usize = 50_000_000;
