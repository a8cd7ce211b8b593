//! URL validation and archive filename derivation

use url::Url;

use super::constants::{ARCHIVE_SUFFIX, DEFAULT_ARCHIVE_NAME};
use crate::search::errors::{DocsError, DocsResult};

/// Parse `url`, accepting only http(s) URLs with a host
pub fn parse_http_url(url: &str) -> DocsResult<Url> {
    if url.is_empty() {
        return Err(DocsError::invalid("URL must be a non-empty string"));
    }

    let parsed = Url::parse(url).map_err(|e| DocsError::invalid(format!("Invalid URL: {url} ({e})")))?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(DocsError::invalid(format!("Invalid URL: {url}")));
    }
    if parsed.host_str().is_none_or(str::is_empty) {
        return Err(DocsError::invalid(format!("Invalid URL: {url}")));
    }

    Ok(parsed)
}

/// Local filename for an archive URL
///
/// The last path segment when it ends in `.zip`, otherwise `download.zip`.
/// Query strings and fragments play no part.
pub fn archive_file_name(url: &Url) -> String {
    url.path()
        .rsplit('/')
        .next()
        .filter(|segment| segment.ends_with(ARCHIVE_SUFFIX))
        .map_or_else(|| DEFAULT_ARCHIVE_NAME.to_string(), ToString::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(url: &str) -> String {
        archive_file_name(&parse_http_url(url).unwrap())
    }

    #[test]
    fn uses_last_segment_when_it_is_a_zip() {
        assert_eq!(
            name("https://github.com/jlowin/fastmcp/archive/refs/heads/main.zip"),
            "main.zip"
        );
        assert_eq!(name("http://example.com/a/b/docs.zip?token=1"), "docs.zip");
    }

    #[test]
    fn falls_back_to_default_name() {
        assert_eq!(name("https://example.com/"), "download.zip");
        assert_eq!(name("https://example.com/archive/"), "download.zip");
        assert_eq!(name("https://example.com/file.tar.gz"), "download.zip");
    }

    #[test]
    fn rejects_non_http_urls() {
        for url in ["", "not a url", "ftp://example.com/a.zip", "file:///tmp/a.zip"] {
            let err = parse_http_url(url).unwrap_err();
            assert!(err.is_input_error(), "{url:?}");
        }
    }
}
