//! UTF-8-safe string truncation utilities
//!
//! Documentation files are full of emoji, box-drawing characters and CJK
//! text, so every cut is made on a character boundary.

use super::constants::PREVIEW_ELLIPSIS;

/// Safely truncate a string to a maximum number of CHARACTERS (not bytes).
///
/// # Examples
/// ```
/// # use docs_search::utils::string_utils::safe_truncate_chars;
/// assert_eq!(safe_truncate_chars("Hello, World!", 5), "Hello");
/// assert_eq!(safe_truncate_chars("🎉🎊🎈", 2), "🎉🎊");
/// assert_eq!(safe_truncate_chars("Hi", 100), "Hi");
/// ```
#[inline]
pub fn safe_truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        None => s,
        Some((byte_idx, _)) => &s[..byte_idx],
    }
}

/// First `max_chars` characters of `content`, with `...` appended if anything was cut
///
/// # Examples
/// ```
/// # use docs_search::utils::string_utils::preview;
/// assert_eq!(preview("short", 10), "short");
/// assert_eq!(preview("abcdef", 3), "abc...");
/// ```
#[must_use]
pub fn preview(content: &str, max_chars: usize) -> String {
    let head = safe_truncate_chars(content, max_chars);
    if head.len() == content.len() {
        head.to_string()
    } else {
        format!("{head}{PREVIEW_ELLIPSIS}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_keeps_exact_length_content_untouched() {
        let content = "a".repeat(500);
        assert_eq!(preview(&content, 500), content);
    }

    #[test]
    fn preview_cuts_on_char_boundaries() {
        let content = "世界".repeat(300);
        let shown = preview(&content, 500);
        assert!(shown.ends_with("..."));
        assert_eq!(shown.chars().count(), 503);
    }
}
