//! Read text documents out of a zip archive
//!
//! GitHub archives wrap everything in a `<repo>-<branch>/` folder; that first
//! path segment is dropped so identifiers read like repository paths.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use zip::ZipArchive;
use zip::result::ZipError;

use crate::search::errors::{DocsError, DocsResult, ExtractionError};
use crate::search::types::Document;
use crate::utils::constants::DEFAULT_TEXT_SUFFIXES;

/// Extract `.md` and `.mdx` documents
pub fn extract_markdown_documents(archive_path: &Path) -> DocsResult<Vec<Document>> {
    extract_documents(archive_path, DEFAULT_TEXT_SUFFIXES)
}

/// Extract every file entry whose name ends in one of `suffixes`
///
/// Entries come back in archive order. Directories, other file types, and
/// entries that are not valid UTF-8 are skipped. Repeated identifiers are
/// kept as separate documents.
pub fn extract_documents<S: AsRef<str>>(
    archive_path: &Path,
    suffixes: &[S],
) -> DocsResult<Vec<Document>> {
    if archive_path.as_os_str().is_empty() {
        return Err(DocsError::invalid("Zip path must be a non-empty path"));
    }

    let file = File::open(archive_path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            ExtractionError::NotFound(archive_path.to_path_buf())
        } else {
            ExtractionError::Io {
                path: archive_path.to_path_buf(),
                source,
            }
        }
    })?;

    let corrupt = |e: ZipError| ExtractionError::CorruptArchive {
        path: archive_path.to_path_buf(),
        message: e.to_string(),
    };

    let mut archive = ZipArchive::new(BufReader::new(file)).map_err(corrupt)?;

    let mut documents = Vec::new();
    let mut skipped_binary = 0usize;

    for i in 0..archive.len() {
        let mut entry = archive.by_index(i).map_err(corrupt)?;
        if entry.is_dir() {
            continue;
        }

        let name = entry.name().to_string();
        if !suffixes.iter().any(|s| name.ends_with(s.as_ref())) {
            continue;
        }

        let filename = strip_root_segment(&name);
        if filename.is_empty() {
            continue;
        }

        let mut bytes = Vec::with_capacity(entry.size() as usize);
        entry
            .read_to_end(&mut bytes)
            .map_err(|e| ExtractionError::CorruptArchive {
                path: archive_path.to_path_buf(),
                message: format!("failed to read entry '{name}': {e}"),
            })?;

        match String::from_utf8(bytes) {
            Ok(content) => documents.push(Document::new(filename, content)),
            Err(_) => {
                skipped_binary += 1;
                tracing::debug!(entry = %name, "Skipping entry that is not valid UTF-8");
            }
        }
    }

    tracing::debug!(
        path = %archive_path.display(),
        entries = archive.len(),
        documents = documents.len(),
        skipped_binary,
        "Extracted documents from archive"
    );

    Ok(documents)
}

/// Drop the archive's root folder from an entry name
///
/// `project-main/docs/a.md` becomes `docs/a.md` and `project-main/` becomes
/// empty. A name with no `/` is returned unchanged.
#[must_use]
pub fn strip_root_segment(name: &str) -> &str {
    match name.split_once('/') {
        Some((_, rest)) => rest,
        None => name,
    }
}
