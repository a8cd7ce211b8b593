//! Shared fixtures: in-memory zip archives and mock archive servers

use std::io::{Cursor, Write};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use docs_search::{
    ArchiveFetcher, Document, DocumentIndex, DocsResult, IndexBackend, IndexCache, TantivyBackend,
};
use mockito::{Mock, ServerGuard};
use tracing_subscriber::EnvFilter;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

/// Route library logs to the test harness; `RUST_LOG=docs_search=debug` shows pipeline stages
#[allow(dead_code)]
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_test_writer()
        .try_init();
}

/// Build a zip archive from `(name, text)` entries; names ending in `/` become directories
#[allow(dead_code)]
pub fn zip_bytes(entries: &[(&str, &str)]) -> Vec<u8> {
    let raw: Vec<(&str, &[u8])> = entries
        .iter()
        .map(|(name, text)| (*name, text.as_bytes()))
        .collect();
    zip_raw(&raw)
}

/// Like `zip_bytes` but with arbitrary entry bytes
#[allow(dead_code)]
pub fn zip_raw(entries: &[(&str, &[u8])]) -> Vec<u8> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default();
    for (name, content) in entries {
        if name.ends_with('/') {
            writer.add_directory(*name, options).unwrap();
        } else {
            writer.start_file(*name, options).unwrap();
            writer.write_all(content).unwrap();
        }
    }
    writer.finish().unwrap().into_inner()
}

/// The two-document archive used across the suite
#[allow(dead_code)]
pub fn demo_archive() -> Vec<u8> {
    zip_bytes(&[
        ("project-main/", ""),
        ("project-main/docs/", ""),
        ("project-main/docs/a.md", "# Demo\nThis is a demo"),
        ("project-main/docs/b.mdx", "Another guide"),
        ("project-main/src/main.py", "print('demo')"),
    ])
}

/// Serve `body` once at `path`
#[allow(dead_code)]
pub async fn serve_archive(server: &mut ServerGuard, path: &str, body: Vec<u8>) -> Mock {
    server
        .mock("GET", path)
        .with_status(200)
        .with_header("content-type", "application/zip")
        .with_body(body)
        .expect(1)
        .create_async()
        .await
}

/// Backend that counts builds before delegating to Tantivy
#[allow(dead_code)]
#[derive(Default)]
pub struct CountingBackend {
    pub builds: AtomicUsize,
    inner: TantivyBackend,
}

impl CountingBackend {
    #[allow(dead_code)]
    pub fn builds(&self) -> usize {
        self.builds.load(Ordering::SeqCst)
    }
}

impl IndexBackend for CountingBackend {
    fn build(&self, documents: Vec<Document>) -> DocsResult<Arc<dyn DocumentIndex>> {
        self.builds.fetch_add(1, Ordering::SeqCst);
        self.inner.build(documents)
    }
}

/// Backend whose build task panics
#[allow(dead_code)]
pub struct PanickingBackend;

impl IndexBackend for PanickingBackend {
    fn build(&self, _documents: Vec<Document>) -> DocsResult<Arc<dyn DocumentIndex>> {
        panic!("index build blew up");
    }
}

/// Fresh cache wired to `backend`
#[allow(dead_code)]
pub fn cache_with(backend: Arc<CountingBackend>) -> IndexCache {
    IndexCache::new(ArchiveFetcher::default(), backend)
}
