//! Archive download with a content-unaware local cache
//!
//! The archive for a URL lives at `dest_dir/<name>.zip`. If that file exists
//! it is returned as-is: no request, no freshness check. Deleting the file is
//! how a caller forces a re-download.

use std::path::{Path, PathBuf};
use std::time::Duration;

use futures::StreamExt;
use reqwest::Client;
use tempfile::NamedTempFile;
use tokio::io::AsyncWriteExt;

use crate::search::errors::{DocsResult, DownloadError};
use crate::utils::constants::DEFAULT_DOWNLOAD_TIMEOUT;
use crate::utils::url_utils::{archive_file_name, parse_http_url};

/// Downloads source archives into a local directory
#[derive(Debug, Clone)]
pub struct ArchiveFetcher {
    client: Client,
    timeout: Duration,
}

impl ArchiveFetcher {
    #[must_use]
    pub fn new(client: Client, timeout: Duration) -> Self {
        Self { client, timeout }
    }

    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Return the local path of the archive for `url`, downloading it if absent
    pub async fn fetch(&self, url: &str, dest_dir: &Path) -> DocsResult<PathBuf> {
        let parsed = parse_http_url(url)?;
        let dest_path = dest_dir.join(archive_file_name(&parsed));

        let exists = tokio::fs::try_exists(&dest_path)
            .await
            .map_err(|source| DownloadError::Write {
                path: dest_path.clone(),
                source,
            })?;
        if exists {
            tracing::debug!(
                url = %url,
                path = %dest_path.display(),
                "Archive already on disk, skipping download"
            );
            return Ok(dest_path);
        }

        self.download(parsed, dest_dir, &dest_path).await?;
        Ok(dest_path)
    }

    async fn download(
        &self,
        url: url::Url,
        dest_dir: &Path,
        dest_path: &Path,
    ) -> Result<(), DownloadError> {
        let timeout_secs = self.timeout.as_secs();
        let start = std::time::Instant::now();

        let response = self
            .client
            .get(url.clone())
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| DownloadError::from_reqwest(&e, timeout_secs))?;

        if !response.status().is_success() {
            return Err(DownloadError::HttpStatus {
                status: response.status().as_u16(),
                url: url.to_string(),
            });
        }

        tokio::fs::create_dir_all(dest_dir)
            .await
            .map_err(|source| DownloadError::Write {
                path: dest_dir.to_path_buf(),
                source,
            })?;

        // Stream into a temp file next to the target; it is deleted on drop,
        // so a failed download never leaves a file at `dest_path`.
        let write_err = |source| DownloadError::Write {
            path: dest_path.to_path_buf(),
            source,
        };
        let temp_file = NamedTempFile::new_in(dest_dir).map_err(write_err)?;
        let mut file = tokio::fs::File::from_std(temp_file.reopen().map_err(write_err)?);

        let mut stream = response.bytes_stream();
        let mut total_bytes: u64 = 0;
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(|e| DownloadError::from_reqwest(&e, timeout_secs))?;
            file.write_all(&chunk).await.map_err(write_err)?;
            total_bytes += chunk.len() as u64;
        }
        file.flush().await.map_err(write_err)?;
        file.sync_all().await.map_err(write_err)?;
        drop(file);

        temp_file
            .persist(dest_path)
            .map_err(|e| write_err(e.error))?;

        tracing::info!(
            url = %url,
            path = %dest_path.display(),
            bytes = total_bytes,
            duration_ms = start.elapsed().as_millis(),
            "Downloaded archive"
        );

        Ok(())
    }
}

impl Default for ArchiveFetcher {
    fn default() -> Self {
        Self::new(Client::new(), DEFAULT_DOWNLOAD_TIMEOUT)
    }
}
