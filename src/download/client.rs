//! HTTP client wrapper for fetching image bytes to disk.
//!
//! A thin layer over `reqwest` with explicit timeouts and a streaming body
//! write, so large PNG scans never sit fully in memory. Created once per run
//! and reused across units for connection pooling.

use std::path::Path;

use futures_util::StreamExt;
use reqwest::Client;
use tokio::fs::File;
use tokio::io::{AsyncWriteExt, BufWriter};
use tracing::{debug, instrument};

use super::error::DownloadError;

/// Default HTTP connect timeout (30 seconds).
const CONNECT_TIMEOUT_SECS: u64 = 30;

/// Default HTTP read timeout (5 minutes, generous for large PNG scans).
const READ_TIMEOUT_SECS: u64 = 300;

/// HTTP client for downloading image files.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpClient {
    /// Creates a new HTTP client with default timeouts.
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client builder fails with the static configuration.
    /// This should never happen in practice.
    #[must_use]
    pub fn new() -> Self {
        Self::new_with_timeouts(CONNECT_TIMEOUT_SECS, READ_TIMEOUT_SECS)
    }

    /// Creates a new HTTP client with explicit timeout values.
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client builder fails to build with the supplied
    /// timeout configuration.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn new_with_timeouts(connect_timeout_secs: u64, read_timeout_secs: u64) -> Self {
        let client = crate::http::build_client(connect_timeout_secs, read_timeout_secs)
            .expect("failed to build HTTP client with static configuration");
        Self { client }
    }

    /// Fetches `url` once and streams the full response body to `path`.
    ///
    /// No retries are performed; a failure here is terminal for the unit.
    ///
    /// # Errors
    ///
    /// Returns [`DownloadError`] if the request fails, the server returns a
    /// non-success status (nothing is written in either case), or writing to
    /// disk fails.
    #[instrument(skip(self), fields(url = %url))]
    pub async fn fetch_to_file(&self, url: &str, path: &Path) -> Result<(), DownloadError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| DownloadError::network(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DownloadError::http_status(url, status.as_u16()));
        }

        let file = File::create(path)
            .await
            .map_err(|e| DownloadError::io(path, e))?;

        // Stream response body to file, with cleanup on error: a partial
        // file left behind would satisfy the next run's existence check and
        // the truncated image would be kept as if complete.
        let stream_result = stream_body(file, response, url, path).await;
        if stream_result.is_err() {
            debug!(path = %path.display(), "cleaning up partial file after error");
            let _ = tokio::fs::remove_file(path).await;
        }

        let bytes_written = stream_result?;
        debug!(bytes = bytes_written, path = %path.display(), "image written");
        Ok(())
    }
}

async fn stream_body(
    file: File,
    response: reqwest::Response,
    url: &str,
    path: &Path,
) -> Result<u64, DownloadError> {
    let mut writer = BufWriter::new(file);
    let mut stream = response.bytes_stream();
    let mut bytes_written: u64 = 0;

    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(|e| DownloadError::network(url, e))?;
        writer
            .write_all(&chunk)
            .await
            .map_err(|e| DownloadError::io(path, e))?;
        bytes_written += chunk.len() as u64;
    }

    writer.flush().await.map_err(|e| DownloadError::io(path, e))?;
    Ok(bytes_written)
}
