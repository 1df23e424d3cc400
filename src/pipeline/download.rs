//! Artifact download with progress reporting.

use std::path::Path;

use anyhow::Result;
use futures::TryStreamExt;
use indicatif::ProgressBar;
use tokio::fs::File;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio_util::io::StreamReader;
use tracing::info;

use crate::constants::{DOWNLOAD_CHUNK_SIZE, PROGRESS_LOG_STEP_PERCENT};
use crate::core::UpdaterError;
use crate::utils::progress::download_bar;

/// Tracks download completion and emits progress observations.
///
/// When the total size is known, a progress line is logged at least every
/// [`PROGRESS_LOG_STEP_PERCENT`] percentage points; otherwise only raw byte
/// counts are reported at the end. Progress is monotonically non-decreasing.
struct DownloadProgress {
    total: Option<u64>,
    downloaded: u64,
    last_logged_percent: u64,
    bar: Option<ProgressBar>,
}

impl DownloadProgress {
    fn new(total: Option<u64>) -> Self {
        Self {
            total,
            downloaded: 0,
            last_logged_percent: 0,
            bar: total.map(download_bar),
        }
    }

    fn advance(&mut self, bytes: u64) {
        self.downloaded += bytes;
        if let Some(bar) = &self.bar {
            bar.set_position(self.downloaded);
        }
        if let Some(total) = self.total.filter(|total| *total > 0) {
            let percent = self.downloaded * 100 / total;
            if percent >= self.last_logged_percent + PROGRESS_LOG_STEP_PERCENT {
                info!(
                    "Download progress: {}% ({}/{} bytes)",
                    percent, self.downloaded, total
                );
                self.last_logged_percent = percent;
            }
        }
    }

    fn finish(self) -> u64 {
        if let Some(bar) = &self.bar {
            bar.finish_and_clear();
        }
        self.downloaded
    }
}

/// Streams the artifact at `url` into `target`, returning the byte count.
///
/// The response body is read and written in [`DOWNLOAD_CHUNK_SIZE`] chunks
/// until exhausted. The expected total comes from the `Content-Length`
/// header when present. Any transport or I/O failure maps to
/// [`UpdaterError::Download`]; a partial file may be left behind, and the
/// caller must not attempt installation after a failure.
pub async fn download_artifact(
    client: &reqwest::Client,
    url: &str,
    target: &Path,
) -> Result<u64> {
    let download_err = |reason: String| UpdaterError::Download {
        url: url.to_string(),
        reason,
    };

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| download_err(e.to_string()))?;

    if !response.status().is_success() {
        return Err(download_err(format!(
            "artifact endpoint returned HTTP {}",
            response.status()
        ))
        .into());
    }

    info!("Downloading {}", target.display());

    let total = response.content_length();
    let mut progress = DownloadProgress::new(total);

    let stream = response.bytes_stream().map_err(std::io::Error::other);
    let mut reader = StreamReader::new(stream);
    let mut file = File::create(target)
        .await
        .map_err(|e| download_err(e.to_string()))?;
    let mut chunk = vec![0u8; DOWNLOAD_CHUNK_SIZE];

    loop {
        let read = reader
            .read(&mut chunk)
            .await
            .map_err(|e| download_err(e.to_string()))?;
        if read == 0 {
            break;
        }
        file.write_all(&chunk[..read])
            .await
            .map_err(|e| download_err(e.to_string()))?;
        progress.advance(read as u64);
    }

    file.flush().await.map_err(|e| download_err(e.to_string()))?;

    let downloaded = progress.finish();
    info!("Downloaded {} bytes to {}", downloaded, target.display());
    Ok(downloaded)
}
