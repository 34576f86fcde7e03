//! Media file downloading.

use std::path::Path;

use futures::StreamExt;
use indicatif::{ProgressBar, ProgressStyle};
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

use crate::api::RedditApi;
use crate::error::{Error, Result};

/// Minimum file size to show a progress bar (20 MB).
const PROGRESS_THRESHOLD: u64 = 20 * 1024 * 1024;

/// Downloads one media URL to `dest`, streaming chunks to disk.
///
/// A failed transfer leaves whatever was written so far in place.
pub async fn fetch_media(
    api: &RedditApi,
    url: &str,
    dest: &Path,
    show_progress: bool,
) -> Result<()> {
    let response = api.download_file(url).await?;

    let content_length = response.content_length();
    let show_progress =
        show_progress && content_length.map(|l| l > PROGRESS_THRESHOLD).unwrap_or(false);

    let progress = if show_progress {
        let pb = ProgressBar::new(content_length.unwrap_or(0));
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({eta})")
                .unwrap()
                .progress_chars("#>-"),
        );
        Some(pb)
    } else {
        None
    };

    let mut file = File::create(dest).await?;
    let mut stream = response.bytes_stream();
    let mut downloaded: u64 = 0;

    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(|e| Error::Download(format!("Stream error: {}", e)))?;
        file.write_all(&chunk).await?;
        downloaded += chunk.len() as u64;

        if let Some(ref pb) = progress {
            pb.set_position(downloaded);
        }
    }

    file.flush().await?;

    if let Some(pb) = progress {
        pb.finish_and_clear();
    }

    tracing::debug!("Downloaded {} to {}", url, dest.display());
    Ok(())
}
