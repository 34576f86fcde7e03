//! Download task construction.

use std::path::{Path, PathBuf};

use url::Url;

use crate::download::state::FeedStats;
use crate::media::{self, Eligible};

/// One downloadable post, ready for dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadTask {
    /// Post URL. Still the wrapper URL for indirect posts.
    pub url: String,
    /// Final destination path.
    pub dest: PathBuf,
    /// True when the URL must be resolved before fetching.
    pub indirect: bool,
}

/// Classifies every candidate URL of a feed and pairs the eligible ones
/// with their destination paths, counting skips along the way.
///
/// The existence check runs against the final destination name, so a
/// wrapper post whose video was downloaded on an earlier run is skipped
/// without touching the resolver.
pub fn build_tasks<F>(
    feed: &str,
    candidates: &[String],
    feed_dir: &Path,
    is_indirect_host: F,
) -> (Vec<DownloadTask>, FeedStats)
where
    F: Fn(&Url) -> bool,
{
    let mut stats = FeedStats::new(feed);
    stats.candidates = candidates.len() as u64;

    let mut tasks = Vec::new();
    for url in candidates {
        let Some(Eligible { filename, indirect }) = media::classify(url, &is_indirect_host)
        else {
            stats.skipped_ineligible += 1;
            tracing::debug!("Skipping non-media URL: {}", url);
            continue;
        };

        let dest = feed_dir.join(&filename);
        if dest.exists() {
            stats.skipped_existing += 1;
            tracing::debug!("Skipping existing file: {}", dest.display());
            continue;
        }

        stats.attempted += 1;
        tasks.push(DownloadTask {
            url: url.clone(),
            dest,
            indirect,
        });
    }

    (tasks, stats)
}
