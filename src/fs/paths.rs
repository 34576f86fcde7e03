//! Output directory layout.
//!
//! Every feed gets its own directory under the output root:
//! `<output_root>/<feed>/<filename>`.

use std::path::{Path, PathBuf};

use crate::error::Result;

/// Get the directory a feed's files are written into.
pub fn feed_dir(output_root: &Path, feed: &str) -> PathBuf {
    output_root.join(feed)
}

/// Create the per-feed directories for every feed in the run.
///
/// Also creates the output root itself when it is the default relative
/// directory that does not exist yet.
pub fn ensure_feed_dirs(output_root: &Path, feeds: &[String]) -> Result<()> {
    for feed in feeds {
        let path = feed_dir(output_root, feed);
        if !path.exists() {
            tracing::debug!("Making dir for {}", feed);
            std::fs::create_dir_all(&path)?;
        }
    }
    Ok(())
}
