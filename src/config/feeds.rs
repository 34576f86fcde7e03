//! Subreddit list loading.

use crate::config::Config;
use crate::error::{Error, Result};
use std::collections::HashSet;

/// Returns the subreddits to rip, either from the inline `names` list or
/// from the subreddit file.
///
/// Entries are trimmed, an optional `r/` prefix is stripped, blank lines
/// and `#` comments are skipped and duplicates are dropped while keeping
/// first-seen order.
pub fn load_feed_list(config: &Config) -> Result<Vec<String>> {
    let raw = if !config.feeds.names.is_empty() {
        config.feeds.names.clone()
    } else {
        read_feed_file(config)?
    };

    let mut seen = HashSet::new();
    let feeds: Vec<String> = raw
        .iter()
        .map(|line| normalize_name(line))
        .filter(|name| !name.is_empty() && !name.starts_with('#'))
        .filter(|name| seen.insert(name.clone()))
        .collect();

    if feeds.is_empty() {
        return Err(Error::Config(format!(
            "No subreddits found! Add at least one name to '{}' or pass one with --subreddit",
            config.feeds.file.display()
        )));
    }

    Ok(feeds)
}

fn read_feed_file(config: &Config) -> Result<Vec<String>> {
    let path = &config.feeds.file;
    if !path.is_file() {
        return Err(Error::Config(format!(
            "The subreddit file '{}' does not exist",
            path.display()
        )));
    }

    let content = std::fs::read_to_string(path)?;
    Ok(content.lines().map(|line| line.to_string()).collect())
}

fn normalize_name(line: &str) -> String {
    let trimmed = line.trim();
    let stripped = trimmed
        .strip_prefix("/r/")
        .or_else(|| trimmed.strip_prefix("r/"))
        .unwrap_or(trimmed);
    stripped.to_string()
}
