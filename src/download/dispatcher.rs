//! Per-feed concurrent download dispatch.

use std::path::Path;

use futures::stream::{self, StreamExt};

use crate::api::RedditApi;
use crate::config::Config;
use crate::download::media::fetch_media;
use crate::download::state::{FeedStats, RunCounters};
use crate::download::task::{build_tasks, DownloadTask};
use crate::error::Result;
use crate::fs;
use crate::resolve::Resolver;

/// Outcome of one download task.
enum TaskOutcome {
    Succeeded,
    Failed,
}

/// Classifies and downloads every candidate of one subreddit.
///
/// Downloads run concurrently up to the configured limit; the function
/// returns only once all of them have finished, so feeds never overlap.
pub async fn dispatch_feed(
    api: &RedditApi,
    resolver: &Resolver,
    counters: &RunCounters,
    config: &Config,
    feed: &str,
    candidates: &[String],
    output_root: &Path,
) -> FeedStats {
    let feed_dir = fs::feed_dir(output_root, feed);
    let (tasks, mut stats) =
        build_tasks(feed, candidates, &feed_dir, |url| resolver.is_indirect(url));

    if tasks.is_empty() {
        tracing::debug!("Nothing to download for r/{}", feed);
        return stats;
    }

    // 0 lifts the cap: every task gets its own slot.
    let limit = match config.options.concurrent_downloads {
        0 => tasks.len(),
        n => n,
    };

    tracing::info!("Downloading {} files from r/{}", tasks.len(), feed);

    let outcomes: Vec<TaskOutcome> = stream::iter(tasks)
        .map(|task| run_task(api, resolver, counters, config, task))
        .buffer_unordered(limit)
        .collect()
        .await;

    for outcome in outcomes {
        match outcome {
            TaskOutcome::Succeeded => stats.succeeded += 1,
            TaskOutcome::Failed => stats.failed += 1,
        }
    }

    stats
}

/// Runs one task to completion. Failures are logged and counted, never
/// propagated, so one bad file cannot take the feed down.
async fn run_task(
    api: &RedditApi,
    resolver: &Resolver,
    counters: &RunCounters,
    config: &Config,
    task: DownloadTask,
) -> TaskOutcome {
    let result: Result<()> = async {
        let url = if task.indirect {
            resolver.resolve(&task.url).await?
        } else {
            task.url.clone()
        };
        fetch_media(api, &url, &task.dest, config.options.show_progress).await
    }
    .await;

    match result {
        Ok(()) => {
            counters.record_success();
            TaskOutcome::Succeeded
        }
        Err(e) => {
            tracing::warn!("Failed to download {}: {}", task.url, e);
            counters.record_failure();
            TaskOutcome::Failed
        }
    }
}
