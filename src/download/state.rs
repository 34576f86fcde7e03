//! Run and per-feed statistics.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Per-subreddit counters for one dispatch round.
///
/// Every candidate lands in exactly one bucket: skipped (ineligible or
/// already on disk) or attempted, and every attempted task ends up
/// succeeded or failed.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FeedStats {
    pub feed: String,
    pub candidates: u64,
    pub skipped_ineligible: u64,
    pub skipped_existing: u64,
    pub attempted: u64,
    pub succeeded: u64,
    pub failed: u64,
}

impl FeedStats {
    pub fn new(feed: &str) -> Self {
        Self {
            feed: feed.to_string(),
            ..Default::default()
        }
    }

    /// Skipped candidates of either kind.
    pub fn skipped(&self) -> u64 {
        self.skipped_ineligible + self.skipped_existing
    }
}

/// Run-wide success/failure counters shared by all download tasks.
#[derive(Debug, Default)]
pub struct RunCounters {
    succeeded: AtomicU64,
    failed: AtomicU64,
}

impl RunCounters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_success(&self) {
        self.succeeded.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_failure(&self) {
        self.failed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn succeeded(&self) -> u64 {
        self.succeeded.load(Ordering::Relaxed)
    }

    pub fn failed(&self) -> u64 {
        self.failed.load(Ordering::Relaxed)
    }
}

/// Aggregated numbers for the final report.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub feeds_processed: u64,
    pub feeds_failed: u64,
    pub candidates: u64,
    pub skipped: u64,
    pub succeeded: u64,
    pub failed: u64,
    pub elapsed_secs: u64,
}

impl RunSummary {
    /// Folds one finished feed into the totals.
    pub fn add_feed_stats(&mut self, stats: &FeedStats) {
        self.feeds_processed += 1;
        self.candidates += stats.candidates;
        self.skipped += stats.skipped();
    }

    /// Marks a feed whose listing could not be fetched. The feed still
    /// counts as processed, with zero candidates.
    pub fn mark_feed_failed(&mut self) {
        self.feeds_processed += 1;
        self.feeds_failed += 1;
    }

    /// Takes the final download counts and the wall-clock time, rounded
    /// up to whole seconds.
    pub fn finalize(&mut self, counters: &RunCounters, elapsed: Duration) {
        self.succeeded = counters.succeeded();
        self.failed = counters.failed();
        self.elapsed_secs = elapsed.as_secs_f64().ceil() as u64;
    }
}
