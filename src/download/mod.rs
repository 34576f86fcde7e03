//! Download module for media downloading.
//!
//! This module provides:
//! - Task construction from candidate URLs
//! - Per-feed concurrent dispatch
//! - Media file downloading
//! - Run and per-feed statistics

pub mod dispatcher;
pub mod media;
pub mod state;
pub mod task;

pub use dispatcher::dispatch_feed;
pub use media::fetch_media;
pub use state::{FeedStats, RunCounters, RunSummary};
pub use task::{build_tasks, DownloadTask};
