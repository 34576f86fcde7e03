//! Reddit Ripper - a bulk media downloader for subreddits
//!
//! This library provides functionality for downloading media posts from
//! subreddit listings.
//!
//! # Features
//!
//! - Enumerate hot/top/new listings through the public Reddit JSON API
//! - Filter posts down to downloadable media by file extension
//! - Concurrent downloads per subreddit with a configurable limit
//! - Resolution of gfycat-style wrapper pages to direct video URLs,
//!   guarded by a consecutive-failure circuit breaker
//! - Skip files that already exist on disk, so runs are repeatable
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use reddit_ripper::{Config, RedditApi};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load(Path::new("config.toml"))?;
//!     let api = RedditApi::new(&config.options.user_agent)?;
//!     let posts = api
//!         .get_feed_posts("earthporn", config.options.category, 25)
//!         .await?;
//!
//!     // ... download logic
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod download;
pub mod error;
pub mod fs;
pub mod media;
pub mod output;
pub mod resolve;

// Re-exports for convenience
pub use api::RedditApi;
pub use config::{Category, Config};
pub use download::{dispatch_feed, FeedStats, RunCounters, RunSummary};
pub use error::{Error, Result};
pub use media::{classify, Eligible};
pub use resolve::Resolver;
