//! Command-line argument definitions using clap.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::config::{Category, Config};

/// Subreddit media ripper CLI.
#[derive(Parser, Debug)]
#[command(
    name = "reddit-ripper",
    version,
    about = "Bulk-download media posts from subreddits",
    long_about = "A CLI tool to bulk-download images and videos posted to subreddits.\n\n\
                  Reads the subreddit list from a file or the command line, filters posts \
                  down to media links, and downloads them concurrently per subreddit."
)]
pub struct Args {
    /// Subreddit(s) to rip.
    /// Can specify multiple names separated by spaces.
    #[arg(short, long = "subreddit", value_delimiter = ' ', num_args = 1..)]
    pub subreddits: Option<Vec<String>>,

    /// File with one subreddit name per line.
    #[arg(short = 'f', long = "subreddit-file")]
    pub subreddit_file: Option<PathBuf>,

    /// Listing category to query.
    #[arg(short, long, value_enum)]
    pub category: Option<CategoryArg>,

    /// Posts requested per subreddit (1-100).
    #[arg(short, long)]
    pub limit: Option<u32>,

    /// Root directory media is saved under.
    #[arg(short, long = "output")]
    pub output_directory: Option<PathBuf>,

    /// Downloads kept in flight per subreddit (0 = one per post).
    #[arg(long)]
    pub concurrency: Option<usize>,

    /// User-Agent header sent with every request.
    #[arg(short = 'a', long = "user-agent", env = "REDDIT_RIPPER_USER_AGENT")]
    pub user_agent: Option<String>,

    /// Path to configuration file [default: config.toml].
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Hide progress bars.
    #[arg(long, short)]
    pub quiet: bool,

    /// Enable debug logging.
    #[arg(long, short)]
    pub verbose: bool,
}

/// CLI listing category argument.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CategoryArg {
    /// Currently popular posts.
    Hot,
    /// Highest ranked posts.
    Top,
    /// Most recent posts.
    New,
}

impl From<CategoryArg> for Category {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::Hot => Category::Hot,
            CategoryArg::Top => Category::Top,
            CategoryArg::New => Category::New,
        }
    }
}

impl Args {
    /// Merge CLI arguments into an existing config, overriding where specified.
    pub fn merge_into_config(self, config: &mut Config) {
        if let Some(subreddits) = self.subreddits {
            config.feeds.names = subreddits;
        }

        if let Some(file) = self.subreddit_file {
            config.feeds.file = file;
        }

        if let Some(category) = self.category {
            config.options.category = category.into();
        }

        if let Some(limit) = self.limit {
            config.options.limit = limit;
        }

        if let Some(dir) = self.output_directory {
            config.options.output_directory = Some(dir);
        }

        if let Some(concurrency) = self.concurrency {
            config.options.concurrent_downloads = concurrency;
        }

        if let Some(user_agent) = self.user_agent {
            config.options.user_agent = user_agent;
        }

        if self.quiet {
            config.options.show_progress = false;
        }
    }
}
