//! Output module for console output and statistics.
//!
//! Provides:
//! - Colored console output
//! - Statistics reporting

pub mod console;
pub mod stats;

pub use console::{
    print_banner, print_config_summary, print_download_banner, print_error, print_info,
    print_warning,
};
pub use stats::{print_feed_stats, print_run_summary};
