//! Statistics reporting.

use console::style;

use crate::download::{FeedStats, RunSummary};

/// Print statistics for a single subreddit.
pub fn print_feed_stats(stats: &FeedStats) {
    println!();
    println!(
        "{}",
        style(format!("Statistics for r/{}:", stats.feed)).bold()
    );
    println!("  Candidates: {}", stats.candidates);
    println!(
        "  Skipped:    {} ({} non-media, {} already saved)",
        stats.skipped(),
        stats.skipped_ineligible,
        stats.skipped_existing
    );
    println!("  Downloaded: {}", style(stats.succeeded).green());
    if stats.failed > 0 {
        println!("  Failed:     {}", style(stats.failed).red());
    }
}

/// Print the final summary across all subreddits.
pub fn print_run_summary(summary: &RunSummary) {
    println!();
    println!("{}", style("═".repeat(50)).dim());
    println!("{}", style("Run Summary:").bold());
    println!("  Subreddits processed: {}", summary.feeds_processed);
    if summary.feeds_failed > 0 {
        println!(
            "  Subreddits failed:    {}",
            style(summary.feeds_failed).red()
        );
    }
    println!("  Candidates seen: {}", summary.candidates);
    println!("  Skipped:         {}", summary.skipped);
    println!("  Downloaded:      {}", style(summary.succeeded).green());
    println!("  Failed:          {}", style(summary.failed).red());
    println!("  Elapsed:         {} seconds", summary.elapsed_secs);
    println!("{}", style("═".repeat(50)).dim());
}
