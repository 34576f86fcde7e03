//! Console output utilities.

use console::style;

/// Print an info message.
pub fn print_info(message: &str) {
    println!("{} {}", style("INFO").cyan().bold(), message);
}

/// Print a warning message.
pub fn print_warning(message: &str) {
    println!("{} {}", style("WARN").yellow().bold(), message);
}

/// Print an error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", style("ERROR").red().bold(), message);
}

/// Print the application banner.
pub fn print_banner() {
    let banner = r#"
╔═══════════════════════════════════════════════════════╗
║     Reddit Ripper                                     ║
║     Bulk media downloader for subreddits              ║
╚═══════════════════════════════════════════════════════╝
"#;
    println!("{}", style(banner).cyan());
}

/// Print configuration summary.
pub fn print_config_summary(feeds: &[String], category: &str, limit: u32, output_dir: &str) {
    println!();
    println!("{}", style("Configuration:").bold());
    println!("  Subreddits: {}", feeds.join(", "));
    println!("  Category:   {}", category);
    println!("  Limit:      {} posts per subreddit", limit);
    println!("  Directory:  {}", output_dir);
    println!();
}

/// Announce the download phase before it starts.
pub fn print_download_banner(feeds: usize, candidates: u64, delay_secs: u64) {
    println!();
    println!(
        "{}",
        style(format!(
            "Downloading {} candidate posts from {} subreddits",
            candidates, feeds
        ))
        .bold()
    );
    println!("Starting in {} seconds...", delay_secs);
}
