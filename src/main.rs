//! Reddit Ripper - CLI entry point.

use std::path::Path;
use std::process::ExitCode;
use std::time::{Duration, Instant};

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use reddit_ripper::{
    api::RedditApi,
    cli::Args,
    config::{load_feed_list, validate_config, validate_feed_names, Config},
    download::{dispatch_feed, RunCounters, RunSummary},
    error::{exit_codes, Error, Result},
    fs::ensure_feed_dirs,
    output::{
        print_banner, print_config_summary, print_download_banner, print_error, print_feed_stats,
        print_info, print_run_summary, print_warning,
    },
    resolve::Resolver,
};

/// Pause between announcing the download phase and starting it.
const DOWNLOAD_START_DELAY: Duration = Duration::from_secs(2);

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(e) => {
            print_error(&format!("{}", e));
            match e {
                Error::Config(_) | Error::ConfigValidation { .. } => {
                    ExitCode::from(exit_codes::CONFIG_ERROR as u8)
                }
                _ => ExitCode::from(exit_codes::UNEXPECTED_ERROR as u8),
            }
        }
    }
}

async fn run() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Set up logging
    let log_level = if args.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt().with_env_filter(filter).with_target(false).init();

    // Print banner
    print_banner();

    // Load configuration. An explicitly passed config file must exist;
    // the default one is optional.
    let mut config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::load_or_default(Path::new("config.toml"))?,
    };

    // Merge CLI arguments into config
    args.merge_into_config(&mut config);

    // Validate configuration and the subreddit list
    validate_config(&config)?;
    let feeds = load_feed_list(&config)?;
    validate_feed_names(&feeds)?;

    let output_root = config.output_directory();
    print_config_summary(
        &feeds,
        &config.options.category.to_string(),
        config.options.limit,
        &output_root.display().to_string(),
    );

    // Initialize HTTP clients
    let api = RedditApi::new(&config.options.user_agent)?;
    let resolver = Resolver::new(&config.options.user_agent, &config.resolver)?;

    let started = Instant::now();
    let mut summary = RunSummary::default();

    // Fetch every listing up front, so directory creation and the
    // download phase work from a fixed set of feeds.
    print_info(&format!(
        "Fetching {} listings for {} subreddits...",
        config.options.category,
        feeds.len()
    ));

    let mut enumerated: Vec<(String, Vec<String>)> = Vec::new();
    for feed in &feeds {
        match api
            .get_feed_posts(feed, config.options.category, config.options.limit)
            .await
        {
            Ok(posts) => {
                tracing::debug!("r/{}: {} candidate posts", feed, posts.len());
                enumerated.push((feed.clone(), posts));
            }
            Err(e) => {
                print_error(&format!("Failed to fetch r/{}: {}", feed, e));
                summary.mark_feed_failed();
            }
        }
    }

    // One directory per subreddit, created before anything downloads
    ensure_feed_dirs(&output_root, &feeds)?;

    let counters = RunCounters::new();

    if enumerated.is_empty() {
        print_warning("No subreddit listings could be fetched");
    } else {
        let total_candidates: u64 = enumerated.iter().map(|(_, posts)| posts.len() as u64).sum();
        print_download_banner(
            enumerated.len(),
            total_candidates,
            DOWNLOAD_START_DELAY.as_secs(),
        );
        tokio::time::sleep(DOWNLOAD_START_DELAY).await;

        // Feeds run strictly one after another; downloads only run
        // concurrently within a feed.
        for (feed, candidates) in &enumerated {
            let stats = dispatch_feed(
                &api,
                &resolver,
                &counters,
                &config,
                feed,
                candidates,
                &output_root,
            )
            .await;

            print_feed_stats(&stats);
            summary.add_feed_stats(&stats);
        }
    }

    summary.finalize(&counters, started.elapsed());
    print_run_summary(&summary);

    Ok(())
}
