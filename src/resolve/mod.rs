//! Indirect-link resolution.
//!
//! Some post URLs do not point at a media file but at a wrapper page
//! (gfycat and friends). The resolver fetches such pages, extracts the
//! real video URL from the HTML and disables itself for the rest of the
//! run after too many consecutive failures.

mod gfycat;

pub use gfycat::GfycatParser;

use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::time::Duration;

use rand::Rng;
use reqwest::Client;
use tokio::time::sleep;
use url::Url;

use crate::config::ResolverConfig;
use crate::error::{Error, Result};

/// Per-request timeout for wrapper page fetches.
const RESOLVE_TIMEOUT: Duration = Duration::from_secs(2);

/// Extracts a direct media URL from one host's wrapper pages.
pub trait PageParser: Send + Sync {
    /// Short host name used in logs.
    fn name(&self) -> &'static str;

    /// True when this parser knows how to handle the URL.
    fn matches(&self, url: &Url) -> bool;

    /// Extracts the direct media URL from the page HTML.
    fn extract(&self, html: &str) -> Option<String>;
}

/// Consecutive-failure gate for the resolver.
///
/// Failures accumulate; once `failures >= threshold`, every further
/// resolution is refused without touching the network. The counter only
/// resets when `reset_on_success` is set.
pub struct CircuitBreaker {
    failures: AtomicU32,
    warned: AtomicBool,
    threshold: u32,
    reset_on_success: bool,
}

impl CircuitBreaker {
    pub fn new(threshold: u32, reset_on_success: bool) -> Self {
        Self {
            failures: AtomicU32::new(0),
            warned: AtomicBool::new(false),
            threshold,
            reset_on_success,
        }
    }

    /// True when resolution is disabled.
    pub fn is_open(&self) -> bool {
        self.failures.load(Ordering::Relaxed) >= self.threshold
    }

    /// Marks one refused call. Returns true exactly once, for the first
    /// refusal, so the caller warns the operator a single time.
    pub fn note_blocked(&self) -> bool {
        !self.warned.swap(true, Ordering::Relaxed)
    }

    pub fn record_failure(&self) {
        self.failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_success(&self) {
        if self.reset_on_success {
            self.failures.store(0, Ordering::Relaxed);
        }
    }

    pub fn consecutive_failures(&self) -> u32 {
        self.failures.load(Ordering::Relaxed)
    }
}

/// Resolves wrapper-page URLs to direct media URLs.
pub struct Resolver {
    client: Client,
    parsers: Vec<Box<dyn PageParser>>,
    breaker: CircuitBreaker,
    jitter_min_secs: f64,
    jitter_max_secs: f64,
}

impl Resolver {
    /// Creates a resolver with the default parser set.
    pub fn new(user_agent: &str, config: &ResolverConfig) -> Result<Self> {
        Self::with_parsers(user_agent, config, vec![Box::new(GfycatParser)])
    }

    /// Creates a resolver with a custom parser set (used by tests).
    pub fn with_parsers(
        user_agent: &str,
        config: &ResolverConfig,
        parsers: Vec<Box<dyn PageParser>>,
    ) -> Result<Self> {
        let client = Client::builder()
            .user_agent(user_agent)
            .build()
            .map_err(|e| Error::Resolve(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            parsers,
            breaker: CircuitBreaker::new(config.failure_threshold, config.reset_on_success),
            jitter_min_secs: config.jitter_min_secs,
            jitter_max_secs: config.jitter_max_secs,
        })
    }

    /// True when some parser can handle this URL.
    pub fn is_indirect(&self, url: &Url) -> bool {
        self.parsers.iter().any(|parser| parser.matches(url))
    }

    pub fn breaker(&self) -> &CircuitBreaker {
        &self.breaker
    }

    /// Resolves a wrapper URL to the direct media URL behind it.
    ///
    /// Refused without any network traffic once the breaker is open.
    pub async fn resolve(&self, url_str: &str) -> Result<String> {
        if self.breaker.is_open() {
            if self.breaker.note_blocked() {
                tracing::warn!(
                    "Link resolution disabled after {} consecutive failures, \
                     skipping all remaining wrapped links",
                    self.breaker.consecutive_failures()
                );
            }
            return Err(Error::ResolveBlocked);
        }

        let url = Url::parse(url_str)?;
        let parser = self
            .parsers
            .iter()
            .find(|parser| parser.matches(&url))
            .ok_or_else(|| Error::Resolve(format!("No parser for {}", url_str)))?;

        // Rate limiting delay so the host does not see a burst of fetches
        let delay_secs =
            rand::thread_rng().gen_range(self.jitter_min_secs..=self.jitter_max_secs);
        sleep(Duration::from_secs_f64(delay_secs)).await;

        match self.fetch_and_extract(parser.as_ref(), url_str).await {
            Ok(resolved) => {
                self.breaker.record_success();
                Ok(resolved)
            }
            Err(e) => {
                self.breaker.record_failure();
                Err(e)
            }
        }
    }

    async fn fetch_and_extract(&self, parser: &dyn PageParser, url: &str) -> Result<String> {
        tracing::debug!("Resolving {} via {} parser", url, parser.name());

        let response = self
            .client
            .get(url)
            .timeout(RESOLVE_TIMEOUT)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::BadStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let html = response.text().await?;
        parser
            .extract(&html)
            .ok_or_else(|| Error::Resolve(format!("No video source found in {}", url)))
    }
}
