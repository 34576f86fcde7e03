//! Error types for the reddit-ripper application.

use thiserror::Error;

/// Main error type for the application.
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration value for '{field}': {message}")]
    ConfigValidation { field: String, message: String },

    // Feed-level errors
    #[error("Fetching posts for r/{feed} failed: HTTP {status}")]
    FeedFetch { feed: String, status: u16 },

    #[error("Subreddit {0} not found or has no posts")]
    EmptyFeed(String),

    #[error("API error: {0}")]
    Api(String),

    // Task-level errors
    #[error("Download failed: {0}")]
    Download(String),

    #[error("URL {url} returned HTTP {status}")]
    BadStatus { url: String, status: u16 },

    #[error("Resolution failed: {0}")]
    Resolve(String),

    #[error("Indirect resolution disabled for the rest of this run")]
    ResolveBlocked,

    // File system errors
    #[error("Invalid filename: {0}")]
    InvalidFilename(String),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // HTTP errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    // URL parsing errors
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes.
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const CONFIG_ERROR: i32 = 1;
    pub const UNEXPECTED_ERROR: i32 = 2;
}
