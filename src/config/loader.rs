//! Configuration structures and TOML loading.

use crate::config::Category;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Top-level configuration, usually loaded from `config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub feeds: FeedsConfig,
    #[serde(default)]
    pub options: OptionsConfig,
    #[serde(default)]
    pub resolver: ResolverConfig,
}

/// Where the list of subreddits to rip comes from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedsConfig {
    /// File with one subreddit name per line.
    #[serde(default = "default_feed_file")]
    pub file: PathBuf,
    /// Inline subreddit names. When non-empty, the file is ignored.
    #[serde(default)]
    pub names: Vec<String>,
}

/// General download behaviour.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionsConfig {
    /// Listing category to query (hot, top or new).
    #[serde(default)]
    pub category: Category,
    /// Posts requested per subreddit, 1 to 100.
    #[serde(default = "default_limit")]
    pub limit: u32,
    /// Root directory media is saved under. Defaults to `images/`.
    #[serde(default)]
    pub output_directory: Option<PathBuf>,
    /// User-Agent header sent with every request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Downloads kept in flight per subreddit. 0 means one per post.
    #[serde(default = "default_concurrent_downloads")]
    pub concurrent_downloads: usize,
    /// Show progress bars for large files.
    #[serde(default = "default_show_progress")]
    pub show_progress: bool,
}

/// Tuning for the indirect-link resolver.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Consecutive failures after which resolution is disabled.
    #[serde(default = "default_failure_threshold")]
    pub failure_threshold: u32,
    /// Reset the failure count when a resolution succeeds.
    #[serde(default)]
    pub reset_on_success: bool,
    /// Lower bound of the random pre-request delay, in seconds.
    #[serde(default = "default_jitter_min_secs")]
    pub jitter_min_secs: f64,
    /// Upper bound of the random pre-request delay, in seconds.
    #[serde(default = "default_jitter_max_secs")]
    pub jitter_max_secs: f64,
}

fn default_feed_file() -> PathBuf {
    PathBuf::from("subreddits.txt")
}

fn default_limit() -> u32 {
    100
}

fn default_user_agent() -> String {
    format!("reddit-ripper/{}", env!("CARGO_PKG_VERSION"))
}

fn default_concurrent_downloads() -> usize {
    16
}

fn default_show_progress() -> bool {
    true
}

fn default_failure_threshold() -> u32 {
    10
}

fn default_jitter_min_secs() -> f64 {
    1.0
}

fn default_jitter_max_secs() -> f64 {
    4.0
}

impl Default for FeedsConfig {
    fn default() -> Self {
        Self {
            file: default_feed_file(),
            names: Vec::new(),
        }
    }
}

impl Default for OptionsConfig {
    fn default() -> Self {
        Self {
            category: Category::default(),
            limit: default_limit(),
            output_directory: None,
            user_agent: default_user_agent(),
            concurrent_downloads: default_concurrent_downloads(),
            show_progress: default_show_progress(),
        }
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            failure_threshold: default_failure_threshold(),
            reset_on_success: false,
            jitter_min_secs: default_jitter_min_secs(),
            jitter_max_secs: default_jitter_max_secs(),
        }
    }
}

impl Config {
    /// Loads configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Config> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            Error::Config(format!(
                "Failed to parse config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Ok(config)
    }

    /// Loads configuration from `path`, falling back to defaults when the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Config> {
        if path.exists() {
            Config::load(path)
        } else {
            tracing::debug!("No config file at {}, using defaults", path.display());
            Ok(Config::default())
        }
    }

    /// Root directory media is saved under.
    pub fn output_directory(&self) -> PathBuf {
        self.options
            .output_directory
            .clone()
            .unwrap_or_else(|| PathBuf::from("images"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_gives_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.feeds.file, PathBuf::from("subreddits.txt"));
        assert!(config.feeds.names.is_empty());
        assert_eq!(config.options.category, Category::Hot);
        assert_eq!(config.options.limit, 100);
        assert_eq!(config.options.concurrent_downloads, 16);
        assert!(config.options.show_progress);
        assert_eq!(config.resolver.failure_threshold, 10);
        assert!(!config.resolver.reset_on_success);
        assert_eq!(config.output_directory(), PathBuf::from("images"));
    }

    #[test]
    fn test_full_toml() {
        let content = r#"
            [feeds]
            file = "subs.txt"
            names = ["earthporn", "castles"]

            [options]
            category = "top"
            limit = 25
            output_directory = "/tmp/rips"
            user_agent = "test-agent/1.0"
            concurrent_downloads = 4
            show_progress = false

            [resolver]
            failure_threshold = 3
            reset_on_success = true
            jitter_min_secs = 0.5
            jitter_max_secs = 2.0
        "#;
        let config: Config = toml::from_str(content).unwrap();
        assert_eq!(config.feeds.file, PathBuf::from("subs.txt"));
        assert_eq!(config.feeds.names, vec!["earthporn", "castles"]);
        assert_eq!(config.options.category, Category::Top);
        assert_eq!(config.options.limit, 25);
        assert_eq!(config.output_directory(), PathBuf::from("/tmp/rips"));
        assert_eq!(config.options.user_agent, "test-agent/1.0");
        assert_eq!(config.options.concurrent_downloads, 4);
        assert!(!config.options.show_progress);
        assert_eq!(config.resolver.failure_threshold, 3);
        assert!(config.resolver.reset_on_success);
        assert_eq!(config.resolver.jitter_min_secs, 0.5);
        assert_eq!(config.resolver.jitter_max_secs, 2.0);
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let content = r#"
            [options]
            limit = 10
        "#;
        let config: Config = toml::from_str(content).unwrap();
        assert_eq!(config.options.limit, 10);
        assert_eq!(config.options.category, Category::Hot);
        assert_eq!(config.resolver.failure_threshold, 10);
    }

    #[test]
    fn test_load_missing_file_is_error() {
        let err = Config::load(Path::new("/nonexistent/config.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = Config::load_or_default(Path::new("/nonexistent/config.toml")).unwrap();
        assert_eq!(config.options.limit, 100);
    }

    #[test]
    fn test_invalid_toml_is_error() {
        let result: std::result::Result<Config, _> = toml::from_str("[options]\nlimit = \"ten\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_malformed_config_file_is_config_error() {
        let temp = tempfile::tempdir().unwrap();
        let file = temp.path().join("config.toml");
        std::fs::write(&file, "[options]\nlimit = \"ten\"\n").unwrap();

        // Unparseable config must be a configuration error, so the
        // process exits with the config error code before any network.
        let err = Config::load(&file).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert!(err.to_string().contains("Failed to parse config file"));
    }
}
