//! Configuration and subreddit name validation.

use crate::config::Config;
use crate::error::{Error, Result};
use regex::Regex;

/// Checks a loaded (and CLI-merged) configuration for nonsense values.
pub fn validate_config(config: &Config) -> Result<()> {
    if config.options.limit == 0 || config.options.limit > 100 {
        return Err(Error::ConfigValidation {
            field: "options.limit".to_string(),
            message: format!(
                "must be between 1 and 100, got {}",
                config.options.limit
            ),
        });
    }

    if config.options.user_agent.trim().is_empty() {
        return Err(Error::ConfigValidation {
            field: "options.user_agent".to_string(),
            message: "must not be empty".to_string(),
        });
    }

    if let Some(dir) = &config.options.output_directory {
        if !dir.exists() {
            return Err(Error::ConfigValidation {
                field: "options.output_directory".to_string(),
                message: format!("directory '{}' does not exist", dir.display()),
            });
        }
    }

    if config.resolver.failure_threshold == 0 {
        return Err(Error::ConfigValidation {
            field: "resolver.failure_threshold".to_string(),
            message: "must be at least 1".to_string(),
        });
    }

    if config.resolver.jitter_min_secs < 0.0 {
        return Err(Error::ConfigValidation {
            field: "resolver.jitter_min_secs".to_string(),
            message: "must not be negative".to_string(),
        });
    }

    if config.resolver.jitter_min_secs > config.resolver.jitter_max_secs {
        return Err(Error::ConfigValidation {
            field: "resolver.jitter_max_secs".to_string(),
            message: "must not be smaller than jitter_min_secs".to_string(),
        });
    }

    Ok(())
}

/// Checks that every entry looks like a real subreddit name.
///
/// Reddit allows 3 to 21 characters: letters, digits and underscores,
/// not starting with an underscore.
pub fn validate_feed_names(names: &[String]) -> Result<()> {
    let name_regex = Regex::new(r"^[A-Za-z0-9][A-Za-z0-9_]{2,20}$")
        .map_err(|e| Error::Config(format!("Failed to compile subreddit name regex: {}", e)))?;

    for name in names {
        if !name_regex.is_match(name) {
            return Err(Error::ConfigValidation {
                field: "feeds".to_string(),
                message: format!("'{}' is not a valid subreddit name", name),
            });
        }
    }

    Ok(())
}
