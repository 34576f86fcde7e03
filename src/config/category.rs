//! Listing category definitions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Reddit listing categories the API can be queried for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Currently popular posts (default).
    #[default]
    Hot,
    /// Highest ranked posts.
    Top,
    /// Most recent posts.
    New,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Hot => write!(f, "hot"),
            Category::Top => write!(f, "top"),
            Category::New => write!(f, "new"),
        }
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hot" => Ok(Category::Hot),
            "top" => Ok(Category::Top),
            "new" => Ok(Category::New),
            _ => Err(format!(
                "Unknown category: {}. Allowed values are 'hot', 'top' and 'new'.",
                s
            )),
        }
    }
}
