//! Configuration loading, validation and the subreddit list.

mod category;
mod feeds;
mod loader;
mod validation;

pub use category::Category;
pub use feeds::load_feed_list;
pub use loader::{Config, FeedsConfig, OptionsConfig, ResolverConfig};
pub use validation::{validate_config, validate_feed_names};
