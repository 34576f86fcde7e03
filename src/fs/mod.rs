//! Filesystem module.
//!
//! Provides:
//! - Feed directory layout and creation
//! - Filename sanitization for URL-derived names

pub mod naming;
pub mod paths;

pub use naming::sanitize_filename;
pub use paths::{ensure_feed_dirs, feed_dir};
