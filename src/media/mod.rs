//! Media candidate classification.

mod candidate;

pub use candidate::{classify, has_allowed_extension, Eligible, ALLOWED_EXTENSIONS};
