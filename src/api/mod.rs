//! Reddit API communication.

pub mod client;
pub mod types;

pub use client::RedditApi;
pub use types::{Listing, ListingChild, ListingData, PostData};
