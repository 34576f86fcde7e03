//! Reddit listing API response types.

use serde::Deserialize;

/// Top-level listing response (`kind: "Listing"`).
#[derive(Debug, Clone, Deserialize)]
pub struct Listing {
    pub data: ListingData,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ListingData {
    #[serde(default)]
    pub children: Vec<ListingChild>,
}

/// A single child entry (`kind: "t3"` for link posts).
#[derive(Debug, Clone, Deserialize)]
pub struct ListingChild {
    pub data: PostData,
}

/// The subset of post fields we care about.
#[derive(Debug, Clone, Deserialize)]
pub struct PostData {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    /// Outbound link of the post. Self posts carry their own permalink here.
    pub url: Option<String>,
}
