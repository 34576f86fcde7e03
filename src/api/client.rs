//! Reddit listing API HTTP client.

use reqwest::{Client, Response};

use crate::api::types::Listing;
use crate::config::Category;
use crate::error::{Error, Result};

/// Public Reddit API base URL.
const API_BASE: &str = "https://api.reddit.com";

/// Unauthenticated Reddit API client.
pub struct RedditApi {
    client: Client,
    base_url: String,
}

impl RedditApi {
    /// Create a new API client.
    pub fn new(user_agent: &str) -> Result<Self> {
        Self::with_base_url(user_agent, API_BASE)
    }

    /// Create a client against a different base URL (used by tests).
    pub fn with_base_url(user_agent: &str, base_url: &str) -> Result<Self> {
        let client = Client::builder()
            .user_agent(user_agent)
            .build()
            .map_err(|e| Error::Api(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch one listing page for a subreddit.
    pub async fn get_listing(
        &self,
        feed: &str,
        category: Category,
        limit: u32,
    ) -> Result<Listing> {
        let url = format!("{}/r/{}/{}", self.base_url, feed, category);
        tracing::debug!("GET {} (limit {})", url, limit);

        let response = self
            .client
            .get(&url)
            .query(&[("limit", limit)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::FeedFetch {
                feed: feed.to_string(),
                status: status.as_u16(),
            });
        }

        let text = response.text().await?;
        let listing: Listing = serde_json::from_str(&text).map_err(|e| {
            // Truncate by characters, not bytes, so an odd body cannot
            // land the cut inside a multi-byte sequence.
            let snippet: String = text.chars().take(500).collect();
            Error::Api(format!(
                "Failed to parse listing for r/{}: {} - Response: {}",
                feed, e, snippet
            ))
        })?;

        Ok(listing)
    }

    /// Collect the outbound post URLs of a subreddit listing.
    pub async fn get_feed_posts(
        &self,
        feed: &str,
        category: Category,
        limit: u32,
    ) -> Result<Vec<String>> {
        let listing = self.get_listing(feed, category, limit).await?;

        let urls: Vec<String> = listing
            .data
            .children
            .into_iter()
            .filter_map(|child| {
                let post = child.data;
                match post.url {
                    Some(url) if !url.is_empty() => {
                        tracing::debug!("Post '{}' links to {}", post.title, url);
                        Some(url)
                    }
                    _ => None,
                }
            })
            .collect();

        if urls.is_empty() {
            return Err(Error::EmptyFeed(feed.to_string()));
        }

        Ok(urls)
    }

    /// Start a GET request for a media file, returning the streaming response.
    pub async fn download_file(&self, url: &str) -> Result<Response> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::BadStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn listing_body(urls: &[&str]) -> String {
        let children: Vec<String> = urls
            .iter()
            .enumerate()
            .map(|(i, url)| {
                format!(
                    r#"{{"kind": "t3", "data": {{"id": "p{}", "title": "post {}", "url": "{}"}}}}"#,
                    i, i, url
                )
            })
            .collect();
        format!(
            r#"{{"kind": "Listing", "data": {{"children": [{}]}}}}"#,
            children.join(",")
        )
    }

    #[tokio::test]
    async fn test_get_feed_posts() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/r/pics/hot"))
            .and(query_param("limit", "50"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(
                listing_body(&["https://i.redd.it/a.jpg", "https://i.redd.it/b.png"]),
                "application/json",
            ))
            .mount(&server)
            .await;

        let api = RedditApi::with_base_url("test-agent", &server.uri()).unwrap();
        let urls = api.get_feed_posts("pics", Category::Hot, 50).await.unwrap();
        assert_eq!(
            urls,
            vec!["https://i.redd.it/a.jpg", "https://i.redd.it/b.png"]
        );
    }

    #[tokio::test]
    async fn test_get_feed_posts_skips_missing_urls() {
        let server = MockServer::start().await;
        let body = r#"{"kind": "Listing", "data": {"children": [
            {"kind": "t3", "data": {"id": "a", "title": "no url"}},
            {"kind": "t3", "data": {"id": "b", "title": "ok", "url": "https://i.redd.it/b.gif"}}
        ]}}"#;
        Mock::given(method("GET"))
            .and(path("/r/aww/new"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(body, "application/json"))
            .mount(&server)
            .await;

        let api = RedditApi::with_base_url("test-agent", &server.uri()).unwrap();
        let urls = api.get_feed_posts("aww", Category::New, 100).await.unwrap();
        assert_eq!(urls, vec!["https://i.redd.it/b.gif"]);
    }

    #[tokio::test]
    async fn test_feed_fetch_error_carries_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/r/doesnotexist/hot"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let api = RedditApi::with_base_url("test-agent", &server.uri()).unwrap();
        let err = api
            .get_feed_posts("doesnotexist", Category::Hot, 100)
            .await
            .unwrap_err();
        match err {
            Error::FeedFetch { feed, status } => {
                assert_eq!(feed, "doesnotexist");
                assert_eq!(status, 404);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_empty_listing_is_empty_feed_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/r/ghosttown/hot"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_raw(listing_body(&[]), "application/json"),
            )
            .mount(&server)
            .await;

        let api = RedditApi::with_base_url("test-agent", &server.uri()).unwrap();
        let err = api
            .get_feed_posts("ghosttown", Category::Hot, 100)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::EmptyFeed(feed) if feed == "ghosttown"));
    }

    #[tokio::test]
    async fn test_malformed_body_with_multibyte_chars_is_feed_error() {
        let server = MockServer::start().await;
        // Non-JSON body whose byte 500 falls inside a two-byte character.
        let mut body = "x".repeat(499);
        body.push('é');
        body.push_str(&"y".repeat(100));
        Mock::given(method("GET"))
            .and(path("/r/pics/hot"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(body, "text/html"))
            .mount(&server)
            .await;

        let api = RedditApi::with_base_url("test-agent", &server.uri()).unwrap();
        let err = api.get_feed_posts("pics", Category::Hot, 100).await.unwrap_err();
        assert!(matches!(err, Error::Api(_)));
    }

    #[tokio::test]
    async fn test_download_file_bad_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/gone.jpg"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let api = RedditApi::with_base_url("test-agent", &server.uri()).unwrap();
        let url = format!("{}/gone.jpg", server.uri());
        let err = api.download_file(&url).await.unwrap_err();
        assert!(matches!(err, Error::BadStatus { status: 404, .. }));
    }
}
