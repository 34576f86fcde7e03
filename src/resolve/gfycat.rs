//! Gfycat wrapper page parsing.

use scraper::{Html, Selector};
use url::Url;

use crate::resolve::PageParser;

/// Parser for gfycat video pages.
///
/// Gfycat pages carry the actual renditions as `<source>` elements inside
/// a `<video>` tag. The mp4 rendition is preferred.
pub struct GfycatParser;

impl PageParser for GfycatParser {
    fn name(&self) -> &'static str {
        "gfycat"
    }

    fn matches(&self, url: &Url) -> bool {
        url.host_str().is_some_and(|host| host.contains("gfycat"))
    }

    fn extract(&self, html: &str) -> Option<String> {
        let document = Html::parse_document(html);
        let selector = Selector::parse("source[src]").expect("valid source selector");

        let mut fallback = None;
        for element in document.select(&selector) {
            let src = match element.value().attr("src") {
                Some(src) if !src.is_empty() => src,
                _ => continue,
            };
            match element.value().attr("type") {
                Some("video/mp4") => return Some(src.to_string()),
                Some(kind) if kind.starts_with("video/") => {
                    if fallback.is_none() {
                        fallback = Some(src.to_string());
                    }
                }
                _ => {}
            }
        }

        fallback
    }
}
