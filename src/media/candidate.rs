//! Post URL classification.
//!
//! Decides for each post link whether it is worth downloading: either the
//! URL points straight at a media file with an allowed extension, or it
//! points at a known wrapper page the resolver can extract a video from.

use url::Url;

use crate::fs::sanitize_filename;

/// File extensions we download, lowercase.
pub const ALLOWED_EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "png", "gif", "mp4"];

/// A post URL that passed classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Eligible {
    /// Filename the media will be saved under, already sanitized.
    pub filename: String,
    /// True when the URL is a wrapper page that needs resolution first.
    pub indirect: bool,
}

/// Classifies a raw post URL.
///
/// `is_indirect_host` reports whether the URL belongs to a host the
/// resolver knows how to unwrap. Returns `None` for anything we cannot
/// or do not want to download.
pub fn classify<F>(url_str: &str, is_indirect_host: F) -> Option<Eligible>
where
    F: Fn(&Url) -> bool,
{
    let url = Url::parse(url_str).ok()?;
    let raw_name = last_path_segment(&url)?;
    let filename = sanitize_filename(raw_name).ok()?;

    if is_indirect_host(&url) {
        // Resolved wrapper pages yield a video. Name the file accordingly
        // unless the segment already carries a usable extension.
        let filename = if has_allowed_extension(&filename) {
            filename
        } else {
            format!("{}.mp4", filename)
        };
        return Some(Eligible {
            filename,
            indirect: true,
        });
    }

    if has_allowed_extension(&filename) {
        Some(Eligible {
            filename,
            indirect: false,
        })
    } else {
        None
    }
}

/// True when the filename ends in one of [`ALLOWED_EXTENSIONS`],
/// case-insensitively.
pub fn has_allowed_extension(filename: &str) -> bool {
    match filename.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => {
            let ext = ext.to_lowercase();
            ALLOWED_EXTENSIONS.contains(&ext.as_str())
        }
        _ => false,
    }
}

fn last_path_segment(url: &Url) -> Option<&str> {
    url.path_segments()?.rev().find(|segment| !segment.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gfycat_host(url: &Url) -> bool {
        url.host_str().is_some_and(|host| host.contains("gfycat"))
    }

    #[test]
    fn test_direct_media_urls() {
        for url in [
            "https://i.redd.it/abc123.jpg",
            "https://i.imgur.com/xyz.jpeg",
            "https://i.redd.it/def.png",
            "https://i.imgur.com/anim.gif",
            "https://v.redd.it/clip.mp4",
        ] {
            let eligible = classify(url, gfycat_host).unwrap();
            assert!(!eligible.indirect, "{} should be direct", url);
        }
    }

    #[test]
    fn test_extension_is_case_insensitive() {
        let eligible = classify("https://i.redd.it/photo.JPG", gfycat_host).unwrap();
        assert_eq!(eligible.filename, "photo.JPG");
    }

    #[test]
    fn test_disallowed_extensions_are_skipped() {
        assert!(classify("https://example.com/video.webm", gfycat_host).is_none());
        assert!(classify("https://example.com/page.html", gfycat_host).is_none());
        assert!(classify("https://reddit.com/r/pics/comments/abc/title/", gfycat_host).is_none());
    }

    #[test]
    fn test_no_extension_is_skipped() {
        assert!(classify("https://imgur.com/gallery/abcdef", gfycat_host).is_none());
    }

    #[test]
    fn test_indirect_host_gets_mp4_name() {
        let eligible = classify("https://gfycat.com/TenderWildAlpaca", gfycat_host).unwrap();
        assert!(eligible.indirect);
        assert_eq!(eligible.filename, "TenderWildAlpaca.mp4");
    }

    #[test]
    fn test_indirect_host_keeps_existing_extension() {
        let eligible =
            classify("https://giant.gfycat.com/TenderWildAlpaca.mp4", gfycat_host).unwrap();
        assert!(eligible.indirect);
        assert_eq!(eligible.filename, "TenderWildAlpaca.mp4");
    }

    #[test]
    fn test_host_match_ignores_path() {
        // "gfycat" in the path does not make the URL indirect.
        let result = classify("https://example.com/gfycat/clip.jpg", gfycat_host).unwrap();
        assert!(!result.indirect);
        assert!(classify("https://example.com/gfycat/clip", gfycat_host).is_none());
    }

    #[test]
    fn test_query_string_is_not_part_of_the_name() {
        let eligible =
            classify("https://i.redd.it/abc.jpg?width=640&format=pjpg", gfycat_host).unwrap();
        assert_eq!(eligible.filename, "abc.jpg");
    }

    #[test]
    fn test_trailing_slash_uses_last_real_segment() {
        let eligible = classify("https://gfycat.com/SomeClip/", gfycat_host).unwrap();
        assert_eq!(eligible.filename, "SomeClip.mp4");
    }

    #[test]
    fn test_unparseable_url_is_skipped() {
        assert!(classify("not a url", gfycat_host).is_none());
        assert!(classify("", gfycat_host).is_none());
    }

    #[test]
    fn test_filename_is_sanitized() {
        let eligible = classify("https://example.com/we:ird.jpg", gfycat_host).unwrap();
        assert_eq!(eligible.filename, "we_ird.jpg");
    }

    #[test]
    fn test_has_allowed_extension() {
        assert!(has_allowed_extension("a.jpg"));
        assert!(has_allowed_extension("a.MP4"));
        assert!(!has_allowed_extension("a.webm"));
        assert!(!has_allowed_extension("jpg"));
        assert!(!has_allowed_extension(".jpg"));
    }
}
