//! Video identifier extraction from user-supplied URLs

use super::VideoId;

/// Extract the 11-character video id from a URL.
///
/// Accepts `watch?v=ID`, `embed/ID`, `v/ID`, `youtu.be/ID` and any path
/// ending in `?v=ID`, with or without scheme and `www.`. The match is
/// anchored at the start only, so anything after the id is ignored.
/// Returns `None` when nothing matches.
pub fn extract_video_id(url: &str) -> Option<VideoId> {
    let re = regex!(
        r"^(https?://)?(www\.)?(youtube|youtu|youtube-nocookie)\.(com|be)/(watch\?v=|embed/|v/|.+\?v=)?([^&=%\?]{11})"
    );
    re.captures(url)
        .and_then(|caps| caps.get(6))
        .map(|m| VideoId::new(m.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(url: &str) -> Option<String> {
        extract_video_id(url).map(|v| v.to_string())
    }

    #[test]
    fn test_watch_urls() {
        let expected = Some("dQw4w9WgXcQ".to_string());
        assert_eq!(id("https://www.youtube.com/watch?v=dQw4w9WgXcQ"), expected);
        assert_eq!(id("http://youtube.com/watch?v=dQw4w9WgXcQ"), expected);
        assert_eq!(id("www.youtube.com/watch?v=dQw4w9WgXcQ"), expected);
        assert_eq!(id("youtube.com/watch?v=dQw4w9WgXcQ"), expected);
    }

    #[test]
    fn test_short_and_embed_urls() {
        let expected = Some("dQw4w9WgXcQ".to_string());
        assert_eq!(id("https://youtu.be/dQw4w9WgXcQ"), expected);
        assert_eq!(id("youtu.be/dQw4w9WgXcQ"), expected);
        assert_eq!(id("https://www.youtube.com/embed/dQw4w9WgXcQ"), expected);
        assert_eq!(id("https://www.youtube-nocookie.com/embed/dQw4w9WgXcQ"), expected);
        assert_eq!(id("https://www.youtube.com/v/dQw4w9WgXcQ"), expected);
    }

    #[test]
    fn test_trailing_content_ignored() {
        assert_eq!(
            id("https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=42s&list=PL123"),
            Some("dQw4w9WgXcQ".to_string())
        );
        assert_eq!(
            id("https://youtu.be/dQw4w9WgXcQ?si=abcdef"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn test_query_parameter_after_other_path() {
        assert_eq!(
            id("https://www.youtube.com/attribution_link?a=x&u=/watch?v=dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn test_rejects_non_matching() {
        assert_eq!(id("not a url"), None);
        assert_eq!(id(""), None);
        assert_eq!(id("https://vimeo.com/123456789012"), None);
        assert_eq!(id("https://www.youtube.com/watch?v=short"), None);
        assert_eq!(id("https://youtu.be/abc"), None);
    }

    #[test]
    fn test_anchored_at_start() {
        assert_eq!(id("see https://youtu.be/dQw4w9WgXcQ"), None);
    }
}
