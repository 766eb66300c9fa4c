use url::Url;

const SHORT_LINK_DOMAIN: &str = "youtu.be";

/// Pull a video identifier out of a player sharing link.
///
/// Rules, first match wins: a short link's first path segment, the last
/// segment of an `/embed/` path, then the `v` query parameter.
pub fn video_id_from_link(link: &str) -> Option<String> {
    let url = Url::parse(link.trim()).ok()?;
    let segments: Vec<&str> = url
        .path_segments()
        .map(|segments| segments.filter(|segment| !segment.is_empty()).collect())
        .unwrap_or_default();

    let host = url.host_str().unwrap_or_default();
    if host.ends_with(SHORT_LINK_DOMAIN) {
        if let Some(first) = segments.first() {
            return Some((*first).to_string());
        }
    }

    // A bare `/embed` path has no id segment and falls through to `v`.
    if segments.contains(&"embed") {
        if let Some(last) = segments.last().filter(|last| **last != "embed") {
            return Some((*last).to_string());
        }
    }

    url.query_pairs()
        .find(|(key, _)| key == "v")
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_link_uses_first_segment() {
        assert_eq!(
            video_id_from_link("https://youtu.be/abc123"),
            Some("abc123".to_string())
        );
        assert_eq!(
            video_id_from_link("https://youtu.be/abc123?t=42"),
            Some("abc123".to_string())
        );
    }

    #[test]
    fn embed_link_uses_last_segment() {
        assert_eq!(
            video_id_from_link("https://example.com/embed/xyz"),
            Some("xyz".to_string())
        );
    }

    #[test]
    fn watch_link_uses_v_parameter() {
        assert_eq!(
            video_id_from_link("https://example.com/watch?v=qqq"),
            Some("qqq".to_string())
        );
        assert_eq!(
            video_id_from_link("https://www.youtube.com/watch?feature=share&v=dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn bare_embed_path_falls_back_to_v_parameter() {
        assert_eq!(
            video_id_from_link("https://example.com/embed?v=qqq"),
            Some("qqq".to_string())
        );
        assert_eq!(
            video_id_from_link("https://example.com/embed/xyz?v=qqq"),
            Some("xyz".to_string())
        );
    }

    #[test]
    fn unrecognised_links_fail() {
        assert_eq!(video_id_from_link("https://example.com/nothing"), None);
        assert_eq!(video_id_from_link("https://youtu.be/"), None);
        assert_eq!(video_id_from_link("https://example.com/embed/"), None);
        assert_eq!(video_id_from_link("not a link"), None);
    }
}
