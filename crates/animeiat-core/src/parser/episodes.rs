//! Episode discovery patterns.
//!
//! A show page carries its slug inside the `window.__NUXT__` bootstrap
//! blob, and the rendered episode listing carries localized
//! "الحلقة: <n>" markers revealing the latest episode actually published.

use regex_lite::Regex;

/// Extract the anime slug from the bootstrap data blob of a show page.
///
/// The slug sits right after the show name in the serialized state, on a
/// single line; a page without the blob yields `None`.
pub fn extract_anime_slug(html: &str) -> Option<String> {
    let re = Regex::new(r#"window\.__NUXT__=.*?anime_name:"[^"]+",slug:"([^"]+)""#).ok()?;
    let caps = re.captures(html)?;
    Some(caps.get(1)?.as_str().to_string())
}

/// Scan a rendered episode listing page for the highest episode marker.
///
/// Returns `None` when no marker is present at all.
pub fn parse_latest_episode(html: &str) -> Option<u32> {
    let re = Regex::new(r"الحلقة:\s*(\d+)").ok()?;
    re.captures_iter(html)
        .filter_map(|caps| caps.get(1)?.as_str().parse::<u32>().ok())
        .max()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Head of a show page with the serialized bootstrap state inlined.
    const SHOW_PAGE_FIXTURE: &str = r#"<html><body><script>
    window.__NUXT__=(function(a){return {data:[{anime:{id:55,anime_name:"Attack on Titan",slug:"attack-on-titan",status:a}}]}}(1));
    </script></body></html>"#;

    #[test]
    fn test_extract_slug_from_bootstrap_blob() {
        assert_eq!(
            extract_anime_slug(SHOW_PAGE_FIXTURE),
            Some("attack-on-titan".to_string())
        );
    }

    #[test]
    fn test_no_blob_yields_none() {
        assert_eq!(extract_anime_slug("<html><body>static page</body></html>"), None);
        // anime_name/slug pair outside the bootstrap assignment does not count
        assert_eq!(
            extract_anime_slug(r#"var x = {anime_name:"A",slug:"a"};"#),
            None
        );
    }

    #[test]
    fn test_slug_must_follow_anime_name() {
        let html = r#"window.__NUXT__={slug:"first",anime_name:"A"}"#;
        assert_eq!(extract_anime_slug(html), None);
    }

    #[test]
    fn test_latest_episode_is_maximum_marker() {
        let html = "<div>الحلقة: 8</div><div>الحلقة: 12</div><div>الحلقة: 10</div>";
        assert_eq!(parse_latest_episode(html), Some(12));
    }

    #[test]
    fn test_marker_allows_flexible_whitespace() {
        assert_eq!(parse_latest_episode("الحلقة:3"), Some(3));
        assert_eq!(parse_latest_episode("الحلقة:   7"), Some(7));
    }

    #[test]
    fn test_no_markers_yields_none() {
        assert_eq!(parse_latest_episode("<html><body>empty listing</body></html>"), None);
        assert_eq!(parse_latest_episode("Episode: 5"), None);
    }
}
