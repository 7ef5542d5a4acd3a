//! Stream source patterns.
//!
//! An episode page embeds a player object literal whose slug keys the
//! download API.

use regex_lite::Regex;

/// Extract the video slug from the player object literal on an episode
/// page.
pub fn extract_video_slug(html: &str) -> Option<String> {
    let re = Regex::new(r#"(?i)video:\{id:[^,]+,name:"[^"]+",slug:"([^"]+)""#).ok()?;
    let caps = re.captures(html)?;
    Some(caps.get(1)?.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Player bootstrap data as inlined on an episode page.
    const EPISODE_PAGE_FIXTURE: &str = r#"<html><body><script>
    window.__NUXT__=(function(a){return {state:{video:{id:9912,name:"attack-on-titan-episode-1",slug:"attack-on-titan-episode-1-s1me",views:a}}}}(0));
    </script></body></html>"#;

    #[test]
    fn test_extract_video_slug() {
        assert_eq!(
            extract_video_slug(EPISODE_PAGE_FIXTURE),
            Some("attack-on-titan-episode-1-s1me".to_string())
        );
    }

    #[test]
    fn test_pattern_is_case_insensitive() {
        let html = r#"VIDEO:{ID:77,NAME:"ep",SLUG:"ep-slug""#;
        assert_eq!(extract_video_slug(html), Some("ep-slug".to_string()));
    }

    #[test]
    fn test_missing_player_object_yields_none() {
        assert_eq!(extract_video_slug("<html><body></body></html>"), None);
        // id field must be present before name and slug
        assert_eq!(extract_video_slug(r#"video:{name:"ep",slug:"ep-slug""#), None);
    }
}
