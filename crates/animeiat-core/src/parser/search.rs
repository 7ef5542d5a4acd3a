//! Search results parser.
//!
//! Search results are not in the DOM: the page embeds them as repeated
//! `anime_name`/`slug`/`poster_path` fields inside inline script data, so
//! extraction works on the raw body text.

use regex_lite::Regex;

use crate::types::SearchResult;

/// Parse search results out of a raw search page body.
///
/// Scans for ordered `anime_name`/`slug`/`poster_path` triples. Spans
/// between labels match ungreedily, so each capture stops at the first
/// quoted value after its label; anything not forming a complete triple
/// in that exact order is skipped. Results keep document order.
pub fn parse_search_results(html: &str, base_url: &str, api_base_url: &str) -> Vec<SearchResult> {
    let re = Regex::new(
        r#"(?s)anime_name:\s*"(.*?)".*?slug:\s*"(.*?)".*?poster_path:\s*"(.*?)""#,
    )
    .unwrap();

    re.captures_iter(html)
        .map(|caps| {
            let title = caps[1].trim().to_string();
            let slug = caps[2].trim();
            let poster = unescape_poster_path(caps[3].trim());
            SearchResult {
                title,
                href: format!("{}/anime/{}", base_url, slug),
                image: format!("{}/storage/{}", api_base_url, poster),
            }
        })
        .collect()
}

/// Poster paths come JSON-escaped out of the script blob; turn literal
/// `\u002F` sequences back into slashes.
fn unescape_poster_path(path: &str) -> String {
    path.replace("\\u002F", "/")
}
