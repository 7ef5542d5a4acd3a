//! Main animeiat scraper API.
//!
//! Combines the HTTP client with the extraction patterns. Each entry
//! point exists in two forms: a typed method returning [`Result`], and a
//! `*_json` boundary method that never fails. The boundary logs the
//! underlying error and emits the component's fixed fallback payload
//! instead, which is the textual contract embedding hosts consume.

use serde::Serialize;
use tracing::{error, warn};

use crate::client::AnimeiatClient;
use crate::error::{AnimeiatError, Result};
use crate::parser::{
    extract_anime_slug, extract_video_slug, parse_latest_episode, parse_search_results,
    parse_show_detail,
};
use crate::types::{
    DownloadResponse, Episode, EpisodeCount, EpisodesIndex, SearchResult, ShowDetail,
    StreamPayload, StreamSource,
};

// The site may fingerprint on the browser strings it sees, so each
// component keeps the exact string it has always presented. Do not unify.

/// User-Agent presented by search requests.
const SEARCH_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/136.0.0.0 Safari/537.36";

/// User-Agent presented by show detail requests.
const DETAIL_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// User-Agent presented by episode discovery requests.
const EPISODES_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// User-Agent presented by stream resolution requests.
const STREAM_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/136.0.0.0 Safari/537.36";

/// Main scraper API for the animeiat site
///
/// Provides search, show details, episode discovery and stream
/// resolution. All operations are asynchronous and independent; the
/// scraper holds no mutable state and can be shared behind an `Arc`.
///
/// # Example
/// ```no_run
/// use animeiat_core::AnimeiatScraper;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let scraper = AnimeiatScraper::new()?;
///
///     let results = scraper.search("attack on titan").await?;
///     println!("Found {} results", results.len());
///
///     Ok(())
/// }
/// ```
pub struct AnimeiatScraper {
    client: AnimeiatClient,
}

impl AnimeiatScraper {
    /// Create a new scraper with default configuration.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created.
    pub fn new() -> Result<Self> {
        let client = AnimeiatClient::new()?;
        Ok(Self { client })
    }

    /// Create a new scraper with a custom client.
    ///
    /// Useful for tests or when the client must point at non-default
    /// origins.
    pub fn with_client(client: AnimeiatClient) -> Self {
        Self { client }
    }

    /// Search the site for shows matching `keyword`.
    ///
    /// Zero matches is an empty list, not an error.
    pub async fn search(&self, keyword: &str) -> Result<Vec<SearchResult>> {
        let encoded = urlencoding::encode(keyword);
        let url = format!("{}/search?q={}", self.client.base_url(), encoded);
        let html = self.client.get_html(&url, SEARCH_USER_AGENT).await?;

        Ok(parse_search_results(
            &html,
            self.client.base_url(),
            self.client.api_base_url(),
        ))
    }

    /// Fetch the detail card for the show page at `url`.
    ///
    /// Fields missing from the page come back as "N/A" individually; only
    /// the fetch itself can fail.
    pub async fn details(&self, url: &str) -> Result<ShowDetail> {
        let html = self.client.get_html(url, DETAIL_USER_AGENT).await?;
        Ok(parse_show_detail(&html))
    }

    /// Build the full episode list for the show page at `url`.
    ///
    /// Discovery is sequential: the show page yields the slug, the
    /// episodes API yields pagination metadata, and a best-effort fetch
    /// of the rendered last page decides the final count (see
    /// [`EpisodeCount`]). The last step never propagates a failure. A
    /// page without a slug yields an empty list without touching the API.
    pub async fn episodes(&self, url: &str) -> Result<Vec<Episode>> {
        let html = self.client.get_html(url, EPISODES_USER_AGENT).await?;

        let slug = match extract_anime_slug(&html) {
            Some(slug) => slug,
            None => return Ok(Vec::new()),
        };

        let api_url = format!(
            "{}/v1/anime/{}/episodes",
            self.client.api_base_url(),
            slug
        );
        let index: EpisodesIndex = self.client.get_json(&api_url, EPISODES_USER_AGENT).await?;

        let count = match self
            .latest_rendered_episode(url, index.meta.last_page)
            .await
        {
            Some(number) if number > 0 => EpisodeCount::Rendered(number),
            _ => EpisodeCount::Reported(index.meta.total),
        };

        let episodes = (1..=count.value())
            .map(|number| Episode {
                href: format!(
                    "{}/watch/{}-episode-{}",
                    self.client.base_url(),
                    slug,
                    number
                ),
                number,
            })
            .collect();

        Ok(episodes)
    }

    /// Read the highest episode marker off the rendered last listing
    /// page. Best-effort: a failed fetch is logged and swallowed, the
    /// caller falls back to the API total.
    async fn latest_rendered_episode(&self, url: &str, last_page: u32) -> Option<u32> {
        let page_url = format!("{}?page={}", url, last_page);

        match self.client.get_html(&page_url, EPISODES_USER_AGENT).await {
            Ok(html) => parse_latest_episode(&html),
            Err(e) => {
                warn!(error = %e, url = %page_url, "last page fetch failed, falling back to API total");
                None
            }
        }
    }

    /// Resolve the labeled stream sources for the episode page at `url`.
    ///
    /// A page without a video slug, and an API answer with no complete
    /// entries, are both hard failures.
    pub async fn resolve_stream(&self, url: &str) -> Result<Vec<StreamSource>> {
        let html = self.client.get_html(url, STREAM_USER_AGENT).await?;
        let slug = extract_video_slug(&html)
            .ok_or_else(|| AnimeiatError::Extraction("video slug not found in page".to_string()))?;

        let api_url = format!(
            "{}/v1/video/{}/download",
            self.client.api_base_url(),
            slug
        );
        let response: DownloadResponse = self
            .client
            .get_json_with_origin(&api_url, STREAM_USER_AGENT)
            .await?;

        let sources: Vec<StreamSource> = response
            .data
            .into_iter()
            .filter_map(|entry| match (entry.label, entry.file) {
                (Some(label), Some(file)) => Some(StreamSource { label, file }),
                _ => None,
            })
            .collect();

        if sources.is_empty() {
            return Err(AnimeiatError::NoStreams);
        }

        Ok(sources)
    }

    /// Search, serialized for the host: a JSON array of results, or the
    /// single-element error payload on failure.
    pub async fn search_json(&self, keyword: &str) -> String {
        match self.search(keyword).await {
            Ok(results) => to_json(&results, "[]"),
            Err(e) => {
                error!(error = %e, keyword = %keyword, "search failed");
                to_json(&[SearchResult::error_sentinel()], "[]")
            }
        }
    }

    /// Detail card, serialized for the host as an array of exactly one
    /// record; every field "N/A" on failure.
    pub async fn details_json(&self, url: &str) -> String {
        match self.details(url).await {
            Ok(detail) => to_json(&[detail], "[]"),
            Err(e) => {
                error!(error = %e, url = %url, "detail extraction failed");
                to_json(&[ShowDetail::unavailable()], "[]")
            }
        }
    }

    /// Episode list, serialized for the host; `[]` on failure.
    pub async fn episodes_json(&self, url: &str) -> String {
        match self.episodes(url).await {
            Ok(episodes) => to_json(&episodes, "[]"),
            Err(e) => {
                error!(error = %e, url = %url, "episode discovery failed");
                "[]".to_string()
            }
        }
    }

    /// Stream payload, serialized for the host with the flat label/url
    /// pairing; `{"streams":[]}` on failure.
    pub async fn resolve_stream_json(&self, url: &str) -> String {
        match self.resolve_stream(url).await {
            Ok(sources) => to_json(&StreamPayload::from_sources(&sources), EMPTY_STREAMS),
            Err(e) => {
                error!(error = %e, url = %url, "stream resolution failed");
                to_json(&StreamPayload::default(), EMPTY_STREAMS)
            }
        }
    }
}

/// Fallback literal for the stream boundary.
const EMPTY_STREAMS: &str = r#"{"streams":[]}"#;

/// Serialize for the host boundary. The boundary never fails, so a
/// serialization error collapses to the fixed fallback literal.
fn to_json<T: Serialize>(value: &T, fallback: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| fallback.to_string())
}
