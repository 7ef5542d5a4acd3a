//! Data types for the animeiat scraper.
//!
//! All records are immutable values produced by a single call; they carry
//! no identity beyond their position in a result list.

use serde::{Deserialize, Serialize};

/// Sentinel emitted when a detail field cannot be extracted.
pub const NOT_AVAILABLE: &str = "N/A";

/// Search result item from the site search page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    /// Display title of the show
    pub title: String,
    /// Absolute show page URL
    pub href: String,
    /// Absolute poster image URL on the API storage host
    pub image: String,
}

impl SearchResult {
    /// Sentinel record emitted by the JSON boundary when a search fails.
    pub fn error_sentinel() -> Self {
        Self {
            title: "Error".to_string(),
            href: String::new(),
            image: String::new(),
        }
    }
}

/// Detail card for a single show
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShowDetail {
    /// Synopsis text
    pub description: String,
    /// Alternative titles, comma-joined
    pub aliases: String,
    /// First-air year as a 4-digit string, or "N/A"
    pub airdate: String,
}

impl ShowDetail {
    /// Fallback record with every field set to "N/A".
    pub fn unavailable() -> Self {
        Self {
            description: NOT_AVAILABLE.to_string(),
            aliases: NOT_AVAILABLE.to_string(),
            airdate: NOT_AVAILABLE.to_string(),
        }
    }
}

/// A single watchable episode
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Episode {
    /// Absolute watch page URL
    pub href: String,
    /// Episode number, 1-based
    pub number: u32,
}

/// One stream variant from the download API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreamSource {
    /// Quality label, e.g. "720p"
    pub label: String,
    /// Direct stream URL
    pub file: String,
}

/// Wire payload for stream resolution.
///
/// `streams` alternates label, url, label, url. Hosts consuming this
/// adapter expect the flat pairing, so it is preserved on the wire;
/// [`StreamSource`] is the structured form for in-process callers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StreamPayload {
    pub streams: Vec<String>,
}

impl StreamPayload {
    /// Flatten structured sources into the alternating label/url encoding.
    pub fn from_sources(sources: &[StreamSource]) -> Self {
        let mut streams = Vec::with_capacity(sources.len() * 2);
        for source in sources {
            streams.push(source.label.clone());
            streams.push(source.file.clone());
        }
        Self { streams }
    }
}

/// Provenance of a final episode count.
///
/// The episodes API total can lag behind what the site actually renders,
/// so a count read off the rendered last page outranks the reported one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EpisodeCount {
    /// Highest episode number scraped from the rendered last listing page
    Rendered(u32),
    /// Total reported by the episodes API, used when the scrape yields nothing
    Reported(u32),
}

impl EpisodeCount {
    /// The count itself, regardless of provenance.
    pub fn value(self) -> u32 {
        match self {
            Self::Rendered(n) | Self::Reported(n) => n,
        }
    }
}

/// Pagination metadata from the episodes API
#[derive(Debug, Clone, Deserialize)]
pub struct EpisodesMeta {
    /// Last listing page number, 1-based
    pub last_page: u32,
    /// Total episode count as reported by the API
    pub total: u32,
}

/// Response envelope of the `/v1/anime/{slug}/episodes` endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct EpisodesIndex {
    pub meta: EpisodesMeta,
}

/// One entry of the download API's `data` array.
///
/// Entries missing either field are skipped during resolution.
#[derive(Debug, Clone, Deserialize)]
pub struct DownloadEntry {
    pub file: Option<String>,
    pub label: Option<String>,
}

/// Response envelope of the `/v1/video/{slug}/download` endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct DownloadResponse {
    #[serde(default)]
    pub data: Vec<DownloadEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_result_serialization() {
        let result = SearchResult {
            title: "Naruto".to_string(),
            href: "https://www.animeiat.xyz/anime/naruto".to_string(),
            image: "https://api.animeiat.co/storage/posters/naruto.jpg".to_string(),
        };

        let json = serde_json::to_string(&result).unwrap();
        let deserialized: SearchResult = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.title, "Naruto");
        assert_eq!(deserialized.href, "https://www.animeiat.xyz/anime/naruto");
    }

    #[test]
    fn test_error_sentinel_shape() {
        let sentinel = SearchResult::error_sentinel();
        assert_eq!(sentinel.title, "Error");
        assert!(sentinel.href.is_empty());
        assert!(sentinel.image.is_empty());
    }

    #[test]
    fn test_show_detail_unavailable() {
        let detail = ShowDetail::unavailable();
        assert_eq!(detail.description, NOT_AVAILABLE);
        assert_eq!(detail.aliases, NOT_AVAILABLE);
        assert_eq!(detail.airdate, NOT_AVAILABLE);
    }

    #[test]
    fn test_stream_payload_flattens_pairs_in_order() {
        let sources = [
            StreamSource {
                label: "720p".to_string(),
                file: "u1".to_string(),
            },
            StreamSource {
                label: "480p".to_string(),
                file: "u2".to_string(),
            },
        ];

        let payload = StreamPayload::from_sources(&sources);
        assert_eq!(payload.streams, vec!["720p", "u1", "480p", "u2"]);

        let json = serde_json::to_string(&payload).unwrap();
        assert_eq!(json, r#"{"streams":["720p","u1","480p","u2"]}"#);
    }

    #[test]
    fn test_empty_stream_payload() {
        let payload = StreamPayload::default();
        assert_eq!(serde_json::to_string(&payload).unwrap(), r#"{"streams":[]}"#);
    }

    #[test]
    fn test_episode_count_value() {
        assert_eq!(EpisodeCount::Rendered(12).value(), 12);
        assert_eq!(EpisodeCount::Reported(10).value(), 10);
        assert_ne!(EpisodeCount::Rendered(10), EpisodeCount::Reported(10));
    }

    #[test]
    fn test_episodes_index_deserialization() {
        let index: EpisodesIndex =
            serde_json::from_str(r#"{"meta":{"last_page":3,"total":10,"per_page":12}}"#).unwrap();
        assert_eq!(index.meta.last_page, 3);
        assert_eq!(index.meta.total, 10);
    }

    #[test]
    fn test_download_response_missing_data() {
        let response: DownloadResponse = serde_json::from_str("{}").unwrap();
        assert!(response.data.is_empty());
    }

    #[test]
    fn test_download_entry_partial_fields() {
        let response: DownloadResponse = serde_json::from_str(
            r#"{"data":[{"file":"u1","label":"720p"},{"file":"u2"},{"label":"480p"}]}"#,
        )
        .unwrap();
        assert_eq!(response.data.len(), 3);
        assert!(response.data[1].label.is_none());
        assert!(response.data[2].file.is_none());
    }
}
