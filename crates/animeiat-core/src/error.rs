//! Error types for the animeiat scraper.

use thiserror::Error;

/// Error type for animeiat scraper operations
///
/// Three failure classes exist: transport failures, extraction misses
/// (an expected field absent from HTML or JSON), and the download API
/// answering with no usable sources.
#[derive(Error, Debug)]
pub enum AnimeiatError {
    /// HTTP request failed or returned a non-success status
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// An expected field was absent or malformed in a page or API response
    #[error("Extraction failed: {0}")]
    Extraction(String),

    /// The download API returned no entry carrying both a file and a label
    #[error("No stream URLs found in API response")]
    NoStreams,
}

/// Result type alias for animeiat scraper operations
pub type Result<T> = std::result::Result<T, AnimeiatError>;
