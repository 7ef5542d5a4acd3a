//! Animeiat Scraper Core Library
//!
//! This crate provides the content-adapter functionality for the
//! animeiat streaming site: four independent request → extract →
//! serialize pipelines over the site's HTML pages and JSON APIs.
//!
//! # Features
//! - Search for shows by keyword
//! - Show detail card (description, aliases, first-air year)
//! - Episode list discovery via bootstrap-blob slug and the episodes API
//! - Labeled stream URL resolution via the download API
//! - JSON-string boundary methods with fixed fallback payloads for hosts

pub mod client;
pub mod error;
pub mod html;
pub mod parser;
pub mod scraper;
pub mod types;

// Re-export main types for convenience
pub use client::{AnimeiatClient, ClientConfig};
pub use error::{AnimeiatError, Result};
pub use html::decode_entities;
pub use scraper::AnimeiatScraper;
pub use types::{
    Episode, EpisodeCount, SearchResult, ShowDetail, StreamPayload, StreamSource,
};
