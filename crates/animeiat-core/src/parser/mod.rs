//! Extraction patterns for animeiat pages
//!
//! Every extracted field sits behind a named function with a saved
//! fixture in its tests, so site markup drift is detectable without
//! network access:
//! - `search`: inline-script search result triples
//! - `detail`: description, year chip and alias chips on a show page
//! - `episodes`: bootstrap-blob slug and last-page episode markers
//! - `stream`: player video slug on an episode page

pub mod detail;
pub mod episodes;
pub mod search;
pub mod stream;

// Re-export main parsing functions
pub use detail::parse_show_detail;
pub use episodes::{extract_anime_slug, parse_latest_episode};
pub use search::parse_search_results;
pub use stream::extract_video_slug;
