//! Command-line host for the animeiat scraper.
//!
//! Each subcommand maps to one adapter entry point and prints its JSON
//! payload to stdout. Diagnostics go to stderr so the payload stays
//! machine-readable.

use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use animeiat_core::AnimeiatScraper;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Search for shows by keyword
    Search {
        /// Search keyword
        keyword: String,
    },
    /// Print the detail card for a show page
    Details {
        /// Full show page URL
        url: String,
    },
    /// List every episode of a show
    Episodes {
        /// Full show page URL
        url: String,
    },
    /// Resolve labeled stream URLs for an episode
    Stream {
        /// Full episode page URL
        url: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let scraper = AnimeiatScraper::new()?;

    let payload = match args.command {
        Command::Search { keyword } => {
            debug!(keyword = %keyword, "running search");
            scraper.search_json(&keyword).await
        }
        Command::Details { url } => {
            debug!(url = %url, "fetching details");
            scraper.details_json(&url).await
        }
        Command::Episodes { url } => {
            debug!(url = %url, "discovering episodes");
            scraper.episodes_json(&url).await
        }
        Command::Stream { url } => {
            debug!(url = %url, "resolving stream");
            scraper.resolve_stream_json(&url).await
        }
    };

    println!("{payload}");

    Ok(())
}
