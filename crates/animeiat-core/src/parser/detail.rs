//! Show detail parser.
//!
//! Description, first-air year and alias chips live in regular markup on
//! the show page, so these fields go through CSS selectors; the
//! script-embedded fields elsewhere need raw-text patterns instead.

use regex_lite::Regex;
use scraper::{ElementRef, Html, Selector};

use crate::html::decode_entities;
use crate::types::{ShowDetail, NOT_AVAILABLE};

/// Parse the detail card fields from a show page.
///
/// Each field degrades to "N/A" on its own; this function itself never
/// fails.
pub fn parse_show_detail(html: &str) -> ShowDetail {
    let document = Html::parse_document(html);

    let description =
        extract_description(&document).unwrap_or_else(|| NOT_AVAILABLE.to_string());
    let airdate = extract_airdate(&document).unwrap_or_else(|| NOT_AVAILABLE.to_string());

    let aliases = extract_aliases(&document);
    let aliases = if aliases.is_empty() {
        NOT_AVAILABLE.to_string()
    } else {
        aliases.join(", ")
    };

    ShowDetail {
        description,
        aliases,
        airdate,
    }
}

/// Text of the first `<p class="text-justify">` block on the page.
fn extract_description(document: &Html) -> Option<String> {
    let selector = Selector::parse("p.text-justify").ok()?;
    let paragraph = document.select(&selector).next()?;
    let text = decode_entities(collect_text(&paragraph).trim());
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

/// First 4-digit year inside the dark blue year chip.
fn extract_airdate(document: &Html) -> Option<String> {
    let selector =
        Selector::parse("span.mb-1.v-chip.theme--dark.v-size--small.blue.darken-4 span.v-chip__content > span")
            .ok()?;
    let re = Regex::new(r"^\d{4}$").unwrap();

    for span in document.select(&selector) {
        let text = collect_text(&span).trim().to_string();
        if re.is_match(&text) {
            return Some(text);
        }
    }

    None
}

/// Alternative titles from the no-color chips in the title card container.
fn extract_aliases(document: &Html) -> Vec<String> {
    let container_selector =
        match Selector::parse("div.v-card__text.pb-0.px-1 div.text-center.d-block.align-center") {
            Ok(selector) => selector,
            Err(_) => return Vec::new(),
        };
    let chip_selector = match Selector::parse(
        "span.ml-1.mb-1.v-chip.v-chip--no-color.theme--dark.v-size--small span.v-chip__content > span",
    ) {
        Ok(selector) => selector,
        Err(_) => return Vec::new(),
    };

    let mut aliases = Vec::new();
    if let Some(container) = document.select(&container_selector).next() {
        for span in container.select(&chip_selector) {
            let text = decode_entities(collect_text(&span).trim());
            if !text.is_empty() {
                aliases.push(text);
            }
        }
    }

    aliases
}

fn collect_text(element: &ElementRef) -> String {
    element.text().collect::<String>()
}
