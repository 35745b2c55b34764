//! Parsing of an upstream theater page.
//!
//! Theater pages render their showtime grid client-side, so the page
//! itself only yields the theater's display name and its own ZIP code.
//! The ZIP is what lets the dispatcher query the showtimes API and filter
//! the result back down to this theater.

use crate::error::{MovietimeError, Result};
use regex::Regex;
use scraper::{Html, Selector};
use std::sync::LazyLock;

static NAME_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("h1.subnav__title, .theaterDetailHeader__name").expect("valid selector")
});
static TITLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("title").expect("valid selector"));

/// Embedded-JSON ZIP anchors, most reliable first (JSON-LD postalCode,
/// then page-context fields).
static ZIP_RES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r#""postalCode"\s*:\s*"(\d{5})"#,
        r#""zipCode"\s*:\s*"(\d{5})""#,
        r#""zip"\s*:\s*"(\d{5})""#,
    ]
    .iter()
    .map(|p| Regex::new(p).expect("valid regex"))
    .collect()
});

static TITLE_SUFFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\s*Movie Showtimes.*$").expect("valid regex"));
static PIPE_SUFFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\|.*$").expect("valid regex"));

/// What a theater page yields before the follow-up API query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TheaterPage {
    pub name: Option<String>,
    pub zip: Option<String>,
}

/// Extract the theater name and own-ZIP from a theater page.
///
/// At least one of the two must be present; a page with neither has lost
/// its structural anchors and fails with `ParseFailure`.
pub fn parse_theater_page(html: &str) -> Result<TheaterPage> {
    let document = Html::parse_document(html);

    let name = document
        .select(&NAME_SELECTOR)
        .next()
        .or_else(|| document.select(&TITLE_SELECTOR).next())
        .map(|el| el.text().collect::<String>().trim().to_string())
        .filter(|s| !s.is_empty())
        .map(|raw| clean_name(&raw));

    let zip = ZIP_RES
        .iter()
        .find_map(|re| re.captures(html))
        .map(|caps| caps[1].to_string());

    if name.is_none() && zip.is_none() {
        return Err(MovietimeError::ParseFailure(
            "theater page has neither a name block nor a ZIP anchor".into(),
        ));
    }

    Ok(TheaterPage { name, zip })
}

/// Strip common `<title>` suffixes like
/// `" Movie Showtimes & Tickets | New York | Fandango"`.
fn clean_name(raw: &str) -> String {
    let cleaned = TITLE_SUFFIX_RE.replace(raw, "");
    let cleaned = PIPE_SUFFIX_RE.replace(&cleaned, "");
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        raw.to_string()
    } else {
        cleaned.to_string()
    }
}
