//! Response entity types.
//!
//! Everything here is a read-only snapshot built from a single upstream
//! fetch. Upstream identifiers (theater slugs, movie paths) are passed
//! through unchanged so repeated lookups stay stable across calls.

use serde::{Deserialize, Serialize};

/// A theater with its movies and showtimes for a single date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theater {
    /// Upstream theater id, passed through as-is.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Theater slug (the path segment of the theater page URL). Feed this
    /// to `get_theater_showtimes` to look up a single theater.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    pub name: String,
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_miles: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amenities: Option<String>,
    /// Full theater page URL on the upstream site.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub movies: Vec<MovieListing>,
}

/// A movie playing at a specific theater.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieListing {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runtime_min: Option<u32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub genres: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,
    /// Movie overview URL on the upstream site, usable with
    /// `get_movie_details`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub showtimes: Vec<Showtime>,
}

/// A single scheduled showing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Showtime {
    /// Local start time as reported by the upstream site.
    pub time: String,
    /// Date of the showing (YYYY-MM-DD, the date the lookup was scoped to).
    pub date: String,
    /// Presentation format tag (e.g. "IMAX", "3D"). Absent for standard.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticket_url: Option<String>,
    #[serde(default)]
    pub is_sold_out: bool,
}

/// Details for a single movie, keyed by its upstream page path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieDetails {
    /// Normalized upstream URL the details were fetched from.
    pub url: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub synopsis: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runtime: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub genres: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub director: Option<String>,
    /// Billing-ordered cast names.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cast: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poster: Option<String>,
}

/// Response shape for `get_theater_showtimes`: one theater, all of its
/// showtimes for the date, no pagination.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TheaterShowtimes {
    pub theater: Theater,
    pub date: String,
}
