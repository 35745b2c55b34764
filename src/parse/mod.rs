//! Extraction of structured records from upstream responses.
//!
//! All structural assumptions about the upstream site (JSON field names,
//! CSS selectors, embedded-JSON anchors) live in this module, so a site
//! layout change only ever touches these internals, never the callers.

pub mod movie;
pub mod showtimes;
pub mod theater;

pub use movie::parse_movie_details;
pub use showtimes::parse_showtimes;
pub use theater::{parse_theater_page, TheaterPage};
