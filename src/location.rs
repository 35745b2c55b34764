//! Location string classification and resolution.
//!
//! Turns a free-form location string ("90210", "Chicago, IL", "Seattle")
//! into the query parameters the upstream showtimes API understands.

use crate::error::{MovietimeError, Result};
use regex::Regex;
use std::sync::LazyLock;

/// ZIP code, optionally with a +4 suffix.
static ZIP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{5}(-\d{4})?$").expect("valid regex"));

/// A location resolved into an upstream-usable key.
///
/// Classification is ordered, first match wins:
/// 1. exactly 5 ASCII digits (ZIP+4 accepted) — ZIP code
/// 2. a comma with a 2-letter suffix — city + state
/// 3. anything else with at least one letter — bare city, sent as a
///    free-text search term (the upstream's first-ranked match wins)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedLocation {
    Zip(String),
    CityState { city: String, state: String },
    City(String),
}

impl ResolvedLocation {
    /// Resolve a raw location string, failing on input that matches none
    /// of the accepted shapes.
    pub fn resolve(raw: &str) -> Result<Self> {
        let location = raw.trim();

        if ZIP_RE.is_match(location) {
            return Ok(ResolvedLocation::Zip(location.to_string()));
        }

        if let Some((city, state)) = location.split_once(',') {
            let city = city.trim();
            let state = state.trim();
            if state.len() == 2 && state.chars().all(|c| c.is_ascii_alphabetic()) && !city.is_empty()
            {
                return Ok(ResolvedLocation::CityState {
                    city: city.to_string(),
                    state: state.to_string(),
                });
            }
        }

        // Bare city name. Require at least one letter so strings like ""
        // or "1234" fail instead of producing a nonsense upstream query.
        if location.chars().any(|c| c.is_ascii_alphabetic()) {
            return Ok(ResolvedLocation::City(location.to_string()));
        }

        Err(MovietimeError::InvalidLocation(raw.to_string()))
    }

    /// Query parameters for the upstream showtimes API.
    ///
    /// A bare city is submitted with an empty `state`, matching the
    /// upstream's free-text geographic search behavior.
    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        match self {
            ResolvedLocation::Zip(zip) => vec![("zipCode", zip.clone())],
            ResolvedLocation::CityState { city, state } => vec![
                ("city", city.clone()),
                ("state", state.clone()),
            ],
            ResolvedLocation::City(city) => vec![
                ("city", city.clone()),
                ("state", String::new()),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_digit_strings_classify_as_zip() {
        for zip in ["90210", "10001", "00501", "99950"] {
            assert_eq!(
                ResolvedLocation::resolve(zip).unwrap(),
                ResolvedLocation::Zip(zip.to_string())
            );
        }
    }

    #[test]
    fn zip_plus_four_classifies_as_zip() {
        assert_eq!(
            ResolvedLocation::resolve("10001-2345").unwrap(),
            ResolvedLocation::Zip("10001-2345".to_string())
        );
    }

    #[test]
    fn city_comma_state_classifies_as_city_state() {
        assert_eq!(
            ResolvedLocation::resolve("Chicago, IL").unwrap(),
            ResolvedLocation::CityState {
                city: "Chicago".to_string(),
                state: "IL".to_string()
            }
        );
        assert_eq!(
            ResolvedLocation::resolve("los angeles,ca").unwrap(),
            ResolvedLocation::CityState {
                city: "los angeles".to_string(),
                state: "ca".to_string()
            }
        );
    }

    #[test]
    fn long_state_suffix_falls_through_to_bare_city() {
        // Rule (b) requires a 2-letter suffix; everything else is free text.
        assert_eq!(
            ResolvedLocation::resolve("Portland, Oregon").unwrap(),
            ResolvedLocation::City("Portland, Oregon".to_string())
        );
    }

    #[test]
    fn bare_city_classifies_as_city() {
        assert_eq!(
            ResolvedLocation::resolve("Seattle").unwrap(),
            ResolvedLocation::City("Seattle".to_string())
        );
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        assert_eq!(
            ResolvedLocation::resolve("  90210  ").unwrap(),
            ResolvedLocation::Zip("90210".to_string())
        );
    }

    #[test]
    fn implausible_input_is_rejected() {
        for bad in ["", "   ", "1234", "123456", "!!!", "12,34"] {
            assert!(
                matches!(
                    ResolvedLocation::resolve(bad),
                    Err(MovietimeError::InvalidLocation(_))
                ),
                "expected InvalidLocation for {:?}",
                bad
            );
        }
    }

    #[test]
    fn query_params_match_upstream_names() {
        assert_eq!(
            ResolvedLocation::Zip("90210".into()).query_params(),
            vec![("zipCode", "90210".to_string())]
        );
        assert_eq!(
            ResolvedLocation::CityState {
                city: "Chicago".into(),
                state: "IL".into()
            }
            .query_params(),
            vec![
                ("city", "Chicago".to_string()),
                ("state", "IL".to_string())
            ]
        );
        assert_eq!(
            ResolvedLocation::City("Seattle".into()).query_params(),
            vec![("city", "Seattle".to_string()), ("state", String::new())]
        );
    }
}
