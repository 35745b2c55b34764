//! Parsing of the upstream theaters-with-showtimes API payload.

use crate::error::{MovietimeError, Result};
use crate::models::{MovieListing, Showtime, Theater};
use serde::Deserialize;
use serde_json::Value;

/// Parse the showtimes API response into theaters with nested showtimes.
///
/// The `theaters` key is the structural anchor: a body that is not JSON or
/// lacks the key signals a layout change and fails with `ParseFailure`. A
/// present-but-empty list is a valid empty result set. Missing optional
/// fields on individual records are omitted, never fatal.
pub fn parse_showtimes(body: &str, date: &str, base_url: &str) -> Result<Vec<Theater>> {
    let response: ShowtimesResponse = serde_json::from_str(body)
        .map_err(|e| MovietimeError::ParseFailure(format!("showtimes response is not JSON: {e}")))?;

    let theaters = response
        .theaters
        .ok_or_else(|| MovietimeError::ParseFailure("theater list missing from response".into()))?;

    Ok(theaters
        .into_iter()
        .map(|t| t.into_theater(date, base_url))
        .collect())
}

/// First path segment of an upstream page path, e.g.
/// `/amc-empire-25-aatis/theater-page` -> `amc-empire-25-aatis`.
pub(crate) fn slug_from_path(path: &str) -> Option<String> {
    let segment = path.trim_start_matches('/').split('/').next()?;
    if segment.is_empty() {
        None
    } else {
        Some(segment.to_string())
    }
}

#[derive(Debug, Deserialize)]
struct ShowtimesResponse {
    theaters: Option<Vec<RawTheater>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct RawTheater {
    id: Option<Value>,
    name: Option<String>,
    full_address: Option<String>,
    distance: Option<f64>,
    chain_name: Option<String>,
    amenities_string: Option<String>,
    theater_page_url: Option<String>,
    movies: Vec<RawMovie>,
}

impl RawTheater {
    fn into_theater(self, date: &str, base_url: &str) -> Theater {
        let slug = self.theater_page_url.as_deref().and_then(slug_from_path);
        let url = self
            .theater_page_url
            .as_deref()
            .map(|p| format!("{base_url}{p}"));

        Theater {
            id: self.id.as_ref().and_then(id_string),
            slug,
            name: self.name.unwrap_or_else(|| "Unknown Theater".to_string()),
            address: self.full_address.unwrap_or_default(),
            distance_miles: self.distance.map(|d| (d * 100.0).round() / 100.0),
            chain: self.chain_name.filter(|s| !s.is_empty()),
            amenities: self.amenities_string.filter(|s| !s.is_empty()),
            url,
            movies: self
                .movies
                .into_iter()
                .map(|m| m.into_listing(date, base_url))
                .collect(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct RawMovie {
    title: Option<String>,
    rating: Option<String>,
    runtime: Option<u32>,
    genres: Vec<String>,
    release_date: Option<String>,
    #[serde(rename = "mopURI")]
    mop_uri: Option<String>,
    variants: Vec<RawVariant>,
}

impl RawMovie {
    fn into_listing(self, date: &str, base_url: &str) -> MovieListing {
        let mut showtimes = Vec::new();
        for variant in &self.variants {
            let header = variant
                .film_format_header
                .as_deref()
                .filter(|h| !h.is_empty() && *h != "Standard");
            for group in &variant.amenity_groups {
                for st in &group.showtimes {
                    if let Some(showtime) = st.to_showtime(header, date, base_url) {
                        showtimes.push(showtime);
                    }
                }
            }
        }

        MovieListing {
            title: self.title.unwrap_or_else(|| "Unknown".to_string()),
            rating: self.rating.filter(|s| !s.is_empty()),
            runtime_min: self.runtime,
            genres: self.genres,
            release_date: self.release_date,
            url: self.mop_uri.as_deref().map(|p| format!("{base_url}{p}")),
            showtimes,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct RawVariant {
    film_format_header: Option<String>,
    amenity_groups: Vec<RawAmenityGroup>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct RawAmenityGroup {
    showtimes: Vec<RawShowtime>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct RawShowtime {
    ticketing_date: Option<RawTicketingDate>,
    date_time: Option<String>,
    format_str: Option<String>,
    #[serde(rename = "ticketingJumpPageURL")]
    ticketing_jump_page_url: Option<String>,
    is_sold_out: bool,
}

impl RawShowtime {
    /// A showing without any start time is dropped rather than emitted as
    /// an empty record.
    fn to_showtime(&self, variant_format: Option<&str>, date: &str, base_url: &str) -> Option<Showtime> {
        let time = self
            .ticketing_date
            .as_ref()
            .and_then(|td| td.local_time.clone())
            .or_else(|| self.date_time.clone())
            .filter(|t| !t.is_empty())?;

        let format = self
            .format_str
            .clone()
            .filter(|f| !f.is_empty() && f != "Standard")
            .or_else(|| variant_format.map(str::to_string));

        Some(Showtime {
            time,
            date: date.to_string(),
            format,
            ticket_url: self
                .ticketing_jump_page_url
                .as_deref()
                .map(|p| format!("{base_url}{p}")),
            is_sold_out: self.is_sold_out,
        })
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct RawTicketingDate {
    local_time: Option<String>,
}

/// The upstream id may arrive as a number or a string.
fn id_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://www.fandango.com";

    fn sample_body() -> &'static str {
        r#"{
          "theaters": [
            {
              "id": 12345,
              "name": "AMC Empire 25",
              "fullAddress": "234 W 42nd St, New York, NY 10036",
              "distance": 0.4567,
              "chainName": "AMC",
              "amenitiesString": "Reserved seating, IMAX",
              "theaterPageUrl": "/amc-empire-25-aatis/theater-page",
              "movies": [
                {
                  "title": "Thunderbolts",
                  "rating": "PG-13",
                  "runtime": 127,
                  "genres": ["Action", "Adventure"],
                  "releaseDate": "2025-05-02",
                  "mopURI": "/thunderbolts-2025-234498/movie-overview",
                  "variants": [
                    {
                      "filmFormatHeader": "Standard",
                      "amenityGroups": [
                        {
                          "showtimes": [
                            {
                              "ticketingDate": {"localTime": "7:00p"},
                              "ticketingJumpPageURL": "/ticketing/t1",
                              "isSoldOut": false
                            },
                            {
                              "ticketingDate": {"localTime": "9:45p"},
                              "isSoldOut": true
                            }
                          ]
                        }
                      ]
                    },
                    {
                      "filmFormatHeader": "IMAX",
                      "amenityGroups": [
                        {
                          "showtimes": [
                            {"dateTime": "8:30p"}
                          ]
                        }
                      ]
                    }
                  ]
                }
              ]
            },
            {
              "name": "Regal Union Square",
              "movies": []
            }
          ]
        }"#
    }

    #[test]
    fn parses_theaters_with_nested_showtimes() {
        let theaters = parse_showtimes(sample_body(), "2025-05-03", BASE).unwrap();
        assert_eq!(theaters.len(), 2);

        let amc = &theaters[0];
        assert_eq!(amc.id.as_deref(), Some("12345"));
        assert_eq!(amc.slug.as_deref(), Some("amc-empire-25-aatis"));
        assert_eq!(amc.name, "AMC Empire 25");
        assert_eq!(amc.distance_miles, Some(0.46));
        assert_eq!(amc.chain.as_deref(), Some("AMC"));
        assert_eq!(
            amc.url.as_deref(),
            Some("https://www.fandango.com/amc-empire-25-aatis/theater-page")
        );

        let movie = &amc.movies[0];
        assert_eq!(movie.title, "Thunderbolts");
        assert_eq!(movie.runtime_min, Some(127));
        assert_eq!(
            movie.url.as_deref(),
            Some("https://www.fandango.com/thunderbolts-2025-234498/movie-overview")
        );
        assert_eq!(movie.showtimes.len(), 3);
    }

    #[test]
    fn flattens_variants_and_tags_formats() {
        let theaters = parse_showtimes(sample_body(), "2025-05-03", BASE).unwrap();
        let showtimes = &theaters[0].movies[0].showtimes;

        // Standard variant showings carry no format tag.
        assert_eq!(showtimes[0].time, "7:00p");
        assert_eq!(showtimes[0].format, None);
        assert_eq!(
            showtimes[0].ticket_url.as_deref(),
            Some("https://www.fandango.com/ticketing/t1")
        );
        assert!(!showtimes[0].is_sold_out);
        assert!(showtimes[1].is_sold_out);

        // IMAX variant showing, time from the dateTime fallback.
        assert_eq!(showtimes[2].time, "8:30p");
        assert_eq!(showtimes[2].format.as_deref(), Some("IMAX"));

        // Every showing is scoped to the request date.
        assert!(showtimes.iter().all(|s| s.date == "2025-05-03"));
    }

    #[test]
    fn theater_with_missing_optionals_still_parses() {
        let theaters = parse_showtimes(sample_body(), "2025-05-03", BASE).unwrap();
        let regal = &theaters[1];
        assert_eq!(regal.name, "Regal Union Square");
        assert_eq!(regal.id, None);
        assert_eq!(regal.slug, None);
        assert_eq!(regal.distance_miles, None);
        assert!(regal.movies.is_empty());
    }

    #[test]
    fn empty_theater_list_is_a_valid_empty_set() {
        let theaters = parse_showtimes(r#"{"theaters": []}"#, "2025-05-03", BASE).unwrap();
        assert!(theaters.is_empty());
    }

    #[test]
    fn missing_theaters_key_is_a_parse_failure() {
        let err = parse_showtimes(r#"{"pagination": {}}"#, "2025-05-03", BASE).unwrap_err();
        assert!(matches!(err, MovietimeError::ParseFailure(_)), "got: {err:?}");
    }

    #[test]
    fn non_json_body_is_a_parse_failure() {
        let err = parse_showtimes("<html>blocked</html>", "2025-05-03", BASE).unwrap_err();
        assert!(matches!(err, MovietimeError::ParseFailure(_)), "got: {err:?}");
    }

    #[test]
    fn slug_from_path_extracts_first_segment() {
        assert_eq!(
            slug_from_path("/amc-empire-25-aatis/theater-page").as_deref(),
            Some("amc-empire-25-aatis")
        );
        assert_eq!(slug_from_path("/"), None);
        assert_eq!(slug_from_path(""), None);
    }
}
