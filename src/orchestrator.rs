//! Tool pipelines for Movietime.
//!
//! Each tool composes location resolution, fetching, parsing, and
//! pagination in a fixed order. Calls are stateless: every invocation
//! re-resolves and re-fetches, and nothing is cached between them. The
//! only shared piece is the HTTP client configuration, which is read-only
//! after construction.

use crate::config::Settings;
use crate::error::{MovietimeError, Result};
use crate::fetch::PageFetcher;
use crate::location::ResolvedLocation;
use crate::models::{MovieDetails, Theater, TheaterShowtimes};
use crate::paginate::{paginate, ResultPage};
use crate::parse;
use crate::parse::showtimes::slug_from_path;
use chrono::{Local, NaiveDate};
use serde::Serialize;
use tracing::{info, instrument};

/// API path for theaters-with-showtimes lookups.
const SHOWTIMES_API_PATH: &str = "/napi/theaterswithshowtimes";

/// Response shape for `get_showtimes`.
#[derive(Debug, Clone, Serialize)]
pub struct ShowtimesPage {
    /// The location string as the caller supplied it.
    pub location: String,
    /// The date the lookup was scoped to (YYYY-MM-DD).
    pub date: String,
    #[serde(flatten)]
    pub results: ResultPage<Theater>,
}

/// The main orchestrator for the Movietime tool pipelines.
pub struct Orchestrator {
    fetcher: PageFetcher,
}

impl Orchestrator {
    /// Create a new orchestrator from settings.
    pub fn new(settings: Settings) -> Result<Self> {
        let fetcher = PageFetcher::new(
            &settings.upstream.base_url,
            settings.upstream.timeout_secs,
        )?;
        Ok(Self { fetcher })
    }

    /// Find theaters and showtimes near a location.
    ///
    /// Pipeline: validate date -> resolve location -> fetch the showtimes
    /// API -> parse -> paginate locally. A location that resolves to zero
    /// theaters upstream fails with `InvalidLocation`.
    #[instrument(skip(self))]
    pub async fn get_showtimes(
        &self,
        location: &str,
        date: Option<&str>,
        page: i64,
    ) -> Result<ShowtimesPage> {
        let date = validate_date(date)?;
        let resolved = ResolvedLocation::resolve(location)?;

        let mut params = resolved.query_params();
        params.push(("date", date.clone()));
        params.push(("page", "1".to_string()));

        let body = self.fetcher.get_api(SHOWTIMES_API_PATH, &params).await?;
        let theaters = parse::parse_showtimes(&body, &date, self.fetcher.base_url())?;

        if theaters.is_empty() {
            return Err(MovietimeError::InvalidLocation(location.to_string()));
        }

        info!("Found {} theaters near {}", theaters.len(), location);

        let page = usize::try_from(page).unwrap_or(1).max(1);
        Ok(ShowtimesPage {
            location: location.to_string(),
            date,
            results: paginate(theaters, page),
        })
    }

    /// Get all showtimes at a specific theater, unpaginated.
    ///
    /// The theater page renders its showtime grid client-side, so this is
    /// a two-step lookup: fetch the page for the theater's own ZIP code,
    /// then query the showtimes API for that ZIP and filter the result
    /// back down to the requested slug. A theater the API no longer lists
    /// yields an empty showtime list, not an error.
    #[instrument(skip(self))]
    pub async fn get_theater_showtimes(
        &self,
        theater_id: &str,
        date: Option<&str>,
    ) -> Result<TheaterShowtimes> {
        let date = validate_date(date)?;
        let path = normalize_theater_path(theater_id);
        let target_slug = slug_from_path(&path);

        let html = match self.fetcher.get_page(&format!("{path}?date={date}")).await {
            Err(MovietimeError::UpstreamRejected { status: 404, .. }) => {
                return Err(MovietimeError::TheaterNotFound(theater_id.to_string()));
            }
            other => other?,
        };

        let page = parse::parse_theater_page(&html)
            .map_err(|_| MovietimeError::TheaterNotFound(theater_id.to_string()))?;

        let mut theater = None;
        if let Some(zip) = page.zip {
            let params = vec![
                ("zipCode", zip),
                ("date", date.clone()),
                ("page", "1".to_string()),
            ];
            let body = self.fetcher.get_api(SHOWTIMES_API_PATH, &params).await?;
            let theaters = parse::parse_showtimes(&body, &date, self.fetcher.base_url())?;

            if let Some(slug) = &target_slug {
                theater = theaters
                    .into_iter()
                    .find(|t| t.slug.as_deref() == Some(slug.as_str()));
            }
        }

        // The page resolved but the API has nothing scheduled (or no longer
        // lists this theater): an empty showtime list, not an error.
        let theater = theater.unwrap_or_else(|| Theater {
            id: None,
            slug: target_slug,
            name: page.name.unwrap_or_else(|| theater_id.to_string()),
            address: String::new(),
            distance_miles: None,
            chain: None,
            amenities: None,
            url: Some(format!("{}{}", self.fetcher.base_url(), path)),
            movies: Vec::new(),
        });

        Ok(TheaterShowtimes { theater, date })
    }

    /// Get details about a specific movie from its overview page.
    ///
    /// Accepts a full URL, an absolute path, or a bare slug; all three
    /// normalize to the same fetch target.
    #[instrument(skip(self))]
    pub async fn get_movie_details(&self, movie_url: &str) -> Result<MovieDetails> {
        let path = normalize_movie_path(movie_url);
        let url = format!("{}{}", self.fetcher.base_url(), path);

        let html = match self.fetcher.get_page(&path).await {
            Err(MovietimeError::UpstreamRejected { status: 404, .. }) => {
                return Err(MovietimeError::MovieNotFound(movie_url.to_string()));
            }
            other => other?,
        };

        parse::parse_movie_details(&html, &url).map_err(|e| match e {
            MovietimeError::ParseFailure(_) => {
                MovietimeError::MovieNotFound(movie_url.to_string())
            }
            other => other,
        })
    }
}

/// Validate an optional YYYY-MM-DD date, defaulting to today in the
/// server's local context. Runs before any fetch so a malformed date
/// never costs a network round trip.
fn validate_date(date: Option<&str>) -> Result<String> {
    match date {
        None => Ok(Local::now().date_naive().format("%Y-%m-%d").to_string()),
        Some(s) => {
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .map_err(|_| MovietimeError::InvalidDate(s.to_string()))?;
            Ok(s.to_string())
        }
    }
}

/// Normalize a theater identifier (slug, path, or full URL) to a theater
/// page path.
fn normalize_theater_path(theater_id: &str) -> String {
    let mut path = strip_origin(theater_id);
    if !path.starts_with('/') {
        path.insert(0, '/');
    }
    if !path.ends_with("/theater-page") {
        path.push_str("/theater-page");
    }
    path
}

/// Normalize a movie identifier (slug, path, or full URL) to a movie
/// overview path.
fn normalize_movie_path(movie_url: &str) -> String {
    let mut path = strip_origin(movie_url);
    if !path.starts_with('/') {
        path.insert(0, '/');
    }
    if !path.contains("/movie-overview") && !path.contains("/movie-times") {
        path.push_str("/movie-overview");
    }
    path
}

/// Drop the scheme and host from a full URL, keeping only the path.
fn strip_origin(input: &str) -> String {
    let trimmed = input.trim().trim_end_matches('/');
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        if let Ok(parsed) = url::Url::parse(trimmed) {
            return parsed.path().trim_end_matches('/').to_string();
        }
    }
    trimmed.to_string()
}
