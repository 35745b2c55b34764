//! Error types for Movietime.

use thiserror::Error;

/// Library-level error type for Movietime operations.
#[derive(Error, Debug)]
pub enum MovietimeError {
    #[error("Invalid location '{0}': expected a ZIP code, \"City, ST\", or city name")]
    InvalidLocation(String),

    #[error("Invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Upstream unavailable: {0}")]
    UpstreamUnavailable(String),

    #[error("Upstream rejected request with HTTP {status}: {url}")]
    UpstreamRejected { status: u16, url: String },

    #[error("Failed to extract data from upstream response: {0}")]
    ParseFailure(String),

    #[error("Theater not found: {0}")]
    TheaterNotFound(String),

    #[error("Movie not found: {0}")]
    MovieNotFound(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

impl MovietimeError {
    /// Stable machine-readable error kind, surfaced in tool error payloads
    /// so an orchestrating agent can decide whether to retry or reformulate.
    pub fn kind(&self) -> &'static str {
        match self {
            MovietimeError::InvalidLocation(_) => "invalid_location",
            MovietimeError::InvalidDate(_) => "invalid_date",
            MovietimeError::UpstreamUnavailable(_) => "upstream_unavailable",
            MovietimeError::UpstreamRejected { .. } => "upstream_rejected",
            MovietimeError::ParseFailure(_) => "parse_failure",
            MovietimeError::TheaterNotFound(_) => "theater_not_found",
            MovietimeError::MovieNotFound(_) => "movie_not_found",
            MovietimeError::Config(_) => "config",
            MovietimeError::Io(_) => "io",
            MovietimeError::Json(_) => "json",
            MovietimeError::TomlParse(_) => "config",
        }
    }
}

/// Result type alias for Movietime operations.
pub type Result<T> = std::result::Result<T, MovietimeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_is_stable_for_tool_errors() {
        assert_eq!(
            MovietimeError::InvalidLocation("??".into()).kind(),
            "invalid_location"
        );
        assert_eq!(
            MovietimeError::UpstreamRejected {
                status: 503,
                url: "https://example.com".into()
            }
            .kind(),
            "upstream_rejected"
        );
        assert_eq!(
            MovietimeError::TheaterNotFound("x".into()).kind(),
            "theater_not_found"
        );
    }
}
