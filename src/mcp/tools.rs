//! MCP tool definitions for Movietime.

use super::protocol::Tool;
use serde_json::json;

/// Get all available tools.
pub fn get_tools() -> Vec<Tool> {
    vec![
        Tool {
            name: "get_showtimes".to_string(),
            description: "Find movies and showtimes playing near a location. \
                Accepts a ZIP code (\"90210\"), \"City, State\" (\"Chicago, IL\"), or a city name \
                (\"Seattle\"). Returns nearby theaters with their movies and showtimes for the \
                given date (default: today). Results are paginated; compare 'page' against \
                'total_pages' to detect the end."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "location": {
                        "type": "string",
                        "description": "ZIP code, \"City, State\", or city name to search near"
                    },
                    "date": {
                        "type": "string",
                        "description": "Date to check showtimes for, in YYYY-MM-DD format (default: today)"
                    },
                    "page": {
                        "type": "integer",
                        "description": "Page number, 1-based (default: 1)",
                        "default": 1
                    }
                },
                "required": ["location"]
            }),
        },
        Tool {
            name: "get_theater_showtimes".to_string(),
            description: "Get all showtimes at a specific theater for a date. \
                The theater_id is the slug from get_showtimes results (e.g. \
                \"amc-empire-25-aatis\"); a theater page path or full URL also works. \
                Returns the theater with its movies and showtimes, unpaginated; an empty \
                list means nothing is scheduled for that date."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "theater_id": {
                        "type": "string",
                        "description": "Theater slug, theater page path, or full theater page URL"
                    },
                    "date": {
                        "type": "string",
                        "description": "Date in YYYY-MM-DD format (default: today)"
                    }
                },
                "required": ["theater_id"]
            }),
        },
        Tool {
            name: "get_movie_details".to_string(),
            description: "Get details about a specific movie: title, synopsis, rating, \
                runtime, genres, director, cast, release date, and poster. Accepts the movie \
                URL from get_showtimes results, a path like \
                \"/thunderbolts-2025-234498/movie-overview\", or a bare slug."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "movie_url": {
                        "type": "string",
                        "description": "Movie overview URL, path, or slug"
                    }
                },
                "required": ["movie_url"]
            }),
        },
    ]
}
