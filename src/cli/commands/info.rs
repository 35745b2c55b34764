//! Info command implementation.

use anyhow::Result;
use serde_json::json;

/// Print server name, version, and tool list as JSON, then exit.
pub fn run_info() -> Result<()> {
    let info = json!({
        "name": "movietime",
        "version": env!("CARGO_PKG_VERSION"),
        "description": "MCP server — fetch movie showtimes from Fandango by ZIP code, city/state, or city name.",
        "tools": [
            "get_showtimes",
            "get_theater_showtimes",
            "get_movie_details",
        ],
    });
    println!("{}", serde_json::to_string_pretty(&info)?);
    Ok(())
}
