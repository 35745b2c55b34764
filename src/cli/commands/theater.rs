//! Theater command implementation.

use crate::cli::Output;
use crate::config::Settings;
use crate::orchestrator::Orchestrator;
use anyhow::Result;

/// Run the theater command.
pub async fn run_theater(
    theater_id: &str,
    date: Option<String>,
    json: bool,
    settings: Settings,
) -> Result<()> {
    let orchestrator = Orchestrator::new(settings)?;

    let spinner = Output::spinner("Looking up theater showtimes...");
    let result = orchestrator
        .get_theater_showtimes(theater_id, date.as_deref())
        .await;
    spinner.finish_and_clear();

    match result {
        Ok(showtimes) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&showtimes)?);
                return Ok(());
            }

            let theater = &showtimes.theater;
            Output::header(&theater.name);
            Output::kv("Date", &showtimes.date);
            if !theater.address.is_empty() {
                Output::kv("Address", &theater.address);
            }
            if let Some(chain) = &theater.chain {
                Output::kv("Chain", chain);
            }
            if let Some(amenities) = &theater.amenities {
                Output::kv("Amenities", amenities);
            }

            if theater.movies.is_empty() {
                Output::info("No showtimes scheduled for this date.");
            } else {
                for movie in &theater.movies {
                    Output::movie_line(&movie.title, &movie.showtimes);
                }
            }
        }
        Err(e) => {
            Output::error(&format!("Theater lookup failed: {}", e));
            return Err(anyhow::anyhow!("{}", e));
        }
    }

    Ok(())
}
