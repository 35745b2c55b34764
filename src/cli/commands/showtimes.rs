//! Showtimes command implementation.

use crate::cli::Output;
use crate::config::Settings;
use crate::orchestrator::Orchestrator;
use anyhow::Result;

/// Run the showtimes command.
pub async fn run_showtimes(
    location: &str,
    date: Option<String>,
    page: i64,
    json: bool,
    settings: Settings,
) -> Result<()> {
    let orchestrator = Orchestrator::new(settings)?;

    let spinner = Output::spinner("Looking up showtimes...");
    let result = orchestrator
        .get_showtimes(location, date.as_deref(), page)
        .await;
    spinner.finish_and_clear();

    match result {
        Ok(showtimes) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&showtimes)?);
                return Ok(());
            }

            Output::success(&format!(
                "{} theaters near {} on {} (page {} of {})",
                showtimes.results.total_items,
                showtimes.location,
                showtimes.date,
                showtimes.results.page,
                showtimes.results.total_pages
            ));

            for theater in &showtimes.results.items {
                Output::header(&theater.name);
                if !theater.address.is_empty() {
                    Output::kv("Address", &theater.address);
                }
                if let Some(distance) = theater.distance_miles {
                    Output::kv("Distance", &format!("{:.1} mi", distance));
                }
                if let Some(slug) = &theater.slug {
                    Output::kv("Slug", slug);
                }
                for movie in &theater.movies {
                    Output::movie_line(&movie.title, &movie.showtimes);
                }
            }

            if showtimes.results.items.is_empty()
                && showtimes.results.page > showtimes.results.total_pages
            {
                Output::info(&format!(
                    "Page {} is past the end ({} pages total).",
                    showtimes.results.page, showtimes.results.total_pages
                ));
            }
        }
        Err(e) => {
            Output::error(&format!("Showtimes lookup failed: {}", e));
            return Err(anyhow::anyhow!("{}", e));
        }
    }

    Ok(())
}
