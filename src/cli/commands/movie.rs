//! Movie command implementation.

use crate::cli::Output;
use crate::config::Settings;
use crate::orchestrator::Orchestrator;
use anyhow::Result;

/// Run the movie command.
pub async fn run_movie(movie_url: &str, json: bool, settings: Settings) -> Result<()> {
    let orchestrator = Orchestrator::new(settings)?;

    let spinner = Output::spinner("Looking up movie details...");
    let result = orchestrator.get_movie_details(movie_url).await;
    spinner.finish_and_clear();

    match result {
        Ok(details) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&details)?);
                return Ok(());
            }

            Output::header(&details.title);
            if let Some(rating) = &details.rating {
                Output::kv("Rating", rating);
            }
            if let Some(runtime) = &details.runtime {
                Output::kv("Runtime", runtime);
            }
            if !details.genres.is_empty() {
                Output::kv("Genres", &details.genres.join(", "));
            }
            if let Some(release_date) = &details.release_date {
                Output::kv("Released", release_date);
            }
            if let Some(director) = &details.director {
                Output::kv("Director", director);
            }
            if !details.cast.is_empty() {
                Output::kv("Cast", &details.cast.join(", "));
            }
            if let Some(synopsis) = &details.synopsis {
                println!("\n{}", synopsis);
            }
            Output::kv("URL", &details.url);
        }
        Err(e) => {
            Output::error(&format!("Movie lookup failed: {}", e));
            return Err(anyhow::anyhow!("{}", e));
        }
    }

    Ok(())
}
