//! Movietime CLI entry point.

use anyhow::Result;
use clap::Parser;
use movietime::cli::{commands, Cli, Commands};
use movietime::config::Settings;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging. The MCP server logs to stderr only, so stdout
    // stays clean for JSON-RPC.
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| format!("movietime={}", log_level)),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    // Load configuration
    let settings = match &cli.config {
        Some(path) => Settings::load_from(Some(&std::path::PathBuf::from(path)))?,
        None => Settings::load()?,
    };

    // Execute command
    match &cli.command {
        Commands::Showtimes {
            location,
            date,
            page,
            json,
        } => {
            commands::run_showtimes(location, date.clone(), *page, *json, settings).await?;
        }

        Commands::Theater {
            theater_id,
            date,
            json,
        } => {
            commands::run_theater(theater_id, date.clone(), *json, settings).await?;
        }

        Commands::Movie { movie_url, json } => {
            commands::run_movie(movie_url, *json, settings).await?;
        }

        Commands::Mcp => {
            commands::run_mcp(settings).await?;
        }

        Commands::Info => {
            commands::run_info()?;
        }

        Commands::Config { action } => {
            commands::run_config(action, settings)?;
        }
    }

    Ok(())
}
