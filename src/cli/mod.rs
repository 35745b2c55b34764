//! CLI module for Movietime.

pub mod commands;
mod output;

pub use output::Output;

use clap::{Parser, Subcommand};

/// Movietime - Movie showtime lookup
///
/// Look up movie showtimes, theaters, and movie details from Fandango,
/// from the command line or as an MCP server for AI assistants.
#[derive(Parser, Debug)]
#[command(name = "movietime")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Find movies and showtimes near a location
    Showtimes {
        /// ZIP code, "City, State", or city name
        location: String,

        /// Date in YYYY-MM-DD format (default: today)
        #[arg(short, long)]
        date: Option<String>,

        /// Page number, 1-based
        #[arg(short, long, default_value = "1")]
        page: i64,

        /// Print the raw JSON payload instead of formatted output
        #[arg(long)]
        json: bool,
    },

    /// Get all showtimes at a specific theater
    Theater {
        /// Theater slug, theater page path, or full theater page URL
        theater_id: String,

        /// Date in YYYY-MM-DD format (default: today)
        #[arg(short, long)]
        date: Option<String>,

        /// Print the raw JSON payload instead of formatted output
        #[arg(long)]
        json: bool,
    },

    /// Get details about a specific movie
    Movie {
        /// Movie overview URL, path, or slug
        movie_url: String,

        /// Print the raw JSON payload instead of formatted output
        #[arg(long)]
        json: bool,
    },

    /// Start MCP server for AI assistant integration (Claude, etc.)
    Mcp,

    /// Print server name, version, and tool list as JSON
    Info,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,
}
