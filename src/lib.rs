//! Movietime - Movie Showtime Lookup
//!
//! An MCP server and CLI that fetches movie showtimes from Fandango.
//!
//! # Overview
//!
//! Movietime lets you:
//! - Find theaters and showtimes near a ZIP code, "City, State", or city name
//! - Get every showtime at a specific theater for a date
//! - Get details (synopsis, cast, rating, runtime) for a specific movie
//!
//! Each lookup is stateless: nothing is cached or persisted between calls,
//! and every invocation fetches fresh data from the upstream site.
//!
//! # Architecture
//!
//! The library is organized into several modules:
//!
//! - `config` - Configuration management
//! - `location` - Location string classification and resolution
//! - `fetch` - Outbound HTTP against the upstream site
//! - `parse` - Extraction of theaters, showtimes, and movie details
//! - `paginate` - Deterministic local pagination
//! - `models` - Response entity types
//! - `orchestrator` - The three tool pipelines
//! - `mcp` - MCP server (JSON-RPC 2.0 over stdio)
//! - `cli` - Command-line interface
//!
//! # Example
//!
//! ```rust,no_run
//! use movietime::config::Settings;
//! use movietime::orchestrator::Orchestrator;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let settings = Settings::load()?;
//!     let orchestrator = Orchestrator::new(settings)?;
//!
//!     // Find showtimes near Beverly Hills for today, first page
//!     let page = orchestrator.get_showtimes("90210", None, 1).await?;
//!     println!("{} theaters found", page.results.total_items);
//!
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod fetch;
pub mod location;
pub mod mcp;
pub mod models;
pub mod orchestrator;
pub mod paginate;
pub mod parse;

pub use error::{MovietimeError, Result};
