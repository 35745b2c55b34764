//! CLI command implementations.

mod config;
mod info;
mod mcp;
mod movie;
mod showtimes;
mod theater;

pub use config::run_config;
pub use info::run_info;
pub use mcp::run_mcp;
pub use movie::run_movie;
pub use showtimes::run_showtimes;
pub use theater::run_theater;
