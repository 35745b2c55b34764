//! MCP (Model Context Protocol) server for Movietime.
//!
//! Lets AI assistants look up showtimes, theaters, and movies as tools.
//! Implements JSON-RPC 2.0 over stdio.

mod protocol;
mod server;
mod tools;

pub use server::McpServer;
