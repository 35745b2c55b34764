//! Configuration module for Movietime.
//!
//! Handles loading and managing application settings.

mod settings;

pub use settings::{GeneralSettings, Settings, UpstreamSettings};
