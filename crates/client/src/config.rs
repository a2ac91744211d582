//! # Client Configuration Module
//!
//! This module handles loading configuration for the timetable client from
//! environment variables, providing defaults where appropriate.
//!
//! ## Environment Variables
//!
//! - `TIMETABLE_API_URL`: base URL of the timetable storage service (required)
//! - `TIMETABLE_REQUEST_TIMEOUT_SECONDS`: per-request timeout (default: 30)
//! - `LOG_LEVEL`: logging level (default: "info")

use eyre::{Result, WrapErr};
use std::env;
use tracing::Level;

/// Configuration for the timetable REST client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the schedule-slot and academic-year services
    pub base_url: String,

    /// Per-request timeout in seconds
    pub request_timeout: u64,

    /// Log level for the application
    pub log_level: Level,
}

impl ClientConfig {
    /// Creates a new ClientConfig from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if the TIMETABLE_API_URL environment variable is not
    /// set.
    pub fn from_env() -> Result<Self> {
        let base_url = env::var("TIMETABLE_API_URL")
            .wrap_err("TIMETABLE_API_URL environment variable must be set")?;

        let request_timeout = env::var("TIMETABLE_REQUEST_TIMEOUT_SECONDS")
            .unwrap_or_else(|_| "30".to_string())
            .parse()
            .unwrap_or(30);

        let log_level = match env::var("LOG_LEVEL")
            .unwrap_or_else(|_| "info".to_string())
            .as_str()
        {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        };

        Ok(Self {
            base_url,
            request_timeout,
            log_level,
        })
    }
}
