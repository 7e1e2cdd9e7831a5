//! Application configuration
//!
//! This module provides centralized configuration management using the `config` crate.
//! Configuration can be loaded from environment variables and config files.
//!
//! Rooms and business hours are part of the configuration and are handed to
//! the services explicitly; nothing reads them from global state.

use chrono::NaiveTime;
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

use crate::models::{BusinessHours, DailyHours, Room};

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,

    #[serde(default)]
    pub booking: BookingConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Number of worker threads
    #[serde(default = "default_workers")]
    pub workers: usize,

    /// Comma-separated list of allowed CORS origins
    #[serde(default = "default_cors_origins")]
    pub cors_origins: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_workers() -> usize {
    num_cpus::get()
}

fn default_cors_origins() -> String {
    "http://localhost:3000,http://127.0.0.1:3000".to_string()
}

/// Booking rules configuration
#[derive(Debug, Deserialize, Clone)]
pub struct BookingConfig {
    /// ISO currency code used for all prices
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Spacing between candidate start times when listing availability
    #[serde(default = "default_slot_step")]
    pub slot_step_minutes: i32,

    /// Weekly opening hours
    #[serde(default = "default_business_hours")]
    pub business_hours: BusinessHours,

    /// Rooms available for booking
    #[serde(default)]
    pub rooms: Vec<Room>,
}

fn default_currency() -> String {
    "USD".to_string()
}

fn default_slot_step() -> i32 {
    30
}

fn default_business_hours() -> BusinessHours {
    // 09:00-23:00 every day
    let open = NaiveTime::from_hms_opt(9, 0, 0).unwrap_or_default();
    let close = NaiveTime::from_hms_opt(23, 0, 0).unwrap_or_default();
    BusinessHours::every_day(DailyHours::new(open, close))
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            slot_step_minutes: default_slot_step(),
            business_hours: default_business_hours(),
            rooms: Vec::new(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    /// Default log level for the workspace crates
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit JSON lines instead of human-readable output
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment and optional config file
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = Config::builder()
            // Start with default values
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080)?
            .set_default("server.workers", num_cpus::get() as i64)?
            .set_default("booking.currency", "USD")?
            .set_default("booking.slot_step_minutes", 30)?
            .set_default("logging.level", "info")?
            .set_default("logging.json", false)?
            // Load config file if exists
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Load from environment variables with BOOM_ prefix
            .add_source(
                Environment::with_prefix("BOOM")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Get the server bind address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
