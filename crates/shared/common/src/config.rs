//! Application configuration loaded from environment variables.

use std::env;

use crate::error::{AppError, AppResult};

/// Default log filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Default `chrono` format for dates given on the command line
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Environment variable holding the date format
pub const DATE_FORMAT_ENV: &str = "PERSONNEL_DATE_FORMAT";

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Tracing filter directive
    pub log_level: String,
    /// Format used to parse dates of birth
    pub date_format: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a `.env` file (if any) and the environment.
    pub fn from_env() -> Self {
        if dotenvy::dotenv().is_err() {
            tracing::debug!("No .env file found, using process environment");
        }

        Self {
            log_level: env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string()),
            date_format: env::var(DATE_FORMAT_ENV)
                .unwrap_or_else(|_| DEFAULT_DATE_FORMAT.to_string()),
        }
    }

    /// Replace the date format, e.g. from a command-line flag.
    pub fn with_date_format(mut self, date_format: Option<String>) -> Self {
        if let Some(format) = date_format {
            self.date_format = format;
        }
        self
    }

    /// Reject settings that cannot be used.
    pub fn validate(&self) -> AppResult<()> {
        if self.log_level.trim().is_empty() {
            return Err(AppError::config("log level must not be empty"));
        }
        if self.date_format.trim().is_empty() {
            return Err(AppError::config("date format must not be empty"));
        }
        Ok(())
    }
}
