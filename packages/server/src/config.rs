use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// Origins allowed by CORS. Empty means any origin.
    pub allowed_origins: Vec<String>,
    pub request_timeout_secs: u64,
    pub notification_retention_days: i64,
    /// Enables `POST /api/system/reset`.
    pub allow_data_reset: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            allowed_origins: Vec::new(),
            request_timeout_secs: 30,
            notification_retention_days: 30,
            allow_data_reset: false,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            allowed_origins: parse_origins(&env::var("ALLOWED_ORIGINS").unwrap_or_default()),
            request_timeout_secs: env::var("REQUEST_TIMEOUT_SECS")
                .unwrap_or_else(|_| "30".to_string())
                .parse()
                .context("REQUEST_TIMEOUT_SECS must be a whole number of seconds")?,
            notification_retention_days: env::var("NOTIFICATION_RETENTION_DAYS")
                .unwrap_or_else(|_| "30".to_string())
                .parse()
                .context("NOTIFICATION_RETENTION_DAYS must be a whole number of days")?,
            allow_data_reset: env::var("ALLOW_DATA_RESET")
                .map(|v| parse_flag(&v))
                .unwrap_or(false),
        })
    }

    pub fn notification_retention(&self) -> chrono::Duration {
        chrono::Duration::days(self.notification_retention_days)
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(String::from)
        .collect()
}

fn parse_flag(raw: &str) -> bool {
    matches!(raw.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes")
}
