//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the dataset
//! is fetched.
//!
//! ## Dataset
//!
//! ```bash
//! export DATASET_PATH="extended_dataset.csv"
//! export DATASET_URL="https://raw.githubusercontent.com/Rombeii/CNN-news-dashboard/main/extended_dataset.csv"
//! ```
//!
//! The local path is tried first. If the file does not exist, the dataset is
//! downloaded from `DATASET_URL` instead.
//!
//! ## Optional Variables
//!
//! - `DATASET_FETCH_TIMEOUT_SECS` - Per-request timeout for the remote fetch (default: 30)
//! - `DATASET_FETCH_RETRIES` - Retries after a failed remote fetch (default: 3, max: 10)
//! - `LISTEN` - Bind address (default: `0.0.0.0:5007`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::{Context, Result};
use std::env;
use std::time::Duration;
use url::Url;

pub const DEFAULT_DATASET_PATH: &str = "extended_dataset.csv";
pub const DEFAULT_DATASET_URL: &str =
    "https://raw.githubusercontent.com/Rombeii/CNN-news-dashboard/main/extended_dataset.csv";

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub dataset_path: String,
    pub dataset_url: String,
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Timeout (seconds) for each attempt at downloading the dataset.
    pub fetch_timeout_seconds: u64,
    /// Retries after the first failed download attempt.
    pub fetch_retries: usize,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable is set but not a number.
    pub fn from_env() -> Result<Self> {
        let dataset_path =
            env::var("DATASET_PATH").unwrap_or_else(|_| DEFAULT_DATASET_PATH.to_string());
        let dataset_url =
            env::var("DATASET_URL").unwrap_or_else(|_| DEFAULT_DATASET_URL.to_string());

        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:5007".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let fetch_timeout_seconds = parse_var("DATASET_FETCH_TIMEOUT_SECS", 30)?;
        let fetch_retries = parse_var("DATASET_FETCH_RETRIES", 3)?;

        Ok(Self {
            dataset_path,
            dataset_url,
            listen_addr,
            log_level,
            log_format,
            fetch_timeout_seconds,
            fetch_retries,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `dataset_path` is empty
    /// - `dataset_url` is not an `http`/`https` URL
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not `host:port`
    /// - the fetch timeout is zero or retries exceed 10
    pub fn validate(&self) -> Result<()> {
        if self.dataset_path.trim().is_empty() {
            anyhow::bail!("DATASET_PATH must not be empty");
        }

        let url = Url::parse(&self.dataset_url)
            .with_context(|| format!("DATASET_URL is not a valid URL: '{}'", self.dataset_url))?;
        if url.scheme() != "http" && url.scheme() != "https" {
            anyhow::bail!(
                "DATASET_URL must use http or https, got '{}'",
                url.scheme()
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.fetch_timeout_seconds == 0 {
            anyhow::bail!("DATASET_FETCH_TIMEOUT_SECS must be greater than 0");
        }

        if self.fetch_retries > 10 {
            anyhow::bail!(
                "DATASET_FETCH_RETRIES must be at most 10, got {}",
                self.fetch_retries
            );
        }

        Ok(())
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_seconds)
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Dataset path: {}", self.dataset_path);
        tracing::info!("  Dataset fallback URL: {}", self.dataset_url);
        tracing::info!(
            "  Fetch timeout: {}s, retries: {}",
            self.fetch_timeout_seconds,
            self.fetch_retries
        );
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

fn parse_var<T: std::str::FromStr>(name: &str, default: T) -> Result<T> {
    match env::var(name) {
        Ok(v) => v
            .trim()
            .parse()
            .map_err(|_| anyhow::anyhow!("{name} must be a non-negative integer, got '{v}'")),
        Err(_) => Ok(default),
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable is malformed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
