//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Bind Address
//!
//! ```bash
//! export LISTEN="127.0.0.1:8080"   # full address, takes priority
//! export PORT="8080"               # or only the port, bound on 0.0.0.0
//! ```
//!
//! If `LISTEN` is not set, the address is built from `PORT` (default `5000`).
//!
//! ## Optional Variables
//!
//! - `TARGET_BASE_URL` - Site root to scrape (default: `https://cinesubz.co`)
//! - `FETCH_TIMEOUT_SECS` - Upstream timeout for search/details/download (default: 30, range: 1..=300)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::{Context, Result};
use std::env;
use std::time::Duration;
use url::Url;

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_TARGET_BASE_URL: &str = "https://cinesubz.co";

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    /// Site root every relative operation is resolved against. Also sent as `Referer`.
    pub target_base_url: String,
    /// Timeout in seconds for search, details and download fetches.
    /// The health probe always uses its own fixed timeout.
    pub fetch_timeout_secs: u64,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable cannot be parsed.
    pub fn from_env() -> Result<Self> {
        let listen_addr = Self::load_listen_addr().context("Failed to load bind address")?;

        let target_base_url =
            env::var("TARGET_BASE_URL").unwrap_or_else(|_| DEFAULT_TARGET_BASE_URL.to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let fetch_timeout_secs = match env::var("FETCH_TIMEOUT_SECS") {
            Ok(v) => v
                .parse()
                .with_context(|| format!("FETCH_TIMEOUT_SECS must be a number, got '{v}'"))?,
            Err(_) => 30,
        };

        Ok(Self {
            listen_addr,
            target_base_url,
            fetch_timeout_secs,
            log_level,
            log_format,
        })
    }

    /// Loads the bind address.
    ///
    /// Priority:
    /// 1. `LISTEN` environment variable
    /// 2. `0.0.0.0:<PORT>`, with `PORT` defaulting to 5000
    fn load_listen_addr() -> Result<String> {
        if let Ok(addr) = env::var("LISTEN") {
            return Ok(addr);
        }

        let port = match env::var("PORT") {
            Ok(v) => v
                .parse::<u16>()
                .with_context(|| format!("PORT must be a valid port number, got '{v}'"))?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(format!("0.0.0.0:{port}"))
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is invalid
    /// - `target_base_url` is not an absolute http(s) URL with a host
    /// - `fetch_timeout_secs` is outside 1..=300
    pub fn validate(&self) -> Result<()> {
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

        let target = Url::parse(&self.target_base_url).with_context(|| {
            format!(
                "TARGET_BASE_URL must be an absolute URL, got '{}'",
                self.target_base_url
            )
        })?;
        if !matches!(target.scheme(), "http" | "https") || target.host_str().is_none() {
            anyhow::bail!(
                "TARGET_BASE_URL must be an http(s) URL with a host, got '{}'",
                self.target_base_url
            );
        }

        if !(1..=300).contains(&self.fetch_timeout_secs) {
            anyhow::bail!(
                "FETCH_TIMEOUT_SECS must be between 1 and 300, got {}",
                self.fetch_timeout_secs
            );
        }

        Ok(())
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Target: {}", self.target_base_url);
        tracing::info!("  Fetch timeout: {}s", self.fetch_timeout_secs);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
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
