//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server or CLI
//! starts.
//!
//! ## Upstream Services
//!
//! ```bash
//! export CHARACTERS_API_URL="https://www.anapioficeandfire.com/api/characters"
//! export AGE_API_URL="https://api.agify.io/"
//! ```
//!
//! ## Response Store
//!
//! Responses are memoized in memory by default. Setting a Redis location switches to
//! the persistent store, either as a full URL:
//!
//! ```bash
//! export REDIS_URL="redis://localhost:6379/0"
//! ```
//!
//! or as individual components:
//!
//! ```bash
//! export REDIS_HOST="localhost"
//! export REDIS_PORT="6379"
//! export REDIS_PASSWORD=""
//! export REDIS_DB="0"
//! ```
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `HTTP_USER_AGENT` - User agent sent upstream (default: `got-tables/<version>`)

use crate::utils::url_builder::parse_absolute_url;
use anyhow::{Context, Result};
use std::env;

pub const DEFAULT_CHARACTERS_API_URL: &str = "https://www.anapioficeandfire.com/api/characters";
pub const DEFAULT_AGE_API_URL: &str = "https://api.agify.io/";

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Character list endpoint (`CHARACTERS_API_URL`).
    pub characters_api_url: String,
    /// Age estimation endpoint (`AGE_API_URL`).
    pub age_api_url: String,
    /// Redis location for the persistent response store; `None` keeps responses in memory.
    pub redis_url: Option<String>,
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            characters_api_url: DEFAULT_CHARACTERS_API_URL.to_string(),
            age_api_url: DEFAULT_AGE_API_URL.to_string(),
            redis_url: None,
            listen_addr: "0.0.0.0:3000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            user_agent: default_user_agent(),
        }
    }
}

impl Config {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let characters_api_url =
            env::var("CHARACTERS_API_URL").unwrap_or(defaults.characters_api_url);
        let age_api_url = env::var("AGE_API_URL").unwrap_or(defaults.age_api_url);

        let redis_url = Self::load_redis_url();

        let listen_addr = env::var("LISTEN").unwrap_or(defaults.listen_addr);
        let log_level = env::var("RUST_LOG").unwrap_or(defaults.log_level);
        let log_format = env::var("LOG_FORMAT").unwrap_or(defaults.log_format);
        let user_agent = env::var("HTTP_USER_AGENT").unwrap_or(defaults.user_agent);

        Ok(Self {
            characters_api_url,
            age_api_url,
            redis_url,
            listen_addr,
            log_level,
            log_format,
            user_agent,
        })
    }

    /// Loads Redis URL with fallback to component-based configuration.
    ///
    /// Priority:
    /// 1. `REDIS_URL` environment variable
    /// 2. Constructed from `REDIS_HOST`, `REDIS_PORT`, `REDIS_PASSWORD`, `REDIS_DB`
    ///
    /// Returns `None` if Redis is not configured.
    fn load_redis_url() -> Option<String> {
        if let Ok(url) = env::var("REDIS_URL") {
            return Some(url);
        }

        let host = env::var("REDIS_HOST").ok()?;
        let port = env::var("REDIS_PORT").unwrap_or_else(|_| "6379".to_string());
        let password = env::var("REDIS_PASSWORD").ok();
        let db = env::var("REDIS_DB").unwrap_or_else(|_| "0".to_string());

        let url = match password {
            Some(pwd) if !pwd.is_empty() => format!("redis://:{}@{}:{}/{}", pwd, host, port, db),
            _ => format!("redis://{}:{}/{}", host, port, db),
        };

        Some(url)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - either upstream URL is not an absolute HTTP(S) URL
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not `host:port`
    /// - the Redis URL uses an unknown scheme
    pub fn validate(&self) -> Result<()> {
        parse_absolute_url(&self.characters_api_url)
            .with_context(|| format!("CHARACTERS_API_URL is invalid: '{}'", self.characters_api_url))?;

        parse_absolute_url(&self.age_api_url)
            .with_context(|| format!("AGE_API_URL is invalid: '{}'", self.age_api_url))?;

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

        if let Some(ref redis_url) = self.redis_url
            && !redis_url.starts_with("redis://")
            && !redis_url.starts_with("rediss://")
        {
            anyhow::bail!(
                "REDIS_URL must start with 'redis://' or 'rediss://', got '{}'",
                mask_connection_string(redis_url)
            );
        }

        if self.user_agent.trim().is_empty() {
            anyhow::bail!("HTTP_USER_AGENT must not be empty");
        }

        Ok(())
    }

    /// Returns whether the persistent Redis store is enabled.
    pub fn is_persistent_cache_enabled(&self) -> bool {
        self.redis_url.is_some()
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Characters API: {}", self.characters_api_url);
        tracing::info!("  Age API: {}", self.age_api_url);

        if let Some(ref redis_url) = self.redis_url {
            tracing::info!("  Response store: {} (redis)", mask_connection_string(redis_url));
        } else {
            tracing::info!("  Response store: memory");
        }

        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

fn default_user_agent() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}

/// Masks sensitive information in connection strings for logging.
///
/// Replaces password with `***` in URLs like:
/// - `redis://:password@host:port/db` → `redis://:***@host:port/db`
fn mask_connection_string(url: &str) -> String {
    if let Some(start) = url.find("://") {
        let scheme_end = start + 3;
        let rest = &url[scheme_end..];

        if let Some(at_pos) = rest.find('@') {
            let credentials = &rest[..at_pos];
            let host_part = &rest[at_pos..];

            if let Some(colon_pos) = credentials.rfind(':') {
                let username = &credentials[..colon_pos];
                return format!("{}://{}:***{}", &url[..start], username, host_part);
            }
        }
    }

    url.to_string()
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
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
