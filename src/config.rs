//! Service configuration read from the environment once at startup.
//!
//! ## Database
//!
//! `DATABASE_URL` wins when set. Otherwise the URL is assembled from
//! `DB_HOST` (default `localhost`), `DB_PORT` (default `5432`), `DB_USER`,
//! `DB_PASSWORD` and `DB_NAME`, with credentials percent-encoded.
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:8000`)
//! - `BASE_URL` - Public base address used in short URLs (default: derived from the `Host` header)
//! - `BEHIND_PROXY` - Trust `X-Forwarded-Proto` when deriving the base address (default: `false`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `MAX_SUFFIX_ATTEMPTS` - Generated suffix candidates tried per request (default: 10)
//! - `EXPIRY_SWEEP_INTERVAL_SECONDS` - Background expiry sweep period, `0` disables (default: 0)
//! - `CORS_ALLOWED_ORIGINS` - Comma-separated origins (default: `http://localhost:3000`)

use crate::application::services::shorten_service::DEFAULT_MAX_SUFFIX_ATTEMPTS;
use anyhow::{Context, Result};
use std::env;
use std::str::FromStr;
use url::Url;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub listen_addr: String,
    /// Public base address for short URLs. When `None`, it is derived per request.
    pub base_url: Option<String>,
    /// When true, `X-Forwarded-Proto` decides the scheme of derived base addresses.
    /// Enable only when the service is behind a trusted reverse proxy.
    pub behind_proxy: bool,
    pub log_level: String,
    pub log_format: String,
    /// Upper bound on generated suffix candidates per shortening request.
    pub max_suffix_attempts: usize,
    /// Period of the background expiry sweep in seconds; `0` disables it.
    pub expiry_sweep_interval_seconds: u64,
    /// Origins allowed by CORS.
    pub cors_allowed_origins: Vec<String>,

    // ── PgPool settings ─────────────────────────────────────────────────────
    /// Maximum number of connections in the pool (`DB_MAX_CONNECTIONS`, default: 10).
    pub db_max_connections: u32,
    /// Timeout for acquiring a connection from the pool in seconds
    /// (`DB_CONNECT_TIMEOUT`, default: 30).
    pub db_connect_timeout: u64,
    /// Idle connection lifetime in seconds before it is closed
    /// (`DB_IDLE_TIMEOUT`, default: 600).
    pub db_idle_timeout: u64,
    /// Maximum connection lifetime in seconds (`DB_MAX_LIFETIME`, default: 1800).
    pub db_max_lifetime: u64,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if required database configuration is missing.
    pub fn from_env() -> Result<Self> {
        let database_url =
            Self::load_database_url().context("Failed to load database configuration")?;

        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:8000".to_string());
        let base_url = env::var("BASE_URL").ok().filter(|v| !v.trim().is_empty());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let behind_proxy = env::var("BEHIND_PROXY")
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(false);

        let cors_allowed_origins = env::var("CORS_ALLOWED_ORIGINS")
            .map(|v| parse_list(&v))
            .unwrap_or_else(|_| vec!["http://localhost:3000".to_string()]);

        Ok(Self {
            database_url,
            listen_addr,
            base_url,
            behind_proxy,
            log_level,
            log_format,
            max_suffix_attempts: env_or("MAX_SUFFIX_ATTEMPTS", DEFAULT_MAX_SUFFIX_ATTEMPTS),
            expiry_sweep_interval_seconds: env_or("EXPIRY_SWEEP_INTERVAL_SECONDS", 0),
            cors_allowed_origins,
            db_max_connections: env_or("DB_MAX_CONNECTIONS", 10),
            db_connect_timeout: env_or("DB_CONNECT_TIMEOUT", 30),
            db_idle_timeout: env_or("DB_IDLE_TIMEOUT", 600),
            db_max_lifetime: env_or("DB_MAX_LIFETIME", 1800),
        })
    }

    /// Returns `DATABASE_URL`, or a URL assembled from the `DB_*` variables.
    fn load_database_url() -> Result<String> {
        if let Ok(url) = env::var("DATABASE_URL") {
            return Ok(url);
        }

        let required = |key: &str| {
            env::var(key)
                .with_context(|| format!("{key} must be set when DATABASE_URL is not provided"))
        };

        let host = env::var("DB_HOST").unwrap_or_else(|_| "localhost".to_string());
        let mut url = Url::parse(&format!("postgres://{host}"))
            .with_context(|| format!("DB_HOST is not a valid host: {host}"))?;

        url.set_port(Some(env_or("DB_PORT", 5432)))
            .map_err(|()| anyhow::anyhow!("DB_HOST does not accept a port: {host}"))?;
        url.set_username(&required("DB_USER")?)
            .map_err(|()| anyhow::anyhow!("DB_USER cannot be set on {host}"))?;
        url.set_password(Some(&required("DB_PASSWORD")?))
            .map_err(|()| anyhow::anyhow!("DB_PASSWORD cannot be set on {host}"))?;
        url.set_path(&required("DB_NAME")?);

        Ok(url.to_string())
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is invalid
    /// - `database_url` is not a PostgreSQL URL
    /// - `base_url` is not an absolute HTTP(S) URL
    /// - `max_suffix_attempts` is outside 1..=1000
    /// - pool settings are zero
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

        if !self.database_url.starts_with("postgres://")
            && !self.database_url.starts_with("postgresql://")
        {
            anyhow::bail!(
                "DATABASE_URL must start with 'postgres://' or 'postgresql://', got '{}'",
                mask_connection_string(&self.database_url)
            );
        }

        if let Some(ref base_url) = self.base_url
            && !base_url.starts_with("http://")
            && !base_url.starts_with("https://")
        {
            anyhow::bail!(
                "BASE_URL must start with 'http://' or 'https://', got '{}'",
                base_url
            );
        }

        if self.max_suffix_attempts == 0 || self.max_suffix_attempts > 1000 {
            anyhow::bail!(
                "MAX_SUFFIX_ATTEMPTS must be between 1 and 1000, got {}",
                self.max_suffix_attempts
            );
        }

        if self.db_max_connections == 0 {
            anyhow::bail!("DB_MAX_CONNECTIONS must be at least 1");
        }
        if self.db_connect_timeout == 0 {
            anyhow::bail!("DB_CONNECT_TIMEOUT must be greater than 0");
        }

        Ok(())
    }

    /// Returns whether the background expiry sweep is enabled.
    pub fn is_sweeper_enabled(&self) -> bool {
        self.expiry_sweep_interval_seconds > 0
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Database: {}", mask_connection_string(&self.database_url));

        match self.base_url {
            Some(ref base_url) => tracing::info!("  Base URL: {}", base_url),
            None => tracing::info!("  Base URL: derived from Host header"),
        }

        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  Max suffix attempts: {}", self.max_suffix_attempts);

        if self.is_sweeper_enabled() {
            tracing::info!(
                "  Expiry sweep: every {}s",
                self.expiry_sweep_interval_seconds
            );
        } else {
            tracing::info!("  Expiry sweep: disabled");
        }
    }
}

/// Reads and parses an environment variable, falling back to `default`.
fn env_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

/// Splits a comma-separated list, dropping blanks.
fn parse_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Replaces the password of a connection URL with `***` for logging.
///
/// Unparseable input is hidden entirely.
fn mask_connection_string(raw: &str) -> String {
    let Ok(mut url) = Url::parse(raw) else {
        return "***".to_string();
    };

    if url.password().is_some() && url.set_password(Some("***")).is_err() {
        return "***".to_string();
    }

    url.to_string()
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if required variables are missing or validation fails.
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
