//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::str::FromStr;

/// Default SQLite location, created on first start.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://products.db?mode=rwc";

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// sqlx connection string for the product table
    pub database_url: String,
    /// Upper bound on pooled database connections
    pub max_connections: u32,
    /// Interval in seconds between wholesale cache clears
    pub cache_clear_interval: u64,
    /// Evict the cached product list on create/update/delete
    pub invalidate_on_write: bool,
    /// Insert the sample products at start-up
    pub seed_sample_data: bool,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 8080)
    /// - `DATABASE_URL` - sqlx SQLite URL (default: `sqlite://products.db?mode=rwc`)
    /// - `DB_MAX_CONNECTIONS` - Pool size (default: 5)
    /// - `CACHE_CLEAR_INTERVAL` - Cache clear period in seconds (default: 60)
    /// - `CACHE_INVALIDATE_ON_WRITE` - Evict list cache on writes (default: true)
    /// - `SEED_SAMPLE_DATA` - Insert sample products on start-up (default: false)
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            server_port: env_or("SERVER_PORT", defaults.server_port),
            database_url: env::var("DATABASE_URL").unwrap_or(defaults.database_url),
            max_connections: env_or("DB_MAX_CONNECTIONS", defaults.max_connections),
            cache_clear_interval: env_or("CACHE_CLEAR_INTERVAL", defaults.cache_clear_interval)
                .max(1),
            invalidate_on_write: env_flag(
                "CACHE_INVALIDATE_ON_WRITE",
                defaults.invalidate_on_write,
            ),
            seed_sample_data: env_flag("SEED_SAMPLE_DATA", defaults.seed_sample_data),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 8080,
            database_url: DEFAULT_DATABASE_URL.to_string(),
            max_connections: 5,
            cache_clear_interval: 60,
            invalidate_on_write: true,
            seed_sample_data: false,
        }
    }
}

fn env_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn env_flag(key: &str, default: bool) -> bool {
    env::var(key)
        .ok()
        .and_then(|v| parse_flag(&v))
        .unwrap_or(default)
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
