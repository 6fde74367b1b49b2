//! Configuration Module
//!
//! Server settings from command-line flags, falling back to environment
//! variables and then to defaults.

use std::time::Duration;

use axum::http::HeaderValue;
use clap::Parser;

use crate::error::{CacheError, Result};

/// Number of entries the original web client was built around.
pub const DEFAULT_CAPACITY: usize = 3;
pub const DEFAULT_PORT: u16 = 8086;
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:5173";

/// Server configuration parameters.
#[derive(Debug, Clone, Parser)]
#[command(name = "lru_cache_server")]
#[command(about = "In-memory LRU key-value cache served over HTTP")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Config {
    /// Maximum number of entries the cache can hold
    #[arg(long, env = "CACHE_CAPACITY", default_value_t = DEFAULT_CAPACITY)]
    pub capacity: usize,

    /// TTL in seconds for entries set without a duration (0 = never expire)
    #[arg(long, env = "DEFAULT_TTL", default_value_t = 0)]
    pub default_ttl: u64,

    /// HTTP server port
    #[arg(long = "port", env = "SERVER_PORT", default_value_t = DEFAULT_PORT)]
    pub server_port: u16,

    /// Seconds between sweeps for expired entries
    #[arg(long, env = "CLEANUP_INTERVAL", default_value_t = 1)]
    pub cleanup_interval: u64,

    /// Origin allowed to call the API from a browser ("*" for any)
    #[arg(long, env = "CORS_ORIGIN", default_value = DEFAULT_CORS_ORIGIN)]
    pub cors_origin: String,
}

impl Config {
    /// Rejects settings the server cannot start with.
    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 {
            return Err(CacheError::InvalidConfiguration(
                "capacity must be at least 1".to_string(),
            ));
        }
        if self.cleanup_interval == 0 {
            return Err(CacheError::InvalidConfiguration(
                "cleanup interval must be at least 1 second".to_string(),
            ));
        }
        if self.cors_origin != "*" && HeaderValue::from_str(&self.cors_origin).is_err() {
            return Err(CacheError::InvalidConfiguration(format!(
                "invalid CORS origin: {:?}",
                self.cors_origin
            )));
        }
        Ok(())
    }

    /// The server-wide TTL, or None when entries never expire by default.
    pub fn default_ttl(&self) -> Option<Duration> {
        (self.default_ttl > 0).then(|| Duration::from_secs(self.default_ttl))
    }

    pub fn cleanup_interval(&self) -> Duration {
        Duration::from_secs(self.cleanup_interval)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            default_ttl: 0,
            server_port: DEFAULT_PORT,
            cleanup_interval: 1,
            cors_origin: DEFAULT_CORS_ORIGIN.to_string(),
        }
    }
}
