//! Response DTOs for the cache server API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::cache::CacheStats;

/// A single `{key, value}` pair, returned by GET /get and as the
/// elements of GET /get-all.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntryResponse {
    pub key: String,
    pub value: String,
}

impl EntryResponse {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl From<(String, String)> for EntryResponse {
    fn from((key, value): (String, String)) -> Self {
        Self { key, value }
    }
}

/// Response body for POST /set
#[derive(Debug, Clone, Serialize)]
pub struct SetResponse {
    /// Always `"ok"`
    pub status: String,
    /// The key that was set
    pub key: String,
}

impl SetResponse {
    pub fn ok(key: impl Into<String>) -> Self {
        Self {
            status: "ok".to_string(),
            key: key.into(),
        }
    }
}

/// Response body for DELETE /del
#[derive(Debug, Clone, Serialize)]
pub struct RemoveResponse {
    pub key: String,
    pub removed: bool,
}

impl RemoveResponse {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            removed: true,
        }
    }
}

/// Response body for GET /stats
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
    pub expirations: u64,
    pub total_entries: usize,
    pub capacity: usize,
    /// hits / (hits + misses)
    pub hit_rate: f64,
}

impl From<CacheStats> for StatsResponse {
    fn from(stats: CacheStats) -> Self {
        Self {
            hit_rate: stats.hit_rate(),
            hits: stats.hits,
            misses: stats.misses,
            evictions: stats.evictions,
            expirations: stats.expirations,
            total_entries: stats.total_entries,
            capacity: stats.capacity,
        }
    }
}

/// Response body for GET /health
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
