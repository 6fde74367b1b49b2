//! Cache Entry Module
//!
//! Defines the value stored per key together with its access metadata.

use std::time::Duration;

use chrono::Utc;

// == Cache Entry ==
/// A stored value with creation, access and optional expiry timestamps.
///
/// All timestamps are Unix milliseconds.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored value
    pub value: String,
    /// Creation timestamp
    pub created_at: i64,
    /// Last time the entry was read or written
    pub last_accessed: i64,
    /// Expiration timestamp, None = no expiration
    pub expires_at: Option<i64>,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new cache entry with an optional time to live.
    pub fn new(value: String, ttl: Option<Duration>) -> Self {
        let now = current_timestamp_ms();
        let expires_at = ttl.map(|ttl| now.saturating_add(duration_ms(ttl)));

        Self {
            value,
            created_at: now,
            last_accessed: now,
            expires_at,
        }
    }

    // == Touch ==
    /// Records an access at the current time.
    pub fn touch(&mut self) {
        self.last_accessed = current_timestamp_ms();
    }

    // == Is Expired ==
    /// Checks if the entry has expired.
    ///
    /// An entry is expired once the current time reaches `expires_at`.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(current_timestamp_ms())
    }

    pub fn is_expired_at(&self, now_ms: i64) -> bool {
        match self.expires_at {
            Some(expires) => now_ms >= expires,
            None => false,
        }
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> i64 {
    Utc::now().timestamp_millis()
}

fn duration_ms(duration: Duration) -> i64 {
    i64::try_from(duration.as_millis()).unwrap_or(i64::MAX)
}
