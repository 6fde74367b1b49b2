//! Cache Store Module
//!
//! The cache engine: recency-ordered entries with LRU eviction and optional TTL.

use std::time::Duration;

use hashlink::LinkedHashMap;

use crate::cache::entry::current_timestamp_ms;
use crate::cache::{CacheEntry, CacheStats, MAX_KEY_LENGTH, MAX_VALUE_SIZE};
use crate::error::{CacheError, Result};

// == Cache Store ==
/// Bounded key-value store with least-recently-used eviction.
///
/// Entries sit in a `LinkedHashMap` in recency order:
/// - Front = Least recently used
/// - Back = Most recently used
///
/// Not synchronized on its own; see [`SharedCache`](crate::cache::SharedCache)
/// for the handle used across requests.
#[derive(Debug)]
pub struct CacheStore {
    entries: LinkedHashMap<String, CacheEntry>,
    /// Number of stored entries that carry a TTL
    expiring: usize,
    stats: CacheStats,
    capacity: usize,
    /// TTL applied when `set` is called without one
    default_ttl: Option<Duration>,
}

impl CacheStore {
    // == Constructor ==
    /// Creates a store holding at most `capacity` entries.
    ///
    /// Fails with `InvalidConfiguration` when `capacity` is zero.
    pub fn new(capacity: usize, default_ttl: Option<Duration>) -> Result<Self> {
        if capacity == 0 {
            return Err(CacheError::InvalidConfiguration(
                "capacity must be at least 1".to_string(),
            ));
        }

        Ok(Self {
            entries: LinkedHashMap::with_capacity(capacity),
            expiring: 0,
            stats: CacheStats::new(capacity),
            capacity,
            default_ttl,
        })
    }

    // == Set ==
    /// Inserts or updates `key` and marks it most recently used.
    ///
    /// Inserting a new key into a full store first drops expired entries,
    /// then evicts the least recently used entry if still full; the evicted
    /// key is returned. Updating an existing key never evicts.
    pub fn set(
        &mut self,
        key: String,
        value: String,
        ttl: Option<Duration>,
    ) -> Result<Option<String>> {
        if key.is_empty() {
            return Err(CacheError::InvalidRequest("Key cannot be empty".to_string()));
        }
        if key.len() > MAX_KEY_LENGTH {
            return Err(CacheError::InvalidRequest(format!(
                "Key exceeds maximum length of {} bytes",
                MAX_KEY_LENGTH
            )));
        }
        if value.len() > MAX_VALUE_SIZE {
            return Err(CacheError::InvalidRequest(format!(
                "Value exceeds maximum size of {} bytes",
                MAX_VALUE_SIZE
            )));
        }

        let entry = CacheEntry::new(value, ttl.or(self.default_ttl));
        let adds_ttl = entry.expires_at.is_some();

        if let Some(existing) = self.entries.to_back(&key) {
            let dropped_ttl = existing.expires_at.is_some();
            *existing = entry;
            self.expiring = self.expiring + usize::from(adds_ttl) - usize::from(dropped_ttl);
            return Ok(None);
        }

        if self.entries.len() >= self.capacity && self.expiring > 0 {
            self.cleanup_expired();
        }

        let mut evicted = None;
        if self.entries.len() >= self.capacity {
            if let Some((evicted_key, old)) = self.entries.pop_front() {
                self.expiring -= usize::from(old.expires_at.is_some());
                self.stats.record_eviction();
                evicted = Some(evicted_key);
            }
        }

        self.expiring += usize::from(adds_ttl);
        self.entries.insert(key, entry);

        Ok(evicted)
    }

    // == Get ==
    /// Returns the value for `key` and marks it most recently used.
    ///
    /// An expired entry is dropped and reported as `NotFound`. A miss leaves
    /// the recency order untouched.
    pub fn get(&mut self, key: &str) -> Result<String> {
        let expired = match self.entries.get(key) {
            Some(entry) => entry.is_expired(),
            None => {
                self.stats.record_miss();
                return Err(CacheError::NotFound(key.to_string()));
            }
        };

        if expired {
            self.take(key);
            self.stats.record_expirations(1);
            self.stats.record_miss();
            return Err(CacheError::NotFound(key.to_string()));
        }

        match self.entries.to_back(key) {
            Some(entry) => {
                entry.touch();
                let value = entry.value.clone();
                self.stats.record_hit();
                Ok(value)
            }
            None => {
                self.stats.record_miss();
                Err(CacheError::NotFound(key.to_string()))
            }
        }
    }

    // == Get All ==
    /// Returns live entries from most to least recently used.
    ///
    /// Does not change recency; expired entries are skipped, not removed.
    pub fn get_all(&self) -> Vec<(String, String)> {
        let now = current_timestamp_ms();
        self.entries
            .iter()
            .rev()
            .filter(|(_, entry)| !entry.is_expired_at(now))
            .map(|(key, entry)| (key.clone(), entry.value.clone()))
            .collect()
    }

    // == Remove ==
    /// Deletes `key`, returning whether a live entry was present.
    ///
    /// An expired entry is dropped too but reported as absent.
    pub fn remove(&mut self, key: &str) -> bool {
        match self.take(key) {
            Some(entry) if entry.is_expired() => {
                self.stats.record_expirations(1);
                false
            }
            Some(_) => true,
            None => false,
        }
    }

    // == Stats ==
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.len());
        stats
    }

    // == Cleanup Expired ==
    /// Removes all expired entries, returning how many were dropped.
    pub fn cleanup_expired(&mut self) -> usize {
        if self.expiring == 0 {
            return 0;
        }

        let now = current_timestamp_ms();
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired_at(now));

        let count = before - self.entries.len();
        self.expiring -= count;
        self.stats.record_expirations(count);
        count
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of live (unexpired) entries.
    pub fn len(&self) -> usize {
        if self.expiring == 0 {
            return self.entries.len();
        }
        let now = current_timestamp_ms();
        self.entries
            .values()
            .filter(|entry| !entry.is_expired_at(now))
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn take(&mut self, key: &str) -> Option<CacheEntry> {
        let entry = self.entries.remove(key)?;
        self.expiring -= usize::from(entry.expires_at.is_some());
        Some(entry)
    }
}
