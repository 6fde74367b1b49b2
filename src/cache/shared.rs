//! Shared Cache Module
//!
//! Thread-safe handle around [`CacheStore`] used by handlers and tasks.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;

use crate::cache::{CacheStats, CacheStore};
use crate::error::Result;

// == Shared Cache ==
/// Cloneable handle to a single [`CacheStore`] behind an async `RwLock`.
///
/// Each method holds the lock for exactly one store operation, so a `set`
/// and the eviction it triggers are observed atomically. Reads that leave
/// recency untouched (`get_all`, `stats`) share the lock; everything else
/// takes it exclusively.
#[derive(Debug, Clone)]
pub struct SharedCache {
    inner: Arc<RwLock<CacheStore>>,
}

impl SharedCache {
    pub fn new(store: CacheStore) -> Self {
        Self {
            inner: Arc::new(RwLock::new(store)),
        }
    }

    /// Builds a store with the given capacity and wraps it.
    pub fn with_capacity(capacity: usize, default_ttl: Option<Duration>) -> Result<Self> {
        Ok(Self::new(CacheStore::new(capacity, default_ttl)?))
    }

    pub async fn get(&self, key: &str) -> Result<String> {
        self.inner.write().await.get(key)
    }

    /// Stores a value, returning the key evicted to make room, if any.
    pub async fn set(
        &self,
        key: String,
        value: String,
        ttl: Option<Duration>,
    ) -> Result<Option<String>> {
        self.inner.write().await.set(key, value, ttl)
    }

    pub async fn get_all(&self) -> Vec<(String, String)> {
        self.inner.read().await.get_all()
    }

    pub async fn remove(&self, key: &str) -> bool {
        self.inner.write().await.remove(key)
    }

    pub async fn stats(&self) -> CacheStats {
        self.inner.read().await.stats()
    }

    pub async fn cleanup_expired(&self) -> usize {
        self.inner.write().await.cleanup_expired()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }
}
