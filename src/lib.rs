//! LRU Cache Server - an in-memory key-value cache over HTTP
//!
//! Bounded storage with least-recently-used eviction and optional TTL expiry.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod tasks;

pub use api::AppState;
pub use cache::SharedCache;
pub use config::Config;
pub use error::CacheError;
pub use tasks::spawn_cleanup_task;
