//! API Handlers
//!
//! HTTP request handlers for each cache server endpoint.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::{Method, Uri},
    Json,
};
use tracing::debug;

use crate::cache::SharedCache;
use crate::config::Config;
use crate::error::{CacheError, Result};
use crate::models::{
    EntryResponse, HealthResponse, KeyQuery, RemoveResponse, SetRequest, SetResponse,
    StatsResponse,
};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub cache: SharedCache,
}

impl AppState {
    pub fn new(cache: SharedCache) -> Self {
        Self { cache }
    }

    /// Builds the cache described by `config`.
    ///
    /// Fails with `InvalidConfiguration` for a zero capacity.
    pub fn from_config(config: &Config) -> Result<Self> {
        let cache = SharedCache::with_capacity(config.capacity, config.default_ttl())?;
        Ok(Self::new(cache))
    }
}

/// Handler for GET /get?key=K
pub async fn get_handler(
    State(state): State<AppState>,
    query: std::result::Result<Query<KeyQuery>, QueryRejection>,
) -> Result<Json<EntryResponse>> {
    let Query(query) = query?;
    let key = query.into_key()?;

    let value = state.cache.get(&key).await?;

    Ok(Json(EntryResponse::new(key, value)))
}

/// Handler for GET /get-all
///
/// Entries come back most recently used first.
pub async fn get_all_handler(State(state): State<AppState>) -> Json<Vec<EntryResponse>> {
    let entries = state.cache.get_all().await;
    Json(entries.into_iter().map(EntryResponse::from).collect())
}

/// Handler for POST /set
pub async fn set_handler(
    State(state): State<AppState>,
    payload: std::result::Result<Json<SetRequest>, JsonRejection>,
) -> Result<Json<SetResponse>> {
    let Json(req) = payload?;
    let ttl = req.validate()?;

    let evicted = state.cache.set(req.key.clone(), req.value, ttl).await?;
    if let Some(evicted) = evicted {
        debug!(key = %evicted, "evicted least recently used entry");
    }

    Ok(Json(SetResponse::ok(req.key)))
}

/// Handler for DELETE /del?key=K
pub async fn remove_handler(
    State(state): State<AppState>,
    query: std::result::Result<Query<KeyQuery>, QueryRejection>,
) -> Result<Json<RemoveResponse>> {
    let Query(query) = query?;
    let key = query.into_key()?;

    if !state.cache.remove(&key).await {
        return Err(CacheError::NotFound(key));
    }

    Ok(Json(RemoveResponse::new(key)))
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(state.cache.stats().await.into())
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

/// Fallback for paths with no endpoint.
pub async fn route_not_found(uri: Uri) -> CacheError {
    CacheError::RouteNotFound(uri.path().to_string())
}

/// Fallback for known paths called with an unsupported method.
pub async fn method_not_allowed(method: Method, uri: Uri) -> CacheError {
    CacheError::MethodNotAllowed(method.to_string(), uri.path().to_string())
}
