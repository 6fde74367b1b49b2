//! API Routes
//!
//! Configures the Axum router with all cache server endpoints.

use axum::{
    http::{header, HeaderValue, Method},
    routing::{delete, get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    get_all_handler, get_handler, health_handler, method_not_allowed, remove_handler,
    route_not_found, set_handler, stats_handler, AppState,
};
use crate::error::{CacheError, Result};

/// Builds the CORS policy for browser clients.
///
/// `"*"` allows any origin; anything else must be a single exact origin.
pub fn cors_layer(origin: &str) -> Result<CorsLayer> {
    let layer = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers(Any)
        .expose_headers([header::CONTENT_LENGTH]);

    if origin == "*" {
        return Ok(layer.allow_origin(Any));
    }

    let origin = HeaderValue::from_str(origin).map_err(|_| {
        CacheError::InvalidConfiguration(format!("invalid CORS origin: {:?}", origin))
    })?;
    Ok(layer.allow_origin(origin))
}

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /get?key=K` - Retrieve a value by key
/// - `GET /get-all` - List entries, most recently used first
/// - `POST /set` - Store a key-value pair
/// - `DELETE /del?key=K` - Remove a key
/// - `GET /stats` - Cache statistics
/// - `GET /health` - Health check
///
/// Unknown paths and wrong methods get the same JSON error body as handler
/// errors.
pub fn create_router(state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        .route("/get", get(get_handler).fallback(method_not_allowed))
        .route("/get-all", get(get_all_handler).fallback(method_not_allowed))
        .route("/set", post(set_handler).fallback(method_not_allowed))
        .route("/del", delete(remove_handler).fallback(method_not_allowed))
        .route("/stats", get(stats_handler).fallback(method_not_allowed))
        .route("/health", get(health_handler).fallback(method_not_allowed))
        .fallback(route_not_found)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
