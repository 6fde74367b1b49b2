//! API Module
//!
//! HTTP handlers and routing for the cache server.
//!
//! # Endpoints
//! - `GET /get?key=K` - Retrieve a value by key
//! - `GET /get-all` - List all entries, most recently used first
//! - `POST /set` - Store a key-value pair
//! - `DELETE /del?key=K` - Remove a key
//! - `GET /stats` - Cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::{cors_layer, create_router};
