//! Request and Response models for the cache server API
//!
//! DTOs for query strings and JSON bodies.

pub mod requests;
pub mod responses;

pub use requests::{parse_duration, KeyQuery, SetRequest};
pub use responses::{EntryResponse, HealthResponse, RemoveResponse, SetResponse, StatsResponse};
