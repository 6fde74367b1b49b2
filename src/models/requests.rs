//! Request DTOs for the cache server API
//!
//! Defines the structure of incoming query strings and request bodies.

use std::time::Duration;

use serde::Deserialize;

use crate::cache::{MAX_KEY_LENGTH, MAX_VALUE_SIZE};
use crate::error::{CacheError, Result};

/// Query string for the key-addressed endpoints (`/get`, `/del`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct KeyQuery {
    #[serde(default)]
    pub key: Option<String>,
}

impl KeyQuery {
    /// Returns the key, rejecting a missing or empty parameter.
    pub fn into_key(self) -> Result<String> {
        match self.key {
            Some(key) if !key.is_empty() => Ok(key),
            _ => Err(CacheError::InvalidRequest(
                "Missing required query parameter: key".to_string(),
            )),
        }
    }
}

/// Request body for POST /set
///
/// `duration` is an optional time to live written the way the web client
/// sends it, e.g. `"30s"`, `"1m30s"` or `"250ms"`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SetRequest {
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub duration: Option<String>,
}

impl SetRequest {
    /// Validates the request and returns the parsed TTL, if one was given.
    pub fn validate(&self) -> Result<Option<Duration>> {
        if self.key.is_empty() {
            return Err(CacheError::InvalidRequest("Key cannot be empty".to_string()));
        }
        if self.value.is_empty() {
            return Err(CacheError::InvalidRequest("Value cannot be empty".to_string()));
        }
        if self.key.len() > MAX_KEY_LENGTH {
            return Err(CacheError::InvalidRequest(format!(
                "Key exceeds maximum length of {} bytes",
                MAX_KEY_LENGTH
            )));
        }
        if self.value.len() > MAX_VALUE_SIZE {
            return Err(CacheError::InvalidRequest(format!(
                "Value exceeds maximum size of {} bytes",
                MAX_VALUE_SIZE
            )));
        }

        match self.duration.as_deref() {
            None | Some("") => Ok(None),
            Some(text) => parse_duration(text).map(Some),
        }
    }
}

// == Duration Parsing ==
/// Parses a duration such as `"1h30m"`, `"1.5s"` or `"300ms"`.
///
/// Accepted units: `ns`, `us` (`µs`), `ms`, `s`, `m`, `h`. Every number needs
/// a unit, and the total must be positive.
pub fn parse_duration(text: &str) -> Result<Duration> {
    let invalid = || CacheError::InvalidRequest(format!("Invalid duration: {:?}", text));

    let mut rest = text.trim();
    if rest.is_empty() {
        return Err(invalid());
    }

    let mut total_nanos = 0f64;
    while !rest.is_empty() {
        let number_len = rest
            .find(|c: char| !(c.is_ascii_digit() || c == '.'))
            .unwrap_or(rest.len());
        if number_len == 0 {
            return Err(invalid());
        }
        let number: f64 = rest[..number_len].parse().map_err(|_| invalid())?;
        rest = &rest[number_len..];

        let unit_len = rest
            .find(|c: char| c.is_ascii_digit() || c == '.')
            .unwrap_or(rest.len());
        let nanos_per_unit = match &rest[..unit_len] {
            "ns" => 1.0,
            "us" | "µs" | "μs" => 1e3,
            "ms" => 1e6,
            "s" => 1e9,
            "m" => 60e9,
            "h" => 3600e9,
            _ => return Err(invalid()),
        };
        rest = &rest[unit_len..];

        total_nanos += number * nanos_per_unit;
    }

    if !total_nanos.is_finite() || total_nanos < 1.0 || total_nanos > u64::MAX as f64 {
        return Err(invalid());
    }
    Ok(Duration::from_nanos(total_nanos as u64))
}
