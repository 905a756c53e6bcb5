use axum::Json;
use sample_source::VideoSource;
use serde::Serialize;
use std::sync::Arc;

mod error;
mod extract;

pub use error::{ApiError, ErrorResponse};
pub use extract::ValidQuery;

/// Number of records returned when the caller does not pass `count`
pub const DEFAULT_COUNT: usize = 5;

/// Largest `count` accepted unless configured otherwise
pub const DEFAULT_MAX_COUNT: usize = 100;

pub fn default_count() -> usize {
    DEFAULT_COUNT
}

/// Upper bound on the `count` query parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountLimit {
    max: usize,
}

impl CountLimit {
    pub fn new(max: usize) -> Self {
        Self { max }
    }

    pub fn max(&self) -> usize {
        self.max
    }

    pub fn check(&self, count: usize) -> Result<usize, ApiError> {
        if count > self.max {
            return Err(ApiError::CountTooLarge {
                requested: count,
                max: self.max,
            });
        }
        Ok(count)
    }
}

impl Default for CountLimit {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_COUNT)
    }
}

/// Shared state handed to every handler of one service
pub struct ServiceState<V> {
    pub source: Arc<dyn VideoSource<V>>,
    pub limit: CountLimit,
}

impl<V> ServiceState<V> {
    pub fn new(source: Arc<dyn VideoSource<V>>, limit: CountLimit) -> Self {
        Self { source, limit }
    }
}

impl<V> Clone for ServiceState<V> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
            limit: self.limit,
        }
    }
}

/// Liveness payload
#[derive(Debug, Serialize)]
pub struct Health {
    pub ok: bool,
}

/// Handler for `GET /health`
pub async fn health() -> Json<Health> {
    Json(Health { ok: true })
}
