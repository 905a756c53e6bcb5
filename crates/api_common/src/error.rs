use axum::{
    Json,
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::warn;

/// Error body returned to clients
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code
    pub error: String,

    /// Human readable reason
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_description: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    InvalidQuery(String),

    #[error("count must be at most {max}, got {requested}")]
    CountTooLarge { requested: usize, max: usize },
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::InvalidQuery(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        warn!(error = %self, "rejecting request");

        let body = ErrorResponse {
            error: "invalid_request".to_string(),
            error_description: Some(self.to_string()),
        };

        (StatusCode::UNPROCESSABLE_ENTITY, Json(body)).into_response()
    }
}
