use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

use marquee_core::{AppError, UpstreamErrorKind};

/// API error type that maps to HTTP responses.
///
/// Upstream failures carry a fixed, caller-safe message; the raw upstream
/// error is logged where it happens and never reaches the response body.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Upstream failure: {0}")]
    UpstreamFailure(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// JSON error response body
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable error message
    #[schema(example = "Please provide a movie preference.")]
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::UpstreamFailure(msg) | ApiError::Internal(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::InvalidInput(msg) => ApiError::BadRequest(msg),
            AppError::ConfigError(_) => {
                ApiError::Internal("Recommendation service is misconfigured.".to_string())
            }
            AppError::Timeout(_) => ApiError::UpstreamFailure(
                "The recommendation service timed out. Please try again.".to_string(),
            ),
            other => {
                let message = match other.upstream_kind() {
                    Some(UpstreamErrorKind::RateLimit) => {
                        "The recommendation service is busy. Please try again shortly."
                    }
                    Some(UpstreamErrorKind::Authentication | UpstreamErrorKind::QuotaExceeded) => {
                        "The recommendation service is unavailable."
                    }
                    Some(UpstreamErrorKind::ServerError | UpstreamErrorKind::NetworkError) => {
                        "The recommendation service is temporarily unavailable. Please try again later."
                    }
                    Some(UpstreamErrorKind::Blocked) => {
                        "The request could not be answered. Try rephrasing your preference."
                    }
                    Some(UpstreamErrorKind::Unknown) | None => {
                        "Failed to generate movie recommendations."
                    }
                };
                ApiError::UpstreamFailure(message.to_string())
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}
