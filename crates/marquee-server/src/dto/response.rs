//! Response DTOs for API endpoints.

use serde::Serialize;
use utoipa::ToSchema;

/// Generated recommendations.
#[derive(Debug, Serialize, ToSchema)]
pub struct RecommendResponse {
    /// The model's answer, unmodified
    pub movies: String,
}

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Health status
    pub status: String,
    /// Server version
    pub version: String,
    /// Upstream generation provider
    pub provider: String,
    /// Model identifier requests are sent to
    pub model: String,
}
