//! Health check endpoint.

use axum::{Json, extract::State};

use marquee_core::TextGenerator;

use crate::dto::HealthResponse;
use crate::state::AppState;

/// Health check endpoint.
///
/// Returns the server version and the configured upstream provider. Does not
/// call the upstream API.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Server is healthy", body = HealthResponse),
    ),
    tag = "system"
)]
pub async fn health_check<G>(State(state): State<AppState<G>>) -> Json<HealthResponse>
where
    G: TextGenerator + 'static,
{
    let generator = state.recommendation_service.generator();

    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        provider: generator.name().to_string(),
        model: generator.model().to_string(),
    })
}
