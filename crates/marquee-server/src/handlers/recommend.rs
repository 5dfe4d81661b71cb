//! Recommendation endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};

use marquee_core::TextGenerator;

use crate::dto::{RecommendRequest, RecommendResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// Recommend movies for a free-text preference.
///
/// The preference is substituted into a fixed prompt and sent to the
/// upstream model once. The model's answer is returned verbatim.
#[utoipa::path(
    post,
    path = "/recommend",
    request_body = RecommendRequest,
    responses(
        (status = 200, description = "Generated recommendations", body = RecommendResponse),
        (status = 400, description = "Missing, empty or malformed preference", body = crate::error::ErrorResponse),
        (status = 500, description = "Upstream generation failed", body = crate::error::ErrorResponse),
    ),
    tag = "recommendations"
)]
pub async fn recommend<G>(
    State(state): State<AppState<G>>,
    payload: Result<Json<RecommendRequest>, JsonRejection>,
) -> Result<Json<RecommendResponse>, ApiError>
where
    G: TextGenerator + 'static,
{
    let Json(request) = payload?;

    let movies = state
        .recommendation_service
        .recommend(request.query.as_deref())
        .await?;

    Ok(Json(RecommendResponse { movies }))
}
