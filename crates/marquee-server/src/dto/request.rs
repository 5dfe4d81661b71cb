//! Request DTOs for API endpoints.

use serde::Deserialize;
use utoipa::ToSchema;

/// Request body for `POST /recommend`.
///
/// A missing or `null` query is accepted by the deserializer and rejected
/// by validation with the same message as an empty one.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct RecommendRequest {
    /// Free-text movie preference (max: 2000 characters)
    #[schema(example = "feel-good sci-fi from the 80s")]
    #[serde(default)]
    pub query: Option<String>,
}
