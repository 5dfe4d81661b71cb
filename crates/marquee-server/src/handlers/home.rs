//! Usage banner.

/// Banner returned by `GET /`.
pub const BANNER: &str =
    "Movie Recommendation AI is Running! Use /recommend to get movie suggestions.";

/// Usage banner.
///
/// Plain-text confirmation that the service is up.
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Usage banner", body = String, content_type = "text/plain"),
    ),
    tag = "system"
)]
pub async fn home() -> &'static str {
    BANNER
}
