//! Router configuration and route composition.

use std::time::Duration;

use axum::http::{HeaderValue, Method};
use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use marquee_core::TextGenerator;

use crate::handlers::{health, home, recommend};
use crate::openapi::ApiDoc;
use crate::state::AppState;

/// Creates the main application router with all routes and middleware.
///
/// # Arguments
///
/// * `state` - Shared state holding the recommendation service
/// * `cors_origins` - `"*"` or a comma-separated list of allowed origins
pub fn create_router<G>(state: AppState<G>, cors_origins: &str) -> Router
where
    G: TextGenerator + 'static,
{
    let api_routes = Router::new()
        .route("/", get(home::home))
        .route("/health", get(health::health_check::<G>))
        .route("/recommend", post(recommend::recommend::<G>));

    let cors_layer = build_cors_layer(cors_origins);

    api_routes
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Middleware layers (order matters: bottom layers run first)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer)
        .with_state(state)
}

/// Build CORS layer from configuration.
///
/// If `origins` is "*", allows any origin.
/// Otherwise, parses comma-separated origins.
fn build_cors_layer(origins: &str) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            axum::http::header::CONTENT_TYPE,
            axum::http::header::ACCEPT,
        ])
        .max_age(Duration::from_secs(3600));

    if origins.trim() == "*" {
        cors.allow_origin(tower_http::cors::Any)
    } else {
        let allowed = parse_origins(origins);
        if allowed.is_empty() {
            tracing::warn!(
                origins,
                "No valid CORS origins configured, cross-origin requests will be refused"
            );
        }
        cors.allow_origin(allowed)
    }
}

/// Parses a comma-separated origin list, skipping blank entries.
///
/// Entries without a scheme or with bytes not allowed in a header value
/// are dropped with a warning.
fn parse_origins(origins: &str) -> Vec<HeaderValue> {
    origins
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .filter_map(|origin| {
            let parsed = origin
                .contains("://")
                .then(|| HeaderValue::from_str(origin).ok())
                .flatten();
            if parsed.is_none() {
                tracing::warn!(origin, "Ignoring invalid CORS origin");
            }
            parsed
        })
        .collect()
}
