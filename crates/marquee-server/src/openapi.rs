//! OpenAPI documentation configuration.

use utoipa::OpenApi;

use crate::dto::{HealthResponse, RecommendRequest, RecommendResponse};
use crate::error::ErrorResponse;
use crate::handlers::{health, home, recommend};

/// OpenAPI documentation for the Marquee API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Marquee API",
        version = "0.1.0",
        description = "Movie recommendations from a hosted language model.

A free-text preference is substituted into a fixed prompt and forwarded to
the configured generation provider (Google Gemini or OpenAI). The model's
answer is returned as-is.

## Quick Start

1. Check server health: `GET /health`
2. Ask for movies: `POST /recommend` with `{\"query\": \"feel-good sci-fi\"}`
",
        license(
            name = "Apache-2.0",
            url = "https://www.apache.org/licenses/LICENSE-2.0"
        )
    ),
    servers(
        (url = "http://localhost:10000", description = "Local development server")
    ),
    paths(
        home::home,
        health::health_check,
        recommend::recommend,
    ),
    components(
        schemas(
            // Request types
            RecommendRequest,
            // Response types
            RecommendResponse,
            HealthResponse,
            ErrorResponse,
        )
    ),
    tags(
        (name = "system", description = "Service status"),
        (name = "recommendations", description = "LLM-backed movie recommendations"),
    )
)]
pub struct ApiDoc;
