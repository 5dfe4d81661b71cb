//! Test utilities: stub generators and request helpers.

use std::sync::{Arc, Mutex};

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use serde_json::Value;
use tower::ServiceExt;

use marquee_core::traits::TextGenerator;
use marquee_core::{AppError, RecommendationService, UpstreamErrorDetails, UpstreamErrorKind};
use marquee_server::{AppState, create_router};

/// What the stub generator should do on every call.
#[derive(Clone)]
pub enum StubBehavior {
    /// Answer with the prompt itself.
    Echo,
    /// Fail with an upstream error whose message contains a fake secret.
    Fail,
}

/// Generator stub that records every prompt it receives.
#[derive(Clone)]
pub struct StubGenerator {
    behavior: StubBehavior,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl StubGenerator {
    pub fn echo() -> Self {
        Self {
            behavior: StubBehavior::Echo,
            prompts: Arc::default(),
        }
    }

    pub fn failing() -> Self {
        Self {
            behavior: StubBehavior::Fail,
            prompts: Arc::default(),
        }
    }

    pub fn call_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

/// Message of the error returned by a failing stub.
pub const LEAKY_UPSTREAM_MESSAGE: &str = "backend 10.0.0.7 rejected key AIza-super-secret";

impl TextGenerator for StubGenerator {
    fn name(&self) -> &'static str {
        "stub"
    }

    fn model(&self) -> &str {
        "stub-model"
    }

    async fn generate(&self, prompt: &str) -> Result<String, AppError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        match self.behavior {
            StubBehavior::Echo => Ok(prompt.to_string()),
            StubBehavior::Fail => Err(AppError::GeminiError(UpstreamErrorDetails::new(
                UpstreamErrorKind::ServerError,
                LEAKY_UPSTREAM_MESSAGE,
                500,
            ))),
        }
    }
}

/// Builds the application router around a stub generator.
pub fn app(generator: StubGenerator) -> Router {
    app_with_origins(generator, "*")
}

/// Builds the application router with an explicit CORS origin list.
pub fn app_with_origins(generator: StubGenerator, cors_origins: &str) -> Router {
    let state = AppState::new(RecommendationService::new(generator));
    create_router(state, cors_origins)
}

/// Sends `POST /recommend` with a raw body and JSON content type.
pub async fn post_recommend(app: Router, body: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri("/recommend")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    send_json(app, request).await
}

/// Sends a request and parses the response body as JSON.
pub async fn send_json(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let (status, bytes) = send(app, request).await;
    let json = serde_json::from_slice(&bytes).unwrap_or_else(|e| {
        panic!(
            "response is not JSON ({e}): {}",
            String::from_utf8_lossy(&bytes)
        )
    });
    (status, json)
}

/// Sends a request and returns the status and raw body.
pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, bytes.to_vec())
}
