//! OpenAIClient against a stub chat completions endpoint.

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{Value, json};

use crate::integration::common::{RecordedRequest, RequestLog, spawn_stub};
use marquee_client::GenerationProviderEnum;
use marquee_core::traits::TextGenerator;
use marquee_core::{AppError, GenerationConfig, GenerationProviderType, UpstreamErrorKind};

async fn echo_handler(
    State(log): State<RequestLog>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Json<Value> {
    let prompt = body["messages"][0]["content"]
        .as_str()
        .unwrap_or_default()
        .to_string();
    log.push(RecordedRequest {
        path: "/v1/chat/completions".to_string(),
        headers,
        body,
    });

    Json(json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": prompt.to_uppercase()},
            "finish_reason": "stop"
        }]
    }))
}

fn provider_for(endpoint: &str) -> GenerationProviderEnum {
    let config = GenerationConfig::for_provider(GenerationProviderType::OpenAI);
    GenerationProviderEnum::from_config(
        GenerationProviderType::OpenAI,
        "sk-test",
        &config,
        Some(endpoint),
    )
    .unwrap()
}

#[tokio::test]
async fn test_chat_completion_round_trip() {
    let log = RequestLog::default();
    let router = Router::new()
        .route("/v1/chat/completions", post(echo_handler))
        .with_state(log.clone());
    let base_url = spawn_stub(router).await;
    let provider = provider_for(&format!("{}/v1/chat/completions", base_url));

    let text = provider.generate("quiet noir").await.unwrap();
    assert_eq!(text, "QUIET NOIR");

    let requests = log.all();
    assert_eq!(requests.len(), 1);
    let request = &requests[0];
    assert_eq!(
        request.headers.get("authorization").unwrap(),
        "Bearer sk-test"
    );
    assert_eq!(request.body["model"], "gpt-4o-mini");
    assert_eq!(request.body["messages"][0]["role"], "user");
}

#[tokio::test]
async fn test_chat_completion_quota_error() {
    let router = Router::new().route(
        "/v1/chat/completions",
        post(|| async {
            (
                StatusCode::TOO_MANY_REQUESTS,
                Json(json!({
                    "error": {
                        "message": "You exceeded your current quota",
                        "type": "insufficient_quota",
                        "code": "insufficient_quota"
                    }
                })),
            )
        }),
    );
    let base_url = spawn_stub(router).await;
    let provider = provider_for(&format!("{}/v1/chat/completions", base_url));

    match provider.generate("anything").await.unwrap_err() {
        AppError::OpenAIError(details) => {
            assert_eq!(details.kind, UpstreamErrorKind::QuotaExceeded);
            assert_eq!(details.status_code, 429);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_chat_completion_without_choices() {
    let router = Router::new().route(
        "/v1/chat/completions",
        post(|| async { Json(json!({"choices": []})) }),
    );
    let base_url = spawn_stub(router).await;
    let provider = provider_for(&format!("{}/v1/chat/completions", base_url));

    let err = provider.generate("anything").await.unwrap_err();
    assert!(matches!(err, AppError::EmptyResponse));
}

#[tokio::test]
async fn test_chat_completion_connection_refused() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let provider = provider_for(&format!("http://{}/v1/chat/completions", addr));

    let err = provider.generate("anything").await.unwrap_err();
    assert!(matches!(err, AppError::OpenAIError(_)), "got {err:?}");
    assert_eq!(err.upstream_kind(), Some(UpstreamErrorKind::NetworkError));
}
