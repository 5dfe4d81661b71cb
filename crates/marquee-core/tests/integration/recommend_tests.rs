//! Integration tests for RecommendationService.

use std::time::Duration;

use crate::integration::common::{EchoGenerator, FailingGenerator, SlowGenerator};
use marquee_core::{
    AppError, GenerationConfig, MISSING_PREFERENCE_MESSAGE, PromptTemplate,
    RecommendationService, UpstreamErrorKind,
};

/// A valid preference produces exactly one upstream call whose prompt is the
/// template with the preference substituted, and the output is returned
/// verbatim.
#[tokio::test]
async fn test_recommend_forwards_formatted_prompt_once() {
    let generator = EchoGenerator::new();
    let service = RecommendationService::new(generator.clone());

    let movies = service.recommend(Some("feel-good sci-fi")).await.unwrap();

    assert_eq!(generator.call_count(), 1, "Should call upstream exactly once");
    let expected_prompt = PromptTemplate::movie_recommendation().format("feel-good sci-fi");
    assert_eq!(generator.prompts(), vec![expected_prompt.clone()]);
    assert_eq!(movies, expected_prompt, "Output should be returned verbatim");
    assert!(movies.contains("feel-good sci-fi"));
}

#[tokio::test]
async fn test_recommend_rejects_missing_query_without_upstream_call() {
    let generator = EchoGenerator::new();
    let service = RecommendationService::new(generator.clone());

    for query in [None, Some(""), Some("   ")] {
        let err = service.recommend(query).await.unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
        assert_eq!(err.to_string(), MISSING_PREFERENCE_MESSAGE);
    }

    assert_eq!(generator.call_count(), 0, "Should never reach upstream");
}

#[tokio::test]
async fn test_recommend_rejects_oversized_query_without_upstream_call() {
    let generator = EchoGenerator::new();
    let service = RecommendationService::new(generator.clone());

    let query = "x".repeat(marquee_core::MAX_QUERY_LENGTH + 1);
    let err = service.recommend(Some(&query)).await.unwrap_err();

    assert!(matches!(err, AppError::InvalidInput(_)));
    assert_eq!(generator.call_count(), 0);
}

#[tokio::test]
async fn test_recommend_propagates_upstream_failure() {
    let generator = FailingGenerator::new();
    let service = RecommendationService::new(generator.clone());

    let err = service.recommend(Some("quiet Korean dramas")).await.unwrap_err();

    assert!(err.is_upstream());
    assert_eq!(err.upstream_kind(), Some(UpstreamErrorKind::ServerError));
    assert_eq!(generator.call_count(), 1);

    // A failed call leaves the service usable.
    let err = service.recommend(Some("quiet Korean dramas")).await.unwrap_err();
    assert!(err.is_upstream());
    assert_eq!(generator.call_count(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_recommend_times_out_slow_upstream() {
    let config = GenerationConfig::default().with_timeout(Duration::from_secs(5));
    let service =
        RecommendationService::with_config(SlowGenerator::new(Duration::from_secs(60)), config);

    let err = service.recommend(Some("anything")).await.unwrap_err();

    assert!(matches!(err, AppError::Timeout(5)));
}

#[tokio::test(start_paused = true)]
async fn test_recommend_within_timeout_succeeds() {
    let config = GenerationConfig::default().with_timeout(Duration::from_secs(5));
    let service =
        RecommendationService::with_config(SlowGenerator::new(Duration::from_secs(1)), config);

    let movies = service.recommend(Some("anything")).await.unwrap();

    assert_eq!(movies, "eventually");
}

/// Identical input against a deterministic generator yields identical output.
#[tokio::test]
async fn test_recommend_is_idempotent() {
    let generator = EchoGenerator::new();
    let service = RecommendationService::new(generator.clone());

    let first = service.recommend(Some("90s heist movies")).await.unwrap();
    let second = service.recommend(Some("90s heist movies")).await.unwrap();

    assert_eq!(first, second);
    assert_eq!(generator.call_count(), 2);
}

#[tokio::test]
async fn test_recommend_with_custom_template() {
    let generator = EchoGenerator::new();
    let template = PromptTemplate::from_template("Films like {input}, please.").unwrap();
    let service = RecommendationService::new(generator.clone()).with_template(template);

    let movies = service.recommend(Some("Paddington 2")).await.unwrap();

    assert_eq!(movies, "Films like Paddington 2, please.");
}

#[tokio::test]
async fn test_cloned_services_share_nothing_mutable() {
    let generator = EchoGenerator::new();
    let service = RecommendationService::new(generator.clone());
    let cloned = service.clone();

    let (a, b) = tokio::join!(
        service.recommend(Some("silent films")),
        cloned.recommend(Some("anime"))
    );

    assert!(a.unwrap().contains("silent films"));
    assert!(b.unwrap().contains("anime"));
    assert_eq!(generator.call_count(), 2);
}
