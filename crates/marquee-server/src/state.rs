use marquee_client::GenerationProviderEnum;
use marquee_core::{RecommendationService, TextGenerator};

/// Shared application state for all handlers.
///
/// Generic over the generator so the router can be driven by stub
/// generators in tests. Everything inside is immutable and cheap to clone.
#[derive(Clone)]
pub struct AppState<G = GenerationProviderEnum>
where
    G: TextGenerator,
{
    /// Recommendation service wrapping the upstream generator
    pub recommendation_service: RecommendationService<G>,
}

impl<G> AppState<G>
where
    G: TextGenerator,
{
    /// Creates a new application state around an existing service.
    pub fn new(recommendation_service: RecommendationService<G>) -> Self {
        Self {
            recommendation_service,
        }
    }
}
