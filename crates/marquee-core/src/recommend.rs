//! Recommendation service.
//!
//! [`RecommendationService`] turns a user's free-text movie preference into a
//! prompt, forwards it to a [`TextGenerator`], and returns the generated text
//! untouched. It holds no mutable state: cloning it is cheap and concurrent
//! calls never observe each other.

use std::time::Instant;

use crate::config::GenerationConfig;
use crate::prompt::PromptTemplate;
use crate::traits::TextGenerator;
use crate::AppError;

/// Message returned when the preference is missing or blank.
pub const MISSING_PREFERENCE_MESSAGE: &str = "Please provide a movie preference.";

/// Maximum accepted preference length, in characters.
pub const MAX_QUERY_LENGTH: usize = 2000;

/// Generates movie recommendations through an upstream text generator.
pub struct RecommendationService<G>
where
    G: TextGenerator,
{
    generator: G,
    template: PromptTemplate,
    config: GenerationConfig,
}

impl<G> Clone for RecommendationService<G>
where
    G: TextGenerator + Clone,
{
    fn clone(&self) -> Self {
        Self {
            generator: self.generator.clone(),
            template: self.template.clone(),
            config: self.config.clone(),
        }
    }
}

impl<G> RecommendationService<G>
where
    G: TextGenerator,
{
    /// Creates a service using the built-in movie prompt and default configuration.
    pub fn new(generator: G) -> Self {
        Self::with_config(generator, GenerationConfig::default())
    }

    /// Creates a service with a custom configuration.
    ///
    /// Only `config.timeout` is read here; model and temperature are applied
    /// by the generator itself.
    pub fn with_config(generator: G, config: GenerationConfig) -> Self {
        Self {
            generator,
            template: PromptTemplate::movie_recommendation(),
            config,
        }
    }

    /// Replaces the prompt template.
    pub fn with_template(mut self, template: PromptTemplate) -> Self {
        self.template = template;
        self
    }

    /// Returns the underlying generator.
    pub fn generator(&self) -> &G {
        &self.generator
    }

    /// Generates recommendations for a free-text preference.
    ///
    /// # Arguments
    ///
    /// * `query` - The user's stated preference. `None`, empty and
    ///   whitespace-only values are rejected.
    ///
    /// # Returns
    ///
    /// The generator's output, verbatim.
    ///
    /// # Errors
    ///
    /// - `AppError::InvalidInput` if the preference is missing, blank or too
    ///   long. No upstream call is made in that case.
    /// - `AppError::Timeout` if the generator does not answer within
    ///   `GenerationConfig::timeout`.
    /// - Any error returned by the generator.
    pub async fn recommend(&self, query: Option<&str>) -> Result<String, AppError> {
        let query = validate_query(query)?;
        let prompt = self.template.format(query);

        tracing::debug!(
            provider = self.generator.name(),
            model = self.generator.model(),
            query_chars = query.chars().count(),
            "Requesting recommendations"
        );

        let started = Instant::now();
        let result = tokio::time::timeout(self.config.timeout, self.generator.generate(&prompt))
            .await
            .map_err(|_| AppError::Timeout(self.config.timeout.as_secs()))
            .and_then(|inner| inner);

        match &result {
            Ok(text) => tracing::info!(
                provider = self.generator.name(),
                elapsed_ms = started.elapsed().as_millis() as u64,
                response_chars = text.chars().count(),
                "Recommendations generated"
            ),
            Err(e) => tracing::error!(
                provider = self.generator.name(),
                elapsed_ms = started.elapsed().as_millis() as u64,
                error = %e,
                "Recommendation generation failed"
            ),
        }

        result
    }
}

/// Checks that a preference is present, non-blank and within length limits.
///
/// Returns the preference as given (not trimmed), since it is substituted
/// into the prompt verbatim.
pub fn validate_query(query: Option<&str>) -> Result<&str, AppError> {
    let query = match query {
        Some(q) if !q.trim().is_empty() => q,
        _ => return Err(AppError::InvalidInput(MISSING_PREFERENCE_MESSAGE.to_string())),
    };

    if query.chars().count() > MAX_QUERY_LENGTH {
        return Err(AppError::InvalidInput(format!(
            "Movie preference exceeds maximum length of {} characters.",
            MAX_QUERY_LENGTH
        )));
    }

    Ok(query)
}
