//! Prompt templates with a single `{input}` substitution slot.

use crate::error::AppError;

/// Placeholder replaced by the user's preference.
pub const INPUT_SLOT: &str = "{input}";

/// Prompt sent to the generation service for every recommendation request.
pub const MOVIE_RECOMMENDATION_TEMPLATE: &str = "You are a global movie recommendation assistant.
Based on the user's preferences, suggest movies from different
countries, languages, and genres.

User's Movie Preferences:
{input}

Instructions:
1. Recommend **3 movies** based on genre, mood, and region.
2. Include **Title, Year, Country, Genre, and Short Plot Summary**.
3. Suggest **where to watch the movies (Netflix, Prime, Disney+, etc.)**.

Movies:
";

/// A natural-language prompt with one substitution slot.
///
/// # Examples
///
/// ```
/// use marquee_core::prompt::PromptTemplate;
///
/// let template = PromptTemplate::from_template("Suggest films like: {input}").unwrap();
/// assert_eq!(template.format("Arrival"), "Suggest films like: Arrival");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptTemplate {
    template: String,
}

impl PromptTemplate {
    /// Creates a template, checking that it contains the `{input}` slot.
    ///
    /// # Errors
    ///
    /// Returns `AppError::ConfigError` if the slot is missing.
    pub fn from_template(template: impl Into<String>) -> Result<Self, AppError> {
        let template = template.into();
        if !template.contains(INPUT_SLOT) {
            return Err(AppError::ConfigError(format!(
                "Prompt template must contain the {} placeholder",
                INPUT_SLOT
            )));
        }
        Ok(Self { template })
    }

    /// The built-in movie recommendation prompt.
    pub fn movie_recommendation() -> Self {
        Self {
            template: MOVIE_RECOMMENDATION_TEMPLATE.to_string(),
        }
    }

    /// Substitutes `input` into every slot. The input is inserted verbatim.
    pub fn format(&self, input: &str) -> String {
        self.template.replace(INPUT_SLOT, input)
    }

    /// Returns the raw template text.
    pub fn as_str(&self) -> &str {
        &self.template
    }
}

impl Default for PromptTemplate {
    fn default() -> Self {
        Self::movie_recommendation()
    }
}
