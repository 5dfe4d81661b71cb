//! Configuration types for Marquee components.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::error::AppError;

// =============================================================================
// Generation Provider Configuration
// =============================================================================

/// Default Gemini model used when `GEMINI_MODEL` is not set.
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";

/// Default OpenAI chat model.
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";

/// Default sampling temperature.
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Default timeout for a single upstream generation call, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Text generation provider type.
///
/// Determines which upstream API receives the formatted prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationProviderType {
    /// Google Gemini `generateContent`.
    #[default]
    Gemini,
    /// OpenAI (or compatible) chat completions.
    OpenAI,
}

impl GenerationProviderType {
    /// Returns the default model name for this provider.
    pub fn default_model(&self) -> &'static str {
        match self {
            Self::Gemini => DEFAULT_GEMINI_MODEL,
            Self::OpenAI => DEFAULT_OPENAI_MODEL,
        }
    }
}

impl fmt::Display for GenerationProviderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gemini => write!(f, "gemini"),
            Self::OpenAI => write!(f, "openai"),
        }
    }
}

impl FromStr for GenerationProviderType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "gemini" => Ok(Self::Gemini),
            "openai" => Ok(Self::OpenAI),
            _ => Err(AppError::ConfigError(format!(
                "Unknown generation provider: '{}'. Valid options: gemini, openai",
                s
            ))),
        }
    }
}

/// HTTP client configuration for upstream API calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpConfig {
    pub timeout: Duration,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// Settings for a single generation call.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationConfig {
    /// Model identifier passed to the provider.
    pub model: String,
    /// Sampling temperature, `0.0..=2.0`.
    pub temperature: f32,
    /// Upper bound on one upstream call, including response parsing.
    pub timeout: Duration,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_GEMINI_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl GenerationConfig {
    /// Creates a config for the given provider's default model.
    pub fn for_provider(provider: GenerationProviderType) -> Self {
        Self {
            model: provider.default_model().to_string(),
            ..Default::default()
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// HTTP client settings derived from this config.
    pub fn http_config(&self) -> HttpConfig {
        HttpConfig {
            timeout: self.timeout,
        }
    }

    /// Checks that all values are usable.
    ///
    /// # Errors
    ///
    /// Returns `AppError::ConfigError` for an empty model name, a
    /// temperature outside `0.0..=2.0`, or a zero timeout.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.model.trim().is_empty() {
            return Err(AppError::ConfigError(
                "Model identifier cannot be empty".to_string(),
            ));
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(AppError::ConfigError(format!(
                "Temperature must be between 0.0 and 2.0, got {}",
                self.temperature
            )));
        }
        if self.timeout.is_zero() {
            return Err(AppError::ConfigError(
                "Upstream timeout must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
