//! Generation provider factory and dynamic dispatch.
//!
//! [`TextGenerator`] uses `impl Future` return types, which makes it not
//! object-safe, so runtime provider selection goes through
//! [`GenerationProviderEnum`] instead of `dyn TextGenerator`.
//!
//! # Usage
//!
//! ```no_run
//! use marquee_client::provider::GenerationProviderEnum;
//! use marquee_core::traits::TextGenerator;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let provider = GenerationProviderEnum::gemini("your-api-key")?;
//!
//! println!("Using {} ({})", provider.name(), provider.model());
//! let text = provider.generate("Recommend a documentary.").await?;
//! # Ok(())
//! # }
//! ```

use marquee_core::error::AppError;
use marquee_core::traits::TextGenerator;
use marquee_core::{GenerationConfig, GenerationProviderType};

use crate::{GeminiClient, OpenAIClient};

/// Unified generation provider that wraps concrete implementations.
#[derive(Clone)]
pub enum GenerationProviderEnum {
    /// Google Gemini `generateContent`.
    Gemini(GeminiClient),
    /// OpenAI chat completions.
    OpenAI(OpenAIClient),
}

impl GenerationProviderEnum {
    /// Creates a Gemini provider with the default model.
    pub fn gemini(api_key: &str) -> Result<Self, AppError> {
        Ok(Self::Gemini(GeminiClient::new(api_key)?))
    }

    /// Creates an OpenAI provider with the default model.
    pub fn openai(api_key: &str) -> Result<Self, AppError> {
        Ok(Self::OpenAI(OpenAIClient::new(api_key)?))
    }

    /// Creates a provider of the given type.
    ///
    /// # Arguments
    ///
    /// * `provider` - Which upstream API to call
    /// * `api_key` - Credential for that API
    /// * `config` - Model, temperature and timeout
    /// * `endpoint` - Optional base URL (Gemini) or full endpoint (OpenAI)
    ///
    /// # Errors
    ///
    /// Returns `AppError::ConfigError` if the API key is empty or the
    /// configuration is invalid.
    pub fn from_config(
        provider: GenerationProviderType,
        api_key: &str,
        config: &GenerationConfig,
        endpoint: Option<&str>,
    ) -> Result<Self, AppError> {
        if api_key.trim().is_empty() {
            return Err(AppError::ConfigError(format!(
                "API key for provider '{}' cannot be empty",
                provider
            )));
        }

        match provider {
            GenerationProviderType::Gemini => Ok(Self::Gemini(GeminiClient::with_config(
                api_key, config, endpoint,
            )?)),
            GenerationProviderType::OpenAI => Ok(Self::OpenAI(OpenAIClient::with_config(
                api_key, config, endpoint,
            )?)),
        }
    }
}

impl TextGenerator for GenerationProviderEnum {
    fn name(&self) -> &'static str {
        match self {
            Self::Gemini(c) => c.name(),
            Self::OpenAI(c) => c.name(),
        }
    }

    fn model(&self) -> &str {
        match self {
            Self::Gemini(c) => TextGenerator::model(c),
            Self::OpenAI(c) => TextGenerator::model(c),
        }
    }

    async fn generate(&self, prompt: &str) -> Result<String, AppError> {
        match self {
            Self::Gemini(c) => c.generate(prompt).await,
            Self::OpenAI(c) => c.generate(prompt).await,
        }
    }
}
