use std::time::Duration;

use clap::Parser;

use marquee_core::{AppError, GenerationConfig, GenerationProviderType};

/// Server configuration parsed from command line arguments and environment variables
#[derive(Parser, Debug, Clone)]
#[command(name = "marquee-server")]
#[command(author, version, about = "REST API server for LLM-backed movie recommendations")]
#[command(after_help = "Generation providers:
  GENERATION_PROVIDER=gemini (default) - Google Gemini, needs GOOGLE_API_KEY
  GENERATION_PROVIDER=openai           - OpenAI chat completions, needs OPENAI_API_KEY")]
pub struct ServerConfig {
    /// Generation provider to use: gemini (default) or openai
    #[arg(long, env = "GENERATION_PROVIDER", default_value = "gemini")]
    pub provider: String,

    /// Google API key (required when provider=gemini)
    #[arg(long, env = "GOOGLE_API_KEY", hide_env_values = true)]
    pub google_api_key: Option<String>,

    /// Gemini model identifier
    #[arg(long, env = "GEMINI_MODEL", default_value = "gemini-1.5-flash")]
    pub gemini_model: String,

    /// Custom Gemini API base URL (proxies, local testing)
    #[arg(long, env = "GEMINI_BASE_URL")]
    pub gemini_base_url: Option<String>,

    /// OpenAI API key (required when provider=openai)
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub openai_api_key: Option<String>,

    /// OpenAI chat model identifier
    #[arg(long, env = "OPENAI_MODEL", default_value = "gpt-4o-mini")]
    pub openai_model: String,

    /// Custom chat completions endpoint (Azure OpenAI, compatible servers)
    #[arg(long, env = "OPENAI_ENDPOINT")]
    pub openai_endpoint: Option<String>,

    /// Sampling temperature (0.0 - 2.0)
    #[arg(long, env = "TEMPERATURE", default_value = "0.7")]
    pub temperature: f32,

    /// Timeout for a single upstream generation call, in seconds
    #[arg(long, env = "UPSTREAM_TIMEOUT_SECS", default_value = "30")]
    pub upstream_timeout_secs: u64,

    /// Server port to listen on
    #[arg(short, long, env = "PORT", default_value = "10000")]
    pub port: u16,

    /// Server host to bind to
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Allowed CORS origins, comma-separated, or "*" for any
    #[arg(long, env = "CORS_ORIGINS", default_value = "*")]
    pub cors_origins: String,
}

/// Everything needed to build the upstream generation client.
#[derive(Debug, Clone)]
pub struct ProviderSettings {
    pub provider: GenerationProviderType,
    pub api_key: String,
    pub endpoint: Option<String>,
    pub generation: GenerationConfig,
}

impl ServerConfig {
    /// Resolves the selected provider, its credential and generation settings.
    ///
    /// # Errors
    ///
    /// Returns `AppError::ConfigError` for an unknown provider, a missing
    /// credential for the selected provider, or invalid generation values.
    pub fn provider_settings(&self) -> Result<ProviderSettings, AppError> {
        let provider: GenerationProviderType = self.provider.parse()?;

        let (api_key, model, endpoint, env_name) = match provider {
            GenerationProviderType::Gemini => (
                self.google_api_key.as_deref(),
                &self.gemini_model,
                self.gemini_base_url.clone(),
                "GOOGLE_API_KEY",
            ),
            GenerationProviderType::OpenAI => (
                self.openai_api_key.as_deref(),
                &self.openai_model,
                self.openai_endpoint.clone(),
                "OPENAI_API_KEY",
            ),
        };

        let api_key = api_key
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| {
                AppError::ConfigError(format!(
                    "{} is required when GENERATION_PROVIDER={}",
                    env_name, provider
                ))
            })?
            .to_string();

        let generation = GenerationConfig::for_provider(provider)
            .with_model(model.clone())
            .with_temperature(self.temperature)
            .with_timeout(Duration::from_secs(self.upstream_timeout_secs));
        generation.validate()?;

        Ok(ProviderSettings {
            provider,
            api_key,
            endpoint,
            generation,
        })
    }
}
