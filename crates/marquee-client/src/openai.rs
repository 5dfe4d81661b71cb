//! OpenAI chat completions client.
//!
//! Works with any endpoint that speaks the `/v1/chat/completions` protocol
//! (OpenAI, Azure OpenAI deployments, local OpenAI-compatible servers).
//!
//! # Examples
//!
//! ```no_run
//! use marquee_client::OpenAIClient;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = OpenAIClient::new("sk-your-api-key")?;
//! let text = client.chat_completion("Recommend one heist movie.").await?;
//! println!("{}", text);
//! # Ok(())
//! # }
//! ```

use marquee_core::error::{AppError, UpstreamErrorDetails, UpstreamErrorKind};
use marquee_core::{GenerationConfig, GenerationProviderType};
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// Default chat completions endpoint.
pub const DEFAULT_OPENAI_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";

/// HTTP client for OpenAI's Chat Completions API.
#[derive(Clone)]
pub struct OpenAIClient {
    client: Client,
    api_key: String,
    model: String,
    temperature: f32,
    endpoint: String,
    timeout_secs: u64,
}

/// Request body for chat completions
#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

/// Response from chat completions
#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

/// Error response from OpenAI API
#[derive(Deserialize)]
struct OpenAIError {
    error: OpenAIErrorDetail,
}

#[derive(Deserialize)]
struct OpenAIErrorDetail {
    message: String,
    #[serde(rename = "type")]
    error_type: Option<String>,
    code: Option<String>,
}

/// Classify OpenAI API error based on status code and error code
fn classify_openai_error(status_code: u16, code: Option<&str>, message: &str) -> UpstreamErrorKind {
    match status_code {
        401 | 403 => UpstreamErrorKind::Authentication,
        429 => {
            if code == Some("insufficient_quota") || message.contains("quota") {
                UpstreamErrorKind::QuotaExceeded
            } else {
                UpstreamErrorKind::RateLimit
            }
        }
        500..=599 => UpstreamErrorKind::ServerError,
        _ => {
            if code == Some("content_filter") {
                UpstreamErrorKind::Blocked
            } else if code == Some("invalid_api_key") {
                UpstreamErrorKind::Authentication
            } else {
                UpstreamErrorKind::Unknown
            }
        }
    }
}

impl OpenAIClient {
    /// Creates a new OpenAI client with the specified API key.
    ///
    /// Uses the default chat model `gpt-4o-mini`.
    pub fn new(api_key: &str) -> Result<Self, AppError> {
        let config = GenerationConfig::for_provider(GenerationProviderType::OpenAI);
        Self::with_config(api_key, &config, None)
    }

    /// Creates a new OpenAI client with full configuration.
    ///
    /// # Arguments
    ///
    /// * `api_key` - OpenAI API key
    /// * `config` - Model, temperature and request timeout
    /// * `endpoint` - Custom API endpoint (for Azure OpenAI or proxies)
    pub fn with_config(
        api_key: &str,
        config: &GenerationConfig,
        endpoint: Option<&str>,
    ) -> Result<Self, AppError> {
        config.validate()?;

        let http_config = config.http_config();
        let client = Client::builder()
            .timeout(http_config.timeout)
            .build()
            .map_err(|e| AppError::ClientError(e.to_string()))?;

        Ok(Self {
            client,
            api_key: api_key.to_string(),
            model: config.model.clone(),
            temperature: config.temperature,
            endpoint: endpoint.unwrap_or(DEFAULT_OPENAI_ENDPOINT).to_string(),
            timeout_secs: http_config.timeout.as_secs(),
        })
    }

    /// Returns the model being used.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Sends the prompt as a single user message and returns the reply.
    pub async fn chat_completion(&self, prompt: &str) -> Result<String, AppError> {
        let request_body = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            temperature: self.temperature,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AppError::Timeout(self.timeout_secs)
                } else if e.is_connect() {
                    AppError::OpenAIError(UpstreamErrorDetails::new(
                        UpstreamErrorKind::NetworkError,
                        format!("Connection failed: {}", e),
                        0,
                    ))
                } else {
                    AppError::ClientError(e.to_string())
                }
            })?;

        let status = response.status();

        if !status.is_success() {
            let status_code = status.as_u16();
            let error_text = response.text().await.unwrap_or_default();

            let (message, code) = match serde_json::from_str::<OpenAIError>(&error_text) {
                Ok(err) => {
                    let code = err.error.code.or(err.error.error_type);
                    (err.error.message, code)
                }
                Err(_) => (format!("HTTP {}: {}", status_code, error_text), None),
            };

            let kind = classify_openai_error(status_code, code.as_deref(), &message);
            tracing::warn!(status = status_code, ?kind, "OpenAI request failed");

            return Err(AppError::OpenAIError(UpstreamErrorDetails::new(
                kind,
                message,
                status_code,
            )));
        }

        let body: ChatResponse = response.json().await.map_err(|e| {
            if e.is_timeout() {
                AppError::Timeout(self.timeout_secs)
            } else {
                AppError::ClientError(format!("Failed to parse response: {}", e))
            }
        })?;

        body.choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .filter(|text| !text.is_empty())
            .ok_or(AppError::EmptyResponse)
    }
}

// =============================================================================
// Trait Implementation: TextGenerator
// =============================================================================

impl marquee_core::traits::TextGenerator for OpenAIClient {
    fn name(&self) -> &'static str {
        "openai"
    }

    fn model(&self) -> &str {
        &self.model
    }

    async fn generate(&self, prompt: &str) -> Result<String, AppError> {
        self.chat_completion(prompt).await
    }
}
