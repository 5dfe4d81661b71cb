//! Google Gemini text generation client.
//!
//! Talks to the `generateContent` endpoint of the Generative Language API.
//! The base URL is configurable so the client can be pointed at a proxy or a
//! local stub.

use marquee_core::error::{AppError, UpstreamErrorDetails, UpstreamErrorKind};
use marquee_core::GenerationConfig;
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// Production endpoint of the Generative Language API.
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// HTTP client for Google's Gemini `generateContent` API.
///
/// # Security
///
/// The API key is transmitted via the `x-goog-api-key` HTTP header,
/// not in the URL, so it never shows up in access logs.
///
/// # Examples
///
/// ```no_run
/// use marquee_client::GeminiClient;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = GeminiClient::new("your-api-key")?;
/// let text = client.generate_content("Recommend one heist movie.").await?;
/// println!("{}", text);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    model: String,
    temperature: f32,
    base_url: String,
    timeout_secs: u64,
}

/// Request body for `generateContent`
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    generation_config: GenerationParams,
}

#[derive(Serialize)]
struct Content<'a> {
    role: &'a str,
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Serialize)]
struct GenerationParams {
    temperature: f32,
}

/// Response from `generateContent`
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

/// Error response from Gemini API
#[derive(Deserialize)]
struct GeminiError {
    error: GeminiErrorDetail,
}

#[derive(Deserialize)]
struct GeminiErrorDetail {
    message: String,
    #[allow(dead_code)]
    status: Option<String>,
}

/// Classify Gemini API error based on status code and message
fn classify_gemini_error(status_code: u16, message: &str) -> UpstreamErrorKind {
    match status_code {
        401 | 403 => UpstreamErrorKind::Authentication,
        429 => {
            if message.contains("insufficient_quota") || message.contains("quota") {
                UpstreamErrorKind::QuotaExceeded
            } else {
                UpstreamErrorKind::RateLimit
            }
        }
        500..=599 => UpstreamErrorKind::ServerError,
        _ => {
            if message.contains("API key") || message.contains("Unauthorized") {
                UpstreamErrorKind::Authentication
            } else if message.contains("rate") {
                UpstreamErrorKind::RateLimit
            } else if message.contains("quota") {
                UpstreamErrorKind::QuotaExceeded
            } else {
                UpstreamErrorKind::Unknown
            }
        }
    }
}

/// Extracts the generated text from a parsed response.
///
/// All text parts of the first candidate are concatenated. A response without
/// candidates is either a blocked prompt or an empty answer.
fn extract_text(response: GenerateContentResponse) -> Result<String, AppError> {
    let Some(candidate) = response.candidates.into_iter().next() else {
        return match response.prompt_feedback.and_then(|f| f.block_reason) {
            Some(reason) => Err(AppError::GeminiError(UpstreamErrorDetails::new(
                UpstreamErrorKind::Blocked,
                format!("Prompt blocked: {}", reason),
                200,
            ))),
            None => Err(AppError::EmptyResponse),
        };
    };

    let text: String = candidate
        .content
        .map(|c| c.parts)
        .unwrap_or_default()
        .into_iter()
        .filter_map(|p| p.text)
        .collect();

    if text.is_empty() {
        return Err(AppError::EmptyResponse);
    }
    Ok(text)
}

impl GeminiClient {
    /// Creates a new Gemini client with the specified API key and default
    /// model, temperature and timeout.
    pub fn new(api_key: &str) -> Result<Self, AppError> {
        Self::with_config(api_key, &GenerationConfig::default(), None)
    }

    /// Creates a new Gemini client with full configuration.
    ///
    /// # Arguments
    ///
    /// * `api_key` - Google API key
    /// * `config` - Model, temperature and request timeout
    /// * `base_url` - Custom API base URL (proxies, tests); defaults to
    ///   [`DEFAULT_GEMINI_BASE_URL`]
    pub fn with_config(
        api_key: &str,
        config: &GenerationConfig,
        base_url: Option<&str>,
    ) -> Result<Self, AppError> {
        config.validate()?;

        let http_config = config.http_config();
        let client = Client::builder()
            .timeout(http_config.timeout)
            .build()
            .map_err(|e| AppError::ClientError(e.to_string()))?;

        let model = config
            .model
            .strip_prefix("models/")
            .unwrap_or(&config.model)
            .to_string();

        Ok(Self {
            client,
            api_key: api_key.to_string(),
            model,
            temperature: config.temperature,
            base_url: base_url
                .unwrap_or(DEFAULT_GEMINI_BASE_URL)
                .trim_end_matches('/')
                .to_string(),
            timeout_secs: http_config.timeout.as_secs(),
        })
    }

    /// Returns the model being used.
    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }

    /// Generates text for a single-turn prompt.
    ///
    /// # Arguments
    ///
    /// * `prompt` - The prompt, sent verbatim as one user turn
    ///
    /// # Errors
    ///
    /// - `AppError::Timeout` if the request exceeds the configured timeout.
    /// - `AppError::GeminiError` for non-2xx responses, connection failures
    ///   and blocked prompts.
    /// - `AppError::EmptyResponse` if the model returned no text.
    /// - `AppError::ClientError` if the request or response body is unusable.
    pub async fn generate_content(&self, prompt: &str) -> Result<String, AppError> {
        let request_body = GenerateContentRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![Part { text: prompt }],
            }],
            generation_config: GenerationParams {
                temperature: self.temperature,
            },
        };

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AppError::Timeout(self.timeout_secs)
                } else if e.is_connect() {
                    AppError::GeminiError(UpstreamErrorDetails::new(
                        UpstreamErrorKind::NetworkError,
                        format!("Connection failed: {}", e),
                        0, // No HTTP status for connection failures
                    ))
                } else {
                    AppError::ClientError(e.to_string())
                }
            })?;

        let status = response.status();

        if !status.is_success() {
            let status_code = status.as_u16();
            let error_text = response.text().await.unwrap_or_default();

            let message = if let Ok(gemini_error) = serde_json::from_str::<GeminiError>(&error_text)
            {
                gemini_error.error.message
            } else {
                format!("HTTP {}: {}", status_code, error_text)
            };

            let kind = classify_gemini_error(status_code, &message);
            tracing::warn!(status = status_code, ?kind, "Gemini request failed");

            return Err(AppError::GeminiError(UpstreamErrorDetails::new(
                kind,
                message,
                status_code,
            )));
        }

        let body: GenerateContentResponse = response.json().await.map_err(|e| {
            if e.is_timeout() {
                AppError::Timeout(self.timeout_secs)
            } else {
                AppError::ClientError(format!("Failed to parse response: {}", e))
            }
        })?;

        extract_text(body)
    }
}

// =============================================================================
// Trait Implementation: TextGenerator
// =============================================================================

impl marquee_core::traits::TextGenerator for GeminiClient {
    fn name(&self) -> &'static str {
        "gemini"
    }

    fn model(&self) -> &str {
        &self.model
    }

    async fn generate(&self, prompt: &str) -> Result<String, AppError> {
        self.generate_content(prompt).await
    }
}
