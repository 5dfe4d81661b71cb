use thiserror::Error;

/// Classification of failures reported by an upstream generation API.
///
/// Both the Gemini and OpenAI clients map HTTP status codes and error
/// messages onto this shared set of categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpstreamErrorKind {
    /// Authentication failure (401, invalid API key)
    Authentication,
    /// Rate limit exceeded (429)
    RateLimit,
    /// Quota exceeded (insufficient_quota)
    QuotaExceeded,
    /// Server error (5xx)
    ServerError,
    /// Network/connection error
    NetworkError,
    /// The provider refused to answer the prompt (safety filters)
    Blocked,
    /// Unknown or unclassified error
    Unknown,
}

/// Structured error details from an upstream generation API.
#[derive(Debug, Clone)]
pub struct UpstreamErrorDetails {
    /// The specific error category
    pub kind: UpstreamErrorKind,
    /// Human-readable error message from the API
    pub message: String,
    /// HTTP status code (0 when no response was received)
    pub status_code: u16,
}

impl UpstreamErrorDetails {
    pub fn new(kind: UpstreamErrorKind, message: impl Into<String>, status_code: u16) -> Self {
        Self {
            kind,
            message: message.into(),
            status_code,
        }
    }
}

impl std::fmt::Display for UpstreamErrorDetails {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "HTTP {}: {}", self.status_code, self.message)
    }
}

/// Application-wide error types.
///
/// Library code returns `Result<_, AppError>`. The server crate maps each
/// variant onto an HTTP status; only [`AppError::InvalidInput`] is caused by
/// the caller, everything else is an upstream or configuration failure.
///
/// # Examples
///
/// ```
/// use marquee_core::error::AppError;
///
/// let err = AppError::InvalidInput("Please provide a movie preference.".to_string());
/// assert!(!err.is_upstream());
/// assert_eq!(err.to_string(), "Please provide a movie preference.");
/// ```
#[derive(Error, Debug)]
pub enum AppError {
    /// The request did not carry a usable preference.
    ///
    /// The message is meant for the caller and is returned as-is.
    #[error("{0}")]
    InvalidInput(String),

    /// HTTP client request failed.
    ///
    /// Covers failures to build the client or send a request that are not
    /// timeouts or connection errors.
    #[error("API Client error: {0}")]
    ClientError(String),

    /// Gemini API call failed.
    #[error("Gemini error: {0}")]
    GeminiError(UpstreamErrorDetails),

    /// OpenAI API call failed.
    #[error("OpenAI error: {0}")]
    OpenAIError(UpstreamErrorDetails),

    /// JSON serialization or deserialization failed.
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// API response contained no generated text.
    #[error("Empty response from API")]
    EmptyResponse,

    /// Network or connection error.
    #[error("Network error: {0}")]
    NetworkError(String),

    /// Request timeout.
    #[error("Request timed out after {0} seconds")]
    Timeout(u64),

    /// Invalid configuration (bad template, missing credential, out of range value).
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl AppError {
    /// Returns true if this error was caused by the upstream generation
    /// service (or the path to it) rather than by the caller or configuration.
    pub fn is_upstream(&self) -> bool {
        match self {
            AppError::ClientError(_)
            | AppError::GeminiError(_)
            | AppError::OpenAIError(_)
            | AppError::SerializationError(_)
            | AppError::EmptyResponse
            | AppError::NetworkError(_)
            | AppError::Timeout(_) => true,
            AppError::InvalidInput(_) | AppError::ConfigError(_) => false,
        }
    }

    /// Returns the upstream error classification, if any.
    ///
    /// Network failures and timeouts are reported as
    /// [`UpstreamErrorKind::NetworkError`] regardless of provider.
    pub fn upstream_kind(&self) -> Option<UpstreamErrorKind> {
        match self {
            AppError::GeminiError(details) | AppError::OpenAIError(details) => Some(details.kind),
            AppError::NetworkError(_) | AppError::Timeout(_) => {
                Some(UpstreamErrorKind::NetworkError)
            }
            AppError::ClientError(_) | AppError::SerializationError(_) | AppError::EmptyResponse => {
                Some(UpstreamErrorKind::Unknown)
            }
            AppError::InvalidInput(_) | AppError::ConfigError(_) => None,
        }
    }
}
