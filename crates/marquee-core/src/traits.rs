//! Trait definitions for external dependencies.
//!
//! The upstream text generation API is abstracted behind [`TextGenerator`]
//! so the recommendation service and the HTTP layer can be exercised with
//! in-memory stubs.
//!
//! # Example
//!
//! ```
//! use marquee_core::traits::TextGenerator;
//! use marquee_core::AppError;
//!
//! async fn summarize<G: TextGenerator>(generator: &G, text: &str) -> Result<String, AppError> {
//!     generator.generate(&format!("Summarize: {}", text)).await
//! }
//! ```

use std::future::Future;

use crate::AppError;

/// Provider for free-form text completion.
///
/// Implementations send a prompt to a hosted model and return the generated
/// text unmodified.
pub trait TextGenerator: Send + Sync + Clone {
    /// Returns the provider name (e.g., "gemini", "openai").
    fn name(&self) -> &'static str;

    /// Returns the model identifier requests are sent to.
    fn model(&self) -> &str;

    /// Generates a completion for the given prompt.
    ///
    /// # Arguments
    ///
    /// * `prompt` - The fully formatted prompt, sent verbatim
    ///
    /// # Returns
    ///
    /// The generated text, unparsed.
    fn generate(&self, prompt: &str) -> impl Future<Output = Result<String, AppError>> + Send;
}
