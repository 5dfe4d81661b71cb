//! Marquee Client - HTTP clients for upstream text generation APIs
//!
//! This crate provides HTTP clients for:
//!
//! - [`gemini`] - Google Gemini `generateContent`
//! - [`openai`] - OpenAI chat completions (and compatible endpoints)
//!
//! # Overview
//!
//! The clients handle authentication, request building, response parsing,
//! and error classification. Both implement
//! [`marquee_core::traits::TextGenerator`]; [`GenerationProviderEnum`]
//! selects one at runtime.

pub mod gemini;
pub mod openai;
pub mod provider;

// Re-export main client types
pub use gemini::GeminiClient;
pub use openai::OpenAIClient;
pub use provider::GenerationProviderEnum;
