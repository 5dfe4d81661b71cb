//! Marquee Core - Domain types, prompt template, and recommendation service.
//!
//! This crate provides the core functionality for Marquee, including:
//!
//! - **Service**: [`RecommendationService`] validates a preference, formats the
//!   prompt and calls the upstream generator under a timeout
//! - **Prompt**: [`PromptTemplate`] with the built-in movie recommendation prompt
//! - **Traits**: [`TextGenerator`] for dependency injection of the upstream API
//! - **Configuration**: [`GenerationConfig`], [`GenerationProviderType`]
//!
//! # Architecture
//!
//! This crate is independent of HTTP concerns on both sides. The concrete
//! upstream clients live in `marquee-client`; the REST surface lives in
//! `marquee-server`.
//!
//! # Example
//!
//! ```ignore
//! use marquee_core::RecommendationService;
//!
//! let service = RecommendationService::new(generator);
//! let movies = service.recommend(Some("feel-good sci-fi")).await?;
//! ```

pub mod config;
pub mod error;
pub mod prompt;
pub mod recommend;
pub mod traits;

// Configuration
pub use config::{GenerationConfig, GenerationProviderType, HttpConfig};

// Error handling
pub use error::{AppError, UpstreamErrorDetails, UpstreamErrorKind};

// Prompt
pub use prompt::{MOVIE_RECOMMENDATION_TEMPLATE, PromptTemplate};

// Service
pub use recommend::{MAX_QUERY_LENGTH, MISSING_PREFERENCE_MESSAGE, RecommendationService};

// Traits for dependency injection
pub use traits::TextGenerator;
