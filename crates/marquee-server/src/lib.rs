//! Marquee Server - REST API for LLM-backed movie recommendations
//!
//! This crate provides the HTTP surface of Marquee:
//!
//! - **`GET /`**: usage banner
//! - **`GET /health`**: server version and configured provider
//! - **`POST /recommend`**: `{"query": "..."}` in, `{"movies": "..."}` out
//!
//! # API Documentation
//!
//! When running the server, interactive API documentation is available
//! at `/swagger-ui`.

pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod openapi;
pub mod router;
pub mod state;

pub use config::ServerConfig;
pub use error::ApiError;
pub use router::create_router;
pub use state::AppState;
