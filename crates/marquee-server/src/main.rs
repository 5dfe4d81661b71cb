//! Marquee REST API Server
//!
//! This binary starts the Marquee REST API server, exposing the movie
//! recommendation endpoint backed by a hosted language model.

use std::net::SocketAddr;

use anyhow::Context;
use clap::Parser;
use dotenvy::dotenv;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use marquee_client::GenerationProviderEnum;
use marquee_core::{RecommendationService, TextGenerator};

use marquee_server::{AppState, ServerConfig, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    // Initialize logging (RUST_LOG overrides the default)
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Parse command line arguments
    let config = ServerConfig::parse();

    let settings = config
        .provider_settings()
        .context("Invalid generation provider configuration")?;

    // Initialize upstream generation client
    let generator = GenerationProviderEnum::from_config(
        settings.provider,
        &settings.api_key,
        &settings.generation,
        settings.endpoint.as_deref(),
    )
    .context("Failed to initialize generation client")?;

    info!(
        provider = generator.name(),
        model = generator.model(),
        temperature = settings.generation.temperature,
        timeout_secs = settings.generation.timeout.as_secs(),
        "Generation client ready"
    );

    // Create application state
    let service = RecommendationService::with_config(generator, settings.generation);
    let app_state = AppState::new(service);

    // Build router
    let app = create_router(app_state, &config.cors_origins);

    // Bind to address
    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .context("Invalid address")?;

    let listener = TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    info!("Starting Marquee API server on http://{}", addr);
    info!("Swagger UI available at http://{}/swagger-ui", addr);

    // Start server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, finishing in-flight requests...");
}
