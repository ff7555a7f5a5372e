// Main entry point for the report extractor API server

use std::sync::Arc;

use anyhow::{Context, Result};
use extraction::ReportExtractor;
use server_core::{build_router, Config};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,server_core=debug,extraction=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Student Report Extractor API");

    // Load configuration (fatal if GEMINI_API_KEY is missing)
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!("Configuration loaded");

    // Construct the gateway once; requests share it immutably
    let extractor = Arc::new(ReportExtractor::from_gemini(
        &config.gemini_api_key,
        &config.gemini_model,
    ));

    // Build application
    let app = build_router(extractor);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Starting server on {}", addr);
    tracing::info!("Health check: http://localhost:{}/api/health", config.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
