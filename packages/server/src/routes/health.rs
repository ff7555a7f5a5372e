use axum::{extract::Extension, Json};
use serde::Serialize;

use crate::app::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    extractor_available: bool,
}

/// Health check endpoint.
///
/// Reports the gateway's availability flag established at startup.
/// Never calls the model, so it returns immediately regardless of the
/// extractor's state.
pub async fn health_handler(Extension(state): Extension<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        extractor_available: state.extractor.is_available(),
    })
}
