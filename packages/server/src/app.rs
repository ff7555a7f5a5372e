//! Router assembly and shared application state.

use std::sync::Arc;

use axum::{
    extract::{DefaultBodyLimit, Extension},
    http::{header::CONTENT_TYPE, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use extraction::ReportExtractor;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::routes::{extract::extract_handler, health::health_handler};

/// Uploads larger than this are rejected before reaching a handler.
const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Shared application state: the gateway, constructed once at startup.
///
/// Immutable after construction; requests share it via `Arc` with no
/// cross-request mutation.
#[derive(Clone)]
pub struct AppState {
    pub extractor: Arc<ReportExtractor>,
}

/// Build the application router around a gateway instance.
pub fn build_router(extractor: Arc<ReportExtractor>) -> Router {
    // CORS configuration - allow frontend dev servers and local testing.
    // Use stricter origins in production.
    let cors = CorsLayer::new()
        .allow_origin([
            HeaderValue::from_static("http://localhost:3000"),
            HeaderValue::from_static("http://127.0.0.1:3000"),
            HeaderValue::from_static("http://localhost:3001"),
            HeaderValue::from_static("http://127.0.0.1:3001"),
        ])
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE])
        .allow_credentials(true);

    Router::new()
        .route("/api/extract", post(extract_handler))
        .route("/api/health", get(health_handler))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(Extension(AppState { extractor }))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
