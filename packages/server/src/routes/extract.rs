use axum::{
    extract::{Extension, Multipart},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use extraction::{ExtractedFields, ExtractionResult};
use serde::Serialize;
use tracing::{info, warn};

use crate::app::AppState;
use crate::routes::ApiError;

/// Success response body: `{"success": true, "data": <fields>}`.
#[derive(Serialize)]
pub struct ExtractResponse {
    pub success: bool,
    pub data: ExtractedFields,
}

/// Extraction endpoint.
///
/// Accepts a multipart upload with one `image` file field, validates the
/// declared media type, and hands the bytes to the gateway. `Success` maps
/// to 200, `Failure` to 500; anything that goes wrong outside the gateway
/// is caught here and mapped to an error status with a detail message.
pub async fn extract_handler(
    Extension(state): Extension<AppState>,
    multipart: Multipart,
) -> Response {
    match handle_upload(&state, multipart).await {
        Ok(data) => (
            StatusCode::OK,
            Json(ExtractResponse {
                success: true,
                data,
            }),
        )
            .into_response(),
        Err(e) => {
            warn!(status = %e.status, detail = %e.detail, "extraction request failed");
            e.into_response()
        }
    }
}

async fn handle_upload(
    state: &AppState,
    mut multipart: Multipart,
) -> Result<ExtractedFields, ApiError> {
    let image = loop {
        let field = multipart
            .next_field()
            .await
            .map_err(|e| ApiError::bad_request(format!("invalid multipart body: {e}")))?;

        match field {
            Some(field) if field.name() == Some("image") => break field,
            Some(_) => continue,
            None => return Err(ApiError::bad_request("No image file provided")),
        }
    };

    let filename = image.file_name().unwrap_or("<unnamed>").to_string();
    info!(filename = %filename, "received extraction request");

    // Reject non-image uploads before the gateway ever sees them
    let content_type = image.content_type().unwrap_or("").to_string();
    if !content_type.starts_with("image/") {
        return Err(ApiError::bad_request("File must be an image"));
    }

    // Outermost safety net: a failed body read becomes a 500, not a crash
    let content = image
        .bytes()
        .await
        .map_err(|e| ApiError::internal(format!("failed to read upload: {e}")))?;
    info!(filename = %filename, bytes = content.len(), "read uploaded image");

    match state.extractor.extract(&content).await {
        ExtractionResult::Success { data } => Ok(data),
        ExtractionResult::Failure { error } => Err(ApiError::internal(error)),
    }
}
