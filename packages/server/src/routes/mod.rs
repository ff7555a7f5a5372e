//! HTTP route handlers.

pub mod extract;
pub mod health;

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;

/// Error response body: `{"detail": <message>}`.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub detail: String,
}

/// An HTTP-shaped error: a status code plus a detail message.
///
/// The outermost error shape of the API. Gateway failures and transport
/// errors both end up here; nothing escalates beyond an error status.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub detail: String,
}

impl ApiError {
    /// 400 with a message identifying the client's mistake.
    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            detail: detail.into(),
        }
    }

    /// 500 carrying the failure description.
    pub fn internal(detail: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            detail: detail.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (self.status, Json(ErrorBody { detail: self.detail })).into_response()
    }
}
