//! HTTP-level tests for the extraction API.
//!
//! Drive the full router with in-memory requests: multipart parsing,
//! content-type validation, status mapping, and the health endpoint.

use std::io::Cursor;
use std::sync::Arc;

use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, Request, StatusCode},
    Router,
};
use extraction::{testing::MockModel, ReportExtractor};
use http_body_util::BodyExt;
use server_core::build_router;
use tower::ServiceExt;

const BOUNDARY: &str = "test-boundary";

/// A small valid PNG, generated in memory.
fn png_bytes() -> Vec<u8> {
    let img = image::DynamicImage::ImageRgb8(image::RgbImage::new(4, 4));
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, image::ImageFormat::Png).unwrap();
    buf.into_inner()
}

fn app_with(mock: &MockModel) -> Router {
    build_router(Arc::new(ReportExtractor::new(Box::new(mock.clone()))))
}

/// Build a multipart/form-data body with a single file field.
fn multipart_body(field_name: &str, filename: &str, content_type: &str, data: &[u8]) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{BOUNDARY}\r\n\
             Content-Disposition: form-data; name=\"{field_name}\"; filename=\"{filename}\"\r\n\
             Content-Type: {content_type}\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(data);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());
    body
}

fn extract_request(field_name: &str, filename: &str, content_type: &str, data: &[u8]) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/extract")
        .header(
            CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(multipart_body(
            field_name,
            filename,
            content_type,
            data,
        )))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn extract_returns_parsed_fields_on_success() {
    let mock = MockModel::new()
        .with_response(r#"{"student_name": "Jane Doe", "grade_level": "5", "subjects": []}"#);
    let app = app_with(&mock);

    let response = app
        .oneshot(extract_request("image", "report.png", "image/png", &png_bytes()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["data"]["student_name"], "Jane Doe");
    assert_eq!(json["data"]["grade_level"], "5");
    assert_eq!(mock.call_count(), 1);
}

#[tokio::test]
async fn non_image_content_type_is_rejected_without_gateway_call() {
    let mock = MockModel::new().with_response("{}");
    let app = app_with(&mock);

    let response = app
        .oneshot(extract_request("image", "notes.txt", "text/plain", b"hello"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["detail"], "File must be an image");
    assert_eq!(mock.call_count(), 0);
}

#[tokio::test]
async fn missing_image_field_is_rejected() {
    let mock = MockModel::new();
    let app = app_with(&mock);

    let response = app
        .oneshot(extract_request("attachment", "report.png", "image/png", &png_bytes()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["detail"], "No image file provided");
    assert_eq!(mock.call_count(), 0);
}

#[tokio::test]
async fn gateway_failure_maps_to_internal_error() {
    let mock = MockModel::new().with_error("quota exceeded");
    let app = app_with(&mock);

    let response = app
        .oneshot(extract_request("image", "report.png", "image/png", &png_bytes()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json["detail"], "quota exceeded");
}

#[tokio::test]
async fn corrupt_image_maps_to_internal_error() {
    let mock = MockModel::new().with_response("{}");
    let app = app_with(&mock);

    let response = app
        .oneshot(extract_request("image", "report.png", "image/png", b"not an image"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    let detail = json["detail"].as_str().unwrap();
    assert!(detail.starts_with("invalid or corrupt image"), "{detail}");
    assert_eq!(mock.call_count(), 0);
}

#[tokio::test]
async fn health_reports_available_extractor() {
    let mock = MockModel::new();
    let app = app_with(&mock);

    let request = Request::builder()
        .uri("/api/health")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["extractor_available"], true);
    assert_eq!(mock.call_count(), 0);
}

#[tokio::test]
async fn health_reports_unavailable_extractor() {
    let app = build_router(Arc::new(ReportExtractor::unavailable("no API key")));

    let request = Request::builder()
        .uri("/api/health")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["extractor_available"], false);
}

#[tokio::test]
async fn unavailable_extractor_fails_extraction_with_message() {
    let app = build_router(Arc::new(ReportExtractor::unavailable("no API key")));

    let response = app
        .oneshot(extract_request("image", "report.png", "image/png", &png_bytes()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json["detail"], "Gemini model not available");
}
