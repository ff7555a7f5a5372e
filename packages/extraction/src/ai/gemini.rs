//! Gemini implementation of the `VisionModel` trait.
//!
//! # Example
//!
//! ```rust,ignore
//! use extraction::{ai::GeminiVision, ReportExtractor};
//!
//! let model = GeminiVision::new("AIza...", "gemini-2.5-flash");
//! let extractor = ReportExtractor::new(Box::new(model));
//! ```

use async_trait::async_trait;
use gemini_client::{GeminiClient, GenerateContentRequest};

use crate::error::{ExtractError, Result};
use crate::model::{ImagePayload, VisionModel};

/// Gemini-backed vision model.
#[derive(Clone)]
pub struct GeminiVision {
    client: GeminiClient,
    model: String,
}

impl GeminiVision {
    /// Create a new Gemini model wrapper with the given API key and model name.
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: GeminiClient::new(api_key),
            model: model.into(),
        }
    }

    /// Route requests through a custom base URL (proxies, test servers).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.client = self.client.with_base_url(url);
        self
    }
}

#[async_trait]
impl VisionModel for GeminiVision {
    async fn generate(&self, prompt: &str, image: &ImagePayload) -> Result<String> {
        let request =
            GenerateContentRequest::text_and_image(prompt, &image.mime_type, &image.bytes);

        self.client
            .generate_content(&self.model, request)
            .await
            .map_err(|e| ExtractError::Model(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_base_url_overrides_client_endpoint() {
        let model = GeminiVision::new("test-key", "gemini-2.5-flash")
            .with_base_url("http://localhost:9090/v1beta");

        assert_eq!(model.client.base_url(), "http://localhost:9090/v1beta");
    }
}
