//! Vision model trait: the seam to the external multimodal LLM.
//!
//! Implementations wrap a specific provider (Gemini, OpenAI, ...) and
//! handle the specifics of transport and response unwrapping. The gateway
//! only ever sees prompt in, raw text out.

use async_trait::async_trait;

use crate::error::Result;

/// A decoded image ready to be sent to a model.
#[derive(Debug, Clone)]
pub struct ImagePayload {
    /// Media type of the encoded bytes (e.g. "image/png")
    pub mime_type: String,

    /// The original encoded image bytes
    pub bytes: Vec<u8>,
}

impl ImagePayload {
    /// Validate raw bytes as an image and wrap them for a model call.
    ///
    /// The bytes are fully decoded, not just sniffed, so corrupt payloads
    /// are rejected here rather than surfacing as opaque model errors.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        let format = image::guess_format(bytes)?;
        image::load_from_memory_with_format(bytes, format)?;

        Ok(Self {
            mime_type: format.to_mime_type().to_string(),
            bytes: bytes.to_vec(),
        })
    }
}

/// A multimodal model that turns (prompt, image) into generated text.
#[async_trait]
pub trait VisionModel: Send + Sync {
    /// Send the prompt and image to the model and return its raw text output.
    ///
    /// A single synchronous call with no internal retries; failures surface
    /// as [`ExtractError::Model`](crate::ExtractError::Model).
    async fn generate(&self, prompt: &str, image: &ImagePayload) -> Result<String>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn png_bytes() -> Vec<u8> {
        let img = image::DynamicImage::ImageRgb8(image::RgbImage::new(2, 2));
        let mut buf = Cursor::new(Vec::new());
        img.write_to(&mut buf, image::ImageFormat::Png).unwrap();
        buf.into_inner()
    }

    #[test]
    fn decode_accepts_valid_png() {
        let payload = ImagePayload::decode(&png_bytes()).unwrap();
        assert_eq!(payload.mime_type, "image/png");
        assert!(!payload.bytes.is_empty());
    }

    #[test]
    fn decode_rejects_garbage() {
        let err = ImagePayload::decode(b"definitely not an image").unwrap_err();
        assert!(err.to_string().starts_with("invalid or corrupt image"));
    }

    #[test]
    fn decode_rejects_truncated_image() {
        let mut bytes = png_bytes();
        bytes.truncate(16); // valid PNG magic, nothing else
        assert!(ImagePayload::decode(&bytes).is_err());
    }
}
