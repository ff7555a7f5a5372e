//! Gemini API request and response types.
//!
//! Models the `generateContent` wire format: a request is a list of contents,
//! each holding parts that are either text or inline (base64) binary data.

use base64::{engine::general_purpose::STANDARD, Engine};
use serde::{Deserialize, Serialize};

// =============================================================================
// generateContent request
// =============================================================================

/// A `generateContent` request body.
#[derive(Debug, Clone, Serialize, Default)]
pub struct GenerateContentRequest {
    /// Conversation contents (a single-turn request has one entry)
    pub contents: Vec<Content>,
}

impl GenerateContentRequest {
    /// Create a single-turn request from a list of parts.
    pub fn from_parts(parts: Vec<Part>) -> Self {
        Self {
            contents: vec![Content { parts }],
        }
    }

    /// Create a single-turn multimodal request: one text prompt plus one image.
    pub fn text_and_image(
        prompt: impl Into<String>,
        mime_type: impl Into<String>,
        image_bytes: &[u8],
    ) -> Self {
        Self::from_parts(vec![
            Part::text(prompt),
            Part::inline_data(mime_type, image_bytes),
        ])
    }
}

/// One content entry (a turn) in a request.
#[derive(Debug, Clone, Serialize)]
pub struct Content {
    /// Ordered parts making up this turn
    pub parts: Vec<Part>,
}

/// A single part of a content entry: text or inline binary data.
#[derive(Debug, Clone, Serialize)]
pub struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    #[serde(rename = "inlineData", skip_serializing_if = "Option::is_none")]
    pub inline_data: Option<InlineData>,
}

impl Part {
    /// Create a text part.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            inline_data: None,
        }
    }

    /// Create an inline data part, base64-encoding the raw bytes.
    pub fn inline_data(mime_type: impl Into<String>, bytes: &[u8]) -> Self {
        Self {
            text: None,
            inline_data: Some(InlineData {
                mime_type: mime_type.into(),
                data: STANDARD.encode(bytes),
            }),
        }
    }
}

/// Base64-encoded binary data with its media type.
#[derive(Debug, Clone, Serialize)]
pub struct InlineData {
    #[serde(rename = "mimeType")]
    pub mime_type: String,

    /// Base64-encoded payload
    pub data: String,
}

// =============================================================================
// generateContent response
// =============================================================================

/// Raw `generateContent` response.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate's parts, if any.
    pub fn first_text(&self) -> Option<String> {
        let candidate = self.candidates.first()?;
        let text: String = candidate
            .content
            .parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

/// One generated candidate.
#[derive(Debug, Clone, Deserialize)]
pub struct Candidate {
    pub content: CandidateContent,
}

/// Generated content of a candidate.
#[derive(Debug, Clone, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

/// A part of a generated candidate (text only; other kinds are ignored).
#[derive(Debug, Clone, Deserialize)]
pub struct ResponsePart {
    #[serde(default)]
    pub text: Option<String>,
}
