//! The extraction gateway: image bytes in, `ExtractionResult` out.
//!
//! Stateless per call except for the availability flag fixed at
//! construction. Every code path terminates in a well-formed
//! `ExtractionResult`; no error escapes to the caller.

use tracing::{debug, info, warn};

use crate::error::{ExtractError, Result};
use crate::fallback::extract_field;
use crate::model::{ImagePayload, VisionModel};
use crate::types::{ExtractedFields, ExtractionResult};

/// Instruction prompt sent with every report image.
const EXTRACTION_PROMPT: &str = "\
Extract information from this student report image. Please provide:
1. Student name
2. Grade level
3. Report year
4. General comments (if any)
5. Subject grades and teacher comments (if available)

Format the response as JSON with these fields:
- student_name: string
- grade_level: string
- report_year: string
- general_comments: string
- subjects: array of objects with name, grade, teacher_comment
- raw_text: the full extracted text

If information is not available, use empty strings or empty arrays.";

/// Gateway mediating between raw image input and the external vision model.
///
/// Constructed once at startup and shared across requests. If the model
/// could not be configured, the gateway is permanently unavailable for its
/// lifetime and every call short-circuits to `Failure`.
pub struct ReportExtractor {
    model: Option<Box<dyn VisionModel>>,
}

impl ReportExtractor {
    /// Create an available gateway backed by the given model.
    pub fn new(model: Box<dyn VisionModel>) -> Self {
        Self { model: Some(model) }
    }

    /// Create a permanently unavailable gateway, recording why.
    pub fn unavailable(reason: impl AsRef<str>) -> Self {
        warn!(reason = reason.as_ref(), "report extractor unavailable");
        Self { model: None }
    }

    /// Wire up a Gemini-backed gateway from an API key and model name.
    ///
    /// An empty key yields an unavailable gateway rather than an error, so
    /// the process can still serve health checks and report the degraded
    /// state.
    #[cfg(feature = "gemini")]
    pub fn from_gemini(api_key: &str, model_name: &str) -> Self {
        if api_key.is_empty() {
            return Self::unavailable("GEMINI_API_KEY not found");
        }

        info!(model = model_name, "Gemini extractor initialized");
        Self::new(Box::new(crate::ai::GeminiVision::new(api_key, model_name)))
    }

    /// Whether the backing model was configured successfully.
    pub fn is_available(&self) -> bool {
        self.model.is_some()
    }

    /// Extract structured report fields from raw image bytes.
    ///
    /// Never returns an error: decode failures, model failures, and
    /// anything unexpected all flatten into `Failure` with a message.
    /// Malformed model output is not a failure; it triggers the heuristic
    /// fallback and still yields `Success`.
    pub async fn extract(&self, image_bytes: &[u8]) -> ExtractionResult {
        match self.try_extract(image_bytes).await {
            Ok(fields) => {
                info!("successfully extracted report data");
                ExtractionResult::Success { data: fields }
            }
            Err(e) => {
                warn!(error = %e, "report extraction failed");
                ExtractionResult::failure(e.to_string())
            }
        }
    }

    async fn try_extract(&self, image_bytes: &[u8]) -> Result<ExtractedFields> {
        let Some(model) = &self.model else {
            debug!("extractor unavailable, skipping decode and model call");
            return Err(ExtractError::Unavailable);
        };

        debug!(bytes = image_bytes.len(), "starting report extraction");

        let payload = ImagePayload::decode(image_bytes)?;

        let raw = model.generate(EXTRACTION_PROMPT, &payload).await?;
        let raw = raw.trim();

        Ok(normalize_output(raw))
    }
}

/// Turn raw model output into the canonical field set.
///
/// Tries a structured JSON parse first; on any parse failure falls back to
/// line/keyword scanning for the four scalar fields, with `subjects` left
/// empty and `raw_text` carrying the verbatim output.
fn normalize_output(raw: &str) -> ExtractedFields {
    match serde_json::from_str::<ExtractedFields>(raw) {
        Ok(fields) => fields,
        Err(e) => {
            debug!(error = %e, "model output was not valid JSON, using heuristic fallback");
            ExtractedFields {
                student_name: extract_field(raw, &["student", "name"]),
                grade_level: extract_field(raw, &["grade"]),
                report_year: extract_field(raw, &["year"]),
                general_comments: extract_field(raw, &["comments"]),
                subjects: Vec::new(),
                raw_text: raw.to_string(),
            }
        }
    }
}

impl std::fmt::Debug for ReportExtractor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReportExtractor")
            .field("available", &self.is_available())
            .finish()
    }
}
