//! Typed errors for the extraction library.
//!
//! Uses `thiserror` for library errors (not `anyhow`) to provide
//! strongly-typed, composable error handling.

use thiserror::Error;

/// Result type for extraction operations.
pub type Result<T> = std::result::Result<T, ExtractError>;

/// Errors that can occur while extracting fields from a report image.
///
/// These never escape [`ReportExtractor::extract`](crate::ReportExtractor::extract);
/// the gateway flattens them into `ExtractionResult::Failure` messages.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The backing model was never configured
    #[error("Gemini model not available")]
    Unavailable,

    /// Image bytes could not be decoded
    #[error("invalid or corrupt image: {0}")]
    Decode(#[from] image::ImageError),

    /// The external model call failed (quota, network, content policy)
    #[error("{0}")]
    Model(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unavailable_message_matches_failure_contract() {
        assert_eq!(
            ExtractError::Unavailable.to_string(),
            "Gemini model not available"
        );
    }

    #[test]
    fn model_error_displays_description_verbatim() {
        assert_eq!(
            ExtractError::Model("quota exceeded".into()).to_string(),
            "quota exceeded"
        );
    }
}
