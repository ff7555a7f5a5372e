//! Canonical data types for student report extraction.

use serde::{Deserialize, Serialize};

/// One subject row on a report: name, grade, and the teacher's comment.
///
/// All fields default to empty strings rather than being absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub grade: String,

    #[serde(default)]
    pub teacher_comment: String,
}

/// The canonical structured output for a student report image.
///
/// Missing information is represented as empty strings (or an empty
/// `subjects` list), never as absent keys. When the model's output could
/// not be parsed as structured data, `raw_text` holds the verbatim output
/// the other fields were derived from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedFields {
    #[serde(default)]
    pub student_name: String,

    #[serde(default)]
    pub grade_level: String,

    #[serde(default)]
    pub report_year: String,

    #[serde(default)]
    pub general_comments: String,

    #[serde(default)]
    pub subjects: Vec<Subject>,

    /// Full text output of the model
    #[serde(default)]
    pub raw_text: String,
}

/// Outcome of one extraction call: structured data or a failure message.
///
/// Exactly one variant per call, never both. The HTTP layer maps `Success`
/// to a 200 response and `Failure` to a 500, so the two variants must carry
/// everything each response shape needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ExtractionResult {
    /// Extraction produced structured fields
    Success { data: ExtractedFields },

    /// Extraction could not be performed
    Failure { error: String },
}

impl ExtractionResult {
    /// Build a failure result from any displayable error.
    pub fn failure(error: impl Into<String>) -> Self {
        Self::Failure {
            error: error.into(),
        }
    }

    /// True if this is the `Success` variant.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}
