//! Student Report Extraction Library
//!
//! Turns a student report image into structured fields by delegating the
//! understanding task to an external multimodal model and normalizing
//! whatever comes back.
//!
//! # Design Philosophy
//!
//! - Model output is untrusted: structured parse first, heuristic fallback second
//! - Every call ends in a well-formed result, never a stray error
//! - One availability check at construction, no runtime re-initialization
//! - Library handles normalization, the app handles transport
//!
//! # Usage
//!
//! ```rust,ignore
//! use extraction::{ai::GeminiVision, ReportExtractor};
//!
//! let model = GeminiVision::new(api_key, "gemini-2.5-flash");
//! let extractor = ReportExtractor::new(Box::new(model));
//!
//! match extractor.extract(&image_bytes).await {
//!     ExtractionResult::Success { data } => println!("{}", data.student_name),
//!     ExtractionResult::Failure { error } => eprintln!("{error}"),
//! }
//! ```
//!
//! # Modules
//!
//! - [`model`] - The `VisionModel` trait and image payload validation
//! - [`gateway`] - The `ReportExtractor` gateway
//! - [`fallback`] - Heuristic field extraction for malformed model output
//! - [`types`] - Canonical result and field types
//! - [`testing`] - Mock implementations for testing

pub mod error;
pub mod fallback;
pub mod gateway;
pub mod model;
pub mod testing;
pub mod types;

#[cfg(feature = "gemini")]
pub mod ai;

// Re-export core types at crate root
pub use error::{ExtractError, Result};
pub use gateway::ReportExtractor;
pub use model::{ImagePayload, VisionModel};
pub use types::{ExtractedFields, ExtractionResult, Subject};
