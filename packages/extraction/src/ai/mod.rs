//! Model implementations for the extraction gateway.
//!
//! Reference implementations of the `VisionModel` trait. Users can use
//! these directly or implement their own.

#[cfg(feature = "gemini")]
mod gemini;

#[cfg(feature = "gemini")]
pub use gemini::GeminiVision;
