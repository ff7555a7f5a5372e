//! HTTP front door for the student report extractor.
//!
//! Translates multipart uploads into gateway calls and gateway results
//! into HTTP responses. All extraction logic lives in the `extraction`
//! crate; this crate only does transport, validation, and status mapping.

pub mod app;
pub mod config;
pub mod routes;

pub use app::{build_router, AppState};
pub use config::Config;
