//! Testing utilities including mock implementations.
//!
//! Useful for testing applications that use the extraction gateway without
//! making real model or network calls.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use crate::error::{ExtractError, Result};
use crate::model::{ImagePayload, VisionModel};

/// A deterministic mock vision model for testing.
///
/// Returns a canned response (or a forced error) and tracks how many times
/// it was called, so tests can assert the model was or was not invoked.
/// Clones share state, letting a test keep a handle after handing the mock
/// to a gateway.
#[derive(Default, Clone)]
pub struct MockModel {
    response: Arc<RwLock<String>>,
    error: Arc<RwLock<Option<String>>>,
    calls: Arc<AtomicUsize>,
}

impl MockModel {
    /// Create a mock that returns an empty response.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the canned response text.
    pub fn with_response(self, text: impl Into<String>) -> Self {
        *self.response.write().unwrap() = text.into();
        self
    }

    /// Make every call fail with the given message.
    pub fn with_error(self, message: impl Into<String>) -> Self {
        *self.error.write().unwrap() = Some(message.into());
        self
    }

    /// Number of `generate` calls made so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl VisionModel for MockModel {
    async fn generate(&self, _prompt: &str, _image: &ImagePayload) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(message) = self.error.read().unwrap().clone() {
            return Err(ExtractError::Model(message));
        }

        Ok(self.response.read().unwrap().clone())
    }
}
