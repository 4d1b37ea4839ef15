//! Mock backend for testing
//!
//! Returns a scripted completion (or a scripted failure) without touching
//! the network. Useful for unit tests and offline development.

use async_trait::async_trait;

use crate::error::{Error, Result};

use super::InsightBackend;

/// Mock generative backend with a scripted response.
#[derive(Clone, Default)]
pub struct MockBackend {
    /// Completion text returned by `generate`.
    response: String,
    /// When set, `generate` fails instead of responding.
    fail: bool,
}

impl MockBackend {
    /// Backend that always returns the given text.
    pub fn with_response(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
            fail: false,
        }
    }

    /// Backend that always fails, exercising transport-failure paths.
    pub fn failing() -> Self {
        Self {
            response: String::new(),
            fail: true,
        }
    }
}

#[async_trait]
impl InsightBackend for MockBackend {
    async fn generate(&self, _prompt: &str) -> Result<String> {
        if self.fail {
            return Err(Error::InvalidData("mock backend failure".to_string()));
        }
        Ok(self.response.clone())
    }

    fn model(&self) -> &str {
        "mock"
    }
}
