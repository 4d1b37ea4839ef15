//! Generative-text backend abstraction
//!
//! One backend call is one prompt in, one free-text completion out. The
//! orchestrator in `crate::insights` owns everything above that line:
//! prompt construction, structured extraction, and fallbacks.
//!
//! - `InsightBackend` trait: the single-operation interface
//! - `InsightClient` enum: concrete wrapper providing Clone + compile-time
//!   dispatch
//! - Backend implementations: `GeminiBackend`, `MockBackend`

pub mod extract;
mod gemini;
mod mock;

pub use extract::{extract_span, parse_structured, JsonShape};
pub use gemini::GeminiBackend;
pub use mock::MockBackend;

use async_trait::async_trait;

use crate::error::Result;

/// Trait defining the interface for generative-text backends.
///
/// Backends must be Send + Sync to allow concurrent in-flight insight
/// requests; each call is independent and unordered relative to others.
#[async_trait]
pub trait InsightBackend: Send + Sync {
    /// Send one prompt and return the raw completion text.
    ///
    /// Exactly one request per call: no retry, no backoff, no streaming.
    async fn generate(&self, prompt: &str) -> Result<String>;

    /// Model name (for logging).
    fn model(&self) -> &str;
}

/// Concrete backend enum.
///
/// Provides Clone and compile-time dispatch without Box<dyn> overhead.
#[derive(Clone)]
pub enum InsightClient {
    /// Gemini generative-language API over HTTPS.
    Gemini(GeminiBackend),
    /// Mock backend for testing.
    Mock(MockBackend),
}

#[async_trait]
impl InsightBackend for InsightClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        match self {
            InsightClient::Gemini(b) => b.generate(prompt).await,
            InsightClient::Mock(b) => b.generate(prompt).await,
        }
    }

    fn model(&self) -> &str {
        match self {
            InsightClient::Gemini(b) => b.model(),
            InsightClient::Mock(b) => b.model(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_client_delegates_to_mock() {
        let client = InsightClient::Mock(MockBackend::with_response("hello"));
        assert_eq!(client.model(), "mock");
        assert_eq!(client.generate("prompt").await.unwrap(), "hello");
    }
}
