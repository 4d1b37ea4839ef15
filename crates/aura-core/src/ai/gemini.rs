//! Gemini backend implementation
//!
//! One HTTPS POST per call to the generative-language API, authenticated
//! with a query-string key. Only the first candidate's first text part is
//! consumed; an unexpected envelope shape extracts as empty text.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::InsightConfig;
use crate::error::{Error, Result};

use super::InsightBackend;

/// Gemini generative-language backend.
#[derive(Clone)]
pub struct GeminiBackend {
    http_client: Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl GeminiBackend {
    /// Create a backend from a config carrying a credential.
    ///
    /// Fails when the config has no usable key; the orchestrator checks
    /// `has_credential` first and never constructs a keyless backend.
    pub fn new(config: &InsightConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .clone()
            .ok_or_else(|| Error::MissingApiKey("gemini".to_string()))?;
        Ok(Self {
            http_client: Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key,
        })
    }
}

/// Request to the generateContent endpoint.
#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

/// Response envelope. Every level defaults so a surprising shape yields
/// empty text instead of a deserialization error.
#[derive(Debug, Default, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Default, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: CandidateContent,
}

#[derive(Debug, Default, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Default, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

impl GenerateResponse {
    /// First candidate's first text part, or empty.
    fn into_text(mut self) -> String {
        if self.candidates.is_empty() {
            return String::new();
        }
        let mut candidate = self.candidates.remove(0);
        if candidate.content.parts.is_empty() {
            return String::new();
        }
        candidate.content.parts.remove(0).text
    }
}

#[async_trait]
impl InsightBackend for GeminiBackend {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        let response = self
            .http_client
            .post(format!(
                "{}/v1beta/models/{}:generateContent",
                self.base_url, self.model
            ))
            .query(&[("key", self.api_key.as_str())])
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Error::Http(response.error_for_status().unwrap_err()));
        }

        let envelope: GenerateResponse = response.json().await?;
        let text = envelope.into_text();
        debug!(model = %self.model, "Gemini response: {}", text);

        Ok(text)
    }

    fn model(&self) -> &str {
        &self.model
    }
}
