//! Insight orchestrator configuration
//!
//! The credential is an explicit value handed to the service constructor,
//! never a global read at module load. `from_env` is a convenience for
//! binaries; tests construct configs directly.

/// Environment variable holding the generative-language API key.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Environment variable overriding the model name.
pub const MODEL_ENV: &str = "GEMINI_MODEL";

/// Environment variable overriding the API base URL.
pub const BASE_URL_ENV: &str = "GEMINI_BASE_URL";

/// Default generative-language API base URL.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Default model for all insight calls.
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// Known placeholder value shipped in sample .env files. A key containing
/// this string is treated as absent.
const KEY_PLACEHOLDER: &str = "your_gemini_api_key";

/// Configuration for the insight orchestrator.
#[derive(Debug, Clone)]
pub struct InsightConfig {
    /// API key, already screened for placeholders. `None` means every
    /// insight call resolves to its fallback without touching the network.
    pub api_key: Option<String>,
    /// Model name used in the request path.
    pub model: String,
    /// API base URL (overridable for tests).
    pub base_url: String,
}

impl InsightConfig {
    /// Create a config with an explicit key, screening placeholder values.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: screen_key(api_key.into()),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Create a config with no credential. All insight calls fall back.
    pub fn offline() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Read configuration from environment variables.
    pub fn from_env() -> Self {
        let api_key = std::env::var(API_KEY_ENV).ok().and_then(screen_key);
        let model = std::env::var(MODEL_ENV).unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let base_url =
            std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self {
            api_key,
            model,
            base_url,
        }
    }

    /// Override the base URL (mock servers in tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the model name.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Whether a usable credential is configured.
    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }
}

/// Treat empty and placeholder keys as absent.
fn screen_key(key: String) -> Option<String> {
    let trimmed = key.trim();
    if trimmed.is_empty() || trimmed.contains(KEY_PLACEHOLDER) {
        None
    } else {
        Some(trimmed.to_string())
    }
}
