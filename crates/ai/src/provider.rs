//! Gemini provider configuration and client construction.

use reqwest::Client as HttpClient;
use rig::client::CompletionClient;
use rig::completion::Prompt;
use rig::providers::gemini;

use crate::error::AiError;

/// Default model for all collaborator services.
pub const DEFAULT_MODEL_ID: &str = "gemini-2.5-flash";

/// Configuration for the Gemini-backed collaborator services.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// API key; a missing key surfaces as a provider failure and the
    /// calling service falls back in-band.
    pub api_key: Option<String>,
    pub model_id: String,
}

impl GeminiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            model_id: DEFAULT_MODEL_ID.to_string(),
        }
    }
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model_id: DEFAULT_MODEL_ID.to_string(),
        }
    }
}

/// Sends one prompt to the configured Gemini model and returns the raw
/// completion text.
pub(crate) async fn complete(config: &GeminiConfig, prompt: &str) -> Result<String, AiError> {
    let key = config
        .api_key
        .as_deref()
        .ok_or_else(|| AiError::MissingApiKey("gemini".to_string()))?;

    let client: gemini::Client<HttpClient> =
        gemini::Client::new(key).map_err(|e| AiError::Provider(e.to_string()))?;

    client
        .agent(&config.model_id)
        .build()
        .prompt(prompt)
        .await
        .map_err(|e| AiError::Provider(e.to_string()))
}
