//! AI collaborator error types.
//!
//! These errors stay inside this crate: the public trait methods convert
//! every failure into an in-band fallback result.

use thiserror::Error;

/// AI collaborator errors.
#[derive(Debug, Error)]
pub enum AiError {
    /// Missing API key for the provider.
    #[error("Missing API key for provider {0}")]
    MissingApiKey(String),

    /// Provider error (from rig-core or the API).
    #[error("Provider error: {0}")]
    Provider(String),

    /// The model returned output that could not be used.
    #[error("Unusable model response: {0}")]
    InvalidResponse(String),
}
