//! Shared error types

use thiserror::Error;

/// Failure surfaced by the external provider's own operation.
///
/// Carries the provider's message untouched; the bridge never wraps,
/// translates, or retries it.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ProviderError {
    pub message: String,
}

impl ProviderError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Errors produced by the bridge operations
#[derive(Debug, Error)]
pub enum BridgeError {
    /// Deliberate rejection from the delayed-failure demonstration.
    #[error("error: {0}")]
    Simulated(String),

    /// A delegating operation was invoked with no provider injected.
    #[error("no signing provider is available")]
    ProviderUnavailable,

    #[error(transparent)]
    Provider(#[from] ProviderError),

    /// The provider's signing result lacks the `sig` field.
    #[error("signing result has no sig field")]
    MalformedResult,
}
