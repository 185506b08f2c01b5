//! The consumed NIP-07 provider contract

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

use crate::errors::ProviderError;

/// A browser extension (or any stand-in) exposing the NIP-07 surface:
/// enable/getPublicKey/signEvent plus the nip04 encryption namespace.
///
/// Key material stays on the provider's side of this trait; the bridge
/// only moves opaque strings and JSON across it, and never serializes
/// concurrent access.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait NostrProvider {
    /// Ask the provider to authorize this origin. The result shape is
    /// provider-defined and passed through unexamined.
    async fn enable(&self) -> Result<Value, ProviderError>;

    async fn get_public_key(&self) -> Result<String, ProviderError>;

    async fn nip04_encrypt(&self, pubkey: &str, plaintext: &str)
        -> Result<String, ProviderError>;

    async fn nip04_decrypt(&self, pubkey: &str, ciphertext: &str)
        -> Result<String, ProviderError>;

    /// Sign `event` and return the provider's full result object. The
    /// adapter narrows it to a [`SignatureEnvelope`].
    async fn sign_event(&self, event: Value) -> Result<Value, ProviderError>;
}

/// The one field the bridge requires of a signing result. Everything
/// else the provider returns is ignored.
#[derive(Debug, Deserialize)]
pub struct SignatureEnvelope {
    pub sig: String,
}
