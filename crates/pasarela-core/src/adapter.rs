//! Flat table of bridge operations over an optionally-present provider

use std::time::Duration;

use serde_json::Value;

use crate::errors::BridgeError;
use crate::provider::{NostrProvider, SignatureEnvelope};
use crate::time::Sleeper;

/// Prefix on every synchronous echo.
pub const ECHO_PREFIX: &str = "paso por js: ";

/// Fixed suspension applied by the delayed operations. Not configurable.
pub const DELAY: Duration = Duration::from_millis(1000);

/// Which of the two delayed-echo prefixes to produce.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EchoVariant {
    First,
    Second,
}

impl EchoVariant {
    pub fn prefix(&self) -> &'static str {
        match self {
            EchoVariant::First => "paso por js1: ",
            EchoVariant::Second => "paso por js2: ",
        }
    }
}

/// The bridge operation table.
///
/// Every operation is stateless and independently invocable in any
/// order. The provider is injected at construction rather than read
/// from an ambient global, so absence is an explicit, testable state.
/// No operation retries, caches, or times out; a hung provider call
/// hangs its own caller and nothing else.
pub struct ProviderAdapter<P, S> {
    provider: Option<P>,
    sleeper: S,
}

impl<P, S> ProviderAdapter<P, S>
where
    P: NostrProvider,
    S: Sleeper,
{
    pub fn new(provider: Option<P>, sleeper: S) -> Self {
        Self { provider, sleeper }
    }

    /// Write `text` to the diagnostic channel. This is a standalone
    /// capability; failures elsewhere in the bridge are never routed
    /// through it.
    pub fn log(&self, text: &str) {
        log::info!("{}", text);
    }

    pub fn echo_sync(&self, text: &str) -> String {
        format!("{}{}", ECHO_PREFIX, text)
    }

    /// Suspend for the fixed delay, then produce the variant's prefixed
    /// echo.
    pub async fn delayed_echo(&self, text: &str, variant: EchoVariant) -> String {
        self.sleeper.sleep(DELAY).await;
        format!("{}{}", variant.prefix(), text)
    }

    /// Suspend for the fixed delay, then fail with a message embedding
    /// the caller's text.
    pub async fn delayed_failure(&self, text: &str) -> Result<String, BridgeError> {
        self.sleeper.sleep(DELAY).await;
        Err(BridgeError::Simulated(text.to_string()))
    }

    pub fn is_provider_available(&self) -> bool {
        self.provider.is_some()
    }

    fn provider(&self) -> Result<&P, BridgeError> {
        self.provider
            .as_ref()
            .ok_or(BridgeError::ProviderUnavailable)
    }

    pub async fn enable(&self) -> Result<Value, BridgeError> {
        Ok(self.provider()?.enable().await?)
    }

    pub async fn get_public_key(&self) -> Result<String, BridgeError> {
        Ok(self.provider()?.get_public_key().await?)
    }

    pub async fn encrypt(&self, pubkey: &str, plaintext: &str) -> Result<String, BridgeError> {
        Ok(self.provider()?.nip04_encrypt(pubkey, plaintext).await?)
    }

    pub async fn decrypt(&self, pubkey: &str, ciphertext: &str) -> Result<String, BridgeError> {
        Ok(self.provider()?.nip04_decrypt(pubkey, ciphertext).await?)
    }

    /// Delegate signing and narrow the provider's result to its
    /// signature.
    pub async fn sign_event(&self, event: Value) -> Result<String, BridgeError> {
        let signed = self.provider()?.sign_event(event).await?;
        let envelope: SignatureEnvelope =
            serde_json::from_value(signed).map_err(|_| BridgeError::MalformedResult)?;
        Ok(envelope.sig)
    }
}
