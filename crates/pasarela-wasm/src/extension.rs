//! Bindings to the NIP-07 `window.nostr` extension object

use async_trait::async_trait;
use js_sys::Reflect;
use pasarela_core::{NostrProvider, ProviderError};
use serde_json::Value;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

#[wasm_bindgen]
extern "C" {
    /// The injected NIP-07 extension object.
    pub type NostrExtension;

    #[wasm_bindgen(catch, method)]
    async fn enable(this: &NostrExtension) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, method, js_name = getPublicKey)]
    async fn get_public_key(this: &NostrExtension) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(method, getter)]
    fn nip04(this: &NostrExtension) -> Nip04Namespace;

    #[wasm_bindgen(catch, method, js_name = signEvent)]
    async fn sign_event(this: &NostrExtension, event: JsValue) -> Result<JsValue, JsValue>;

    /// The `nostr.nip04` encryption namespace.
    pub type Nip04Namespace;

    #[wasm_bindgen(catch, method)]
    async fn encrypt(
        this: &Nip04Namespace,
        pubkey: &str,
        plaintext: &str,
    ) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, method)]
    async fn decrypt(
        this: &Nip04Namespace,
        pubkey: &str,
        ciphertext: &str,
    ) -> Result<JsValue, JsValue>;
}

/// Extensions reject with Error objects, plain strings, or arbitrary
/// values; recover whatever message is there.
fn provider_error(err: JsValue) -> ProviderError {
    let message = err
        .as_string()
        .or_else(|| {
            Reflect::get(&err, &JsValue::from_str("message"))
                .ok()
                .and_then(|m| m.as_string())
        })
        .unwrap_or_else(|| format!("{:?}", err));
    ProviderError::new(message)
}

fn expect_string(value: JsValue, what: &str) -> Result<String, ProviderError> {
    value
        .as_string()
        .ok_or_else(|| ProviderError::new(format!("{} is not a string", what)))
}

/// [`NostrProvider`] backed by the injected extension.
pub struct WebExtensionProvider {
    extension: NostrExtension,
}

impl WebExtensionProvider {
    /// Look up `window.nostr`, treating null/undefined as absent.
    pub fn detect() -> Option<Self> {
        let window = web_sys::window()?;
        let value = Reflect::get(&window, &JsValue::from_str("nostr")).ok()?;
        if value.is_undefined() || value.is_null() {
            return None;
        }
        Some(Self {
            extension: value.unchecked_into(),
        })
    }
}

#[async_trait(?Send)]
impl NostrProvider for WebExtensionProvider {
    async fn enable(&self) -> Result<Value, ProviderError> {
        let result = self.extension.enable().await.map_err(provider_error)?;
        if result.is_undefined() {
            return Ok(Value::Null);
        }
        serde_wasm_bindgen::from_value(result).map_err(|e| ProviderError::new(e.to_string()))
    }

    async fn get_public_key(&self) -> Result<String, ProviderError> {
        let key = self
            .extension
            .get_public_key()
            .await
            .map_err(provider_error)?;
        expect_string(key, "public key")
    }

    async fn nip04_encrypt(
        &self,
        pubkey: &str,
        plaintext: &str,
    ) -> Result<String, ProviderError> {
        let ciphertext = self
            .extension
            .nip04()
            .encrypt(pubkey, plaintext)
            .await
            .map_err(provider_error)?;
        expect_string(ciphertext, "ciphertext")
    }

    async fn nip04_decrypt(
        &self,
        pubkey: &str,
        ciphertext: &str,
    ) -> Result<String, ProviderError> {
        let plaintext = self
            .extension
            .nip04()
            .decrypt(pubkey, ciphertext)
            .await
            .map_err(provider_error)?;
        expect_string(plaintext, "plaintext")
    }

    async fn sign_event(&self, event: Value) -> Result<Value, ProviderError> {
        let event = serde_wasm_bindgen::to_value(&event)
            .map_err(|e| ProviderError::new(e.to_string()))?;
        let signed = self
            .extension
            .sign_event(event)
            .await
            .map_err(provider_error)?;
        serde_wasm_bindgen::from_value(signed).map_err(|e| ProviderError::new(e.to_string()))
    }
}
