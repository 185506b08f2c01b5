//! The exported bridge surface

use pasarela_core::{BridgeError, ProviderAdapter};
use wasm_bindgen::prelude::*;

use crate::extension::WebExtensionProvider;
use crate::time::BrowserSleeper;

/// Which delayed-echo prefix to produce.
#[wasm_bindgen]
#[derive(Clone, Copy)]
pub enum EchoVariant {
    First,
    Second,
}

impl From<EchoVariant> for pasarela_core::EchoVariant {
    fn from(variant: EchoVariant) -> Self {
        match variant {
            EchoVariant::First => pasarela_core::EchoVariant::First,
            EchoVariant::Second => pasarela_core::EchoVariant::Second,
        }
    }
}

fn js_error(err: BridgeError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Bridge over the optionally-installed `window.nostr` extension.
///
/// The extension is looked up once at construction; a page that
/// installs it later constructs a new bridge.
#[wasm_bindgen]
pub struct NostrBridge {
    adapter: ProviderAdapter<WebExtensionProvider, BrowserSleeper>,
}

#[wasm_bindgen]
impl NostrBridge {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            adapter: ProviderAdapter::new(WebExtensionProvider::detect(), BrowserSleeper),
        }
    }

    #[wasm_bindgen]
    pub fn log(&self, text: &str) {
        self.adapter.log(text);
    }

    #[wasm_bindgen(js_name = "echoSync")]
    pub fn echo_sync(&self, text: &str) -> String {
        self.adapter.echo_sync(text)
    }

    #[wasm_bindgen(js_name = "delayedEcho")]
    pub async fn delayed_echo(&self, text: &str, variant: EchoVariant) -> String {
        self.adapter.delayed_echo(text, variant.into()).await
    }

    #[wasm_bindgen(js_name = "delayedFailure")]
    pub async fn delayed_failure(&self, text: &str) -> Result<String, JsValue> {
        self.adapter.delayed_failure(text).await.map_err(js_error)
    }

    #[wasm_bindgen(js_name = "isProviderAvailable")]
    pub fn is_provider_available(&self) -> bool {
        self.adapter.is_provider_available()
    }

    #[wasm_bindgen]
    pub async fn enable(&self) -> Result<JsValue, JsValue> {
        let result = self.adapter.enable().await.map_err(js_error)?;
        serde_wasm_bindgen::to_value(&result).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    #[wasm_bindgen(js_name = "getPublicKey")]
    pub async fn get_public_key(&self) -> Result<String, JsValue> {
        self.adapter.get_public_key().await.map_err(js_error)
    }

    #[wasm_bindgen]
    pub async fn encrypt(&self, pubkey: &str, plaintext: &str) -> Result<String, JsValue> {
        self.adapter
            .encrypt(pubkey, plaintext)
            .await
            .map_err(js_error)
    }

    #[wasm_bindgen]
    pub async fn decrypt(&self, pubkey: &str, ciphertext: &str) -> Result<String, JsValue> {
        self.adapter
            .decrypt(pubkey, ciphertext)
            .await
            .map_err(js_error)
    }

    #[wasm_bindgen(js_name = "signEvent")]
    pub async fn sign_event(&self, event: JsValue) -> Result<String, JsValue> {
        let event = serde_wasm_bindgen::from_value(event)
            .map_err(|e| JsValue::from_str(&format!("Invalid event: {}", e)))?;
        self.adapter.sign_event(event).await.map_err(js_error)
    }
}

impl Default for NostrBridge {
    fn default() -> Self {
        Self::new()
    }
}
