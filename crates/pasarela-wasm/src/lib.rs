//! pasarela-wasm: browser bindings for the pasarela NIP-07 bridge
//!
//! Exposes the bridge operation table to a JS host and backs the
//! provider seam with the `window.nostr` extension when one is
//! installed. Absence of the extension is a valid, detectable state.

use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
pub mod bridge;
#[cfg(target_arch = "wasm32")]
pub mod extension;
#[cfg(target_arch = "wasm32")]
pub mod time;

#[cfg(target_arch = "wasm32")]
pub use bridge::{EchoVariant, NostrBridge};
#[cfg(target_arch = "wasm32")]
pub use extension::WebExtensionProvider;
#[cfg(target_arch = "wasm32")]
pub use time::BrowserSleeper;

#[wasm_bindgen(start)]
pub fn start() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("pasarela-wasm initialized");
}
