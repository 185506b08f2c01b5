//! Browser smoke tests for the exported bridge.
//!
//! Run with `wasm-pack test --headless --firefox crates/pasarela-wasm`.

#![cfg(target_arch = "wasm32")]

use js_sys::{Function, Object, Reflect};
use pasarela_wasm::{EchoVariant, NostrBridge};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn clear_extension() {
    let window = web_sys::window().unwrap();
    let _ = Reflect::delete_property(&window, &"nostr".into());
}

/// Install a `window.nostr` stand-in whose methods resolve with canned
/// values mirroring their inputs.
fn install_stub_extension() {
    let nostr = Object::new();

    let get_public_key = Function::new_no_args("return Promise.resolve('npub-stub');");
    Reflect::set(&nostr, &"getPublicKey".into(), &get_public_key).unwrap();

    let sign_event = Function::new_with_args(
        "event",
        "return Promise.resolve({ kind: event.kind, content: event.content, sig: 'abc123' });",
    );
    Reflect::set(&nostr, &"signEvent".into(), &sign_event).unwrap();

    let nip04 = Object::new();
    let encrypt = Function::new_with_args(
        "pubkey, plaintext",
        "return Promise.resolve('ENC(' + plaintext + ')');",
    );
    let decrypt = Function::new_with_args(
        "pubkey, ciphertext",
        "return Promise.resolve('DEC(' + ciphertext + ')');",
    );
    Reflect::set(&nip04, &"encrypt".into(), &encrypt).unwrap();
    Reflect::set(&nip04, &"decrypt".into(), &decrypt).unwrap();
    Reflect::set(&nostr, &"nip04".into(), &nip04).unwrap();

    let window = web_sys::window().unwrap();
    Reflect::set(&window, &"nostr".into(), &nostr).unwrap();
}

#[wasm_bindgen_test]
fn echo_sync_prefixes_input() {
    let bridge = NostrBridge::new();
    assert_eq!(bridge.echo_sync("hola"), "paso por js: hola");
}

#[wasm_bindgen_test]
async fn delayed_echo_resolves_with_variant_prefix() {
    let bridge = NostrBridge::new();
    assert_eq!(
        bridge.delayed_echo("hola", EchoVariant::First).await,
        "paso por js1: hola"
    );
}

#[wasm_bindgen_test]
async fn delayed_failure_rejects_with_message() {
    let bridge = NostrBridge::new();
    let err = bridge.delayed_failure("hola").await.unwrap_err();
    assert_eq!(err, JsValue::from_str("error: hola"));
}

#[wasm_bindgen_test]
fn provider_detection_tracks_window_nostr() {
    clear_extension();
    assert!(!NostrBridge::new().is_provider_available());

    install_stub_extension();
    assert!(NostrBridge::new().is_provider_available());
    clear_extension();
}

#[wasm_bindgen_test]
async fn delegating_operations_fail_without_extension() {
    clear_extension();
    let bridge = NostrBridge::new();
    assert!(bridge.get_public_key().await.is_err());
    assert!(bridge.encrypt("pub1", "hello").await.is_err());
}

#[wasm_bindgen_test]
async fn sign_event_returns_sig_from_stub() {
    install_stub_extension();
    let bridge = NostrBridge::new();

    let event =
        serde_wasm_bindgen::to_value(&serde_json::json!({ "kind": 1, "content": "hi" })).unwrap();
    assert_eq!(bridge.sign_event(event).await.unwrap(), "abc123");
    clear_extension();
}

#[wasm_bindgen_test]
async fn encrypt_round_trips_through_stub() {
    install_stub_extension();
    let bridge = NostrBridge::new();

    assert_eq!(bridge.encrypt("pub1", "hello").await.unwrap(), "ENC(hello)");
    assert_eq!(bridge.decrypt("pub1", "xyz").await.unwrap(), "DEC(xyz)");
    clear_extension();
}
