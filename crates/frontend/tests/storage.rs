//! Browser tests for local storage token persistence

#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;
use zaplink_core::{AUTH_TOKEN_KEY, CoreError, TokenStore};
use zaplink_frontend::storage::LocalStorageTokenStore;

wasm_bindgen_test_configure!(run_in_browser);

fn raw_item() -> Option<String> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|s| s.get_item(AUTH_TOKEN_KEY).ok().flatten())
}

#[wasm_bindgen_test]
fn token_is_stored_as_raw_string() {
    let store = LocalStorageTokenStore;
    store.clear_token();
    assert_eq!(store.token(), None);

    store.set_token("  header.payload.sig ").unwrap();
    assert_eq!(store.token().as_deref(), Some("header.payload.sig"));
    assert_eq!(raw_item().as_deref(), Some("header.payload.sig"));

    store.clear_token();
    assert_eq!(store.token(), None);
    assert_eq!(raw_item(), None);
}

#[wasm_bindgen_test]
fn blank_token_is_rejected() {
    let store = LocalStorageTokenStore;
    store.clear_token();

    assert_eq!(store.set_token("   "), Err(CoreError::MissingToken));
    assert_eq!(store.token(), None);
}
