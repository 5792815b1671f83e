//! Browser tests for clipboard writes

#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;
use zaplink_core::CoreError;
use zaplink_frontend::clipboard::copy_to_clipboard;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
async fn write_resolves_or_reports_internal_error() {
    // Headless browsers may deny clipboard permission; a denial must surface as an error
    match copy_to_clipboard("https://zap.link/abc").await {
        Ok(()) => {}
        Err(e) => assert!(
            matches!(&e, CoreError::Internal { message } if message.starts_with("clipboard write rejected")),
            "unexpected error: {e:?}"
        ),
    }
}
