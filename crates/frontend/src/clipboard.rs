//! Clipboard access through the async Clipboard API

use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use zaplink_core::error::{CoreError, CoreResult};

fn js_error(context: &str, err: &JsValue) -> CoreError {
    CoreError::internal_error(format!("{context}: {err:?}"))
}

/// Write `text` to the system clipboard
pub async fn copy_to_clipboard(text: &str) -> CoreResult<()> {
    let window =
        web_sys::window().ok_or_else(|| CoreError::internal_error("No window available"))?;
    let clipboard = window.navigator().clipboard();

    JsFuture::from(clipboard.write_text(text))
        .await
        .map_err(|e| js_error("clipboard write rejected", &e))?;

    tracing::debug!("Copied {} characters to clipboard", text.len());
    Ok(())
}
