//! Bearer token persistence in `localStorage`

use web_sys::Storage;
use zaplink_core::error::{CoreError, CoreResult};
use zaplink_core::token::{AUTH_TOKEN_KEY, TokenStore};

/// Token store backed by the browser's local storage under [`AUTH_TOKEN_KEY`].
///
/// The token is stored as the raw string so other tabs and tools can read it.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageTokenStore;

/// Get localStorage
fn get_local_storage() -> Option<Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl TokenStore for LocalStorageTokenStore {
    fn token(&self) -> Option<String> {
        get_local_storage()
            .and_then(|storage| storage.get_item(AUTH_TOKEN_KEY).ok().flatten())
            .filter(|token| !token.trim().is_empty())
    }

    fn set_token(&self, token: &str) -> CoreResult<()> {
        let token = token.trim();
        if token.is_empty() {
            return Err(CoreError::MissingToken);
        }
        let storage = get_local_storage()
            .ok_or_else(|| CoreError::storage_error("localStorage is not available"))?;
        storage
            .set_item(AUTH_TOKEN_KEY, token)
            .map_err(|e| CoreError::storage_error(format!("{e:?}")))
    }

    fn clear_token(&self) {
        if let Some(storage) = get_local_storage() {
            let _ = storage.remove_item(AUTH_TOKEN_KEY);
        }
    }
}
