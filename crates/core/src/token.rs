//! Persistence seam for the bearer token

use crate::error::{CoreError, CoreResult};
use std::cell::RefCell;

/// Local-storage key holding the bearer token
pub const AUTH_TOKEN_KEY: &str = "auth_token";

/// Where the bearer token lives between page loads.
///
/// The browser build stores it in `localStorage`; tests use [`MemoryTokenStore`].
#[cfg_attr(test, mockall::automock)]
pub trait TokenStore {
    /// Current token, if any
    fn token(&self) -> Option<String>;

    /// Persist a new token, replacing any previous one
    fn set_token(&self, token: &str) -> CoreResult<()>;

    /// Forget the token
    fn clear_token(&self);
}

/// In-memory token store
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: RefCell<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: RefCell::new(Some(token.into())),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn token(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn set_token(&self, token: &str) -> CoreResult<()> {
        let token = token.trim();
        if token.is_empty() {
            return Err(CoreError::MissingToken);
        }
        *self.token.borrow_mut() = Some(token.to_string());
        Ok(())
    }

    fn clear_token(&self) {
        self.token.borrow_mut().take();
    }
}

/// Shortened form of a token that is safe to put in logs
pub fn redact(token: &str) -> String {
    let prefix: String = token.chars().take(8).collect();
    if prefix.len() < token.len() {
        format!("{prefix}...")
    } else {
        "***".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemoryTokenStore::new();
        assert!(store.token().is_none());

        store.set_token("eyJhbGciOiJIUzI1NiJ9.payload.sig").unwrap();
        assert_eq!(
            store.token().as_deref(),
            Some("eyJhbGciOiJIUzI1NiJ9.payload.sig")
        );

        store.clear_token();
        assert!(store.token().is_none());
    }

    #[test]
    fn test_memory_store_rejects_blank_token() {
        let store = MemoryTokenStore::with_token("existing");
        assert_eq!(store.set_token("   "), Err(CoreError::MissingToken));
        assert_eq!(store.token().as_deref(), Some("existing"));
    }

    #[test]
    fn test_redact_hides_most_of_the_token() {
        assert_eq!(redact("eyJhbGciOiJIUzI1NiJ9"), "eyJhbGci...");
        assert_eq!(redact("short"), "***");
    }
}
