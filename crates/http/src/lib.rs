//! ZapLink HTTP module providing the REST client used by the web front-end
//!
//! Every request carries the bearer token held by the shared [`zaplink_core::TokenStore`],
//! and failed responses are mapped to [`client::error::ClientError`] with the backend's
//! message preserved.

#[cfg(feature = "client")]
pub mod client;

#[cfg(feature = "client")]
pub use client::{ZaplinkClient, ZaplinkClientBuilder, error::ClientError};
