//! ZapLink web front-end
//!
//! A Yew single-page app over the ZapLink REST API. Session state and view shaping
//! live in `zaplink-core`; this crate owns the browser glue and the components.

pub mod app;
pub mod auth;
pub mod clipboard;
pub mod components;
pub mod hooks;
pub mod pages;
pub mod routes;
pub mod services;
pub mod storage;
pub mod telemetry;

pub use app::{App, AppProps};
