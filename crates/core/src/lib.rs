//! ZapLink client core: wire types, session state and view shaping
//!
//! Nothing here touches the browser directly. Storage, time and the network sit behind
//! the [`TokenStore`], [`Clock`] and [`ProfileSource`] traits so the state machine and
//! cache run the same way in the browser and in native tests.

pub mod analytics;
pub mod auth;
pub mod config;
pub mod error;
pub mod links;
pub mod preview;
pub mod request;
pub mod session;
pub mod share;
pub mod time;
pub mod token;
pub mod types;

pub use auth::{
    AuthAction, AuthSession, AuthState, AuthStatus, LoginRequest, LoginStep, OAuthProvider,
    token_from_query,
};
pub use config::{AppConfig, Profile};
pub use request::{RequestSequence, RequestTicket};
pub use error::{CoreError, CoreResult, ErrorContext, FetchError};
pub use session::{ProfileSource, SessionCache};
pub use time::{Clock, SystemClock};
pub use token::{AUTH_TOKEN_KEY, MemoryTokenStore, TokenStore};
pub use types::{
    Analytics, AnalyticsRange, BulkOutcome, BulkShortenEntry, BulkShortenResponse,
    MessageResponse, ShortUrl, ShortenRequest, ShortenResponse, UrlListResponse, UrlSummary,
    UserProfile,
};
