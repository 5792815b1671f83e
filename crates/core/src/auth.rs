//! Authentication state machine and session operations
//!
//! [`AuthState`] is a plain value with a pure transition function so the UI can keep
//! it in a reducer. [`AuthSession`] performs the side effects (token storage, profile
//! cache, OAuth redirect URLs) and reports their outcome as [`AuthAction`]s.

use crate::error::{CoreError, CoreResult};
use crate::session::SessionCache;
use crate::token::{TokenStore, redact};
use crate::types::UserProfile;
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Lifecycle of the signed-in state within one page session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthStatus {
    /// Nothing has been checked yet
    #[default]
    Uninitialized,
    /// A profile request is outstanding
    Loading,
    Authenticated,
    Anonymous,
}

/// Outcome of an auth operation, fed to [`AuthState::reduce`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthAction {
    /// A profile load has started
    Begin,
    ProfileLoaded(UserProfile),
    /// No token is stored
    NoToken,
    /// The backend rejected the token; credentials have been cleared
    Unauthorized,
    /// The profile could not be loaded for a reason other than authorization
    FetchFailed(String),
    LoggedOut,
}

/// Authentication state exposed to the UI
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AuthState {
    pub status: AuthStatus,
    pub profile: Option<UserProfile>,
    /// Last non-authorization failure, for display
    pub error: Option<String>,
    /// Status to fall back to if the current load fails
    resume: AuthStatus,
}

impl AuthState {
    pub const fn is_loading(&self) -> bool {
        matches!(self.status, AuthStatus::Uninitialized | AuthStatus::Loading)
    }

    pub const fn is_authenticated(&self) -> bool {
        matches!(self.status, AuthStatus::Authenticated)
    }

    /// Apply an action and return the next state
    #[must_use]
    pub fn reduce(&self, action: AuthAction) -> Self {
        match action {
            AuthAction::Begin => Self {
                status: AuthStatus::Loading,
                profile: self.profile.clone(),
                error: None,
                resume: if self.status == AuthStatus::Loading {
                    self.resume
                } else {
                    self.status
                },
            },
            AuthAction::ProfileLoaded(profile) => Self {
                status: AuthStatus::Authenticated,
                profile: Some(profile),
                error: None,
                resume: AuthStatus::Authenticated,
            },
            AuthAction::NoToken | AuthAction::Unauthorized | AuthAction::LoggedOut => {
                Self::anonymous()
            }
            AuthAction::FetchFailed(message) => {
                // Prior state stands; an unresolved start settles as anonymous
                let status = match self.resume {
                    AuthStatus::Uninitialized | AuthStatus::Loading => AuthStatus::Anonymous,
                    settled => settled,
                };
                Self {
                    status,
                    profile: self.profile.clone(),
                    error: Some(message),
                    resume: status,
                }
            }
        }
    }

    fn anonymous() -> Self {
        Self {
            status: AuthStatus::Anonymous,
            profile: None,
            error: None,
            resume: AuthStatus::Anonymous,
        }
    }
}

/// Supported OAuth identity providers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OAuthProvider {
    Google,
    GitHub,
}

impl OAuthProvider {
    pub const ALL: [Self; 2] = [Self::Google, Self::GitHub];

    /// Registration id used in the backend's authorization path
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Google => "google",
            Self::GitHub => "github",
        }
    }

    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Google => "Google",
            Self::GitHub => "GitHub",
        }
    }
}

impl fmt::Display for OAuthProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OAuthProvider {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|provider| provider.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CoreError::invalid_input(format!("Unsupported login provider: {s}")))
    }
}

/// What the caller asked `login` to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginRequest {
    /// Start the OAuth flow with a provider
    Provider(OAuthProvider),
    /// Accept a token handed back by the OAuth callback
    Token(String),
}

/// Result of [`AuthSession::login`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginStep {
    /// Navigate the browser to this URL
    Redirect(String),
    /// The token was stored and the profile load finished
    Settled(AuthAction),
    /// The token was stored but the caller went away before the profile arrived
    Cancelled,
}

/// Extract the `token` parameter from an OAuth callback query string
pub fn token_from_query(query: &str) -> CoreResult<String> {
    url::form_urlencoded::parse(query.trim_start_matches('?').as_bytes())
        .find(|(key, _)| key == "token")
        .map(|(_, value)| value.trim().to_string())
        .filter(|token| !token.is_empty())
        .ok_or(CoreError::MissingToken)
}

/// Authorization endpoint for `provider` on the auth server
pub fn authorization_url(auth_base_url: &str, provider: OAuthProvider) -> String {
    format!(
        "{}/oauth2/authorization/{}",
        auth_base_url.trim_end_matches('/'),
        provider.as_str()
    )
}

/// Session operations over the token store and the profile cache.
///
/// Owns the lifecycle of the profile cache: every credential change clears it.
pub struct AuthSession {
    tokens: Rc<dyn TokenStore>,
    cache: SessionCache,
    auth_base_url: String,
}

impl AuthSession {
    pub fn new(
        tokens: Rc<dyn TokenStore>,
        cache: SessionCache,
        auth_base_url: impl Into<String>,
    ) -> Self {
        Self {
            tokens,
            cache,
            auth_base_url: auth_base_url.into(),
        }
    }

    pub fn has_token(&self) -> bool {
        self.tokens.token().is_some()
    }

    pub const fn cache(&self) -> &SessionCache {
        &self.cache
    }

    /// Resolve the initial state: anonymous without a token, otherwise load the profile.
    ///
    /// Returns `None` when `cancel` fired before the outcome was known.
    pub async fn initialize(&self, cancel: &CancellationToken) -> Option<AuthAction> {
        if !self.has_token() {
            debug!("No stored token, starting anonymous");
            return Some(AuthAction::NoToken);
        }
        self.refresh(cancel).await
    }

    /// Load the profile through the cache and classify the outcome.
    ///
    /// A 401 clears the token and the cache even if `cancel` has fired.
    pub async fn refresh(&self, cancel: &CancellationToken) -> Option<AuthAction> {
        let result = self.cache.get_profile().await;

        let action = match result {
            Ok(profile) => AuthAction::ProfileLoaded(profile),
            Err(err) if err.is_unauthorized() => {
                warn!("Stored token rejected, signing out");
                self.clear_credentials();
                AuthAction::Unauthorized
            }
            Err(err) => {
                warn!("Failed to load profile: {err}");
                AuthAction::FetchFailed(err.to_string())
            }
        };

        if cancel.is_cancelled() {
            debug!("Profile load finished after cancellation, ignoring");
            return None;
        }
        Some(action)
    }

    /// Start an OAuth redirect, or store a callback token and load the profile
    pub async fn login(
        &self,
        request: LoginRequest,
        cancel: &CancellationToken,
    ) -> CoreResult<LoginStep> {
        match request {
            LoginRequest::Provider(provider) => {
                info!("Starting {} login", provider.display_name());
                Ok(LoginStep::Redirect(authorization_url(
                    &self.auth_base_url,
                    provider,
                )))
            }
            LoginRequest::Token(token) => {
                self.tokens.set_token(&token)?;
                self.cache.clear();
                info!("Accepted login token {}", redact(&token));
                Ok(self
                    .refresh(cancel)
                    .await
                    .map_or(LoginStep::Cancelled, LoginStep::Settled))
            }
        }
    }

    /// Clear the token and the cached profile
    pub fn logout(&self) -> AuthAction {
        self.clear_credentials();
        info!("Signed out");
        AuthAction::LoggedOut
    }

    /// Logout triggered by a 401 from any API call
    pub fn force_logout(&self) -> AuthAction {
        warn!("Session rejected by the server, signing out");
        self.clear_credentials();
        AuthAction::Unauthorized
    }

    fn clear_credentials(&self) {
        self.tokens.clear_token();
        self.cache.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FetchError;
    use crate::session::{MockProfileSource, ProfileSource};
    use crate::time::ManualClock;
    use crate::token::{MemoryTokenStore, MockTokenStore};
    use chrono::Duration;

    fn profile() -> UserProfile {
        UserProfile {
            id: "github#42".into(),
            name: "Grace Hopper".into(),
            email: "grace@example.com".into(),
            picture_url: None,
            provider: "github".into(),
            provider_id: Some("42".into()),
            role: "USER".into(),
            last_login: None,
        }
    }

    fn session_with(
        tokens: Rc<dyn TokenStore>,
        source: impl ProfileSource + 'static,
    ) -> AuthSession {
        let cache = SessionCache::with_clock(
            Rc::new(source),
            Rc::new(ManualClock::default()),
            Duration::seconds(10),
        );
        AuthSession::new(tokens, cache, "http://localhost:8080/")
    }

    #[test]
    fn test_reduce_happy_path() {
        let state = AuthState::default();
        assert!(state.is_loading());

        let state = state.reduce(AuthAction::Begin);
        assert_eq!(state.status, AuthStatus::Loading);

        let state = state.reduce(AuthAction::ProfileLoaded(profile()));
        assert!(state.is_authenticated());
        assert!(!state.is_loading());
        assert_eq!(state.profile, Some(profile()));
    }

    #[test]
    fn test_reduce_fetch_failure_restores_prior_state() {
        let signed_in = AuthState::default()
            .reduce(AuthAction::Begin)
            .reduce(AuthAction::ProfileLoaded(profile()));

        let state = signed_in
            .reduce(AuthAction::Begin)
            .reduce(AuthAction::FetchFailed("timeout".into()));
        assert!(state.is_authenticated());
        assert_eq!(state.profile, Some(profile()));
        assert_eq!(state.error.as_deref(), Some("timeout"));

        let fresh = AuthState::default()
            .reduce(AuthAction::Begin)
            .reduce(AuthAction::FetchFailed("timeout".into()));
        assert_eq!(fresh.status, AuthStatus::Anonymous);
        assert!(!fresh.is_loading());
    }

    #[test]
    fn test_reduce_unauthorized_and_logout_reset() {
        let signed_in = AuthState::default().reduce(AuthAction::ProfileLoaded(profile()));

        for action in [AuthAction::Unauthorized, AuthAction::LoggedOut] {
            let state = signed_in.reduce(action);
            assert_eq!(state.status, AuthStatus::Anonymous);
            assert!(state.profile.is_none());
            assert!(!state.is_authenticated());
        }
    }

    #[test]
    fn test_token_from_query() {
        assert_eq!(
            token_from_query("?token=abc.def.ghi&state=x").unwrap(),
            "abc.def.ghi"
        );
        assert_eq!(token_from_query("token=a%2Bb").unwrap(), "a+b");
        assert_eq!(token_from_query("?state=x"), Err(CoreError::MissingToken));
        assert_eq!(token_from_query("?token="), Err(CoreError::MissingToken));
    }

    #[test]
    fn test_provider_parse_and_redirect_url() {
        assert_eq!("GitHub".parse::<OAuthProvider>().unwrap(), OAuthProvider::GitHub);
        assert!("facebook".parse::<OAuthProvider>().is_err());
        assert_eq!(
            authorization_url("http://localhost:8080/", OAuthProvider::Google),
            "http://localhost:8080/oauth2/authorization/google"
        );
    }

    #[tokio::test]
    async fn test_initialize_without_token_is_anonymous() {
        let mut source = MockProfileSource::new();
        source.expect_fetch_profile().never();
        let session = session_with(Rc::new(MemoryTokenStore::new()), source);

        let action = session.initialize(&CancellationToken::new()).await;
        assert_eq!(action, Some(AuthAction::NoToken));
    }

    #[tokio::test]
    async fn test_initialize_loads_profile() {
        let mut source = MockProfileSource::new();
        source
            .expect_fetch_profile()
            .times(1)
            .returning(|| Ok(profile()));
        let session = session_with(Rc::new(MemoryTokenStore::with_token("tok")), source);

        let action = session.initialize(&CancellationToken::new()).await;
        assert_eq!(action, Some(AuthAction::ProfileLoaded(profile())));
    }

    #[tokio::test]
    async fn test_unauthorized_profile_clears_token() {
        let tokens = Rc::new(MemoryTokenStore::with_token("expired-token"));
        let mut source = MockProfileSource::new();
        source
            .expect_fetch_profile()
            .returning(|| Err(FetchError::Unauthorized("Unauthorized".into())));
        let session = session_with(tokens.clone(), source);

        let action = session.initialize(&CancellationToken::new()).await;
        assert_eq!(action, Some(AuthAction::Unauthorized));
        assert!(tokens.token().is_none());

        let state = AuthState::default()
            .reduce(AuthAction::Begin)
            .reduce(action.unwrap());
        assert!(!state.is_authenticated());
    }

    #[tokio::test]
    async fn test_other_errors_keep_token() {
        let tokens = Rc::new(MemoryTokenStore::with_token("tok"));
        let mut source = MockProfileSource::new();
        source
            .expect_fetch_profile()
            .returning(|| Err(FetchError::Failed("Server error 502".into())));
        let session = session_with(tokens.clone(), source);

        let action = session.initialize(&CancellationToken::new()).await;
        assert_eq!(
            action,
            Some(AuthAction::FetchFailed("Server error 502".into()))
        );
        assert_eq!(tokens.token().as_deref(), Some("tok"));
    }

    #[tokio::test]
    async fn test_cancelled_load_reports_nothing() {
        let mut source = MockProfileSource::new();
        source
            .expect_fetch_profile()
            .returning(|| Ok(profile()));
        let session = session_with(Rc::new(MemoryTokenStore::with_token("tok")), source);

        let cancel = CancellationToken::new();
        cancel.cancel();
        assert_eq!(session.initialize(&cancel).await, None);
    }

    #[tokio::test]
    async fn test_logout_clears_cache_and_token() {
        let tokens = Rc::new(MemoryTokenStore::with_token("tok"));
        let mut source = MockProfileSource::new();
        source
            .expect_fetch_profile()
            .times(1)
            .returning(|| Ok(profile()));
        let session = session_with(tokens.clone(), source);

        let loaded = session.refresh(&CancellationToken::new()).await.unwrap();
        let state = AuthState::default().reduce(loaded);
        assert!(state.is_authenticated());
        assert!(session.cache().cached().is_some());

        let state = state.reduce(session.logout());
        assert!(!state.is_authenticated());
        assert!(tokens.token().is_none());
        assert!(session.cache().cached().is_none());
    }

    #[tokio::test]
    async fn test_force_logout_after_api_rejection() {
        let tokens = Rc::new(MemoryTokenStore::with_token("tok"));
        let mut source = MockProfileSource::new();
        source
            .expect_fetch_profile()
            .times(1)
            .returning(|| Ok(profile()));
        let session = session_with(tokens.clone(), source);

        let loaded = session.refresh(&CancellationToken::new()).await.unwrap();
        let state = AuthState::default().reduce(loaded);
        assert!(session.cache().cached().is_some());

        // A 401 from some other endpoint, e.g. the link list
        let action = session.force_logout();
        assert_eq!(action, AuthAction::Unauthorized);
        assert!(tokens.token().is_none());
        assert!(session.cache().cached().is_none());

        let state = state.reduce(action);
        assert!(!state.is_authenticated());
        assert!(state.profile.is_none());
    }

    #[tokio::test]
    async fn test_login_with_provider_redirects() {
        let mut tokens = MockTokenStore::new();
        tokens.expect_set_token().never();
        let mut source = MockProfileSource::new();
        source.expect_fetch_profile().never();
        let session = session_with(Rc::new(tokens), source);

        let step = session
            .login(
                LoginRequest::Provider(OAuthProvider::GitHub),
                &CancellationToken::new(),
            )
            .await
            .unwrap();
        assert_eq!(
            step,
            LoginStep::Redirect("http://localhost:8080/oauth2/authorization/github".into())
        );
    }

    #[tokio::test]
    async fn test_login_with_token_stores_and_loads_profile() {
        let tokens = Rc::new(MemoryTokenStore::new());
        let mut source = MockProfileSource::new();
        source
            .expect_fetch_profile()
            .times(1)
            .returning(|| Ok(profile()));
        let session = session_with(tokens.clone(), source);

        let step = session
            .login(
                LoginRequest::Token("callback-token".into()),
                &CancellationToken::new(),
            )
            .await
            .unwrap();
        assert_eq!(step, LoginStep::Settled(AuthAction::ProfileLoaded(profile())));
        assert_eq!(tokens.token().as_deref(), Some("callback-token"));
    }

    #[tokio::test]
    async fn test_login_propagates_storage_failure() {
        let mut tokens = MockTokenStore::new();
        tokens
            .expect_set_token()
            .returning(|_| Err(CoreError::storage_error("quota exceeded")));
        let mut source = MockProfileSource::new();
        source.expect_fetch_profile().never();
        let session = session_with(Rc::new(tokens), source);

        let result = session
            .login(LoginRequest::Token("tok".into()), &CancellationToken::new())
            .await;
        assert_eq!(result, Err(CoreError::storage_error("quota exceeded")));
    }
}
