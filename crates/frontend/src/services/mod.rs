//! Shared client-side services, provided to components through context

pub mod api_wrapper;

use crate::storage::LocalStorageTokenStore;
use std::rc::Rc;
use yew::prelude::*;
use zaplink_core::{AppConfig, AuthSession, SessionCache, SystemClock, TokenStore};
use zaplink_http::{ClientError, ZaplinkClient};

/// Everything a page needs to talk to the backend
#[derive(Clone)]
pub struct Services {
    pub config: Rc<AppConfig>,
    pub client: ZaplinkClient,
    pub session: Rc<AuthSession>,
}

impl PartialEq for Services {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.session, &other.session)
    }
}

impl Services {
    /// Wire the client, profile cache and auth session over browser storage
    pub fn new(config: Rc<AppConfig>) -> Result<Self, ClientError> {
        let tokens: Rc<dyn TokenStore> = Rc::new(LocalStorageTokenStore);

        let client = ZaplinkClient::builder()
            .api_base_url(config.api_base_url.as_str())
            .auth_base_url(config.auth_base_url.as_str())
            .token_store(Rc::clone(&tokens))
            .build()?;

        let cache = SessionCache::with_clock(
            Rc::new(client.clone()),
            Rc::new(SystemClock),
            config.profile_cache_ttl(),
        );
        let session = Rc::new(AuthSession::new(
            tokens,
            cache,
            config.auth_base_url.clone(),
        ));

        Ok(Self {
            config,
            client,
            session,
        })
    }
}

/// Hook to access the services
#[hook]
pub fn use_services() -> Services {
    use_context::<Services>()
        .expect("Services not found. Make sure to wrap your component with a Services provider")
}
