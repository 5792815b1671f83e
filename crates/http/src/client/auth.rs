//! Authentication API client methods

use super::{ClientError, ZaplinkClient};
use async_trait::async_trait;
use reqwest::Method;
use zaplink_core::auth::{OAuthProvider, authorization_url};
use zaplink_core::{FetchError, ProfileSource, UserProfile};

impl ZaplinkClient {
    /// Profile of the user the bearer token belongs to
    pub async fn get_profile(&self) -> Result<UserProfile, ClientError> {
        let req = self.request(Method::GET, "/user/profile");
        self.execute(req).await
    }

    /// Where to send the browser to sign in with `provider`
    pub fn authorization_url(&self, provider: OAuthProvider) -> String {
        authorization_url(self.auth_base_url(), provider)
    }
}

#[async_trait(?Send)]
impl ProfileSource for ZaplinkClient {
    async fn fetch_profile(&self) -> Result<UserProfile, FetchError> {
        self.get_profile().await.map_err(FetchError::from)
    }
}
