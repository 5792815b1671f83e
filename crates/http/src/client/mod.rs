//! ZapLink HTTP client

pub mod auth;
pub mod error;
pub mod urls;

use error::ClientError;
use reqwest::{Client, ClientBuilder, header};
use std::rc::Rc;
use std::time::Duration;
use zaplink_core::{MemoryTokenStore, TokenStore};

/// ZapLink API client.
///
/// The bearer token is read from the token store on every request, so a login or
/// logout is picked up without rebuilding the client.
#[derive(Clone)]
pub struct ZaplinkClient {
    client: Client,
    api_base_url: String,
    auth_base_url: String,
    tokens: Rc<dyn TokenStore>,
}

impl ZaplinkClient {
    /// Create a new client with default configuration
    pub fn new(api_base_url: impl Into<String>) -> Result<Self, ClientError> {
        Self::builder().api_base_url(api_base_url).build()
    }

    /// Create a new client builder
    pub fn builder() -> ZaplinkClientBuilder {
        ZaplinkClientBuilder::default()
    }

    /// Base of every REST path
    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    pub fn auth_base_url(&self) -> &str {
        &self.auth_base_url
    }

    pub fn token_store(&self) -> &Rc<dyn TokenStore> {
        &self.tokens
    }

    /// Create a request builder with authentication
    pub fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.api_base_url, path);
        tracing::debug!("{method} {path}");
        let mut request = self.client.request(method, url);

        if let Some(token) = self.tokens.token() {
            request = request.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }

        request
    }

    /// Execute a request and decode the JSON body
    pub async fn execute<T: serde::de::DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        let response = Self::send(request).await?;
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Execute a request and return the raw body
    pub async fn execute_bytes(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<Vec<u8>, ClientError> {
        let response = Self::send(request).await?;
        Ok(response.bytes().await?.to_vec())
    }

    async fn send(request: reqwest::RequestBuilder) -> Result<reqwest::Response, ClientError> {
        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            Ok(response)
        } else {
            let body = response.text().await.unwrap_or_default();
            let err = ClientError::from_body(status, &body);
            tracing::warn!("Request failed with {status}: {err}");
            Err(err)
        }
    }
}

/// Builder for ZaplinkClient
#[derive(Default)]
pub struct ZaplinkClientBuilder {
    api_base_url: Option<String>,
    auth_base_url: Option<String>,
    tokens: Option<Rc<dyn TokenStore>>,
    timeout: Option<Duration>,
}

impl ZaplinkClientBuilder {
    /// Set the API base URL
    pub fn api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = Some(url.into());
        self
    }

    /// Set the OAuth base URL; defaults to the API base
    pub fn auth_base_url(mut self, url: impl Into<String>) -> Self {
        self.auth_base_url = Some(url.into());
        self
    }

    /// Set where the bearer token is read from
    pub fn token_store(mut self, tokens: Rc<dyn TokenStore>) -> Self {
        self.tokens = Some(tokens);
        self
    }

    /// Set the request timeout. Ignored in the browser, where fetch has no timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the client
    pub fn build(self) -> Result<ZaplinkClient, ClientError> {
        let api_base_url = self
            .api_base_url
            .ok_or_else(|| ClientError::Configuration("api_base_url is required".into()))?;

        // Ensure base URLs end without a trailing slash
        let api_base_url = api_base_url.trim_end_matches('/').to_string();
        let auth_base_url = self
            .auth_base_url
            .map_or_else(|| api_base_url.clone(), |url| url.trim_end_matches('/').to_string());

        #[allow(unused_mut)]
        let mut client_builder = ClientBuilder::new();

        #[cfg(not(target_arch = "wasm32"))]
        if let Some(timeout) = self.timeout {
            client_builder = client_builder.timeout(timeout);
        }

        let client = client_builder.build()?;

        Ok(ZaplinkClient {
            client,
            api_base_url,
            auth_base_url,
            tokens: self
                .tokens
                .unwrap_or_else(|| Rc::new(MemoryTokenStore::new())),
        })
    }
}
