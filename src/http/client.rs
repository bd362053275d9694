//! GitHub client and the generic fetch operation
//!
//! Each fetch is independent: it resolves the endpoint, performs exactly one
//! GET through the transport and decodes the body. The client holds only
//! immutable configuration, so it can be shared across concurrent fetches.

use super::transport::{ReqwestTransport, Transport};
use crate::decode::{decode_model, ApiModel};
use crate::endpoint::{Endpoint, UrlBuilder, BASE_PATH, HOST, SCHEME};
use crate::error::{FetchError, Result};
use crate::models::{Repository, User};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// Configuration for the GitHub client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL that usernames are appended to
    pub base_url: String,
    /// Request timeout; `None` leaves it to the transport
    pub timeout: Option<Duration>,
    /// User agent string
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: format!("{SCHEME}://{HOST}{BASE_PATH}"),
            timeout: None,
            user_agent: format!("ghprofile/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    /// Create a new config builder
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }
}

/// Builder for client config
#[derive(Default)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = Some(timeout);
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Build the config
    pub fn build(self) -> ClientConfig {
        self.config
    }
}

/// Client for the GitHub users API
#[derive(Clone)]
pub struct GithubClient {
    urls: UrlBuilder,
    transport: Arc<dyn Transport>,
}

impl GithubClient {
    /// Create a client for the public GitHub API
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let transport = ReqwestTransport::new(&config)?;
        Ok(Self::with_transport(&config, transport))
    }

    /// Create a client over any transport
    pub fn with_transport(config: &ClientConfig, transport: impl Transport + 'static) -> Self {
        Self {
            urls: UrlBuilder::from_base(&config.base_url),
            transport: Arc::new(transport),
        }
    }

    /// Resolve an endpoint against this client's base URL
    pub fn url_for(&self, endpoint: &Endpoint) -> Option<Url> {
        endpoint.resolve(&self.urls)
    }

    /// Fetch an endpoint and decode the body into `M`
    ///
    /// Errors:
    /// - [`FetchError::InvalidUrl`] when the endpoint does not resolve; no request is made
    /// - [`FetchError::Transport`] when the request fails or returns no body
    /// - [`FetchError::Decode`] when the body does not decode into `M`
    pub async fn fetch<M: ApiModel>(&self, endpoint: &Endpoint) -> Result<M> {
        let Some(url) = self.url_for(endpoint) else {
            warn!(%endpoint, "Unable to build request URL");
            return Err(FetchError::invalid_url(endpoint.username()));
        };

        debug!(%endpoint, %url, "GET");

        let body = match self.transport.get(&url).await {
            Ok(Some(body)) => body,
            Ok(None) => {
                warn!(%url, "Response has no body");
                return Err(FetchError::transport("response body is empty"));
            }
            Err(e) => {
                warn!(%url, error = %e, "Request failed");
                return Err(FetchError::transport(e));
            }
        };

        decode_model(&body).inspect_err(|e| warn!(%url, error = %e, "Failed to decode response"))
    }

    /// Fetch a user's profile
    pub async fn user(&self, username: &str) -> Result<User> {
        self.fetch(&Endpoint::profile(username)).await
    }

    /// Fetch a user's repositories
    pub async fn repos(&self, username: &str) -> Result<Vec<Repository>> {
        self.fetch(&Endpoint::repos(username)).await
    }
}

impl std::fmt::Debug for GithubClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GithubClient")
            .field("base_url", &self.urls.base().map(Url::as_str))
            .finish_non_exhaustive()
    }
}
