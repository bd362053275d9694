//! Transports that carry a single GET
//!
//! A transport answers with the response body, `None` when there was no body,
//! or the error that stopped the request from completing.

use super::client::ClientConfig;
use crate::error::{BoxError, FetchError, Result};
use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Client;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::{debug, warn};
use url::Url;

/// Performs one GET request
#[async_trait]
pub trait Transport: Send + Sync {
    /// Fetch `url`, returning the body if there was one
    async fn get(&self, url: &Url) -> std::result::Result<Option<Bytes>, BoxError>;
}

// ============================================================================
// reqwest
// ============================================================================

/// Transport backed by a reqwest client
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Build a transport from client configuration
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let mut builder = Client::builder().user_agent(&config.user_agent);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder.build().map_err(FetchError::transport)?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn get(&self, url: &Url) -> std::result::Result<Option<Bytes>, BoxError> {
        let response = self.client.get(url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!(%url, status = status.as_u16(), "Request returned non-success status");
        }

        let body = response.bytes().await?;
        debug!(%url, status = status.as_u16(), bytes = body.len(), "Response received");

        Ok((!body.is_empty()).then_some(body))
    }
}

// ============================================================================
// Stub
// ============================================================================

/// Canned answer for a stubbed URL
#[derive(Debug, Clone)]
pub enum StubResponse {
    /// Respond with these bytes
    Body(Bytes),
    /// Complete without a body
    Empty,
    /// Fail with a synthetic error
    Failure { message: String, code: i64 },
}

/// Transport that answers from a table of stubbed URLs
///
/// Requests to URLs without a stub fail, so tests never reach the network.
#[derive(Debug, Default)]
pub struct StubTransport {
    routes: HashMap<String, StubResponse>,
    calls: AtomicUsize,
}

impl StubTransport {
    /// Create an empty stub table
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `url` with a JSON body
    #[must_use]
    pub fn json(self, url: impl Into<String>, body: impl Into<Bytes>) -> Self {
        self.stub(url, StubResponse::Body(body.into()))
    }

    /// Answer `url` with no body
    #[must_use]
    pub fn empty(self, url: impl Into<String>) -> Self {
        self.stub(url, StubResponse::Empty)
    }

    /// Fail requests to `url` with a synthetic error
    #[must_use]
    pub fn failure(self, url: impl Into<String>, message: impl Into<String>, code: i64) -> Self {
        self.stub(
            url,
            StubResponse::Failure {
                message: message.into(),
                code,
            },
        )
    }

    /// Register a response for `url`
    #[must_use]
    pub fn stub(mut self, url: impl Into<String>, response: StubResponse) -> Self {
        self.routes.insert(url.into(), response);
        self
    }

    /// Number of requests received so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Transport for StubTransport {
    async fn get(&self, url: &Url) -> std::result::Result<Option<Bytes>, BoxError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        match self.routes.get(url.as_str()) {
            Some(StubResponse::Body(body)) => Ok(Some(body.clone())),
            Some(StubResponse::Empty) => Ok(None),
            Some(StubResponse::Failure { message, code }) => {
                Err(FetchError::custom(message.clone(), *code).into())
            }
            None => Err(format!("no stub registered for {url}").into()),
        }
    }
}
