//! Typed requests
//!
//! A request type names the model it produces; fetching goes through the
//! shared [`GithubClient::fetch`].

use super::client::GithubClient;
use crate::decode::ApiModel;
use crate::endpoint::Endpoint;
use crate::error::Result;
use crate::models::{Repository, SnakeCaseRepository, User};
use async_trait::async_trait;

/// A GET request whose response decodes into `Model`
#[async_trait]
pub trait NetworkRequest: Send + Sync {
    /// Model the response decodes into
    type Model: ApiModel;

    /// Fetch `endpoint` and decode it into [`Self::Model`]
    async fn fetch_request(&self, client: &GithubClient, endpoint: &Endpoint) -> Result<Self::Model> {
        client.fetch::<Self::Model>(endpoint).await
    }
}

/// Profile request
#[derive(Debug, Clone, Copy, Default)]
pub struct UserRequest;

impl NetworkRequest for UserRequest {
    type Model = User;
}

/// Repository list request with explicit field remapping
#[derive(Debug, Clone, Copy, Default)]
pub struct ReposRequest;

impl NetworkRequest for ReposRequest {
    type Model = Vec<Repository>;
}

/// Repository list request using the snake_case key transform
#[derive(Debug, Clone, Copy, Default)]
pub struct SnakeCaseReposRequest;

impl NetworkRequest for SnakeCaseReposRequest {
    type Model = Vec<SnakeCaseRepository>;
}
