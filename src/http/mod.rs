//! HTTP client module
//!
//! Provides the generic fetch operation over a pluggable transport.
//!
//! # Features
//!
//! - **Generic Fetch**: `GithubClient::fetch::<M>` decodes into any [`ApiModel`](crate::decode::ApiModel)
//! - **Typed Requests**: `NetworkRequest` binds a request type to its model
//! - **Transport Seam**: reqwest in production, `StubTransport` in tests

mod client;
mod request;
mod transport;

pub use client::{ClientConfig, ClientConfigBuilder, GithubClient};
pub use request::{NetworkRequest, ReposRequest, SnakeCaseReposRequest, UserRequest};
pub use transport::{ReqwestTransport, StubResponse, StubTransport, Transport};
