//! # ghprofile
//!
//! A typed client for public GitHub user profiles and repositories.
//!
//! ## Features
//!
//! - **Generic Fetch**: one GET per call, decoded into any [`ApiModel`]
//! - **Closed Errors**: every failure is a [`FetchError`] kind, never a panic
//! - **Fixed Date Format**: `created_at` must match `yyyy-MM-ddTHH:mm:ssZZZZZ`
//! - **Key Strategies**: explicit field remapping or a snake_case → camelCase transform
//! - **Stubbed Transport**: canned responses and synthetic errors for tests
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use ghprofile::{Endpoint, GithubClient, User};
//!
//! #[tokio::main]
//! async fn main() -> ghprofile::Result<()> {
//!     let client = GithubClient::new()?;
//!
//!     let user: User = client.fetch(&Endpoint::profile("vinhnx")).await?;
//!     println!("{:?} joined {:?}", user.user_name, user.created_date);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! Endpoint ──▶ UrlBuilder ──▶ Transport (GET) ──▶ decode_model::<M> ──▶ Result<M>
//!                  │                 │                    │
//!             InvalidUrl         Transport             Decode
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Endpoints and URL construction
pub mod endpoint;

/// Fixed-pattern timestamp codec
pub mod date;

/// Response decoding and key strategies
pub mod decode;

/// User and repository models
pub mod models;

/// HTTP client, typed requests and transports
pub mod http;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use decode::{ApiModel, KeyStrategy};
pub use endpoint::{Endpoint, UrlBuilder};
pub use error::{ErrorKind, FetchError, Result};
pub use http::{ClientConfig, GithubClient, NetworkRequest, StubTransport, Transport};
pub use models::{Repository, SnakeCaseRepository, User};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
