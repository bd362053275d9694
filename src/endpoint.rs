//! Endpoints and URL construction
//!
//! Resolution is pure: it never touches the network. A username always
//! lands in exactly one path segment, so `a/b` is encoded as `a%2Fb` rather
//! than adding a segment. The dot segments `.` and `..` do not resolve.

use std::fmt;
use std::sync::LazyLock;
use url::Url;

/// Scheme of the GitHub API
pub const SCHEME: &str = "https";

/// Host of the GitHub API
pub const HOST: &str = "api.github.com";

/// Path under which user resources live
pub const BASE_PATH: &str = "/users";

/// Builder for the default GitHub host, created on first use
static GITHUB: LazyLock<UrlBuilder> = LazyLock::new(UrlBuilder::github);

/// Builds endpoint URLs under a base URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlBuilder {
    base: Option<Url>,
}

impl UrlBuilder {
    /// Builder rooted at `https://api.github.com/users`
    pub fn github() -> Self {
        Self::from_parts(SCHEME, HOST, BASE_PATH)
    }

    /// Builder from separate scheme, host and path
    pub fn from_parts(scheme: &str, host: &str, path: &str) -> Self {
        let base = Url::parse(&format!("{scheme}://{host}"))
            .ok()
            .map(|mut url| {
                url.set_path(path);
                url
            });
        Self { base }
    }

    /// Builder from a full base URL such as `http://127.0.0.1:8080/users`
    pub fn from_base(base: &str) -> Self {
        Self {
            base: Url::parse(base).ok(),
        }
    }

    /// The base URL, if it parsed
    pub fn base(&self) -> Option<&Url> {
        self.base.as_ref()
    }

    /// `base/{username}`
    pub fn profile_url(&self, username: &str) -> Option<Url> {
        self.append(&[username])
    }

    /// `base/{username}/repos`
    pub fn repos_url(&self, username: &str) -> Option<Url> {
        self.append(&[username, "repos"])
    }

    fn append(&self, segments: &[&str]) -> Option<Url> {
        match segments.first() {
            None | Some(&("" | "." | "..")) => return None,
            Some(_) => {}
        }

        let mut url = self.base.clone()?;
        url.path_segments_mut()
            .ok()?
            .pop_if_empty()
            .extend(segments);
        Some(url)
    }
}

impl Default for UrlBuilder {
    fn default() -> Self {
        Self::github()
    }
}

/// A logical API target for one user
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// The user's public profile
    Profile { username: String },
    /// The user's public repositories
    Repos { username: String },
}

impl Endpoint {
    /// Profile endpoint for `username`
    pub fn profile(username: impl Into<String>) -> Self {
        Self::Profile {
            username: username.into(),
        }
    }

    /// Repos endpoint for `username`
    pub fn repos(username: impl Into<String>) -> Self {
        Self::Repos {
            username: username.into(),
        }
    }

    /// The username this endpoint targets
    pub fn username(&self) -> &str {
        match self {
            Self::Profile { username } | Self::Repos { username } => username,
        }
    }

    /// Resolve against a specific builder
    pub fn resolve(&self, builder: &UrlBuilder) -> Option<Url> {
        match self {
            Self::Profile { username } => builder.profile_url(username),
            Self::Repos { username } => builder.repos_url(username),
        }
    }

    /// Resolve against the public GitHub API
    pub fn url(&self) -> Option<Url> {
        self.resolve(&GITHUB)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Profile { username } => write!(f, "profile({username})"),
            Self::Repos { username } => write!(f, "repos({username})"),
        }
    }
}
