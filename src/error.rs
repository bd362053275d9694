//! Error types for ghprofile
//!
//! Every failure of a fetch is one of the four [`FetchError`] kinds. Callers
//! branch on [`FetchError::kind`] and show [`FetchError::message`] to users.

use thiserror::Error;

/// Boxed error used at the transport seam
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The error type returned by every fetch
#[derive(Error, Debug)]
pub enum FetchError {
    /// The endpoint could not be turned into a URL
    #[error("unable to make GitHub URL request with username: {username}")]
    InvalidUrl { username: String },

    /// The request did not complete, or completed without a body
    #[error("transport error: {source}")]
    Transport {
        #[source]
        source: BoxError,
    },

    /// A body was received but could not be decoded into the model
    #[error("decode error: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
    },

    /// Synthetic error supplied by the caller
    #[error("custom error. Message: {message}, code: {code}")]
    Custom { message: String, code: i64 },
}

/// Discriminant of [`FetchError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidUrl,
    Transport,
    Decode,
    Custom,
}

impl FetchError {
    /// Create an invalid URL error
    pub fn invalid_url(username: impl Into<String>) -> Self {
        Self::InvalidUrl {
            username: username.into(),
        }
    }

    /// Create a transport error from any underlying cause
    pub fn transport(source: impl Into<BoxError>) -> Self {
        Self::Transport {
            source: source.into(),
        }
    }

    /// Create a custom error
    pub fn custom(message: impl Into<String>, code: i64) -> Self {
        Self::Custom {
            message: message.into(),
            code,
        }
    }

    /// The kind of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidUrl { .. } => ErrorKind::InvalidUrl,
            Self::Transport { .. } => ErrorKind::Transport,
            Self::Decode { .. } => ErrorKind::Decode,
            Self::Custom { .. } => ErrorKind::Custom,
        }
    }

    /// Human-readable message
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(source: serde_json::Error) -> Self {
        Self::Decode { source }
    }
}

/// Result type alias for ghprofile
pub type Result<T> = std::result::Result<T, FetchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FetchError::invalid_url("vinhnx");
        assert_eq!(
            err.message(),
            "unable to make GitHub URL request with username: vinhnx"
        );

        let err = FetchError::custom("not found", 404);
        assert_eq!(err.message(), "custom error. Message: not found, code: 404");
    }

    #[test]
    fn test_error_kind() {
        assert_eq!(FetchError::invalid_url("a").kind(), ErrorKind::InvalidUrl);
        assert_eq!(FetchError::custom("x", 1).kind(), ErrorKind::Custom);
        assert_eq!(
            FetchError::transport(FetchError::custom("x", 1)).kind(),
            ErrorKind::Transport
        );

        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert_eq!(FetchError::from(json_err).kind(), ErrorKind::Decode);
    }

    #[test]
    fn test_transport_keeps_source() {
        use std::error::Error as _;

        let err = FetchError::transport(FetchError::custom("offline", -1009));
        let source = err.source().unwrap();
        assert_eq!(source.to_string(), "custom error. Message: offline, code: -1009");
        assert!(err.message().starts_with("transport error: "));
    }
}
