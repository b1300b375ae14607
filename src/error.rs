//! Error types for gist resolution.
//!
//! This module defines [`GistError`], the primary error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Identifier problems are detected before any request is issued
//!   ([`GistError::InvalidIdentifier`])
//! - Every network-facing error carries the URL that was attempted
//! - Nothing here retries; callers decide what to do with a failure

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for gist resolution.
#[derive(Debug, Error)]
pub enum GistError {
    /// The identifier is malformed for the provider it was classified as.
    #[error("Invalid identifier '{id}': {reason}")]
    InvalidIdentifier { id: String, reason: String },

    /// The provider answered, but the payload lacks the expected structure.
    #[error("Unexpected response from {url}: {message}")]
    ProviderShape { url: String, message: String },

    /// Network failure or non-success status.
    #[error("Could not load gist from {url}: {message}")]
    Fetch { url: String, message: String },

    /// Internal cache invariant was violated.
    #[error("Cache consistency failure for '{key}': {message}")]
    CacheConsistency { key: String, message: String },

    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GistError {
    /// The URL this error refers to, if it came from a provider request.
    pub fn url(&self) -> Option<&str> {
        match self {
            Self::ProviderShape { url, .. } | Self::Fetch { url, .. } => Some(url),
            _ => None,
        }
    }
}

/// Result type alias for gist operations.
pub type Result<T> = std::result::Result<T, GistError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_identifier_displays_id_and_reason() {
        let err = GistError::InvalidIdentifier {
            id: "zzz".into(),
            reason: "not a gist id".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("zzz"));
        assert!(msg.contains("not a gist id"));
    }

    #[test]
    fn fetch_error_displays_url() {
        let err = GistError::Fetch {
            url: "https://api.github.com/gists/abc12".into(),
            message: "HTTP 404 Not Found".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("https://api.github.com/gists/abc12"));
        assert!(msg.contains("404"));
    }

    #[test]
    fn provider_shape_displays_url_and_message() {
        let err = GistError::ProviderShape {
            url: "https://example.com/x".into(),
            message: "no files".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("https://example.com/x"));
        assert!(msg.contains("no files"));
    }

    #[test]
    fn url_accessor_covers_provider_errors() {
        let fetch = GistError::Fetch {
            url: "http://a".into(),
            message: "down".into(),
        };
        let shape = GistError::ProviderShape {
            url: "http://b".into(),
            message: "bad".into(),
        };
        let invalid = GistError::InvalidIdentifier {
            id: "x".into(),
            reason: "y".into(),
        };

        assert_eq!(fetch.url(), Some("http://a"));
        assert_eq!(shape.url(), Some("http://b"));
        assert_eq!(invalid.url(), None);
    }

    #[test]
    fn config_not_found_displays_path() {
        let err = GistError::ConfigNotFound {
            path: PathBuf::from("/etc/graphgist.yml"),
        };
        assert!(err.to_string().contains("/etc/graphgist.yml"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: GistError = io_err.into();
        assert!(matches!(err, GistError::Io(_)));
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(GistError::CacheConsistency {
                key: "k".into(),
                message: "m".into(),
            })
        }
        assert!(returns_error().is_err());
    }
}
