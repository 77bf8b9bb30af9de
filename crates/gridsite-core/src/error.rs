//! Error types for Gridsite operations.
//!
//! This module provides the common `Error` type and `Result<T>` alias used
//! across all Gridsite crates. Uses `thiserror` for derive macros.

use std::path::Path;
use thiserror::Error;

/// Errors that can occur in Gridsite operations.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// I/O error carrying the offending path.
    #[error("I/O error at {path}: {source}")]
    IoAt {
        /// Path the operation failed on.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The remote source answered with a non-success status.
    #[error("Fetch failed ({status}): {body}")]
    Fetch {
        /// HTTP status text (e.g. "404 Not Found").
        status: String,
        /// Response body as returned by the source.
        body: String,
    },

    /// Transport-level HTTP failure, before any status was available.
    #[error("{context}: {source}")]
    Http {
        /// What the client was doing when the transport failed.
        context: String,
        /// Underlying transport error.
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Invalid data or format.
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl Error {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a fetch error from a status text and response body.
    pub fn fetch(status: impl Into<String>, body: impl Into<String>) -> Self {
        Self::Fetch {
            status: status.into(),
            body: body.into(),
        }
    }

    /// Create a transport error with its source attached.
    pub fn http_with_source(
        context: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Http {
            context: context.into(),
            source: Box::new(source),
        }
    }

    /// Create an invalid data error.
    pub fn invalid_data(msg: impl Into<String>) -> Self {
        Self::InvalidData(msg.into())
    }

    /// Create a serialization error.
    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::Serialization(msg.into())
    }

    /// Create an I/O error that names the path it failed on.
    pub fn io_with_path(source: std::io::Error, path: impl AsRef<Path>) -> Self {
        Self::IoAt {
            path: path.as_ref().display().to_string(),
            source,
        }
    }
}

/// Result type alias using Gridsite's Error type.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = Error::config("AIRTABLE_BASE_ID is not set");
        assert_eq!(
            err.to_string(),
            "Configuration error: AIRTABLE_BASE_ID is not set"
        );
    }

    #[test]
    fn test_fetch_error_carries_status_and_body() {
        let err = Error::fetch("403 Forbidden", "{\"error\":\"NOT_AUTHORIZED\"}");
        let text = err.to_string();
        assert!(text.contains("403 Forbidden"));
        assert!(text.contains("NOT_AUTHORIZED"));
    }

    #[test]
    fn test_io_error_from() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_io_with_path_names_path() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = Error::io_with_path(io, "/srv/content/index.json");
        assert!(err.to_string().contains("/srv/content/index.json"));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Error>();
    }
}
