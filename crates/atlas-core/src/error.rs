//! Error types for the Atlas client.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::forms::ValidationError;

/// A shared error type for the entire Atlas client.
///
/// Local validation failures, backend-reported failures and transport failures
/// all flow through this type so that views can turn any of them into a single
/// inline message via [`AtlasError::user_message`].
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AtlasError {
    /// A form or input was rejected before any network call was made.
    #[error("Validation error: {0}")]
    Validation(ValidationError),

    /// The backend answered with a non-success status.
    ///
    /// `detail` carries the human-readable message from the response body
    /// when the backend supplied one as a string.
    #[error("Backend error (status {status}): {}", .detail.as_deref().unwrap_or("no detail"))]
    Backend { status: u16, detail: Option<String> },

    /// The request never produced a response (connection refused, DNS, etc.).
    #[error("Transport error: {0}")]
    Transport(String),

    /// A response or file body could not be decoded.
    #[error("Decode error: {format} - {message}")]
    Decode {
        format: String, // "JSON", "TOML", ...
        message: String,
    },

    /// Key-value storage failure.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },
}

impl AtlasError {
    /// Creates a Backend error
    pub fn backend(status: u16, detail: Option<String>) -> Self {
        Self::Backend { status, detail }
    }

    /// Creates a Transport error
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }

    /// Creates a Storage error
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage(message.into())
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates a Decode error for the given format.
    pub fn decode(format: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Decode {
            format: format.into(),
            message: message.into(),
        }
    }

    /// Check if this is a local validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this error came back from the backend
    pub fn is_backend(&self) -> bool {
        matches!(self, Self::Backend { .. })
    }

    /// Check if this is a transport error
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// Returns the backend-supplied detail message, if any.
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Backend { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    /// Message to show the user inline.
    ///
    /// Validation failures show their own message, backend failures show the
    /// backend detail verbatim when present. Everything else, including
    /// transport failures, falls back to the per-action `fallback` string.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Validation(err) => err.to_string(),
            Self::Backend {
                detail: Some(detail),
                ..
            } => detail.clone(),
            _ => fallback.to_string(),
        }
    }
}

impl From<ValidationError> for AtlasError {
    fn from(err: ValidationError) -> Self {
        Self::Validation(err)
    }
}

impl From<std::io::Error> for AtlasError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for AtlasError {
    fn from(err: serde_json::Error) -> Self {
        Self::decode("JSON", err.to_string())
    }
}

impl From<toml::de::Error> for AtlasError {
    fn from(err: toml::de::Error) -> Self {
        Self::decode("TOML", err.to_string())
    }
}

impl From<toml::ser::Error> for AtlasError {
    fn from(err: toml::ser::Error) -> Self {
        Self::decode("TOML", err.to_string())
    }
}

/// A type alias for `Result<T, AtlasError>`.
pub type Result<T> = std::result::Result<T, AtlasError>;
