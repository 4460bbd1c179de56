//! Error types for the Yousign SDK.
//!
//! Every fallible operation returns [`YousignError`]. Configuration and
//! argument errors are raised before any network access; the remaining
//! variants come out of the request dispatcher.

use std::fmt;
use thiserror::Error;

/// Result type for Yousign operations.
pub type Result<T> = std::result::Result<T, YousignError>;

/// What was wrong with a configuration field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigErrorKind {
    /// The field is missing.
    Required,
    /// The field is present but not of the expected type.
    InvalidType,
    /// The field is not a valid absolute URL.
    InvalidUrl,
    /// The field does not satisfy its format rule.
    InvalidFormat,
}

impl fmt::Display for ConfigErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            ConfigErrorKind::Required => "is required",
            ConfigErrorKind::InvalidType => "has an invalid type",
            ConfigErrorKind::InvalidUrl => "is not a valid absolute url",
            ConfigErrorKind::InvalidFormat => "has an invalid format",
        };
        f.write_str(text)
    }
}

/// Dispatcher precondition that was violated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestErrorKind {
    /// The HTTP method is not one of the supported verbs.
    UnknownMethod(String),
    /// The path does not start with '/' or has nothing after it.
    InvalidPath(String),
    /// A header name or value cannot be sent over HTTP.
    InvalidArgument(String),
}

impl fmt::Display for RequestErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestErrorKind::UnknownMethod(m) => write!(f, "unknown method '{}'", m),
            RequestErrorKind::InvalidPath(p) => write!(f, "invalid path '{}'", p),
            RequestErrorKind::InvalidArgument(a) => write!(f, "invalid argument: {}", a),
        }
    }
}

/// Errors that can occur when using the Yousign SDK.
#[derive(Error, Debug)]
pub enum YousignError {
    /// Session configuration is missing or malformed.
    #[error("Configuration error: '{field}' {kind}")]
    Configuration {
        /// Name of the offending configuration key.
        field: &'static str,
        /// What was wrong with it.
        kind: ConfigErrorKind,
    },

    /// A caller-supplied argument violates its field rule.
    #[error("Invalid argument '{field}': {message}")]
    Argument {
        /// Name of the offending field.
        field: &'static str,
        /// The rule that was violated.
        message: String,
    },

    /// The request dispatcher was called with bad inputs.
    #[error("Request error: {0}")]
    Request(RequestErrorKind),

    /// The API answered with a non-success status.
    #[error("Client request error ({status_code}): {body}")]
    ClientRequest {
        /// HTTP status code.
        status_code: u16,
        /// Raw response body.
        body: String,
    },

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response could not be decoded (JSON, base64).
    #[error("Decode error: {0}")]
    Decode(String),
}

impl YousignError {
    pub(crate) fn argument(field: &'static str, message: impl Into<String>) -> Self {
        YousignError::Argument {
            field,
            message: message.into(),
        }
    }

    pub(crate) fn config(field: &'static str, kind: ConfigErrorKind) -> Self {
        YousignError::Configuration { field, kind }
    }

    /// Returns true if this is an authentication error.
    pub fn is_auth_error(&self) -> bool {
        matches!(
            self,
            YousignError::ClientRequest {
                status_code: 401 | 403,
                ..
            }
        )
    }

    /// Returns the HTTP status code if available.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            YousignError::ClientRequest { status_code, .. } => Some(*status_code),
            YousignError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Returns the response body carried by a failed API call.
    pub fn response_body(&self) -> Option<&str> {
        match self {
            YousignError::ClientRequest { body, .. } => Some(body),
            _ => None,
        }
    }
}
