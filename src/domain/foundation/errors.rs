//! Error types shared across the client.
//!
//! Three failure families reach callers:
//!
//! - [`TransportError`] - the request never produced a usable response
//!   (network failure, unreadable body, malformed JSON)
//! - [`ErrorEnvelope`] - the server answered with a non-2xx, non-302 status
//! - [`ApiError::UnexpectedResponse`] - the server answered successfully but
//!   the body did not have the shape the operation expects

use std::fmt;
use thiserror::Error;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField {
            field: field.into(),
        }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Failures below the HTTP status level.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timed out")]
    Timeout,

    #[error("Failed to read response body: {0}")]
    Body(String),

    #[error("Failed to decode JSON response: {0}")]
    Decode(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("HTTP client setup failed: {0}")]
    Setup(String),
}

impl TransportError {
    /// Creates a network error.
    pub fn network(message: impl Into<String>) -> Self {
        TransportError::Network(message.into())
    }
}

/// Structured error built from a non-2xx, non-302 response.
///
/// `message` is the raw response body when the server sent one, otherwise
/// the reason phrase of the status code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorEnvelope {
    pub status: u16,
    pub message: String,
}

impl ErrorEnvelope {
    /// Creates an envelope with an explicit message.
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// Builds the envelope for a failed response.
    pub fn from_response(status: u16, reason: Option<&str>, body: &str) -> Self {
        let message = if body.is_empty() {
            reason.unwrap_or_default().to_string()
        } else {
            body.to_string()
        };
        Self { status, message }
    }
}

impl fmt::Display for ErrorEnvelope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.status, self.message)
    }
}

impl std::error::Error for ErrorEnvelope {}

/// Error returned by every fallible API operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("API error {0}")]
    Api(ErrorEnvelope),

    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),
}

impl ApiError {
    /// Creates an unexpected response error.
    pub fn unexpected(message: impl Into<String>) -> Self {
        ApiError::UnexpectedResponse(message.into())
    }

    /// HTTP status of a structured API error, if this is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Api(envelope) => Some(envelope.status),
            _ => None,
        }
    }

    /// True if this is a structured API error with the given status.
    pub fn is_status(&self, status: u16) -> bool {
        self.status() == Some(status)
    }

    /// The error envelope, if the server produced one.
    pub fn envelope(&self) -> Option<&ErrorEnvelope> {
        match self {
            ApiError::Api(envelope) => Some(envelope),
            _ => None,
        }
    }
}

impl From<ErrorEnvelope> for ApiError {
    fn from(envelope: ErrorEnvelope) -> Self {
        ApiError::Api(envelope)
    }
}
