//! HTTP transport port.
//!
//! The transport sends one request and hands back a response whose body has
//! not been read yet. Reading is a separate, consuming step so that callers
//! can classify a response by status and headers alone (a 302 is never read).
//!
//! # Contract
//!
//! Implementations must:
//! - Send the request's headers and body unchanged
//! - Carry cookies across requests (the session lives in a cookie)
//! - Return non-2xx responses as `Ok`, not as errors
//! - Report connection failures as `TransportError::Network` or `Timeout`

use async_trait::async_trait;
use std::fmt;

use crate::domain::foundation::TransportError;

/// HTTP request method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HttpMethod {
    #[default]
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A fully resolved request, ready to send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl TransportRequest {
    /// Looks up a header value by case-insensitive name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// A response whose body has not been consumed.
#[async_trait]
pub trait TransportResponse: Send {
    /// Numeric status code.
    fn status(&self) -> u16;

    /// Reason phrase for the status, if known.
    fn reason(&self) -> Option<&str>;

    /// Header value by case-insensitive name.
    fn header(&self, name: &str) -> Option<String>;

    /// Reads the whole body as text.
    async fn text(self: Box<Self>) -> Result<String, TransportError>;
}

/// Sends requests to the API server.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn send(
        &self,
        request: TransportRequest,
    ) -> Result<Box<dyn TransportResponse>, TransportError>;
}
