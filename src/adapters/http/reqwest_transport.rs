//! reqwest-backed implementation of the `HttpTransport` port.
//!
//! The client keeps a cookie jar for the lifetime of the transport, so the
//! session cookie set by `/api/auth/login` is sent on every later request.
//! Redirects are followed by default. With `follow_redirects` off the
//! executor sees a 302 as it arrived.
//!
//! # Example
//!
//! ```ignore
//! let transport = ReqwestTransport::from_config(&ApiConfig::default())?;
//! let executor = RequestExecutor::new(Arc::new(transport), "http://127.0.0.1:8000");
//! ```

use async_trait::async_trait;
use reqwest::redirect::Policy;
use reqwest::{Client, Method, Response};

use crate::config::ApiConfig;
use crate::domain::foundation::TransportError;
use crate::ports::{HttpMethod, HttpTransport, TransportRequest, TransportResponse};

/// Production transport built on `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Wraps an already configured client.
    ///
    /// The client should have a cookie store enabled, otherwise the session
    /// will not survive between requests.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Builds a cookie-carrying client from configuration.
    pub fn from_config(config: &ApiConfig) -> Result<Self, TransportError> {
        let redirect = if config.follow_redirects {
            Policy::default()
        } else {
            Policy::none()
        };

        let mut builder = Client::builder()
            .cookie_store(true)
            .redirect(redirect)
            .user_agent(config.user_agent.as_str());

        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }

        let client = builder.build().map_err(|e| {
            tracing::error!("Failed to create HTTP client: {}", e);
            TransportError::Setup(e.to_string())
        })?;

        Ok(Self::new(client))
    }

    fn method(method: HttpMethod) -> Method {
        match method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Put => Method::PUT,
            HttpMethod::Patch => Method::PATCH,
            HttpMethod::Delete => Method::DELETE,
        }
    }

    fn map_send_error(e: reqwest::Error) -> TransportError {
        if e.is_timeout() {
            TransportError::Timeout
        } else if e.is_builder() {
            TransportError::InvalidRequest(e.to_string())
        } else if e.is_connect() {
            TransportError::network(format!("Connection failed: {}", e))
        } else {
            TransportError::network(e.to_string())
        }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(
        &self,
        request: TransportRequest,
    ) -> Result<Box<dyn TransportResponse>, TransportError> {
        let mut builder = self
            .client
            .request(Self::method(request.method), &request.url);

        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(Self::map_send_error)?;

        Ok(Box::new(ReqwestResponse { inner: response }))
    }
}

/// Unread reqwest response.
struct ReqwestResponse {
    inner: Response,
}

#[async_trait]
impl TransportResponse for ReqwestResponse {
    fn status(&self) -> u16 {
        self.inner.status().as_u16()
    }

    fn reason(&self) -> Option<&str> {
        self.inner.status().canonical_reason()
    }

    fn header(&self, name: &str) -> Option<String> {
        self.inner
            .headers()
            .get(name)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string)
    }

    async fn text(self: Box<Self>) -> Result<String, TransportError> {
        self.inner
            .text()
            .await
            .map_err(|e| TransportError::Body(e.to_string()))
    }
}
