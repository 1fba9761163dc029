//! RequestExecutor - Sends API requests and classifies their outcome.
//!
//! Every call ends in exactly one of:
//!
//! - `ApiResponse::Redirected` for a 302 (body is never read)
//! - `ApiError::Api` for any other non-2xx status, carrying the body text
//! - `ApiResponse::Json` / `ApiResponse::Text` for a 2xx, depending on the
//!   response `content-type`
//!
//! Transport failures are logged and returned as they came. The executor
//! never retries.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

use crate::config::ApiConfig;
use crate::domain::foundation::{ApiError, ErrorEnvelope, TransportError};
use crate::ports::{HttpMethod, HttpTransport, TransportRequest};

/// Status treated as a successful redirect sentinel.
const REDIRECT_SENTINEL: u16 = 302;

const CONTENT_TYPE: &str = "Content-Type";
const JSON_MEDIA_TYPE: &str = "application/json";

/// Per-request options. Headers given here override the defaults by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestOptions {
    pub method: HttpMethod,
    pub body: Option<String>,
    pub headers: Vec<(String, String)>,
}

impl RequestOptions {
    pub fn get() -> Self {
        Self::default()
    }

    pub fn post() -> Self {
        Self::default().with_method(HttpMethod::Post)
    }

    pub fn with_method(mut self, method: HttpMethod) -> Self {
        self.method = method;
        self
    }

    /// Sets an already serialized body.
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Serializes `body` as JSON.
    pub fn with_json_body<T: Serialize + ?Sized>(self, body: &T) -> Result<Self, ApiError> {
        let encoded = serde_json::to_string(body)
            .map_err(|e| TransportError::InvalidRequest(format!("Unserializable body: {}", e)))?;
        Ok(self.with_body(encoded))
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

/// Decoded result of a successful call.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse {
    /// The server answered 302. Stands in for a plain `true`.
    Redirected,
    /// 2xx with a JSON content type.
    Json(Value),
    /// 2xx with any other content type.
    Text(String),
}

impl ApiResponse {
    /// Flattens into a JSON value; the redirect sentinel becomes `true`.
    pub fn into_value(self) -> Value {
        match self {
            ApiResponse::Redirected => Value::Bool(true),
            ApiResponse::Json(value) => value,
            ApiResponse::Text(text) => Value::String(text),
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            ApiResponse::Redirected => "redirect",
            ApiResponse::Json(_) => "JSON",
            ApiResponse::Text(_) => "text",
        }
    }
}

/// Sends requests through an [`HttpTransport`] and normalizes the outcome.
pub struct RequestExecutor {
    transport: Arc<dyn HttpTransport>,
    base_url: String,
}

impl RequestExecutor {
    pub fn new(transport: Arc<dyn HttpTransport>, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            transport,
            base_url,
        }
    }

    pub fn from_config(transport: Arc<dyn HttpTransport>, config: &ApiConfig) -> Self {
        Self::new(transport, config.normalized_base_url())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Sends `options` to `endpoint` and classifies the response.
    ///
    /// # Errors
    ///
    /// - `ApiError::Api` for non-2xx, non-302 statuses
    /// - `ApiError::Transport` for network, body or JSON decode failures
    pub async fn execute(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<ApiResponse, ApiError> {
        let method = options.method;
        let result = self.dispatch(endpoint, options).await;

        if let Err(ref error) = result {
            tracing::error!(%method, endpoint, error = %error, "API request failed");
        }

        result
    }

    /// Like [`execute`](Self::execute), then decodes a JSON body into `T`.
    ///
    /// # Errors
    ///
    /// Everything `execute` returns, plus `ApiError::UnexpectedResponse` when
    /// the body is not JSON or does not match `T`.
    pub async fn execute_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<T, ApiError> {
        match self.execute(endpoint, options).await? {
            ApiResponse::Json(value) => serde_json::from_value(value).map_err(|e| {
                tracing::warn!(endpoint, error = %e, "Response did not match expected shape");
                ApiError::unexpected(format!("{} returned an unexpected body: {}", endpoint, e))
            }),
            other => Err(ApiError::unexpected(format!(
                "{} returned a {} response where JSON was expected",
                endpoint,
                other.kind()
            ))),
        }
    }

    async fn dispatch(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<ApiResponse, ApiError> {
        let request = TransportRequest {
            method: options.method,
            url: format!("{}{}", self.base_url, endpoint),
            headers: merge_headers(options.headers),
            body: options.body,
        };

        tracing::debug!(method = %request.method, url = %request.url, "Sending API request");

        let response = self.transport.send(request).await?;
        let status = response.status();

        if status == REDIRECT_SENTINEL {
            tracing::debug!(endpoint, "Success with redirect");
            return Ok(ApiResponse::Redirected);
        }

        if !(200..300).contains(&status) {
            let reason = response.reason().map(str::to_string);
            let body = response.text().await?;
            return Err(ErrorEnvelope::from_response(status, reason.as_deref(), &body).into());
        }

        let is_json = response
            .header(CONTENT_TYPE)
            .is_some_and(|value| value.to_ascii_lowercase().contains(JSON_MEDIA_TYPE));
        let body = response.text().await?;

        if is_json {
            let value = serde_json::from_str(&body)
                .map_err(|e| TransportError::Decode(e.to_string()))?;
            Ok(ApiResponse::Json(value))
        } else {
            Ok(ApiResponse::Text(body))
        }
    }
}

/// Default headers with caller overrides applied by case-insensitive name.
fn merge_headers(overrides: Vec<(String, String)>) -> Vec<(String, String)> {
    let mut headers = vec![(CONTENT_TYPE.to_string(), JSON_MEDIA_TYPE.to_string())];
    for (name, value) in overrides {
        headers.retain(|(existing, _)| !existing.eq_ignore_ascii_case(&name));
        headers.push((name, value));
    }
    headers
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::{MockReply, MockTransport, BASE_URL};
    use serde::Deserialize;
    use serde_json::json;

    fn executor(transport: &Arc<MockTransport>) -> RequestExecutor {
        RequestExecutor::new(transport.clone(), BASE_URL)
    }

    #[tokio::test]
    async fn redirect_is_success_sentinel_and_body_is_not_read() {
        let transport = Arc::new(
            MockTransport::new().on(HttpMethod::Post, "/api/auth/login", MockReply::redirect()),
        );

        let result = executor(&transport)
            .execute("/api/auth/login", RequestOptions::post())
            .await
            .unwrap();

        assert_eq!(result, ApiResponse::Redirected);
        assert_eq!(result.into_value(), Value::Bool(true));
        assert_eq!(transport.body_reads(), 0);
    }

    #[tokio::test]
    async fn error_status_carries_body_text() {
        let transport = Arc::new(MockTransport::new().on(
            HttpMethod::Get,
            "/api/post/comment/c1",
            MockReply::text(404, "No comment with that id could be found"),
        ));

        let error = executor(&transport)
            .execute("/api/post/comment/c1", RequestOptions::get())
            .await
            .unwrap_err();

        assert_eq!(
            error,
            ApiError::Api(ErrorEnvelope::new(404, "No comment with that id could be found"))
        );
        assert_eq!(error.to_string(), "API error 404: No comment with that id could be found");
    }

    #[tokio::test]
    async fn error_status_without_body_uses_reason_phrase() {
        let transport = Arc::new(MockTransport::new().on(
            HttpMethod::Get,
            "/api/auth/check",
            MockReply::empty(401),
        ));

        let error = executor(&transport)
            .execute("/api/auth/check", RequestOptions::get())
            .await
            .unwrap_err();

        assert_eq!(error.envelope(), Some(&ErrorEnvelope::new(401, "Unauthorized")));
    }

    #[tokio::test]
    async fn other_redirect_statuses_are_errors() {
        let transport = Arc::new(MockTransport::new().on(
            HttpMethod::Post,
            "/api/auth/login",
            MockReply::empty(303),
        ));

        let error = executor(&transport)
            .execute("/api/auth/login", RequestOptions::post())
            .await
            .unwrap_err();

        assert!(error.is_status(303));
    }

    #[tokio::test]
    async fn json_content_type_is_decoded() {
        let body = json!([{ "id": "Posts:p1", "likes": 2 }]);
        let transport = Arc::new(MockTransport::new().on(
            HttpMethod::Get,
            "/api/post/latest?page=0",
            MockReply::json(200, body.clone()),
        ));

        let result = executor(&transport)
            .execute("/api/post/latest?page=0", RequestOptions::get())
            .await
            .unwrap();

        assert_eq!(result, ApiResponse::Json(body));
    }

    #[tokio::test]
    async fn json_content_type_match_ignores_parameters_and_case() {
        let transport = Arc::new(MockTransport::new().on(
            HttpMethod::Get,
            "/api/post/p1",
            MockReply::with_content_type(200, "Application/JSON; charset=utf-8", r#"{"ok":true}"#),
        ));

        let result = executor(&transport)
            .execute("/api/post/p1", RequestOptions::get())
            .await
            .unwrap();

        assert_eq!(result, ApiResponse::Json(json!({ "ok": true })));
    }

    #[tokio::test]
    async fn non_json_content_type_returns_text() {
        let transport = Arc::new(MockTransport::new().on(
            HttpMethod::Get,
            "/api/auth/check",
            MockReply::text(200, "You are authenticated"),
        ));

        let result = executor(&transport)
            .execute("/api/auth/check", RequestOptions::get())
            .await
            .unwrap();

        assert_eq!(result, ApiResponse::Text("You are authenticated".to_string()));
    }

    #[tokio::test]
    async fn malformed_json_is_a_transport_decode_error() {
        let transport = Arc::new(MockTransport::new().on(
            HttpMethod::Get,
            "/api/post/p1",
            MockReply::with_content_type(200, "application/json", "{not json"),
        ));

        let error = executor(&transport)
            .execute("/api/post/p1", RequestOptions::get())
            .await
            .unwrap_err();

        assert!(matches!(error, ApiError::Transport(TransportError::Decode(_))));
    }

    #[tokio::test]
    async fn transport_failure_is_returned_unchanged() {
        let transport = Arc::new(MockTransport::new().on(
            HttpMethod::Get,
            "/api/auth/check",
            MockReply::fail(TransportError::network("connection reset")),
        ));

        let error = executor(&transport)
            .execute("/api/auth/check", RequestOptions::get())
            .await
            .unwrap_err();

        assert_eq!(
            error,
            ApiError::Transport(TransportError::network("connection reset"))
        );
        assert_eq!(transport.requests().len(), 1);
    }

    #[tokio::test]
    async fn sends_default_content_type_and_body() {
        let transport = Arc::new(MockTransport::new().on(
            HttpMethod::Post,
            "/api/post/new",
            MockReply::json(200, json!({ "id": "Posts:p9" })),
        ));

        executor(&transport)
            .execute(
                "/api/post/new",
                RequestOptions::post()
                    .with_json_body(&json!({ "heading": "h", "text": "t" }))
                    .unwrap(),
            )
            .await
            .unwrap();

        let request = &transport.requests()[0];
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.url, format!("{}/api/post/new", BASE_URL));
        assert_eq!(request.header("content-type"), Some("application/json"));
        assert_eq!(
            serde_json::from_str::<Value>(request.body.as_deref().unwrap()).unwrap(),
            json!({ "heading": "h", "text": "t" })
        );
    }

    #[tokio::test]
    async fn caller_headers_override_defaults_by_name() {
        let transport = Arc::new(MockTransport::new().on(
            HttpMethod::Post,
            "/api/upload",
            MockReply::empty(200),
        ));

        executor(&transport)
            .execute(
                "/api/upload",
                RequestOptions::post()
                    .with_header("content-type", "text/plain")
                    .with_header("X-Trace", "abc")
                    .with_body("raw"),
            )
            .await
            .unwrap();

        let request = &transport.requests()[0];
        let content_types: Vec<_> = request
            .headers
            .iter()
            .filter(|(name, _)| name.eq_ignore_ascii_case("content-type"))
            .collect();
        assert_eq!(content_types.len(), 1);
        assert_eq!(request.header("Content-Type"), Some("text/plain"));
        assert_eq!(request.header("x-trace"), Some("abc"));
    }

    #[tokio::test]
    async fn unscripted_route_is_not_found() {
        let transport = Arc::new(MockTransport::default());

        let error = executor(&transport)
            .execute("/api/post/missing", RequestOptions::get())
            .await
            .unwrap_err();

        assert!(error.is_status(404));
        assert_eq!(transport.paths(), vec!["/api/post/missing"]);
    }

    #[tokio::test]
    async fn base_url_trailing_slash_is_trimmed() {
        let transport = Arc::new(MockTransport::new());
        let executor = RequestExecutor::new(transport.clone(), format!("{}/", BASE_URL));
        assert_eq!(executor.base_url(), BASE_URL);
    }

    #[derive(Debug, Deserialize, PartialEq)]
    struct Created {
        id: String,
    }

    #[tokio::test]
    async fn execute_json_decodes_typed_value() {
        let transport = Arc::new(MockTransport::new().on(
            HttpMethod::Post,
            "/api/post/new",
            MockReply::json(200, json!({ "id": "Posts:p9" })),
        ));

        let created: Created = executor(&transport)
            .execute_json("/api/post/new", RequestOptions::post())
            .await
            .unwrap();

        assert_eq!(created, Created { id: "Posts:p9".to_string() });
    }

    #[tokio::test]
    async fn execute_json_rejects_text_body() {
        let transport = Arc::new(MockTransport::new().on(
            HttpMethod::Post,
            "/api/post/new",
            MockReply::text(200, "created"),
        ));

        let result: Result<Created, _> = executor(&transport)
            .execute_json("/api/post/new", RequestOptions::post())
            .await;

        assert!(matches!(result, Err(ApiError::UnexpectedResponse(_))));
    }

    #[tokio::test]
    async fn execute_json_rejects_mismatched_shape() {
        let transport = Arc::new(MockTransport::new().on(
            HttpMethod::Post,
            "/api/post/new",
            MockReply::json(200, json!({ "identifier": 5 })),
        ));

        let result: Result<Created, _> = executor(&transport)
            .execute_json("/api/post/new", RequestOptions::post())
            .await;

        assert!(matches!(result, Err(ApiError::UnexpectedResponse(_))));
    }

    #[test]
    fn merge_headers_keeps_default_when_not_overridden() {
        let headers = merge_headers(vec![("Accept".to_string(), "text/plain".to_string())]);
        assert_eq!(
            headers,
            vec![
                ("Content-Type".to_string(), "application/json".to_string()),
                ("Accept".to_string(), "text/plain".to_string()),
            ]
        );
    }
}
