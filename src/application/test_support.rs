//! Scripted transport shared by the application handler tests.

use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::application::RequestExecutor;
use crate::domain::foundation::TransportError;
use crate::ports::{HttpMethod, HttpTransport, TransportRequest, TransportResponse};

pub const BASE_URL: &str = "http://api.test";

/// One scripted reply.
#[derive(Debug, Clone)]
pub enum MockReply {
    Response {
        status: u16,
        content_type: Option<String>,
        body: String,
    },
    Fail(TransportError),
}

impl MockReply {
    pub fn json(status: u16, body: serde_json::Value) -> Self {
        Self::with_content_type(status, "application/json", &body.to_string())
    }

    pub fn text(status: u16, body: &str) -> Self {
        Self::with_content_type(status, "text/plain; charset=utf-8", body)
    }

    pub fn empty(status: u16) -> Self {
        MockReply::Response {
            status,
            content_type: None,
            body: String::new(),
        }
    }

    pub fn redirect() -> Self {
        Self::with_content_type(302, "text/html", "<a href=\"/\">Found</a>")
    }

    pub fn with_content_type(status: u16, content_type: &str, body: &str) -> Self {
        MockReply::Response {
            status,
            content_type: Some(content_type.to_string()),
            body: body.to_string(),
        }
    }

    pub fn fail(error: TransportError) -> Self {
        MockReply::Fail(error)
    }
}

fn reason_for(status: u16) -> Option<&'static str> {
    match status {
        200 => Some("OK"),
        302 => Some("Found"),
        303 => Some("See Other"),
        400 => Some("Bad Request"),
        401 => Some("Unauthorized"),
        403 => Some("Forbidden"),
        404 => Some("Not Found"),
        409 => Some("Conflict"),
        500 => Some("Internal Server Error"),
        _ => None,
    }
}

/// Transport that answers from a script keyed by method and path.
///
/// Several replies for the same route are served in order; the last one
/// repeats. Unscripted routes answer 404.
#[derive(Default)]
pub struct MockTransport {
    routes: Mutex<HashMap<(HttpMethod, String), VecDeque<MockReply>>>,
    requests: Mutex<Vec<TransportRequest>>,
    body_reads: Arc<AtomicUsize>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on(self, method: HttpMethod, path: &str, reply: MockReply) -> Self {
        self.routes
            .lock()
            .unwrap()
            .entry((method, path.to_string()))
            .or_default()
            .push_back(reply);
        self
    }

    pub fn requests(&self) -> Vec<TransportRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Paths (with query) of every request, in order.
    pub fn paths(&self) -> Vec<String> {
        self.requests()
            .into_iter()
            .map(|r| path_of(&r.url).to_string())
            .collect()
    }

    pub fn body_reads(&self) -> usize {
        self.body_reads.load(Ordering::SeqCst)
    }

    fn next_reply(&self, method: HttpMethod, path: &str) -> MockReply {
        let mut routes = self.routes.lock().unwrap();
        match routes.get_mut(&(method, path.to_string())) {
            Some(queue) if queue.len() > 1 => queue.pop_front().unwrap(),
            Some(queue) if !queue.is_empty() => queue[0].clone(),
            _ => MockReply::text(404, &format!("no mock for {} {}", method, path)),
        }
    }
}

fn path_of(url: &str) -> &str {
    url.strip_prefix(BASE_URL).unwrap_or(url)
}

/// Executor over `transport` rooted at [`BASE_URL`].
pub fn executor_for(transport: &Arc<MockTransport>) -> Arc<RequestExecutor> {
    Arc::new(RequestExecutor::new(transport.clone(), BASE_URL))
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn send(
        &self,
        request: TransportRequest,
    ) -> Result<Box<dyn TransportResponse>, TransportError> {
        let reply = self.next_reply(request.method, path_of(&request.url));
        self.requests.lock().unwrap().push(request);

        match reply {
            MockReply::Fail(error) => Err(error),
            MockReply::Response {
                status,
                content_type,
                body,
            } => Ok(Box::new(MockResponse {
                status,
                content_type,
                body,
                body_reads: self.body_reads.clone(),
            })),
        }
    }
}

struct MockResponse {
    status: u16,
    content_type: Option<String>,
    body: String,
    body_reads: Arc<AtomicUsize>,
}

#[async_trait]
impl TransportResponse for MockResponse {
    fn status(&self) -> u16 {
        self.status
    }

    fn reason(&self) -> Option<&str> {
        reason_for(self.status)
    }

    fn header(&self, name: &str) -> Option<String> {
        if name.eq_ignore_ascii_case("content-type") {
            self.content_type.clone()
        } else {
            None
        }
    }

    async fn text(self: Box<Self>) -> Result<String, TransportError> {
        self.body_reads.fetch_add(1, Ordering::SeqCst);
        Ok(self.body)
    }
}
