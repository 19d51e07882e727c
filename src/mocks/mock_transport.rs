//! Mock HTTP transport for testing

use crate::errors::{ActionError, ActionResult, NetworkError};
use crate::transport::{HttpRequest, HttpResponse, HttpTransport, RequestBody};
use async_trait::async_trait;
use bytes::Bytes;
use http::Method;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Replays queued responses in order and records every request it sees.
#[derive(Clone, Default)]
pub struct MockHttpTransport {
    inner: Arc<Mutex<MockHttpTransportInner>>,
}

#[derive(Default)]
struct MockHttpTransportInner {
    responses: VecDeque<ActionResult<HttpResponse>>,
    requests: Vec<HttpRequest>,
}

impl MockHttpTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response with the given status and raw body
    pub fn with_response(self, status: u16, body: impl Into<Bytes>) -> Self {
        self.inner
            .lock()
            .unwrap()
            .responses
            .push_back(Ok(HttpResponse::new(status, body)));
        self
    }

    /// Queue a JSON response
    pub fn with_json_response(self, status: u16, body: serde_json::Value) -> Self {
        self.with_response(status, body.to_string())
    }

    /// Queue a transport failure
    pub fn with_error(self, error: ActionError) -> Self {
        self.inner.lock().unwrap().responses.push_back(Err(error));
        self
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.inner.lock().unwrap().requests.clone()
    }

    pub fn request_count(&self) -> usize {
        self.inner.lock().unwrap().requests.len()
    }

    /// Verify that a request was made with the given method and path
    pub fn verify_request(&self, method: Method, path: &str) -> bool {
        self.inner
            .lock()
            .unwrap()
            .requests
            .iter()
            .any(|r| r.method == method && r.url.path() == path)
    }

    /// JSON body of the `index`-th request, if it had one
    pub fn json_body(&self, index: usize) -> Option<serde_json::Value> {
        let inner = self.inner.lock().unwrap();
        match inner.requests.get(index).map(|r| &r.body) {
            Some(RequestBody::Json(bytes)) => serde_json::from_slice(bytes).ok(),
            _ => None,
        }
    }
}

#[async_trait]
impl HttpTransport for MockHttpTransport {
    async fn send(&self, request: HttpRequest) -> ActionResult<HttpResponse> {
        let mut inner = self.inner.lock().unwrap();
        inner.requests.push(request);
        inner.responses.pop_front().unwrap_or_else(|| {
            Err(ActionError::Network(NetworkError::RequestFailed(
                "No mock response configured".to_string(),
            )))
        })
    }
}
