mod http_transport;
mod multipart;

pub use http_transport::ReqwestTransport;
pub use multipart::{MultipartBuilder, MultipartField};

use crate::errors::{ActionError, ActionResult};
use async_trait::async_trait;
use bytes::Bytes;
use http::{HeaderMap, HeaderValue, Method};
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

/// Body of an outgoing request
#[derive(Debug, Clone)]
pub enum RequestBody {
    Empty,
    Json(Vec<u8>),
    Bytes(Bytes),
    Multipart(Vec<MultipartField>),
}

#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    pub body: RequestBody,
}

impl HttpRequest {
    pub fn new(method: Method, url: Url) -> Self {
        Self {
            method,
            url,
            headers: HeaderMap::new(),
            body: RequestBody::Empty,
        }
    }

    pub fn get(url: Url) -> Self {
        Self::new(Method::GET, url)
    }

    pub fn post(url: Url) -> Self {
        Self::new(Method::POST, url)
    }

    pub fn put(url: Url) -> Self {
        Self::new(Method::PUT, url)
    }

    pub fn with_headers(mut self, headers: HeaderMap) -> Self {
        for (key, value) in headers.iter() {
            self.headers.insert(key.clone(), value.clone());
        }
        self
    }

    pub fn header(mut self, name: &'static str, value: &str) -> ActionResult<Self> {
        let value = HeaderValue::from_str(value).map_err(|e| {
            ActionError::Serialization(format!("Invalid value for header {}: {}", name, e))
        })?;
        self.headers.insert(name, value);
        Ok(self)
    }

    pub fn json<T: Serialize + ?Sized>(mut self, body: &T) -> ActionResult<Self> {
        let bytes = serde_json::to_vec(body)
            .map_err(|e| ActionError::Serialization(format!("Failed to serialize body: {}", e)))?;
        self.body = RequestBody::Json(bytes);
        Ok(self)
    }

    pub fn bytes(mut self, body: Bytes) -> Self {
        self.body = RequestBody::Bytes(body);
        self
    }

    pub fn multipart(mut self, fields: Vec<MultipartField>) -> Self {
        self.body = RequestBody::Multipart(fields);
        self
    }
}

/// Response as received from the wire; status handling is left to the caller
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn json<T: DeserializeOwned>(&self) -> ActionResult<T> {
        serde_json::from_slice(&self.body).map_err(|e| {
            ActionError::Deserialization(format!(
                "Failed to deserialize response: {}. Body: {}",
                e,
                String::from_utf8_lossy(&self.body)
            ))
        })
    }
}

/// Appends `path` to `base`, keeping any path prefix on the base (`/v1`, `/api/v3`).
pub fn endpoint(base: &Url, path: &str) -> ActionResult<Url> {
    let joined = format!(
        "{}/{}",
        base.as_str().trim_end_matches('/'),
        path.trim_start_matches('/')
    );
    Ok(Url::parse(&joined)?)
}

#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Sends the request. Only network-level problems are errors; any HTTP
    /// status is returned as a response.
    async fn send(&self, request: HttpRequest) -> ActionResult<HttpResponse>;
}
