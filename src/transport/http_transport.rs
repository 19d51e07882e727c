use crate::errors::{ActionResult, ConfigurationError};
use crate::transport::{HttpRequest, HttpResponse, HttpTransport, MultipartBuilder, RequestBody};
use async_trait::async_trait;
use http::header::CONTENT_TYPE;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

/// HTTP transport implementation using reqwest
#[derive(Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Creates a new ReqwestTransport with the given timeout and user agent
    pub fn new(timeout: Duration, user_agent: &str) -> ActionResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(|e| ConfigurationError::HttpClient(e.to_string()))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> ActionResult<HttpResponse> {
        let HttpRequest {
            method,
            url,
            headers,
            body,
        } = request;

        debug!(method = %method, url = %url, "sending request");

        let mut builder = self.client.request(method, url).headers(headers);

        builder = match body {
            RequestBody::Empty => builder,
            RequestBody::Json(bytes) => builder
                .header(CONTENT_TYPE, mime::APPLICATION_JSON.as_ref())
                .body(bytes),
            RequestBody::Bytes(bytes) => builder.body(bytes),
            RequestBody::Multipart(fields) => {
                builder.multipart(MultipartBuilder::into_form(fields)?)
            }
        };

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let headers = response.headers().clone();
        let body = response.bytes().await?;

        debug!(status, bytes = body.len(), "received response");

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}
