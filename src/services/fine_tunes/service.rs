use crate::auth::BearerAuth;
use crate::errors::ActionResult;
use crate::services::fine_tunes::{FineTuneJob, FineTuneRequest};
use crate::services::ApiResponse;
use crate::transport::{endpoint, HttpRequest, HttpTransport};
use async_trait::async_trait;
use http::HeaderMap;
use std::sync::Arc;
use tracing::debug;
use url::Url;

#[async_trait]
pub trait FineTuneService: Send + Sync {
    async fn create(&self, request: &FineTuneRequest) -> ActionResult<ApiResponse<FineTuneJob>>;
}

pub struct FineTuneServiceImpl {
    transport: Arc<dyn HttpTransport>,
    auth: BearerAuth,
    base_url: Url,
}

impl FineTuneServiceImpl {
    pub fn new(transport: Arc<dyn HttpTransport>, auth: BearerAuth, base_url: Url) -> Self {
        Self {
            transport,
            auth,
            base_url,
        }
    }
}

#[async_trait]
impl FineTuneService for FineTuneServiceImpl {
    async fn create(&self, request: &FineTuneRequest) -> ActionResult<ApiResponse<FineTuneJob>> {
        let mut headers = HeaderMap::new();
        self.auth.apply(&mut headers)?;

        debug!(
            model = %request.model,
            training_file = %request.training_file,
            validation_file = ?request.validation_file,
            "creating fine-tune"
        );

        let http_request = HttpRequest::post(endpoint(&self.base_url, "/fine-tunes")?)
            .with_headers(headers)
            .json(request)?;

        let response = self.transport.send(http_request).await?;
        ApiResponse::from_http(response)
    }
}
