use crate::auth::BearerAuth;
use crate::errors::ActionResult;
use crate::services::files::{FileObject, UploadFileRequest};
use crate::services::ApiResponse;
use crate::transport::{endpoint, HttpRequest, HttpTransport, MultipartBuilder};
use async_trait::async_trait;
use http::HeaderMap;
use std::sync::Arc;
use tracing::debug;
use url::Url;

#[async_trait]
pub trait FileService: Send + Sync {
    async fn upload(&self, request: UploadFileRequest) -> ActionResult<ApiResponse<FileObject>>;
}

pub struct FileServiceImpl {
    transport: Arc<dyn HttpTransport>,
    auth: BearerAuth,
    base_url: Url,
}

impl FileServiceImpl {
    pub fn new(transport: Arc<dyn HttpTransport>, auth: BearerAuth, base_url: Url) -> Self {
        Self {
            transport,
            auth,
            base_url,
        }
    }
}

#[async_trait]
impl FileService for FileServiceImpl {
    async fn upload(&self, request: UploadFileRequest) -> ActionResult<ApiResponse<FileObject>> {
        let mut headers = HeaderMap::new();
        self.auth.apply(&mut headers)?;

        debug!(
            filename = %request.filename,
            purpose = %request.purpose,
            bytes = request.data.len(),
            "uploading file"
        );

        let fields = MultipartBuilder::new()
            .add_file("file", &request.filename, request.data)
            .add_text("purpose", request.purpose.as_str())
            .build();

        let http_request = HttpRequest::post(endpoint(&self.base_url, "/files")?)
            .with_headers(headers)
            .multipart(fields);

        let response = self.transport.send(http_request).await?;
        ApiResponse::from_http(response)
    }
}
