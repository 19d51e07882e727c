use crate::auth::BearerAuth;
use crate::config::OpenAIConfig;
use crate::errors::ActionResult;
use crate::services::files::{FileObject, FileService, FileServiceImpl, UploadFileRequest};
use crate::services::fine_tunes::{
    FineTuneJob, FineTuneRequest, FineTuneService, FineTuneServiceImpl,
};
use crate::services::{ApiResponse, FineTuneApi};
use crate::transport::{HttpTransport, ReqwestTransport};
use async_trait::async_trait;
use std::sync::Arc;

/// OpenAI client exposing the file and fine-tune endpoints.
pub struct OpenAIClient {
    files: FileServiceImpl,
    fine_tunes: FineTuneServiceImpl,
}

impl OpenAIClient {
    pub fn new(config: OpenAIConfig) -> ActionResult<Self> {
        config.validate()?;
        let transport = ReqwestTransport::new(config.timeout, &config.user_agent)?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    pub fn with_transport(config: OpenAIConfig, transport: Arc<dyn HttpTransport>) -> Self {
        let auth = BearerAuth::new(config.api_key.clone(), "openaiApiKey");
        Self {
            files: FileServiceImpl::new(transport.clone(), auth.clone(), config.base_url.clone()),
            fine_tunes: FineTuneServiceImpl::new(transport, auth, config.base_url),
        }
    }

    pub fn files(&self) -> &dyn FileService {
        &self.files
    }

    pub fn fine_tunes(&self) -> &dyn FineTuneService {
        &self.fine_tunes
    }
}

#[async_trait]
impl FineTuneApi for OpenAIClient {
    async fn upload_file(&self, request: UploadFileRequest) -> ActionResult<ApiResponse<FileObject>> {
        self.files.upload(request).await
    }

    async fn create_fine_tune(
        &self,
        request: &FineTuneRequest,
    ) -> ActionResult<ApiResponse<FineTuneJob>> {
        self.fine_tunes.create(request).await
    }
}
