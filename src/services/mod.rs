//! Remote operations used by the pipeline: OpenAI uploads and fine-tunes,
//! GitHub Actions secrets, and workflow artifacts.

pub mod artifacts;
pub mod files;
pub mod fine_tunes;
pub mod secrets;

use crate::config::RepoRef;
use crate::errors::ActionResult;
use crate::transport::HttpResponse;
use async_trait::async_trait;
use bytes::Bytes;
use serde::de::DeserializeOwned;
use std::path::Path;

use self::artifacts::ArtifactUpload;
use self::files::{FileObject, UploadFileRequest};
use self::fine_tunes::{FineTuneJob, FineTuneRequest};

/// Outcome of an OpenAI call whose status is judged by the caller.
///
/// `data` is decoded only for a 200 response; `body` always holds the raw
/// bytes as received.
#[derive(Debug, Clone)]
pub struct ApiResponse<T> {
    pub status: u16,
    pub data: Option<T>,
    pub body: Bytes,
}

impl<T: DeserializeOwned> ApiResponse<T> {
    /// Decodes the body of a 200 response; other statuses are kept as-is.
    pub fn from_http(response: HttpResponse) -> ActionResult<Self> {
        let data = if response.status == 200 {
            Some(response.json()?)
        } else {
            None
        };
        Ok(Self {
            status: response.status,
            data,
            body: response.body,
        })
    }
}

impl<T> ApiResponse<T> {
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

/// The fine-tuning endpoints the pipeline calls.
///
/// Implementations return any HTTP status as an [`ApiResponse`]; only
/// transport failures are errors.
#[async_trait]
pub trait FineTuneApi: Send + Sync {
    /// Uploads one data file (`POST /files`).
    async fn upload_file(&self, request: UploadFileRequest) -> ActionResult<ApiResponse<FileObject>>;

    /// Starts a fine-tune job (`POST /fine-tunes`).
    async fn create_fine_tune(
        &self,
        request: &FineTuneRequest,
    ) -> ActionResult<ApiResponse<FineTuneJob>>;
}

/// Write access to a repository's Actions secrets.
#[async_trait]
pub trait SecretStore: Send + Sync {
    /// Creates or replaces the secret `name` with `value`.
    async fn write_secret(&self, repo: &RepoRef, name: &str, value: &str) -> ActionResult<()>;
}

/// Uploads files as a workflow artifact.
#[async_trait]
pub trait ArtifactStore: Send + Sync {
    /// Archives the files directly under `root_dir` whose names match any of
    /// `patterns` and uploads them as artifact `name`.
    async fn upload_artifact(
        &self,
        name: &str,
        root_dir: &Path,
        patterns: &[&str],
    ) -> ActionResult<ArtifactUpload>;
}
