//! Mock OpenAI, secrets and artifact services

use crate::config::RepoRef;
use crate::errors::{ActionError, ActionResult};
use crate::services::artifacts::ArtifactUpload;
use crate::services::files::{FileObject, UploadFileRequest};
use crate::services::fine_tunes::{FineTuneJob, FineTuneRequest};
use crate::services::{ApiResponse, ArtifactStore, FineTuneApi, SecretStore};
use crate::transport::HttpResponse;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

fn list_dir(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .map(|entries| {
            entries
                .filter_map(|e| e.ok())
                .map(|e| e.file_name().to_string_lossy().into_owned())
                .collect()
        })
        .unwrap_or_default();
    names.sort();
    names
}

/// Mock fine-tuning API with queued upload and fine-tune responses.
#[derive(Clone, Default)]
pub struct MockFineTuneApi {
    inner: Arc<Mutex<MockFineTuneApiInner>>,
}

#[derive(Default)]
struct MockFineTuneApiInner {
    upload_responses: VecDeque<(u16, String)>,
    fine_tune_responses: VecDeque<(u16, String)>,
    uploads: Vec<UploadFileRequest>,
    fine_tunes: Vec<FineTuneRequest>,
    watched_dir: Option<PathBuf>,
    snapshots: Vec<Vec<String>>,
}

impl MockFineTuneApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an upload response
    pub fn with_upload(self, status: u16, body: serde_json::Value) -> Self {
        self.inner
            .lock()
            .unwrap()
            .upload_responses
            .push_back((status, body.to_string()));
        self
    }

    /// Queue a fine-tune response
    pub fn with_fine_tune(self, status: u16, body: serde_json::Value) -> Self {
        self.inner
            .lock()
            .unwrap()
            .fine_tune_responses
            .push_back((status, body.to_string()));
        self
    }

    /// Record the contents of `dir` at every upload
    pub fn watching(self, dir: impl Into<PathBuf>) -> Self {
        self.inner.lock().unwrap().watched_dir = Some(dir.into());
        self
    }

    pub fn uploads(&self) -> Vec<UploadFileRequest> {
        self.inner.lock().unwrap().uploads.clone()
    }

    pub fn fine_tune_requests(&self) -> Vec<FineTuneRequest> {
        self.inner.lock().unwrap().fine_tunes.clone()
    }

    /// Directory listings taken at each upload, in call order
    pub fn snapshots(&self) -> Vec<Vec<String>> {
        self.inner.lock().unwrap().snapshots.clone()
    }
}

#[async_trait]
impl FineTuneApi for MockFineTuneApi {
    async fn upload_file(&self, request: UploadFileRequest) -> ActionResult<ApiResponse<FileObject>> {
        let mut inner = self.inner.lock().unwrap();
        if let Some(dir) = inner.watched_dir.clone() {
            inner.snapshots.push(list_dir(&dir));
        }
        inner.uploads.push(request);
        let (status, body) = inner
            .upload_responses
            .pop_front()
            .unwrap_or_else(|| (500, "no mock upload response".to_string()));
        ApiResponse::from_http(HttpResponse::new(status, body))
    }

    async fn create_fine_tune(
        &self,
        request: &FineTuneRequest,
    ) -> ActionResult<ApiResponse<FineTuneJob>> {
        let mut inner = self.inner.lock().unwrap();
        inner.fine_tunes.push(request.clone());
        let (status, body) = inner
            .fine_tune_responses
            .pop_front()
            .unwrap_or_else(|| (500, "no mock fine-tune response".to_string()));
        ApiResponse::from_http(HttpResponse::new(status, body))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenSecret {
    pub repo: RepoRef,
    pub name: String,
    pub value: String,
}

/// Mock secret store recording writes
#[derive(Clone, Default)]
pub struct MockSecretStore {
    inner: Arc<Mutex<MockSecretStoreInner>>,
}

#[derive(Default)]
struct MockSecretStoreInner {
    failure_status: Option<u16>,
    writes: Vec<WrittenSecret>,
}

impl MockSecretStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail every write with a GitHub API error
    pub fn failing_with(self, status: u16) -> Self {
        self.inner.lock().unwrap().failure_status = Some(status);
        self
    }

    pub fn writes(&self) -> Vec<WrittenSecret> {
        self.inner.lock().unwrap().writes.clone()
    }
}

#[async_trait]
impl SecretStore for MockSecretStore {
    async fn write_secret(&self, repo: &RepoRef, name: &str, value: &str) -> ActionResult<()> {
        let mut inner = self.inner.lock().unwrap();
        if let Some(status) = inner.failure_status {
            return Err(ActionError::GitHubApi {
                status,
                message: "mock failure".to_string(),
            });
        }
        inner.writes.push(WrittenSecret {
            repo: repo.clone(),
            name: name.to_string(),
            value: value.to_string(),
        });
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedArtifact {
    pub name: String,
    pub root_dir: PathBuf,
    pub patterns: Vec<String>,
    /// Files present in `root_dir` at upload time
    pub files: Vec<String>,
}

/// Mock artifact store recording uploads
#[derive(Clone, Default)]
pub struct MockArtifactStore {
    inner: Arc<Mutex<MockArtifactStoreInner>>,
}

#[derive(Default)]
struct MockArtifactStoreInner {
    fail: bool,
    uploads: Vec<UploadedArtifact>,
}

impl MockArtifactStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(self) -> Self {
        self.inner.lock().unwrap().fail = true;
        self
    }

    pub fn uploads(&self) -> Vec<UploadedArtifact> {
        self.inner.lock().unwrap().uploads.clone()
    }
}

#[async_trait]
impl ArtifactStore for MockArtifactStore {
    async fn upload_artifact(
        &self,
        name: &str,
        root_dir: &Path,
        patterns: &[&str],
    ) -> ActionResult<ArtifactUpload> {
        let mut inner = self.inner.lock().unwrap();
        if inner.fail {
            return Err(ActionError::Artifact("mock failure".to_string()));
        }
        let files = list_dir(root_dir);
        inner.uploads.push(UploadedArtifact {
            name: name.to_string(),
            root_dir: root_dir.to_path_buf(),
            patterns: patterns.iter().map(|p| p.to_string()).collect(),
            files: files.clone(),
        });
        Ok(ArtifactUpload {
            id: inner.uploads.len().to_string(),
            name: name.to_string(),
            size: 0,
            files,
        })
    }
}
