use crate::client::ArtifactClient;
use crate::errors::{ActionError, ActionResult};
use crate::services::artifacts::{
    build_archive, collect_files, ArtifactUpload, CreateArtifactRequest, CreateArtifactResponse,
    FinalizeArtifactRequest, FinalizeArtifactResponse, ARTIFACT_VERSION,
};
use std::path::Path;
use tracing::{debug, info};

/// Workflow artifact uploads through the Actions results service.
pub struct ArtifactService<'a> {
    client: &'a ArtifactClient,
}

impl<'a> ArtifactService<'a> {
    pub fn new(client: &'a ArtifactClient) -> Self {
        Self { client }
    }

    /// Packages the matching files of `root_dir` and uploads them as `name`.
    pub async fn upload(
        &self,
        name: &str,
        root_dir: &Path,
        patterns: &[&str],
    ) -> ActionResult<ArtifactUpload> {
        let ids = self.client.backend_ids()?;

        let root = root_dir.to_path_buf();
        let patterns: Vec<String> = patterns.iter().map(|p| p.to_string()).collect();
        let archive = tokio::task::spawn_blocking(move || {
            let patterns: Vec<&str> = patterns.iter().map(String::as_str).collect();
            build_archive(&collect_files(&root, &patterns)?)
        })
        .await
        .map_err(|e| ActionError::Artifact(format!("archive task failed: {}", e)))??;
        debug!(
            artifact = name,
            files = ?archive.files,
            size = archive.size(),
            "artifact archive built"
        );

        let created: CreateArtifactResponse = self
            .client
            .twirp(
                "CreateArtifact",
                &CreateArtifactRequest {
                    workflow_run_backend_id: ids.workflow_run_backend_id.clone(),
                    workflow_job_run_backend_id: ids.workflow_job_run_backend_id.clone(),
                    name: name.to_string(),
                    version: ARTIFACT_VERSION,
                },
            )
            .await?;

        if !created.ok || created.signed_upload_url.is_empty() {
            return Err(ActionError::Artifact(format!(
                "CreateArtifact did not return an upload URL for '{}'",
                name
            )));
        }

        self.client
            .put_blob(&created.signed_upload_url, archive.bytes.clone())
            .await?;

        let finalized: FinalizeArtifactResponse = self
            .client
            .twirp(
                "FinalizeArtifact",
                &FinalizeArtifactRequest {
                    workflow_run_backend_id: ids.workflow_run_backend_id,
                    workflow_job_run_backend_id: ids.workflow_job_run_backend_id,
                    name: name.to_string(),
                    size: archive.size().to_string(),
                    hash: Some(format!("sha256:{}", archive.sha256)),
                },
            )
            .await?;

        if !finalized.ok {
            return Err(ActionError::Artifact(format!(
                "FinalizeArtifact rejected '{}'",
                name
            )));
        }

        info!(
            artifact = name,
            artifact_id = %finalized.artifact_id,
            size = archive.size(),
            "artifact uploaded"
        );

        Ok(ArtifactUpload {
            id: finalized.artifact_id,
            name: name.to_string(),
            size: archive.size(),
            files: archive.files,
        })
    }
}
