//! The fine-tune run: provider data in, model id secret out.

mod workspace;


pub use workspace::{Workspace, RESPONSE_FILE};

use crate::config::PipelineConfig;
use crate::errors::{ActionError, ActionResult, DataSet};
use crate::providers::Provider;
use crate::services::files::UploadFileRequest;
use crate::services::fine_tunes::FineTuneRequest;
use crate::services::{ArtifactStore, FineTuneApi, SecretStore};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Pattern selecting every file in the model directory for the artifact.
const ARTIFACT_PATTERNS: &[&str] = &["*"];

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    pub training_file_id: String,
    pub validation_file_id: Option<String>,
    /// Empty when the response carried no job id.
    pub fine_tune_id: String,
    /// Empty when the service has not assigned a model yet.
    pub fine_tuned_model: String,
    pub artifact_id: String,
    pub response_path: PathBuf,
}

pub struct FineTunePipeline {
    config: PipelineConfig,
    openai: Arc<dyn FineTuneApi>,
    secrets: Arc<dyn SecretStore>,
    artifacts: Arc<dyn ArtifactStore>,
}

impl FineTunePipeline {
    pub fn new(
        config: PipelineConfig,
        openai: Arc<dyn FineTuneApi>,
        secrets: Arc<dyn SecretStore>,
        artifacts: Arc<dyn ArtifactStore>,
    ) -> Self {
        Self {
            config,
            openai,
            secrets,
            artifacts,
        }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn workspace(&self) -> Workspace {
        Workspace::from_config(&self.config)
    }

    /// Runs every step in order, stopping at the first failure.
    ///
    /// When `cleanup_on_failure` is set, a failed run removes the working
    /// directories before the error is returned.
    pub async fn run(&self, provider: &dyn Provider) -> ActionResult<RunOutcome> {
        let workspace = self.workspace();

        match self.execute(&workspace, provider).await {
            Ok(outcome) => Ok(outcome),
            Err(err) => {
                error!(error = %err, "fine-tune run failed");
                if self.config.cleanup_on_failure {
                    match workspace.cleanup().await {
                        Ok(()) => info!("removed working directories"),
                        Err(cleanup_err) => {
                            warn!(error = %cleanup_err, "failed to remove working directories")
                        }
                    }
                }
                Err(err)
            }
        }
    }

    async fn execute(
        &self,
        workspace: &Workspace,
        provider: &dyn Provider,
    ) -> ActionResult<RunOutcome> {
        info!(path = %workspace.data_dir().display(), "Creating data directory");
        workspace.ensure_data_dir().await?;

        info!(provider = provider.id(), "Building training data");
        let data = provider.build().await?;
        if let Some(validation) = &data.validation {
            if validation.filename == data.training.filename {
                return Err(ActionError::PayloadNameConflict(validation.filename.clone()));
            }
        }

        let training_path = workspace.write_payload(&data.training).await?;
        let validation_path = match &data.validation {
            Some(payload) => Some(workspace.write_payload(payload).await?),
            None => None,
        };

        let training_file_id = self
            .upload(workspace, DataSet::Training, &training_path, &data.training.filename)
            .await?;

        let validation_file_id = match (&validation_path, &data.validation) {
            (Some(path), Some(payload)) => Some(
                self.upload(workspace, DataSet::Validation, path, &payload.filename)
                    .await?,
            ),
            _ => {
                debug!("no validation data, skipping validation upload");
                None
            }
        };

        let request = FineTuneRequest::new(
            self.config.model.clone(),
            training_file_id.clone(),
            validation_file_id.clone(),
        );
        info!(model = %request.model, "Creating fine-tune");
        let response = self.openai.create_fine_tune(&request).await?;
        if !response.is_ok() {
            return Err(ActionError::FineTuneRejected {
                status: response.status,
            });
        }
        let job = response.data.ok_or_else(|| {
            ActionError::Deserialization("fine-tune response has no body".to_string())
        })?;

        let fine_tuned_model = job.model_id().to_string();
        info!("Saving fine-tuned model: {}", model_label(&fine_tuned_model));

        workspace.ensure_model_dir().await?;
        let response_path = workspace.write_response(&response.body).await?;
        let artifact = self
            .artifacts
            .upload_artifact(
                &self.config.artifact_name,
                workspace.model_dir(),
                ARTIFACT_PATTERNS,
            )
            .await?;

        self.secrets
            .write_secret(
                &self.config.repository,
                &self.config.secret_name,
                &fine_tuned_model,
            )
            .await?;
        info!(secret = %self.config.secret_name, "Stored fine-tuned model id");

        Ok(RunOutcome {
            training_file_id,
            validation_file_id,
            fine_tune_id: job.job_id().to_string(),
            fine_tuned_model,
            artifact_id: artifact.id,
            response_path,
        })
    }

    async fn upload(
        &self,
        workspace: &Workspace,
        data_set: DataSet,
        path: &Path,
        filename: &str,
    ) -> ActionResult<String> {
        let content = workspace.read(path).await?;
        info!(file = filename, "Uploading {} data", data_set);

        let response = self
            .openai
            .upload_file(UploadFileRequest::fine_tune(content, filename))
            .await?;
        if !response.is_ok() {
            return Err(ActionError::UploadFailed {
                data_set,
                status: response.status,
            });
        }

        let file = response.data.ok_or_else(|| {
            ActionError::Deserialization("upload response has no body".to_string())
        })?;
        debug!(file_id = %file.id, "{} data uploaded", data_set);
        Ok(file.id)
    }
}

/// How a model id appears in the log; `none` while unassigned.
fn model_label(model_id: &str) -> &str {
    if model_id.is_empty() {
        "none"
    } else {
        model_id
    }
}
