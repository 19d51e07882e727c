use super::{ActionInputs, RepoRef, RunnerContext};
use std::path::{Path, PathBuf};

/// Base model used when no `model` input is given.
pub const DEFAULT_MODEL: &str = "davinci";

/// Name of the repository secret that receives the fine-tuned model id.
pub const DEFAULT_SECRET_NAME: &str = "OPENAI_FINE_TUNED_MODEL";

/// Settings for one pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub repository: RepoRef,
    pub model: String,
    pub workspace_root: PathBuf,
    pub data_dir: String,
    pub model_dir: String,
    pub artifact_name: String,
    pub secret_name: String,
    pub cleanup_on_failure: bool,
}

impl PipelineConfig {
    pub fn new(repository: RepoRef) -> Self {
        Self {
            repository,
            model: DEFAULT_MODEL.to_string(),
            workspace_root: PathBuf::from("."),
            data_dir: "data".to_string(),
            model_dir: "model".to_string(),
            artifact_name: "model".to_string(),
            secret_name: DEFAULT_SECRET_NAME.to_string(),
            cleanup_on_failure: true,
        }
    }

    /// Builds the run settings from the step inputs and runner context.
    pub fn from_inputs(inputs: &ActionInputs, context: &RunnerContext) -> Self {
        let mut config = Self::new(context.repository.clone())
            .with_workspace_root(context.workspace.clone())
            .with_cleanup_on_failure(inputs.cleanup_on_failure);
        if let Some(model) = &inputs.model {
            config = config.with_model(model.clone());
        }
        config
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_workspace_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.workspace_root = root.into();
        self
    }

    pub fn with_secret_name(mut self, name: impl Into<String>) -> Self {
        self.secret_name = name.into();
        self
    }

    pub fn with_cleanup_on_failure(mut self, cleanup: bool) -> Self {
        self.cleanup_on_failure = cleanup;
        self
    }

    pub fn data_path(&self) -> PathBuf {
        self.workspace_root.join(&self.data_dir)
    }

    pub fn model_path(&self) -> PathBuf {
        self.workspace_root.join(&self.model_dir)
    }

    pub fn workspace_root(&self) -> &Path {
        &self.workspace_root
    }
}
