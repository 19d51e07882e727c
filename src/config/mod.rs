//! Configuration for the action: inputs, runner context, and per-client settings.

mod clients;
mod inputs;
mod pipeline;

pub use clients::{ArtifactConfig, GitHubConfig, OpenAIConfig};
pub use inputs::{
    input_env_name, ActionInputs, EnvInputs, InputSource, MapInputs, RunnerContext,
    DEFAULT_GITHUB_API_URL, DEFAULT_OPENAI_BASE_URL,
};
pub use pipeline::PipelineConfig;

use crate::errors::ConfigurationError;
use std::fmt;
use std::str::FromStr;

/// An `owner/repo` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoRef {
    pub owner: String,
    pub repo: String,
}

impl RepoRef {
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
        }
    }
}

impl FromStr for RepoRef {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().split_once('/') {
            Some((owner, repo))
                if !owner.is_empty() && !repo.is_empty() && !repo.contains('/') =>
            {
                Ok(Self::new(owner, repo))
            }
            _ => Err(ConfigurationError::InvalidRepository(s.to_string())),
        }
    }
}

impl fmt::Display for RepoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

fn default_user_agent() -> String {
    format!("fine-tune-action/{}", env!("CARGO_PKG_VERSION"))
}
