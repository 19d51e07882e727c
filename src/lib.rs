//! Fine-tune action: collects training data from a provider, uploads it to
//! OpenAI, starts a fine-tune and stores the resulting model id as a GitHub
//! Actions secret.

pub mod action;
pub mod auth;
pub mod client;
pub mod config;
pub mod errors;
pub mod observability;
pub mod pipeline;
pub mod providers;
pub mod services;
pub mod transport;

#[cfg(test)]
pub mod fixtures;
#[cfg(test)]
pub mod mocks;

pub use action::Action;
pub use client::{ArtifactClient, GitHubClient, OpenAIClient};
pub use config::{ActionInputs, EnvInputs, InputSource, MapInputs, PipelineConfig, RepoRef};
pub use errors::{ActionError, ActionResult};
pub use pipeline::{FineTunePipeline, RunOutcome, Workspace};
pub use providers::{Payload, Provider, ProviderRegistry, TrainingData};

pub use services::{
    artifacts::ArtifactUpload,
    files::{FileObject, FilePurpose, UploadFileRequest},
    fine_tunes::{FineTuneJob, FineTuneRequest},
    ApiResponse, ArtifactStore, FineTuneApi, SecretStore,
};

pub mod prelude {
    pub use crate::action::Action;
    pub use crate::config::{EnvInputs, InputSource, PipelineConfig};
    pub use crate::errors::{ActionError, ActionResult};
    pub use crate::pipeline::FineTunePipeline;
    pub use crate::providers::{Provider, ProviderRegistry};
}
