//! Wiring of inputs, clients and provider into one pipeline run.

use crate::client::{ArtifactClient, GitHubClient, OpenAIClient};
use crate::config::{
    ActionInputs, ArtifactConfig, GitHubConfig, InputSource, OpenAIConfig, PipelineConfig,
    RunnerContext,
};
use crate::errors::ActionResult;
use crate::pipeline::{FineTunePipeline, RunOutcome};
use crate::providers::ProviderRegistry;
use std::sync::Arc;
use tracing::info;

/// A configured action, ready to run.
#[derive(Debug, Clone)]
pub struct Action {
    inputs: ActionInputs,
    context: RunnerContext,
    registry: ProviderRegistry,
}

impl Action {
    /// Reads inputs and runner context; fails on the first missing or
    /// malformed value.
    pub fn from_source(source: &dyn InputSource) -> ActionResult<Self> {
        Ok(Self {
            inputs: ActionInputs::from_source(source)?,
            context: RunnerContext::from_source(source)?,
            registry: ProviderRegistry::new(),
        })
    }

    pub fn with_registry(mut self, registry: ProviderRegistry) -> Self {
        self.registry = registry;
        self
    }

    pub fn inputs(&self) -> &ActionInputs {
        &self.inputs
    }

    pub fn context(&self) -> &RunnerContext {
        &self.context
    }

    /// Selects the provider, builds the clients and runs the pipeline.
    pub async fn run(&self) -> ActionResult<RunOutcome> {
        let provider = self.registry.create(
            &self.inputs.service_provider,
            &self.inputs.service_provider_params,
        )?;

        let openai = OpenAIClient::new(
            OpenAIConfig::new(self.inputs.openai_api_key.clone())
                .with_base_url(self.context.openai_base_url.clone()),
        )?;
        let github = GitHubClient::new(
            GitHubConfig::new(self.inputs.gh_token.clone())
                .with_base_url(self.context.github_api_url.clone()),
        )?;
        let artifacts = ArtifactClient::new(ArtifactConfig::from_context(&self.context))?;

        let config = PipelineConfig::from_inputs(&self.inputs, &self.context);
        info!(
            provider = %self.inputs.service_provider,
            model = %config.model,
            repository = %config.repository,
            "starting fine-tune run"
        );

        FineTunePipeline::new(
            config,
            Arc::new(openai),
            Arc::new(github),
            Arc::new(artifacts),
        )
        .run(provider.as_ref())
        .await
    }
}
