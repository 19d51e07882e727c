//! Action inputs and runner context, read the way the Actions runner exposes them.

use crate::config::RepoRef;
use crate::errors::{ActionResult, ConfigurationError};
use secrecy::SecretString;
use std::collections::HashMap;
use std::path::PathBuf;
use url::Url;

/// Default GitHub API base URL.
pub const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";

/// Default OpenAI API base URL.
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

/// Source of raw variables (the process environment in production).
pub trait InputSource {
    /// Returns the variable's value, if set.
    fn var(&self, key: &str) -> Option<String>;
}

/// Reads variables from the process environment.
#[derive(Debug, Default, Clone, Copy)]
pub struct EnvInputs;

impl InputSource for EnvInputs {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// In-memory variables, for tests and embedding.
#[derive(Debug, Default, Clone)]
pub struct MapInputs {
    vars: HashMap<String, String>,
}

impl MapInputs {
    /// Creates an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a raw variable.
    pub fn with_var(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }

    /// Sets an action input by its declared name.
    pub fn with_input(self, name: &str, value: impl Into<String>) -> Self {
        self.with_var(input_env_name(name), value)
    }
}

impl InputSource for MapInputs {
    fn var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}

/// Maps an input name to the variable the runner sets for it.
pub fn input_env_name(name: &str) -> String {
    format!("INPUT_{}", name.replace(' ', "_").to_uppercase())
}

fn optional_input(source: &dyn InputSource, name: &str) -> Option<String> {
    source
        .var(&input_env_name(name))
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn required_input(source: &dyn InputSource, name: &str) -> ActionResult<String> {
    optional_input(source, name)
        .ok_or_else(|| ConfigurationError::MissingInput(name.to_string()).into())
}

fn boolean_input(source: &dyn InputSource, name: &str, default: bool) -> ActionResult<bool> {
    match optional_input(source, name).as_deref() {
        None => Ok(default),
        Some("true" | "True" | "TRUE") => Ok(true),
        Some("false" | "False" | "FALSE") => Ok(false),
        Some(_) => Err(ConfigurationError::InvalidInput {
            input: name.to_string(),
            reason: "expected true or false".to_string(),
        }
        .into()),
    }
}

/// The step's declared inputs.
#[derive(Debug, Clone)]
pub struct ActionInputs {
    /// Token used for the GitHub secrets API.
    pub gh_token: SecretString,
    /// Registered provider identifier.
    pub service_provider: String,
    /// Provider parameters as a JSON string.
    pub service_provider_params: String,
    /// OpenAI API key.
    pub openai_api_key: SecretString,
    /// Base model override.
    pub model: Option<String>,
    /// Whether to remove the working directories after a failed run.
    pub cleanup_on_failure: bool,
}

impl ActionInputs {
    /// Reads all inputs; missing required inputs are reported by name.
    pub fn from_source(source: &dyn InputSource) -> ActionResult<Self> {
        Ok(Self {
            gh_token: SecretString::new(required_input(source, "ghToken")?),
            service_provider: required_input(source, "serviceProvider")?,
            service_provider_params: required_input(source, "serviceProviderParams")?,
            openai_api_key: SecretString::new(required_input(source, "openaiApiKey")?),
            model: optional_input(source, "model"),
            cleanup_on_failure: boolean_input(source, "cleanupOnFailure", true)?,
        })
    }
}

/// Values the runner provides about the current job.
#[derive(Debug, Clone)]
pub struct RunnerContext {
    /// Repository the workflow runs in.
    pub repository: RepoRef,
    /// GitHub REST API base URL.
    pub github_api_url: Url,
    /// OpenAI API base URL.
    pub openai_base_url: Url,
    /// Actions results service URL (artifact uploads).
    pub results_url: Option<Url>,
    /// Actions runtime token (artifact uploads).
    pub runtime_token: Option<SecretString>,
    /// Whether step debug logging is enabled.
    pub runner_debug: bool,
    /// Directory the working directories are created in.
    pub workspace: PathBuf,
}

impl RunnerContext {
    /// Reads the runner context.
    pub fn from_source(source: &dyn InputSource) -> ActionResult<Self> {
        let repository = source
            .var("GITHUB_REPOSITORY")
            .ok_or_else(|| ConfigurationError::MissingEnvironment("GITHUB_REPOSITORY".to_string()))?
            .parse::<RepoRef>()?;

        let github_api_url = parse_url(
            source
                .var("GITHUB_API_URL")
                .as_deref()
                .unwrap_or(DEFAULT_GITHUB_API_URL),
            "GITHUB_API_URL",
        )?;

        let openai_base_url = parse_url(
            source
                .var("OPENAI_BASE_URL")
                .as_deref()
                .unwrap_or(DEFAULT_OPENAI_BASE_URL),
            "OPENAI_BASE_URL",
        )?;

        let results_url = source
            .var("ACTIONS_RESULTS_URL")
            .filter(|v| !v.is_empty())
            .map(|v| parse_url(&v, "ACTIONS_RESULTS_URL"))
            .transpose()?;

        let runtime_token = source
            .var("ACTIONS_RUNTIME_TOKEN")
            .filter(|v| !v.is_empty())
            .map(SecretString::new);

        let workspace = source
            .var("GITHUB_WORKSPACE")
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));

        Ok(Self {
            repository,
            github_api_url,
            openai_base_url,
            results_url,
            runtime_token,
            runner_debug: source.var("RUNNER_DEBUG").as_deref() == Some("1"),
            workspace,
        })
    }
}

fn parse_url(value: &str, name: &str) -> ActionResult<Url> {
    Url::parse(value).map_err(|e| {
        ConfigurationError::InvalidBaseUrl(format!("Invalid {}: {}", name, e)).into()
    })
}
