use super::{default_user_agent, RunnerContext, DEFAULT_GITHUB_API_URL, DEFAULT_OPENAI_BASE_URL};
use crate::errors::{ActionResult, ConfigurationError};
use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;
use url::Url;

/// Settings for the OpenAI client.
#[derive(Debug, Clone)]
pub struct OpenAIConfig {
    pub api_key: SecretString,
    pub base_url: Url,
    pub timeout: Duration,
    pub user_agent: String,
}

impl OpenAIConfig {
    /// Creates a config with the default base URL and timeout.
    pub fn new(api_key: SecretString) -> Self {
        Self {
            api_key,
            base_url: default_url(DEFAULT_OPENAI_BASE_URL),
            timeout: Duration::from_secs(60),
            user_agent: default_user_agent(),
        }
    }

    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = base_url;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Validates the configuration
    pub fn validate(&self) -> ActionResult<()> {
        if self.api_key.expose_secret().trim().is_empty() {
            return Err(ConfigurationError::MissingInput("openaiApiKey".to_string()).into());
        }
        validate_timeout(self.timeout)
    }
}

/// Settings for the GitHub REST client.
#[derive(Debug, Clone)]
pub struct GitHubConfig {
    pub token: SecretString,
    pub base_url: Url,
    pub api_version: String,
    pub timeout: Duration,
    pub user_agent: String,
}

impl GitHubConfig {
    pub fn new(token: SecretString) -> Self {
        Self {
            token,
            base_url: default_url(DEFAULT_GITHUB_API_URL),
            api_version: "2022-11-28".to_string(),
            timeout: Duration::from_secs(30),
            user_agent: default_user_agent(),
        }
    }

    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = base_url;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn validate(&self) -> ActionResult<()> {
        if self.token.expose_secret().trim().is_empty() {
            return Err(ConfigurationError::MissingInput("ghToken".to_string()).into());
        }
        validate_timeout(self.timeout)
    }
}

/// Settings for the Actions artifact service.
///
/// Both the results URL and the runtime token are injected by the runner;
/// outside a workflow run they are absent and uploads fail with a
/// configuration error.
#[derive(Debug, Clone)]
pub struct ArtifactConfig {
    pub results_url: Option<Url>,
    pub runtime_token: Option<SecretString>,
    pub timeout: Duration,
    pub user_agent: String,
}

impl ArtifactConfig {
    pub fn new(results_url: Option<Url>, runtime_token: Option<SecretString>) -> Self {
        Self {
            results_url,
            runtime_token,
            timeout: Duration::from_secs(120),
            user_agent: default_user_agent(),
        }
    }

    pub fn from_context(context: &RunnerContext) -> Self {
        Self::new(context.results_url.clone(), context.runtime_token.clone())
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the results URL and runtime token, or the missing variable.
    pub fn require(&self) -> ActionResult<(&Url, &SecretString)> {
        let url = self.results_url.as_ref().ok_or_else(|| {
            ConfigurationError::MissingEnvironment("ACTIONS_RESULTS_URL".to_string())
        })?;
        let token = self.runtime_token.as_ref().ok_or_else(|| {
            ConfigurationError::MissingEnvironment("ACTIONS_RUNTIME_TOKEN".to_string())
        })?;
        Ok((url, token))
    }
}

fn validate_timeout(timeout: Duration) -> ActionResult<()> {
    if timeout.is_zero() {
        return Err(ConfigurationError::InvalidInput {
            input: "timeout".to_string(),
            reason: "must be greater than 0".to_string(),
        }
        .into());
    }
    Ok(())
}

fn default_url(value: &str) -> Url {
    // Constants above are valid URLs.
    Url::parse(value).unwrap_or_else(|_| unreachable!("invalid built-in URL {}", value))
}
