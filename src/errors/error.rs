use crate::errors::categories::{ConfigurationError, NetworkError};
use std::fmt;
use thiserror::Error;

pub type ActionResult<T> = Result<T, ActionError>;

/// Which uploaded data set a failure refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSet {
    Training,
    Validation,
}

impl fmt::Display for DataSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSet::Training => write!(f, "training"),
            DataSet::Validation => write!(f, "validation"),
        }
    }
}

#[derive(Error, Debug)]
pub enum ActionError {
    #[error("Unknown service provider: {0}")]
    UnknownProvider(String),

    #[error("Invalid parameters for service provider '{provider}': field '{field}' {reason}")]
    ParameterDecode {
        provider: String,
        field: String,
        reason: String,
    },

    #[error("Training and validation payloads share the file name '{0}'")]
    PayloadNameConflict(String),

    #[error("Failed to upload {data_set} data with status {status}")]
    UploadFailed { data_set: DataSet, status: u16 },

    #[error("Training failed with status {status}")]
    FineTuneRejected { status: u16 },

    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("Network error: {0}")]
    Network(#[from] NetworkError),

    #[error("I/O error while {context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("GitHub API error: {status} - {message}")]
    GitHubApi { status: u16, message: String },

    #[error("Artifact upload failed: {0}")]
    Artifact(String),

    #[error("Secret encryption failed: {0}")]
    Encryption(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

impl ActionError {
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        ActionError::Io {
            context: context.into(),
            source,
        }
    }

    pub fn parameter(
        provider: impl Into<String>,
        field: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        ActionError::ParameterDecode {
            provider: provider.into(),
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// True for failures raised while selecting or constructing a provider.
    pub fn is_provider_error(&self) -> bool {
        matches!(
            self,
            ActionError::UnknownProvider(_) | ActionError::ParameterDecode { .. }
        )
    }

    pub fn status_code(&self) -> Option<u16> {
        match self {
            ActionError::UploadFailed { status, .. }
            | ActionError::FineTuneRejected { status }
            | ActionError::GitHubApi { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ActionError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ActionError::Network(NetworkError::Timeout(err.to_string()))
        } else if err.is_connect() {
            ActionError::Network(NetworkError::ConnectionFailed(err.to_string()))
        } else {
            ActionError::Network(NetworkError::RequestFailed(err.to_string()))
        }
    }
}

impl From<serde_json::Error> for ActionError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_data() || err.is_syntax() || err.is_eof() {
            ActionError::Deserialization(err.to_string())
        } else {
            ActionError::Serialization(err.to_string())
        }
    }
}

impl From<url::ParseError> for ActionError {
    fn from(err: url::ParseError) -> Self {
        ActionError::Configuration(ConfigurationError::InvalidBaseUrl(err.to_string()))
    }
}
