use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("Input required and not supplied: {0}")]
    MissingInput(String),

    #[error("Invalid input {input}: {reason}")]
    InvalidInput { input: String, reason: String },

    #[error("Missing environment variable: {0}")]
    MissingEnvironment(String),

    #[error("Invalid repository slug: {0}")]
    InvalidRepository(String),

    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("Invalid runtime token: {0}")]
    InvalidRuntimeToken(String),

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NetworkError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Request timed out: {0}")]
    Timeout(String),
}
