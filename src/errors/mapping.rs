use crate::errors::ActionError;
use serde::{Deserialize, Serialize};

/// Error body returned by the GitHub REST API.
#[derive(Debug, Deserialize, Serialize)]
pub struct GitHubErrorResponse {
    pub message: String,
    pub documentation_url: Option<String>,
}

pub struct ErrorMapper;

impl ErrorMapper {
    /// Maps a non-success GitHub response to an ActionError
    pub fn map_github_status(status_code: u16, body: &[u8]) -> ActionError {
        let message = serde_json::from_slice::<GitHubErrorResponse>(body)
            .map(|r| r.message)
            .unwrap_or_else(|_| format!("HTTP {} error", status_code));

        ActionError::GitHubApi {
            status: status_code,
            message,
        }
    }

    /// Maps a failed artifact-service call; the service answers with plain text or twirp JSON
    pub fn map_artifact_status(operation: &str, status_code: u16, body: &[u8]) -> ActionError {
        let detail = serde_json::from_slice::<TwirpErrorResponse>(body)
            .map(|r| r.msg)
            .unwrap_or_else(|_| String::from_utf8_lossy(body).trim().to_string());

        if detail.is_empty() {
            ActionError::Artifact(format!("{} returned status {}", operation, status_code))
        } else {
            ActionError::Artifact(format!(
                "{} returned status {}: {}",
                operation, status_code, detail
            ))
        }
    }
}

#[derive(Debug, Deserialize)]
struct TwirpErrorResponse {
    msg: String,
}
