use serde::{Deserialize, Serialize};

/// Artifact format version understood by the results service.
pub const ARTIFACT_VERSION: u32 = 4;

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateArtifactRequest {
    pub workflow_run_backend_id: String,
    pub workflow_job_run_backend_id: String,
    pub name: String,
    pub version: u32,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct CreateArtifactResponse {
    #[serde(default)]
    pub ok: bool,

    #[serde(rename = "signedUploadUrl", alias = "signed_upload_url", default)]
    pub signed_upload_url: String,
}

/// Completes an upload. `size` is an int64 and travels as a JSON string.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FinalizeArtifactRequest {
    pub workflow_run_backend_id: String,
    pub workflow_job_run_backend_id: String,
    pub name: String,
    pub size: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct FinalizeArtifactResponse {
    #[serde(default)]
    pub ok: bool,

    #[serde(rename = "artifactId", alias = "artifact_id", default)]
    pub artifact_id: String,
}

/// A finished artifact upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactUpload {
    pub id: String,
    pub name: String,
    /// Archive size in bytes.
    pub size: u64,
    /// Names of the archived files.
    pub files: Vec<String>,
}
