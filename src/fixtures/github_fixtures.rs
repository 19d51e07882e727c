//! GitHub and artifact service fixtures

use serde_json::json;

/// Sample `GET /repos/{owner}/{repo}/actions/secrets/public-key` response
pub fn public_key_response(key_id: &str, key: &str) -> serde_json::Value {
    json!({
        "key_id": key_id,
        "key": key
    })
}

/// Sample GitHub error body
pub fn github_error_response(message: &str) -> serde_json::Value {
    json!({
        "message": message,
        "documentation_url": "https://docs.github.com/rest/actions/secrets"
    })
}

/// Sample `CreateArtifact` response
pub fn create_artifact_response(signed_upload_url: &str) -> serde_json::Value {
    json!({
        "ok": true,
        "signedUploadUrl": signed_upload_url
    })
}

/// Sample `FinalizeArtifact` response
pub fn finalize_artifact_response(artifact_id: &str) -> serde_json::Value {
    json!({
        "ok": true,
        "artifactId": artifact_id
    })
}
