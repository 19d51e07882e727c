//! Artifact uploads against a mock Actions results service and blob store.

use super::*;
use integrations_fine_tune_action::config::ArtifactConfig;
use integrations_fine_tune_action::{ActionError, ArtifactClient, ArtifactStore};
use secrecy::SecretString;
use sha2::{Digest, Sha256};
use tempfile::TempDir;
use url::Url;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, ResponseTemplate};

const BLOB_PATH: &str = "/blob/model.zip";

fn client(server: &MockServer) -> ArtifactClient {
    ArtifactClient::new(ArtifactConfig::new(
        Some(Url::parse(&server.uri()).unwrap()),
        Some(SecretString::new(runtime_token())),
    ))
    .unwrap()
}

fn model_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("resp.json"), r#"{"id":"ft-123"}"#).unwrap();
    dir
}

async fn mount_create(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path(CREATE_ARTIFACT_PATH))
        .and(body_partial_json(json!({
            "workflowRunBackendId": "run-1",
            "workflowJobRunBackendId": "job-1",
            "name": "model",
            "version": 4
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ok": true,
            "signedUploadUrl": format!("{}{}?sig=abc", server.uri(), BLOB_PATH)
        })))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_upload_creates_stores_and_finalizes() {
    let server = MockServer::start().await;
    mount_create(&server).await;
    Mock::given(method("PUT"))
        .and(path(BLOB_PATH))
        .and(header("x-ms-blob-type", "BlockBlob"))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(FINALIZE_ARTIFACT_PATH))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"ok": true, "artifactId": "42"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let dir = model_dir();
    let upload = client(&server)
        .upload_artifact("model", dir.path(), &["*"])
        .await
        .unwrap();

    assert_eq!(upload.id, "42");
    assert_eq!(upload.name, "model");
    assert_eq!(upload.files, vec!["resp.json".to_string()]);

    let blob = &requests_to(&server, "PUT", BLOB_PATH).await[0].body;
    assert_eq!(upload.size, blob.len() as u64);

    let finalize: Value = serde_json::from_slice(
        &requests_to(&server, "POST", FINALIZE_ARTIFACT_PATH).await[0].body,
    )
    .unwrap();
    assert_eq!(finalize["size"], blob.len().to_string());
    assert_eq!(
        finalize["hash"],
        format!("sha256:{}", hex::encode(Sha256::digest(blob)))
    );
}

#[tokio::test]
async fn test_blob_failure_is_reported_without_finalizing() {
    let server = MockServer::start().await;
    mount_create(&server).await;
    Mock::given(method("PUT"))
        .and(path(BLOB_PATH))
        .respond_with(ResponseTemplate::new(403).set_body_string("AuthenticationFailed"))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(FINALIZE_ARTIFACT_PATH))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let dir = model_dir();
    let error = client(&server)
        .upload_artifact("model", dir.path(), &["*"])
        .await
        .unwrap_err();

    assert!(matches!(error, ActionError::Artifact(ref m) if m.contains("403")));
}

#[tokio::test]
async fn test_upload_without_runner_context_fails() {
    let client = ArtifactClient::new(ArtifactConfig::new(None, None)).unwrap();
    let dir = model_dir();

    let error = client
        .upload_artifact("model", dir.path(), &["*"])
        .await
        .unwrap_err();

    assert!(matches!(error, ActionError::Configuration(_)));
}
