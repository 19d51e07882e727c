//! Integration tests against WireMock stand-ins for the OpenAI API, the
//! GitHub REST API and the Actions results service.

mod artifacts;
mod secrets;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use crypto_box::aead::OsRng;
use crypto_box::SecretKey;
use jsonwebtoken::{encode, EncodingKey, Header};
use serde_json::{json, Value};
use wiremock::{MockServer, Request};

pub const REPOSITORY: &str = "octocat/hello-world";
pub const PUBLIC_KEY_PATH: &str = "/repos/octocat/hello-world/actions/secrets/public-key";
pub const SECRET_PATH: &str = "/repos/octocat/hello-world/actions/secrets/OPENAI_FINE_TUNED_MODEL";
pub const CREATE_ARTIFACT_PATH: &str =
    "/twirp/github.actions.results.api.v1.ArtifactService/CreateArtifact";
pub const FINALIZE_ARTIFACT_PATH: &str =
    "/twirp/github.actions.results.api.v1.ArtifactService/FinalizeArtifact";

/// A repository key pair plus the body GitHub returns for it.
pub fn repository_key() -> (SecretKey, Value) {
    let secret_key = SecretKey::generate(&mut OsRng);
    let body = json!({
        "key_id": "568250167242549743",
        "key": STANDARD.encode(secret_key.public_key().as_bytes()),
    });
    (secret_key, body)
}

/// Opens the sealed value of a secret PUT request.
pub fn unseal_secret(secret_key: &SecretKey, request: &Request) -> String {
    let body: Value = serde_json::from_slice(&request.body).unwrap();
    assert_eq!(body["key_id"], "568250167242549743");
    let ciphertext = STANDARD
        .decode(body["encrypted_value"].as_str().unwrap())
        .unwrap();
    String::from_utf8(secret_key.unseal(&ciphertext).unwrap()).unwrap()
}

/// A runner token whose scope names run `run-1` and job `job-1`.
pub fn runtime_token() -> String {
    encode(
        &Header::default(),
        &json!({
            "scp": "Actions.GenericRead:00000000 Actions.Results:run-1:job-1",
            "exp": 4102444800u64,
        }),
        &EncodingKey::from_secret(b"runner"),
    )
    .unwrap()
}

pub fn file_object(id: &str, filename: &str) -> Value {
    json!({
        "id": id,
        "object": "file",
        "bytes": 10,
        "created_at": 1669599635,
        "filename": filename,
        "purpose": "fine-tune",
        "status": "uploaded"
    })
}

pub fn fine_tune_job(id: &str, fine_tuned_model: Option<&str>) -> Value {
    json!({
        "id": id,
        "object": "fine-tune",
        "model": "davinci",
        "created_at": 1669599635,
        "status": "pending",
        "fine_tuned_model": fine_tuned_model,
        "hyperparams": {},
        "training_files": [],
        "validation_files": [],
        "result_files": [],
        "events": []
    })
}

pub async fn requests_to(server: &MockServer, method: &str, path: &str) -> Vec<Request> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .into_iter()
        .filter(|r| r.method.as_str() == method && r.url.path() == path)
        .collect()
}
