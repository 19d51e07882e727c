//! Secret writes against a mock GitHub REST API.

use super::*;
use integrations_fine_tune_action::config::GitHubConfig;
use integrations_fine_tune_action::{ActionError, GitHubClient, RepoRef, SecretStore};
use secrecy::SecretString;
use url::Url;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, ResponseTemplate};

fn client(server: &MockServer) -> GitHubClient {
    let config = GitHubConfig::new(SecretString::new("ghs_token".to_string()))
        .with_base_url(Url::parse(&server.uri()).unwrap());
    GitHubClient::new(config).unwrap()
}

fn repo() -> RepoRef {
    REPOSITORY.parse().unwrap()
}

#[tokio::test]
async fn test_secret_is_sealed_with_repository_key() {
    let server = MockServer::start().await;
    let (secret_key, key_body) = repository_key();

    Mock::given(method("GET"))
        .and(path(PUBLIC_KEY_PATH))
        .and(header("authorization", "Bearer ghs_token"))
        .and(header("x-github-api-version", "2022-11-28"))
        .respond_with(ResponseTemplate::new(200).set_body_json(key_body))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path(SECRET_PATH))
        .and(header("authorization", "Bearer ghs_token"))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    client(&server)
        .write_secret(&repo(), "OPENAI_FINE_TUNED_MODEL", "curie:ft-1")
        .await
        .unwrap();

    let puts = requests_to(&server, "PUT", SECRET_PATH).await;
    assert_eq!(unseal_secret(&secret_key, &puts[0]), "curie:ft-1");
}

#[tokio::test]
async fn test_updating_existing_secret_accepts_no_content() {
    let server = MockServer::start().await;
    let (_, key_body) = repository_key();

    Mock::given(method("GET"))
        .and(path(PUBLIC_KEY_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(key_body))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path(SECRET_PATH))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    assert!(client(&server)
        .write_secret(&repo(), "OPENAI_FINE_TUNED_MODEL", "")
        .await
        .is_ok());
}

#[tokio::test]
async fn test_public_key_failure_stops_before_write() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(PUBLIC_KEY_PATH))
        .respond_with(
            ResponseTemplate::new(403)
                .set_body_json(json!({"message": "Resource not accessible by integration"})),
        )
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path(SECRET_PATH))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let error = client(&server)
        .write_secret(&repo(), "OPENAI_FINE_TUNED_MODEL", "curie:ft-1")
        .await
        .unwrap_err();

    match error {
        ActionError::GitHubApi { status, message } => {
            assert_eq!(status, 403);
            assert_eq!(message, "Resource not accessible by integration");
        }
        other => panic!("unexpected error: {other}"),
    }
}
