use crate::client::GitHubClient;
use crate::config::RepoRef;
use crate::errors::ActionResult;
use crate::services::secrets::{seal_secret, CreateSecretRequest, PublicKey};
use tracing::{debug, info};

/// Repository Actions secrets.
pub struct SecretsService<'a> {
    client: &'a GitHubClient,
}

impl<'a> SecretsService<'a> {
    pub fn new(client: &'a GitHubClient) -> Self {
        Self { client }
    }

    /// Gets repository public key for encrypting secrets.
    pub async fn get_public_key(&self, repo: &RepoRef) -> ActionResult<PublicKey> {
        self.client
            .get(&format!(
                "/repos/{}/{}/actions/secrets/public-key",
                repo.owner, repo.repo
            ))
            .await
    }

    /// Creates or updates a repository secret from an already sealed value.
    pub async fn create_or_update_secret(
        &self,
        repo: &RepoRef,
        name: &str,
        request: &CreateSecretRequest,
    ) -> ActionResult<()> {
        self.client
            .put_no_response(
                &format!("/repos/{}/{}/actions/secrets/{}", repo.owner, repo.repo, name),
                request,
            )
            .await
    }

    /// Seals `value` with the repository key and stores it as `name`.
    pub async fn write(&self, repo: &RepoRef, name: &str, value: &str) -> ActionResult<()> {
        let public_key = self.get_public_key(repo).await?;
        debug!(key_id = %public_key.key_id, "fetched repository public key");

        let request = seal_secret(&public_key, value)?;
        self.create_or_update_secret(repo, name, &request).await?;

        info!(secret = name, repository = %repo, "secret updated");
        Ok(())
    }
}
