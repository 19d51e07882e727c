//! GitHub REST client, scoped to what the action writes back to the repository.

use crate::auth::BearerAuth;
use crate::config::{GitHubConfig, RepoRef};
use crate::errors::{ActionResult, ErrorMapper};
use crate::services::secrets::SecretsService;
use crate::services::SecretStore;
use crate::transport::{endpoint, HttpRequest, HttpResponse, HttpTransport, ReqwestTransport};
use async_trait::async_trait;
use http::HeaderMap;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

pub struct GitHubClient {
    transport: Arc<dyn HttpTransport>,
    auth: BearerAuth,
    config: GitHubConfig,
}

impl GitHubClient {
    /// Creates a client backed by reqwest.
    pub fn new(config: GitHubConfig) -> ActionResult<Self> {
        config.validate()?;
        let transport = ReqwestTransport::new(config.timeout, &config.user_agent)?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    pub fn with_transport(config: GitHubConfig, transport: Arc<dyn HttpTransport>) -> Self {
        let auth = BearerAuth::new(config.token.clone(), "ghToken");
        Self {
            transport,
            auth,
            config,
        }
    }

    pub fn base_url(&self) -> &str {
        self.config.base_url.as_str()
    }

    pub fn secrets(&self) -> SecretsService<'_> {
        SecretsService::new(self)
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ActionResult<T> {
        let request = HttpRequest::get(endpoint(&self.config.base_url, path)?);
        self.execute(request).await?.json()
    }

    pub async fn put_no_response<B: Serialize + Sync + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ActionResult<()> {
        let request = HttpRequest::put(endpoint(&self.config.base_url, path)?).json(body)?;
        self.execute(request).await.map(|_| ())
    }

    async fn execute(&self, request: HttpRequest) -> ActionResult<HttpResponse> {
        let mut headers = HeaderMap::new();
        self.auth.apply(&mut headers)?;

        let request = request
            .with_headers(headers)
            .header("accept", "application/vnd.github+json")?
            .header("x-github-api-version", &self.config.api_version)?;

        debug!(method = %request.method, path = request.url.path(), "GitHub request");

        let response = self.transport.send(request).await?;
        if !response.is_success() {
            return Err(ErrorMapper::map_github_status(response.status, &response.body));
        }
        Ok(response)
    }
}

#[async_trait]
impl SecretStore for GitHubClient {
    async fn write_secret(&self, repo: &RepoRef, name: &str, value: &str) -> ActionResult<()> {
        self.secrets().write(repo, name, value).await
    }
}
