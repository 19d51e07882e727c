//! Client for the Actions results service that stores workflow artifacts.

use crate::auth::BearerAuth;
use crate::config::ArtifactConfig;
use crate::errors::{ActionResult, ErrorMapper};
use crate::services::artifacts::{ArtifactService, ArtifactUpload, BackendIds};
use crate::services::ArtifactStore;
use crate::transport::{endpoint, HttpRequest, HttpTransport, ReqwestTransport};
use async_trait::async_trait;
use bytes::Bytes;
use http::HeaderMap;
use secrecy::ExposeSecret;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;
use std::sync::Arc;
use tracing::debug;
use url::Url;

const ARTIFACT_SERVICE: &str = "github.actions.results.api.v1.ArtifactService";

pub struct ArtifactClient {
    transport: Arc<dyn HttpTransport>,
    config: ArtifactConfig,
}

impl ArtifactClient {
    pub fn new(config: ArtifactConfig) -> ActionResult<Self> {
        let transport = ReqwestTransport::new(config.timeout, &config.user_agent)?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    pub fn with_transport(config: ArtifactConfig, transport: Arc<dyn HttpTransport>) -> Self {
        Self { transport, config }
    }

    pub fn artifacts(&self) -> ArtifactService<'_> {
        ArtifactService::new(self)
    }

    pub(crate) fn backend_ids(&self) -> ActionResult<BackendIds> {
        let (_, token) = self.config.require()?;
        BackendIds::from_runtime_token(token.expose_secret())
    }

    /// Calls a results-service RPC with a JSON body.
    pub(crate) async fn twirp<Req, Resp>(&self, method: &str, body: &Req) -> ActionResult<Resp>
    where
        Req: Serialize + Sync,
        Resp: DeserializeOwned,
    {
        let (results_url, token) = self.config.require()?;
        let url = endpoint(
            results_url,
            &format!("twirp/{}/{}", ARTIFACT_SERVICE, method),
        )?;

        let mut headers = HeaderMap::new();
        BearerAuth::new(token.clone(), "ACTIONS_RUNTIME_TOKEN").apply(&mut headers)?;

        debug!(method, "artifact service request");

        let request = HttpRequest::post(url).with_headers(headers).json(body)?;
        let response = self.transport.send(request).await?;
        if !response.is_success() {
            return Err(ErrorMapper::map_artifact_status(
                method,
                response.status,
                &response.body,
            ));
        }
        response.json()
    }

    /// Stores the archive at a pre-signed blob URL.
    pub(crate) async fn put_blob(&self, signed_url: &str, data: Bytes) -> ActionResult<()> {
        let url = Url::parse(signed_url)?;
        let request = HttpRequest::put(url)
            .header("x-ms-blob-type", "BlockBlob")?
            .header("content-type", "application/zip")?
            .bytes(data);

        let response = self.transport.send(request).await?;
        if !response.is_success() {
            return Err(ErrorMapper::map_artifact_status(
                "Blob upload",
                response.status,
                &response.body,
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl ArtifactStore for ArtifactClient {
    async fn upload_artifact(
        &self,
        name: &str,
        root_dir: &Path,
        patterns: &[&str],
    ) -> ActionResult<ArtifactUpload> {
        self.artifacts().upload(name, root_dir, patterns).await
    }
}
