//! Zendesk provider.
//!
//! The fetch is simulated: after a fixed delay the provider returns canned
//! training and validation files. The credential is captured so a real fetch
//! can use it.

use crate::errors::{ActionError, ActionResult};
use crate::providers::{
    FieldSpec, FieldType, ParameterSchema, Payload, Provider, ProviderSpec, TrainingData,
};
use async_trait::async_trait;
use secrecy::SecretString;
use serde::Deserialize;
use std::time::Duration;
use tracing::info;

pub const PROVIDER_ID: &str = "zendesk";

const DEFAULT_FETCH_DELAY: Duration = Duration::from_millis(1000);

pub const SCHEMA: ParameterSchema =
    ParameterSchema::new(&[FieldSpec::required("apiKey", FieldType::String)]);

/// Registry entry for this provider.
pub fn spec() -> ProviderSpec {
    ProviderSpec {
        id: PROVIDER_ID,
        schema: SCHEMA,
        construct: |params| {
            let provider: Box<dyn Provider> = Box::new(ZendeskProvider::from_params(params)?);
            Ok(provider)
        },
    }
}

#[derive(Debug, Deserialize)]
pub struct ZendeskParams {
    #[serde(rename = "apiKey")]
    pub api_key: SecretString,
}

#[derive(Debug)]
pub struct ZendeskProvider {
    api_key: SecretString,
    fetch_delay: Duration,
}

impl ZendeskProvider {
    pub fn new(params: ZendeskParams) -> Self {
        Self {
            api_key: params.api_key,
            fetch_delay: DEFAULT_FETCH_DELAY,
        }
    }

    /// Decodes schema-checked parameters.
    pub fn from_params(params: serde_json::Value) -> ActionResult<Self> {
        let params: ZendeskParams = serde_json::from_value(params)
            .map_err(|e| ActionError::parameter(PROVIDER_ID, "$", e.to_string()))?;
        Ok(Self::new(params))
    }

    pub fn with_fetch_delay(mut self, delay: Duration) -> Self {
        self.fetch_delay = delay;
        self
    }

    pub fn api_key(&self) -> &SecretString {
        &self.api_key
    }
}

#[async_trait]
impl Provider for ZendeskProvider {
    fn id(&self) -> &str {
        PROVIDER_ID
    }

    async fn build(&self) -> ActionResult<TrainingData> {
        info!(provider = PROVIDER_ID, "fetching training data");
        tokio::time::sleep(self.fetch_delay).await;

        Ok(TrainingData::new(Payload::new("train.jsonl", "train data"))
            .with_validation(Payload::new("valid.jsonl", "valid data")))
    }
}
