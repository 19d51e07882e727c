//! Training-data providers and the registry that selects one by name.

mod registry;
mod schema;
pub mod zendesk;

pub use registry::{ProviderRegistry, ProviderSpec};
pub use schema::{FieldSpec, FieldType, ParameterSchema};

use crate::errors::ActionResult;
use async_trait::async_trait;
use bytes::Bytes;

/// A named file body produced by a provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payload {
    pub filename: String,
    pub content: Bytes,
}

impl Payload {
    pub fn new(filename: impl Into<String>, content: impl Into<Bytes>) -> Self {
        Self {
            filename: filename.into(),
            content: content.into(),
        }
    }
}

/// What a provider hands to the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainingData {
    pub training: Payload,
    pub validation: Option<Payload>,
}

impl TrainingData {
    pub fn new(training: Payload) -> Self {
        Self {
            training,
            validation: None,
        }
    }

    pub fn with_validation(mut self, validation: Payload) -> Self {
        self.validation = Some(validation);
        self
    }
}

/// A source of fine-tuning data.
///
/// Providers capture everything they need at construction; `build` takes no
/// input and is called once per run.
#[async_trait]
pub trait Provider: Send + Sync {
    /// Registry identifier of this provider.
    fn id(&self) -> &str;

    /// Produces the training payload and, optionally, a validation payload.
    async fn build(&self) -> ActionResult<TrainingData>;
}
