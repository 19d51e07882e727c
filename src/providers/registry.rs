use crate::errors::{ActionError, ActionResult};
use crate::providers::{zendesk, ParameterSchema, Provider};
use tracing::{info, warn};

/// Builds a provider from schema-checked parameters.
pub type ProviderConstructor = fn(serde_json::Value) -> ActionResult<Box<dyn Provider>>;

/// One registered provider: its tag, parameter schema and constructor.
#[derive(Clone, Copy)]
pub struct ProviderSpec {
    pub id: &'static str,
    pub schema: ParameterSchema,
    pub construct: ProviderConstructor,
}

impl std::fmt::Debug for ProviderSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderSpec")
            .field("id", &self.id)
            .field("schema", &self.schema)
            .finish()
    }
}

/// Table of known providers.
#[derive(Debug, Clone)]
pub struct ProviderRegistry {
    specs: Vec<ProviderSpec>,
}

impl Default for ProviderRegistry {
    fn default() -> Self {
        Self {
            specs: vec![zendesk::spec()],
        }
    }
}

impl ProviderRegistry {
    /// Registry with the built-in providers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with no providers.
    pub fn empty() -> Self {
        Self { specs: Vec::new() }
    }

    /// Adds a provider, replacing any with the same id.
    pub fn register(mut self, spec: ProviderSpec) -> Self {
        self.specs.retain(|s| s.id != spec.id);
        self.specs.push(spec);
        self
    }

    pub fn provider_ids(&self) -> Vec<&'static str> {
        self.specs.iter().map(|s| s.id).collect()
    }

    /// Selects the provider `provider_id` and constructs it from `params_json`.
    pub fn create(&self, provider_id: &str, params_json: &str) -> ActionResult<Box<dyn Provider>> {
        let spec = self
            .specs
            .iter()
            .find(|s| s.id == provider_id)
            .ok_or_else(|| {
                warn!(
                    provider = provider_id,
                    known = ?self.provider_ids(),
                    "unknown service provider"
                );
                ActionError::UnknownProvider(provider_id.to_string())
            })?;

        let params = spec.schema.parse(spec.id, params_json)?;
        let provider = (spec.construct)(params)?;
        info!(provider = spec.id, "service provider selected");
        Ok(provider)
    }
}
