//! Backend ids carried in the Actions runtime token.

use crate::errors::{ActionResult, ConfigurationError};
use jsonwebtoken::{decode, DecodingKey, Validation};
use serde::Deserialize;

const RESULTS_SCOPE_PREFIX: &str = "Actions.Results";

/// Identifies the workflow run and job an artifact belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendIds {
    pub workflow_run_backend_id: String,
    pub workflow_job_run_backend_id: String,
}

#[derive(Debug, Deserialize)]
struct RuntimeClaims {
    #[serde(default)]
    scp: String,
}

impl BackendIds {
    /// Reads the ids from the token's `scp` claim, which holds a
    /// space-separated scope list containing `Actions.Results:<run>:<job>`.
    ///
    /// The token is only inspected, not verified; the results service does
    /// the verification.
    pub fn from_runtime_token(token: &str) -> ActionResult<Self> {
        let mut validation = Validation::default();
        validation.insecure_disable_signature_validation();
        validation.validate_exp = false;
        validation.validate_aud = false;
        validation.required_spec_claims.clear();

        let claims = decode::<RuntimeClaims>(token, &DecodingKey::from_secret(&[]), &validation)
            .map_err(|e| ConfigurationError::InvalidRuntimeToken(e.to_string()))?
            .claims;

        claims
            .scp
            .split(' ')
            .find_map(|scope| {
                let mut parts = scope.split(':');
                match (parts.next(), parts.next(), parts.next(), parts.next()) {
                    (Some(RESULTS_SCOPE_PREFIX), Some(run), Some(job), None)
                        if !run.is_empty() && !job.is_empty() =>
                    {
                        Some(Self {
                            workflow_run_backend_id: run.to_string(),
                            workflow_job_run_backend_id: job.to_string(),
                        })
                    }
                    _ => None,
                }
            })
            .ok_or_else(|| {
                ConfigurationError::InvalidRuntimeToken(
                    "no Actions.Results scope in token".to_string(),
                )
                .into()
            })
    }
}
