//! Bearer-token authentication shared by the OpenAI, GitHub and artifact clients.

use crate::errors::{ActionError, ActionResult, ConfigurationError};
use http::header::AUTHORIZATION;
use http::{HeaderMap, HeaderValue};
use secrecy::{ExposeSecret, SecretString};
use std::fmt;

/// A bearer credential that renders itself into an `Authorization` header.
#[derive(Clone)]
pub struct BearerAuth {
    token: SecretString,
    label: &'static str,
}

impl BearerAuth {
    /// Creates a bearer credential. `label` names the credential in errors.
    pub fn new(token: SecretString, label: &'static str) -> Self {
        Self { token, label }
    }

    /// Rejects empty tokens before any request is made.
    pub fn validate(&self) -> ActionResult<()> {
        if self.token.expose_secret().trim().is_empty() {
            return Err(ConfigurationError::MissingInput(self.label.to_string()).into());
        }
        Ok(())
    }

    /// Adds the `Authorization` header.
    pub fn apply(&self, headers: &mut HeaderMap) -> ActionResult<()> {
        let mut value = HeaderValue::from_str(&format!("Bearer {}", self.token.expose_secret()))
            .map_err(|_| {
                ActionError::Configuration(ConfigurationError::InvalidInput {
                    input: self.label.to_string(),
                    reason: "contains characters not allowed in a header".to_string(),
                })
            })?;
        value.set_sensitive(true);
        headers.insert(AUTHORIZATION, value);
        Ok(())
    }
}

impl fmt::Debug for BearerAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BearerAuth")
            .field("label", &self.label)
            .field("token", &"***")
            .finish()
    }
}
