use serde::{Deserialize, Serialize};

/// Request to create or update a secret.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateSecretRequest {
    /// Encrypted value (base64 encoded, encrypted with repo public key).
    pub encrypted_value: String,
    /// Key ID used for encryption.
    pub key_id: String,
}

/// Public key for encrypting secrets.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct PublicKey {
    pub key_id: String,
    /// Curve25519 public key, base64 encoded.
    pub key: String,
}
