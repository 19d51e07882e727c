//! Sealed-box encryption of secret values for the Actions secrets API.

use crate::errors::{ActionError, ActionResult};
use crate::services::secrets::{CreateSecretRequest, PublicKey};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use crypto_box::aead::OsRng;

const KEY_LENGTH: usize = 32;

/// Encrypts `value` for the repository owning `public_key`.
///
/// The result is an anonymous sealed box: only the holder of the matching
/// secret key can open it, and each call produces a different ciphertext.
pub fn seal_secret(public_key: &PublicKey, value: &str) -> ActionResult<CreateSecretRequest> {
    let decoded = STANDARD
        .decode(public_key.key.trim())
        .map_err(|e| ActionError::Encryption(format!("public key is not base64: {}", e)))?;

    let bytes: [u8; KEY_LENGTH] = decoded.as_slice().try_into().map_err(|_| {
        ActionError::Encryption(format!(
            "public key must be {} bytes, got {}",
            KEY_LENGTH,
            decoded.len()
        ))
    })?;

    let sealed = crypto_box::PublicKey::from(bytes)
        .seal(&mut OsRng, value.as_bytes())
        .map_err(|e| ActionError::Encryption(e.to_string()))?;

    Ok(CreateSecretRequest {
        encrypted_value: STANDARD.encode(sealed),
        key_id: public_key.key_id.clone(),
    })
}
