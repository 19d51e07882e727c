mod sealing;
mod service;
mod types;


pub use sealing::seal_secret;
pub use service::SecretsService;
pub use types::{CreateSecretRequest, PublicKey};
