mod artifacts;
mod github;
mod openai;

pub use artifacts::ArtifactClient;
pub use github::GitHubClient;
pub use openai::OpenAIClient;
