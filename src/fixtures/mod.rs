//! Test fixtures: canned response bodies for the OpenAI, GitHub and artifact
//! services.

mod github_fixtures;

pub use github_fixtures::*;
pub use openai_fixtures::*;
