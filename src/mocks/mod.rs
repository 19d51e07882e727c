//! Mock implementations for testing
//!
//! In-memory stand-ins for the transport, the remote services and the data
//! provider. Each records what it was asked to do so tests can assert on the
//! calls made, not just the result.

mod mock_provider;
mod mock_services;
mod mock_transport;

pub use mock_provider::MockProvider;
pub use mock_services::{
    MockArtifactStore, MockFineTuneApi, MockSecretStore, UploadedArtifact, WrittenSecret,
};
pub use mock_transport::MockHttpTransport;
