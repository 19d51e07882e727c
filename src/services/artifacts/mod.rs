mod archive;
mod service;
mod token;
mod types;


pub use archive::{build_archive, collect_files, Archive};
pub use service::ArtifactService;
pub use token::BackendIds;
pub use types::{
    ArtifactUpload, CreateArtifactRequest, CreateArtifactResponse, FinalizeArtifactRequest,
    FinalizeArtifactResponse, ARTIFACT_VERSION,
};

#[cfg(test)]
pub(crate) use token::tests::runtime_token;
