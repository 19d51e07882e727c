mod categories;
mod error;
mod mapping;

pub use categories::{ConfigurationError, NetworkError};
pub use error::{ActionError, ActionResult, DataSet};
pub use mapping::{ErrorMapper, GitHubErrorResponse};
