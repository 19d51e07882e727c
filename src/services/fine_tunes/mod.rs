mod service;
mod types;


pub use service::{FineTuneService, FineTuneServiceImpl};
pub use types::{FineTuneJob, FineTuneRequest};
