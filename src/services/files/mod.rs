mod service;
mod types;


pub use service::{FileService, FileServiceImpl};
pub use types::{FileObject, FilePurpose, UploadFileRequest};
