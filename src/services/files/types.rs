use bytes::Bytes;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An uploaded file as reported by `POST /files`.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct FileObject {
    pub id: String,

    #[serde(default)]
    pub object: String,

    #[serde(default)]
    pub bytes: u64,

    #[serde(default)]
    pub created_at: i64,

    #[serde(default)]
    pub filename: String,

    #[serde(default)]
    pub purpose: String,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub status: Option<String>,
}

/// Intended use of an uploaded file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilePurpose {
    #[serde(rename = "fine-tune")]
    FineTune,
}

impl FilePurpose {
    pub fn as_str(&self) -> &'static str {
        match self {
            FilePurpose::FineTune => "fine-tune",
        }
    }
}

impl fmt::Display for FilePurpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct UploadFileRequest {
    pub data: Bytes,
    pub filename: String,
    pub purpose: FilePurpose,
}

impl UploadFileRequest {
    pub fn new(data: Bytes, filename: impl Into<String>, purpose: FilePurpose) -> Self {
        Self {
            data,
            filename: filename.into(),
            purpose,
        }
    }

    /// A training or validation upload.
    pub fn fine_tune(data: Bytes, filename: impl Into<String>) -> Self {
        Self::new(data, filename, FilePurpose::FineTune)
    }
}
