//! Zip packaging of the files that make up an artifact.

use crate::errors::{ActionError, ActionResult};
use bytes::Bytes;
use glob::Pattern;
use sha2::{Digest, Sha256};
use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};
use zip::write::FileOptions;
use zip::CompressionMethod;

/// A zip archive ready for upload.
#[derive(Debug, Clone)]
pub struct Archive {
    pub bytes: Bytes,
    /// Lowercase hex SHA-256 of `bytes`.
    pub sha256: String,
    pub files: Vec<String>,
}

impl Archive {
    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }
}

/// Lists regular files directly under `root` whose names match any pattern,
/// sorted by name.
pub fn collect_files(root: &Path, patterns: &[&str]) -> ActionResult<Vec<PathBuf>> {
    let patterns = patterns
        .iter()
        .map(|p| {
            Pattern::new(p)
                .map_err(|e| ActionError::Artifact(format!("invalid pattern '{}': {}", p, e)))
        })
        .collect::<ActionResult<Vec<_>>>()?;

    let entries = std::fs::read_dir(root)
        .map_err(|e| ActionError::io(format!("reading {}", root.display()), e))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| ActionError::io(format!("reading {}", root.display()), e))?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let matched = path
            .file_name()
            .and_then(|n| n.to_str())
            .map(|name| patterns.iter().any(|p| p.matches(name)))
            .unwrap_or(false);
        if matched {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Zips `files` (stored under their file names) and hashes the result.
pub fn build_archive(files: &[PathBuf]) -> ActionResult<Archive> {
    if files.is_empty() {
        return Err(ActionError::Artifact("no files matched the upload patterns".to_string()));
    }

    let options = FileOptions::default().compression_method(CompressionMethod::Deflated);
    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    let mut names = Vec::with_capacity(files.len());

    for path in files {
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| {
                ActionError::Artifact(format!("unsupported file name: {}", path.display()))
            })?
            .to_string();
        let contents = std::fs::read(path)
            .map_err(|e| ActionError::io(format!("reading {}", path.display()), e))?;

        writer.start_file(name.as_str(), options).map_err(zip_error)?;
        writer
            .write_all(&contents)
            .map_err(|e| ActionError::io("writing artifact archive", e))?;
        names.push(name);
    }

    let bytes = writer.finish().map_err(zip_error)?.into_inner();
    let sha256 = hex::encode(Sha256::digest(&bytes));

    Ok(Archive {
        bytes: Bytes::from(bytes),
        sha256,
        files: names,
    })
}

fn zip_error(err: zip::result::ZipError) -> ActionError {
    ActionError::Artifact(format!("failed to build archive: {}", err))
}
