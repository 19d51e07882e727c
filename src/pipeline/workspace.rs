use crate::config::PipelineConfig;
use crate::errors::{ActionError, ActionResult};
use crate::providers::Payload;
use bytes::Bytes;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::fs;
use tracing::debug;

/// File name of the stored fine-tune response inside the model directory.
pub const RESPONSE_FILE: &str = "resp.json";

/// The `data/` and `model/` directories a run works in.
///
/// Directories and files created through a workspace are recorded, and
/// [`Workspace::cleanup`] removes only those. Clones share the record.
#[derive(Debug, Clone)]
pub struct Workspace {
    data_dir: PathBuf,
    model_dir: PathBuf,
    created: Arc<Mutex<Created>>,
}

#[derive(Debug, Default)]
struct Created {
    dirs: Vec<PathBuf>,
    files: Vec<PathBuf>,
}

impl Workspace {
    pub fn new(data_dir: impl Into<PathBuf>, model_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            model_dir: model_dir.into(),
            created: Arc::default(),
        }
    }

    pub fn from_config(config: &PipelineConfig) -> Self {
        Self::new(config.data_path(), config.model_path())
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn model_dir(&self) -> &Path {
        &self.model_dir
    }

    pub fn response_path(&self) -> PathBuf {
        self.model_dir.join(RESPONSE_FILE)
    }

    /// Creates the data directory; succeeds if it already exists.
    pub async fn ensure_data_dir(&self) -> ActionResult<()> {
        self.create_dir(&self.data_dir).await
    }

    pub async fn ensure_model_dir(&self) -> ActionResult<()> {
        self.create_dir(&self.model_dir).await
    }

    /// Writes a payload into the data directory under its own file name.
    pub async fn write_payload(&self, payload: &Payload) -> ActionResult<PathBuf> {
        let name = Path::new(&payload.filename)
            .file_name()
            .filter(|n| *n == payload.filename.as_str())
            .ok_or_else(|| {
                ActionError::io(
                    format!("writing payload '{}'", payload.filename),
                    io::Error::new(io::ErrorKind::InvalidInput, "not a plain file name"),
                )
            })?;

        let path = self.data_dir.join(name);
        self.write_file(&path, &payload.content).await?;
        debug!(path = %path.display(), bytes = payload.content.len(), "payload written");
        Ok(path)
    }

    pub async fn read(&self, path: &Path) -> ActionResult<Bytes> {
        fs::read(path)
            .await
            .map(Bytes::from)
            .map_err(|e| ActionError::io(format!("reading {}", path.display()), e))
    }

    /// Stores the raw fine-tune response as `model/resp.json`.
    pub async fn write_response(&self, body: &[u8]) -> ActionResult<PathBuf> {
        let path = self.response_path();
        self.write_file(&path, body).await?;
        Ok(path)
    }

    /// Removes what this run created: directories it made, and the files it
    /// wrote into directories that existed before. Anything already gone is
    /// skipped.
    pub async fn cleanup(&self) -> ActionResult<()> {
        let (dirs, files) = {
            let mut created = self.created();
            (
                std::mem::take(&mut created.dirs),
                std::mem::take(&mut created.files),
            )
        };

        for file in files.iter().filter(|f| !dirs.iter().any(|d| f.starts_with(d))) {
            match fs::remove_file(file).await {
                Ok(()) => debug!(path = %file.display(), "removed working file"),
                Err(e) if e.kind() == io::ErrorKind::NotFound => {}
                Err(e) => {
                    return Err(ActionError::io(format!("removing {}", file.display()), e));
                }
            }
        }

        for dir in &dirs {
            match fs::remove_dir_all(dir).await {
                Ok(()) => debug!(path = %dir.display(), "removed working directory"),
                Err(e) if e.kind() == io::ErrorKind::NotFound => {}
                Err(e) => {
                    return Err(ActionError::io(format!("removing {}", dir.display()), e));
                }
            }
        }
        Ok(())
    }

    async fn create_dir(&self, path: &Path) -> ActionResult<()> {
        let existed = fs::try_exists(path)
            .await
            .map_err(|e| ActionError::io(format!("checking {}", path.display()), e))?;
        fs::create_dir_all(path)
            .await
            .map_err(|e| ActionError::io(format!("creating {}", path.display()), e))?;
        if !existed {
            self.created().dirs.push(path.to_path_buf());
        }
        Ok(())
    }

    async fn write_file(&self, path: &Path, contents: &[u8]) -> ActionResult<()> {
        fs::write(path, contents)
            .await
            .map_err(|e| ActionError::io(format!("writing {}", path.display()), e))?;
        self.created().files.push(path.to_path_buf());
        Ok(())
    }

    fn created(&self) -> MutexGuard<'_, Created> {
        self.created.lock().unwrap_or_else(|e| e.into_inner())
    }
}
