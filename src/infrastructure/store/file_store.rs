use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use std::io::ErrorKind;
use std::path::PathBuf;
use uuid::Uuid;

use crate::domain::store::{Store, StoreResult};

/// JSON-file implementation of Store
///
/// The file holds a single JSON array. A missing or blank file reads as an
/// empty collection. Writes land in a sibling temp file which is then
/// renamed over the target.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Creates a store backed by the file at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn temp_path(&self) -> PathBuf {
        let file_name = self
            .path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "store".to_string());

        self.path
            .with_file_name(format!(".{}.{}.tmp", file_name, Uuid::new_v4()))
    }
}

#[async_trait]
impl<T> Store<T> for FileStore
where
    T: Serialize + DeserializeOwned + Send + Sync,
{
    async fn read(&self) -> StoreResult<Vec<T>> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "store file missing, reading empty collection");
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Vec::new());
        }

        Ok(serde_json::from_slice(&bytes)?)
    }

    async fn write(&self, items: &[T]) -> StoreResult<()> {
        let json = serde_json::to_vec_pretty(items)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }

        let temp = self.temp_path();
        tokio::fs::write(&temp, &json).await?;

        if let Err(e) = tokio::fs::rename(&temp, &self.path).await {
            let _ = tokio::fs::remove_file(&temp).await;
            return Err(e.into());
        }

        tracing::debug!(path = %self.path.display(), count = items.len(), "store file written");
        Ok(())
    }
}
