// File backed implementation of the BlobStorage port.
//
// Writes truncate and overwrite the target in place. There is no
// temp-file-then-rename step, so a crash during a write can leave a partial file.

use crate::shared::infrastructure::blob_storage::{BlobStorage, BlobStorageError};
use std::io::ErrorKind;
use std::path::PathBuf;

pub struct FileBlobStorage {
    path: PathBuf,
}

impl FileBlobStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait::async_trait]
impl BlobStorage for FileBlobStorage {
    async fn read(&self) -> Result<Option<Vec<u8>>, BlobStorageError> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(BlobStorageError::Io(e)),
        }
    }

    async fn write(&self, bytes: &[u8]) -> Result<(), BlobStorageError> {
        tokio::fs::write(&self.path, bytes).await?;
        tracing::debug!(path = %self.path.display(), bytes = bytes.len(), "blob written");
        Ok(())
    }
}
