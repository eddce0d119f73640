use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BlobStorageError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("blob storage offline")]
    Offline,
}

/// A single named blob that is always read and written whole.
#[async_trait]
pub trait BlobStorage: Send + Sync {
    /// Returns `None` when the blob has never been written.
    async fn read(&self) -> Result<Option<Vec<u8>>, BlobStorageError>;
    async fn write(&self, bytes: &[u8]) -> Result<(), BlobStorageError>;
}

pub mod file;
pub mod in_memory;
