use crate::shared::infrastructure::blob_storage::{BlobStorage, BlobStorageError};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryBlobStorage {
    contents: RwLock<Option<Vec<u8>>>,
    writes: AtomicUsize,
    offline: AtomicBool,
}

impl InMemoryBlobStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contents(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            contents: RwLock::new(Some(bytes.into())),
            ..Self::default()
        }
    }

    pub fn toggle_offline(&self) {
        self.offline.fetch_xor(true, Ordering::SeqCst);
    }

    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    pub async fn contents(&self) -> Option<Vec<u8>> {
        self.contents.read().await.clone()
    }

    fn check_online(&self) -> Result<(), BlobStorageError> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(BlobStorageError::Offline);
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl BlobStorage for InMemoryBlobStorage {
    async fn read(&self) -> Result<Option<Vec<u8>>, BlobStorageError> {
        self.check_online()?;
        Ok(self.contents.read().await.clone())
    }

    async fn write(&self, bytes: &[u8]) -> Result<(), BlobStorageError> {
        self.check_online()?;
        *self.contents.write().await = Some(bytes.to_vec());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
