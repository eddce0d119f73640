use crate::modules::address_book::core::record_store::RecordStore;
use crate::shared::infrastructure::blob_storage::BlobStorage;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Handlers share one store. The mutex makes each request's mutation and file write a single step.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Mutex<RecordStore>>,
    pub csv: Arc<dyn BlobStorage>,
}

impl AppState {
    pub fn new(store: RecordStore, csv: Arc<dyn BlobStorage>) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
            csv,
        }
    }
}
