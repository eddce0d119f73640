use crate::modules::address_book::core::record_store::RecordStore;
use crate::shared::infrastructure::blob_storage::in_memory::InMemoryBlobStorage;
use crate::shell::state::AppState;
use std::sync::Arc;

pub struct TestState {
    pub state: AppState,
    pub database: Arc<InMemoryBlobStorage>,
    pub csv: Arc<InMemoryBlobStorage>,
}

pub async fn make_test_state() -> TestState {
    let database = Arc::new(InMemoryBlobStorage::new());
    let csv = Arc::new(InMemoryBlobStorage::new());
    let store = RecordStore::load(database.clone())
        .await
        .expect("load failed");
    TestState {
        state: AppState::new(store, csv.clone()),
        database,
        csv,
    }
}
