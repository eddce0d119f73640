// Composition root for the address book service.
//
// Responsibilities
// - Read config from environment.
// - Load the record store from its database file.
// - Wire the store and CSV file into the HTTP router.

pub mod config;
pub mod http;
pub mod logging;
pub mod state;

use std::sync::Arc;

use crate::modules::address_book::core::record_store::{RecordStore, StoreError};
use crate::shared::infrastructure::blob_storage::file::FileBlobStorage;
use crate::shell::config::Config;
use crate::shell::state::AppState;

pub async fn build_state(config: &Config) -> Result<AppState, StoreError> {
    let database = Arc::new(FileBlobStorage::new(&config.db_path));
    let csv = Arc::new(FileBlobStorage::new(&config.csv_path));
    let store = RecordStore::load(database).await?;
    Ok(AppState::new(store, csv))
}
