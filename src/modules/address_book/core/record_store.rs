// The address book's record store.
//
// Holds every record in memory keyed by integer id and rewrites the whole
// database blob after each mutation. Identifiers come from a monotonic
// counter and are never reused after a delete.
//
// On disk the mapping is a JSON object keyed by decimal ids. Key "0" holds a
// sentinel record whose id is the counter. Records written by older builds
// use `uniq_id`, `email_addr` and `phone_numb`; those names are still read.
//
// The store does no locking of its own. The shell wraps it in a single mutex.

use crate::modules::address_book::core::csv_line::{parse_csv_line, to_csv_line};
use crate::modules::address_book::core::record::{Record, SENTINEL_KEY};
use crate::shared::infrastructure::blob_storage::{BlobStorage, BlobStorageError};
use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("record {0} not found")]
    NotFound(u64),

    #[error(transparent)]
    Storage(#[from] BlobStorageError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("blob is not valid utf-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),

    #[error("record identifiers exhausted at {0}")]
    IdsExhausted(u64),
}

pub struct RecordStore {
    records: BTreeMap<u64, Record>,
    last_id: u64,
    storage: Arc<dyn BlobStorage>,
}

impl RecordStore {
    /// Reads the database blob, or creates and persists an empty store when none exists yet.
    pub async fn load(storage: Arc<dyn BlobStorage>) -> Result<Self, StoreError> {
        let Some(bytes) = storage.read().await? else {
            let store = Self {
                records: BTreeMap::new(),
                last_id: 0,
                storage,
            };
            store.persist().await?;
            info!("initialized empty address book");
            return Ok(store);
        };

        let mut records: BTreeMap<u64, Record> = serde_json::from_slice(&bytes)?;
        let sentinel = records.remove(&SENTINEL_KEY);
        let counter = sentinel
            .and_then(|s| s.id.parse::<u64>().ok())
            .unwrap_or(0);
        let highest_key = records.keys().next_back().copied().unwrap_or(0);
        let last_id = counter.max(highest_key);
        info!(records = records.len(), last_id, "loaded address book");

        Ok(Self {
            records,
            last_id,
            storage,
        })
    }

    pub fn last_id(&self) -> u64 {
        self.last_id
    }

    pub async fn create(&mut self, candidate: Record) -> Result<Record, StoreError> {
        self.last_id = self
            .last_id
            .checked_add(1)
            .ok_or(StoreError::IdsExhausted(self.last_id))?;
        let record = Record::stamped(candidate, self.last_id);
        self.records.insert(self.last_id, record.clone());
        info!(id = self.last_id, "record created");
        self.persist().await?;
        Ok(record)
    }

    /// Key 0 resolves to the sentinel. Callers must keep it out of user-facing output.
    pub fn get(&self, id: u64) -> Result<Record, StoreError> {
        if id == SENTINEL_KEY {
            return Ok(Record::sentinel(self.last_id));
        }
        self.records.get(&id).cloned().ok_or(StoreError::NotFound(id))
    }

    /// User-visible records keyed by id. The sentinel and rows carrying its marker are not included.
    pub fn list(&self) -> BTreeMap<u64, Record> {
        self.records
            .iter()
            .filter(|(_, record)| !record.is_sentinel())
            .map(|(id, record)| (*id, record.clone()))
            .collect()
    }

    /// The exact mapping written to disk, sentinel included.
    pub fn snapshot(&self) -> BTreeMap<u64, Record> {
        let mut snapshot = self.records.clone();
        snapshot.insert(SENTINEL_KEY, Record::sentinel(self.last_id));
        snapshot
    }

    pub async fn update(&mut self, id: u64, patch: Record) -> Result<Record, StoreError> {
        let record = self
            .records
            .get_mut(&id)
            .ok_or(StoreError::NotFound(id))?;
        record.apply_patch(patch);
        let updated = record.clone();
        debug!(id, "record updated");
        self.persist().await?;
        Ok(updated)
    }

    pub async fn delete(&mut self, id: u64) -> Result<(), StoreError> {
        self.records.remove(&id).ok_or(StoreError::NotFound(id))?;
        info!(id, "record deleted");
        self.persist().await
    }

    /// One CSV line per record in key order. Rows carrying the sentinel marker are omitted.
    pub fn export(&self) -> Vec<String> {
        self.records
            .values()
            .filter(|record| !record.is_sentinel())
            .map(to_csv_line)
            .collect()
    }

    /// Replaces every record with the parsed rows, keyed 1..=n in row order.
    /// The CSV id column is ignored; each record's id is restamped with its new key.
    /// Nothing is persisted until the next mutation or an explicit save.
    pub fn import<I, S>(&mut self, lines: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.records.clear();
        self.last_id = 0;
        for line in lines {
            let line = line.as_ref().trim_end_matches('\r');
            if line.is_empty() {
                continue;
            }
            self.last_id += 1;
            self.records
                .insert(self.last_id, Record::stamped(parse_csv_line(line), self.last_id));
        }
        info!(records = self.last_id, "imported address book");
        self.last_id as usize
    }

    pub async fn import_from(&mut self, source: &dyn BlobStorage) -> Result<usize, StoreError> {
        let bytes = source
            .read()
            .await?
            .ok_or_else(|| BlobStorageError::Io(ErrorKind::NotFound.into()))?;
        let text = String::from_utf8(bytes)?;
        Ok(self.import(text.split('\n')))
    }

    pub async fn export_to(&self, target: &dyn BlobStorage) -> Result<usize, StoreError> {
        let lines = self.export();
        let mut text = String::new();
        for line in &lines {
            text.push_str(line);
            text.push('\n');
        }
        target.write(text.as_bytes()).await?;
        info!(records = lines.len(), "exported address book");
        Ok(lines.len())
    }

    /// Overwrites the database blob with the full mapping.
    pub async fn persist(&self) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec(&self.snapshot())?;
        self.storage.write(&bytes).await?;
        debug!(bytes = bytes.len(), "address book persisted");
        Ok(())
    }
}
