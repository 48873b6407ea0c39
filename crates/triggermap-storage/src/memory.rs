//! In-memory storage backend.
//!
//! Stores mapped records in RAM, keyed by `(record_type, id)`.
//! Useful for testing and one-shot mapping runs that print their output.

use std::collections::BTreeMap;
use std::io::Write;
use std::sync::{Mutex, MutexGuard, PoisonError};

use triggermap_core::{
    error::StoreError,
    id::RecordId,
    record::OutputRecord,
    store::RecordStore,
};

type Key = (String, RecordId);

/// In-memory record store with upsert semantics.
///
/// All data is lost when the process exits.
#[derive(Default)]
pub struct InMemoryStore {
    records: Mutex<BTreeMap<Key, OutputRecord>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every write replaces a whole record, so the map is consistent even if
    /// a holder of the lock panicked.
    fn records(&self) -> MutexGuard<'_, BTreeMap<Key, OutputRecord>> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Look up a record by type and id.
    pub fn get(&self, record_type: &str, id: &RecordId) -> Option<OutputRecord> {
        self.records()
            .get(&(record_type.to_string(), id.clone()))
            .cloned()
    }

    /// Return all records of a type (e.g. `"CampaignJoined"`), ordered by id.
    pub fn records_of(&self, record_type: &str) -> Vec<OutputRecord> {
        self.records()
            .iter()
            .filter(|((ty, _), _)| ty == record_type)
            .map(|(_, r)| r.clone())
            .collect()
    }

    /// Every stored record, ordered by `(record_type, id)`.
    pub fn snapshot(&self) -> Vec<OutputRecord> {
        self.records().values().cloned().collect()
    }

    /// Total number of stored records.
    pub fn len(&self) -> usize {
        self.records().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Write every record as one JSON line.
    pub fn write_json_lines<W: Write>(&self, mut out: W) -> Result<usize, StoreError> {
        let records = self.records();
        for record in records.values() {
            serde_json::to_writer(&mut out, record)?;
            writeln!(out).map_err(|e| StoreError::Other(e.to_string()))?;
        }
        Ok(records.len())
    }
}

impl RecordStore for InMemoryStore {
    fn upsert(&self, record: OutputRecord) -> Result<(), StoreError> {
        let mut records = self.records();
        let key = (record.record_type.clone(), record.id.clone());
        if records.insert(key, record).is_some() {
            tracing::trace!("replaced existing record");
        }
        Ok(())
    }
}
