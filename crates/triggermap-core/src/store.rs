//! The persistence collaborator contract.

use crate::error::StoreError;
use crate::record::OutputRecord;

/// Keyed record storage with upsert semantics.
///
/// Writing a record whose `(record_type, id)` already exists replaces it, so
/// mapping the same batch twice leaves the store unchanged.
pub trait RecordStore: Send + Sync {
    fn upsert(&self, record: OutputRecord) -> Result<(), StoreError>;
}

impl<T: RecordStore + ?Sized> RecordStore for std::sync::Arc<T> {
    fn upsert(&self, record: OutputRecord) -> Result<(), StoreError> {
        (**self).upsert(record)
    }
}
