//! Deterministic record identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Key under which an output record is stored: `hex(tx_hash)-index`.
///
/// A pure function of its inputs, so re-delivering the same batch produces the
/// same keys and an upsert-style store ends up in the same state.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RecordId(String);

impl RecordId {
    /// Derive the id for the record at `index` of a batch.
    pub fn derive(transaction_hash: &[u8], index: usize) -> Self {
        Self(format!("{}-{index}", hex::encode(transaction_hash)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// UTF-8 bytes of the id, for stores keyed by byte strings.
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
