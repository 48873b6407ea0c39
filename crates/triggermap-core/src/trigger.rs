//! Trigger batches and the decoder contract that produces them.

use serde::{Deserialize, Serialize};

use crate::error::DecodeError;

/// One raw item of a batch: its position and the JSON description it carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriggerRecord {
    /// 0-based position in the batch, used in record id derivation
    pub index: usize,
    /// JSON event description; may be empty
    pub payload: String,
}

/// An ordered batch of trigger records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriggerBatch {
    records: Vec<TriggerRecord>,
}

impl TriggerBatch {
    /// Build a batch from payloads in order; indices follow iteration order.
    pub fn from_payloads<I, S>(payloads: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let records = payloads
            .into_iter()
            .enumerate()
            .map(|(index, payload)| TriggerRecord {
                index,
                payload: payload.into(),
            })
            .collect();
        Self { records }
    }

    pub fn records(&self) -> &[TriggerRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl IntoIterator for TriggerBatch {
    type Item = TriggerRecord;
    type IntoIter = std::vec::IntoIter<TriggerRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

/// Turns a raw byte buffer into an ordered trigger batch.
///
/// Indices must be 0-based and match the order records appear in the buffer.
/// A malformed buffer fails the whole batch.
pub trait BatchDecoder: Send + Sync {
    fn decode(&self, bytes: &[u8]) -> Result<TriggerBatch, DecodeError>;
}
