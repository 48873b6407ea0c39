//! Protobuf batch envelope.
//!
//! Wire shape (package `starknet.v1`):
//!
//! ```text
//! message Events { repeated Event events = 1; }
//! message Event  { string json_description = 1; }
//! ```

use prost::Message;
use triggermap_core::{
    error::DecodeError,
    trigger::{BatchDecoder, TriggerBatch},
};

#[derive(Clone, PartialEq, Message)]
pub struct Events {
    #[prost(message, repeated, tag = "1")]
    pub events: Vec<Event>,
}

#[derive(Clone, PartialEq, Message)]
pub struct Event {
    #[prost(string, tag = "1")]
    pub json_description: String,
}

impl Events {
    /// Build a message from JSON descriptions, in order.
    pub fn from_descriptions<I, S>(descriptions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            events: descriptions
                .into_iter()
                .map(|d| Event {
                    json_description: d.into(),
                })
                .collect(),
        }
    }

    /// Protobuf wire encoding of this message.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.encode_to_vec()
    }
}

impl From<&TriggerBatch> for Events {
    fn from(batch: &TriggerBatch) -> Self {
        Self::from_descriptions(batch.records().iter().map(|r| r.payload.clone()))
    }
}

impl From<Events> for TriggerBatch {
    fn from(message: Events) -> Self {
        TriggerBatch::from_payloads(message.events.into_iter().map(|e| e.json_description))
    }
}

/// Decodes an `Events` protobuf message into a trigger batch.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProtoBatchDecoder;

impl BatchDecoder for ProtoBatchDecoder {
    fn decode(&self, bytes: &[u8]) -> Result<TriggerBatch, DecodeError> {
        let message = Events::decode(bytes).map_err(|e| DecodeError::Protobuf {
            reason: e.to_string(),
        })?;
        tracing::debug!(events = message.events.len(), "decoded protobuf batch");
        Ok(message.into())
    }
}
