//! # triggermap-decoder
//!
//! Turns raw batch buffers into ordered [`TriggerBatch`]es.
//!
//! - [`ProtoBatchDecoder`]: the protobuf `Events` message emitted by the
//!   upstream map module
//! - [`JsonLinesDecoder`]: one JSON payload per line, for fixtures and tooling

pub mod format;
pub mod jsonl;
pub mod proto;

pub use format::BatchFormat;
pub use jsonl::JsonLinesDecoder;
pub use proto::{Event, Events, ProtoBatchDecoder};

use triggermap_core::{
    error::DecodeError,
    trigger::{BatchDecoder, TriggerBatch},
};

/// Returns the decoder for `format`.
pub fn decoder_for(format: BatchFormat) -> Box<dyn BatchDecoder> {
    match format {
        BatchFormat::Proto => Box::new(ProtoBatchDecoder),
        BatchFormat::JsonLines => Box::new(JsonLinesDecoder),
    }
}

/// Decode `bytes` as `format`.
pub fn decode(format: BatchFormat, bytes: &[u8]) -> Result<TriggerBatch, DecodeError> {
    decoder_for(format).decode(bytes)
}
