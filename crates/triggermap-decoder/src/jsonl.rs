//! JSON-lines batches: one payload per line.

use triggermap_core::{
    error::DecodeError,
    trigger::{BatchDecoder, TriggerBatch},
};

/// Treats each line of a UTF-8 buffer as one trigger payload.
///
/// Blank lines stay in the batch as empty payloads so indices match line
/// positions. A single trailing newline does not add a record.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonLinesDecoder;

impl BatchDecoder for JsonLinesDecoder {
    fn decode(&self, bytes: &[u8]) -> Result<TriggerBatch, DecodeError> {
        let text = std::str::from_utf8(bytes)?;
        let body = text.strip_suffix('\n').unwrap_or(text);
        if body.is_empty() {
            return Ok(TriggerBatch::default());
        }
        Ok(TriggerBatch::from_payloads(
            body.split('\n').map(|line| line.strip_suffix('\r').unwrap_or(line)),
        ))
    }
}
