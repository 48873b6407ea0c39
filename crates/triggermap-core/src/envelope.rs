//! Extraction of the envelope fields every event carries.

use num_bigint::BigInt;
use serde_json::Value;

use crate::error::SkipReason;
use crate::id::RecordId;
use crate::json;
use crate::record::{common, FieldValue, OutputRecord};
use crate::schema::EnvelopeLayout;

/// Validated common fields of one event. Never persisted on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventEnvelope {
    pub event_type: String,
    /// Present exactly when the source layout declares a domain id key
    pub domain_id: Option<BigInt>,
    pub block_timestamp: BigInt,
    pub block_number: BigInt,
    pub transaction_hash: Vec<u8>,
}

/// Parse a raw trigger payload into a JSON value.
pub fn parse_payload(payload: &str) -> Result<Value, SkipReason> {
    if payload.trim().is_empty() {
        return Err(SkipReason::MalformedPayload {
            reason: "empty payload".into(),
        });
    }
    serde_json::from_str(payload).map_err(|e| SkipReason::MalformedPayload {
        reason: e.to_string(),
    })
}

impl EventEnvelope {
    /// Pull the envelope out of `value` using the keys in `layout`.
    ///
    /// No field is defaulted: every one of them feeds dispatch or the record
    /// id, so the first absent field skips the record.
    pub fn extract(value: &Value, layout: &EnvelopeLayout) -> Result<Self, SkipReason> {
        if !value.is_object() {
            return Err(SkipReason::MalformedPayload {
                reason: "payload is not a JSON object".into(),
            });
        }

        let event_type = json::get_string(value, &layout.event_type_key)
            .ok_or_else(|| missing(&layout.event_type_key))?;
        let domain_id = match &layout.domain_id_key {
            Some(key) => Some(json::get_integer(value, key).ok_or_else(|| missing(key))?),
            None => None,
        };
        let block_timestamp = json::get_integer(value, &layout.block_timestamp_key)
            .ok_or_else(|| missing(&layout.block_timestamp_key))?;
        let block_number = json::get_integer(value, &layout.block_number_key)
            .ok_or_else(|| missing(&layout.block_number_key))?;
        let transaction_hash = json::get_bytes(value, &layout.transaction_hash_key)
            .ok_or_else(|| missing(&layout.transaction_hash_key))?;

        Ok(Self {
            event_type,
            domain_id,
            block_timestamp,
            block_number,
            transaction_hash,
        })
    }

    /// Id of the record this envelope produces at batch position `index`.
    pub fn record_id(&self, index: usize) -> RecordId {
        RecordId::derive(&self.transaction_hash, index)
    }

    /// Start an output record carrying the envelope's common fields.
    pub fn to_record(&self, record_type: &str, index: usize) -> OutputRecord {
        let mut record = OutputRecord::new(record_type, self.record_id(index));
        if let Some(domain_id) = &self.domain_id {
            record.set(common::PROTOCOL_ID, FieldValue::Int(domain_id.clone()));
        }
        record.set(
            common::BLOCK_TIMESTAMP,
            FieldValue::Int(self.block_timestamp.clone()),
        );
        record.set(common::BLOCK_NUMBER, FieldValue::Int(self.block_number.clone()));
        record.set(
            common::TRANSACTION_HASH,
            FieldValue::Bytes(self.transaction_hash.clone()),
        );
        record
    }
}

fn missing(field: &str) -> SkipReason {
    SkipReason::MissingEnvelopeField {
        field: field.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn full() -> Value {
        json!({
            "eventType": "NftDeployed",
            "protocol_id": "7",
            "block_timestamp": "100",
            "block_number": "5",
            "transaction_hash": "0xab",
        })
    }

    #[test]
    fn extracts_all_fields() {
        let layout = EnvelopeLayout::standard().with_domain_id("protocol_id");
        let env = EventEnvelope::extract(&full(), &layout).unwrap();
        assert_eq!(env.event_type, "NftDeployed");
        assert_eq!(env.domain_id, Some(BigInt::from(7)));
        assert_eq!(env.block_timestamp, BigInt::from(100));
        assert_eq!(env.block_number, BigInt::from(5));
        assert_eq!(env.transaction_hash, vec![0xab]);
    }

    #[test]
    fn layout_without_domain_id_ignores_it() {
        let mut value = full();
        value.as_object_mut().unwrap().remove("protocol_id");
        let env = EventEnvelope::extract(&value, &EnvelopeLayout::standard()).unwrap();
        assert_eq!(env.domain_id, None);
    }

    #[test]
    fn each_missing_field_is_named() {
        let layout = EnvelopeLayout::standard().with_domain_id("protocol_id");
        for key in [
            "eventType",
            "protocol_id",
            "block_timestamp",
            "block_number",
            "transaction_hash",
        ] {
            let mut value = full();
            value.as_object_mut().unwrap().remove(key);
            let err = EventEnvelope::extract(&value, &layout).unwrap_err();
            assert_eq!(
                err,
                SkipReason::MissingEnvelopeField {
                    field: key.to_string()
                }
            );
        }
    }

    #[test]
    fn unparsable_field_counts_as_missing() {
        let mut value = full();
        value["block_number"] = json!("five");
        let err = EventEnvelope::extract(&value, &EnvelopeLayout::standard()).unwrap_err();
        assert!(matches!(err, SkipReason::MissingEnvelopeField { field } if field == "block_number"));
    }

    #[test]
    fn non_object_is_malformed() {
        let err = EventEnvelope::extract(&json!([1, 2]), &EnvelopeLayout::standard()).unwrap_err();
        assert!(matches!(err, SkipReason::MalformedPayload { .. }));
    }

    #[test]
    fn empty_and_invalid_payloads_are_malformed() {
        assert!(matches!(
            parse_payload(""),
            Err(SkipReason::MalformedPayload { .. })
        ));
        assert!(matches!(
            parse_payload("{not json"),
            Err(SkipReason::MalformedPayload { .. })
        ));
        assert!(parse_payload("{}").is_ok());
    }

    #[test]
    fn record_carries_common_fields() {
        let layout = EnvelopeLayout::standard().with_domain_id("protocol_id");
        let env = EventEnvelope::extract(&full(), &layout).unwrap();
        let record = env.to_record("NftDeployed", 4);
        assert_eq!(record.id.as_str(), "ab-4");
        let names: Vec<_> = record.fields.keys().map(String::as_str).collect();
        assert_eq!(names, common::ALL);
    }
}
