//! Per-schema validation and record construction.

use serde_json::Value;
use triggermap_core::{
    envelope::EventEnvelope,
    error::SkipReason,
    json,
    record::{FieldValue, OutputRecord},
    schema::{EventSchema, FieldSpec, Presence},
};

/// Build the output record for `envelope` according to `schema`.
///
/// All extra fields are extracted before any enumeration constraint is
/// checked, so a record that is both incomplete and invalid reports the
/// missing field.
pub fn build_record(
    schema: &EventSchema,
    payload: &Value,
    envelope: &EventEnvelope,
    index: usize,
) -> Result<OutputRecord, SkipReason> {
    let mut extracted: Vec<(&FieldSpec, FieldValue, bool)> =
        Vec::with_capacity(schema.fields.len());
    for spec in &schema.fields {
        match json::get_field(payload, &spec.key, spec.kind) {
            Some(value) => extracted.push((spec, value, true)),
            None if spec.presence == Presence::Optional => {
                extracted.push((spec, spec.kind.zero_value(), false))
            }
            None => {
                return Err(SkipReason::MissingTypedField {
                    schema: schema.event_type.clone(),
                    field: spec.key.clone(),
                })
            }
        }
    }

    // Defaults are not subject to enumeration constraints.
    for (spec, value, present) in &extracted {
        if *present && !spec.permits(value) {
            return Err(SkipReason::InvalidEnumValue {
                schema: schema.event_type.clone(),
                field: spec.key.clone(),
                value: value.to_string(),
            });
        }
    }

    let mut record = envelope.to_record(&schema.record_type, index);
    for (spec, value, _) in extracted {
        record.set(spec.name.clone(), value);
    }
    Ok(record)
}
