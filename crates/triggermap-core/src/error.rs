//! Error types for the TriggerMap pipeline.

use thiserror::Error;

/// Why a single trigger record produced no output record.
///
/// None of these abort a batch: the mapper logs the reason, drops the record,
/// and moves on to the next index.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SkipReason {
    #[error("Malformed payload: {reason}")]
    MalformedPayload { reason: String },

    #[error("Missing envelope field: {field}")]
    MissingEnvelopeField { field: String },

    #[error("Unknown event type: {event_type}")]
    UnknownEventType { event_type: String },

    #[error("Missing {schema} field: {field}")]
    MissingTypedField { schema: String, field: String },

    #[error("Invalid {schema} value for {field}: {value}")]
    InvalidEnumValue {
        schema: String,
        field: String,
        value: String,
    },
}

impl SkipReason {
    /// Returns `true` for skips that are expected traffic and must not be
    /// reported as warnings.
    pub fn is_silent(&self) -> bool {
        matches!(self, Self::UnknownEventType { .. })
    }

    /// Stable label used as a metrics tag.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MalformedPayload { .. } => "malformed_payload",
            Self::MissingEnvelopeField { .. } => "missing_envelope_field",
            Self::UnknownEventType { .. } => "unknown_event_type",
            Self::MissingTypedField { .. } => "missing_typed_field",
            Self::InvalidEnumValue { .. } => "invalid_enum_value",
        }
    }
}

/// Errors from turning a raw byte buffer into a trigger batch.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("Protobuf decode failed: {reason}")]
    Protobuf { reason: String },

    #[error("Batch is not valid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    #[error("{0}")]
    Other(String),
}

/// Errors from the persistence collaborator.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

/// Errors from building a schema registry.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Schema for event type '{event_type}' already exists")]
    AlreadyExists { event_type: String },

    #[error("Schema validation failed: {reason}")]
    ValidationFailed { reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_unknown_event_type_is_silent() {
        let unknown = SkipReason::UnknownEventType {
            event_type: "Transfer".into(),
        };
        let missing = SkipReason::MissingEnvelopeField {
            field: "block_number".into(),
        };
        assert!(unknown.is_silent());
        assert!(!missing.is_silent());
    }

    #[test]
    fn invalid_enum_message_carries_value() {
        let reason = SkipReason::InvalidEnumValue {
            schema: "ProtocolStatusChanged".into(),
            field: "statusKind".into(),
            value: "Delete".into(),
        };
        assert!(reason.to_string().contains("Delete"));
        assert_eq!(reason.kind(), "invalid_enum_value");
    }
}
