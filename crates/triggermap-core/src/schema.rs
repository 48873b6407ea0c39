//! Event-type schemas and the registry contract.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::record::FieldValue;
use num_bigint::BigInt;

/// How a field is read from the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Str,
    Int,
    Bytes,
}

impl FieldKind {
    /// The value an optional field takes when the payload lacks it.
    pub fn zero_value(self) -> FieldValue {
        match self {
            FieldKind::Str => FieldValue::Str(String::new()),
            FieldKind::Int => FieldValue::Int(BigInt::from(0)),
            FieldKind::Bytes => FieldValue::Bytes(Vec::new()),
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKind::Str => write!(f, "string"),
            FieldKind::Int => write!(f, "integer"),
            FieldKind::Bytes => write!(f, "bytes"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Presence {
    /// Absent value skips the record
    #[default]
    Required,
    /// Absent value falls back to the kind's zero value
    Optional,
}

/// One extra field an event type carries beyond the envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Key in the JSON payload, e.g. `"token_id"`
    pub key: String,
    /// Field name on the output record, e.g. `"tokenId"`
    pub name: String,
    pub kind: FieldKind,
    #[serde(default)]
    pub presence: Presence,
    /// Literal values the field is restricted to, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed: Option<Vec<String>>,
}

impl FieldSpec {
    pub fn required(key: impl Into<String>, name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            kind,
            presence: Presence::Required,
            allowed: None,
        }
    }

    pub fn optional(key: impl Into<String>, name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            presence: Presence::Optional,
            ..Self::required(key, name, kind)
        }
    }

    /// Restrict the field to the given literals.
    pub fn one_of<I, S>(mut self, allowed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed = Some(allowed.into_iter().map(Into::into).collect());
        self
    }

    /// Whether `value` satisfies this field's enumeration constraint.
    pub fn permits(&self, value: &FieldValue) -> bool {
        match &self.allowed {
            None => true,
            Some(allowed) => {
                let text = value.to_string();
                allowed.iter().any(|a| *a == text)
            }
        }
    }
}

/// Declaration of a single event type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventSchema {
    /// `eventType` discriminant in the payload
    pub event_type: String,
    /// Output record type name
    pub record_type: String,
    /// Extra fields in output order
    pub fields: Vec<FieldSpec>,
}

impl EventSchema {
    /// A schema whose record type is named after its event type.
    pub fn new(event_type: impl Into<String>, fields: Vec<FieldSpec>) -> Self {
        let event_type = event_type.into();
        Self {
            record_type: event_type.clone(),
            event_type,
            fields,
        }
    }

    pub fn with_record_type(mut self, record_type: impl Into<String>) -> Self {
        self.record_type = record_type.into();
        self
    }
}

/// Payload keys of the envelope fields every event carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvelopeLayout {
    pub event_type_key: String,
    /// Protocol/domain id key; `None` when the source emits no such field
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain_id_key: Option<String>,
    pub block_timestamp_key: String,
    pub block_number_key: String,
    pub transaction_hash_key: String,
}

impl EnvelopeLayout {
    /// Layout without a domain id.
    pub fn standard() -> Self {
        Self {
            event_type_key: "eventType".into(),
            domain_id_key: None,
            block_timestamp_key: "block_timestamp".into(),
            block_number_key: "block_number".into(),
            transaction_hash_key: "transaction_hash".into(),
        }
    }

    pub fn with_domain_id(mut self, key: impl Into<String>) -> Self {
        self.domain_id_key = Some(key.into());
        self
    }
}

impl Default for EnvelopeLayout {
    fn default() -> Self {
        Self::standard()
    }
}

/// A read-only view of the event-type schemas for one trigger source.
/// Concrete implementations live in `triggermap-registry`.
pub trait SchemaRegistry: Send + Sync {
    /// Short name of the source, e.g. `"protocols"`.
    fn name(&self) -> &str;

    /// Envelope keys for payloads from this source.
    fn layout(&self) -> &EnvelopeLayout;

    /// Look up the schema for an `eventType` discriminant.
    fn get(&self, event_type: &str) -> Option<&EventSchema>;

    /// All registered event types, sorted.
    fn event_types(&self) -> Vec<&str>;
}
