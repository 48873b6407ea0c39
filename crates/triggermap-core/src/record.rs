//! Typed output records handed to the persistence collaborator.

use indexmap::IndexMap;
use num_bigint::BigInt;
use serde::{Serialize, Serializer};
use std::fmt;

use crate::id::RecordId;

/// Output field names shared by every record type.
pub mod common {
    pub const PROTOCOL_ID: &str = "protocolId";
    pub const BLOCK_TIMESTAMP: &str = "blockTimestamp";
    pub const BLOCK_NUMBER: &str = "blockNumber";
    pub const TRANSACTION_HASH: &str = "transactionHash";

    pub const ALL: [&str; 4] = [PROTOCOL_ID, BLOCK_TIMESTAMP, BLOCK_NUMBER, TRANSACTION_HASH];
}

/// A single typed field value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Str(String),
    Int(BigInt),
    Bytes(Vec<u8>),
}

impl FieldValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Str(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<&BigInt> {
        match self {
            FieldValue::Int(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            FieldValue::Bytes(b) => Some(b.as_slice()),
            _ => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Str(s) => write!(f, "{s}"),
            FieldValue::Int(v) => write!(f, "{v}"),
            FieldValue::Bytes(b) => write!(f, "0x{}", hex::encode(b)),
        }
    }
}

/// Integers go out as decimal strings so values wider than 64 bits survive
/// JSON consumers; bytes go out as `0x`-hex.
impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            FieldValue::Str(s) => serializer.serialize_str(s),
            other => serializer.collect_str(other),
        }
    }
}

/// A fully populated record, ready for upsert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputRecord {
    /// Target record type, e.g. `"CampaignJoined"`
    pub record_type: String,
    pub id: RecordId,
    /// Field values in schema order, common fields first
    pub fields: IndexMap<String, FieldValue>,
}

impl OutputRecord {
    pub fn new(record_type: impl Into<String>, id: RecordId) -> Self {
        Self {
            record_type: record_type.into(),
            id,
            fields: IndexMap::new(),
        }
    }

    pub fn set(&mut self, name: impl Into<String>, value: FieldValue) {
        self.fields.insert(name.into(), value);
    }

    pub fn field(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }
}
