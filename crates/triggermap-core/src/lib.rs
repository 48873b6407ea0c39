//! # triggermap-core
//!
//! Core types, traits, and pure helpers shared across all TriggerMap crates.
//! The decoder, registry, mapper, and storage crates are built on top of the
//! interfaces defined here.
//!
//! Raw JSON is only ever inspected through [`json`]; everything downstream of
//! it works on typed [`FieldValue`]s.

pub mod envelope;
pub mod error;
pub mod id;
pub mod json;
pub mod record;
pub mod schema;
pub mod store;
pub mod trigger;

pub use envelope::{parse_payload, EventEnvelope};
pub use error::{DecodeError, RegistryError, SkipReason, StoreError};
pub use id::RecordId;
pub use record::{FieldValue, OutputRecord};
pub use schema::{EnvelopeLayout, EventSchema, FieldKind, FieldSpec, Presence, SchemaRegistry};
pub use store::RecordStore;
pub use trigger::{BatchDecoder, TriggerBatch, TriggerRecord};

pub use num_bigint::BigInt;
