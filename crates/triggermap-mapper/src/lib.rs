//! # triggermap-mapper
//!
//! Maps batches of opaque trigger records into typed, idempotently keyed
//! records.
//!
//! ```text
//! bytes ─ BatchDecoder ─▶ TriggerBatch
//!   for each TriggerRecord (in batch order):
//!     parse JSON ─▶ EventEnvelope::extract ─▶ SchemaRegistry::get(eventType)
//!       ─▶ build_record ─▶ RecordStore::upsert
//! ```
//!
//! Every record-level problem is a skip: it is logged (unknown event types
//! only at debug level), counted in the [`MapReport`], and the batch moves on.
//!
//! ## Usage
//! ```no_run
//! use triggermap_mapper::{Mapper, MapperConfig};
//! use triggermap_registry::Source;
//!
//! let mapper = Mapper::from_config(&MapperConfig::new(Source::Protocols));
//! // let report = mapper.handle_triggers(&decoder, &bytes, &store)?;
//! ```

pub mod config;
pub mod dispatch;
pub mod engine;
pub mod error;
pub mod report;

pub use config::MapperConfig;
pub use engine::Mapper;
pub use error::MapperError;
pub use report::{MapReport, MapSummary, SkippedRecord};
