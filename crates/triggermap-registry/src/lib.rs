//! # triggermap-registry
//!
//! Event-type schema registry for TriggerMap.
//!
//! A registry pairs an envelope layout with the schemas of every event type a
//! trigger source emits. Registries are compiled in; [`Source`] selects one.
//!
//! The public-facing API is the `SchemaRegistry` trait from `triggermap-core`.

pub mod builtin;
pub mod memory;

pub use builtin::{protocols, weaver, Source};
pub use memory::MemoryRegistry;
