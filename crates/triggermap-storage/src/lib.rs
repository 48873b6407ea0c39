//! triggermap-storage: persistence backends for mapped records.
//!
//! Every backend implements `triggermap_core::RecordStore` with upsert
//! semantics, which is what makes re-mapping a batch idempotent.

pub mod memory;

pub use memory::InMemoryStore;
