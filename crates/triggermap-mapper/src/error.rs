//! Batch-level failures.
//!
//! Record-level problems never show up here; they are `SkipReason`s in the
//! batch report.

use thiserror::Error;
use triggermap_core::error::{DecodeError, StoreError};

#[derive(Debug, Error)]
pub enum MapperError {
    #[error("Batch decode failed: {0}")]
    Decode(#[from] DecodeError),

    #[error("Store write failed at index {index}: {source}")]
    Store {
        index: usize,
        #[source]
        source: StoreError,
    },
}
