//! # triggermap-observability
//!
//! OpenTelemetry-based observability for TriggerMap.
//!
//! ## Built-in metrics
//! - `triggermap.records_mapped`  : counter, tagged with registry + record_type
//! - `triggermap.records_skipped` : counter, tagged with registry + reason
//! - `triggermap.batch_size`      : histogram
//!
//! ## Structured logging
//! Text or JSON logs on stderr, levels configurable per component.

pub mod metrics;
pub mod tracing_setup;

pub use metrics::MapperMetrics;
pub use tracing_setup::{init_tracing, LogConfig};
