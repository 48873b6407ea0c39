//! TriggerMap metrics definitions.
//!
//! All metrics use OpenTelemetry conventions and are exported through
//! whatever meter provider the host installs globally.

use opentelemetry::{
    metrics::{Counter, Histogram, Meter},
    KeyValue,
};
use triggermap_core::error::SkipReason;

/// Central metrics handle for the mapper.
#[derive(Clone)]
pub struct MapperMetrics {
    pub records_mapped: Counter<u64>,
    pub records_skipped: Counter<u64>,
    pub batch_size: Histogram<u64>,
}

impl MapperMetrics {
    pub fn new(meter: &Meter) -> Self {
        Self {
            records_mapped: meter
                .u64_counter("triggermap.records_mapped")
                .with_description("Trigger records mapped to an output record")
                .init(),
            records_skipped: meter
                .u64_counter("triggermap.records_skipped")
                .with_description("Trigger records skipped, tagged by reason")
                .init(),
            batch_size: meter
                .u64_histogram("triggermap.batch_size")
                .with_description("Number of trigger records in a batch")
                .init(),
        }
    }

    /// Metrics bound to the global meter provider.
    pub fn global() -> Self {
        Self::new(&opentelemetry::global::meter("triggermap"))
    }

    pub fn record_mapped(&self, registry: &str, record_type: &str) {
        self.records_mapped.add(
            1,
            &[
                KeyValue::new("registry", registry.to_string()),
                KeyValue::new("record_type", record_type.to_string()),
            ],
        );
    }

    pub fn record_skipped(&self, registry: &str, reason: &SkipReason) {
        self.records_skipped.add(
            1,
            &[
                KeyValue::new("registry", registry.to_string()),
                KeyValue::new("reason", reason.kind()),
            ],
        );
    }

    pub fn record_batch(&self, registry: &str, size: usize) {
        self.batch_size
            .record(size as u64, &[KeyValue::new("registry", registry.to_string())]);
    }
}
