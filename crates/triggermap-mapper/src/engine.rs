//! `Mapper`: maps trigger batches into stored records.

use std::sync::Arc;

use tracing::{debug, info, warn};
use triggermap_core::{
    envelope::{parse_payload, EventEnvelope},
    error::SkipReason,
    record::OutputRecord,
    schema::SchemaRegistry,
    store::RecordStore,
    trigger::{BatchDecoder, TriggerBatch, TriggerRecord},
};
use triggermap_observability::MapperMetrics;

use crate::config::MapperConfig;
use crate::dispatch::build_record;
use crate::error::MapperError;
use crate::report::{MapReport, SkippedRecord};

/// Stateless batch mapper bound to one schema registry.
///
/// Each trigger record is mapped independently: a pure function of its
/// payload and index to zero or one output record.
#[derive(Clone)]
pub struct Mapper {
    registry: Arc<dyn SchemaRegistry>,
    metrics: Option<MapperMetrics>,
}

impl Mapper {
    pub fn new(registry: Arc<dyn SchemaRegistry>) -> Self {
        Self {
            registry,
            metrics: None,
        }
    }

    pub fn from_config(config: &MapperConfig) -> Self {
        let mapper = Self::new(Arc::new(config.source.registry()));
        if config.metrics {
            mapper.with_metrics(MapperMetrics::global())
        } else {
            mapper
        }
    }

    pub fn with_metrics(mut self, metrics: MapperMetrics) -> Self {
        self.metrics = Some(metrics);
        self
    }

    pub fn registry(&self) -> &dyn SchemaRegistry {
        self.registry.as_ref()
    }

    /// Map a single trigger record without touching the store.
    pub fn map_record(&self, record: &TriggerRecord) -> Result<OutputRecord, SkipReason> {
        let payload = parse_payload(&record.payload)?;
        let envelope = EventEnvelope::extract(&payload, self.registry.layout())?;
        let schema = self.registry.get(&envelope.event_type).ok_or_else(|| {
            SkipReason::UnknownEventType {
                event_type: envelope.event_type.clone(),
            }
        })?;
        build_record(schema, &payload, &envelope, record.index)
    }

    /// Map every record of `batch` in order, upserting each result into `store`.
    ///
    /// Malformed or unrecognised records are skipped and the batch continues.
    /// Only a store failure aborts the batch.
    pub fn map_batch(
        &self,
        batch: &TriggerBatch,
        store: &dyn RecordStore,
    ) -> Result<MapReport, MapperError> {
        let registry = self.registry.name();
        let mut report = MapReport {
            total: batch.len(),
            ..MapReport::default()
        };
        if let Some(m) = &self.metrics {
            m.record_batch(registry, batch.len());
        }

        for trigger in batch.records() {
            match self.map_record(trigger) {
                Ok(record) => {
                    let record_type = record.record_type.clone();
                    store
                        .upsert(record)
                        .map_err(|source| MapperError::Store {
                            index: trigger.index,
                            source,
                        })?;
                    report.mapped += 1;
                    if let Some(m) = &self.metrics {
                        m.record_mapped(registry, &record_type);
                    }
                }
                Err(reason) => {
                    if reason.is_silent() {
                        debug!(
                            registry = %registry,
                            index = trigger.index,
                            %reason,
                            "ignoring trigger record"
                        );
                    } else {
                        warn!(
                            registry = %registry,
                            index = trigger.index,
                            payload = %trigger.payload,
                            %reason,
                            "skipping trigger record"
                        );
                    }
                    if let Some(m) = &self.metrics {
                        m.record_skipped(registry, &reason);
                    }
                    report.skipped.push(SkippedRecord {
                        index: trigger.index,
                        reason,
                    });
                }
            }
        }

        info!(
            "Mapper[{registry}]: complete, {} of {} mapped, {} skipped",
            report.mapped,
            report.total,
            report.skipped.len()
        );
        Ok(report)
    }

    /// Decode a raw batch buffer and map it.
    pub fn handle_triggers(
        &self,
        decoder: &dyn BatchDecoder,
        bytes: &[u8],
        store: &dyn RecordStore,
    ) -> Result<MapReport, MapperError> {
        let batch = decoder.decode(bytes)?;
        self.map_batch(&batch, store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use tracing_subscriber::fmt::MakeWriter;
    use triggermap_core::error::StoreError;
    use triggermap_registry::Source;

    struct FailingStore;

    impl RecordStore for FailingStore {
        fn upsert(&self, _record: OutputRecord) -> Result<(), StoreError> {
            Err(StoreError::Unavailable("offline".into()))
        }
    }

    fn weaver() -> Mapper {
        Mapper::from_config(&MapperConfig::new(Source::Weaver))
    }

    #[test]
    fn map_record_reports_unknown_type() {
        let record = TriggerRecord {
            index: 0,
            payload: r#"{"eventType":"Transfer","block_timestamp":"1","block_number":"1","transaction_hash":"0x01"}"#.into(),
        };
        let err = weaver().map_record(&record).unwrap_err();
        assert!(err.is_silent());
    }

    #[test]
    fn store_failure_aborts_batch() {
        let batch = TriggerBatch::from_payloads([
            r#"{"eventType":"ImplementationUpgraded","block_timestamp":"1","block_number":"1","transaction_hash":"0x01","implementation":"0x2"}"#,
        ]);
        let err = weaver().map_batch(&batch, &FailingStore).unwrap_err();
        assert!(matches!(err, MapperError::Store { index: 0, .. }));
    }

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl std::io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for CapturedLogs {
        type Writer = CapturedLogs;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    #[test]
    fn silent_and_warned_skips_both_name_the_registry() {
        let logs = CapturedLogs::default();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(logs.clone())
            .finish();
        let batch = TriggerBatch::from_payloads([
            r#"{"eventType":"Transfer","block_timestamp":"1","block_number":"1","transaction_hash":"0x01"}"#,
            "",
        ]);

        tracing::subscriber::with_default(subscriber, || {
            weaver().map_batch(&batch, &FailingStore).unwrap();
        });

        let text = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
        let ignored = text.lines().find(|l| l.contains("ignoring trigger record")).unwrap();
        let skipped = text.lines().find(|l| l.contains("skipping trigger record")).unwrap();
        assert!(ignored.contains("registry=weaver"), "{ignored}");
        assert!(skipped.contains("registry=weaver"), "{skipped}");
    }

    #[test]
    fn skips_never_touch_the_store() {
        let batch = TriggerBatch::from_payloads(["", "[]", "{}"]);
        let report = weaver().map_batch(&batch, &FailingStore).unwrap();
        assert_eq!(report.mapped, 0);
        assert_eq!(report.skipped.len(), 3);
    }
}
