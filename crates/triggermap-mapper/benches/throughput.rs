//! Batch mapping throughput benchmarks.
//!
//! # Running
//! ```bash
//! cargo bench --package triggermap-mapper
//! ```

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use triggermap_core::{json, trigger::TriggerBatch};
use triggermap_decoder::{Events, ProtoBatchDecoder};
use triggermap_mapper::{Mapper, MapperConfig};
use triggermap_registry::Source;
use triggermap_storage::InMemoryStore;

// ─── Batch factory ────────────────────────────────────────────────────────────

fn make_payload(i: u64) -> String {
    // Mix in skips so the benchmark covers both paths
    match i % 10 {
        0 => String::new(),
        1 => serde_json::json!({
            "eventType": "Unrelated",
            "protocol_id": "1",
            "block_timestamp": "1700000000",
            "block_number": "1",
            "transaction_hash": "0x01",
        })
        .to_string(),
        _ => serde_json::json!({
            "eventType": "CampaignJoined",
            "protocol_id": (i % 7).to_string(),
            "block_timestamp": (1_700_000_000 + i).to_string(),
            "block_number": (800_000 + i).to_string(),
            "transaction_hash": format!("0x{:064x}", i),
            "caller": format!("0x{:x}", i * 31),
            "token_id": i.to_string(),
            "user": format!("0x{:x}", i * 17),
        })
        .to_string(),
    }
}

fn make_batch(n: usize) -> TriggerBatch {
    TriggerBatch::from_payloads((0..n as u64).map(make_payload))
}

// ─── Benchmarks ───────────────────────────────────────────────────────────────

fn bench_map_batch(c: &mut Criterion) {
    let mapper = Mapper::from_config(&MapperConfig::new(Source::Protocols));

    let mut group = c.benchmark_group("map_batch");
    for batch_size in [100, 1_000, 10_000] {
        let batch = make_batch(batch_size);
        group.throughput(Throughput::Elements(batch_size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(batch_size), &batch, |b, batch| {
            b.iter(|| {
                let store = InMemoryStore::new();
                let _ = mapper.map_batch(batch, &store);
            });
        });
    }
    group.finish();
}

fn bench_handle_triggers(c: &mut Criterion) {
    let mapper = Mapper::from_config(&MapperConfig::new(Source::Protocols));
    let bytes = Events::from(&make_batch(10_000)).to_bytes();

    c.bench_function("handle_triggers_proto_10k", |b| {
        b.iter(|| {
            let store = InMemoryStore::new();
            let _ = mapper.handle_triggers(&ProtoBatchDecoder, &bytes, &store);
        });
    });
}

fn bench_accessor(c: &mut Criterion) {
    let value: serde_json::Value = serde_json::from_str(&make_payload(5)).unwrap_or_default();

    c.bench_function("get_integer_token_id", |b| {
        b.iter(|| json::get_integer(&value, "token_id"));
    });
}

criterion_group!(benches, bench_map_batch, bench_handle_triggers, bench_accessor);
criterion_main!(benches);
