//! `triggermap map`: decode a batch file, map it, print the records.

use anyhow::{Context, Result};
use std::io::Write;
use tracing::info;
use triggermap_decoder::{decoder_for, BatchFormat};
use triggermap_mapper::{Mapper, MapperConfig};
use triggermap_registry::Source;
use triggermap_storage::InMemoryStore;

pub fn run(input: &str, format: BatchFormat, source: Source, summary_only: bool) -> Result<()> {
    let bytes = std::fs::read(input).with_context(|| format!("reading batch file {input}"))?;
    info!(input, bytes = bytes.len(), %format, registry = %source, "read batch file");

    let mapper = Mapper::from_config(&MapperConfig::new(source));
    let store = InMemoryStore::new();
    let report = mapper
        .handle_triggers(decoder_for(format).as_ref(), &bytes, &store)
        .with_context(|| format!("mapping {input} as {format} against '{source}'"))?;

    let summary = report.summary();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if summary_only {
        writeln!(out, "{}", serde_json::to_string(&summary)?)?;
    } else {
        store.write_json_lines(&mut out)?;
    }
    info!(
        mapped = summary.mapped,
        total = summary.total,
        diagnostics = summary.diagnostics,
        "✓ batch mapped"
    );
    Ok(())
}
