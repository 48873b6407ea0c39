//! `triggermap encode`: JSON lines → protobuf `Events`.

use anyhow::{Context, Result};
use triggermap_core::trigger::BatchDecoder;
use triggermap_decoder::{Events, JsonLinesDecoder};

pub fn run(input: &str, output: &str) -> Result<()> {
    let bytes = std::fs::read(input).with_context(|| format!("reading {input}"))?;
    let batch = JsonLinesDecoder
        .decode(&bytes)
        .with_context(|| format!("decoding {input} as JSON lines"))?;

    let encoded = Events::from(&batch).to_bytes();
    std::fs::write(output, &encoded).with_context(|| format!("writing {output}"))?;

    tracing::info!(input, output, records = batch.len(), bytes = encoded.len(), "encoded batch");
    println!(
        "✓ Encoded {} records ({} bytes) to {output}",
        batch.len(),
        encoded.len()
    );
    Ok(())
}
