//! `triggermap registries`: list compiled-in registries.

use anyhow::Result;
use triggermap_core::schema::SchemaRegistry;
use triggermap_registry::Source;

pub fn run(json: bool) -> Result<()> {
    if json {
        let listing: Vec<_> = Source::ALL
            .iter()
            .map(|source| {
                let registry = source.registry();
                serde_json::json!({
                    "name": registry.name(),
                    "layout": registry.layout(),
                    "schemas": registry.all_schemas(),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&listing)?);
        return Ok(());
    }

    for source in Source::ALL {
        let registry = source.registry();
        let domain = registry
            .layout()
            .domain_id_key
            .as_deref()
            .unwrap_or("none");
        println!("{} (domain id: {domain})", registry.name());
        for schema in registry.all_schemas() {
            println!("  {} → {}", schema.event_type, schema.record_type);
            for field in &schema.fields {
                let allowed = field
                    .allowed
                    .as_ref()
                    .map(|a| format!(" ∈ {{{}}}", a.join(", ")))
                    .unwrap_or_default();
                println!(
                    "    - {} ← {}: {}{}",
                    field.name, field.key, field.kind, allowed
                );
            }
        }
    }
    Ok(())
}
