//! In-memory `SchemaRegistry` implementation.
//!
//! Built once at startup, then read-only; shareable across threads behind an
//! `Arc` without locking.

use std::collections::{HashMap, HashSet};

use triggermap_core::{
    error::RegistryError,
    record::common,
    schema::{EnvelopeLayout, EventSchema, SchemaRegistry},
};

/// Schemas for one trigger source, keyed by `eventType`.
#[derive(Debug, Clone)]
pub struct MemoryRegistry {
    name: String,
    layout: EnvelopeLayout,
    by_event_type: HashMap<String, EventSchema>,
}

impl MemoryRegistry {
    pub fn new(name: impl Into<String>, layout: EnvelopeLayout) -> Self {
        Self {
            name: name.into(),
            layout,
            by_event_type: HashMap::new(),
        }
    }

    /// Add a schema to the registry.
    pub fn add(&mut self, schema: EventSchema) -> Result<(), RegistryError> {
        if self.by_event_type.contains_key(&schema.event_type) {
            return Err(RegistryError::AlreadyExists {
                event_type: schema.event_type,
            });
        }
        validate(&schema)?;
        tracing::debug!(
            registry = %self.name,
            event_type = %schema.event_type,
            fields = schema.fields.len(),
            "registered schema"
        );
        self.by_event_type.insert(schema.event_type.clone(), schema);
        Ok(())
    }

    /// Builder-style `add()`.
    pub fn with(mut self, schema: EventSchema) -> Result<Self, RegistryError> {
        self.add(schema)?;
        Ok(self)
    }

    /// Returns the number of registered event types.
    pub fn len(&self) -> usize {
        self.by_event_type.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_event_type.is_empty()
    }

    /// Returns all schemas, sorted by event type.
    pub fn all_schemas(&self) -> Vec<&EventSchema> {
        let mut schemas: Vec<_> = self.by_event_type.values().collect();
        schemas.sort_by(|a, b| a.event_type.cmp(&b.event_type));
        schemas
    }
}

impl SchemaRegistry for MemoryRegistry {
    fn name(&self) -> &str {
        &self.name
    }

    fn layout(&self) -> &EnvelopeLayout {
        &self.layout
    }

    fn get(&self, event_type: &str) -> Option<&EventSchema> {
        self.by_event_type.get(event_type)
    }

    fn event_types(&self) -> Vec<&str> {
        let mut types: Vec<&str> = self.by_event_type.keys().map(String::as_str).collect();
        types.sort_unstable();
        types
    }
}

fn validate(schema: &EventSchema) -> Result<(), RegistryError> {
    let fail = |reason: String| Err(RegistryError::ValidationFailed { reason });

    if schema.event_type.is_empty() {
        return fail("event type must not be empty".into());
    }
    if schema.record_type.is_empty() {
        return fail(format!("{}: record type must not be empty", schema.event_type));
    }

    let mut seen = HashSet::new();
    for field in &schema.fields {
        if common::ALL.contains(&field.name.as_str()) {
            return fail(format!(
                "{}: field '{}' shadows a common field",
                schema.event_type, field.name
            ));
        }
        if !seen.insert(field.name.as_str()) {
            return fail(format!(
                "{}: duplicate field '{}'",
                schema.event_type, field.name
            ));
        }
        if matches!(&field.allowed, Some(allowed) if allowed.is_empty()) {
            return fail(format!(
                "{}: field '{}' has an empty set of allowed values",
                schema.event_type, field.name
            ));
        }
    }
    Ok(())
}
