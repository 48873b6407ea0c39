//! Mapper configuration.

use serde::{Deserialize, Serialize};
use triggermap_registry::Source;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MapperConfig {
    /// Which compiled-in registry to dispatch against
    #[serde(default)]
    pub source: Source,
    /// Record OpenTelemetry metrics through the global meter provider
    #[serde(default)]
    pub metrics: bool,
}

impl MapperConfig {
    pub fn new(source: Source) -> Self {
        Self {
            source,
            ..Self::default()
        }
    }

    pub fn with_metrics(mut self, enabled: bool) -> Self {
        self.metrics = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_with_defaults() {
        let config: MapperConfig = serde_json::from_str(r#"{"source":"weaver"}"#).unwrap();
        assert_eq!(config.source, Source::Weaver);
        assert!(!config.metrics);

        let config: MapperConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.source, Source::Protocols);
    }
}
