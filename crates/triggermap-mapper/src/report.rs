//! Per-batch outcome summary.

use serde::Serialize;
use triggermap_core::error::SkipReason;

/// A trigger record that produced no output, and why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRecord {
    pub index: usize,
    pub reason: SkipReason,
}

/// Result of mapping one batch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapReport {
    /// Trigger records in the batch
    pub total: usize,
    /// Records written to the store
    pub mapped: usize,
    /// Skipped records in batch order, silent ones included
    pub skipped: Vec<SkippedRecord>,
}

impl MapReport {
    /// Skips that were reported as warnings.
    pub fn diagnostics(&self) -> impl Iterator<Item = &SkippedRecord> {
        self.skipped.iter().filter(|s| !s.reason.is_silent())
    }

    pub fn summary(&self) -> MapSummary {
        let diagnostics = self.diagnostics().count();
        MapSummary {
            total: self.total,
            mapped: self.mapped,
            skipped: self.skipped.len(),
            diagnostics,
        }
    }
}

/// Counts only, for logs and CLI output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MapSummary {
    pub total: usize,
    pub mapped: usize,
    pub skipped: usize,
    pub diagnostics: usize,
}
