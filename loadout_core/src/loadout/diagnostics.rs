//! Non-fatal diagnostics reported by the engine

use super::LoadoutError;
use std::sync::{Arc, Mutex};

/// A warning about a loadout operation or its result
#[derive(Debug, Clone, PartialEq)]
pub enum Diagnostic {
    /// A mutation was rejected; the engine is unchanged
    Rejected(LoadoutError),
    /// Final stats consume more power than they generate
    NegativeNetPower { net_power: f64 },
}

/// Receives engine diagnostics
pub trait DiagnosticSink: Send {
    fn report(&mut self, engine: &str, diagnostic: &Diagnostic);
}

/// Default sink: structured `tracing` warnings
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&mut self, engine: &str, diagnostic: &Diagnostic) {
        match diagnostic {
            Diagnostic::Rejected(err) => {
                tracing::warn!(engine, error = %err, "loadout change rejected");
            }
            Diagnostic::NegativeNetPower { net_power } => {
                tracing::warn!(engine, net_power, "negative net power, check reactor vs consumption");
            }
        }
    }
}

/// Sink that keeps every diagnostic in a shared buffer
///
/// Clones share the buffer, so one handle can be installed on an engine and the
/// other kept for inspection.
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    records: Arc<Mutex<Vec<Diagnostic>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        RecordingSink::default()
    }

    /// Everything reported so far
    pub fn records(&self) -> Vec<Diagnostic> {
        match self.records.lock() {
            Ok(records) => records.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn clear(&self) {
        match self.records.lock() {
            Ok(mut records) => records.clear(),
            Err(poisoned) => poisoned.into_inner().clear(),
        }
    }
}

impl DiagnosticSink for RecordingSink {
    fn report(&mut self, engine: &str, diagnostic: &Diagnostic) {
        TracingSink.report(engine, diagnostic);
        match self.records.lock() {
            Ok(mut records) => records.push(diagnostic.clone()),
            Err(poisoned) => poisoned.into_inner().push(diagnostic.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SlotType;

    #[test]
    fn test_recording_sink_shares_buffer() {
        let sink = RecordingSink::new();
        let mut installed = sink.clone();
        installed.report("mech", &Diagnostic::Rejected(LoadoutError::NoHardpoint(SlotType::Head)));
        installed.report("mech", &Diagnostic::NegativeNetPower { net_power: -3.0 });

        let records = sink.records();
        assert_eq!(records.len(), 2);
        assert_eq!(
            records[0],
            Diagnostic::Rejected(LoadoutError::NoHardpoint(SlotType::Head))
        );

        sink.clear();
        assert!(sink.records().is_empty());
    }
}
