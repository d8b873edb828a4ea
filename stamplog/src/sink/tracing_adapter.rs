//! Tracing ecosystem adapter.

use super::Sink;
use crate::level::Severity;

/// Sink that forwards lines to the `tracing` macros.
///
/// Useful when an application already ships its logs through a `tracing`
/// subscriber (see [`crate::subscriber`]): facade output then shares the
/// subscriber's filtering, formatting, and writers.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl TracingSink {
    /// Create a new tracing sink.
    pub fn new() -> Self {
        Self
    }
}

impl Sink for TracingSink {
    fn emit(&self, severity: Severity, line: &str) {
        match severity {
            Severity::Debug => tracing::debug!("{}", line),
            Severity::Info => tracing::info!("{}", line),
            Severity::Warning => tracing::warn!("{}", line),
            Severity::Error => tracing::error!("{}", line),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracing_sink_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TracingSink>();
    }

    #[test]
    fn test_tracing_sink_as_trait_object() {
        // Lines are dropped without a subscriber installed; this only
        // verifies the dispatch compiles and does not panic.
        let sink: Box<dyn Sink> = Box::new(TracingSink::new());
        sink.emit(Severity::Debug, "[DEBUG] test line");
        sink.emit(Severity::Error, "[ERROR] test line");
    }
}
