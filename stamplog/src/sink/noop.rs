//! No-operation sink.

use super::Sink;
use crate::level::Severity;

/// A sink that discards every line.
///
/// Useful for unit tests where log output would be noise and for measuring
/// facade overhead without I/O.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl Sink for NoopSink {
    #[inline]
    fn emit(&self, _severity: Severity, _line: &str) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_sink_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<NoopSink>();
    }

    #[test]
    fn test_noop_sink_discards_all_severities() {
        let sink: Box<dyn Sink> = Box::new(NoopSink);
        sink.emit(Severity::Debug, "dropped");
        sink.emit(Severity::Info, "dropped");
        sink.emit(Severity::Warning, "dropped");
        sink.emit(Severity::Error, "dropped");
    }
}
