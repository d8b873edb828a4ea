//! Standard-error sink.

use std::io::Write;

use super::Sink;
use crate::level::Severity;

/// Writes each line to standard error.
///
/// This is the default sink: it needs no initialization and keeps process
/// stdout clean for program output. Writing through the locked handle keeps
/// concurrent lines from interleaving. Write failures are ignored; there is
/// nowhere left to report them.
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrSink;

impl Sink for StderrSink {
    fn emit(&self, _severity: Severity, line: &str) {
        let mut stderr = std::io::stderr().lock();
        let _ = writeln!(stderr, "{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stderr_sink_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<StderrSink>();
    }

    #[test]
    fn test_stderr_sink_as_trait_object() {
        let sink: Box<dyn Sink> = Box::new(StderrSink);
        sink.emit(Severity::Info, "[INFO] test line");
    }
}
