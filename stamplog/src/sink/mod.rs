//! Emission sinks for the logging facade.
//!
//! The facade builds each output line and hands it to a [`Sink`]. Which sink
//! a [`Logger`](crate::logger::Logger) carries is a construction-time choice:
//!
//! - [`StderrSink`]: direct writes to standard error (the default)
//! - [`TracingSink`]: delegation to the `tracing` ecosystem
//! - [`NoopSink`]: silent, for tests and benchmarks

mod noop;
mod stderr;
mod tracing_adapter;

pub use noop::NoopSink;
pub use stderr::StderrSink;
pub use tracing_adapter::TracingSink;

use crate::level::Severity;

/// Destination for fully formatted log lines.
///
/// The line arrives complete (label, caller tag, message); `severity` is
/// passed separately for sinks that route by level.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`; the facade may be called from any
/// thread and relies on the sink for line atomicity.
pub trait Sink: Send + Sync {
    /// Write one line.
    fn emit(&self, severity: Severity, line: &str);
}
