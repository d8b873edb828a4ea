//! The logging facade.
//!
//! A [`Logger`] owns two construction-time choices: where its active level
//! comes from ([`LevelSource`]) and where lines go ([`Sink`]). The level is
//! resolved and the visibility check performed on every call, so a logger
//! built from the environment source tracks `LOGLEVEL` changes without any
//! re-initialization.
//!
//! Components that need logging should accept a `Logger` (it is cheap to
//! clone) and use the macros, which capture the caller's location:
//!
//! ```
//! use stamplog::{infof, Logger, Level};
//!
//! let log = Logger::with_level(Level::Info);
//! infof!(log, "listening on port {}", 8080);
//! ```

use std::fmt::Arguments;
use std::sync::Arc;

use crate::callsite::CallSite;
use crate::level::{Level, LevelSource, Severity};
use crate::sink::{Sink, StderrSink};

/// Caller-stamped leveled logger.
#[derive(Clone)]
pub struct Logger {
    source: LevelSource,
    sink: Arc<dyn Sink>,
}

impl Logger {
    /// Logger that re-reads `LOGLEVEL` on every call and writes to stderr.
    pub fn from_env() -> Self {
        Self::new(LevelSource::Environment, Arc::new(StderrSink))
    }

    /// Logger with a pinned level, writing to stderr.
    pub fn with_level(level: Level) -> Self {
        Self::new(LevelSource::Fixed(level), Arc::new(StderrSink))
    }

    /// Logger with an explicit level source and sink.
    pub fn new(source: LevelSource, sink: Arc<dyn Sink>) -> Self {
        Self { source, sink }
    }

    /// Replace the sink, keeping the level source.
    pub fn with_sink(self, sink: Arc<dyn Sink>) -> Self {
        Self { sink, ..self }
    }

    /// The level this logger would filter against right now.
    ///
    /// For the environment source this performs a fresh `LOGLEVEL` read.
    pub fn current_level(&self) -> Level {
        self.source.current()
    }

    /// Log at debug severity. Prefer [`debugf!`](crate::debugf).
    pub fn debug(&self, site: &CallSite, args: Arguments<'_>) {
        self.log(Severity::Debug, site, args);
    }

    /// Log at info severity. Prefer [`infof!`](crate::infof).
    pub fn info(&self, site: &CallSite, args: Arguments<'_>) {
        self.log(Severity::Info, site, args);
    }

    /// Log at warning severity. Prefer [`warningf!`](crate::warningf).
    pub fn warning(&self, site: &CallSite, args: Arguments<'_>) {
        self.log(Severity::Warning, site, args);
    }

    /// Log at error severity. Prefer [`errorf!`](crate::errorf).
    pub fn error(&self, site: &CallSite, args: Arguments<'_>) {
        self.log(Severity::Error, site, args);
    }

    /// Emit unconditionally, without a severity label.
    ///
    /// The line still carries the caller tag but bypasses the level filter
    /// entirely, including `Level::None`.
    pub fn print(&self, site: &CallSite, args: Arguments<'_>) {
        let line = format!("{}{}", site.tag(), args);
        self.sink.emit(Severity::Info, &line);
    }

    /// Emit the formatted message unconditionally, then panic with it.
    ///
    /// This never returns; callers use it for unrecoverable states where the
    /// message must reach the sink before the process starts unwinding.
    pub fn panic(&self, args: Arguments<'_>) -> ! {
        let message = args.to_string();
        self.sink.emit(Severity::Error, &message);
        panic!("{}", message);
    }

    pub(crate) fn log(&self, severity: Severity, site: &CallSite, args: Arguments<'_>) {
        if !self.source.current().allows(severity) {
            return;
        }
        let line = format!("{} {}{}", severity.label(), site.tag(), args);
        self.sink.emit(severity, &line);
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Log at debug severity with the caller's location.
#[macro_export]
macro_rules! debugf {
    ($logger:expr, $($arg:tt)*) => {
        $logger.debug(&$crate::callsite!(), ::std::format_args!($($arg)*))
    };
}

/// Log at info severity with the caller's location.
#[macro_export]
macro_rules! infof {
    ($logger:expr, $($arg:tt)*) => {
        $logger.info(&$crate::callsite!(), ::std::format_args!($($arg)*))
    };
}

/// Log at warning severity with the caller's location.
#[macro_export]
macro_rules! warningf {
    ($logger:expr, $($arg:tt)*) => {
        $logger.warning(&$crate::callsite!(), ::std::format_args!($($arg)*))
    };
}

/// Log at error severity with the caller's location.
#[macro_export]
macro_rules! errorf {
    ($logger:expr, $($arg:tt)*) => {
        $logger.error(&$crate::callsite!(), ::std::format_args!($($arg)*))
    };
}

/// Emit unconditionally with the caller's location, bypassing the filter.
#[macro_export]
macro_rules! printf {
    ($logger:expr, $($arg:tt)*) => {
        $logger.print(&$crate::callsite!(), ::std::format_args!($($arg)*))
    };
}

/// Emit the formatted message, then panic with it.
#[macro_export]
macro_rules! panicf {
    ($logger:expr, $($arg:tt)*) => {
        $logger.panic(::std::format_args!($($arg)*))
    };
}
