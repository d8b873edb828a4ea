//! Severity levels and the active-level filter.
//!
//! Filtering is driven by the `LOGLEVEL` environment variable. The variable
//! is read on every call rather than cached at startup, so the effective
//! level always reflects the current process environment. Where that lookup
//! happens is made explicit through [`LevelSource`]: a [`Logger`] is
//! constructed with either a pinned level or the environment source, and
//! tests can pin a level instead of mutating the environment.
//!
//! [`Logger`]: crate::logger::Logger

use std::env;

/// Environment variable that controls the active log level.
pub const LOGLEVEL_VAR: &str = "LOGLEVEL";

/// Severity of a single log call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    /// Debugging information
    Debug,
    /// General information
    Info,
    /// Potential issues or unexpected situations
    Warning,
    /// Serious problems
    Error,
}

impl Severity {
    /// Bracketed label prepended to every filtered line.
    pub fn label(self) -> &'static str {
        match self {
            Severity::Debug => "[DEBUG]",
            Severity::Info => "[INFO]",
            Severity::Warning => "[WARNING]",
            Severity::Error => "[ERROR]",
        }
    }

    /// Uppercase severity name, as carried on remote entries.
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
        }
    }
}

/// Active level threshold controlling which calls produce output.
///
/// `None` suppresses all severity-filtered output. The remaining variants
/// admit their own severity and everything above it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Level {
    /// Suppress all severity-filtered output.
    None,
    /// Show everything.
    #[default]
    Debug,
    /// Show Info and above.
    Info,
    /// Show Warning and above.
    Warning,
    /// Show Error only.
    Error,
}

impl Level {
    /// Returns true if a call at `severity` is visible under this level.
    pub fn allows(self, severity: Severity) -> bool {
        match self {
            Level::None => false,
            Level::Debug => true,
            Level::Info => severity >= Severity::Info,
            Level::Warning => severity >= Severity::Warning,
            Level::Error => severity >= Severity::Error,
        }
    }

    /// Parse a level name.
    ///
    /// Matching is case-insensitive and ignores surrounding whitespace.
    /// Anything unrecognized falls open to `Debug` so a misconfigured
    /// deployment still logs.
    pub fn parse(value: &str) -> Level {
        match value.trim().to_ascii_uppercase().as_str() {
            "NONE" => Level::None,
            "DEBUG" => Level::Debug,
            "INFO" => Level::Info,
            "WARNING" => Level::Warning,
            "ERROR" => Level::Error,
            _ => Level::Debug,
        }
    }

    /// Read the active level from `LOGLEVEL`.
    ///
    /// An unset variable behaves exactly like `LOGLEVEL=DEBUG`.
    pub fn from_env() -> Level {
        match env::var(LOGLEVEL_VAR) {
            Ok(value) => Level::parse(&value),
            Err(_) => Level::Debug,
        }
    }
}

/// Where a [`Logger`](crate::logger::Logger) gets its active level from.
///
/// `Environment` re-reads `LOGLEVEL` on every call. `Fixed` pins the level
/// at construction, which is what tests and the CLI's `--level` override use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelSource {
    /// Always filter against this level.
    Fixed(Level),
    /// Read `LOGLEVEL` on every call.
    Environment,
}

impl LevelSource {
    /// Resolve the level this source currently denotes.
    pub fn current(self) -> Level {
        match self {
            LevelSource::Fixed(level) => level,
            LevelSource::Environment => Level::from_env(),
        }
    }
}
