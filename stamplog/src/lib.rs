//! stamplog - caller-stamped leveled logging
//!
//! This library provides a leveled logging facade that stamps every line
//! with the location of its caller and filters by the `LOGLEVEL`
//! environment variable, plus an optional remote bridge that delivers
//! entries to an HTTP log-ingestion endpoint in production deployments.
//!
//! # Quick start
//!
//! ```
//! use stamplog::{debugf, errorf, infof, Logger};
//!
//! let log = Logger::from_env();
//! infof!(log, "service starting");
//! debugf!(log, "config loaded from {}", "/etc/app.toml");
//! errorf!(log, "upstream returned {}", 502);
//! ```
//!
//! Each visible line looks like:
//!
//! ```text
//! [INFO] main.rs#app::run(L: 12)
//!     => service starting
//! ```
//!
//! # Remote delivery
//!
//! [`RemoteClient::connect`] checks the deployment environment once. In
//! production the derived loggers post severity-tagged entries to the
//! configured endpoint; everywhere else they behave exactly like the plain
//! facade. See [`remote`].

pub mod callsite;
pub mod config;
pub mod level;
pub mod logger;
pub mod remote;
pub mod sink;
pub mod subscriber;

pub use callsite::CallSite;
pub use config::{DeploymentEnv, RemoteConfig};
pub use level::{Level, LevelSource, Severity};
pub use logger::Logger;
pub use remote::{RemoteClient, RemoteError, RemoteLogger};
pub use sink::{NoopSink, Sink, StderrSink, TracingSink};

/// Version of the stamplog library and CLI.
///
/// This is synchronized across all components in the workspace.
/// The version is defined in `Cargo.toml` and injected at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_not_empty() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_root_reexports_are_usable() {
        let logger = Logger::with_level(Level::None).with_sink(std::sync::Arc::new(NoopSink));
        infof!(logger, "dropped");
    }
}
