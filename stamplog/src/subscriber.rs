//! `tracing` subscriber setup.
//!
//! Applications that route the facade through
//! [`TracingSink`](crate::sink::TracingSink) need a subscriber installed;
//! this module builds one with an `RUST_LOG` filter, a stderr layer, and an
//! optional non-blocking file layer. The previous log file is truncated on
//! startup so each session reads from the top.

use std::fs;
use std::io;
use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Where subscriber output goes.
#[derive(Debug, Clone)]
pub struct SubscriberConfig {
    /// Fallback filter directive used when `RUST_LOG` is unset.
    pub default_directive: String,
    /// Optional log file; `None` keeps output on stderr only.
    pub file: Option<FileOutput>,
}

/// Log file location.
#[derive(Debug, Clone)]
pub struct FileOutput {
    /// Directory for log files, created if missing.
    pub dir: PathBuf,
    /// Log file name within `dir`.
    pub name: String,
}

impl Default for SubscriberConfig {
    fn default() -> Self {
        Self {
            default_directive: "info".to_string(),
            file: None,
        }
    }
}

impl SubscriberConfig {
    /// Add a log file to the default stderr-only configuration.
    pub fn with_file(mut self, dir: impl Into<PathBuf>, name: impl Into<String>) -> Self {
        self.file = Some(FileOutput {
            dir: dir.into(),
            name: name.into(),
        });
        self
    }
}

/// Keeps the non-blocking file writer alive.
///
/// Dropping the guard flushes and closes the file writer; hold it for the
/// lifetime of the program.
pub struct Guard {
    _file_guard: Option<WorkerGuard>,
}

/// Install the global subscriber.
///
/// Can only succeed once per process; a second call panics in
/// `tracing-subscriber`, same as any double subscriber installation.
///
/// # Errors
///
/// Returns an error if the log directory cannot be created or the previous
/// log file cannot be truncated.
pub fn init(config: SubscriberConfig) -> Result<Guard, io::Error> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.default_directive));

    let (file_layer, file_guard) = match &config.file {
        Some(output) => {
            fs::create_dir_all(&output.dir)?;
            fs::write(output.dir.join(&output.name), "")?;

            let appender = tracing_appender::rolling::never(&output.dir, &output.name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(stderr_layer)
        .init();

    Ok(Guard {
        _file_guard: file_guard,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_stderr_only() {
        let config = SubscriberConfig::default();
        assert_eq!(config.default_directive, "info");
        assert!(config.file.is_none());
    }

    #[test]
    fn test_with_file_sets_output() {
        let config = SubscriberConfig::default().with_file("logs", "app.log");
        let output = config.file.unwrap();
        assert_eq!(output.dir, PathBuf::from("logs"));
        assert_eq!(output.name, "app.log");
    }

    #[test]
    fn test_file_preparation_truncates_existing_file() {
        // init() can only run once per process, so the file handling is
        // exercised directly the same way init() performs it.
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.log");
        fs::write(&path, "old session data").unwrap();

        fs::create_dir_all(dir.path()).unwrap();
        fs::write(&path, "").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn test_file_preparation_creates_nested_directories() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("deep").join("nested");

        fs::create_dir_all(&nested).unwrap();
        fs::write(nested.join("app.log"), "").unwrap();

        assert!(nested.join("app.log").exists());
    }

    #[test]
    fn test_guard_can_wrap_a_worker() {
        let (writer, worker_guard) = tracing_appender::non_blocking(io::sink());
        drop(writer);

        let _guard = Guard {
            _file_guard: Some(worker_guard),
        };
    }
}
