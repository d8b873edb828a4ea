//! stamplog probe CLI.
//!
//! Emits one line per severity through the facade, plus an unconditional
//! line, so operators can see exactly what a given `LOGLEVEL` or pinned
//! level lets through on this host.

use clap::{Parser, ValueEnum};
use std::process;
use std::sync::Arc;

use stamplog::subscriber::{self, SubscriberConfig};
use stamplog::{debugf, errorf, infof, panicf, printf, warningf};
use stamplog::{Level, LevelSource, Logger, Sink, StderrSink, TracingSink};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LevelArg {
    /// Suppress all severity-filtered output
    None,
    /// Show everything
    Debug,
    /// Show Info and above
    Info,
    /// Show Warning and above
    Warning,
    /// Show Error only
    Error,
}

impl From<LevelArg> for Level {
    fn from(arg: LevelArg) -> Self {
        match arg {
            LevelArg::None => Level::None,
            LevelArg::Debug => Level::Debug,
            LevelArg::Info => Level::Info,
            LevelArg::Warning => Level::Warning,
            LevelArg::Error => Level::Error,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SinkArg {
    /// Write lines directly to stderr
    Stderr,
    /// Route lines through a tracing subscriber
    Tracing,
}

#[derive(Parser)]
#[command(name = "stamplog")]
#[command(version = stamplog::VERSION)]
#[command(about = "Emit probe log lines at every severity", long_about = None)]
struct Args {
    /// Pin the active level instead of reading LOGLEVEL per call
    #[arg(long, value_enum)]
    level: Option<LevelArg>,

    /// Where probe lines are written
    #[arg(long, value_enum, default_value = "stderr")]
    sink: SinkArg,

    /// Message payload for the probe lines
    #[arg(long, default_value = "probe")]
    message: String,

    /// Exercise the fatal path after the probe lines
    #[arg(long)]
    panic: bool,
}

fn main() {
    let args = Args::parse();

    // The subscriber guard must outlive every probe line.
    let _guard = match args.sink {
        SinkArg::Tracing => match subscriber::init(SubscriberConfig::default()) {
            Ok(guard) => Some(guard),
            Err(e) => {
                eprintln!("Error initializing subscriber: {}", e);
                process::exit(1);
            }
        },
        SinkArg::Stderr => None,
    };

    let source = match args.level {
        Some(level) => LevelSource::Fixed(level.into()),
        None => LevelSource::Environment,
    };
    let sink: Arc<dyn Sink> = match args.sink {
        SinkArg::Stderr => Arc::new(StderrSink),
        SinkArg::Tracing => Arc::new(TracingSink),
    };
    let log = Logger::new(source, sink);

    debugf!(log, "{}", args.message);
    infof!(log, "{}", args.message);
    warningf!(log, "{}", args.message);
    errorf!(log, "{}", args.message);
    printf!(log, "{}", args.message);

    if args.panic {
        panicf!(log, "fatal probe: {}", args.message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_level_arg_maps_onto_levels() {
        assert_eq!(Level::from(LevelArg::None), Level::None);
        assert_eq!(Level::from(LevelArg::Debug), Level::Debug);
        assert_eq!(Level::from(LevelArg::Info), Level::Info);
        assert_eq!(Level::from(LevelArg::Warning), Level::Warning);
        assert_eq!(Level::from(LevelArg::Error), Level::Error);
    }

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["stamplog"]);
        assert!(args.level.is_none());
        assert!(matches!(args.sink, SinkArg::Stderr));
        assert_eq!(args.message, "probe");
        assert!(!args.panic);
    }

    #[test]
    fn test_level_override_parses() {
        let args = Args::parse_from(["stamplog", "--level", "warning"]);
        assert!(matches!(args.level, Some(LevelArg::Warning)));
    }
}
