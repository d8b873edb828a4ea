//! Remote logging bridge.
//!
//! [`RemoteClient`] decides once, at construction, whether the process runs
//! in production. Outside production it hands out loggers that delegate
//! entirely to the local facade, so development output is identical to the
//! plain [`Logger`](crate::logger::Logger). In production its loggers post
//! severity-tagged entries to the configured ingestion endpoint; a delivery
//! failure is downgraded to a local warning and never surfaces to the
//! caller.
//!
//! ```no_run
//! use stamplog::{errorf, RemoteClient, RemoteConfig};
//!
//! # fn main() -> Result<(), stamplog::RemoteError> {
//! let client = RemoteClient::connect(RemoteConfig::new(
//!     "projects/demo",
//!     "https://logs.example.test/ingest",
//! ))?;
//! let log = client.logger("api-server");
//! errorf!(log, "upstream returned {}", 502);
//! # Ok(())
//! # }
//! ```

mod error;
mod http;

pub use error::RemoteError;
pub use http::{ReqwestTransport, Transport};

use std::fmt::Arguments;
use std::sync::Arc;

use chrono::Utc;
use serde::Serialize;

use crate::callsite::CallSite;
use crate::config::RemoteConfig;
use crate::level::Severity;
use crate::logger::Logger;

/// One serialized delivery to the ingestion endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct LogEntry<'a> {
    /// Parent resource the entry is attributed to.
    parent: &'a str,
    /// Stream name within the parent resource.
    log_name: &'a str,
    /// Uppercase severity name.
    severity: &'static str,
    /// Caller-tagged message text.
    text_payload: &'a str,
    /// RFC 3339 UTC timestamp.
    timestamp: String,
}

/// Client for the remote logging backend.
///
/// Holds the transport when remote delivery is enabled; outside production
/// no transport exists and every derived logger is a local pass-through.
pub struct RemoteClient {
    transport: Option<Arc<dyn Transport>>,
    config: RemoteConfig,
}

impl RemoteClient {
    /// Connect according to `config`.
    ///
    /// Outside production this builds a disabled client: no transport is
    /// constructed, no connection is attempted, and the call cannot fail for
    /// transport reasons. In production the HTTP transport is built here and
    /// a construction failure is returned to the caller.
    pub fn connect(config: RemoteConfig) -> Result<Self, RemoteError> {
        let transport = if config.deployment.is_production() {
            Some(Arc::new(ReqwestTransport::new(config.timeout)?) as Arc<dyn Transport>)
        } else {
            None
        };

        Ok(Self { transport, config })
    }

    /// Client delivering through an explicit transport, regardless of the
    /// configured deployment environment.
    pub fn with_transport(config: RemoteConfig, transport: Arc<dyn Transport>) -> Self {
        Self {
            transport: Some(transport),
            config,
        }
    }

    /// Whether this client delivers remotely.
    pub fn is_enabled(&self) -> bool {
        self.transport.is_some()
    }

    /// Derive a logger bound to the named stream.
    ///
    /// The local side re-reads `LOGLEVEL` per call, matching the plain
    /// facade.
    pub fn logger(&self, log_id: impl Into<String>) -> RemoteLogger {
        self.logger_with_local(log_id, Logger::from_env())
    }

    /// Derive a logger bound to the named stream, with an explicit local
    /// logger for delegation and delivery-failure warnings.
    pub fn logger_with_local(&self, log_id: impl Into<String>, local: Logger) -> RemoteLogger {
        RemoteLogger {
            stream: self.transport.as_ref().map(|transport| RemoteStream {
                transport: Arc::clone(transport),
                parent: self.config.parent.clone(),
                endpoint: self.config.endpoint.clone(),
            }),
            log_id: log_id.into(),
            local,
        }
    }
}

/// Delivery half of an enabled [`RemoteLogger`].
struct RemoteStream {
    transport: Arc<dyn Transport>,
    parent: String,
    endpoint: String,
}

/// Severity-filtered logger bound to a named remote stream.
///
/// The severity methods mirror [`Logger`](crate::logger::Logger), so the
/// `debugf!`/`infof!`/`warningf!`/`errorf!` macros work on either. Filtering
/// always follows the local logger's level source, whether or not delivery
/// is remote.
pub struct RemoteLogger {
    stream: Option<RemoteStream>,
    log_id: String,
    local: Logger,
}

impl RemoteLogger {
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

    /// The stream name this logger was derived with.
    pub fn log_id(&self) -> &str {
        &self.log_id
    }

    fn log(&self, severity: Severity, site: &CallSite, args: Arguments<'_>) {
        let Some(stream) = &self.stream else {
            self.local.log(severity, site, args);
            return;
        };

        if !self.local.current_level().allows(severity) {
            return;
        }

        let text = format!("{} {}{}", severity.label(), site.tag(), args);
        let entry = LogEntry {
            parent: &stream.parent,
            log_name: &self.log_id,
            severity: severity.as_str(),
            text_payload: &text,
            timestamp: Utc::now().to_rfc3339(),
        };

        let body = match serde_json::to_string(&entry) {
            Ok(body) => body,
            Err(e) => {
                self.local.warning(
                    &crate::callsite!(),
                    format_args!("remote entry serialization failed: {}", e),
                );
                return;
            }
        };

        if let Err(e) = stream.transport.post_json(&stream.endpoint, &body) {
            self.local.warning(
                &crate::callsite!(),
                format_args!("remote delivery failed: {}", e),
            );
        }
    }
}
