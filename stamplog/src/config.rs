//! Configuration objects for the remote bridge.
//!
//! Configuration is resolved once, at construction, and carried as explicit
//! values. The only ambient input is the deployment environment variable,
//! and even that is captured into a [`DeploymentEnv`] that callers can
//! override when building a [`RemoteConfig`].

use std::env;
use std::time::Duration;

/// Environment variable naming the deployment environment.
pub const APP_ENV_VAR: &str = "APP_ENV";

/// Value of [`APP_ENV_VAR`] that enables remote delivery.
const PRODUCTION: &str = "production";

/// Default HTTP timeout for a single remote delivery.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Deployment environment the process runs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeploymentEnv {
    /// Remote delivery enabled.
    Production,
    /// Local console logging only.
    #[default]
    Development,
}

impl DeploymentEnv {
    /// Detect the deployment environment from `APP_ENV`.
    ///
    /// Anything other than the literal `production`, including an unset
    /// variable, is treated as development.
    pub fn detect() -> Self {
        match env::var(APP_ENV_VAR) {
            Ok(value) if value == PRODUCTION => DeploymentEnv::Production,
            _ => DeploymentEnv::Development,
        }
    }

    /// Whether this is the production environment.
    pub fn is_production(self) -> bool {
        self == DeploymentEnv::Production
    }
}

/// Configuration for [`RemoteClient`](crate::remote::RemoteClient).
#[derive(Debug, Clone)]
pub struct RemoteConfig {
    /// Parent resource identifier entries are attributed to, such as a
    /// project or service path understood by the ingestion endpoint.
    pub parent: String,
    /// URL of the ingestion endpoint.
    pub endpoint: String,
    /// HTTP timeout for a single delivery.
    pub timeout: Duration,
    /// Deployment environment; remote delivery happens only in production.
    pub deployment: DeploymentEnv,
}

impl RemoteConfig {
    /// Config for `parent` posting to `endpoint`, with the deployment
    /// environment detected from `APP_ENV` and the default timeout.
    pub fn new(parent: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Self {
            parent: parent.into(),
            endpoint: endpoint.into(),
            timeout: DEFAULT_TIMEOUT,
            deployment: DeploymentEnv::detect(),
        }
    }

    /// Override the delivery timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Override the detected deployment environment.
    pub fn with_deployment(mut self, deployment: DeploymentEnv) -> Self {
        self.deployment = deployment;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_development_is_default() {
        assert_eq!(DeploymentEnv::default(), DeploymentEnv::Development);
        assert!(!DeploymentEnv::Development.is_production());
        assert!(DeploymentEnv::Production.is_production());
    }

    #[test]
    fn test_remote_config_defaults() {
        let config = RemoteConfig::new("projects/demo", "https://logs.example.test/ingest")
            .with_deployment(DeploymentEnv::Development);

        assert_eq!(config.parent, "projects/demo");
        assert_eq!(config.endpoint, "https://logs.example.test/ingest");
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert!(!config.deployment.is_production());
    }

    #[test]
    fn test_remote_config_builders() {
        let config = RemoteConfig::new("projects/demo", "https://logs.example.test/ingest")
            .with_timeout(Duration::from_secs(3))
            .with_deployment(DeploymentEnv::Production);

        assert_eq!(config.timeout, Duration::from_secs(3));
        assert!(config.deployment.is_production());
    }
}
