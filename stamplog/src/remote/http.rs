//! HTTP transport abstraction for the remote bridge.

use std::time::Duration;

use super::error::RemoteError;

/// Trait for delivering serialized log entries.
///
/// Abstracting the transport allows tests to substitute a mock and inspect
/// what would have been sent.
pub trait Transport: Send + Sync {
    /// POST a JSON document to the ingestion endpoint.
    fn post_json(&self, url: &str, json_body: &str) -> Result<(), RemoteError>;
}

/// Real transport backed by a blocking `reqwest` client.
pub struct ReqwestTransport {
    client: reqwest::blocking::Client,
}

impl ReqwestTransport {
    /// Build a transport with the given per-request timeout.
    pub fn new(timeout: Duration) -> Result<Self, RemoteError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| RemoteError::Transport(e.to_string()))?;

        Ok(Self { client })
    }
}

impl Transport for ReqwestTransport {
    fn post_json(&self, url: &str, json_body: &str) -> Result<(), RemoteError> {
        let response = self
            .client
            .post(url)
            .header("Content-Type", "application/json")
            .body(json_body.to_string())
            .send()
            .map_err(|e| RemoteError::Delivery(format!("POST request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(RemoteError::Delivery(format!(
                "HTTP {} from POST {}",
                response.status(),
                url
            )));
        }

        Ok(())
    }
}
