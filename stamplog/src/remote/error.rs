//! Error types for the remote logging bridge.

use thiserror::Error;

/// Errors that can occur in the remote logging bridge.
///
/// Only [`RemoteClient::connect`](crate::remote::RemoteClient::connect)
/// surfaces these to callers. Failures during delivery are downgraded to a
/// local warning by [`RemoteLogger`](crate::remote::RemoteLogger).
#[derive(Debug, Error)]
pub enum RemoteError {
    /// Failed to construct the HTTP transport.
    #[error("Failed to build HTTP transport: {0}")]
    Transport(String),

    /// Failed to serialize a log entry.
    #[error("Failed to serialize log entry: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The ingestion endpoint rejected or failed a delivery.
    #[error("Failed to deliver log entry: {0}")]
    Delivery(String),
}
