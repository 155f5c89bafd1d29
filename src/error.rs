//! Error types

use thiserror::Error;

/// Local storage failures. Callers log these and keep going with in-memory state.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("local storage is not available")]
    Unavailable,
    #[error("failed to read from local storage: {0}")]
    Read(String),
    #[error("failed to write to local storage: {0}")]
    Write(String),
    #[error("failed to encode cart snapshot: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("stored cart snapshot is corrupt: {0}")]
    Corrupt(#[source] serde_json::Error),
}

/// Contact form submission failures
#[derive(Debug, Error)]
pub enum ContactError {
    #[error("window is not available")]
    NoWindow,
    #[error("failed to build request: {0}")]
    Request(String),
    #[error("network request failed: {0}")]
    Network(String),
    #[error("server returned status {0}")]
    Status(u16),
}
