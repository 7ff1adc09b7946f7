//! Error types for kvfetch
//!
//! Provides a unified error type for all operations.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using FetchError
pub type Result<T> = std::result::Result<T, FetchError>;

/// Unified error type for kvfetch operations
#[derive(Debug, Error)]
pub enum FetchError {
    // -------------------------------------------------------------------------
    // Transport Errors
    // -------------------------------------------------------------------------
    #[error("Connection to {endpoint} failed: {source}")]
    ConnectionFailed {
        endpoint: String,
        #[source]
        source: io::Error,
    },

    #[error("Write to {endpoint} failed: {source}")]
    WriteFailed {
        endpoint: String,
        #[source]
        source: io::Error,
    },

    #[error("Read from {endpoint} failed: {source}")]
    ReadFailed {
        endpoint: String,
        #[source]
        source: io::Error,
    },

    // -------------------------------------------------------------------------
    // Request Errors
    // -------------------------------------------------------------------------
    #[error("Command payload is empty")]
    EmptyCommand,

    // -------------------------------------------------------------------------
    // Collaborator Errors
    // -------------------------------------------------------------------------
    #[error("Decode error: {0}")]
    DecodeFailed(#[from] serde_json::Error),

    #[error("Failed to write {}: {source}", path.display())]
    SinkFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl FetchError {
    /// Underlying I/O error for transport and sink failures
    pub fn io_error(&self) -> Option<&io::Error> {
        match self {
            FetchError::ConnectionFailed { source, .. }
            | FetchError::WriteFailed { source, .. }
            | FetchError::ReadFailed { source, .. }
            | FetchError::SinkFailed { source, .. } => Some(source),
            _ => None,
        }
    }
}
