//! Snapshot error type.

use thiserror::Error;

/// Errors while writing, reading, or validating the binary snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("snapshot encode error: {0}")]
    Encode(#[from] ciborium::ser::Error<std::io::Error>),

    #[error("snapshot decode error: {0}")]
    Decode(#[from] ciborium::de::Error<std::io::Error>),

    #[error("malformed snapshot: {0}")]
    Malformed(String),
}

/// Shorthand result type for snapshot operations.
pub type SnapshotResult<T> = Result<T, SnapshotError>;
