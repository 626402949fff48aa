//! Snapshot error types.

use thiserror::Error;

/// Errors that can occur while encoding or decoding a snapshot
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// Encoding to JSON failed
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),

    /// Decoding from JSON failed
    #[error("Deserialization failed: {0}")]
    DeserializationFailed(String),

    /// Snapshot version is not supported by this version
    #[error("Unsupported snapshot version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// Decoded snapshot is internally inconsistent
    #[error("Snapshot validation failed: {0}")]
    ValidationFailed(String),
}
