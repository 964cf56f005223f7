//! Error types for timetable core operations.
//!
//! Read paths (listing, loading, resolving) degrade to `None`/empty rather than
//! erroring, so a dashboard caller can always render something. Write paths
//! propagate failures - a swallowed save error would silently destroy user edits.

use thiserror::Error;

/// Result type alias for timetable operations.
pub type Result<T> = std::result::Result<T, TimetableError>;

/// Core error type for timetable operations.
#[derive(Debug, Error)]
pub enum TimetableError {
    /// No snapshot exists, or a snapshot id no longer resolves to a file
    #[error("Not found: {0}")]
    NotFound(String),

    /// Snapshot exists but cannot be read or parsed
    #[error("Malformed timetable: {0}")]
    Malformed(String),

    /// Pre-save validation failed; carries every violation, not just the first
    #[error("Validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),

    /// I/O failure while persisting a snapshot
    #[error("Persistence error: {0}")]
    Persistence(String),

    /// Invalid operation arguments (unknown day, bad index, empty find text)
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<std::io::Error> for TimetableError {
    fn from(err: std::io::Error) -> Self {
        TimetableError::Persistence(err.to_string())
    }
}

impl From<serde_json::Error> for TimetableError {
    fn from(err: serde_json::Error) -> Self {
        TimetableError::Malformed(err.to_string())
    }
}
