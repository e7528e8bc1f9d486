//! Error types for spatial reference handling

use std::fmt;
use std::io;

/// Outcome categories for spatial reference operations
#[derive(Debug)]
pub enum SrsError {
    /// The translation does not cover this reference system
    UnsupportedSrs(String),
    /// Malformed input text
    CorruptData(String),
    /// Generic failure (missing record, unmet precondition)
    Failure(String),
    /// Resource limits exceeded
    InsufficientResources(String),
    /// Feature not available for this encoding
    UnsupportedOperation(String),
    /// I/O error while reading user input
    IoError(io::Error),
}

impl SrsError {
    /// True for the variant that drives resolver and bridge fallthrough
    pub fn is_unsupported_srs(&self) -> bool {
        matches!(self, SrsError::UnsupportedSrs(_))
    }
}

impl fmt::Display for SrsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SrsError::UnsupportedSrs(msg) => write!(f, "Unsupported SRS: {}", msg),
            SrsError::CorruptData(msg) => write!(f, "Corrupt data: {}", msg),
            SrsError::Failure(msg) => write!(f, "Failure: {}", msg),
            SrsError::InsufficientResources(msg) => write!(f, "Insufficient resources: {}", msg),
            SrsError::UnsupportedOperation(msg) => write!(f, "Unsupported operation: {}", msg),
            SrsError::IoError(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for SrsError {}

impl From<io::Error> for SrsError {
    fn from(error: io::Error) -> Self {
        SrsError::IoError(error)
    }
}

/// Result type for spatial reference operations
pub type SrsResult<T> = Result<T, SrsError>;

impl From<String> for SrsError {
    fn from(msg: String) -> Self {
        SrsError::Failure(msg)
    }
}
