//! Error types for chromascale-io

use thiserror::Error;

/// Errors that can occur during image file I/O
#[derive(Debug, Error)]
pub enum IoError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] chromascale_core::Error),

    /// Underlying I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// File contents do not match the container format
    #[error("invalid data: {0}")]
    InvalidData(String),

    /// Format or format variant this build does not read/write
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),
}

/// Result type for I/O operations
pub type IoResult<T> = Result<T, IoError>;
