//! Error types for chromascale-resample

use thiserror::Error;

/// Errors that can occur during resampling
#[derive(Debug, Error)]
pub enum ResampleError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] chromascale_core::Error),

    /// Gamma/color stage error inside the resize pipeline
    #[error("color error: {0}")]
    Color(#[from] chromascale_color::ColorError),
}

/// Result type for resample operations
pub type ResampleResult<T> = Result<T, ResampleError>;
