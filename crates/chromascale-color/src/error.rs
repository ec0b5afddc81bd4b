//! Error types for chromascale-color

use chromascale_core::ColorSpace;
use thiserror::Error;

/// Errors that can occur during color conversion or gamma processing
#[derive(Debug, Error)]
pub enum ColorError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] chromascale_core::Error),

    /// No conversion path exists between these color spaces
    #[error("unsupported conversion: {from:?} -> {to:?}")]
    UnsupportedConversion { from: ColorSpace, to: ColorSpace },

    /// Invalid gamma value
    #[error("invalid gamma value: {0}")]
    InvalidGamma(f64),
}

/// Result type for color operations
pub type ColorResult<T> = Result<T, ColorError>;
