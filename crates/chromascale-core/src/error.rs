//! Error types for chromascale-core
//!
//! Provides a unified error type for all operations in the core crate.
//! Stage boundaries validate before mutating, so every variant here is
//! raised before a destination image has been touched.

use crate::image::{ColorSpace, Precision};
use thiserror::Error;

/// Chromascale core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid image dimensions
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Paired images have different dimensions
    #[error("dimension mismatch: expected {}x{}, got {}x{}", .expected.0, .expected.1, .actual.0, .actual.1)]
    DimensionMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },

    /// Paired images have different color spaces
    #[error("color space mismatch: expected {expected:?}, got {actual:?}")]
    ColorSpaceMismatch {
        expected: ColorSpace,
        actual: ColorSpace,
    },

    /// Image has the wrong sample precision for this operation
    #[error("precision mismatch: expected {expected:?}, got {actual:?}")]
    PrecisionMismatch {
        expected: Precision,
        actual: Precision,
    },

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias for chromascale core operations
pub type Result<T> = std::result::Result<T, Error>;
