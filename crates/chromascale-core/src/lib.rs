//! Chromascale Core - image data structures for the chromascale scaler
//!
//! This crate provides the fundamental types shared by every stage of
//! the conversion/resize pipeline:
//!
//! - [`Image`] - three-plane raster image, 8-bit or double precision,
//!   with color-space-aware plane addressing
//! - [`EdgeMethod`] / [`resolve_edge`] - boundary policy for reads that
//!   fall outside the image
//! - [`ColorSpace`] / [`Precision`] - the tags selecting plane layout
//!   and sample storage
//! - [`Error`] / [`Result`] - the core error type

pub mod edge;
pub mod error;
pub mod image;

pub use edge::{EdgeMethod, resolve_edge};
pub use error::{Error, Result};
pub use image::{ColorSpace, Image, Precision, SAMPLE_MAX, SAMPLE_MAX_F};

/// Plane indices for the two channel orders sharing the 3-plane store.
///
/// Plane 0 carries luma or red and is always full resolution; planes 1
/// and 2 carry chroma (or green/blue) and may be subsampled.
pub mod plane {
    /// Luma plane (YUV images)
    pub const Y: usize = 0;
    /// Blue-difference chroma plane
    pub const U: usize = 1;
    /// Red-difference chroma plane
    pub const V: usize = 2;

    /// Red plane (RGB images)
    pub const R: usize = 0;
    /// Green plane
    pub const G: usize = 1;
    /// Blue plane
    pub const B: usize = 2;
}
