//! Chromascale - gamma-correct image scaling for Rust
//!
//! Chromascale converts and resizes raster images between a packed RGB
//! container (24-bit BMP) and raw subsampled YUV 4:2:0 frames, using a
//! separable 2-lobe Lanczos filter applied in linear light.
//!
//! # Overview
//!
//! - Three-plane image model at 8-bit or double precision with
//!   color-space-aware addressing
//! - RGB <-> YUV 4:4:4/4:2:2/4:2:0 conversion with proper chroma
//!   down/up-sampling
//! - De-gamma / re-gamma lookup tables bracketing linear-light
//!   processing
//! - Contribution-table driven separable resampling with selectable
//!   edge policies
//! - BMP and raw-YUV file I/O including frame sequences
//!
//! # Example
//!
//! ```
//! use chromascale::{ColorSpace, EdgeMethod, Image, Precision};
//! use chromascale::color::GammaTables;
//! use chromascale::resample::resize_frame;
//!
//! let src = Image::new(ColorSpace::Rgb, 64, 48, Precision::Fixed8).unwrap();
//! let tables = GammaTables::new(2.2).unwrap();
//! let out = resize_frame(&src, 128, 96, &tables, EdgeMethod::Repeat).unwrap();
//! assert_eq!(out.dimensions(), (128, 96));
//! ```

// Re-export core types (primary data structures used everywhere)
pub use chromascale_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use chromascale_color as color;
pub use chromascale_io as io;
pub use chromascale_resample as resample;
