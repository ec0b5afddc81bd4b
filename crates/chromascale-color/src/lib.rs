//! chromascale-color - color space conversion and gamma pipeline
//!
//! This crate moves images between the packed-RGB and luma/chroma
//! worlds and between the perceptual and linear-light domains:
//!
//! - **Color conversion** ([`convert`]): RGB <-> YUV 4:4:4/4:2:2/4:2:0
//!   with Rec.601 integer-coefficient matrices, chroma downsampling on
//!   the way in and nearest-neighbor expansion on the way out
//! - **Gamma pipeline** ([`gamma`]): forward/backward lookup tables and
//!   the de-gamma / re-gamma image passes bracketing linear-light
//!   processing

pub mod convert;
pub mod error;
pub mod gamma;

// Re-export core types
pub use chromascale_core;

pub use convert::{convert_image, rgb_to_yuv, yuv_to_rgb};
pub use error::{ColorError, ColorResult};
pub use gamma::{
    BWD_LUT_SIZE, DEFAULT_GAMMA, FWD_LUT_SIZE, GammaTables, degamma_image, gamma_image,
};
