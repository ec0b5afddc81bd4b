//! chromascale-resample - the Lanczos resampling engine
//!
//! This crate implements the quality-critical half of chromascale:
//!
//! - **Kernel** ([`kernel`]): the 2-lobe Lanczos windowed sinc
//! - **Contribution tables** ([`contrib`]): precomputed per-output
//!   tap lists with kernel support sizing for up- and downscaling
//! - **Separable resampler** ([`resize`]): horizontal-then-vertical
//!   filtering per plane, honoring chroma subsampling
//! - **Pipeline** ([`pipeline`]): de-gamma -> resample -> gamma
//!   orchestration for one frame

pub mod contrib;
mod error;
pub mod kernel;
pub mod pipeline;
pub mod resize;

pub use contrib::ContribTable;
pub use error::{ResampleError, ResampleResult};
pub use kernel::{LANCZOS_TAPS, lanczos2, sinc};
pub use pipeline::resize_frame;
pub use resize::resize_image;
