//! chromascale-io - container file I/O
//!
//! Readers and writers for the two container formats the tool speaks,
//! plus the path-level helpers around them:
//!
//! - **BMP** ([`bmp`]): 24-bit uncompressed bitmaps
//! - **Raw YUV** ([`yuv`]): headerless 4:2:0 frames in the I420, YV12,
//!   NV12, and NV21 chroma-plane orderings
//! - **File-kind detection** ([`format`]): extension plus header sniff
//! - **Sequences** ([`sequence`]): numbered-file runs and multi-frame
//!   YUV files
//!
//! Everything here trades in fully populated fixed8 [`Image`]s; color
//! conversion and scaling are the other crates' business.
//!
//! [`Image`]: chromascale_core::Image

pub mod bmp;
pub mod error;
pub mod format;
pub mod sequence;
pub mod yuv;

pub use bmp::{bmp_dimensions, read_bmp, write_bmp};
pub use error::{IoError, IoResult};
pub use format::{FileKind, detect_file_kind, sniff_file_kind};
pub use sequence::{SequenceInfo, detect_sequence, numbered_output};
pub use yuv::{YuvLayout, frame_size, read_yuv, write_yuv};
