//! chromascale-test - regression test harness
//!
//! Provides [`RegParams`], an indexed comparison ledger for the
//! `*_reg.rs` integration tests, and synthetic test-image builders so
//! tests do not depend on image files on disk.
//!
//! # Usage
//!
//! ```
//! use chromascale_test::{RegParams, checkerboard};
//!
//! let mut rp = RegParams::new("doc");
//! let img = checkerboard(4, 4, 0, 255);
//! rp.compare_values(4.0, img.width() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```

mod params;

pub use params::RegParams;

use chromascale_core::{ColorSpace, Image};

/// Build a solid fixed8 RGB image.
pub fn solid(width: u32, height: u32, color: [u8; 3]) -> Image {
    let mut img = Image::fixed8(ColorSpace::Rgb, width, height).expect("image dims");
    for y in 0..height as i64 {
        for x in 0..width as i64 {
            img.set_pixel8(y, x, color);
        }
    }
    img
}

/// Build a fixed8 RGB checkerboard alternating between two gray levels,
/// starting with `first` in the top-left corner.
pub fn checkerboard(width: u32, height: u32, first: u8, second: u8) -> Image {
    let mut img = Image::fixed8(ColorSpace::Rgb, width, height).expect("image dims");
    for y in 0..height as i64 {
        for x in 0..width as i64 {
            let v = if (x + y) % 2 == 0 { first } else { second };
            img.set_pixel8(y, x, [v, v, v]);
        }
    }
    img
}

/// Build a fixed8 RGB image with a horizontal left-to-right ramp over
/// the full 8-bit range, identical in all three channels.
pub fn ramp(width: u32, height: u32) -> Image {
    let mut img = Image::fixed8(ColorSpace::Rgb, width, height).expect("image dims");
    for y in 0..height as i64 {
        for x in 0..width as i64 {
            let v = ((x as u32 * 255) / (width - 1).max(1)) as u8;
            img.set_pixel8(y, x, [v, v, v]);
        }
    }
    img
}
