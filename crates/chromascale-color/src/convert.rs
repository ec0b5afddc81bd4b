//! RGB <-> YUV color space conversion
//!
//! Conversions use the Rec.601 integer-coefficient matrices for 8-bit
//! full-swing R'G'B'. The matrix products are computed in double
//! precision, divided by 256, and rounded.
//!
//! RGB -> YUV clamps only to the full `[0, 255]` range, not to the
//! broadcast-legal 16..235 / 16..240 excursions, so that intermediate
//! processing stages keep the out-of-range headroom.
//!
//! Conversion into a subsampled destination first produces a
//! full-resolution YUV 4:4:4 intermediate and then downsamples chroma:
//! 4:2:2 averages three horizontally adjacent samples with (1,2,1)/4
//! weights, 4:2:0 averages each 2x2 block equally, both rounding via +2
//! before the divide. Chroma upsampling on the way back to RGB is
//! nearest-neighbor by construction: the plane addressing divides the
//! luma-frame coordinates down, so every pixel of a 2x2 block reads the
//! same stored chroma sample.

use crate::{ColorError, ColorResult};
use chromascale_core::{ColorSpace, EdgeMethod, Image, Precision, SAMPLE_MAX, plane};

/// 8-bit full-swing R'G'B' to Y'CbCr Rec.601; rows are Y, U, V and the
/// fourth column is the channel offset added after the /256.
const RGB_TO_YUV601: [[f64; 4]; 3] = [
    [65.738, 129.057, 25.064, 16.0],
    [-37.946, -74.494, 112.439, 128.0],
    [112.439, -94.154, -18.285, 128.0],
];

/// Y'CbCr Rec.601 to 8-bit full-swing R'G'B'; the fourth column is the
/// channel offset removed before the matrix multiply.
const YUV601_TO_RGB: [[f64; 4]; 3] = [
    [298.082, 0.0, 408.583, -16.0],
    [298.082, -100.291, -208.120, -128.0],
    [298.082, 516.411, 0.0, -128.0],
];

#[inline]
fn clamp_sample(v: f64) -> u8 {
    v.clamp(0.0, SAMPLE_MAX as f64) as u8
}

/// Convert one 8-bit R'G'B' pixel to Y'CbCr.
pub fn rgb_to_yuv(rgb: [u8; 3]) -> [u8; 3] {
    let mut yuv = [0u8; 3];
    for (p, row) in RGB_TO_YUV601.iter().enumerate() {
        let v = (row[0] * rgb[plane::R] as f64
            + row[1] * rgb[plane::G] as f64
            + row[2] * rgb[plane::B] as f64)
            / 256.0
            + row[3]
            + 0.5;
        yuv[p] = clamp_sample(v);
    }
    yuv
}

/// Convert one Y'CbCr pixel to 8-bit R'G'B'.
pub fn yuv_to_rgb(yuv: [u8; 3]) -> [u8; 3] {
    // Remove the channel offsets before the matrix multiply
    let t = [
        yuv[plane::Y] as f64 + YUV601_TO_RGB[0][3],
        yuv[plane::U] as f64 + YUV601_TO_RGB[1][3],
        yuv[plane::V] as f64 + YUV601_TO_RGB[2][3],
    ];
    let mut rgb = [0u8; 3];
    for (p, row) in YUV601_TO_RGB.iter().enumerate() {
        let v = (row[0] * t[0] + row[1] * t[1] + row[2] * t[2]) / 256.0 + 0.5;
        rgb[p] = clamp_sample(v);
    }
    rgb
}

/// Convert `src` into the color space of `dst`.
///
/// Both images must be fixed8 precision and share dimensions; `dst`'s
/// color space selects the conversion. Same-space pairs degenerate to a
/// copy. Supported directions are RGB -> YUV 4:4:4/4:2:2/4:2:0 and
/// YUV 4:4:4/4:2:2/4:2:0 -> RGB.
///
/// # Errors
///
/// Fails without touching `dst` on a dimension or precision mismatch,
/// or when no conversion path exists between the two spaces.
pub fn convert_image(src: &Image, dst: &mut Image) -> ColorResult<()> {
    if src.dimensions() != dst.dimensions() {
        return Err(chromascale_core::Error::DimensionMismatch {
            expected: src.dimensions(),
            actual: dst.dimensions(),
        }
        .into());
    }

    if src.color_space() == dst.color_space() {
        dst.copy_from(src)?;
        return Ok(());
    }

    for img in [&*dst, src] {
        if img.precision() != Precision::Fixed8 {
            return Err(chromascale_core::Error::PrecisionMismatch {
                expected: Precision::Fixed8,
                actual: img.precision(),
            }
            .into());
        }
    }

    match (src.color_space(), dst.color_space()) {
        (ColorSpace::Rgb, to) if to.is_yuv() => rgb_image_to_yuv(src, dst),
        (from, ColorSpace::Rgb) if from.is_yuv() => {
            yuv_image_to_rgb(src, dst);
            Ok(())
        }
        (from, to) => Err(ColorError::UnsupportedConversion { from, to }),
    }
}

/// RGB image to YUV 4:4:4/4:2:2/4:2:0.
fn rgb_image_to_yuv(src: &Image, dst: &mut Image) -> ColorResult<()> {
    let (width, height) = src.dimensions();

    if dst.color_space() == ColorSpace::Yuv444 {
        for y in 0..height as i64 {
            for x in 0..width as i64 {
                let rgb = src.pixel8(y, x, EdgeMethod::Repeat);
                dst.set_pixel8(y, x, rgb_to_yuv(rgb));
            }
        }
        return Ok(());
    }

    // Full-resolution intermediate, then chroma downsample
    let mut full = Image::fixed8(ColorSpace::Yuv444, width, height)?;
    for y in 0..height as i64 {
        for x in 0..width as i64 {
            let rgb = src.pixel8(y, x, EdgeMethod::Repeat);
            full.set_pixel8(y, x, rgb_to_yuv(rgb));
        }
    }

    match dst.color_space() {
        ColorSpace::Yuv422 => downsample_chroma_422(&full, dst),
        ColorSpace::Yuv420 => downsample_chroma_420(&full, dst),
        _ => unreachable!("rgb_image_to_yuv called with non-YUV destination"),
    }
    Ok(())
}

/// 4:4:4 -> 4:2:2: (1,2,1)/4 horizontal chroma taps, cosited on even
/// columns; luma is copied per pixel.
fn downsample_chroma_422(full: &Image, dst: &mut Image) {
    let (width, height) = full.dimensions();
    let edge = EdgeMethod::Repeat;
    for y in 0..height as i64 {
        let mut x = 0i64;
        while x < width as i64 {
            let mut px = [0u8; 3];
            for p in [plane::U, plane::V] {
                let sum = u32::from(full.sample8(p, y, x - 1, edge))
                    + 2 * u32::from(full.sample8(p, y, x, edge))
                    + u32::from(full.sample8(p, y, x + 1, edge))
                    + 2;
                px[p] = (sum / 4) as u8;
            }
            px[plane::Y] = full.sample8(plane::Y, y, x, edge);
            dst.set_pixel8(y, x, px);

            // Non-cosited luma
            dst.set_sample8(plane::Y, y, x + 1, full.sample8(plane::Y, y, x + 1, edge));
            x += 2;
        }
    }
}

/// 4:4:4 -> 4:2:0: equal-weight 2x2 chroma average, cosited on even
/// rows/columns; luma is copied per pixel.
fn downsample_chroma_420(full: &Image, dst: &mut Image) {
    let (width, height) = full.dimensions();
    let edge = EdgeMethod::Repeat;
    let mut y = 0i64;
    while y < height as i64 {
        let mut x = 0i64;
        while x < width as i64 {
            let mut px = [0u8; 3];
            for p in [plane::U, plane::V] {
                let sum = u32::from(full.sample8(p, y, x, edge))
                    + u32::from(full.sample8(p, y, x + 1, edge))
                    + u32::from(full.sample8(p, y + 1, x, edge))
                    + u32::from(full.sample8(p, y + 1, x + 1, edge))
                    + 2;
                px[p] = (sum / 4) as u8;
            }
            px[plane::Y] = full.sample8(plane::Y, y, x, edge);
            dst.set_pixel8(y, x, px);

            // Non-cosited lumas of the block
            for (dy, dx) in [(0, 1), (1, 0), (1, 1)] {
                dst.set_sample8(
                    plane::Y,
                    y + dy,
                    x + dx,
                    full.sample8(plane::Y, y + dy, x + dx, edge),
                );
            }
            x += 2;
        }
        y += 2;
    }
}

/// YUV 4:4:4/4:2:2/4:2:0 image to RGB.
///
/// The per-pixel read divides chroma addresses down to the stored grid,
/// so subsampled chroma is expanded nearest-neighbor.
fn yuv_image_to_rgb(src: &Image, dst: &mut Image) {
    let (width, height) = src.dimensions();
    for y in 0..height as i64 {
        for x in 0..width as i64 {
            let yuv = src.pixel8(y, x, EdgeMethod::Repeat);
            dst.set_pixel8(y, x, yuv_to_rgb(yuv));
        }
    }
}
