//! Resize pipeline orchestration
//!
//! Scaling runs in linear light: filtering gamma-encoded samples
//! distorts the result, most visibly in dark regions of downscaled
//! images. The pipeline brackets the resampler with the de-gamma and
//! re-gamma passes:
//!
//! fixed8 -> de-gamma -> linear double -> resample -> gamma -> fixed8
//!
//! Every stage validates its own input/output pairing; a mismatch is a
//! hard failure of that stage call, surfaced unchanged to the caller.

use crate::ResampleResult;
use crate::resize::resize_image;
use chromascale_core::{EdgeMethod, Image};
use chromascale_color::{GammaTables, degamma_image, gamma_image};
use log::debug;

/// Resize one fixed8 frame to `out_width x out_height`.
///
/// Returns a new fixed8 image in the source's color space. The gamma
/// tables are built once per run by the caller and shared across
/// frames.
///
/// # Errors
///
/// Fails if the target dimensions are invalid or any stage rejects its
/// input/output pairing; the source is never modified.
pub fn resize_frame(
    src: &Image,
    out_width: u32,
    out_height: u32,
    tables: &GammaTables,
    edge: EdgeMethod,
) -> ResampleResult<Image> {
    let (in_w, in_h) = src.dimensions();
    debug!(
        "frame {in_w}x{in_h} -> {out_width}x{out_height}, gamma {}",
        tables.gamma()
    );

    let mut linear_in = Image::double(src.color_space(), in_w, in_h)?;
    degamma_image(src, &mut linear_in, tables)?;

    let mut linear_out = Image::double(src.color_space(), out_width, out_height)?;
    resize_image(&linear_in, &mut linear_out, edge)?;

    let mut out = Image::fixed8(src.color_space(), out_width, out_height)?;
    gamma_image(&linear_out, &mut out, tables)?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chromascale_core::ColorSpace;

    fn solid_rgb(width: u32, height: u32, color: [u8; 3]) -> Image {
        let mut img = Image::fixed8(ColorSpace::Rgb, width, height).unwrap();
        for y in 0..height as i64 {
            for x in 0..width as i64 {
                img.set_pixel8(y, x, color);
            }
        }
        img
    }

    #[test]
    fn test_solid_color_upscale_gamma_unity() {
        // Uniform 2x2 doubled to 4x4 keeps the color within +/-1
        let color = [200u8, 50, 120];
        let src = solid_rgb(2, 2, color);
        let tables = GammaTables::new(1.0).unwrap();
        let out = resize_frame(&src, 4, 4, &tables, EdgeMethod::Repeat).unwrap();
        assert_eq!(out.dimensions(), (4, 4));
        for y in 0..4 {
            for x in 0..4 {
                let px = out.pixel8(y, x, EdgeMethod::Repeat);
                for p in 0..3 {
                    assert!(
                        (px[p] as i32 - color[p] as i32).abs() <= 1,
                        "({x},{y}) plane {p}: {} vs {}",
                        px[p],
                        color[p]
                    );
                }
            }
        }
    }

    #[test]
    fn test_identity_dimensions_roundtrip() {
        // Same-size resize is the gamma roundtrip alone
        let src = solid_rgb(3, 3, [128, 128, 128]);
        let tables = GammaTables::new(2.2).unwrap();
        let out = resize_frame(&src, 3, 3, &tables, EdgeMethod::Mirror).unwrap();
        for y in 0..3 {
            for x in 0..3 {
                let px = out.pixel8(y, x, EdgeMethod::Repeat);
                for p in 0..3 {
                    assert!((px[p] as i32 - 128).abs() <= 1);
                }
            }
        }
    }

    #[test]
    fn test_yuv_frame_roundtrip() {
        let mut src = Image::fixed8(ColorSpace::Yuv420, 4, 4).unwrap();
        for y in 0..4i64 {
            for x in 0..4i64 {
                src.set_pixel8(y, x, [140, 100, 160]);
            }
        }
        let tables = GammaTables::new(2.2).unwrap();
        let out = resize_frame(&src, 8, 8, &tables, EdgeMethod::Repeat).unwrap();
        assert_eq!(out.color_space(), ColorSpace::Yuv420);
        for y in 0..8 {
            for x in 0..8 {
                let px = out.pixel8(y, x, EdgeMethod::Repeat);
                assert!((px[0] as i32 - 140).abs() <= 1);
                assert!((px[1] as i32 - 100).abs() <= 1);
                assert!((px[2] as i32 - 160).abs() <= 1);
            }
        }
    }

    #[test]
    fn test_invalid_target_dimensions() {
        let src = solid_rgb(2, 2, [1, 2, 3]);
        let tables = GammaTables::new(2.2).unwrap();
        assert!(resize_frame(&src, 0, 4, &tables, EdgeMethod::Repeat).is_err());
        assert!(resize_frame(&src, 4, 0, &tables, EdgeMethod::Repeat).is_err());
    }
}
