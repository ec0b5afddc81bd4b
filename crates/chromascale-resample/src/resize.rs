//! Separable two-pass resampling
//!
//! Horizontal pass first, into an intermediate `out_w x in_h` buffer,
//! then a vertical pass into the final image. Both passes run per
//! plane in the linear-light double domain and share the contribution
//! table mechanism; subsampled chroma planes get their own tables over
//! the subsampled dimensions so edge handling lands on the chroma
//! plane's real boundary, not the luma plane's.

use crate::contrib::ContribTable;
use crate::{ResampleError, ResampleResult};
use chromascale_core::{EdgeMethod, Image, Precision};
use log::debug;

fn check_double(img: &Image) -> ResampleResult<()> {
    if img.precision() != Precision::Double {
        return Err(chromascale_core::Error::PrecisionMismatch {
            expected: Precision::Double,
            actual: img.precision(),
        }
        .into());
    }
    Ok(())
}

/// Resample `src` to the dimensions of `dst` with a separable
/// Lanczos-2 filter.
///
/// Both images must be double precision (linear light) and share a
/// color space. An axis whose size does not change degenerates to an
/// exact copy along that axis; identical dimensions make the whole
/// call a pixel-exact copy, so no blur is introduced when no
/// resampling was requested.
///
/// # Errors
///
/// Fails without touching `dst` on a precision or color-space
/// mismatch.
pub fn resize_image(src: &Image, dst: &mut Image, edge: EdgeMethod) -> ResampleResult<()> {
    check_double(src)?;
    check_double(dst)?;
    if src.color_space() != dst.color_space() {
        return Err(ResampleError::Core(
            chromascale_core::Error::ColorSpaceMismatch {
                expected: src.color_space(),
                actual: dst.color_space(),
            },
        ));
    }

    let (in_w, in_h) = src.dimensions();
    let (out_w, out_h) = dst.dimensions();

    if (in_w, in_h) == (out_w, out_h) {
        dst.copy_from(src)?;
        return Ok(());
    }

    let (sub_x, sub_y) = src.color_space().chroma_subsampling();
    debug!(
        "resize {in_w}x{in_h} -> {out_w}x{out_h} ({:?}, {edge:?})",
        src.color_space()
    );

    // Horizontal pass into an out_w x in_h intermediate
    let mut mid = Image::double(src.color_space(), out_w, in_h)?;
    if in_w == out_w {
        mid.copy_from(src)?;
    } else {
        let luma = ContribTable::new(in_w, out_w, edge);
        let chroma = (sub_x == 2).then(|| ContribTable::new(in_w / 2, out_w / 2, edge));
        filter_pass_horz(src, &mut mid, &luma, chroma.as_ref().unwrap_or(&luma), (sub_x, sub_y));
    }

    // Vertical pass into the destination
    if in_h == out_h {
        dst.copy_from(&mid)?;
    } else {
        let luma = ContribTable::new(in_h, out_h, edge);
        let chroma = (sub_y == 2).then(|| ContribTable::new(in_h / 2, out_h / 2, edge));
        filter_pass_vert(&mid, dst, &luma, chroma.as_ref().unwrap_or(&luma), (sub_x, sub_y));
    }

    Ok(())
}

/// Filter every plane along the row direction.
fn filter_pass_horz(
    src: &Image,
    dst: &mut Image,
    luma: &ContribTable,
    chroma: &ContribTable,
    (sub_x, sub_y): (u32, u32),
) {
    let in_h = src.height();
    let out_w = dst.width();

    for y in 0..in_h {
        for x in 0..out_w {
            let v = luma.apply(x as usize, |sx| src.plane_f(0, sx, y));
            dst.set_plane_f(0, x, y, v);
        }
    }

    let uv_w = out_w / sub_x;
    let uv_h = in_h / sub_y;
    for plane in 1..3 {
        for y in 0..uv_h {
            for x in 0..uv_w {
                let v = chroma.apply(x as usize, |sx| src.plane_f(plane, sx, y));
                dst.set_plane_f(plane, x, y, v);
            }
        }
    }
}

/// Filter every plane along the column direction.
fn filter_pass_vert(
    src: &Image,
    dst: &mut Image,
    luma: &ContribTable,
    chroma: &ContribTable,
    (sub_x, sub_y): (u32, u32),
) {
    let out_w = dst.width();
    let out_h = dst.height();

    for y in 0..out_h {
        for x in 0..out_w {
            let v = luma.apply(y as usize, |sy| src.plane_f(0, x, sy));
            dst.set_plane_f(0, x, y, v);
        }
    }

    let uv_w = out_w / sub_x;
    let uv_h = out_h / sub_y;
    for plane in 1..3 {
        for y in 0..uv_h {
            for x in 0..uv_w {
                let v = chroma.apply(y as usize, |sy| src.plane_f(plane, x, sy));
                dst.set_plane_f(plane, x, y, v);
            }
        }
    }
}
