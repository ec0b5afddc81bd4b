//! Gamma linearization pipeline
//!
//! Filtering in the perceptual domain distorts the result, especially
//! in dark regions, so the resampler runs in linear light. This module
//! provides the lookup-table pair that moves samples between the two
//! domains and the image-level passes that apply them.
//!
//! The forward table has one entry per 8-bit code. The backward table
//! carries 4096 entries: after linear-domain processing the data holds
//! more tonal resolution than 8 bits, and quantizing through a 256-entry
//! inverse would band the shadows.
//!
//! Only luma carries a gamma curve. For YUV images chroma is moved with
//! a plain `/255` rescale in both directions; RGB images decode and
//! encode every channel.

use crate::{ColorError, ColorResult};
use chromascale_core::{ColorSpace, Image, Precision, SAMPLE_MAX};

/// Forward (de-gamma) table size: one entry per 8-bit input code
pub const FWD_LUT_SIZE: usize = 256;

/// Backward (gamma) table size: 4 extra bits of linear-domain precision
pub const BWD_LUT_SIZE: usize = 4096;

/// Default display gamma
pub const DEFAULT_GAMMA: f64 = 2.2;

/// Immutable gamma lookup-table pair, built once per run
///
/// Constructed before the frame loop and passed by reference to every
/// stage that needs it; nothing writes after construction.
///
/// # Examples
///
/// ```
/// use chromascale_color::GammaTables;
///
/// let tables = GammaTables::new(2.2).unwrap();
/// assert_eq!(tables.gamma(), 2.2);
/// ```
#[derive(Debug, Clone)]
pub struct GammaTables {
    fwd: Vec<f64>,
    bwd: Vec<u8>,
    gamma: f64,
}

impl GammaTables {
    /// Build the forward and backward tables for the given gamma.
    ///
    /// Gamma 1.0 is not special-cased; the tables then encode the
    /// identity transfer and the round trip is lossless modulo rounding.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidGamma`] unless `gamma` is finite
    /// and positive.
    pub fn new(gamma: f64) -> ColorResult<Self> {
        if !gamma.is_finite() || gamma <= 0.0 {
            return Err(ColorError::InvalidGamma(gamma));
        }

        let max = SAMPLE_MAX as f64;
        let fwd: Vec<f64> = (0..FWD_LUT_SIZE)
            .map(|i| (i as f64 / max).powf(gamma))
            .collect();

        let inv_gamma = 1.0 / gamma;
        let bwd: Vec<u8> = (0..BWD_LUT_SIZE)
            .map(|i| {
                let v = max * (i as f64 / (BWD_LUT_SIZE - 1) as f64).powf(inv_gamma) + 0.5;
                v.clamp(0.0, max) as u8
            })
            .collect();

        Ok(GammaTables { fwd, bwd, gamma })
    }

    /// The gamma value the tables were built for.
    #[inline]
    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    /// Decode one 8-bit perceptual sample to linear light.
    #[inline]
    pub fn linearize(&self, sample: u8) -> f64 {
        self.fwd[sample as usize]
    }

    /// Encode one linear-light sample to an 8-bit perceptual code.
    #[inline]
    pub fn encode(&self, v: f64) -> u8 {
        let idx = (v * (BWD_LUT_SIZE - 1) as f64 + 0.5).clamp(0.0, (BWD_LUT_SIZE - 1) as f64);
        self.bwd[idx as usize]
    }
}

/// Rescale one 8-bit chroma sample to `[0, 1]` without a gamma curve.
#[inline]
fn chroma_to_linear(sample: u8) -> f64 {
    sample as f64 / SAMPLE_MAX as f64
}

/// Rescale one linear chroma sample back to `[0, 255]`.
#[inline]
fn chroma_to_fixed8(v: f64) -> u8 {
    (v * SAMPLE_MAX as f64 + 0.5).clamp(0.0, SAMPLE_MAX as f64) as u8
}

fn check_pair(
    src: &Image,
    dst: &Image,
    src_precision: Precision,
    dst_precision: Precision,
) -> ColorResult<()> {
    if src.dimensions() != dst.dimensions() {
        return Err(chromascale_core::Error::DimensionMismatch {
            expected: src.dimensions(),
            actual: dst.dimensions(),
        }
        .into());
    }
    if src.color_space() != dst.color_space() {
        return Err(chromascale_core::Error::ColorSpaceMismatch {
            expected: src.color_space(),
            actual: dst.color_space(),
        }
        .into());
    }
    if src.precision() != src_precision {
        return Err(chromascale_core::Error::PrecisionMismatch {
            expected: src_precision,
            actual: src.precision(),
        }
        .into());
    }
    if dst.precision() != dst_precision {
        return Err(chromascale_core::Error::PrecisionMismatch {
            expected: dst_precision,
            actual: dst.precision(),
        }
        .into());
    }
    Ok(())
}

/// De-gamma: convert a fixed8 perceptual image to linear-light double.
///
/// RGB images decode every channel through the forward table; YUV
/// images decode only luma and rescale chroma by `/255`.
///
/// # Errors
///
/// Fails without touching `dst` unless both images share dimensions and
/// color space, `src` is fixed8, and `dst` is double.
pub fn degamma_image(src: &Image, dst: &mut Image, tables: &GammaTables) -> ColorResult<()> {
    check_pair(src, dst, Precision::Fixed8, Precision::Double)?;

    let (width, height) = src.dimensions();
    let gamma_planes = if src.color_space() == ColorSpace::Rgb {
        3
    } else {
        1
    };

    for p in 0..gamma_planes {
        for y in 0..height {
            for x in 0..width {
                dst.set_plane_f(p, x, y, tables.linearize(src.plane_8(p, x, y)));
            }
        }
    }
    for p in gamma_planes..3 {
        for y in 0..height {
            for x in 0..width {
                dst.set_plane_f(p, x, y, chroma_to_linear(src.plane_8(p, x, y)));
            }
        }
    }
    Ok(())
}

/// Gamma: convert a linear-light double image back to fixed8.
///
/// The inverse of [`degamma_image`]: luma/RGB samples are scaled into
/// the 4096-entry backward table's domain and looked up; chroma is
/// rescaled by `*255` and rounded.
///
/// # Errors
///
/// Fails without touching `dst` unless both images share dimensions and
/// color space, `src` is double, and `dst` is fixed8.
pub fn gamma_image(src: &Image, dst: &mut Image, tables: &GammaTables) -> ColorResult<()> {
    check_pair(src, dst, Precision::Double, Precision::Fixed8)?;

    let (width, height) = src.dimensions();
    let gamma_planes = if src.color_space() == ColorSpace::Rgb {
        3
    } else {
        1
    };

    for p in 0..gamma_planes {
        for y in 0..height {
            for x in 0..width {
                dst.set_plane_8(p, x, y, tables.encode(src.plane_f(p, x, y)));
            }
        }
    }
    for p in gamma_planes..3 {
        for y in 0..height {
            for x in 0..width {
                dst.set_plane_8(p, x, y, chroma_to_fixed8(src.plane_f(p, x, y)));
            }
        }
    }
    Ok(())
}
