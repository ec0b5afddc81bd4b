//! The three-plane image container
//!
//! [`Image`] is the fundamental type in chromascale. It holds three
//! sample planes (R/G/B or Y/U/V) at either 8-bit or double precision,
//! selected at construction and fixed for the lifetime of the image.
//!
//! # Plane layout
//!
//! Every plane is allocated at the full `width x height`, plane-major,
//! row-major within a plane. For subsampled color spaces the chroma
//! planes (1 and 2) are logically meaningful only over the reduced grid
//! `width/sub_x x height/sub_y`; the oversized allocation buys uniform
//! addressing across all four color spaces. Accessors that take
//! coordinates in the luma frame divide them down internally before
//! touching a chroma plane.

mod access;

use crate::error::{Error, Result};

/// Color space of an [`Image`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorSpace {
    /// Packed R'G'B', one full-resolution plane per channel
    Rgb,
    /// Y'CbCr with full-resolution chroma
    Yuv444,
    /// Y'CbCr with chroma halved horizontally
    Yuv422,
    /// Y'CbCr with chroma halved in both directions
    Yuv420,
}

impl ColorSpace {
    /// Chroma subsampling factors `(sub_x, sub_y)` for planes 1 and 2.
    #[inline]
    pub fn chroma_subsampling(self) -> (u32, u32) {
        match self {
            ColorSpace::Rgb | ColorSpace::Yuv444 => (1, 1),
            ColorSpace::Yuv422 => (2, 1),
            ColorSpace::Yuv420 => (2, 2),
        }
    }

    /// Check whether this is one of the luma/chroma spaces.
    #[inline]
    pub fn is_yuv(self) -> bool {
        !matches!(self, ColorSpace::Rgb)
    }

    /// Check whether chroma is stored at reduced resolution.
    #[inline]
    pub fn is_subsampled(self) -> bool {
        self.chroma_subsampling() != (1, 1)
    }
}

/// Sample precision of an [`Image`]
///
/// `Fixed8` is the interchange precision of the container formats;
/// `Double` is used for de-gamma'ed linear-light working buffers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Precision {
    /// 8 bits per sample
    Fixed8,
    /// `f64` per sample
    Double,
}

/// Maximum value of an 8-bit sample
pub const SAMPLE_MAX: u32 = 255;

/// Maximum value of a linear-light double sample
pub const SAMPLE_MAX_F: f64 = 1.0;

/// Tagged plane storage; exactly one representation exists per image.
#[derive(Debug, Clone)]
enum Planes {
    Fixed8(Vec<u8>),
    Double(Vec<f64>),
}

/// Three-plane raster image at fixed or double precision
///
/// # Examples
///
/// ```
/// use chromascale_core::{ColorSpace, Image, Precision};
///
/// let img = Image::new(ColorSpace::Yuv420, 352, 288, Precision::Fixed8).unwrap();
/// assert_eq!(img.width(), 352);
/// assert_eq!(img.precision(), Precision::Fixed8);
/// ```
#[derive(Debug, Clone)]
pub struct Image {
    color_space: ColorSpace,
    width: u32,
    height: u32,
    planes: Planes,
}

impl Image {
    /// Create a new image with all samples set to zero.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if `width` or `height` is 0.
    pub fn new(
        color_space: ColorSpace,
        width: u32,
        height: u32,
        precision: Precision,
    ) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }

        let size = 3 * (width as usize) * (height as usize);
        let planes = match precision {
            Precision::Fixed8 => Planes::Fixed8(vec![0u8; size]),
            Precision::Double => Planes::Double(vec![0.0f64; size]),
        };

        Ok(Image {
            color_space,
            width,
            height,
            planes,
        })
    }

    /// Create a new 8-bit image (the container interchange precision).
    pub fn fixed8(color_space: ColorSpace, width: u32, height: u32) -> Result<Self> {
        Self::new(color_space, width, height, Precision::Fixed8)
    }

    /// Create a new double-precision image (linear-light working buffer).
    pub fn double(color_space: ColorSpace, width: u32, height: u32) -> Result<Self> {
        Self::new(color_space, width, height, Precision::Double)
    }

    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the image dimensions as `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Get the color space.
    #[inline]
    pub fn color_space(&self) -> ColorSpace {
        self.color_space
    }

    /// Get the sample precision.
    #[inline]
    pub fn precision(&self) -> Precision {
        match self.planes {
            Planes::Fixed8(_) => Precision::Fixed8,
            Planes::Double(_) => Precision::Double,
        }
    }

    /// Logical dimensions of the given plane.
    ///
    /// Plane 0 is always `width x height`; planes 1 and 2 shrink by the
    /// chroma subsampling factors.
    #[inline]
    pub fn plane_dimensions(&self, plane: usize) -> (u32, u32) {
        if plane == 0 {
            (self.width, self.height)
        } else {
            let (sub_x, sub_y) = self.color_space.chroma_subsampling();
            (self.width / sub_x, self.height / sub_y)
        }
    }

    /// Validate that `other` has the same dimensions.
    pub(crate) fn check_same_dimensions(&self, other: &Image) -> Result<()> {
        if self.dimensions() != other.dimensions() {
            return Err(Error::DimensionMismatch {
                expected: self.dimensions(),
                actual: other.dimensions(),
            });
        }
        Ok(())
    }

    /// Copy all samples and the color space from `src` into this image.
    ///
    /// Fails without writing if the dimensions or the precision differ.
    pub fn copy_from(&mut self, src: &Image) -> Result<()> {
        self.check_same_dimensions(src)?;
        match (&mut self.planes, &src.planes) {
            (Planes::Fixed8(dst), Planes::Fixed8(s)) => dst.copy_from_slice(s),
            (Planes::Double(dst), Planes::Double(s)) => dst.copy_from_slice(s),
            _ => {
                return Err(Error::PrecisionMismatch {
                    expected: self.precision(),
                    actual: src.precision(),
                });
            }
        }
        self.color_space = src.color_space;
        Ok(())
    }

    /// Retag the color space without touching sample data.
    ///
    /// Used by the file readers, which fill the planes of a raw
    /// container before the logical color space is final.
    pub fn set_color_space(&mut self, color_space: ColorSpace) {
        self.color_space = color_space;
    }

    #[inline]
    pub(crate) fn plane_len(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    #[inline]
    pub(crate) fn planes8(&self) -> &[u8] {
        match &self.planes {
            Planes::Fixed8(v) => v,
            Planes::Double(_) => panic!("image holds double samples, not fixed8"),
        }
    }

    #[inline]
    pub(crate) fn planes8_mut(&mut self) -> &mut [u8] {
        match &mut self.planes {
            Planes::Fixed8(v) => v,
            Planes::Double(_) => panic!("image holds double samples, not fixed8"),
        }
    }

    #[inline]
    pub(crate) fn planesf(&self) -> &[f64] {
        match &self.planes {
            Planes::Double(v) => v,
            Planes::Fixed8(_) => panic!("image holds fixed8 samples, not double"),
        }
    }

    #[inline]
    pub(crate) fn planesf_mut(&mut self) -> &mut [f64] {
        match &mut self.planes {
            Planes::Double(v) => v,
            Planes::Fixed8(_) => panic!("image holds fixed8 samples, not double"),
        }
    }
}
