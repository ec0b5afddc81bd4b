//! Raw YUV 4:2:0 file support
//!
//! Headerless 8-bit frames: a full-resolution Y plane followed by the
//! two quarter-size chroma planes in one of four orderings. Multiple
//! frames may be concatenated in one file; the frame index seeks in
//! whole-frame strides.
//!
//! 4:2:2 appears in the color-space enumeration for in-memory
//! processing but has no container variant here; asking to load it is
//! an explicit unsupported-format error rather than guessed behavior.

use crate::{IoError, IoResult};
use chromascale_core::{ColorSpace, Image, Precision, plane};
use std::io::{Read, Seek, SeekFrom, Write};

/// Bits per pixel of a packed 4:2:0 frame (8 luma + 2x2 chroma)
pub const YUV420_BITS_PER_PIXEL: u64 = 12;

/// Chroma-plane ordering within a 4:2:0 file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum YuvLayout {
    /// Planar: Y, then U, then V
    #[default]
    I420,
    /// Planar: Y, then V, then U
    Yv12,
    /// Semi-planar: Y, then interleaved UV pairs
    Nv12,
    /// Semi-planar: Y, then interleaved VU pairs
    Nv21,
}

impl YuvLayout {
    /// Plane indices in file order for the two chroma slots.
    fn chroma_order(self) -> (usize, usize) {
        match self {
            YuvLayout::I420 | YuvLayout::Nv12 => (plane::U, plane::V),
            YuvLayout::Yv12 | YuvLayout::Nv21 => (plane::V, plane::U),
        }
    }

    /// Check whether the chroma samples are interleaved in pairs.
    fn interleaved(self) -> bool {
        matches!(self, YuvLayout::Nv12 | YuvLayout::Nv21)
    }
}

/// Size in bytes of one 4:2:0 frame.
///
/// # Errors
///
/// Both dimensions must be even and nonzero.
pub fn frame_size(width: u32, height: u32) -> IoResult<u64> {
    if width == 0 || height == 0 || width % 2 != 0 || height % 2 != 0 {
        return Err(IoError::InvalidData(format!(
            "YUV 4:2:0 dimensions must be even and nonzero, got {}x{}",
            width, height
        )));
    }
    Ok(YUV420_BITS_PER_PIXEL * u64::from(width) * u64::from(height) / 8)
}

/// Read one frame of a raw YUV file into a fixed8 [`Image`].
///
/// `color_space` selects the in-memory layout the file is read as;
/// only [`ColorSpace::Yuv420`] has a container format. `frame_index`
/// seeks past that many whole frames first.
///
/// # Errors
///
/// Requesting 4:2:2 (declared but never given a file format) or any
/// other non-4:2:0 space fails fast with
/// [`IoError::UnsupportedFormat`].
pub fn read_yuv<R: Read + Seek>(
    mut reader: R,
    color_space: ColorSpace,
    width: u32,
    height: u32,
    frame_index: u32,
    layout: YuvLayout,
) -> IoResult<Image> {
    match color_space {
        ColorSpace::Yuv420 => {}
        ColorSpace::Yuv422 => {
            return Err(IoError::UnsupportedFormat(
                "YUV 4:2:2 file loading is not supported".to_string(),
            ));
        }
        other => {
            return Err(IoError::UnsupportedFormat(format!(
                "no raw YUV container for {:?}",
                other
            )));
        }
    }

    let size = frame_size(width, height)?;
    reader.seek(SeekFrom::Start(size * u64::from(frame_index)))?;

    let mut img = Image::fixed8(ColorSpace::Yuv420, width, height)?;

    // Y plane
    let mut row = vec![0u8; width as usize];
    for y in 0..height {
        reader.read_exact(&mut row)?;
        for (x, &v) in row.iter().enumerate() {
            img.set_plane_8(plane::Y, x as u32, y, v);
        }
    }

    // Chroma planes over the quarter-size grid
    let (cw, ch) = (width / 2, height / 2);
    let (first, second) = layout.chroma_order();
    if layout.interleaved() {
        let mut row = vec![0u8; 2 * cw as usize];
        for y in 0..ch {
            reader.read_exact(&mut row)?;
            for x in 0..cw {
                img.set_plane_8(first, x, y, row[2 * x as usize]);
                img.set_plane_8(second, x, y, row[2 * x as usize + 1]);
            }
        }
    } else {
        let mut row = vec![0u8; cw as usize];
        for p in [first, second] {
            for y in 0..ch {
                reader.read_exact(&mut row)?;
                for (x, &v) in row.iter().enumerate() {
                    img.set_plane_8(p, x as u32, y, v);
                }
            }
        }
    }

    Ok(img)
}

/// Append one frame of a fixed8 4:2:0 [`Image`] to a raw YUV stream.
///
/// Multiframe files are produced by writing frames back to back into
/// the same writer.
pub fn write_yuv<W: Write>(img: &Image, mut writer: W, layout: YuvLayout) -> IoResult<()> {
    if img.color_space() != ColorSpace::Yuv420 || img.precision() != Precision::Fixed8 {
        return Err(IoError::UnsupportedFormat(format!(
            "raw YUV output requires fixed8 4:2:0, got {:?} {:?}",
            img.precision(),
            img.color_space()
        )));
    }

    let (width, height) = img.dimensions();
    frame_size(width, height)?;

    // Y plane
    let mut row = vec![0u8; width as usize];
    for y in 0..height {
        for x in 0..width {
            row[x as usize] = img.plane_8(plane::Y, x, y);
        }
        writer.write_all(&row)?;
    }

    let (cw, ch) = (width / 2, height / 2);
    let (first, second) = layout.chroma_order();
    if layout.interleaved() {
        let mut row = vec![0u8; 2 * cw as usize];
        for y in 0..ch {
            for x in 0..cw {
                row[2 * x as usize] = img.plane_8(first, x, y);
                row[2 * x as usize + 1] = img.plane_8(second, x, y);
            }
            writer.write_all(&row)?;
        }
    } else {
        let mut row = vec![0u8; cw as usize];
        for p in [first, second] {
            for y in 0..ch {
                for x in 0..cw {
                    row[x as usize] = img.plane_8(p, x, y);
                }
                writer.write_all(&row)?;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn sample_image() -> Image {
        let mut img = Image::fixed8(ColorSpace::Yuv420, 4, 4).unwrap();
        for y in 0..4 {
            for x in 0..4 {
                img.set_plane_8(plane::Y, x, y, (10 + y * 4 + x) as u8);
            }
        }
        for y in 0..2 {
            for x in 0..2 {
                img.set_plane_8(plane::U, x, y, (100 + y * 2 + x) as u8);
                img.set_plane_8(plane::V, x, y, (200 + y * 2 + x) as u8);
            }
        }
        img
    }

    #[test]
    fn test_frame_size() {
        assert_eq!(frame_size(4, 4).unwrap(), 24);
        assert_eq!(frame_size(352, 288).unwrap(), 152064);
        assert!(frame_size(5, 4).is_err());
        assert!(frame_size(4, 0).is_err());
    }

    #[test]
    fn test_roundtrip_all_layouts() {
        let img = sample_image();
        for layout in [
            YuvLayout::I420,
            YuvLayout::Yv12,
            YuvLayout::Nv12,
            YuvLayout::Nv21,
        ] {
            let mut buf = Vec::new();
            write_yuv(&img, &mut buf, layout).unwrap();
            assert_eq!(buf.len(), 24);
            let back =
                read_yuv(Cursor::new(&buf), ColorSpace::Yuv420, 4, 4, 0, layout).unwrap();
            for p in 0..3 {
                let (pw, ph) = img.plane_dimensions(p);
                for y in 0..ph {
                    for x in 0..pw {
                        assert_eq!(
                            back.plane_8(p, x, y),
                            img.plane_8(p, x, y),
                            "{layout:?} plane {p} ({x},{y})"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_i420_byte_order() {
        let img = sample_image();
        let mut buf = Vec::new();
        write_yuv(&img, &mut buf, YuvLayout::I420).unwrap();
        // Y plane raster order, then U, then V
        assert_eq!(buf[0], 10);
        assert_eq!(buf[15], 25);
        assert_eq!(&buf[16..20], &[100, 101, 102, 103]);
        assert_eq!(&buf[20..24], &[200, 201, 202, 203]);
    }

    #[test]
    fn test_yv12_swaps_chroma_planes() {
        let img = sample_image();
        let mut buf = Vec::new();
        write_yuv(&img, &mut buf, YuvLayout::Yv12).unwrap();
        assert_eq!(&buf[16..20], &[200, 201, 202, 203]);
        assert_eq!(&buf[20..24], &[100, 101, 102, 103]);
    }

    #[test]
    fn test_nv12_interleaves_uv() {
        let img = sample_image();
        let mut buf = Vec::new();
        write_yuv(&img, &mut buf, YuvLayout::Nv12).unwrap();
        assert_eq!(&buf[16..24], &[100, 200, 101, 201, 102, 202, 103, 203]);
    }

    #[test]
    fn test_nv21_interleaves_vu() {
        let img = sample_image();
        let mut buf = Vec::new();
        write_yuv(&img, &mut buf, YuvLayout::Nv21).unwrap();
        assert_eq!(&buf[16..24], &[200, 100, 201, 101, 202, 102, 203, 103]);
    }

    #[test]
    fn test_multiframe_seek() {
        let img = sample_image();
        let mut other = img.clone();
        other.set_plane_8(plane::Y, 0, 0, 99);

        let mut buf = Vec::new();
        write_yuv(&img, &mut buf, YuvLayout::I420).unwrap();
        write_yuv(&other, &mut buf, YuvLayout::I420).unwrap();

        let f0 = read_yuv(Cursor::new(&buf), ColorSpace::Yuv420, 4, 4, 0, YuvLayout::I420)
            .unwrap();
        let f1 = read_yuv(Cursor::new(&buf), ColorSpace::Yuv420, 4, 4, 1, YuvLayout::I420)
            .unwrap();
        assert_eq!(f0.plane_8(plane::Y, 0, 0), 10);
        assert_eq!(f1.plane_8(plane::Y, 0, 0), 99);
    }

    #[test]
    fn test_yuv422_load_fails_fast() {
        let buf = vec![0u8; 64];
        let err = read_yuv(
            Cursor::new(&buf),
            ColorSpace::Yuv422,
            4,
            4,
            0,
            YuvLayout::I420,
        )
        .unwrap_err();
        assert!(matches!(err, IoError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_truncated_frame_is_error() {
        let buf = vec![0u8; 10];
        assert!(
            read_yuv(Cursor::new(&buf), ColorSpace::Yuv420, 4, 4, 0, YuvLayout::I420).is_err()
        );
    }
}
