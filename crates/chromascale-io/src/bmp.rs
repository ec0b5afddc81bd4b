//! BMP image format support
//!
//! Reads and writes 24-bit uncompressed Windows Bitmap (BMP) files,
//! the packed-RGB container of the tool. Other bit depths and
//! compressed variants are rejected.

use crate::{IoError, IoResult};
use chromascale_core::{ColorSpace, Image, Precision, plane};
use std::io::{Read, Write};

/// BMP file header size
const BMP_FILE_HEADER_SIZE: usize = 14;

/// BMP info header size (BITMAPINFOHEADER)
const BMP_INFO_HEADER_SIZE: u32 = 40;

struct BmpHeader {
    width: u32,
    height: u32,
    top_down: bool,
    pixel_offset: usize,
    header_size: u32,
}

fn read_header<R: Read>(reader: &mut R) -> IoResult<BmpHeader> {
    // File header (14 bytes)
    let mut file_header = [0u8; BMP_FILE_HEADER_SIZE];
    reader.read_exact(&mut file_header)?;

    if &file_header[0..2] != b"BM" {
        return Err(IoError::InvalidData("not a BMP file".to_string()));
    }

    let pixel_offset = u32::from_le_bytes([
        file_header[10],
        file_header[11],
        file_header[12],
        file_header[13],
    ]) as usize;

    // Info header (minimum 40 bytes)
    let mut info_header = [0u8; 40];
    reader.read_exact(&mut info_header)?;

    let header_size = u32::from_le_bytes([
        info_header[0],
        info_header[1],
        info_header[2],
        info_header[3],
    ]);
    if header_size < BMP_INFO_HEADER_SIZE {
        return Err(IoError::InvalidData(format!(
            "unsupported BMP header size: {}",
            header_size
        )));
    }

    let width = i32::from_le_bytes([
        info_header[4],
        info_header[5],
        info_header[6],
        info_header[7],
    ]);
    let height = i32::from_le_bytes([
        info_header[8],
        info_header[9],
        info_header[10],
        info_header[11],
    ]);

    let planes = u16::from_le_bytes([info_header[12], info_header[13]]);
    if planes != 1 {
        return Err(IoError::InvalidData(format!(
            "unsupported number of planes: {}",
            planes
        )));
    }

    let bits_per_pixel = u16::from_le_bytes([info_header[14], info_header[15]]);
    if bits_per_pixel != 24 {
        return Err(IoError::UnsupportedFormat(format!(
            "only 24-bit BMP images are supported, got {} bpp",
            bits_per_pixel
        )));
    }

    let compression = u32::from_le_bytes([
        info_header[16],
        info_header[17],
        info_header[18],
        info_header[19],
    ]);
    if compression != 0 {
        return Err(IoError::UnsupportedFormat(format!(
            "unsupported BMP compression: {}",
            compression
        )));
    }

    Ok(BmpHeader {
        width: width.unsigned_abs(),
        // Negative height marks top-down row order
        top_down: height < 0,
        height: height.unsigned_abs(),
        pixel_offset,
        header_size,
    })
}

/// Read the dimensions of a BMP image without decoding pixel data.
pub fn bmp_dimensions<R: Read>(mut reader: R) -> IoResult<(u32, u32)> {
    let header = read_header(&mut reader)?;
    Ok((header.width, header.height))
}

/// Read a 24-bit BMP image into a fixed8 RGB [`Image`].
pub fn read_bmp<R: Read>(mut reader: R) -> IoResult<Image> {
    let header = read_header(&mut reader)?;
    let BmpHeader {
        width,
        height,
        top_down,
        pixel_offset,
        header_size,
    } = header;

    // Skip any gap between the headers and the pixel data
    let current_pos = BMP_FILE_HEADER_SIZE + header_size as usize;
    if pixel_offset > current_pos {
        let mut skip = vec![0u8; pixel_offset - current_pos];
        reader.read_exact(&mut skip)?;
    }

    let mut img = Image::fixed8(ColorSpace::Rgb, width, height)?;

    // BMP rows are 4-byte aligned
    let row_stride = ((width as usize * 24).div_ceil(32)) * 4;
    let mut row_buffer = vec![0u8; row_stride];

    for row in 0..height {
        reader.read_exact(&mut row_buffer)?;

        let y = if top_down { row } else { height - 1 - row };
        for x in 0..width {
            let idx = (x as usize) * 3;
            let b = row_buffer[idx];
            let g = row_buffer[idx + 1];
            let r = row_buffer[idx + 2];
            img.set_plane_8(plane::R, x, y, r);
            img.set_plane_8(plane::G, x, y, g);
            img.set_plane_8(plane::B, x, y, b);
        }
    }

    Ok(img)
}

/// Write a fixed8 RGB [`Image`] as a 24-bit BMP.
///
/// # Errors
///
/// Returns [`IoError::UnsupportedFormat`] if the image is not fixed8
/// RGB; convert before writing.
pub fn write_bmp<W: Write>(img: &Image, mut writer: W) -> IoResult<()> {
    if img.color_space() != ColorSpace::Rgb || img.precision() != Precision::Fixed8 {
        return Err(IoError::UnsupportedFormat(format!(
            "BMP output requires fixed8 RGB, got {:?} {:?}",
            img.precision(),
            img.color_space()
        )));
    }

    let (width, height) = img.dimensions();
    let row_stride = ((width as usize * 24).div_ceil(32)) * 4;
    let pixel_data_size = row_stride * height as usize;
    let pixel_offset = BMP_FILE_HEADER_SIZE + BMP_INFO_HEADER_SIZE as usize;
    let file_size = pixel_offset + pixel_data_size;

    // File header
    writer.write_all(b"BM")?;
    writer.write_all(&(file_size as u32).to_le_bytes())?;
    writer.write_all(&[0u8; 4])?; // Reserved
    writer.write_all(&(pixel_offset as u32).to_le_bytes())?;

    // Info header
    writer.write_all(&BMP_INFO_HEADER_SIZE.to_le_bytes())?;
    writer.write_all(&(width as i32).to_le_bytes())?;
    writer.write_all(&(height as i32).to_le_bytes())?; // Bottom-up
    writer.write_all(&1u16.to_le_bytes())?; // Planes
    writer.write_all(&24u16.to_le_bytes())?;
    writer.write_all(&0u32.to_le_bytes())?; // Compression
    writer.write_all(&(pixel_data_size as u32).to_le_bytes())?;
    writer.write_all(&0i32.to_le_bytes())?; // X pixels per meter
    writer.write_all(&0i32.to_le_bytes())?; // Y pixels per meter
    writer.write_all(&0u32.to_le_bytes())?; // Colors used
    writer.write_all(&0u32.to_le_bytes())?; // Important colors

    // Pixel data, bottom-up, BGR
    let mut row_buffer = vec![0u8; row_stride];
    for row in 0..height {
        let y = height - 1 - row;
        for x in 0..width {
            let idx = (x as usize) * 3;
            row_buffer[idx] = img.plane_8(plane::B, x, y);
            row_buffer[idx + 1] = img.plane_8(plane::G, x, y);
            row_buffer[idx + 2] = img.plane_8(plane::R, x, y);
        }
        writer.write_all(&row_buffer)?;
    }

    Ok(())
}
