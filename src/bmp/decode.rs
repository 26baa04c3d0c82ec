//! Strict 24-bit BMP decoder.
//!
//! A little-endian cursor reads both headers, then every check runs before
//! any pixel byte is touched.

use alloc::vec::Vec;

use imgref::ImgVec;
use log::trace;

use super::{FileHeader, HEADERS_SIZE, InfoHeader, FILE_HEADER_SIZE, INFO_HEADER_SIZE, SIGNATURE};
use crate::error::BmpError;
use crate::pixel::{BITS_PER_PIXEL, BYTES_PER_PIXEL, Pixel, image_data_size};

// ── Cursor for reading from &[u8] ───────────────────────────────────

struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    fn read_fixed_bytes<const N: usize>(&mut self) -> Result<[u8; N], BmpError> {
        let end = self.pos.checked_add(N).filter(|&end| end <= self.data.len());
        let Some(end) = end else {
            return Err(BmpError::InvalidFormat(self.data.len()));
        };
        let mut buf = [0u8; N];
        buf.copy_from_slice(&self.data[self.pos..end]);
        self.pos = end;
        Ok(buf)
    }

    fn get_u16_le(&mut self) -> Result<u16, BmpError> {
        self.read_fixed_bytes().map(u16::from_le_bytes)
    }

    fn get_u32_le(&mut self) -> Result<u32, BmpError> {
        self.read_fixed_bytes().map(u32::from_le_bytes)
    }

    fn get_i32_le(&mut self) -> Result<i32, BmpError> {
        self.read_fixed_bytes().map(i32::from_le_bytes)
    }
}

// ── Header parsing ──────────────────────────────────────────────────

/// Parse and validate both headers. No pixel bytes are touched.
pub(crate) fn parse_headers(data: &[u8]) -> Result<(FileHeader, InfoHeader), BmpError> {
    if data.len() < HEADERS_SIZE {
        return Err(BmpError::InvalidFormat(data.len()));
    }

    let mut bytes = Cursor::new(data);

    let file = FileHeader {
        signature: bytes.read_fixed_bytes()?,
        file_size: bytes.get_u32_le()?,
        reserved: bytes.get_u32_le()?,
        data_offset: bytes.get_u32_le()?,
    };
    let info = InfoHeader {
        header_size: bytes.get_u32_le()?,
        width: bytes.get_i32_le()?,
        height: bytes.get_i32_le()?,
        planes: bytes.get_u16_le()?,
        bits_per_pixel: bytes.get_u16_le()?,
        compression: bytes.get_u32_le()?,
        image_size: bytes.get_u32_le()?,
        x_pixels_per_meter: bytes.get_i32_le()?,
        y_pixels_per_meter: bytes.get_i32_le()?,
        colors_used: bytes.get_u32_le()?,
        colors_important: bytes.get_u32_le()?,
    };
    debug_assert_eq!(bytes.pos, HEADERS_SIZE);

    validate_headers(&file, &info, data.len())?;
    validate_pixel_array(&file, &info, data.len())?;

    trace!("Width: {}", info.width);
    trace!("Height: {}", info.height);
    trace!("Top down: {}", info.is_top_down());
    trace!("Data offset: {}", file.data_offset);
    trace!("Image size: {}", info.image_size);

    Ok((file, info))
}

/// The header checks, in the order their errors take precedence.
fn validate_headers(file: &FileHeader, info: &InfoHeader, data_len: usize) -> Result<(), BmpError> {
    if file.signature != SIGNATURE {
        return Err(BmpError::InvalidFileType(file.signature));
    }
    if info.header_size < INFO_HEADER_SIZE as u32 {
        return Err(BmpError::InvalidHeaderSize(info.header_size));
    }
    if usize::try_from(file.file_size).ok() != Some(data_len) {
        return Err(BmpError::CorruptFile {
            declared: file.file_size,
            actual: data_len,
        });
    }
    if info.width <= 0 || info.height == 0 {
        return Err(BmpError::InvalidDimensions {
            width: info.width,
            height: info.height,
        });
    }
    if info.planes != 1 || info.bits_per_pixel != BITS_PER_PIXEL {
        return Err(BmpError::UnsupportedFormat {
            planes: info.planes,
            bits_per_pixel: info.bits_per_pixel,
        });
    }
    if info.compression != 0 {
        return Err(BmpError::UnsupportedCompression(info.compression));
    }

    let width = info.width as u64;
    let height = u64::from(info.abs_height());
    let expected = image_data_size(width, height)
        .ok_or(BmpError::DimensionsTooLarge { width, height })?;
    if u64::from(info.image_size) != expected {
        return Err(BmpError::InvalidImageData(alloc::format!(
            "image size field is {} bytes, {}x{} needs {expected}",
            info.image_size,
            info.width,
            height
        )));
    }
    Ok(())
}

/// The pixel array must sit after the info header and end inside the file.
fn validate_pixel_array(file: &FileHeader, info: &InfoHeader, data_len: usize) -> Result<(), BmpError> {
    let offset = u64::from(file.data_offset);
    let headers_end = FILE_HEADER_SIZE as u64 + u64::from(info.header_size);

    if offset < headers_end {
        return Err(BmpError::InvalidImageData(alloc::format!(
            "pixel data offset {offset} overlaps the {headers_end}-byte headers"
        )));
    }
    let end = offset + u64::from(info.image_size);
    if end > data_len as u64 {
        return Err(BmpError::InvalidImageData(alloc::format!(
            "pixel data ends at byte {end}, file has {data_len}"
        )));
    }
    Ok(())
}

// ── Pixel data ──────────────────────────────────────────────────────

/// Bytes between the interpreted headers and the pixel array.
pub(crate) fn extra_header_bytes<'a>(data: &'a [u8], file: &FileHeader) -> &'a [u8] {
    data.get(HEADERS_SIZE..file.data_offset as usize)
        .unwrap_or_default()
}

/// Bytes after the pixel array, up to the end of the file.
///
/// `file_size` equals the input length once headers validate, so these are
/// exactly the bytes the file size field counts past the pixel array.
pub(crate) fn trailing_bytes<'a>(data: &'a [u8], file: &FileHeader, info: &InfoHeader) -> &'a [u8] {
    let end = u64::from(file.data_offset) + u64::from(info.image_size);
    usize::try_from(end)
        .ok()
        .and_then(|end| data.get(end..))
        .unwrap_or_default()
}

/// Read the pixel array into a grid whose row 0 is the top visual row.
///
/// Headers must already have passed [`parse_headers`].
pub(crate) fn decode_pixels(
    data: &[u8],
    file: &FileHeader,
    info: &InfoHeader,
) -> Result<ImgVec<Pixel>, BmpError> {
    let too_large = BmpError::DimensionsTooLarge {
        width: info.width as u64,
        height: u64::from(info.abs_height()),
    };
    let width = usize::try_from(info.width).map_err(|_| too_large.clone())?;
    let height = usize::try_from(info.abs_height()).map_err(|_| too_large.clone())?;
    let stride = info
        .row_stride()
        .and_then(|s| usize::try_from(s).ok())
        .ok_or_else(|| too_large.clone())?;
    let len = width.checked_mul(height).ok_or(too_large)?;

    let start = file.data_offset as usize;
    let pixel_array = data
        .get(start..start + info.image_size as usize)
        .ok_or_else(|| BmpError::InvalidImageData("pixel data truncated".into()))?;

    let top_down = info.is_top_down();
    let mut pixels = Vec::with_capacity(len);
    for y in 0..height {
        let disk_row = if top_down { y } else { height - 1 - y };
        let row = &pixel_array[disk_row * stride..][..width * BYTES_PER_PIXEL];
        pixels.extend(
            row.chunks_exact(BYTES_PER_PIXEL)
                .map(|bgr| Pixel::new(bgr[2], bgr[1], bgr[0])),
        );
    }

    Ok(ImgVec::new(pixels, width, height))
}
