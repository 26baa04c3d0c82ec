//! BMP encoder: uncompressed 24-bit, row order taken from the height sign.

use alloc::vec::Vec;

use super::HEADERS_SIZE;
use crate::error::BmpError;
use crate::image::Image;
use crate::pixel::{BYTES_PER_PIXEL, image_data_size, padded_row_stride};

/// Serialize `image` using its current dimensions.
///
/// Size fields are derived from the pixel grid rather than trusted from the
/// stored headers, so the output is always self-consistent.
pub(crate) fn encode_image(image: &Image) -> Result<Vec<u8>, BmpError> {
    let pixels = image.pixels();
    let (w, h) = (pixels.width(), pixels.height());
    let too_large = || BmpError::DimensionsTooLarge {
        width: w as u64,
        height: h as u64,
    };

    let width = i32::try_from(w).map_err(|_| too_large())?;
    let rows = i32::try_from(h).map_err(|_| too_large())?;
    let row_stride = padded_row_stride(w as u64)
        .and_then(|s| usize::try_from(s).ok())
        .ok_or_else(too_large)?;
    let pixel_data_size = image_data_size(w as u64, h as u64)
        .and_then(|s| u32::try_from(s).ok())
        .ok_or_else(too_large)?;

    let extra = image.extra_header();
    let data_offset = u32::try_from(HEADERS_SIZE + extra.len()).map_err(|_| too_large())?;
    let trailing = image.trailing_bytes();
    let file_size = u32::try_from(trailing.len())
        .ok()
        .and_then(|t| data_offset.checked_add(pixel_data_size)?.checked_add(t))
        .ok_or_else(too_large)?;

    let file_header = image.file_header();
    let info = image.info_header();
    let top_down = info.is_top_down();

    let mut out = Vec::with_capacity(file_size as usize);

    // File header (14 bytes)
    out.extend_from_slice(&file_header.signature);
    out.extend_from_slice(&file_size.to_le_bytes());
    out.extend_from_slice(&file_header.reserved.to_le_bytes());
    out.extend_from_slice(&data_offset.to_le_bytes());

    // BITMAPINFOHEADER (40 bytes)
    out.extend_from_slice(&info.header_size.to_le_bytes());
    out.extend_from_slice(&width.to_le_bytes());
    out.extend_from_slice(&(if top_down { -rows } else { rows }).to_le_bytes());
    out.extend_from_slice(&info.planes.to_le_bytes());
    out.extend_from_slice(&info.bits_per_pixel.to_le_bytes());
    out.extend_from_slice(&info.compression.to_le_bytes());
    out.extend_from_slice(&pixel_data_size.to_le_bytes());
    out.extend_from_slice(&info.x_pixels_per_meter.to_le_bytes());
    out.extend_from_slice(&info.y_pixels_per_meter.to_le_bytes());
    out.extend_from_slice(&info.colors_used.to_le_bytes());
    out.extend_from_slice(&info.colors_important.to_le_bytes());

    out.extend_from_slice(extra);

    let pad_bytes = row_stride - w * BYTES_PER_PIXEL;
    let buf = pixels.buf();
    for disk_row in 0..h {
        let y = if top_down { disk_row } else { h - 1 - disk_row };
        for px in &buf[y * w..(y + 1) * w] {
            out.extend_from_slice(&[px.b, px.g, px.r]);
        }
        out.extend(core::iter::repeat_n(0u8, pad_bytes));
    }
    out.extend_from_slice(trailing);

    debug_assert_eq!(out.len(), file_size as usize);
    Ok(out)
}
