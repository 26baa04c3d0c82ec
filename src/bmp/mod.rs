//! Uncompressed 24-bit BMP header codec.
//!
//! A BMP file is a 14-byte file header, an info header of at least 40 bytes,
//! an optional gap, and a pixel array of rows padded to 4 bytes. Only the
//! 40-byte `BITMAPINFOHEADER` fields are interpreted; any extended info
//! header bytes (V4/V5) are carried through unchanged.

mod decode;
mod encode;

pub(crate) use decode::{decode_pixels, extra_header_bytes, parse_headers, trailing_bytes};
pub(crate) use encode::encode_image;

use crate::pixel::padded_row_stride;

/// Magic bytes at offset 0.
pub const SIGNATURE: [u8; 2] = *b"BM";
/// Size of the file header.
pub const FILE_HEADER_SIZE: usize = 14;
/// Size of `BITMAPINFOHEADER`, the smallest accepted info header.
pub const INFO_HEADER_SIZE: usize = 40;
/// File header plus the 40 interpreted info header bytes.
pub const HEADERS_SIZE: usize = FILE_HEADER_SIZE + INFO_HEADER_SIZE;
/// 72 DPI, written for images created from raw pixels.
pub const DEFAULT_PIXELS_PER_METER: i32 = 2835;

/// The 14-byte BMP file header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FileHeader {
    /// Always `b"BM"` for a decoded image.
    pub signature: [u8; 2],
    /// Total file size in bytes.
    pub file_size: u32,
    /// Reserved; not validated, written back as read.
    pub reserved: u32,
    /// Offset of the pixel array from the start of the file.
    pub data_offset: u32,
}

/// The `BITMAPINFOHEADER` fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InfoHeader {
    pub header_size: u32,
    pub width: i32,
    /// Negative for top-down row storage, positive for bottom-up.
    pub height: i32,
    pub planes: u16,
    pub bits_per_pixel: u16,
    pub compression: u32,
    /// Size of the padded pixel array in bytes.
    pub image_size: u32,
    pub x_pixels_per_meter: i32,
    pub y_pixels_per_meter: i32,
    pub colors_used: u32,
    pub colors_important: u32,
}

impl InfoHeader {
    /// Rows are stored first-to-last from the top of the image.
    #[inline]
    pub fn is_top_down(&self) -> bool {
        self.height < 0
    }

    /// Number of pixel rows, independent of storage order.
    #[inline]
    pub fn abs_height(&self) -> u32 {
        self.height.unsigned_abs()
    }

    /// Padded bytes per row for the current width, `None` for a
    /// non-positive width.
    pub fn row_stride(&self) -> Option<u64> {
        u64::try_from(self.width).ok().and_then(padded_row_stride)
    }
}
