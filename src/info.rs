use core::fmt;

use crate::bmp::{self, FileHeader, InfoHeader};
use crate::error::BmpError;

/// Header fields of a BMP file, without its pixels.
///
/// `Display` renders every field of both headers, one per line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageInfo {
    pub file_header: FileHeader,
    pub info_header: InfoHeader,
}

impl ImageInfo {
    pub(crate) fn new(file_header: FileHeader, info_header: InfoHeader) -> Self {
        Self {
            file_header,
            info_header,
        }
    }

    /// Parse and fully validate the headers of a BMP file without reading
    /// its pixel data.
    ///
    /// Accepts exactly the files `decode` accepts (before resource limits).
    pub fn from_bytes(data: &[u8]) -> Result<Self, BmpError> {
        let (file_header, info_header) = bmp::parse_headers(data)?;
        Ok(Self::new(file_header, info_header))
    }

    pub fn width(&self) -> u32 {
        self.info_header.width.unsigned_abs()
    }

    pub fn height(&self) -> u32 {
        self.info_header.abs_height()
    }

    pub fn is_top_down(&self) -> bool {
        self.info_header.is_top_down()
    }

    /// Padded bytes per encoded row.
    pub fn row_stride(&self) -> u64 {
        self.info_header.row_stride().unwrap_or(0)
    }
}

impl fmt::Display for ImageInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = &self.file_header;
        let info = &self.info_header;
        let [s0, s1] = file.signature;

        writeln!(f, "BMP Header:")?;
        writeln!(f, "- Signature: {}{}", char::from(s0), char::from(s1))?;
        writeln!(f, "- FileSize: {} bytes", file.file_size)?;
        writeln!(f, "- Reserved: {}", file.reserved)?;
        writeln!(f, "- DataOffset: {} bytes", file.data_offset)?;
        writeln!(f, "DIB Header:")?;
        writeln!(f, "- Size: {} bytes", info.header_size)?;
        writeln!(f, "- Width: {} pixels", info.width)?;
        writeln!(
            f,
            "- Height: {} pixels ({})",
            info.height,
            if info.is_top_down() { "top-down" } else { "bottom-up" }
        )?;
        writeln!(f, "- Planes: {}", info.planes)?;
        writeln!(f, "- BitsPerPixel: {}", info.bits_per_pixel)?;
        writeln!(f, "- Compression: {}", info.compression)?;
        writeln!(f, "- ImageSize: {} bytes", info.image_size)?;
        writeln!(f, "- XPixelsPerMeter: {}", info.x_pixels_per_meter)?;
        writeln!(f, "- YPixelsPerMeter: {}", info.y_pixels_per_meter)?;
        writeln!(f, "- ColorsUsed: {}", info.colors_used)?;
        writeln!(f, "- ColorsImportant: {}", info.colors_important)
    }
}
