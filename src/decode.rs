use log::trace;

use crate::bmp;
use crate::error::BmpError;
use crate::image::Image;
use crate::limits::Limits;

/// Decode request for a complete BMP file held in memory.
///
/// Decoding is all-or-nothing: every header check runs before any pixel
/// byte is read, and no [`Image`] is produced on failure.
#[derive(Clone, Debug)]
pub struct DecodeRequest<'a> {
    data: &'a [u8],
    limits: Option<&'a Limits>,
}

impl<'a> DecodeRequest<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, limits: None }
    }

    /// Reject images whose dimensions or grid size exceed `limits`.
    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    pub fn decode(self) -> Result<Image, BmpError> {
        let (file_header, info_header) = bmp::parse_headers(self.data)?;
        if let Some(limits) = self.limits {
            limits.check(info_header.width.unsigned_abs(), info_header.abs_height())?;
        }

        let pixels = bmp::decode_pixels(self.data, &file_header, &info_header)?;
        let extra = bmp::extra_header_bytes(self.data, &file_header).to_vec();
        let trailing = bmp::trailing_bytes(self.data, &file_header, &info_header).to_vec();
        trace!(
            "Decoded {}x{} BMP, {} trailing bytes",
            pixels.width(),
            pixels.height(),
            trailing.len()
        );

        Ok(Image::from_parts(file_header, info_header, extra, trailing, pixels))
    }
}

/// Decode a complete BMP file with no resource limits.
pub fn decode(data: &[u8]) -> Result<Image, BmpError> {
    DecodeRequest::new(data).decode()
}

/// Encode an image to a complete BMP file.
pub fn encode(image: &Image) -> Result<alloc::vec::Vec<u8>, BmpError> {
    image.encode()
}
