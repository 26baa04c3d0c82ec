use alloc::vec::Vec;

use imgref::ImgVec;

use crate::bmp::{
    self, DEFAULT_PIXELS_PER_METER, FileHeader, HEADERS_SIZE, INFO_HEADER_SIZE, InfoHeader,
    SIGNATURE,
};
use crate::error::BmpError;
use crate::info::ImageInfo;
use crate::pixel::{BITS_PER_PIXEL, Pixel, image_data_size};

/// A decoded 24-bit BMP: both headers plus a pixel grid.
///
/// Row 0 of the grid is always the topmost visual row. The sign of
/// [`InfoHeader::height`] only decides the row order used when encoding.
/// Every mutation through this type keeps `width`, `height`, `image_size`
/// and `file_size` in the headers in step with the grid.
#[derive(Clone, Debug)]
pub struct Image {
    file_header: FileHeader,
    info_header: InfoHeader,
    /// Extended info header bytes (and any gap) before the pixel array.
    extra_header: Vec<u8>,
    /// Bytes after the pixel array (ICC profile data, padding).
    trailing: Vec<u8>,
    pixels: ImgVec<Pixel>,
}

impl Image {
    /// Build a bottom-up image with a plain 40-byte info header.
    ///
    /// A grid whose stride is wider than its width is repacked so rows are
    /// contiguous. Fails with [`BmpError::InvalidDimensions`] for an empty
    /// grid and [`BmpError::DimensionsTooLarge`] if the encoded file would
    /// not fit the 32-bit size fields.
    pub fn from_pixels(pixels: ImgVec<Pixel>) -> Result<Self, BmpError> {
        let (w, h) = (pixels.width(), pixels.height());
        let too_large = BmpError::DimensionsTooLarge {
            width: w as u64,
            height: h as u64,
        };
        let (Ok(width), Ok(height)) = (i32::try_from(w), i32::try_from(h)) else {
            return Err(too_large);
        };
        if width == 0 || height == 0 {
            return Err(BmpError::InvalidDimensions { width, height });
        }
        let image_size = image_data_size(w as u64, h as u64)
            .and_then(|s| u32::try_from(s).ok())
            .filter(|s| s.checked_add(HEADERS_SIZE as u32).is_some())
            .ok_or(too_large)?;

        let file_header = FileHeader {
            signature: SIGNATURE,
            file_size: HEADERS_SIZE as u32 + image_size,
            reserved: 0,
            data_offset: HEADERS_SIZE as u32,
        };
        let info_header = InfoHeader {
            header_size: INFO_HEADER_SIZE as u32,
            width,
            height,
            planes: 1,
            bits_per_pixel: BITS_PER_PIXEL,
            compression: 0,
            image_size,
            x_pixels_per_meter: DEFAULT_PIXELS_PER_METER,
            y_pixels_per_meter: DEFAULT_PIXELS_PER_METER,
            colors_used: 0,
            colors_important: 0,
        };
        Ok(Self {
            file_header,
            info_header,
            extra_header: Vec::new(),
            trailing: Vec::new(),
            pixels: contiguous(pixels),
        })
    }

    /// A `width` x `height` image filled with one color.
    pub fn filled(width: usize, height: usize, color: Pixel) -> Result<Self, BmpError> {
        if width == 0 || height == 0 {
            return Err(BmpError::InvalidDimensions {
                width: i32::try_from(width).unwrap_or(i32::MAX),
                height: i32::try_from(height).unwrap_or(i32::MAX),
            });
        }
        let len = width
            .checked_mul(height)
            .ok_or(BmpError::DimensionsTooLarge {
                width: width as u64,
                height: height as u64,
            })?;
        Self::from_pixels(ImgVec::new(alloc::vec![color; len], width, height))
    }

    /// Decode a complete BMP file with no resource limits.
    ///
    /// Same as `DecodeRequest::new(data).decode()`.
    pub fn decode(data: &[u8]) -> Result<Self, BmpError> {
        crate::DecodeRequest::new(data).decode()
    }

    /// Encode to a complete BMP file.
    pub fn encode(&self) -> Result<Vec<u8>, BmpError> {
        bmp::encode_image(self)
    }

    pub(crate) fn from_parts(
        file_header: FileHeader,
        info_header: InfoHeader,
        extra_header: Vec<u8>,
        trailing: Vec<u8>,
        pixels: ImgVec<Pixel>,
    ) -> Self {
        Self {
            file_header,
            info_header,
            extra_header,
            trailing,
            pixels,
        }
    }

    pub fn file_header(&self) -> &FileHeader {
        &self.file_header
    }

    pub fn info_header(&self) -> &InfoHeader {
        &self.info_header
    }

    pub(crate) fn extra_header(&self) -> &[u8] {
        &self.extra_header
    }

    pub(crate) fn trailing_bytes(&self) -> &[u8] {
        &self.trailing
    }

    /// Header fields, printable with `{}`.
    pub fn header_info(&self) -> ImageInfo {
        ImageInfo::new(self.file_header, self.info_header)
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.pixels.width()
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.pixels.height()
    }

    /// Whether encoding writes rows top to bottom (negative height).
    #[inline]
    pub fn is_top_down(&self) -> bool {
        self.info_header.is_top_down()
    }

    /// Choose the row order used on encode. Pixels are not touched.
    pub fn set_top_down(&mut self, top_down: bool) {
        if top_down != self.is_top_down() {
            self.info_header.height = -self.info_header.height;
        }
    }

    pub fn pixels(&self) -> &ImgVec<Pixel> {
        &self.pixels
    }

    /// Pixel at column `x`, row `y` (row 0 at the top).
    pub fn pixel(&self, x: usize, y: usize) -> Option<Pixel> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        Some(self.pixels.buf()[y * self.width() + x])
    }

    /// Row-major pixels, `width()` per row. Dimensions cannot change
    /// through this slice.
    pub fn pixels_mut(&mut self) -> &mut [Pixel] {
        self.pixels.buf_mut()
    }

    pub fn into_pixels(self) -> ImgVec<Pixel> {
        self.pixels
    }

    /// Swap in a grid of possibly different dimensions and resync the
    /// headers. The storage order (height sign) is kept.
    pub(crate) fn replace_pixels(&mut self, pixels: ImgVec<Pixel>) {
        self.pixels = pixels;
        self.sync_header();
    }

    fn sync_header(&mut self) {
        let top_down = self.is_top_down();
        let (w, h) = (self.width(), self.height());

        // Out-of-range sizes saturate here; encode re-derives them with
        // checked arithmetic and reports DimensionsTooLarge.
        let rows = i32::try_from(h).unwrap_or(i32::MAX);
        self.info_header.width = i32::try_from(w).unwrap_or(i32::MAX);
        self.info_header.height = if top_down { -rows } else { rows };
        self.info_header.image_size = image_data_size(w as u64, h as u64)
            .and_then(|s| u32::try_from(s).ok())
            .unwrap_or(u32::MAX);
        let trailing = u32::try_from(self.trailing.len()).unwrap_or(u32::MAX);
        self.file_header.file_size = self
            .file_header
            .data_offset
            .saturating_add(self.info_header.image_size)
            .saturating_add(trailing);
    }
}

/// Drop the row padding of a strided grid.
fn contiguous(pixels: ImgVec<Pixel>) -> ImgVec<Pixel> {
    let (width, height, stride) = (pixels.width(), pixels.height(), pixels.stride());
    if stride == width {
        return pixels;
    }
    let mut packed = Vec::with_capacity(width * height);
    for y in 0..height {
        packed.extend_from_slice(&pixels.buf()[y * stride..][..width]);
    }
    ImgVec::new(packed, width, height)
}

impl PartialEq for Image {
    fn eq(&self, other: &Self) -> bool {
        self.file_header == other.file_header
            && self.info_header == other.info_header
            && self.extra_header == other.extra_header
            && self.trailing == other.trailing
            && self.width() == other.width()
            && self.height() == other.height()
            && self.pixels.buf()[..] == other.pixels.buf()[..]
    }
}

impl Eq for Image {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_pixels_builds_consistent_headers() {
        let image = Image::filled(5, 3, Pixel::new(1, 2, 3)).unwrap();
        let info = image.info_header();
        assert_eq!((info.width, info.height), (5, 3));
        assert_eq!(info.image_size, 16 * 3);
        assert_eq!(image.file_header().file_size, 54 + 48);
        assert!(!image.is_top_down());
    }

    #[test]
    fn empty_fill_is_rejected() {
        let err = Image::filled(0, 4, Pixel::new(0, 0, 0)).unwrap_err();
        assert_eq!(err, BmpError::InvalidDimensions { width: 0, height: 4 });
    }

    #[test]
    fn replace_pixels_keeps_orientation() {
        let mut image = Image::filled(4, 4, Pixel::new(0, 0, 0)).unwrap();
        image.set_top_down(true);
        image.replace_pixels(ImgVec::new(alloc::vec![Pixel::new(9, 9, 9); 6], 3, 2));
        assert_eq!(image.info_header().width, 3);
        assert_eq!(image.info_header().height, -2);
        assert_eq!(image.info_header().image_size, 24);
        assert_eq!(image.file_header().file_size, 54 + 24);
    }

    #[test]
    fn strided_grid_is_repacked() {
        let (red, pad) = (Pixel::new(255, 0, 0), Pixel::new(0, 0, 0));
        let buf = alloc::vec![red, red, pad, red, red, pad];
        let image = Image::from_pixels(ImgVec::new_stride(buf, 2, 2, 3)).unwrap();

        assert_eq!(image.pixels().stride(), 2);
        assert_eq!(image.pixel(0, 1), Some(red));
        assert_eq!(image.pixels().buf(), &alloc::vec![red; 4]);

        let decoded = Image::decode(&image.encode().unwrap()).unwrap();
        assert_eq!(decoded, image);
    }

    #[test]
    fn pixel_lookup_is_bounds_checked() {
        let image = Image::filled(2, 2, Pixel::new(7, 8, 9)).unwrap();
        assert_eq!(image.pixel(1, 1), Some(Pixel::new(7, 8, 9)));
        assert_eq!(image.pixel(2, 0), None);
        assert_eq!(image.pixel(0, 2), None);
    }
}
