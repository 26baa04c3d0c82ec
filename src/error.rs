use alloc::string::String;

/// Errors from BMP decoding, encoding and transforms.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum BmpError {
    #[error("invalid BMP: need at least 54 header bytes, got {0}")]
    InvalidFormat(usize),

    #[error("not a BMP file: signature is {0:?}, expected \"BM\"")]
    InvalidFileType([u8; 2]),

    #[error("invalid info header size {0}, expected at least 40")]
    InvalidHeaderSize(u32),

    #[error("corrupt BMP: header says {declared} bytes, file has {actual}")]
    CorruptFile { declared: u32, actual: usize },

    #[error("invalid dimensions {width}x{height}")]
    InvalidDimensions { width: i32, height: i32 },

    #[error("unsupported BMP format: {planes} plane(s), {bits_per_pixel} bpp (only 1 plane, 24 bpp)")]
    UnsupportedFormat { planes: u16, bits_per_pixel: u16 },

    #[error("unsupported compression method {0}, only uncompressed is supported")]
    UnsupportedCompression(u32),

    #[error("invalid image data: {0}")]
    InvalidImageData(String),

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u64, height: u64 },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("crop offset ({x}, {y}) is outside the {width}x{height} image")]
    CropOutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    #[error("crop region {crop_width}x{crop_height} at ({x}, {y}) exceeds the {width}x{height} image")]
    CropExceedsBounds {
        x: usize,
        y: usize,
        crop_width: usize,
        crop_height: usize,
        width: usize,
        height: usize,
    },

    #[error("invalid {option} option: {value:?}")]
    InvalidTransformOption { option: &'static str, value: String },
}
