//! # bmpkit
//!
//! Strict uncompressed 24-bit BMP decoder and encoder, plus an in-place
//! transform pipeline: mirror, quarter and half turns, crop, channel
//! isolation, grayscale, negative, pixelate and box blur.
//!
//! ## Accepted files
//!
//! - `BM` signature, info header of at least 40 bytes (extended V4/V5
//!   header bytes are kept and written back unchanged)
//! - one plane, 24 bits per pixel, `BI_RGB` (no compression)
//! - bottom-up (positive height) or top-down (negative height) row order
//!
//! Anything else is rejected with a [`BmpError`] before any pixel byte is
//! read. Header checks always run in the same order, so a file with several
//! problems reports the same one every time.
//!
//! ## Orientation
//!
//! Row 0 of [`Image::pixels`] is always the top row as displayed. The sign
//! of the header height only picks the row order written by
//! [`Image::encode`], and no transform changes it.
//!
//! ## Non-Goals
//!
//! - Palettized, 16-bit, 32-bit or compressed BMPs
//! - Other container formats
//! - Color management
//!
//! ## Usage
//!
//! ```no_run
//! use bmpkit::{CropRequest, DecodeRequest, FilterKind, ImageInfo, Limits, Pipeline, Rotation};
//!
//! let data: &[u8] = &[]; // your BMP bytes
//!
//! // Inspect headers without decoding pixels
//! let info = ImageInfo::from_bytes(data)?;
//! println!("{info}");
//!
//! let limits = Limits::with_max_memory(64 * 1024 * 1024);
//! let mut image = DecodeRequest::new(data).with_limits(&limits).decode()?;
//!
//! Pipeline::new()
//!     .rotation("90".parse::<Rotation>()?)
//!     .crop(CropRequest::new(10, 10, 64, 64))
//!     .filter(FilterKind::Blur { radius: 2 })
//!     .apply(&mut image)?;
//!
//! let encoded = image.encode()?;
//! # let _ = encoded;
//! # Ok::<(), bmpkit::BmpError>(())
//! ```

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod decode;
mod error;
mod image;
mod info;
mod limits;
mod pixel;

pub mod bmp;
pub mod transform;

// Re-exports
pub use bmp::{FileHeader, InfoHeader};
pub use decode::{DecodeRequest, decode, encode};
pub use error::BmpError;
pub use image::Image;
pub use info::ImageInfo;
pub use limits::Limits;
pub use pixel::{BYTES_PER_PIXEL, Channel, Pixel, image_data_size, padded_row_stride};
pub use transform::{
    CropRequest, DEFAULT_BLUR_RADIUS, DEFAULT_PIXELATE_BLOCK, FilterKind, MirrorDirection,
    Pipeline, RotateDirection, Rotation, Transform, apply_all,
};
