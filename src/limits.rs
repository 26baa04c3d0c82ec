use crate::error::BmpError;
use crate::pixel::BYTES_PER_PIXEL;

/// Resource limits checked after the headers validate and before the pixel
/// grid is allocated.
///
/// All fields default to `None` (no limit).
#[derive(Clone, Debug, Default)]
pub struct Limits {
    pub max_width: Option<u64>,
    pub max_height: Option<u64>,
    /// Maximum pixel count (width * height).
    pub max_pixels: Option<u64>,
    /// Maximum bytes for the decoded pixel grid (3 bytes per pixel).
    pub max_memory_bytes: Option<u64>,
}

impl Limits {
    /// Limits that only cap the decoded grid size.
    pub fn with_max_memory(bytes: u64) -> Self {
        Self {
            max_memory_bytes: Some(bytes),
            ..Self::default()
        }
    }

    pub(crate) fn check(&self, width: u32, height: u32) -> Result<(), BmpError> {
        let (w, h) = (u64::from(width), u64::from(height));
        let pixels = w * h;

        exceeds("width", w, self.max_width)?;
        exceeds("height", h, self.max_height)?;
        exceeds("pixel count", pixels, self.max_pixels)?;
        exceeds(
            "pixel grid bytes",
            pixels.saturating_mul(BYTES_PER_PIXEL as u64),
            self.max_memory_bytes,
        )
    }
}

fn exceeds(what: &str, value: u64, limit: Option<u64>) -> Result<(), BmpError> {
    match limit {
        Some(max) if value > max => Err(BmpError::LimitExceeded(alloc::format!(
            "{what} {value} exceeds limit {max}"
        ))),
        _ => Ok(()),
    }
}
