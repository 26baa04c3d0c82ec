/// A single 24-bit pixel. Stored as R,G,B in memory; BMP keeps B,G,R on disk.
pub type Pixel = rgb::RGB8;

/// Bytes per encoded pixel. 24 bpp is the only supported depth.
pub const BYTES_PER_PIXEL: usize = 3;

/// Bits per pixel written to and required from the info header.
pub const BITS_PER_PIXEL: u16 = 24;

/// One of the three color channels of a [`Pixel`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    /// Keep this channel and zero the other two.
    #[inline]
    pub(crate) fn isolate(self, px: Pixel) -> Pixel {
        match self {
            Self::Red => Pixel::new(px.r, 0, 0),
            Self::Green => Pixel::new(0, px.g, 0),
            Self::Blue => Pixel::new(0, 0, px.b),
        }
    }
}

/// Bytes per encoded row: `width * 3` rounded up to a multiple of 4.
///
/// Returns `None` if the computation overflows `u64`.
#[inline]
pub fn padded_row_stride(width: u64) -> Option<u64> {
    width
        .checked_mul(BYTES_PER_PIXEL as u64)
        .and_then(|r| r.checked_add(3))
        .map(|r| r & !3)
}

/// Size in bytes of the padded pixel array for a `width` x `rows` image.
#[inline]
pub fn image_data_size(width: u64, rows: u64) -> Option<u64> {
    padded_row_stride(width).and_then(|s| s.checked_mul(rows))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stride_rounds_up_to_four() {
        let expected = [(1, 4), (2, 8), (3, 12), (4, 12), (5, 16), (6, 20), (7, 24), (8, 24)];
        for (width, stride) in expected {
            assert_eq!(padded_row_stride(width), Some(stride), "width {width}");
        }
    }

    #[test]
    fn stride_overflow_is_reported() {
        assert_eq!(padded_row_stride(u64::MAX / 2), None);
        assert_eq!(image_data_size(u64::from(u32::MAX), u64::MAX), None);
    }

    #[test]
    fn isolate_zeroes_other_channels() {
        let px = Pixel::new(10, 20, 30);
        assert_eq!(Channel::Red.isolate(px), Pixel::new(10, 0, 0));
        assert_eq!(Channel::Green.isolate(px), Pixel::new(0, 20, 0));
        assert_eq!(Channel::Blue.isolate(px), Pixel::new(0, 0, 30));
    }
}
