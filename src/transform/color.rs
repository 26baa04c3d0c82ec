//! Per-pixel color filters. Each pixel depends only on itself, so these
//! run in place in a single pass.

use rgb::ComponentMap;

use crate::image::Image;
use crate::pixel::{Channel, Pixel};

/// BT.709 luma weights scaled by 10 000.
const LUMA_R: u32 = 2126;
const LUMA_G: u32 = 7152;
const LUMA_B: u32 = 722;
const LUMA_SCALE: u32 = 10_000;

pub(crate) fn isolate_channel(image: &mut Image, channel: Channel) {
    for px in image.pixels_mut() {
        *px = channel.isolate(*px);
    }
}

pub(crate) fn grayscale(image: &mut Image) {
    for px in image.pixels_mut() {
        let y = luma(*px);
        *px = Pixel::new(y, y, y);
    }
}

pub(crate) fn negative(image: &mut Image) {
    for px in image.pixels_mut() {
        *px = px.map(|c| 255 - c);
    }
}

/// `round(0.2126 R + 0.7152 G + 0.0722 B)`, halves rounded up.
#[inline]
pub(crate) fn luma(px: Pixel) -> u8 {
    let weighted = LUMA_R * u32::from(px.r) + LUMA_G * u32::from(px.g) + LUMA_B * u32::from(px.b);
    // weights sum to LUMA_SCALE, so the quotient is at most 255
    ((weighted + LUMA_SCALE / 2) / LUMA_SCALE) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn luma_matches_bt709() {
        assert_eq!(luma(Pixel::new(0, 0, 0)), 0);
        assert_eq!(luma(Pixel::new(255, 255, 255)), 255);
        // 54.213
        assert_eq!(luma(Pixel::new(255, 0, 0)), 54);
        // 182.376
        assert_eq!(luma(Pixel::new(0, 255, 0)), 182);
        // 18.411
        assert_eq!(luma(Pixel::new(0, 0, 255)), 18);
        // 117.65 rounds up
        assert_eq!(luma(Pixel::new(200, 100, 50)), 118);
    }

    #[test]
    fn luma_of_gray_is_identity() {
        for v in 0..=255u8 {
            assert_eq!(luma(Pixel::new(v, v, v)), v);
        }
    }
}
