//! Replace square tiles by their mean color.

use super::parallel::for_each_row_band;
use crate::image::Image;
use crate::pixel::Pixel;

pub(crate) fn pixelate(image: &mut Image, block_size: usize) {
    if block_size <= 1 {
        return;
    }
    let width = image.width();
    for_each_row_band(image.pixels_mut(), width, block_size, |_, band| {
        pixelate_band(band, width, block_size);
    });
}

/// Pixelate `pixels`, starting a new tile row every `block_size` rows.
/// Tiles on the right and bottom edges are clipped.
pub(crate) fn pixelate_band(pixels: &mut [Pixel], width: usize, block_size: usize) {
    for tile_rows in pixels.chunks_mut(block_size.saturating_mul(width)) {
        for x0 in (0..width).step_by(block_size) {
            let x1 = x0.saturating_add(block_size).min(width);

            let mut sum = [0u64; 3];
            let mut count = 0u64;
            for row in tile_rows.chunks_exact(width) {
                for px in &row[x0..x1] {
                    sum[0] += u64::from(px.r);
                    sum[1] += u64::from(px.g);
                    sum[2] += u64::from(px.b);
                    count += 1;
                }
            }

            let mean = Pixel::new(
                (sum[0] / count) as u8,
                (sum[1] / count) as u8,
                (sum[2] / count) as u8,
            );
            for row in tile_rows.chunks_exact_mut(width) {
                row[x0..x1].fill(mean);
            }
        }
    }
}
