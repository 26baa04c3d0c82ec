//! Box blur.
//!
//! Every output pixel is the truncated per-channel mean of the input pixels
//! in the `(2r + 1)` square around it, clipped to the image. Window sums come
//! from a summed-area table built once from the untouched input, so the
//! image itself can then be overwritten row by row.

use alloc::vec;
use alloc::vec::Vec;

use super::parallel::for_each_row_band;
use crate::image::Image;
use crate::pixel::Pixel;

pub(crate) fn box_blur(image: &mut Image, radius: usize) {
    if radius == 0 {
        return;
    }
    let (width, height) = (image.width(), image.height());
    let table = SummedArea::new(image.pixels().buf(), width, height);

    for_each_row_band(image.pixels_mut(), width, 1, |first_row, band| {
        for (i, row) in band.chunks_exact_mut(width).enumerate() {
            table.blur_row(first_row + i, row, radius);
        }
    });
}

/// Inclusive prefix sums: entry `(x, y)` of the `(width + 1) x (height + 1)`
/// table holds the channel sums of every pixel above and left of `(x, y)`.
struct SummedArea {
    sums: Vec<[u64; 3]>,
    width: usize,
    height: usize,
}

impl SummedArea {
    fn new(pixels: &[Pixel], width: usize, height: usize) -> Self {
        let stride = width + 1;
        let mut sums = vec![[0u64; 3]; stride * (height + 1)];

        for (y, row) in pixels.chunks_exact(width).enumerate() {
            let mut running = [0u64; 3];
            for (x, px) in row.iter().enumerate() {
                running[0] += u64::from(px.r);
                running[1] += u64::from(px.g);
                running[2] += u64::from(px.b);

                let above = sums[y * stride + x + 1];
                sums[(y + 1) * stride + x + 1] = [
                    above[0] + running[0],
                    above[1] + running[1],
                    above[2] + running[2],
                ];
            }
        }
        Self { sums, width, height }
    }

    #[inline]
    fn at(&self, x: usize, y: usize) -> [u64; 3] {
        self.sums[y * (self.width + 1) + x]
    }

    /// Write the blurred values of source row `y` into `out`.
    fn blur_row(&self, y: usize, out: &mut [Pixel], radius: usize) {
        let y0 = y.saturating_sub(radius);
        let y1 = y.saturating_add(radius).saturating_add(1).min(self.height);

        for (x, px) in out.iter_mut().enumerate() {
            let x0 = x.saturating_sub(radius);
            let x1 = x.saturating_add(radius).saturating_add(1).min(self.width);
            let count = ((x1 - x0) * (y1 - y0)) as u64;

            let (a, b, c, d) = (
                self.at(x1, y1),
                self.at(x0, y1),
                self.at(x1, y0),
                self.at(x0, y0),
            );
            let mean = |ch: usize| ((a[ch] + d[ch] - b[ch] - c[ch]) / count) as u8;
            *px = Pixel::new(mean(0), mean(1), mean(2));
        }
    }
}
