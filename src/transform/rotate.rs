//! Quarter-turn rotations.
//!
//! A quarter turn swaps the grid dimensions, so the result is always
//! written into a freshly allocated buffer.
//!
//! ```text
//! [1,2,3]  right  [7,4,1]        [1,2,3]  left  [3,6,9]
//! [4,5,6]  ────►  [8,5,2]        [4,5,6]  ───►  [2,5,8]
//! [7,8,9]         [9,6,3]        [7,8,9]        [1,4,7]
//! ```

use alloc::vec::Vec;

use imgref::ImgVec;

use super::RotateDirection;
use crate::image::Image;

pub(crate) fn rotate(image: &mut Image, direction: RotateDirection) {
    let (width, height) = (image.width(), image.height());
    let rotated = rotate_quarter(image.pixels().buf(), width, height, direction);
    // the new grid is `height` pixels wide and `width` rows tall
    image.replace_pixels(ImgVec::new(rotated, height, width));
}

/// Rotate a `width` x `height` row-major grid (row 0 at the top) by a
/// quarter turn. The output is `height` wide and `width` tall; its row `i`,
/// column `j` is:
/// - right (clockwise): `in[height - 1 - j][i]`
/// - left (counter-clockwise): `in[j][width - 1 - i]`
pub(crate) fn rotate_quarter<T: Copy>(
    pixels: &[T],
    width: usize,
    height: usize,
    direction: RotateDirection,
) -> Vec<T> {
    let mut out = Vec::with_capacity(width * height);
    for i in 0..width {
        match direction {
            RotateDirection::Right => {
                out.extend((0..height).map(|j| pixels[(height - 1 - j) * width + i]));
            }
            RotateDirection::Left => {
                out.extend((0..height).map(|j| pixels[j * width + (width - 1 - i)]));
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const GRID: [u8; 6] = [
        1, 2, 3, //
        4, 5, 6,
    ];

    #[test]
    fn right_is_clockwise() {
        let out = rotate_quarter(&GRID, 3, 2, RotateDirection::Right);
        assert_eq!(out, [4, 1, 5, 2, 6, 3]);
    }

    #[test]
    fn left_is_counter_clockwise() {
        let out = rotate_quarter(&GRID, 3, 2, RotateDirection::Left);
        assert_eq!(out, [3, 6, 2, 5, 1, 4]);
    }

    #[test]
    fn left_undoes_right() {
        let right = rotate_quarter(&GRID, 3, 2, RotateDirection::Right);
        let back = rotate_quarter(&right, 2, 3, RotateDirection::Left);
        assert_eq!(back, GRID);
    }
}
