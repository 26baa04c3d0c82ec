//! Flip an image across its vertical or horizontal axis.
//!
//! ```text
//!  Horizontal         Vertical
//!  ┌─────┐ ┌─────┐    ┌─────┐ ┌─────┐
//!  │a b c│ │c b a│    │a b c│ │d e f│
//!  │d e f│ │f e d│    │d e f│ │a b c│
//!  └─────┘ └─────┘    └─────┘ └─────┘
//! ```
//!
//! Both directions move pixels. A vertical mirror never touches the sign of
//! the height field, so the on-disk row order chosen at decode time is kept.

use super::MirrorDirection;
use crate::image::Image;

pub(crate) fn mirror(image: &mut Image, direction: MirrorDirection) {
    let (width, height) = (image.width(), image.height());
    let pixels = image.pixels_mut();
    match direction {
        MirrorDirection::Horizontal => mirror_horizontal(pixels, width),
        MirrorDirection::Vertical => mirror_vertical(pixels, width, height),
    }
}

/// Swap `(y, x)` with `(y, width - 1 - x)` on every row.
pub(crate) fn mirror_horizontal<T>(pixels: &mut [T], width: usize) {
    for row in pixels.chunks_exact_mut(width) {
        row.reverse();
    }
}

/// Swap row `y` with row `height - 1 - y`.
pub(crate) fn mirror_vertical<T>(pixels: &mut [T], width: usize, height: usize) {
    // the middle row of an odd height stays in `bottom` and is never visited
    let (top, bottom) = pixels.split_at_mut(width * (height / 2));

    for (top_row, bottom_row) in top
        .chunks_exact_mut(width)
        .zip(bottom.rchunks_exact_mut(width))
    {
        top_row.swap_with_slice(bottom_row);
    }
}
