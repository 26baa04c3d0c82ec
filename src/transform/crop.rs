//! Cut a rectangular region out of an image.
//!
//! ```text
//! ┌──────────────────────┐
//! │ (x,y)                │
//! │   ┌──────────┐       │
//! │   │ CROPPED  │ height│
//! │   └──────────┘       │
//! │      width           │
//! └──────────────────────┘
//! ```
//!
//! The offset must land inside the current image; the extent, if given,
//! must fit between the offset and the far edges.

use alloc::vec::Vec;

use imgref::ImgVec;

use super::CropRequest;
use crate::error::BmpError;
use crate::image::Image;

pub(crate) fn crop(image: &mut Image, request: CropRequest) -> Result<(), BmpError> {
    let (width, height) = (image.width(), image.height());
    let (crop_width, crop_height) = crop_extent(request, width, height)?;

    if (request.x, request.y, crop_width, crop_height) == (0, 0, width, height) {
        return Ok(());
    }

    let mut out = Vec::with_capacity(crop_width * crop_height);
    for row in image
        .pixels()
        .buf()
        .chunks_exact(width)
        .skip(request.y)
        .take(crop_height)
    {
        out.extend_from_slice(&row[request.x..request.x + crop_width]);
    }
    image.replace_pixels(ImgVec::new(out, crop_width, crop_height));
    Ok(())
}

/// Resolve the crop size against a `width` x `height` image.
fn crop_extent(request: CropRequest, width: usize, height: usize) -> Result<(usize, usize), BmpError> {
    let CropRequest { x, y, .. } = request;
    if x >= width || y >= height {
        return Err(BmpError::CropOutOfBounds { x, y, width, height });
    }

    let crop_width = request.width.filter(|&w| w > 0).unwrap_or(width - x);
    let crop_height = request.height.filter(|&h| h > 0).unwrap_or(height - y);

    let fits = |offset: usize, extent: usize, bound: usize| {
        offset.checked_add(extent).is_some_and(|end| end <= bound)
    };
    if !fits(x, crop_width, width) || !fits(y, crop_height, height) {
        return Err(BmpError::CropExceedsBounds {
            x,
            y,
            crop_width,
            crop_height,
            width,
            height,
        });
    }
    Ok((crop_width, crop_height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_extent_reaches_far_edge() {
        assert_eq!(crop_extent(CropRequest::at(3, 1), 10, 4), Ok((7, 3)));
        assert_eq!(crop_extent(CropRequest::new(3, 1, 0, 0), 10, 4), Ok((7, 3)));
    }

    #[test]
    fn offset_on_the_edge_is_out_of_bounds() {
        assert!(matches!(
            crop_extent(CropRequest::at(10, 0), 10, 10),
            Err(BmpError::CropOutOfBounds { .. })
        ));
        assert!(matches!(
            crop_extent(CropRequest::at(0, 10), 10, 10),
            Err(BmpError::CropOutOfBounds { .. })
        ));
    }

    #[test]
    fn extent_past_the_edge_is_rejected() {
        assert!(matches!(
            crop_extent(CropRequest::new(8, 0, 4, 1), 10, 10),
            Err(BmpError::CropExceedsBounds { .. })
        ));
        assert!(matches!(
            crop_extent(CropRequest::new(0, 0, 1, usize::MAX), 10, 10),
            Err(BmpError::CropExceedsBounds { .. })
        ));
        assert_eq!(crop_extent(CropRequest::new(8, 9, 2, 1), 10, 10), Ok((2, 1)));
    }
}
