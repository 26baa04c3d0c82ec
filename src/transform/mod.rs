//! Geometric transforms, color filters, and the ordered pipeline that
//! applies them to one [`Image`].
//!
//! Transforms run against the image's *current* geometry, so order
//! matters: a crop after a rotation addresses the rotated grid.

mod blur;
mod color;
mod crop;
mod mirror;
mod options;
mod parallel;
mod pixelate;
mod rotate;

use alloc::vec::Vec;

use log::debug;

pub use options::{
    CropRequest, DEFAULT_BLUR_RADIUS, DEFAULT_PIXELATE_BLOCK, FilterKind, MirrorDirection,
    RotateDirection, Rotation,
};

use crate::error::BmpError;
use crate::image::Image;
use crate::pixel::Channel;

/// One transform request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Transform {
    Mirror(MirrorDirection),
    Filter(FilterKind),
    Rotate(RotateDirection),
    Crop(CropRequest),
}

impl Transform {
    /// Apply to `image` in place. Only [`Transform::Crop`] can fail, and it
    /// leaves the image untouched when it does.
    pub fn apply(&self, image: &mut Image) -> Result<(), BmpError> {
        match *self {
            Self::Mirror(direction) => mirror::mirror(image, direction),
            Self::Filter(kind) => apply_filter(image, kind),
            Self::Rotate(direction) => rotate::rotate(image, direction),
            Self::Crop(request) => return crop::crop(image, request),
        }
        Ok(())
    }
}

impl From<MirrorDirection> for Transform {
    fn from(value: MirrorDirection) -> Self {
        Self::Mirror(value)
    }
}

impl From<FilterKind> for Transform {
    fn from(value: FilterKind) -> Self {
        Self::Filter(value)
    }
}

impl From<RotateDirection> for Transform {
    fn from(value: RotateDirection) -> Self {
        Self::Rotate(value)
    }
}

impl From<CropRequest> for Transform {
    fn from(value: CropRequest) -> Self {
        Self::Crop(value)
    }
}

fn apply_filter(image: &mut Image, kind: FilterKind) {
    match kind {
        FilterKind::Red => color::isolate_channel(image, Channel::Red),
        FilterKind::Green => color::isolate_channel(image, Channel::Green),
        FilterKind::Blue => color::isolate_channel(image, Channel::Blue),
        FilterKind::Grayscale => color::grayscale(image),
        FilterKind::Negative => color::negative(image),
        FilterKind::Pixelate { block_size } => pixelate::pixelate(image, block_size),
        FilterKind::Blur { radius } => blur::box_blur(image, radius),
    }
}

/// Apply `transforms` to `image` in order.
///
/// Stops at the first failure and returns it. Steps that already ran stay
/// applied; the image should then be discarded rather than encoded.
pub fn apply_all(image: &mut Image, transforms: &[Transform]) -> Result<(), BmpError> {
    for (step, transform) in transforms.iter().enumerate() {
        debug!(
            "step {step}: {transform:?} on {}x{}",
            image.width(),
            image.height()
        );
        transform.apply(image)?;
    }
    Ok(())
}

/// An ordered list of transforms, built up one request at a time.
///
/// ```
/// use bmpkit::{FilterKind, Image, MirrorDirection, Pipeline, Pixel};
///
/// let mut image = Image::filled(8, 4, Pixel::new(200, 100, 50))?;
/// Pipeline::new()
///     .mirror(MirrorDirection::Horizontal)
///     .rotate_half()
///     .filter(FilterKind::Grayscale)
///     .apply(&mut image)?;
/// assert_eq!(image.pixel(0, 0), Some(Pixel::new(118, 118, 118)));
/// # Ok::<(), bmpkit::BmpError>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Pipeline {
    transforms: Vec<Transform>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(mut self, transform: impl Into<Transform>) -> Self {
        self.transforms.push(transform.into());
        self
    }

    pub fn mirror(self, direction: MirrorDirection) -> Self {
        self.push(direction)
    }

    pub fn filter(self, kind: FilterKind) -> Self {
        self.push(kind)
    }

    pub fn rotate(self, direction: RotateDirection) -> Self {
        self.push(direction)
    }

    /// 180 degrees: a horizontal mirror followed by a vertical mirror.
    pub fn rotate_half(self) -> Self {
        self.rotation(Rotation::Half)
    }

    pub fn rotation(mut self, rotation: Rotation) -> Self {
        self.transforms.extend(rotation.into_transforms());
        self
    }

    pub fn crop(self, request: CropRequest) -> Self {
        self.push(request)
    }

    pub fn transforms(&self) -> &[Transform] {
        &self.transforms
    }

    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }

    /// See [`apply_all`].
    pub fn apply(&self, image: &mut Image) -> Result<(), BmpError> {
        apply_all(image, &self.transforms)
    }
}

impl FromIterator<Transform> for Pipeline {
    fn from_iter<I: IntoIterator<Item = Transform>>(iter: I) -> Self {
        Self {
            transforms: iter.into_iter().collect(),
        }
    }
}

impl Extend<Transform> for Pipeline {
    fn extend<I: IntoIterator<Item = Transform>>(&mut self, iter: I) {
        self.transforms.extend(iter);
    }
}
