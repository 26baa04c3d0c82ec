//! Transform request values and their textual names.

use alloc::string::ToString;
use alloc::vec::Vec;
use core::str::FromStr;

use super::Transform;
use crate::error::BmpError;

/// Block size used when pixelate is requested by name.
pub const DEFAULT_PIXELATE_BLOCK: usize = 50;
/// Radius used when blur is requested by name.
pub const DEFAULT_BLUR_RADIUS: usize = 20;

fn invalid(option: &'static str, value: &str) -> BmpError {
    BmpError::InvalidTransformOption {
        option,
        value: value.to_string(),
    }
}

/// Axis a mirror swaps pixels across.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MirrorDirection {
    /// Reverse every row (left and right swap).
    Horizontal,
    /// Reverse the row order (top and bottom swap).
    Vertical,
}

impl FromStr for MirrorDirection {
    type Err = BmpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "horizontal" | "h" | "horizontally" | "hor" => Ok(Self::Horizontal),
            "vertical" | "v" | "vertically" | "ver" => Ok(Self::Vertical),
            _ => Err(invalid("mirror", s)),
        }
    }
}

/// A quarter turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RotateDirection {
    /// Counter-clockwise.
    Left,
    /// Clockwise.
    Right,
}

/// A requested rotation, including the half turn that has no
/// [`RotateDirection`] of its own.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Rotation {
    Left,
    Right,
    /// 180 degrees, applied as a horizontal then a vertical mirror.
    Half,
}

impl Rotation {
    /// Pipeline steps that perform this rotation.
    pub fn into_transforms(self) -> Vec<Transform> {
        match self {
            Self::Left => alloc::vec![Transform::Rotate(RotateDirection::Left)],
            Self::Right => alloc::vec![Transform::Rotate(RotateDirection::Right)],
            Self::Half => alloc::vec![
                Transform::Mirror(MirrorDirection::Horizontal),
                Transform::Mirror(MirrorDirection::Vertical),
            ],
        }
    }
}

impl FromStr for Rotation {
    type Err = BmpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "right" | "90" | "-270" => Ok(Self::Right),
            "left" | "-90" | "270" => Ok(Self::Left),
            "180" | "-180" => Ok(Self::Half),
            _ => Err(invalid("rotate", s)),
        }
    }
}

/// A color filter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FilterKind {
    /// Keep only the red channel.
    Red,
    /// Keep only the green channel.
    Green,
    /// Keep only the blue channel.
    Blue,
    /// BT.709 luma on all three channels.
    Grayscale,
    /// `255 - c` on every channel.
    Negative,
    /// Replace each `block_size` square tile by its mean color.
    Pixelate { block_size: usize },
    /// Box blur over a `(2 * radius + 1)` square window.
    Blur { radius: usize },
}

impl FromStr for FilterKind {
    type Err = BmpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "red" => Ok(Self::Red),
            "green" => Ok(Self::Green),
            "blue" => Ok(Self::Blue),
            "grayscale" => Ok(Self::Grayscale),
            "negative" => Ok(Self::Negative),
            "pixelate" => Ok(Self::Pixelate {
                block_size: DEFAULT_PIXELATE_BLOCK,
            }),
            "blur" => Ok(Self::Blur {
                radius: DEFAULT_BLUR_RADIUS,
            }),
            _ => Err(invalid("filter", s)),
        }
    }
}

/// A crop region: top-left offset plus an optional extent.
///
/// A missing (or zero) width or height extends the region to the far edge
/// of the image at the time the crop runs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct CropRequest {
    pub x: usize,
    pub y: usize,
    pub width: Option<usize>,
    pub height: Option<usize>,
}

impl CropRequest {
    /// Everything right of `x` and below `y`.
    pub fn at(x: usize, y: usize) -> Self {
        Self {
            x,
            y,
            width: None,
            height: None,
        }
    }

    /// A `width` x `height` region with its top-left corner at `(x, y)`.
    pub fn new(x: usize, y: usize, width: usize, height: usize) -> Self {
        Self {
            x,
            y,
            width: Some(width),
            height: Some(height),
        }
    }
}

/// `X-Y` or `X-Y-W-H`, decimal, with `W` and `H` positive.
impl FromStr for CropRequest {
    type Err = BmpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut values = [0usize; 4];
        let mut count = 0;
        for part in s.split('-') {
            let slot = values.get_mut(count).ok_or_else(|| invalid("crop", s))?;
            *slot = part.parse().map_err(|_| invalid("crop", s))?;
            count += 1;
        }

        match (count, values) {
            (2, [x, y, ..]) => Ok(Self::at(x, y)),
            (4, [x, y, w, h]) if w > 0 && h > 0 => Ok(Self::new(x, y, w, h)),
            _ => Err(invalid("crop", s)),
        }
    }
}
