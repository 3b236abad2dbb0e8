use derive_more::{Add, AddAssign, Deref, Display, From, Into, Sub, SubAssign, Sum};
use std::ops::{Div, Mul};

/// A length on the raster canvas, in pixels. Fractional values are allowed while
/// computing a layout; placements are floored to whole pixels before drawing.
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    PartialOrd,
    Add,
    AddAssign,
    Sub,
    SubAssign,
    Sum,
    Deref,
    Display,
    From,
    Into,
)]
#[display("{_0}px")]
pub struct Px(pub f32);

impl Px {
    /// Round down to a whole pixel. Values within 1e-3 below a whole pixel count as
    /// that pixel, as products with fractions such as 0.7 are not exact in `f32`.
    pub fn whole(self) -> Px {
        Px((self.0 + 1e-3).floor())
    }

    /// `self * fraction`, rounded down to a whole pixel
    pub fn fraction(self, fraction: f32) -> Px {
        (self * fraction).whole()
    }

    pub fn min(self, other: Px) -> Px {
        Px(self.0.min(other.0))
    }
}

impl From<u32> for Px {
    fn from(value: u32) -> Self {
        Px(value as f32)
    }
}

impl Mul<f32> for Px {
    type Output = Px;

    fn mul(self, rhs: f32) -> Self::Output {
        Px(self.0 * rhs)
    }
}

impl Div<f32> for Px {
    type Output = Px;

    fn div(self, rhs: f32) -> Self::Output {
        Px(self.0 / rhs)
    }
}

/// Dividing one length by another yields a plain ratio
impl Div<Px> for Px {
    type Output = f32;

    fn div(self, rhs: Px) -> Self::Output {
        self.0 / rhs.0
    }
}

/// Width divided by height of an image. Always finite and strictly positive.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct AspectRatio(f32);

impl AspectRatio {
    /// Returns [None] for images with a zero (or otherwise degenerate) dimension
    pub fn new(width: f32, height: f32) -> Option<AspectRatio> {
        let ratio = width / height;
        (width > 0.0 && height > 0.0 && ratio.is_finite()).then_some(AspectRatio(ratio))
    }

    pub fn get(self) -> f32 {
        self.0
    }
}
