use crate::{Curve, FieldElement};
use core::fmt;

/// A point on a binary [`Curve`] in lambda-projective coordinates.
///
/// Finite points carry a raw `x`, a raw `λ` (returned by [`raw_y`]) and one
/// projective `z`. The point at infinity has neither `x` nor `λ`. Points hold
/// a borrowed handle to their curve rather than a copy of it.
///
/// A point is an immutable value. Nothing here checks that it is actually on
/// the curve; whatever produced the coordinates is responsible for that.
///
/// [`raw_y`]: Point::raw_y
#[derive(Clone, Copy)]
pub struct Point<'c> {
    curve: &'c Curve,
    x: Option<FieldElement>,
    y: Option<FieldElement>,
    zs: [FieldElement; 1],
    compressed: bool,
}

impl<'c> Point<'c> {
    pub(crate) const fn from_parts(
        curve: &'c Curve,
        x: Option<FieldElement>,
        y: Option<FieldElement>,
        zs: [FieldElement; 1],
        compressed: bool,
    ) -> Self {
        Self {
            curve,
            x,
            y,
            zs,
            compressed,
        }
    }

    /// The curve this point belongs to.
    pub fn curve(&self) -> &'c Curve {
        self.curve
    }

    /// The raw x-coordinate or `None` for the point at infinity.
    pub fn raw_x(&self) -> Option<&FieldElement> {
        self.x.as_ref()
    }

    /// The raw second coordinate (`λ` in lambda-projective form) or `None`
    /// for the point at infinity.
    pub fn raw_y(&self) -> Option<&FieldElement> {
        self.y.as_ref()
    }

    /// The projective z-coordinates.
    pub fn zs(&self) -> &[FieldElement] {
        &self.zs
    }

    /// Whether this is the point at infinity.
    pub fn is_infinity(&self) -> bool {
        self.x.is_none() || self.y.is_none()
    }

    /// Whether the point is infinity or has z = 1.
    pub fn is_normalized(&self) -> bool {
        self.is_infinity() || self.zs[0].is_one()
    }

    /// Whether the point should use point compression when encoded.
    pub fn is_compressed(&self) -> bool {
        self.compressed
    }
}

impl PartialEq for Point<'_> {
    /// Points are equal when they are on equal curves and their raw
    /// coordinates match. All points at infinity on a curve are equal.
    fn eq(&self, other: &Self) -> bool {
        let same_curve = core::ptr::eq(self.curve, other.curve) || self.curve == other.curve;
        if !same_curve {
            return false;
        }
        match (self.is_infinity(), other.is_infinity()) {
            (true, true) => true,
            (false, false) => self.x == other.x && self.y == other.y && self.zs == other.zs,
            _ => false,
        }
    }
}

impl Eq for Point<'_> {}

impl fmt::Debug for Point<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match (&self.x, &self.y) {
            (Some(x), Some(y)) => f
                .debug_struct("Point")
                .field("x", x)
                .field("y", y)
                .field("z", &self.zs[0])
                .finish(),
            _ => write!(f, "Point(infinity)"),
        }
    }
}
