use math::Vec2D;

use crate::numeric::abs;

/// How a segment lies on the grid, determined from the difference of its endpoints
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    /// Both endpoints are the same pixel, this is not considered a line
    Point,
    Vertical,
    Horizontal,
    /// Exactly 45°, both axes advance on every step
    Diagonal,
    /// Anything else, handled by the Bresenham stepper
    General,
}

impl Orientation {
    /// Classify the segment with the given delta (`end - start`).
    ///
    /// The checks are ordered, so a zero delta is a [Point](Orientation::Point)
    /// and never a [Vertical](Orientation::Vertical) line.
    #[must_use]
    pub fn of(delta: Vec2D<i32>) -> Self {
        match delta {
            Vec2D { x: 0, y: 0 } => Self::Point,
            Vec2D { x: 0, .. } => Self::Vertical,
            Vec2D { y: 0, .. } => Self::Horizontal,
            Vec2D { x, y } if abs(x) == abs(y) => Self::Diagonal,
            _ => Self::General,
        }
    }

    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        !matches!(self, Self::General)
    }
}
