use super::Vec2D;

use std::cmp;

/// An axis-aligned rectangle on the pixel grid.
///
/// Both corners are inclusive, so a rectangle created from a single point
/// covers exactly one pixel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rectangle<T = i32> {
    top_left: Vec2D<T>,
    bottom_right: Vec2D<T>,
}

impl<T> Rectangle<T> {
    pub fn from_corners(top_left: Vec2D<T>, bottom_right: Vec2D<T>) -> Self {
        Self {
            top_left,
            bottom_right,
        }
    }
}

impl<T: Copy> Rectangle<T> {
    #[must_use]
    pub fn from_point(point: Vec2D<T>) -> Self {
        Self::from_corners(point, point)
    }

    pub const fn top_left(&self) -> Vec2D<T> {
        self.top_left
    }

    pub const fn bottom_right(&self) -> Vec2D<T> {
        self.bottom_right
    }
}

impl<T> Rectangle<T>
where
    T: Ord + Copy,
{
    #[inline]
    #[must_use]
    pub fn contains_point(&self, point: Vec2D<T>) -> bool {
        (self.top_left.x..=self.bottom_right.x).contains(&point.x)
            && (self.top_left.y..=self.bottom_right.y).contains(&point.y)
    }

    pub fn grow_to_contain_point(&mut self, point: Vec2D<T>) {
        self.top_left.x = cmp::min(self.top_left.x, point.x);
        self.top_left.y = cmp::min(self.top_left.y, point.y);
        self.bottom_right.x = cmp::max(self.bottom_right.x, point.x);
        self.bottom_right.y = cmp::max(self.bottom_right.y, point.y);
    }
}

impl Rectangle<i32> {
    /// Number of pixel columns covered by the rectangle
    ///
    /// Returns [None] if the width does not fit into a [u32].
    #[must_use]
    pub fn width(&self) -> Option<u32> {
        span(self.top_left.x, self.bottom_right.x)
    }

    /// Number of pixel rows covered by the rectangle
    ///
    /// Returns [None] if the height does not fit into a [u32].
    #[must_use]
    pub fn height(&self) -> Option<u32> {
        span(self.top_left.y, self.bottom_right.y)
    }

    /// Grow the rectangle by `amount` pixels in every direction
    ///
    /// Returns [None] if any corner would leave the range of an [i32].
    #[must_use]
    pub fn inflate(&self, amount: i32) -> Option<Self> {
        Some(Self {
            top_left: Vec2D::new(
                self.top_left.x.checked_sub(amount)?,
                self.top_left.y.checked_sub(amount)?,
            ),
            bottom_right: Vec2D::new(
                self.bottom_right.x.checked_add(amount)?,
                self.bottom_right.y.checked_add(amount)?,
            ),
        })
    }
}

fn span(from: i32, to: i32) -> Option<u32> {
    debug_assert!(from <= to);

    (i64::from(to) - i64::from(from) + 1).try_into().ok()
}
