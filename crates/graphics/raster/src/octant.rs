//! Octant normalization and the Bresenham stepper.
//!
//! Any segment that is neither axis-aligned nor diagonal is first mapped into
//! a canonical octant: x is the dominant axis and the segment is traversed
//! from left to right. In that octant, the minor axis moves by at most one
//! pixel per column, in a single direction, so one stepping loop is enough.

use math::Vec2D;

use crate::numeric::{abs, sign};

/// A segment in the canonical octant (`0 < |delta.y| < delta.x`)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct CanonicalSegment {
    pub start: Vec2D<i32>,
    pub end: Vec2D<i32>,
    pub delta: Vec2D<i32>,

    /// Whether the x and y axis were swapped to get here.
    ///
    /// Pixels produced by [CanonicalSegment::step] need to be swapped back
    /// before they are handed to the caller.
    pub is_transposed: bool,
}

impl CanonicalSegment {
    pub fn normalize(start: Vec2D<i32>, end: Vec2D<i32>, delta: Vec2D<i32>) -> Self {
        let (mut start, mut end, mut delta) = (start, end, delta);

        let is_transposed = abs(delta.x) < abs(delta.y);
        if is_transposed {
            start = start.transpose();
            end = end.transpose();
            delta = delta.transpose();
        }

        // Always walk in increasing x direction
        if delta.x < 0 {
            std::mem::swap(&mut start, &mut end);
            delta = -delta;
        }

        debug_assert!(0 < delta.x);
        debug_assert!(abs(delta.y) < delta.x);

        Self {
            start,
            end,
            delta,
            is_transposed,
        }
    }

    /// Plot every pixel in `start.x..end.x`.
    ///
    /// The error term tracks the distance between the ideal line and the center
    /// of the current pixel, scaled by `2 * delta.x` so it stays integral. A positive
    /// value means the next pixel is one row further along the minor axis.
    ///
    /// The error is kept in an [i64]. Twice the delta of a segment that spans most
    /// of the [i32] range does not fit into an [i32].
    pub fn step<F>(&self, mut plot: F)
    where
        F: FnMut(i32, i32, i64),
    {
        let y_step = sign(self.delta.y);
        let dx = i64::from(self.delta.x);
        let dy = i64::from(abs(self.delta.y));

        let mut y = self.start.y;
        let mut error = 2 * dy - dx;

        for x in self.start.x..self.end.x {
            plot(x, y, error);

            if error > 0 {
                y += y_step;
                error -= 2 * dx;
            }
            error += 2 * dy;
        }
    }
}

/// Rasterize a segment that is not degenerate in any way
pub(crate) fn draw_general<F>(
    start: Vec2D<i32>,
    end: Vec2D<i32>,
    delta: Vec2D<i32>,
    mut plot: F,
) where
    F: FnMut(i32, i32, i64),
{
    let segment = CanonicalSegment::normalize(start, end, delta);

    if segment.is_transposed {
        segment.step(|x, y, error| plot(y, x, error));
    } else {
        segment.step(plot);
    }
}
