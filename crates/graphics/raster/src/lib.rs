//! Integer-only line rasterization.
//!
//! [rasterize] walks the pixels of a straight line between two grid points with
//! Bresenham's algorithm and hands each of them to a callback, in traversal order.
//!
//! # Endpoints
//! The traversal is half-open: the pixel at the far end of the dominant axis is
//! **never** plotted. Drawing `(0, 0) -> (5, 0)` plots `x = 0..5`, not `x = 0..=5`.
//! If the closing pixel is wanted, plot it yourself after the call.
//!
//! Segments that are neither axis-aligned nor exactly diagonal are always walked
//! in increasing direction of their dominant axis. For those, "far end" means the
//! endpoint with the larger dominant coordinate, regardless of argument order.
//!
//! A segment whose endpoints are equal is not considered a line and plots nothing.
//!
//! # Clipping
//! Coordinates are passed through unchanged, including negative ones.
//! Bounds checking is the responsibility of the callback.

mod axis;
pub mod numeric;
mod octant;
mod orientation;

use math::Vec2D;

pub use orientation::Orientation;

/// A single plotted pixel, see [pixels]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Pixel {
    pub x: i32,
    pub y: i32,

    /// The accumulated error of the stepper at this pixel.
    ///
    /// Always `0` for vertical, horizontal and diagonal lines.
    pub error: i64,
}

impl Pixel {
    #[must_use]
    pub fn position(&self) -> Vec2D<i32> {
        Vec2D::new(self.x, self.y)
    }
}

/// Plot the line from `(x0, y0)` towards `(x1, y1)`.
///
/// `plot` receives `(x, y, error)` once per pixel. See the
/// [crate documentation](crate) for which endpoints are included.
///
/// The error is passed as an [i64], since its magnitude can reach twice the
/// length of the line.
///
/// # Panics
/// The coordinate difference on each axis must be representable as an [i32]
/// and must not be [i32::MIN]. Any other pair of endpoints is valid.
pub fn rasterize<F>(x0: i32, y0: i32, x1: i32, y1: i32, plot: F)
where
    F: FnMut(i32, i32, i64),
{
    rasterize_segment(Vec2D::new(x0, y0), Vec2D::new(x1, y1), plot);
}

/// Like [rasterize], but takes the endpoints as points
pub fn rasterize_segment<F>(from: Vec2D<i32>, to: Vec2D<i32>, plot: F)
where
    F: FnMut(i32, i32, i64),
{
    let delta = to - from;
    let orientation = Orientation::of(delta);

    log::trace!("Rasterizing {orientation:?} line from {from:?} to {to:?}");

    match orientation {
        Orientation::Point => {},
        Orientation::Vertical => axis::draw_vertical(from, to, delta, plot),
        Orientation::Horizontal => axis::draw_horizontal(from, to, delta, plot),
        Orientation::Diagonal => axis::draw_diagonal(from, to, delta, plot),
        Orientation::General => octant::draw_general(from, to, delta, plot),
    }
}

/// Collect the pixels of a line instead of passing them to a callback
///
/// Every pixel is kept in memory, which is about 16 bytes per step along the
/// dominant axis. Use [rasterize_segment] for lines that span a large part of
/// the coordinate range.
#[must_use]
pub fn pixels(from: Vec2D<i32>, to: Vec2D<i32>) -> Vec<Pixel> {
    let mut pixels = vec![];
    rasterize_segment(from, to, |x, y, error| pixels.push(Pixel { x, y, error }));
    pixels
}
