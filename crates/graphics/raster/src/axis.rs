//! Walkers for segments that lie exactly on a grid line or a grid diagonal.
//!
//! These never accumulate an error, every pixel they emit is passed `0`.

use math::Vec2D;

use crate::numeric::{abs, sign};

pub(crate) fn draw_vertical<F>(
    start: Vec2D<i32>,
    end: Vec2D<i32>,
    delta: Vec2D<i32>,
    mut plot: F,
) where
    F: FnMut(i32, i32, i64),
{
    let step = sign(delta.y);
    let x = start.x;

    let mut y = start.y;
    while y != end.y {
        plot(x, y, 0);
        y += step;
    }
}

pub(crate) fn draw_horizontal<F>(
    start: Vec2D<i32>,
    end: Vec2D<i32>,
    delta: Vec2D<i32>,
    mut plot: F,
) where
    F: FnMut(i32, i32, i64),
{
    let step = sign(delta.x);
    let y = start.y;

    let mut x = start.x;
    while x != end.x {
        plot(x, y, 0);
        x += step;
    }
}

pub(crate) fn draw_diagonal<F>(
    start: Vec2D<i32>,
    end: Vec2D<i32>,
    delta: Vec2D<i32>,
    mut plot: F,
) where
    F: FnMut(i32, i32, i64),
{
    debug_assert_eq!(abs(delta.x), abs(delta.y));

    let step = delta.map(sign);

    let mut current = start;
    while current.x != end.x {
        plot(current.x, current.y, 0);
        current = current + step;
    }
}
