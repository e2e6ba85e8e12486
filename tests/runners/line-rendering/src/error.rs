use std::fmt;

use math::Vec2D;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// The distance between the endpoints does not fit into an [i32]
    CoordinateOutOfRange { from: Vec2D<i32>, to: Vec2D<i32> },

    /// The grid would need more cells than allowed
    CanvasTooLarge { max_cells: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CoordinateOutOfRange { from, to } => write!(
                f,
                "cannot rasterize ({}, {}) -> ({}, {}), the endpoints are too far apart",
                from.x, from.y, to.x, to.y
            ),
            Self::CanvasTooLarge { max_cells } => {
                write!(f, "the grid would have more than {max_cells} cells")
            },
        }
    }
}

impl std::error::Error for Error {}
