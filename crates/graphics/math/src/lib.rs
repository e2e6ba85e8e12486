//! Grid geometry shared by the rasterization crates

mod bitmap;
mod rect;
mod vec2d;

pub use bitmap::Bitmap;
pub use rect::Rectangle;
pub use vec2d::Vec2D;
