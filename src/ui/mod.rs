//! Colour and geometry value types shared by host-facing APIs.

mod color;
mod geometry;

pub use color::{Color, Colors, ParseColorError};
pub use geometry::{GeometryError, Point, Rect, Size};
