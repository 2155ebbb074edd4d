//! Pure data for drawing swipe surfaces.
//!
//! None of these types are interpreted by the gesture engine; they are
//! threaded through to whatever renders the action buttons and backgrounds.

mod brush;
mod color;
mod geometry;
mod unit;

pub use brush::*;
pub use color::*;
pub use geometry::*;
pub use unit::*;

pub mod prelude {
    pub use crate::brush::Brush;
    pub use crate::color::Color;
    pub use crate::geometry::{CornerRadii, Point, Shape};
    pub use crate::unit::Dp;
}
