//! Brush definitions for painting (solid colors, gradients)

use crate::color::Color;
use crate::geometry::Point;

#[derive(Clone, Debug, PartialEq)]
pub enum Brush {
    Solid(Color),
    /// `end` coordinates may be infinite, meaning "the far edge of the surface".
    LinearGradient {
        colors: Vec<Color>,
        start: Point,
        end: Point,
    },
    /// Infinite center or radius resolve against the surface size.
    RadialGradient {
        colors: Vec<Color>,
        center: Point,
        radius: f32,
    },
}

impl Brush {
    pub fn solid(color: Color) -> Self {
        Brush::Solid(color)
    }

    /// Horizontal gradient spanning the whole surface.
    pub fn linear_gradient(colors: Vec<Color>) -> Self {
        Brush::LinearGradient {
            colors,
            start: Point::ZERO,
            end: Point::new(f32::INFINITY, 0.0),
        }
    }

    pub fn linear_gradient_between(colors: Vec<Color>, start: Point, end: Point) -> Self {
        Brush::LinearGradient { colors, start, end }
    }

    pub fn radial_gradient(colors: Vec<Color>, center: Point, radius: f32) -> Self {
        Brush::RadialGradient {
            colors,
            center,
            radius,
        }
    }

    pub fn colors(&self) -> &[Color] {
        match self {
            Brush::Solid(color) => std::slice::from_ref(color),
            Brush::LinearGradient { colors, .. } | Brush::RadialGradient { colors, .. } => colors,
        }
    }
}
