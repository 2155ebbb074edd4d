//! Surface painted behind an action row.

use swipeable_ui_graphics::{Brush, Color, Point};

#[derive(Debug, Clone, PartialEq)]
pub enum SwipeBackground {
    Solid(Color),
    Gradient(Brush),
}

impl SwipeBackground {
    pub fn solid(color: Color) -> Self {
        SwipeBackground::Solid(color)
    }

    /// Gradient from `start` to `end`; infinite coordinates mean the far edge.
    pub fn linear_gradient(colors: Vec<Color>, start: Point, end: Point) -> Self {
        SwipeBackground::Gradient(Brush::linear_gradient_between(colors, start, end))
    }

    /// Gradient around `center`; infinite values resolve against the surface.
    pub fn radial_gradient(colors: Vec<Color>, center: Point, radius: f32) -> Self {
        SwipeBackground::Gradient(Brush::radial_gradient(colors, center, radius))
    }

    /// Brush to paint at the given alpha. Only solid colors fade; gradients
    /// are painted as configured.
    pub fn brush(&self, alpha: f32) -> Brush {
        match self {
            SwipeBackground::Solid(color) => Brush::solid(color.with_alpha(alpha)),
            SwipeBackground::Gradient(brush) => brush.clone(),
        }
    }

    pub(crate) fn is_empty_gradient(&self) -> bool {
        matches!(self, SwipeBackground::Gradient(brush) if brush.colors().is_empty())
    }
}

/// Opacity of a side's background: opaque once revealed, otherwise tracking
/// progress when fading is enabled.
pub fn background_alpha(progress: f32, revealed: bool, fade_enabled: bool) -> f32 {
    if revealed || !fade_enabled {
        1.0
    } else {
        progress.clamp(0.0, 1.0)
    }
}
