//! Geometric primitives: Point and button shapes

use crate::unit::Dp;

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CornerRadii {
    pub top_left: f32,
    pub top_right: f32,
    pub bottom_right: f32,
    pub bottom_left: f32,
}

impl CornerRadii {
    pub fn uniform(radius: f32) -> Self {
        Self {
            top_left: radius,
            top_right: radius,
            bottom_right: radius,
            bottom_left: radius,
        }
    }
}

/// Outline used to clip a surface or an action button.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum Shape {
    #[default]
    Rectangle,
    Circle,
    RoundedCorners(CornerRadii),
}

impl Shape {
    pub fn rounded(radius: Dp) -> Self {
        Shape::RoundedCorners(CornerRadii::uniform(radius.0))
    }

    /// Corner radii in dp for a surface of the given size, clamped so that no
    /// corner exceeds half of either side.
    pub fn resolve(&self, width: f32, height: f32) -> CornerRadii {
        let max_width = (width / 2.0).max(0.0);
        let max_height = (height / 2.0).max(0.0);
        match self {
            Shape::Rectangle => CornerRadii::default(),
            Shape::Circle => CornerRadii::uniform(max_width.min(max_height)),
            Shape::RoundedCorners(radii) => {
                let clamp = |value: f32| value.clamp(0.0, max_width).min(max_height);
                CornerRadii {
                    top_left: clamp(radii.top_left),
                    top_right: clamp(radii.top_right),
                    bottom_right: clamp(radii.bottom_right),
                    bottom_left: clamp(radii.bottom_left),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn circle_resolves_to_half_of_shorter_side() {
        let radii = Shape::Circle.resolve(48.0, 40.0);
        assert_eq!(radii, CornerRadii::uniform(20.0));
    }

    #[test]
    fn rounded_corners_are_clamped() {
        let radii = Shape::rounded(Dp(100.0)).resolve(48.0, 48.0);
        assert_eq!(radii.top_left, 24.0);
        assert_eq!(radii.bottom_right, 24.0);
    }
}
