//! Direction, behavior and side enums shared by every engine component.

/// Permitted drag directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SwipeDirection {
    /// Only rightward drags (positive offset), revealing left-side actions.
    Left,
    /// Only leftward drags (negative offset), revealing right-side actions.
    Right,
    /// Drags in either direction.
    #[default]
    Both,
}

impl SwipeDirection {
    /// Whether a drag may bring the offset to `offset`.
    pub fn permits(self, offset: f32) -> bool {
        match self {
            SwipeDirection::Left => offset >= 0.0,
            SwipeDirection::Right => offset <= 0.0,
            SwipeDirection::Both => true,
        }
    }

    /// Whether actions on `side` can ever be uncovered.
    pub fn exposes(self, side: SwipeSide) -> bool {
        match (self, side) {
            (SwipeDirection::Both, _) => true,
            (SwipeDirection::Left, SwipeSide::Left) => true,
            (SwipeDirection::Right, SwipeSide::Right) => true,
            _ => false,
        }
    }
}

/// What happens once a drag crosses the trigger threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SwipeBehavior {
    /// One action per side; fires on release and the surface returns to rest.
    #[default]
    Dismiss,
    /// A row of actions per side; the surface stays open until closed.
    Reveal,
}

/// The side of the surface an action row lives on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwipeSide {
    /// Uncovered by a positive offset.
    Left,
    /// Uncovered by a negative offset.
    Right,
}

impl SwipeSide {
    /// Side uncovered by the given offset, `None` at rest.
    pub fn for_offset(offset: f32) -> Option<SwipeSide> {
        if offset > 0.0 {
            Some(SwipeSide::Left)
        } else if offset < 0.0 {
            Some(SwipeSide::Right)
        } else {
            None
        }
    }

    /// Sign of the offset that uncovers this side.
    pub fn sign(self) -> f32 {
        match self {
            SwipeSide::Left => 1.0,
            SwipeSide::Right => -1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn left_only_rejects_negative_offsets() {
        assert!(SwipeDirection::Left.permits(0.0));
        assert!(SwipeDirection::Left.permits(12.0));
        assert!(!SwipeDirection::Left.permits(-0.5));
    }

    #[test]
    fn right_only_rejects_positive_offsets() {
        assert!(SwipeDirection::Right.permits(-12.0));
        assert!(!SwipeDirection::Right.permits(0.5));
    }

    #[test]
    fn exposure_follows_direction() {
        assert!(SwipeDirection::Left.exposes(SwipeSide::Left));
        assert!(!SwipeDirection::Left.exposes(SwipeSide::Right));
        assert!(SwipeDirection::Both.exposes(SwipeSide::Right));
    }

    #[test]
    fn side_for_offset_sign() {
        assert_eq!(SwipeSide::for_offset(3.0), Some(SwipeSide::Left));
        assert_eq!(SwipeSide::for_offset(-3.0), Some(SwipeSide::Right));
        assert_eq!(SwipeSide::for_offset(0.0), None);
    }
}
