//! Gesture state and the release decision table.

use crate::types::{SwipeBehavior, SwipeSide};

/// Who is currently moving the offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SwipePhase {
    #[default]
    Idle,
    /// A pointer owns the offset.
    Dragging,
    /// A settle animation owns the offset.
    Settling,
}

/// Mutable state of one swipeable surface.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GestureState {
    /// Always within `[-max, +max]` of the current geometry.
    pub offset: f32,
    pub is_revealed: bool,
    pub revealed_side: Option<SwipeSide>,
    pub phase: SwipePhase,
}

impl GestureState {
    pub(crate) fn set_revealed(&mut self, side: Option<SwipeSide>) {
        self.is_revealed = side.is_some();
        self.revealed_side = side;
    }
}

/// Outcome of releasing a drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseDecision {
    /// Fire the side's dismiss action, then settle to rest.
    Dismiss(SwipeSide),
    /// Settle fully open on the side.
    Reveal(SwipeSide),
    /// Settle to rest and clear any reveal.
    Close,
}

/// Decide what a release at `offset` commits to. The offset must strictly
/// exceed the trigger and the uncovered side must have actions.
pub fn resolve_release(
    behavior: SwipeBehavior,
    offset: f32,
    trigger_threshold_px: f32,
    has_actions: impl Fn(SwipeSide) -> bool,
) -> ReleaseDecision {
    let side = if offset < -trigger_threshold_px {
        Some(SwipeSide::Right)
    } else if offset > trigger_threshold_px {
        Some(SwipeSide::Left)
    } else {
        None
    };
    match side.filter(|side| has_actions(*side)) {
        Some(side) => match behavior {
            SwipeBehavior::Dismiss => ReleaseDecision::Dismiss(side),
            SwipeBehavior::Reveal => ReleaseDecision::Reveal(side),
        },
        None => ReleaseDecision::Close,
    }
}
