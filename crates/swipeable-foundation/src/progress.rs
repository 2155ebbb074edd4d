//! Progress derivation and forwarding to the host's observer.

use crate::types::SwipeDirection;
use std::rc::Rc;

/// Observer invoked with `(progress, direction)` after every offset change,
/// whether it came from a drag or from a settle animation.
pub type ProgressCallback = Rc<dyn Fn(f32, Option<SwipeDirection>)>;

/// Progress of the surface at one offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeProgress {
    /// `|offset| / max`, clamped into `[0, 1]`.
    pub progress: f32,
    /// `Right` for positive offsets, `Left` for negative ones, `None` at rest.
    pub direction: Option<SwipeDirection>,
}

impl SwipeProgress {
    pub const REST: SwipeProgress = SwipeProgress {
        progress: 0.0,
        direction: None,
    };

    pub fn derive(offset: f32, max_drag_distance_px: f32) -> Self {
        let progress = if max_drag_distance_px > 0.0 {
            (offset.abs() / max_drag_distance_px).clamp(0.0, 1.0)
        } else {
            0.0
        };
        let direction = if offset > 0.0 {
            Some(SwipeDirection::Right)
        } else if offset < 0.0 {
            Some(SwipeDirection::Left)
        } else {
            None
        };
        Self {
            progress,
            direction,
        }
    }
}

/// Forwards derived progress to an optional observer. Holds no state of its own.
#[derive(Clone, Default)]
pub struct ProgressNotifier {
    observer: Option<ProgressCallback>,
}

impl ProgressNotifier {
    pub fn new(observer: Option<ProgressCallback>) -> Self {
        Self { observer }
    }

    /// Derive progress for `offset` and hand it to the observer.
    pub fn notify(&self, offset: f32, max_drag_distance_px: f32) -> SwipeProgress {
        let progress = SwipeProgress::derive(offset, max_drag_distance_px);
        if let Some(observer) = &self.observer {
            observer(progress.progress, progress.direction);
        }
        progress
    }

    pub fn has_observer(&self) -> bool {
        self.observer.is_some()
    }
}

impl std::fmt::Debug for ProgressNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProgressNotifier")
            .field("has_observer", &self.has_observer())
            .finish()
    }
}
