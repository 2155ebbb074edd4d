//! Gesture-to-state engine for swipeable surfaces
//!
//! Turns a horizontal drag into a clamped, direction-constrained offset, a
//! normalized progress stream, dismiss/reveal decisions with settle
//! animations, and haptic pulses. Rendering and platform haptics stay
//! outside; the engine only hands out descriptors and calls the
//! [`HapticFeedback`] capability.

pub mod action;
pub mod action_animation;
pub mod background;
pub mod config;
pub mod geometry;
pub mod gesture_constants;
pub mod haptics;
pub mod progress;
pub mod state;
pub mod swipeable;
pub mod types;

pub use action::{ActionCustomization, ActionList, SwipeAction};
pub use action_animation::{
    ActionAnimationConfig, ActionTransform, BuiltinTransform, VisualTransform,
};
pub use background::{background_alpha, SwipeBackground};
pub use config::{ConfigError, SwipeableConfig, SwipeableConfigBuilder};
pub use geometry::SwipeGeometry;
pub use haptics::{
    DebouncedHapticFeedback, HapticError, HapticFeedback, HapticFeedbackConfig,
    HapticFeedbackIntensity, HapticFeedbackMode, HapticGestureMemory, NoopHapticFeedback,
};
pub use progress::{ProgressCallback, SwipeProgress};
pub use state::{GestureState, ReleaseDecision, SwipePhase};
pub use swipeable::{ActionLayer, Swipeable};
pub use types::{SwipeBehavior, SwipeDirection, SwipeSide};

pub mod prelude {
    pub use crate::action::{ActionCustomization, SwipeAction};
    pub use crate::action_animation::{ActionAnimationConfig, VisualTransform};
    pub use crate::background::SwipeBackground;
    pub use crate::config::{ConfigError, SwipeableConfig};
    pub use crate::haptics::{
        HapticFeedback, HapticFeedbackConfig, HapticFeedbackIntensity, HapticFeedbackMode,
    };
    pub use crate::state::SwipePhase;
    pub use crate::swipeable::Swipeable;
    pub use crate::types::{SwipeBehavior, SwipeDirection, SwipeSide};
}
