//! Testing utilities for swipeable surfaces
//!
//! [`SwipeTestRule`] owns a runtime and pumps frames deterministically;
//! the recorders capture haptic pulses and progress updates for assertions.

mod recorders;
mod testing;

pub use recorders::{ProgressRecorder, RecordingHapticFeedback};
pub use testing::{run_test_swipe, SwipeTestRule};

pub mod prelude {
    pub use crate::recorders::{ProgressRecorder, RecordingHapticFeedback};
    pub use crate::testing::{run_test_swipe, SwipeTestRule};
}
