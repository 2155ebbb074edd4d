use swipeable_core::{Runtime, RuntimeHandle, FRAME_NANOS_60HZ};
use swipeable_foundation::Swipeable;

/// Frames [`SwipeTestRule::pump_until_idle`] will pump before giving up.
const MAX_IDLE_FRAMES: usize = 1_000;

/// Headless harness for driving swipe gestures in tests.
///
/// Owns the runtime that settle animations schedule on and advances it one
/// 60 Hz frame at a time, so animations are sampled exactly as they would be
/// on a display without any wall clock involved.
pub struct SwipeTestRule {
    runtime: Runtime,
    frame_time_nanos: u64,
}

impl SwipeTestRule {
    pub fn new() -> Self {
        Self {
            runtime: Runtime::default(),
            frame_time_nanos: 0,
        }
    }

    /// Handle to pass to [`Swipeable::new`].
    pub fn runtime_handle(&self) -> RuntimeHandle {
        self.runtime.handle()
    }

    /// Timestamp of the last frame that was drained.
    pub fn frame_time_nanos(&self) -> u64 {
        self.frame_time_nanos
    }

    /// Drain one frame, 16.67 ms after the previous one.
    pub fn advance_frame(&mut self) {
        self.frame_time_nanos += FRAME_NANOS_60HZ;
        self.runtime
            .handle()
            .drain_frame_callbacks(self.frame_time_nanos);
    }

    pub fn advance_frames(&mut self, frames: usize) {
        for _ in 0..frames {
            self.advance_frame();
        }
    }

    /// Drain frames until nothing is scheduled. Returns the number of frames
    /// drained.
    pub fn pump_until_idle(&mut self) -> usize {
        let handle = self.runtime.handle();
        let mut frames = 0;
        while handle.has_frame_callbacks() {
            frames += 1;
            if frames > MAX_IDLE_FRAMES {
                panic!("pump_until_idle ran {MAX_IDLE_FRAMES} frames without settling");
            }
            self.advance_frame();
        }
        log::trace!("idle after {frames} frames");
        frames
    }

    /// Start a drag and feed it the given deltas without releasing.
    pub fn drag(&self, swipeable: &Swipeable, deltas: &[f32]) {
        swipeable.on_drag_start();
        for delta in deltas {
            swipeable.on_drag_delta(*delta);
        }
    }

    /// Full gesture: drag, release, then pump until settled.
    pub fn swipe(&mut self, swipeable: &Swipeable, deltas: &[f32]) {
        self.drag(swipeable, deltas);
        swipeable.on_drag_end();
        self.pump_until_idle();
    }
}

impl Default for SwipeTestRule {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for tests that only need temporary access to a
/// `SwipeTestRule`.
pub fn run_test_swipe<R>(f: impl FnOnce(&mut SwipeTestRule) -> R) -> R {
    let mut rule = SwipeTestRule::new();
    f(&mut rule)
}

#[cfg(test)]
#[path = "tests/testing_tests.rs"]
mod tests;
