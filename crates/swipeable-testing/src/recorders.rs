use std::cell::{Cell, RefCell};
use std::rc::Rc;
use swipeable_foundation::{
    HapticError, HapticFeedback, HapticFeedbackIntensity, ProgressCallback, SwipeDirection,
};

/// Haptic backend that records every pulse it is asked for.
#[derive(Debug, Default)]
pub struct RecordingHapticFeedback {
    pulses: RefCell<Vec<HapticFeedbackIntensity>>,
    failing: Cell<bool>,
}

impl RecordingHapticFeedback {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// A backend whose every call records the pulse and then fails.
    pub fn failing() -> Rc<Self> {
        let recorder = Self::default();
        recorder.failing.set(true);
        Rc::new(recorder)
    }

    pub fn pulses(&self) -> Vec<HapticFeedbackIntensity> {
        self.pulses.borrow().clone()
    }

    pub fn count(&self) -> usize {
        self.pulses.borrow().len()
    }

    pub fn clear(&self) {
        self.pulses.borrow_mut().clear();
    }
}

impl HapticFeedback for RecordingHapticFeedback {
    fn perform_haptic_feedback(
        &self,
        intensity: HapticFeedbackIntensity,
    ) -> Result<(), HapticError> {
        self.pulses.borrow_mut().push(intensity);
        if self.failing.get() {
            Err(HapticError::Backend {
                reason: "recording backend set to fail".into(),
            })
        } else {
            Ok(())
        }
    }
}

/// Collects every `(progress, direction)` pair a surface reports.
#[derive(Clone, Default)]
pub struct ProgressRecorder {
    samples: Rc<RefCell<Vec<(f32, Option<SwipeDirection>)>>>,
}

impl ProgressRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Observer to install with `SwipeableConfigBuilder::on_swipe_progress`.
    pub fn observer(&self) -> impl Fn(f32, Option<SwipeDirection>) + 'static {
        let samples = Rc::clone(&self.samples);
        move |progress, direction| samples.borrow_mut().push((progress, direction))
    }

    pub fn callback(&self) -> ProgressCallback {
        Rc::new(self.observer())
    }

    pub fn samples(&self) -> Vec<(f32, Option<SwipeDirection>)> {
        self.samples.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.samples.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.borrow().is_empty()
    }

    pub fn last(&self) -> Option<(f32, Option<SwipeDirection>)> {
        self.samples.borrow().last().copied()
    }

    pub fn clear(&self) {
        self.samples.borrow_mut().clear();
    }
}

impl std::fmt::Debug for ProgressRecorder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProgressRecorder")
            .field("samples", &self.samples.borrow().len())
            .finish()
    }
}
