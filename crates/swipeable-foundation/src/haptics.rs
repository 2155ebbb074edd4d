//! Haptic feedback: platform capability, per-gesture memory and the firing
//! policy layered on the progress stream.
//!
//! Feedback is best-effort. Backend failures are logged and swallowed so a
//! missing vibrator never aborts a gesture.

use crate::gesture_constants::{
    CONTINUOUS_HAPTIC_STEP, DEFAULT_HAPTIC_DEBOUNCE_MILLIS, PROGRESS_MILESTONES,
};
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;
use web_time::Instant;

/// Strength of a haptic pulse; platforms map it to their own constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HapticFeedbackIntensity {
    Light,
    #[default]
    Medium,
    Heavy,
}

/// When pulses fire during a drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HapticFeedbackMode {
    /// Once per gesture when progress reaches full travel.
    #[default]
    ThresholdOnce,
    /// Every 5% of travel while dragging.
    Continuous,
    /// At 25/50/75/100% of the threshold fraction.
    ProgressSteps,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HapticFeedbackConfig {
    pub enabled: bool,
    pub mode: HapticFeedbackMode,
    pub intensity: HapticFeedbackIntensity,
}

impl HapticFeedbackConfig {
    pub const DEFAULT: HapticFeedbackConfig = HapticFeedbackConfig {
        enabled: true,
        mode: HapticFeedbackMode::ThresholdOnce,
        intensity: HapticFeedbackIntensity::Medium,
    };

    pub const DISABLED: HapticFeedbackConfig = HapticFeedbackConfig {
        enabled: false,
        ..Self::DEFAULT
    };

    pub const CONTINUOUS: HapticFeedbackConfig = HapticFeedbackConfig {
        mode: HapticFeedbackMode::Continuous,
        ..Self::DEFAULT
    };

    pub const PROGRESS_STEPS: HapticFeedbackConfig = HapticFeedbackConfig {
        mode: HapticFeedbackMode::ProgressSteps,
        ..Self::DEFAULT
    };

    pub fn with_intensity(mut self, intensity: HapticFeedbackIntensity) -> Self {
        self.intensity = intensity;
        self
    }

    pub fn with_mode(mut self, mode: HapticFeedbackMode) -> Self {
        self.mode = mode;
        self
    }
}

impl Default for HapticFeedbackConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HapticError {
    /// The platform has no haptic hardware or API.
    Unsupported,
    /// The platform API rejected the request.
    Backend { reason: String },
}

impl std::fmt::Display for HapticError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HapticError::Unsupported => write!(f, "haptic feedback unsupported on this platform"),
            HapticError::Backend { reason } => write!(f, "haptic backend failed: {reason}"),
        }
    }
}

impl std::error::Error for HapticError {}

/// Platform haptic capability.
///
/// Calls are fire-and-forget; the engine never waits for the pulse.
pub trait HapticFeedback {
    fn perform_haptic_feedback(&self, intensity: HapticFeedbackIntensity)
        -> Result<(), HapticError>;
}

impl<H: HapticFeedback + ?Sized> HapticFeedback for Rc<H> {
    fn perform_haptic_feedback(
        &self,
        intensity: HapticFeedbackIntensity,
    ) -> Result<(), HapticError> {
        (**self).perform_haptic_feedback(intensity)
    }
}

/// Backend for desktop and web, where there is nothing to vibrate.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopHapticFeedback;

impl HapticFeedback for NoopHapticFeedback {
    fn perform_haptic_feedback(&self, _: HapticFeedbackIntensity) -> Result<(), HapticError> {
        Ok(())
    }
}

/// Drops pulses that arrive sooner than `min_interval` after the last one
/// that reached the device.
#[derive(Debug)]
pub struct DebouncedHapticFeedback<H> {
    inner: H,
    min_interval: Duration,
    last_pulse: Cell<Option<Instant>>,
}

impl<H: HapticFeedback> DebouncedHapticFeedback<H> {
    pub fn new(inner: H) -> Self {
        Self::with_interval(inner, Duration::from_millis(DEFAULT_HAPTIC_DEBOUNCE_MILLIS))
    }

    pub fn with_interval(inner: H, min_interval: Duration) -> Self {
        Self {
            inner,
            min_interval,
            last_pulse: Cell::new(None),
        }
    }

    pub fn inner(&self) -> &H {
        &self.inner
    }
}

impl<H: HapticFeedback> HapticFeedback for DebouncedHapticFeedback<H> {
    fn perform_haptic_feedback(
        &self,
        intensity: HapticFeedbackIntensity,
    ) -> Result<(), HapticError> {
        let now = Instant::now();
        if let Some(last) = self.last_pulse.get() {
            if now.duration_since(last) < self.min_interval {
                log::trace!("haptic pulse dropped, device still busy");
                return Ok(());
            }
        }
        self.last_pulse.set(Some(now));
        self.inner.perform_haptic_feedback(intensity)
    }
}

/// Haptic bookkeeping for one gesture. Cleared at every drag start and end.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HapticGestureMemory {
    pub threshold_triggered: bool,
    pub last_progress_sample: f32,
    milestones_fired: u8,
}

impl HapticGestureMemory {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn milestone_fired(&self, milestone: u8) -> bool {
        milestone_bit(milestone).is_some_and(|bit| self.milestones_fired & bit != 0)
    }

    /// Marks `milestone` and every lower one, so a drag that skips past a
    /// milestone never fires it later on the way back.
    fn mark_milestone(&mut self, milestone: u8) {
        if let Some(bit) = milestone_bit(milestone) {
            self.milestones_fired |= bit | (bit - 1);
        }
    }

    /// Milestones fired so far, in ascending order.
    pub fn fired_milestones(&self) -> impl Iterator<Item = u8> + '_ {
        PROGRESS_MILESTONES
            .into_iter()
            .filter(|milestone| self.milestone_fired(*milestone))
    }
}

fn milestone_bit(milestone: u8) -> Option<u8> {
    PROGRESS_MILESTONES
        .iter()
        .position(|candidate| *candidate == milestone)
        .map(|index| 1 << index)
}

/// Highest milestone reached at `progress`, with boundaries scaled by the
/// threshold fraction. Returns 0 below the first milestone.
pub fn reached_milestone(progress: f32, threshold_fraction: f32) -> u8 {
    PROGRESS_MILESTONES
        .into_iter()
        .rev()
        .find(|milestone| progress >= threshold_fraction * f32::from(*milestone) / 100.0)
        .unwrap_or(0)
}

/// Decide whether a pulse fires for this progress sample and record it in
/// `memory`. Does not check `enabled` or action availability.
pub fn should_fire(
    mode: HapticFeedbackMode,
    progress: f32,
    threshold_fraction: f32,
    memory: &mut HapticGestureMemory,
) -> bool {
    match mode {
        HapticFeedbackMode::ThresholdOnce => {
            if !memory.threshold_triggered && progress >= 1.0 {
                memory.threshold_triggered = true;
                true
            } else {
                false
            }
        }
        HapticFeedbackMode::Continuous => {
            if (progress - memory.last_progress_sample).abs() >= CONTINUOUS_HAPTIC_STEP
                && progress > 0.0
            {
                memory.last_progress_sample = progress;
                true
            } else {
                false
            }
        }
        HapticFeedbackMode::ProgressSteps => {
            let milestone = reached_milestone(progress, threshold_fraction);
            if milestone > 0 && !memory.milestone_fired(milestone) {
                memory.mark_milestone(milestone);
                true
            } else {
                false
            }
        }
    }
}

/// Fires the platform capability according to the configured mode.
pub struct HapticPolicy {
    feedback: Rc<dyn HapticFeedback>,
    threshold_fraction: f32,
}

impl HapticPolicy {
    pub fn new(feedback: Rc<dyn HapticFeedback>, threshold_fraction: f32) -> Self {
        Self {
            feedback,
            threshold_fraction,
        }
    }

    /// Feed one progress sample and return the pulse to play, if any.
    ///
    /// Nothing fires unless `config.enabled` and the active side has actions.
    /// The backend is not called here; pass the result to [`Self::perform`]
    /// once `memory` is no longer borrowed.
    pub fn decide(
        &self,
        progress: f32,
        config: &HapticFeedbackConfig,
        has_actions: bool,
        memory: &mut HapticGestureMemory,
    ) -> Option<HapticFeedbackIntensity> {
        if !config.enabled || !has_actions {
            return None;
        }
        if !should_fire(config.mode, progress, self.threshold_fraction, memory) {
            return None;
        }
        log::debug!(
            "haptic {:?} pulse at progress {progress:.2} ({:?})",
            config.intensity,
            config.mode
        );
        Some(config.intensity)
    }

    /// Play one pulse on the backend. Failures are logged and dropped.
    pub fn perform(&self, intensity: HapticFeedbackIntensity) {
        if let Err(err) = self.feedback.perform_haptic_feedback(intensity) {
            log::warn!("haptic feedback failed: {err}");
        }
    }
}

impl std::fmt::Debug for HapticPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HapticPolicy")
            .field("threshold_fraction", &self.threshold_fraction)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "tests/haptics_tests.rs"]
mod tests;
