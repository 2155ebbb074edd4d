//! Frame-driven animator.
//!
//! Drives a [`FloatAnimation`] using the runtime's frame callbacks, reporting
//! every sample to the caller until the animation finishes or is cancelled.

use crate::animation::{AnimationStep, AnimationType, FloatAnimation};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use swipeable_core::{FrameCallbackRegistration, FrameClock, RuntimeHandle};

/// State for the animation currently in flight.
struct AnimatorState {
    animation: FloatAnimation,
    /// Last value handed to the sample callback.
    last_sample: f32,
    /// Identifies which `animate` call owns this state.
    generation: u64,
    /// Current frame callback registration (kept alive to continue animation).
    registration: Option<FrameCallbackRegistration>,
}

type SharedState = Rc<RefCell<Option<AnimatorState>>>;

/// Schedules the next animation frame. Called again from inside each frame
/// callback until the animation finishes or a newer generation replaces it.
fn schedule_next_frame<F, G>(
    state: SharedState,
    frame_clock: FrameClock,
    generation: u64,
    on_sample: F,
    on_end: G,
) where
    F: Fn(f32) + 'static,
    G: FnOnce() + 'static,
{
    let state_for_closure = state.clone();
    let frame_clock_for_closure = frame_clock.clone();

    let registration = frame_clock.with_frame_nanos(move |frame_time_nanos| {
        let step = {
            let mut guard = state_for_closure.borrow_mut();
            let Some(anim_state) = guard.as_mut() else {
                return;
            };
            if anim_state.generation != generation {
                return;
            }
            anim_state.registration = None;
            let step = anim_state.animation.advance(frame_time_nanos);
            anim_state.last_sample = step.value();
            step
        };

        log::trace!("animation sample {:.2} at {frame_time_nanos}ns", step.value());
        on_sample(step.value());

        // The sample callback may have cancelled or restarted the animation.
        let still_current = state_for_closure
            .borrow()
            .as_ref()
            .is_some_and(|anim_state| anim_state.generation == generation);
        if !still_current {
            return;
        }

        match step {
            AnimationStep::Running(_) => schedule_next_frame(
                state_for_closure,
                frame_clock_for_closure,
                generation,
                on_sample,
                on_end,
            ),
            AnimationStep::Finished(value) => {
                state_for_closure.borrow_mut().take();
                log::debug!("animation finished at {value:.2}");
                on_end();
            }
        }
    });

    if let Some(anim_state) = state.borrow_mut().as_mut() {
        if anim_state.generation == generation {
            anim_state.registration = Some(registration);
        }
    }
}

/// Animates a single `f32` from a start value to a target on the frame clock.
///
/// Only one animation runs at a time: starting a new one cancels the previous
/// one without invoking its end callback.
pub struct Animator {
    state: SharedState,
    next_generation: Rc<Cell<u64>>,
    frame_clock: FrameClock,
}

impl Animator {
    /// Creates a new animator bound to the runtime's frame clock.
    pub fn new(runtime: RuntimeHandle) -> Self {
        Self {
            state: Rc::new(RefCell::new(None)),
            next_generation: Rc::new(Cell::new(0)),
            frame_clock: runtime.frame_clock(),
        }
    }

    /// Starts animating from `from` to `to`.
    ///
    /// * `on_sample` - invoked with every sampled value, including the final one
    /// * `on_end` - invoked once after the final sample; never invoked when the
    ///   animation is cancelled
    pub fn animate<F, G>(&self, from: f32, to: f32, animation: AnimationType, on_sample: F, on_end: G)
    where
        F: Fn(f32) + 'static,
        G: FnOnce() + 'static,
    {
        self.cancel();

        let generation = self.next_generation.get() + 1;
        self.next_generation.set(generation);

        log::debug!("animation {generation} started {from:.2} -> {to:.2} ({animation:?})");
        *self.state.borrow_mut() = Some(AnimatorState {
            animation: FloatAnimation::new(from, to, animation),
            last_sample: from,
            generation,
            registration: None,
        });

        schedule_next_frame(
            self.state.clone(),
            self.frame_clock.clone(),
            generation,
            on_sample,
            on_end,
        );
    }

    /// Stops the running animation immediately and returns the last sample it
    /// emitted, or `None` when nothing was running.
    pub fn cancel(&self) -> Option<f32> {
        let state = self.state.borrow_mut().take()?;
        log::debug!(
            "animation {} cancelled at {:.2} (target {:.2})",
            state.generation,
            state.last_sample,
            state.animation.target()
        );
        // Dropping the registration unregisters the pending frame callback.
        drop(state.registration);
        Some(state.last_sample)
    }

    /// Returns true if an animation is currently running.
    pub fn is_running(&self) -> bool {
        self.state.borrow().is_some()
    }

    /// Target of the running animation.
    pub fn target(&self) -> Option<f32> {
        self.state
            .borrow()
            .as_ref()
            .map(|anim_state| anim_state.animation.target())
    }

    /// Last value emitted by the running animation.
    pub fn last_sample(&self) -> Option<f32> {
        self.state
            .borrow()
            .as_ref()
            .map(|anim_state| anim_state.last_sample)
    }
}

impl Clone for Animator {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            next_generation: self.next_generation.clone(),
            frame_clock: self.frame_clock.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::AnimationSpec;
    use std::cell::Cell;
    use swipeable_core::{Runtime, FRAME_NANOS_60HZ};

    fn pump(handle: &RuntimeHandle, frames: u64) {
        for frame in 1..=frames {
            handle.drain_frame_callbacks(frame * FRAME_NANOS_60HZ);
        }
    }

    #[test]
    fn linear_tween_reaches_target_and_reports_end() {
        let runtime = Runtime::default();
        let handle = runtime.handle();
        let animator = Animator::new(handle.clone());
        let samples = Rc::new(RefCell::new(Vec::new()));
        let ended = Rc::new(Cell::new(false));

        {
            let samples = Rc::clone(&samples);
            let ended = Rc::clone(&ended);
            animator.animate(
                0.0,
                100.0,
                AnimationSpec::linear(100).into(),
                move |value| samples.borrow_mut().push(value),
                move || ended.set(true),
            );
        }
        assert!(animator.is_running());

        pump(&handle, 12);

        let samples = samples.borrow();
        assert_eq!(samples.first().copied(), Some(0.0));
        assert_eq!(samples.last().copied(), Some(100.0));
        assert!(samples.windows(2).all(|pair| pair[0] <= pair[1]));
        assert!(ended.get());
        assert!(!animator.is_running());
        assert!(!handle.has_frame_callbacks());
    }

    #[test]
    fn cancel_returns_last_sample_and_skips_end() {
        let runtime = Runtime::default();
        let handle = runtime.handle();
        let animator = Animator::new(handle.clone());
        let last_seen = Rc::new(Cell::new(f32::NAN));
        let ended = Rc::new(Cell::new(false));

        {
            let last_seen = Rc::clone(&last_seen);
            let ended = Rc::clone(&ended);
            animator.animate(
                0.0,
                300.0,
                AnimationSpec::linear(300).into(),
                move |value| last_seen.set(value),
                move || ended.set(true),
            );
        }
        pump(&handle, 4);

        let cancelled_at = animator.cancel();
        assert_eq!(cancelled_at, Some(last_seen.get()));
        assert!(last_seen.get() > 0.0 && last_seen.get() < 300.0);

        pump(&handle, 30);
        assert!(!ended.get());
        assert_eq!(animator.cancel(), None);
    }

    #[test]
    fn restarting_replaces_previous_animation() {
        let runtime = Runtime::default();
        let handle = runtime.handle();
        let animator = Animator::new(handle.clone());
        let first_ended = Rc::new(Cell::new(false));
        let value = Rc::new(Cell::new(0.0f32));

        {
            let first_ended = Rc::clone(&first_ended);
            let value = Rc::clone(&value);
            animator.animate(
                0.0,
                50.0,
                AnimationSpec::linear(100).into(),
                move |sample| value.set(sample),
                move || first_ended.set(true),
            );
        }
        {
            let value = Rc::clone(&value);
            animator.animate(
                0.0,
                -50.0,
                AnimationSpec::linear(100).into(),
                move |sample| value.set(sample),
                || {},
            );
        }
        assert_eq!(animator.target(), Some(-50.0));

        pump(&handle, 12);
        assert!(!first_ended.get());
        assert_eq!(value.get(), -50.0);
    }

    #[test]
    fn spring_settles_on_target() {
        let runtime = Runtime::default();
        let handle = runtime.handle();
        let animator = Animator::new(handle.clone());
        let value = Rc::new(Cell::new(0.0f32));

        {
            let value = Rc::clone(&value);
            animator.animate(
                120.0,
                0.0,
                crate::animation::SpringSpec::default().into(),
                move |sample| value.set(sample),
                || {},
            );
        }
        pump(&handle, 120);

        assert!(!animator.is_running());
        assert_eq!(value.get(), 0.0);
    }
}
