//! The gesture-to-state engine.
//!
//! [`Swipeable`] owns the offset of one swipeable surface. Drag events move
//! it directly; releases hand it to a settle animation driven by the runtime's
//! frame clock. Every offset change, manual or animated, goes through the
//! progress notifier, and manual changes additionally feed the haptic policy.

use crate::action::{is_action_interactive, reveal_spacing, ActionList};
use crate::action_animation::VisualTransform;
use crate::background::background_alpha;
use crate::config::{ConfigError, SwipeableConfig};
use crate::geometry::SwipeGeometry;
use crate::haptics::{HapticFeedback, HapticGestureMemory, HapticPolicy, NoopHapticFeedback};
use crate::progress::{ProgressNotifier, SwipeProgress};
use crate::state::{resolve_release, GestureState, ReleaseDecision, SwipePhase};
use crate::types::{SwipeBehavior, SwipeSide};
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use swipeable_animation::Animator;
use swipeable_core::RuntimeHandle;
use swipeable_ui_graphics::{Brush, Dp};

struct SwipeableInner {
    config: SwipeableConfig,
    geometry: Cell<SwipeGeometry>,
    state: RefCell<GestureState>,
    haptic_memory: RefCell<HapticGestureMemory>,
    haptics: HapticPolicy,
    notifier: ProgressNotifier,
    settle: Animator,
    runtime: RuntimeHandle,
}

impl SwipeableInner {
    /// Clamp into the current geometry and drop values on a forbidden side.
    fn constrain(&self, offset: f32) -> f32 {
        let clamped = self.geometry.get().clamp(offset);
        if self.config.direction().permits(clamped) {
            clamped
        } else {
            0.0
        }
    }

    fn notify(&self, offset: f32) -> SwipeProgress {
        self.notifier
            .notify(offset, self.geometry.get().max_drag_distance_px)
    }

    fn apply_settle_sample(&self, value: f32) {
        let offset = {
            let mut state = self.state.borrow_mut();
            state.offset = self.constrain(value);
            state.offset
        };
        self.notify(offset);
    }

    fn finish_settle(&self, target: f32) {
        let mut state = self.state.borrow_mut();
        if state.phase == SwipePhase::Settling {
            state.phase = SwipePhase::Idle;
            state.offset = self.constrain(target);
            log::debug!(
                "settled at {:.1} (revealed: {:?})",
                state.offset,
                state.revealed_side
            );
        }
    }
}

/// Headless swipeable surface. Cloning yields another handle to the same
/// surface.
///
/// All methods must be called on the runtime's UI thread.
#[derive(Clone)]
pub struct Swipeable {
    inner: Rc<SwipeableInner>,
}

impl Swipeable {
    /// Build a surface with no haptic backend.
    pub fn new(
        config: SwipeableConfig,
        runtime: RuntimeHandle,
        container_width_px: f32,
    ) -> Result<Self, ConfigError> {
        Self::with_haptics(
            config,
            runtime,
            container_width_px,
            Rc::new(NoopHapticFeedback),
        )
    }

    pub fn with_haptics(
        config: SwipeableConfig,
        runtime: RuntimeHandle,
        container_width_px: f32,
        haptics: Rc<dyn HapticFeedback>,
    ) -> Result<Self, ConfigError> {
        validate_width(container_width_px)?;
        let geometry = SwipeGeometry::resolve(container_width_px, config.threshold());
        log::debug!(
            "swipeable created: {:?} {:?}, max {:.1}px, trigger {:.1}px",
            config.behavior(),
            config.direction(),
            geometry.max_drag_distance_px,
            geometry.trigger_threshold_px
        );
        let inner = SwipeableInner {
            haptics: HapticPolicy::new(haptics, config.threshold()),
            notifier: ProgressNotifier::new(config.progress_observer()),
            settle: Animator::new(runtime.clone()),
            geometry: Cell::new(geometry),
            state: RefCell::new(GestureState::default()),
            haptic_memory: RefCell::new(HapticGestureMemory::default()),
            config,
            runtime,
        };
        Ok(Self {
            inner: Rc::new(inner),
        })
    }

    /// A pointer went down on the content. Cancels any settle in flight,
    /// leaving the offset at the last animated sample.
    pub fn on_drag_start(&self) {
        self.inner.runtime.assert_ui_thread();
        if let Some(sample) = self.inner.settle.cancel() {
            log::debug!("drag start interrupted settle at {sample:.1}");
        }
        self.inner.state.borrow_mut().phase = SwipePhase::Dragging;
        self.inner.haptic_memory.borrow_mut().reset();
    }

    /// Apply a horizontal drag delta in px.
    ///
    /// Deltas that would move the offset onto a side the direction forbids
    /// leave it unchanged. Progress and haptics are evaluated either way.
    pub fn on_drag_delta(&self, delta_px: f32) {
        if !delta_px.is_finite() {
            log::warn!("ignoring non-finite drag delta {delta_px}");
            return;
        }
        if self.phase() != SwipePhase::Dragging {
            log::warn!("drag delta without drag start; starting drag implicitly");
            self.on_drag_start();
        }

        let offset = {
            let mut state = self.inner.state.borrow_mut();
            let candidate = self.inner.geometry.get().clamp(state.offset + delta_px);
            if self.inner.config.direction().permits(candidate) {
                state.offset = candidate;
            }
            state.offset
        };

        let progress = self.inner.notify(offset);
        let config = &self.inner.config;
        let haptic_config = config.haptic_config_for(offset);
        let has_actions = SwipeSide::for_offset(offset).is_some_and(|side| config.has_actions(side));
        let pulse = {
            let mut memory = self.inner.haptic_memory.borrow_mut();
            self.inner
                .haptics
                .decide(progress.progress, &haptic_config, has_actions, &mut memory)
        };
        if let Some(intensity) = pulse {
            self.inner.haptics.perform(intensity);
        }
    }

    /// The pointer was released. Commits or snaps back per the release
    /// decision table and starts the matching settle.
    pub fn on_drag_end(&self) {
        let offset = {
            let state = self.inner.state.borrow();
            if state.phase != SwipePhase::Dragging {
                log::warn!("drag end without drag start ignored");
                return;
            }
            state.offset
        };
        self.inner.haptic_memory.borrow_mut().reset();

        let config = &self.inner.config;
        let geometry = self.inner.geometry.get();
        let decision = resolve_release(
            config.behavior(),
            offset,
            geometry.trigger_threshold_px,
            |side| config.has_actions(side),
        );
        log::debug!(
            "drag released at {offset:.1} (trigger {:.1}): {decision:?}",
            geometry.trigger_threshold_px
        );

        match decision {
            ReleaseDecision::Dismiss(side) => {
                {
                    let mut state = self.inner.state.borrow_mut();
                    state.set_revealed(None);
                    state.phase = SwipePhase::Idle;
                }
                let action = config.dismiss_action(side).cloned();
                // Scheduled on drop so a panicking action still returns the
                // content to rest.
                let _settle = SettleGuard {
                    swipeable: self,
                    target: 0.0,
                };
                if let Some(action) = action {
                    action.invoke();
                }
            }
            ReleaseDecision::Reveal(side) => {
                self.inner.state.borrow_mut().set_revealed(Some(side));
                self.settle_to(side.sign() * geometry.max_drag_distance_px);
            }
            ReleaseDecision::Close => {
                self.inner.state.borrow_mut().set_revealed(None);
                self.settle_to(0.0);
            }
        }
    }

    /// Tap on the content itself. Closes a revealed row; otherwise a no-op.
    pub fn on_content_tap(&self) -> bool {
        let revealed = self.is_revealed();
        if self.inner.config.behavior() == SwipeBehavior::Reveal && revealed {
            self.close()
        } else {
            false
        }
    }

    /// Settle back to rest and clear any reveal. Ignored while a drag owns
    /// the offset. Returns whether a close was started.
    pub fn close(&self) -> bool {
        {
            let mut state = self.inner.state.borrow_mut();
            if state.phase == SwipePhase::Dragging {
                log::debug!("close ignored while dragging");
                return false;
            }
            let open = state.is_revealed || state.offset != 0.0;
            state.set_revealed(None);
            if !open {
                return false;
            }
        }
        self.settle_to(0.0);
        true
    }

    /// Tap on the action at `index` in `side`'s row. Runs it only when the
    /// row is interactive. Returns whether the action ran.
    pub fn tap_action(&self, side: SwipeSide, index: usize) -> bool {
        let layer = self.action_layer(side);
        if !layer.interactive {
            log::debug!("tap on {side:?} action {index} ignored; row not interactive");
            return false;
        }
        match layer.actions.get(index) {
            Some(action) => {
                log::debug!("invoking {side:?} action {index} ({:?})", action.label());
                action.invoke();
                true
            }
            None => false,
        }
    }

    /// Render snapshot for one side's action row.
    pub fn action_layer(&self, side: SwipeSide) -> ActionLayer {
        let config = &self.inner.config;
        let state = self.state();
        let revealed_here = state.revealed_side == Some(side);
        let visible = config.direction().exposes(side)
            && (SwipeSide::for_offset(state.offset) == Some(side) || revealed_here);
        let progress = if visible {
            SwipeProgress::derive(state.offset, self.geometry().max_drag_distance_px).progress
        } else {
            0.0
        };
        let actions = config.actions(side);
        let action_animation = config.action_animation();
        let alpha = background_alpha(
            progress,
            revealed_here,
            action_animation.enable_background_fade,
        );
        ActionLayer {
            side,
            visible,
            progress,
            interactive: visible
                && is_action_interactive(config.behavior(), revealed_here, progress),
            spacing: reveal_spacing(&actions, config.reveal_action_spacing()),
            padding: config.action_padding(),
            background: config.background(side).brush(alpha),
            background_alpha: alpha,
            action_transform: action_animation.transform_at(progress),
            actions,
        }
    }

    /// Recompute geometry for a new container width. A settled reveal stays
    /// fully open at the new extent.
    pub fn set_container_width(&self, container_width_px: f32) -> Result<(), ConfigError> {
        validate_width(container_width_px)?;
        let geometry =
            SwipeGeometry::resolve(container_width_px, self.inner.config.threshold());
        if geometry == self.inner.geometry.get() {
            return Ok(());
        }
        self.inner.geometry.set(geometry);
        log::debug!(
            "container resized to {container_width_px:.1}px: max {:.1}px, trigger {:.1}px",
            geometry.max_drag_distance_px,
            geometry.trigger_threshold_px
        );

        let (offset, phase, revealed_side) = {
            let mut state = self.inner.state.borrow_mut();
            state.offset = self.inner.constrain(state.offset);
            if let (Some(side), SwipePhase::Idle) = (state.revealed_side, state.phase) {
                state.offset = side.sign() * geometry.max_drag_distance_px;
            }
            (state.offset, state.phase, state.revealed_side)
        };
        match (phase, revealed_side) {
            (SwipePhase::Settling, Some(side)) => {
                self.settle_to(side.sign() * geometry.max_drag_distance_px)
            }
            _ => {
                self.inner.notify(offset);
            }
        }
        Ok(())
    }

    fn settle_to(&self, target: f32) {
        let inner = &self.inner;
        let from = {
            let mut state = inner.state.borrow_mut();
            if (state.offset - target).abs() > f32::EPSILON && inner.runtime.is_alive() {
                state.phase = SwipePhase::Settling;
                Some(state.offset)
            } else {
                inner.settle.cancel();
                state.offset = inner.constrain(target);
                state.phase = SwipePhase::Idle;
                None
            }
        };
        let Some(from) = from else {
            // Snapped without animating; observers still see the final offset.
            inner.notify(self.offset());
            return;
        };
        log::debug!("settling {from:.1} -> {target:.1}");

        let on_sample = Rc::downgrade(inner);
        let on_end: Weak<SwipeableInner> = Rc::downgrade(inner);
        inner.settle.animate(
            from,
            target,
            inner.config.animation(),
            move |value| {
                if let Some(inner) = on_sample.upgrade() {
                    inner.apply_settle_sample(value);
                }
            },
            move || {
                if let Some(inner) = on_end.upgrade() {
                    inner.finish_settle(target);
                }
            },
        );
    }

    pub fn state(&self) -> GestureState {
        *self.inner.state.borrow()
    }

    pub fn offset(&self) -> f32 {
        self.inner.state.borrow().offset
    }

    pub fn phase(&self) -> SwipePhase {
        self.inner.state.borrow().phase
    }

    pub fn is_revealed(&self) -> bool {
        self.inner.state.borrow().is_revealed
    }

    pub fn revealed_side(&self) -> Option<SwipeSide> {
        self.inner.state.borrow().revealed_side
    }

    pub fn progress(&self) -> SwipeProgress {
        SwipeProgress::derive(self.offset(), self.geometry().max_drag_distance_px)
    }

    pub fn geometry(&self) -> SwipeGeometry {
        self.inner.geometry.get()
    }

    pub fn haptic_memory(&self) -> HapticGestureMemory {
        *self.inner.haptic_memory.borrow()
    }

    pub fn config(&self) -> &SwipeableConfig {
        &self.inner.config
    }

    /// Accessibility label of the content.
    pub fn label(&self) -> Option<&str> {
        self.inner.config.content_label()
    }
}

impl std::fmt::Debug for Swipeable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Swipeable")
            .field("state", &self.state())
            .field("geometry", &self.geometry())
            .field("settling", &self.inner.settle.is_running())
            .finish_non_exhaustive()
    }
}

/// Starts the return-to-rest settle when dropped.
struct SettleGuard<'a> {
    swipeable: &'a Swipeable,
    target: f32,
}

impl Drop for SettleGuard<'_> {
    fn drop(&mut self) {
        self.swipeable.settle_to(self.target);
    }
}

fn validate_width(container_width_px: f32) -> Result<(), ConfigError> {
    if container_width_px.is_finite() && container_width_px >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidContainerWidth {
            value: container_width_px,
        })
    }
}

/// What a renderer needs to draw one side's action row.
#[derive(Debug, Clone)]
pub struct ActionLayer {
    pub side: SwipeSide,
    /// The content is moved toward this side, or the side is revealed.
    pub visible: bool,
    /// Progress as seen by this side; zero when not visible.
    pub progress: f32,
    pub actions: ActionList,
    /// Buttons accept taps.
    pub interactive: bool,
    pub spacing: Dp,
    pub padding: Dp,
    pub background: Brush,
    pub background_alpha: f32,
    /// Transform for every button in the row at `progress`.
    pub action_transform: VisualTransform,
}

#[cfg(test)]
#[path = "tests/swipeable_tests.rs"]
mod tests;
