use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;
use swipeable_animation::{AnimationSpec, Easing, SpringSpec};
use swipeable_core::{Runtime, RuntimeHandle, FRAME_NANOS_60HZ};
use swipeable_foundation::prelude::*;
use swipeable_foundation::{DebouncedHapticFeedback, HapticError, SwipeProgress};
use swipeable_ui_graphics::{Color, Point};

/// Haptic backend for a desktop without a vibrator: logs every pulse.
struct LoggingHaptics;

impl HapticFeedback for LoggingHaptics {
    fn perform_haptic_feedback(
        &self,
        intensity: HapticFeedbackIntensity,
    ) -> Result<(), HapticError> {
        println!("    * haptic pulse ({intensity:?})");
        Ok(())
    }
}

/// Drives the runtime at 60 Hz until every settle has finished.
struct FrameDriver {
    handle: RuntimeHandle,
    frame: Cell<u64>,
}

impl FrameDriver {
    fn run_until_idle(&self) -> u64 {
        let mut frames = 0;
        while self.handle.has_frame_callbacks() {
            self.frame.set(self.frame.get() + 1);
            self.handle
                .drain_frame_callbacks(self.frame.get() * FRAME_NANOS_60HZ);
            frames += 1;
        }
        frames
    }
}

fn action(icon: &str, container: Color, on_action: impl Fn() + 'static) -> SwipeAction {
    SwipeAction::new(ActionCustomization::new(icon, Color::WHITE, container), on_action)
        .with_label(icon)
}

fn gesture(driver: &FrameDriver, swipeable: &Swipeable, name: &str, deltas: &[f32]) {
    println!("  {name}: deltas {deltas:?}");
    swipeable.on_drag_start();
    for delta in deltas {
        swipeable.on_drag_delta(*delta);
    }
    println!("    released at offset {:.1}", swipeable.offset());
    swipeable.on_drag_end();
    let frames = driver.run_until_idle();
    let state = swipeable.state();
    println!(
        "    settled after {frames} frames: offset {:.1}, revealed {:?}",
        state.offset, state.revealed_side
    );
}

fn print_progress(progress: f32, direction: Option<SwipeDirection>) {
    log::debug!("progress {progress:.2} {direction:?}");
}

fn dismiss_row(driver: &FrameDriver, haptics: Rc<dyn HapticFeedback>) -> anyhow::Result<()> {
    println!("Dismiss row (threshold 0.3, width 1000px)");
    let archived = Rc::new(Cell::new(0));
    let deleted = Rc::new(Cell::new(0));
    let config = {
        let archived = Rc::clone(&archived);
        let deleted = Rc::clone(&deleted);
        SwipeableConfig::builder()
            .left_action(action("archive", Color::GREEN, move || {
                archived.set(archived.get() + 1)
            }))
            .right_action(action("delete", Color::RED, move || {
                deleted.set(deleted.get() + 1)
            }))
            .animation(AnimationSpec::tween(250, Easing::FastOutSlowInEasing))
            .on_swipe_progress(print_progress)
            .content_label("Message from Ada")
            .build()?
    };
    let swipeable = Swipeable::with_haptics(config, driver.handle.clone(), 1000.0, haptics)?;
    println!("  label: {:?}", swipeable.label());
    let geometry = swipeable.geometry();
    println!(
        "  max drag {:.0}px, trigger {:.0}px",
        geometry.max_drag_distance_px, geometry.trigger_threshold_px
    );

    gesture(driver, &swipeable, "short left drag", &[-40.0, -30.0]);
    gesture(driver, &swipeable, "left drag past trigger", &[-50.0, -45.0]);
    gesture(driver, &swipeable, "full right drag", &[150.0, 150.0, 40.0]);
    println!(
        "  archived {} time(s), deleted {} time(s)",
        archived.get(),
        deleted.get()
    );
    Ok(())
}

fn reveal_row(driver: &FrameDriver, haptics: Rc<dyn HapticFeedback>) -> anyhow::Result<()> {
    println!("Reveal row (threshold 0.7, width 1000px, spring settle)");
    let pinned = Rc::new(Cell::new(false));
    let config = {
        let pinned = Rc::clone(&pinned);
        SwipeableConfig::builder()
            .behavior(SwipeBehavior::Reveal)
            .threshold(0.7)
            .left_actions([
                action("pin", Color::BLUE, move || pinned.set(true)),
                action("share", Color::GRAY, || println!("    share tapped")),
            ])
            .left_background(SwipeBackground::linear_gradient(
                vec![Color::BLUE, Color::GREEN],
                Point::ZERO,
                Point::new(f32::INFINITY, 0.0),
            ))
            .animation(SpringSpec::bouncy())
            .action_animation(ActionAnimationConfig::BOUNCE)
            .haptic(HapticFeedbackConfig::PROGRESS_STEPS)
            .build()?
    };
    let swipeable = Swipeable::with_haptics(config, driver.handle.clone(), 1000.0, haptics)?;

    gesture(driver, &swipeable, "drag to 500px", &[200.0, 200.0, 100.0]);
    let layer = swipeable.action_layer(SwipeSide::Left);
    println!(
        "  left layer: {} action(s), progress {:.2}, interactive {}, scale {:.2}",
        layer.actions.len(),
        layer.progress,
        layer.interactive,
        layer.action_transform.scale_x
    );
    println!("  tap pin: {}", swipeable.tap_action(SwipeSide::Left, 0));
    println!("  pinned: {}", pinned.get());

    println!("  rotate to 600px wide");
    swipeable.set_container_width(600.0)?;
    let SwipeProgress { progress, .. } = swipeable.progress();
    println!("    offset {:.1}, progress {progress:.2}", swipeable.offset());

    println!("  tap content: {}", swipeable.on_content_tap());
    let frames = driver.run_until_idle();
    println!(
        "    closed after {frames} frames: offset {:.1}, revealed {}",
        swipeable.offset(),
        swipeable.is_revealed()
    );
    Ok(())
}

fn main() -> anyhow::Result<()> {
    #[cfg(feature = "logging")]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    println!("=== Swipeable gesture engine demo ===");
    println!("Set RUST_LOG=debug to see every state transition.");
    println!();

    let runtime = Runtime::default();
    let driver = FrameDriver {
        handle: runtime.handle(),
        frame: Cell::new(0),
    };
    let haptics: Rc<dyn HapticFeedback> = Rc::new(DebouncedHapticFeedback::with_interval(
        LoggingHaptics,
        Duration::from_millis(5),
    ));

    dismiss_row(&driver, Rc::clone(&haptics))?;
    println!();
    reveal_row(&driver, haptics)?;
    Ok(())
}
