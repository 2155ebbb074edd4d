use super::*;
use crate::recorders::{ProgressRecorder, RecordingHapticFeedback};
use swipeable_foundation::{
    HapticFeedback, HapticFeedbackIntensity, SwipeBehavior, SwipePhase, SwipeableConfig,
};

#[test]
fn advance_frame_moves_time_by_one_frame() {
    run_test_swipe(|rule| {
        rule.advance_frames(3);
        assert_eq!(rule.frame_time_nanos(), 3 * FRAME_NANOS_60HZ);
    });
}

#[test]
fn pump_until_idle_is_a_noop_without_animations() {
    let mut rule = SwipeTestRule::new();
    assert_eq!(rule.pump_until_idle(), 0);
}

#[test]
fn swipe_settles_surface() {
    let mut rule = SwipeTestRule::new();
    let recorder = ProgressRecorder::new();
    let config = SwipeableConfig::builder()
        .behavior(SwipeBehavior::Reveal)
        .on_swipe_progress(recorder.observer())
        .build()
        .unwrap();
    let swipeable = Swipeable::new(config, rule.runtime_handle(), 500.0).unwrap();

    rule.swipe(&swipeable, &[120.0]);
    assert_eq!(swipeable.phase(), SwipePhase::Idle);
    assert_eq!(swipeable.offset(), 0.0);
    assert_eq!(recorder.last(), Some((0.0, None)));
    assert!(recorder.len() > 1);
}

#[test]
fn recording_backend_records_even_when_failing() {
    let backend = RecordingHapticFeedback::failing();
    assert!(backend
        .perform_haptic_feedback(HapticFeedbackIntensity::Light)
        .is_err());
    assert_eq!(backend.pulses(), vec![HapticFeedbackIntensity::Light]);
    backend.clear();
    assert_eq!(backend.count(), 0);
}
