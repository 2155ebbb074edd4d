use super::*;

use std::cell::RefCell;

#[derive(Default)]
struct Recorder {
    pulses: RefCell<Vec<HapticFeedbackIntensity>>,
    fail: bool,
}

impl HapticFeedback for Recorder {
    fn perform_haptic_feedback(
        &self,
        intensity: HapticFeedbackIntensity,
    ) -> Result<(), HapticError> {
        self.pulses.borrow_mut().push(intensity);
        if self.fail {
            Err(HapticError::Backend {
                reason: "vibrator busy".into(),
            })
        } else {
            Ok(())
        }
    }
}

fn run(mode: HapticFeedbackMode, threshold: f32, samples: &[f32]) -> Vec<usize> {
    let mut memory = HapticGestureMemory::default();
    samples
        .iter()
        .enumerate()
        .filter(|(_, progress)| should_fire(mode, **progress, threshold, &mut memory))
        .map(|(index, _)| index)
        .collect()
}

#[test]
fn threshold_once_fires_a_single_time_despite_oscillation() {
    let fired = run(
        HapticFeedbackMode::ThresholdOnce,
        0.3,
        &[0.5, 1.0, 0.8, 1.0, 0.2, 1.0],
    );
    assert_eq!(fired, vec![1]);
}

#[test]
fn threshold_once_rearms_after_reset() {
    let mut memory = HapticGestureMemory::default();
    assert!(should_fire(HapticFeedbackMode::ThresholdOnce, 1.0, 0.3, &mut memory));
    memory.reset();
    assert!(should_fire(HapticFeedbackMode::ThresholdOnce, 1.0, 0.3, &mut memory));
}

#[test]
fn continuous_throttles_to_five_percent_steps() {
    let fired = run(
        HapticFeedbackMode::Continuous,
        0.3,
        &[0.01, 0.03, 0.06, 0.08, 0.10, 0.12, 0.20],
    );
    // 0.06 (from 0.0), 0.12 (from 0.06), 0.20 (from 0.12)
    assert_eq!(fired, vec![2, 5, 6]);
}

#[test]
fn continuous_ignores_rest_position() {
    let mut memory = HapticGestureMemory {
        last_progress_sample: 0.5,
        ..HapticGestureMemory::default()
    };
    assert!(!should_fire(HapticFeedbackMode::Continuous, 0.0, 0.3, &mut memory));
    assert_eq!(memory.last_progress_sample, 0.5);
}

#[test]
fn continuous_fires_when_moving_back() {
    let fired = run(HapticFeedbackMode::Continuous, 0.3, &[0.5, 0.44, 0.40]);
    assert_eq!(fired, vec![0, 1]);
}

#[test]
fn milestones_are_scaled_by_threshold() {
    assert_eq!(reached_milestone(0.0, 0.4), 0);
    assert_eq!(reached_milestone(0.09, 0.4), 0);
    assert_eq!(reached_milestone(0.1, 0.4), 25);
    assert_eq!(reached_milestone(0.2, 0.4), 50);
    assert_eq!(reached_milestone(0.3, 0.4), 75);
    assert_eq!(reached_milestone(0.4, 0.4), 100);
    assert_eq!(reached_milestone(1.0, 0.4), 100);
}

#[test]
fn progress_steps_fire_each_milestone_once_in_order() {
    let threshold = 0.4;
    let mut memory = HapticGestureMemory::default();
    let mut fired = Vec::new();
    for progress in [0.05, 0.1, 0.12, 0.2, 0.15, 0.2, 0.3, 0.45, 0.1, 0.5] {
        if should_fire(HapticFeedbackMode::ProgressSteps, progress, threshold, &mut memory) {
            fired.push(reached_milestone(progress, threshold));
        }
    }
    assert_eq!(fired, vec![25, 50, 75, 100]);
    assert_eq!(memory.fired_milestones().collect::<Vec<_>>(), vec![25, 50, 75, 100]);
}

#[test]
fn progress_steps_skip_straight_to_highest_reached() {
    let fired = run(HapticFeedbackMode::ProgressSteps, 0.5, &[0.6]);
    assert_eq!(fired, vec![0]);
    let mut memory = HapticGestureMemory::default();
    should_fire(HapticFeedbackMode::ProgressSteps, 0.6, 0.5, &mut memory);
    assert!(memory.milestone_fired(100));
    assert!(memory.milestone_fired(25));
    assert!(!should_fire(HapticFeedbackMode::ProgressSteps, 0.3, 0.5, &mut memory));
}

#[test]
fn policy_respects_enabled_flag_and_action_presence() {
    let recorder = Rc::new(Recorder::default());
    let policy = HapticPolicy::new(recorder.clone(), 0.3);
    let mut memory = HapticGestureMemory::default();

    assert_eq!(policy.decide(1.0, &HapticFeedbackConfig::DISABLED, true, &mut memory), None);
    assert_eq!(policy.decide(1.0, &HapticFeedbackConfig::DEFAULT, false, &mut memory), None);
    assert!(recorder.pulses.borrow().is_empty());
    assert!(!memory.threshold_triggered);

    let heavy = HapticFeedbackConfig::DEFAULT.with_intensity(HapticFeedbackIntensity::Heavy);
    let pulse = policy.decide(1.0, &heavy, true, &mut memory);
    assert_eq!(pulse, Some(HapticFeedbackIntensity::Heavy));
    assert!(recorder.pulses.borrow().is_empty());
    policy.perform(HapticFeedbackIntensity::Heavy);
    assert_eq!(
        recorder.pulses.borrow().as_slice(),
        &[HapticFeedbackIntensity::Heavy]
    );
}

#[test]
fn policy_swallows_backend_failures() {
    let recorder = Rc::new(Recorder {
        fail: true,
        ..Recorder::default()
    });
    let policy = HapticPolicy::new(recorder.clone(), 0.3);
    let mut memory = HapticGestureMemory::default();

    let pulse = policy.decide(1.0, &HapticFeedbackConfig::DEFAULT, true, &mut memory);
    assert!(memory.threshold_triggered);
    policy.perform(pulse.expect("threshold pulse"));
    assert_eq!(recorder.pulses.borrow().len(), 1);
}

#[test]
fn debounce_drops_back_to_back_pulses() {
    let recorder = Rc::new(Recorder::default());
    let debounced = DebouncedHapticFeedback::with_interval(recorder.clone(), Duration::from_secs(60));

    debounced
        .perform_haptic_feedback(HapticFeedbackIntensity::Light)
        .expect("first pulse reaches device");
    debounced
        .perform_haptic_feedback(HapticFeedbackIntensity::Light)
        .expect("second pulse is dropped silently");

    assert_eq!(recorder.pulses.borrow().len(), 1);
}

#[test]
fn noop_backend_always_succeeds() {
    assert_eq!(
        NoopHapticFeedback.perform_haptic_feedback(HapticFeedbackIntensity::Heavy),
        Ok(())
    );
}

#[test]
fn presets_match_defaults() {
    assert_eq!(HapticFeedbackConfig::default(), HapticFeedbackConfig::DEFAULT);
    assert!(HapticFeedbackConfig::DEFAULT.enabled);
    assert_eq!(HapticFeedbackConfig::DEFAULT.intensity, HapticFeedbackIntensity::Medium);
    assert!(!HapticFeedbackConfig::DISABLED.enabled);
    assert_eq!(HapticFeedbackConfig::CONTINUOUS.mode, HapticFeedbackMode::Continuous);
    assert_eq!(
        HapticFeedbackConfig::PROGRESS_STEPS.mode,
        HapticFeedbackMode::ProgressSteps
    );
}
