//! Shared gesture constants for swipe handling.
//!
//! Distances are in logical pixels, progress values are fractions of the
//! maximum drag distance.

/// Threshold fraction used when none is configured.
pub const DEFAULT_THRESHOLD: f32 = 0.3;

/// Progress a revealed side must exceed before its buttons accept taps.
///
/// Keeps buttons inert while the reveal animation is still sliding them in.
pub const INTERACTIVE_PROGRESS: f32 = 0.9;

/// Minimum progress change between two continuous-mode haptic pulses.
pub const CONTINUOUS_HAPTIC_STEP: f32 = 0.05;

/// Haptic milestones, in percent of the threshold fraction.
pub const PROGRESS_MILESTONES: [u8; 4] = [25, 50, 75, 100];

/// Minimum spacing between two pulses sent to a haptic device that cannot
/// queue overlapping requests.
pub const DEFAULT_HAPTIC_DEBOUNCE_MILLIS: u64 = 10;
