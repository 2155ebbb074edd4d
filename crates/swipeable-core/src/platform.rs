//! Platform abstraction for frame scheduling.
//!
//! The host platform owns the display loop; the runtime only asks it for a
//! frame whenever a callback is pending.

/// Schedules frames on behalf of the runtime.
///
/// Implementations must be safe to use from multiple threads.
pub trait RuntimeScheduler: Send + Sync {
    /// Request that the host schedule a new frame.
    fn schedule_frame(&self);
}

/// Scheduler for hosts that drain frames on their own cadence (and for tests).
#[derive(Default)]
pub struct DefaultScheduler;

impl RuntimeScheduler for DefaultScheduler {
    fn schedule_frame(&self) {}
}
