//! Frame runtime for the swipeable gesture engine.
//!
//! Every widget instance lives on one UI timeline. Animations register
//! one-shot frame callbacks with the runtime and the host drains them once
//! per display frame, so drag events and animation ticks interleave but
//! never run concurrently for the same instance.

mod frame_clock;
mod platform;
mod runtime;

pub use frame_clock::{FrameCallbackRegistration, FrameClock};
pub use platform::{DefaultScheduler, RuntimeScheduler};
pub use runtime::{Runtime, RuntimeHandle};

/// Identifier handed out for every registered frame callback.
pub type FrameCallbackId = u64;

/// Nanoseconds between frames on a 60 Hz display.
pub const FRAME_NANOS_60HZ: u64 = 16_666_667;

pub mod prelude {
    pub use crate::frame_clock::{FrameCallbackRegistration, FrameClock};
    pub use crate::platform::{DefaultScheduler, RuntimeScheduler};
    pub use crate::runtime::{Runtime, RuntimeHandle};
    pub use crate::FRAME_NANOS_60HZ;
}

#[cfg(test)]
#[path = "tests/runtime_tests.rs"]
mod tests;
