//! Animation primitives for swipe settling
//!
//! Provides tween and spring curves, a pure frame stepper, and an
//! [`Animator`] that drives a value from A to B on the runtime's frame clock
//! while reporting every sample and remaining cancellable at any frame.

pub mod animation;
pub mod animator;

pub use animation::*;
pub use animator::Animator;

pub mod prelude {
    pub use crate::animation::{
        AnimationSpec, AnimationStep, AnimationType, Easing, FloatAnimation, Lerp, SpringSpec,
    };
    pub use crate::animator::Animator;
}
