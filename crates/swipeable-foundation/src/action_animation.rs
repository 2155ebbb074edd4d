//! Per-progress visual transforms for action buttons.
//!
//! The engine never interprets a [`VisualTransform`]; it only evaluates the
//! configured transform as a pure function of progress so renderers and
//! tests see the same numbers.

use std::f32::consts::PI;
use std::ops::RangeInclusive;
use std::rc::Rc;
use swipeable_ui_graphics::{Dp, Point};

/// Visual adjustments to apply to an action button at one progress value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualTransform {
    pub scale_x: f32,
    pub scale_y: f32,
    pub alpha: f32,
    /// Degrees.
    pub rotation_x: f32,
    pub rotation_y: f32,
    pub rotation_z: f32,
    pub translation_x: Dp,
    pub translation_y: Dp,
    /// Pivot as a fraction of the button size.
    pub transform_origin: Point,
    /// Camera distance for 3D rotations, in multiples of the display density.
    pub camera_distance: Option<f32>,
}

impl VisualTransform {
    pub const IDENTITY: VisualTransform = VisualTransform {
        scale_x: 1.0,
        scale_y: 1.0,
        alpha: 1.0,
        rotation_x: 0.0,
        rotation_y: 0.0,
        rotation_z: 0.0,
        translation_x: Dp(0.0),
        translation_y: Dp(0.0),
        transform_origin: Point::new(0.5, 0.5),
        camera_distance: None,
    };

    pub fn uniform_scale(scale: f32) -> Self {
        Self {
            scale_x: scale,
            scale_y: scale,
            ..Self::IDENTITY
        }
    }

    /// Multiply both scale axes.
    pub fn scaled(mut self, scale: f32) -> Self {
        self.scale_x *= scale;
        self.scale_y *= scale;
        self
    }

    /// Multiply the alpha.
    pub fn faded(mut self, alpha: f32) -> Self {
        self.alpha *= alpha;
        self
    }
}

impl Default for VisualTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Built-in button entrance effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltinTransform {
    SlideUp,
    Rotate,
    Bounce,
    Flip,
    Elastic,
    Morph,
    Spring,
    Pendulum,
    Wave,
    Magnetic,
    Origami,
    Materialize,
    Quantum,
}

impl BuiltinTransform {
    pub fn apply(self, progress: f32) -> VisualTransform {
        let p = progress;
        let remaining = 1.0 - p;
        match self {
            BuiltinTransform::SlideUp => VisualTransform {
                translation_y: Dp(50.0 * remaining),
                ..VisualTransform::IDENTITY
            },
            BuiltinTransform::Rotate => VisualTransform {
                rotation_z: remaining * 180.0,
                ..VisualTransform::IDENTITY
            },
            BuiltinTransform::Bounce => {
                let scale = if p < 0.7 {
                    0.3 + (p / 0.7) * 1.2
                } else {
                    1.2 - ((p - 0.7) / 0.3) * 0.2
                };
                VisualTransform::uniform_scale(scale.clamp(0.3, 1.2))
            }
            BuiltinTransform::Flip => VisualTransform {
                rotation_y: remaining * 90.0,
                camera_distance: Some(12.0),
                ..VisualTransform::IDENTITY
            },
            BuiltinTransform::Elastic => {
                let scale = if p < 0.8 {
                    0.2 + (p / 0.8) * 1.3
                } else {
                    1.3 - ((p - 0.8) / 0.2) * 0.3
                };
                VisualTransform::uniform_scale(scale.clamp(0.2, 1.3))
            }
            BuiltinTransform::Morph => VisualTransform {
                rotation_z: remaining * 720.0,
                ..VisualTransform::uniform_scale(0.3 + p * 0.7)
            },
            BuiltinTransform::Spring => {
                let scale = if p < 0.6 {
                    0.1 + (p / 0.6) * 1.4
                } else if p < 0.8 {
                    1.4 - ((p - 0.6) / 0.2) * 0.5
                } else {
                    0.9 + ((p - 0.8) / 0.2) * 0.1
                };
                VisualTransform {
                    translation_y: Dp(30.0 * remaining),
                    ..VisualTransform::uniform_scale(scale.clamp(0.1, 1.4))
                }
            }
            BuiltinTransform::Pendulum => VisualTransform {
                rotation_z: (p * PI * 2.0).sin() * 30.0 * remaining,
                transform_origin: Point::new(0.5, 0.0),
                ..VisualTransform::uniform_scale(0.4 + p * 0.6)
            },
            BuiltinTransform::Wave => VisualTransform {
                scale_x: 0.3 + p * 0.7,
                scale_y: 0.8 + p * 0.2 + (p * PI * 6.0).sin().abs() * 0.1,
                translation_x: Dp((p * PI * 4.0).sin() * 10.0 * remaining),
                translation_y: Dp(40.0 * remaining),
                ..VisualTransform::IDENTITY
            },
            BuiltinTransform::Magnetic => {
                let pull = if p < 0.7 {
                    let t = p / 0.7;
                    80.0 * (1.0 - t * t)
                } else {
                    let t = (p - 0.7) / 0.3;
                    80.0 * (1.0 - t).powi(3)
                };
                VisualTransform {
                    translation_x: Dp(pull),
                    ..VisualTransform::uniform_scale(0.5 + p * 0.5)
                }
            }
            BuiltinTransform::Origami => {
                let fold = p.clamp(0.0, 1.0);
                VisualTransform {
                    rotation_x: (1.0 - fold) * 45.0,
                    rotation_y: (1.0 - fold) * 180.0,
                    camera_distance: Some(8.0),
                    ..VisualTransform::uniform_scale(0.2 + fold * 0.8)
                }
            }
            BuiltinTransform::Materialize => {
                let particle = (p * PI * 8.0).sin() * 5.0 * remaining;
                let scale = if p < 0.3 {
                    0.0
                } else {
                    let t = (p - 0.3) / 0.7;
                    t * t * (3.0 - 2.0 * t)
                };
                VisualTransform {
                    rotation_z: remaining * 360.0,
                    translation_x: Dp((p * PI * 3.0).cos() * particle),
                    translation_y: Dp((p * PI * 3.0).sin() * particle),
                    ..VisualTransform::uniform_scale(scale)
                }
            }
            BuiltinTransform::Quantum => {
                let phase = p * PI * 2.0;
                let glitch = (phase * 10.0).sin() * 0.05 * remaining;
                let base = 0.1 + p * 0.9;
                VisualTransform {
                    scale_x: base * (1.0 + glitch),
                    scale_y: base * (1.0 - glitch),
                    rotation_z: (phase * 3.0).sin() * 180.0 * remaining,
                    translation_x: Dp((phase * 5.0).cos() * 20.0 * remaining),
                    translation_y: Dp((phase * 7.0).sin() * 15.0 * remaining),
                    ..VisualTransform::IDENTITY
                }
            }
        }
    }
}

/// Transform applied on top of the scale/fade ranges.
#[derive(Clone, Default)]
pub enum ActionTransform {
    #[default]
    None,
    Builtin(BuiltinTransform),
    /// Must be a pure function of progress.
    Custom(Rc<dyn Fn(f32) -> VisualTransform>),
}

impl ActionTransform {
    pub fn apply(&self, progress: f32) -> VisualTransform {
        match self {
            ActionTransform::None => VisualTransform::IDENTITY,
            ActionTransform::Builtin(builtin) => builtin.apply(progress),
            ActionTransform::Custom(transform) => transform(progress),
        }
    }
}

impl std::fmt::Debug for ActionTransform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActionTransform::None => write!(f, "None"),
            ActionTransform::Builtin(builtin) => f.debug_tuple("Builtin").field(builtin).finish(),
            ActionTransform::Custom(_) => write!(f, "Custom(..)"),
        }
    }
}

/// How action buttons and backgrounds animate in as progress grows.
#[derive(Debug, Clone)]
pub struct ActionAnimationConfig {
    pub scale_range: RangeInclusive<f32>,
    pub alpha_range: RangeInclusive<f32>,
    pub enable_scale: bool,
    pub enable_fade: bool,
    pub enable_background_fade: bool,
    pub transform: ActionTransform,
}

impl ActionAnimationConfig {
    pub const DEFAULT: ActionAnimationConfig = ActionAnimationConfig {
        scale_range: 0.6..=1.0,
        alpha_range: 0.0..=1.0,
        enable_scale: true,
        enable_fade: true,
        enable_background_fade: true,
        transform: ActionTransform::None,
    };

    pub const DRAMATIC: ActionAnimationConfig = ActionAnimationConfig {
        scale_range: 0.3..=1.0,
        alpha_range: 0.0..=1.0,
        enable_scale: true,
        enable_fade: true,
        enable_background_fade: true,
        transform: ActionTransform::None,
    };

    pub const SLIDE_UP: ActionAnimationConfig = Self::builtin(BuiltinTransform::SlideUp, false, true);

    pub const ROTATE: ActionAnimationConfig = ActionAnimationConfig {
        scale_range: 0.5..=1.0,
        alpha_range: 0.0..=1.0,
        enable_scale: true,
        enable_fade: true,
        enable_background_fade: true,
        transform: ActionTransform::Builtin(BuiltinTransform::Rotate),
    };

    pub const BOUNCE: ActionAnimationConfig = Self::builtin(BuiltinTransform::Bounce, false, true);
    pub const FLIP: ActionAnimationConfig = Self::builtin(BuiltinTransform::Flip, false, true);
    pub const ELASTIC: ActionAnimationConfig = Self::standalone(BuiltinTransform::Elastic);
    pub const MORPH: ActionAnimationConfig = Self::standalone(BuiltinTransform::Morph);
    pub const SPRING: ActionAnimationConfig = Self::standalone(BuiltinTransform::Spring);
    pub const PENDULUM: ActionAnimationConfig = Self::standalone(BuiltinTransform::Pendulum);
    pub const WAVE: ActionAnimationConfig = Self::standalone(BuiltinTransform::Wave);
    pub const MAGNETIC: ActionAnimationConfig = Self::standalone(BuiltinTransform::Magnetic);
    pub const ORIGAMI: ActionAnimationConfig = Self::standalone(BuiltinTransform::Origami);
    pub const MATERIALIZE: ActionAnimationConfig =
        Self::standalone(BuiltinTransform::Materialize);
    pub const QUANTUM: ActionAnimationConfig = Self::standalone(BuiltinTransform::Quantum);

    const fn builtin(transform: BuiltinTransform, enable_scale: bool, enable_fade: bool) -> Self {
        Self {
            scale_range: 0.6..=1.0,
            alpha_range: 0.0..=1.0,
            enable_scale,
            enable_fade,
            enable_background_fade: true,
            transform: ActionTransform::Builtin(transform),
        }
    }

    /// Effects that own scale and alpha entirely and keep the background opaque.
    const fn standalone(transform: BuiltinTransform) -> Self {
        Self {
            scale_range: 0.6..=1.0,
            alpha_range: 0.0..=1.0,
            enable_scale: false,
            enable_fade: false,
            enable_background_fade: false,
            transform: ActionTransform::Builtin(transform),
        }
    }

    /// A fully custom effect with scale, fade and background fade disabled.
    pub fn custom(transform: impl Fn(f32) -> VisualTransform + 'static) -> Self {
        Self {
            scale_range: 1.0..=1.0,
            alpha_range: 1.0..=1.0,
            enable_scale: false,
            enable_fade: false,
            enable_background_fade: false,
            transform: ActionTransform::Custom(Rc::new(transform)),
        }
    }

    /// Transform for a button at `progress`: the configured effect combined
    /// with the scale and alpha ranges.
    pub fn transform_at(&self, progress: f32) -> VisualTransform {
        let mut transform = self.transform.apply(progress);
        if self.enable_scale {
            transform = transform.scaled(interpolate(&self.scale_range, progress));
        }
        if self.enable_fade {
            transform = transform.faded(interpolate(&self.alpha_range, progress));
        }
        transform
    }
}

impl Default for ActionAnimationConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

fn interpolate(range: &RangeInclusive<f32>, progress: f32) -> f32 {
    let (min, max) = (*range.start(), *range.end());
    (min + (max - min) * progress).clamp(min.min(max), max.max(min))
}
