//! Curves and the frame stepper shared by every settle animation.

/// Trait for types that can be linearly interpolated.
pub trait Lerp {
    fn lerp(&self, target: &Self, fraction: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        self + (target - self) * fraction
    }
}

/// Easing functions for tween animations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    /// Linear interpolation (no easing).
    LinearEasing,
    /// Ease in using cubic curve.
    EaseIn,
    /// Ease out using cubic curve.
    EaseOut,
    /// Ease in and out using cubic curve.
    EaseInOut,
    /// Fast out, slow in (material design standard).
    FastOutSlowInEasing,
    /// Linear out, slow in (material design).
    LinearOutSlowInEasing,
    /// Fast out, linear in (material design).
    FastOutLinearEasing,
}

impl Easing {
    /// Apply the easing function to a linear fraction [0, 1].
    pub fn transform(&self, fraction: f32) -> f32 {
        match self {
            Easing::LinearEasing => fraction,
            Easing::EaseIn => cubic_bezier(0.42, 0.0, 1.0, 1.0, fraction),
            Easing::EaseOut => cubic_bezier(0.0, 0.0, 0.58, 1.0, fraction),
            Easing::EaseInOut => cubic_bezier(0.42, 0.0, 0.58, 1.0, fraction),
            Easing::FastOutSlowInEasing => cubic_bezier(0.4, 0.0, 0.2, 1.0, fraction),
            Easing::LinearOutSlowInEasing => cubic_bezier(0.0, 0.0, 0.2, 1.0, fraction),
            Easing::FastOutLinearEasing => cubic_bezier(0.4, 0.0, 1.0, 1.0, fraction),
        }
    }
}

/// Cubic bezier curve approximation for easing.
fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, fraction: f32) -> f32 {
    if fraction <= 0.0 {
        return 0.0;
    }
    if fraction >= 1.0 {
        return 1.0;
    }

    let cx = 3.0 * x1;
    let bx = 3.0 * (x2 - x1) - cx;
    let ax = 1.0 - cx - bx;

    let cy = 3.0 * y1;
    let by = 3.0 * (y2 - y1) - cy;
    let ay = 1.0 - cy - by;

    fn sample_curve(a: f32, b: f32, c: f32, t: f32) -> f32 {
        ((a * t + b) * t + c) * t
    }

    fn sample_derivative(a: f32, b: f32, c: f32, t: f32) -> f32 {
        (3.0 * a * t + 2.0 * b) * t + c
    }

    // Newton-Raphson for the parametric `t` matching the x fraction.
    let mut t = fraction;
    let mut newton_success = false;
    for _ in 0..8 {
        let x = sample_curve(ax, bx, cx, t) - fraction;
        if x.abs() < 1e-6 {
            newton_success = true;
            break;
        }
        let dx = sample_derivative(ax, bx, cx, t);
        if dx.abs() < 1e-6 {
            break;
        }
        t = (t - x / dx).clamp(0.0, 1.0);
    }

    if !newton_success {
        let mut t0 = 0.0;
        let mut t1 = 1.0;
        t = fraction;
        for _ in 0..16 {
            let x = sample_curve(ax, bx, cx, t);
            let delta = x - fraction;
            if delta.abs() < 1e-6 {
                break;
            }
            if delta > 0.0 {
                t1 = t;
            } else {
                t0 = t;
            }
            t = 0.5 * (t0 + t1);
        }
    }

    sample_curve(ay, by, cy, t)
}

/// Tween specification combining duration and easing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationSpec {
    /// Duration in milliseconds.
    pub duration_millis: u64,
    /// Easing function to apply.
    pub easing: Easing,
    /// Delay before starting animation in milliseconds.
    pub delay_millis: u64,
}

impl AnimationSpec {
    /// Create a tween animation with duration and easing.
    pub fn tween(duration_millis: u64, easing: Easing) -> Self {
        Self {
            duration_millis,
            easing,
            delay_millis: 0,
        }
    }

    /// Create a linear tween animation.
    pub fn linear(duration_millis: u64) -> Self {
        Self::tween(duration_millis, Easing::LinearEasing)
    }

    /// Add a delay before the animation starts.
    pub fn with_delay(mut self, delay_millis: u64) -> Self {
        self.delay_millis = delay_millis;
        self
    }
}

impl Default for AnimationSpec {
    fn default() -> Self {
        Self::tween(300, Easing::FastOutSlowInEasing)
    }
}

/// Spring animation configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringSpec {
    /// Damping ratio. 1.0 = critically damped, < 1.0 = under-damped (bouncy), > 1.0 = over-damped.
    pub damping_ratio: f32,
    /// Stiffness constant. Higher values = faster animation.
    pub stiffness: f32,
    /// Velocity threshold (progress units per second) to stop animation.
    pub velocity_threshold: f32,
    /// Position threshold to stop animation.
    pub position_threshold: f32,
}

impl SpringSpec {
    /// Create a spring with default material design values.
    pub fn default_spring() -> Self {
        Self {
            damping_ratio: 1.0,
            stiffness: 1500.0,
            velocity_threshold: 0.01,
            position_threshold: 0.001,
        }
    }

    /// Create a bouncy spring.
    pub fn bouncy() -> Self {
        Self {
            damping_ratio: 0.5,
            stiffness: 1500.0,
            velocity_threshold: 0.01,
            position_threshold: 0.001,
        }
    }

    /// Create a stiff spring (fast, no bounce).
    pub fn stiff() -> Self {
        Self {
            damping_ratio: 1.0,
            stiffness: 3000.0,
            velocity_threshold: 0.01,
            position_threshold: 0.001,
        }
    }
}

impl Default for SpringSpec {
    fn default() -> Self {
        Self::default_spring()
    }
}

/// Animation type specification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimationType {
    /// Time-based tween animation.
    Tween(AnimationSpec),
    /// Physics-based spring animation.
    Spring(SpringSpec),
}

impl Default for AnimationType {
    fn default() -> Self {
        AnimationType::Tween(AnimationSpec::default())
    }
}

impl From<AnimationSpec> for AnimationType {
    fn from(spec: AnimationSpec) -> Self {
        AnimationType::Tween(spec)
    }
}

impl From<SpringSpec> for AnimationType {
    fn from(spec: SpringSpec) -> Self {
        AnimationType::Spring(spec)
    }
}

/// Outcome of advancing a [`FloatAnimation`] to a frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimationStep {
    Running(f32),
    Finished(f32),
}

impl AnimationStep {
    pub fn value(&self) -> f32 {
        match self {
            AnimationStep::Running(value) | AnimationStep::Finished(value) => *value,
        }
    }

    pub fn is_finished(&self) -> bool {
        matches!(self, AnimationStep::Finished(_))
    }
}

/// Integration step for spring physics (~60fps) to keep the solver stable.
const SPRING_TIMESTEP_SECONDS: f32 = 0.016;

/// Springs that fail to settle are snapped to the target after this long.
const SPRING_MAX_DURATION_NANOS: u64 = 10_000_000_000;

/// Pure stepper that moves a value from `start` to `target` as frames arrive.
///
/// The first frame fixes the animation's time origin, so a stepper created
/// between frames starts exactly at `start`.
#[derive(Debug, Clone)]
pub struct FloatAnimation {
    start: f32,
    target: f32,
    current: f32,
    velocity: f32,
    animation: AnimationType,
    start_time_nanos: Option<u64>,
    last_frame_nanos: Option<u64>,
    finished: bool,
}

impl FloatAnimation {
    pub fn new(start: f32, target: f32, animation: AnimationType) -> Self {
        Self {
            start,
            target,
            current: start,
            velocity: 0.0,
            animation,
            start_time_nanos: None,
            last_frame_nanos: None,
            finished: false,
        }
    }

    pub fn value(&self) -> f32 {
        self.current
    }

    pub fn start(&self) -> f32 {
        self.start
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn animation_type(&self) -> AnimationType {
        self.animation
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Advance to the given frame time and return the sampled value.
    pub fn advance(&mut self, frame_time_nanos: u64) -> AnimationStep {
        if self.finished {
            return AnimationStep::Finished(self.current);
        }
        let start_time = *self.start_time_nanos.get_or_insert(frame_time_nanos);
        let elapsed_nanos = frame_time_nanos.saturating_sub(start_time);

        let step = match self.animation {
            AnimationType::Tween(spec) => self.advance_tween(spec, elapsed_nanos),
            AnimationType::Spring(spec) => self.advance_spring(spec, frame_time_nanos, elapsed_nanos),
        };
        self.last_frame_nanos = Some(frame_time_nanos);
        step
    }

    fn advance_tween(&mut self, spec: AnimationSpec, elapsed_nanos: u64) -> AnimationStep {
        let delay_nanos = spec.delay_millis * 1_000_000;
        if elapsed_nanos < delay_nanos {
            return AnimationStep::Running(self.current);
        }

        let animation_elapsed = elapsed_nanos - delay_nanos;
        let duration_nanos = (spec.duration_millis * 1_000_000).max(1);
        let linear_progress = (animation_elapsed as f32 / duration_nanos as f32).clamp(0.0, 1.0);

        if linear_progress >= 1.0 {
            self.finish()
        } else {
            let progress = spec.easing.transform(linear_progress);
            self.current = self.start.lerp(&self.target, progress);
            AnimationStep::Running(self.current)
        }
    }

    fn advance_spring(
        &mut self,
        spec: SpringSpec,
        frame_time_nanos: u64,
        elapsed_nanos: u64,
    ) -> AnimationStep {
        let distance = self.target - self.start;
        if distance.abs() < f32::EPSILON {
            return self.finish();
        }
        if elapsed_nanos >= SPRING_MAX_DURATION_NANOS {
            return self.finish();
        }

        let previous_frame = self.last_frame_nanos.unwrap_or(frame_time_nanos);
        let dt = frame_time_nanos.saturating_sub(previous_frame) as f32 / 1_000_000_000.0;
        if dt == 0.0 {
            return AnimationStep::Running(self.current);
        }

        // Damped harmonic oscillator in progress space, target at 1.0,
        // integrated with semi-implicit Euler.
        let stiffness = spec.stiffness;
        let damping = 2.0 * spec.damping_ratio * stiffness.sqrt();
        let mut progress = (self.current - self.start) / distance;
        let mut simulated = 0.0f32;
        while simulated < dt {
            let step = SPRING_TIMESTEP_SECONDS.min(dt - simulated);
            let displacement = progress - 1.0;
            let spring_force = -stiffness * displacement - damping * self.velocity;
            self.velocity += spring_force * step;
            progress += self.velocity * step;
            simulated += step;
        }
        self.current = self.start.lerp(&self.target, progress.clamp(-1.0, 2.0));

        let at_rest = self.velocity.abs() < spec.velocity_threshold;
        let near_target = (progress - 1.0).abs() < spec.position_threshold;
        if at_rest && near_target {
            self.finish()
        } else {
            AnimationStep::Running(self.current)
        }
    }

    fn finish(&mut self) -> AnimationStep {
        self.current = self.target;
        self.velocity = 0.0;
        self.finished = true;
        AnimationStep::Finished(self.target)
    }
}

#[cfg(test)]
#[path = "tests/animation_tests.rs"]
mod tests;
