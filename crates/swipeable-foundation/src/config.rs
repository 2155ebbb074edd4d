//! Construction-time configuration for a swipeable surface.

use crate::action::{resolve_actions, ActionList, SwipeAction};
use crate::action_animation::ActionAnimationConfig;
use crate::background::SwipeBackground;
use crate::gesture_constants::DEFAULT_THRESHOLD;
use crate::haptics::HapticFeedbackConfig;
use crate::progress::ProgressCallback;
use crate::types::{SwipeBehavior, SwipeDirection, SwipeSide};
use std::rc::Rc;
use swipeable_animation::AnimationType;
use swipeable_ui_graphics::{Color, Dp, Shape};

/// Rejected configuration values.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Threshold fractions must be finite and greater than zero.
    InvalidThreshold { value: f32 },
    /// Container widths must be finite and non-negative.
    InvalidContainerWidth { value: f32 },
    /// A gradient background needs at least one color.
    EmptyGradient { side: SwipeSide },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidThreshold { value } => {
                write!(f, "invalid swipe threshold {value}; expected a value in (0, 1]")
            }
            ConfigError::InvalidContainerWidth { value } => {
                write!(f, "invalid container width {value}")
            }
            ConfigError::EmptyGradient { side } => {
                write!(f, "{side:?} background gradient has no colors")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Validated configuration. Immutable once a [`crate::Swipeable`] is built
/// from it.
#[derive(Clone)]
pub struct SwipeableConfig {
    behavior: SwipeBehavior,
    direction: SwipeDirection,
    threshold: f32,
    left_reveal_actions: Vec<SwipeAction>,
    right_reveal_actions: Vec<SwipeAction>,
    left_dismiss_action: Option<SwipeAction>,
    right_dismiss_action: Option<SwipeAction>,
    left_background: SwipeBackground,
    right_background: SwipeBackground,
    shape: Shape,
    action_animation: ActionAnimationConfig,
    animation: AnimationType,
    haptic: HapticFeedbackConfig,
    left_haptic: Option<HapticFeedbackConfig>,
    right_haptic: Option<HapticFeedbackConfig>,
    on_swipe_progress: Option<ProgressCallback>,
    reveal_action_spacing: Option<Dp>,
    reveal_action_padding: Dp,
    dismiss_action_padding: Dp,
    content_label: Option<String>,
}

impl Default for SwipeableConfig {
    fn default() -> Self {
        Self {
            behavior: SwipeBehavior::Dismiss,
            direction: SwipeDirection::Both,
            threshold: DEFAULT_THRESHOLD,
            left_reveal_actions: Vec::new(),
            right_reveal_actions: Vec::new(),
            left_dismiss_action: None,
            right_dismiss_action: None,
            left_background: SwipeBackground::solid(Color::GRAY),
            right_background: SwipeBackground::solid(Color::RED),
            shape: Shape::Rectangle,
            action_animation: ActionAnimationConfig::DEFAULT,
            animation: AnimationType::default(),
            haptic: HapticFeedbackConfig::DEFAULT,
            left_haptic: None,
            right_haptic: None,
            on_swipe_progress: None,
            reveal_action_spacing: None,
            reveal_action_padding: Dp(24.0),
            dismiss_action_padding: Dp(24.0),
            content_label: None,
        }
    }
}

impl SwipeableConfig {
    pub fn builder() -> SwipeableConfigBuilder {
        SwipeableConfigBuilder {
            config: Self::default(),
        }
    }

    pub fn behavior(&self) -> SwipeBehavior {
        self.behavior
    }

    pub fn direction(&self) -> SwipeDirection {
        self.direction
    }

    /// Validated threshold fraction in `(0, 1]`.
    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    pub fn animation(&self) -> AnimationType {
        self.animation
    }

    pub fn action_animation(&self) -> &ActionAnimationConfig {
        &self.action_animation
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn background(&self, side: SwipeSide) -> &SwipeBackground {
        match side {
            SwipeSide::Left => &self.left_background,
            SwipeSide::Right => &self.right_background,
        }
    }

    pub fn dismiss_action(&self, side: SwipeSide) -> Option<&SwipeAction> {
        match side {
            SwipeSide::Left => self.left_dismiss_action.as_ref(),
            SwipeSide::Right => self.right_dismiss_action.as_ref(),
        }
    }

    pub fn reveal_actions(&self, side: SwipeSide) -> &[SwipeAction] {
        match side {
            SwipeSide::Left => &self.left_reveal_actions,
            SwipeSide::Right => &self.right_reveal_actions,
        }
    }

    /// Actions active on `side` under the configured behavior.
    pub fn actions(&self, side: SwipeSide) -> ActionList {
        resolve_actions(
            self.behavior,
            self.dismiss_action(side),
            self.reveal_actions(side),
        )
    }

    pub fn has_actions(&self, side: SwipeSide) -> bool {
        match self.behavior {
            SwipeBehavior::Dismiss => self.dismiss_action(side).is_some(),
            SwipeBehavior::Reveal => !self.reveal_actions(side).is_empty(),
        }
    }

    /// Haptic settings for the side the offset is on. A side-specific config
    /// wins over the shared default.
    pub fn haptic_config_for(&self, offset: f32) -> HapticFeedbackConfig {
        let side_config = match SwipeSide::for_offset(offset) {
            Some(SwipeSide::Left) => self.left_haptic,
            Some(SwipeSide::Right) => self.right_haptic,
            None => None,
        };
        side_config.unwrap_or(self.haptic)
    }

    pub fn progress_observer(&self) -> Option<ProgressCallback> {
        self.on_swipe_progress.clone()
    }

    pub fn reveal_action_spacing(&self) -> Option<Dp> {
        self.reveal_action_spacing
    }

    /// Horizontal padding around the action row for the configured behavior.
    pub fn action_padding(&self) -> Dp {
        match self.behavior {
            SwipeBehavior::Dismiss => self.dismiss_action_padding,
            SwipeBehavior::Reveal => self.reveal_action_padding,
        }
    }

    pub fn content_label(&self) -> Option<&str> {
        self.content_label.as_deref()
    }
}

impl std::fmt::Debug for SwipeableConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SwipeableConfig")
            .field("behavior", &self.behavior)
            .field("direction", &self.direction)
            .field("threshold", &self.threshold)
            .field("left_actions", &self.actions(SwipeSide::Left).len())
            .field("right_actions", &self.actions(SwipeSide::Right).len())
            .field("animation", &self.animation)
            .field("haptic", &self.haptic)
            .field("has_progress_observer", &self.on_swipe_progress.is_some())
            .finish_non_exhaustive()
    }
}

/// Consuming builder for [`SwipeableConfig`].
#[must_use]
pub struct SwipeableConfigBuilder {
    config: SwipeableConfig,
}

impl SwipeableConfigBuilder {
    pub fn behavior(mut self, behavior: SwipeBehavior) -> Self {
        self.config.behavior = behavior;
        self
    }

    pub fn direction(mut self, direction: SwipeDirection) -> Self {
        self.config.direction = direction;
        self
    }

    /// Fraction of the container width the content may travel. Validated by
    /// [`SwipeableConfigBuilder::build`].
    pub fn threshold(mut self, threshold: f32) -> Self {
        self.config.threshold = threshold;
        self
    }

    pub fn left_actions(mut self, actions: impl IntoIterator<Item = SwipeAction>) -> Self {
        self.config.left_reveal_actions = actions.into_iter().collect();
        self
    }

    pub fn right_actions(mut self, actions: impl IntoIterator<Item = SwipeAction>) -> Self {
        self.config.right_reveal_actions = actions.into_iter().collect();
        self
    }

    pub fn left_action(mut self, action: SwipeAction) -> Self {
        self.config.left_dismiss_action = Some(action);
        self
    }

    pub fn right_action(mut self, action: SwipeAction) -> Self {
        self.config.right_dismiss_action = Some(action);
        self
    }

    pub fn left_background(mut self, background: SwipeBackground) -> Self {
        self.config.left_background = background;
        self
    }

    pub fn right_background(mut self, background: SwipeBackground) -> Self {
        self.config.right_background = background;
        self
    }

    pub fn shape(mut self, shape: Shape) -> Self {
        self.config.shape = shape;
        self
    }

    pub fn action_animation(mut self, action_animation: ActionAnimationConfig) -> Self {
        self.config.action_animation = action_animation;
        self
    }

    pub fn animation(mut self, animation: impl Into<AnimationType>) -> Self {
        self.config.animation = animation.into();
        self
    }

    pub fn haptic(mut self, haptic: HapticFeedbackConfig) -> Self {
        self.config.haptic = haptic;
        self
    }

    pub fn left_haptic(mut self, haptic: HapticFeedbackConfig) -> Self {
        self.config.left_haptic = Some(haptic);
        self
    }

    pub fn right_haptic(mut self, haptic: HapticFeedbackConfig) -> Self {
        self.config.right_haptic = Some(haptic);
        self
    }

    pub fn on_swipe_progress(
        mut self,
        observer: impl Fn(f32, Option<SwipeDirection>) + 'static,
    ) -> Self {
        self.config.on_swipe_progress = Some(Rc::new(observer));
        self
    }

    pub fn reveal_action_spacing(mut self, spacing: Dp) -> Self {
        self.config.reveal_action_spacing = Some(spacing);
        self
    }

    pub fn reveal_action_padding(mut self, padding: Dp) -> Self {
        self.config.reveal_action_padding = padding;
        self
    }

    pub fn dismiss_action_padding(mut self, padding: Dp) -> Self {
        self.config.dismiss_action_padding = padding;
        self
    }

    pub fn content_label(mut self, label: impl Into<String>) -> Self {
        self.config.content_label = Some(label.into());
        self
    }

    /// Validate and produce the configuration.
    ///
    /// Thresholds above 1 are clamped to 1; zero, negative or non-finite
    /// thresholds are rejected.
    pub fn build(self) -> Result<SwipeableConfig, ConfigError> {
        let mut config = self.config;
        let threshold = config.threshold;
        if !threshold.is_finite() || threshold <= 0.0 {
            return Err(ConfigError::InvalidThreshold { value: threshold });
        }
        if threshold > 1.0 {
            log::warn!("swipe threshold {threshold} clamped to 1.0");
            config.threshold = 1.0;
        }
        for side in [SwipeSide::Left, SwipeSide::Right] {
            if config.background(side).is_empty_gradient() {
                return Err(ConfigError::EmptyGradient { side });
            }
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::ActionCustomization;
    use crate::haptics::HapticFeedbackMode;
    use swipeable_ui_graphics::Brush;

    fn action(name: &str) -> SwipeAction {
        SwipeAction::new(ActionCustomization::new(name, Color::WHITE, Color::BLUE), || {})
    }

    #[test]
    fn defaults_match_documented_values() {
        let config = SwipeableConfig::builder().build().expect("defaults are valid");
        assert_eq!(config.behavior(), SwipeBehavior::Dismiss);
        assert_eq!(config.direction(), SwipeDirection::Both);
        assert_eq!(config.threshold(), DEFAULT_THRESHOLD);
        assert_eq!(config.haptic_config_for(10.0), HapticFeedbackConfig::DEFAULT);
        assert_eq!(config.action_padding(), Dp(24.0));
        assert_eq!(
            config.background(SwipeSide::Right).brush(1.0),
            Brush::Solid(Color::RED)
        );
    }

    #[test]
    fn rejects_non_positive_and_non_finite_thresholds() {
        for value in [0.0, -0.5, f32::NAN, f32::INFINITY] {
            let err = SwipeableConfig::builder().threshold(value).build().unwrap_err();
            assert!(matches!(err, ConfigError::InvalidThreshold { .. }), "{value}");
        }
    }

    #[test]
    fn clamps_thresholds_above_one() {
        let config = SwipeableConfig::builder().threshold(1.5).build().unwrap();
        assert_eq!(config.threshold(), 1.0);
    }

    #[test]
    fn rejects_empty_gradient_backgrounds() {
        let err = SwipeableConfig::builder()
            .left_background(SwipeBackground::Gradient(Brush::linear_gradient(Vec::new())))
            .build()
            .unwrap_err();
        assert_eq!(err, ConfigError::EmptyGradient { side: SwipeSide::Left });
        assert_eq!(err.to_string(), "Left background gradient has no colors");
    }

    #[test]
    fn side_haptics_override_the_default() {
        let left = HapticFeedbackConfig::DEFAULT.with_mode(HapticFeedbackMode::Continuous);
        let config = SwipeableConfig::builder()
            .haptic(HapticFeedbackConfig::DISABLED)
            .left_haptic(left)
            .build()
            .unwrap();
        assert_eq!(config.haptic_config_for(5.0), left);
        assert_eq!(config.haptic_config_for(-5.0), HapticFeedbackConfig::DISABLED);
        assert_eq!(config.haptic_config_for(0.0), HapticFeedbackConfig::DISABLED);
    }

    #[test]
    fn actions_follow_behavior() {
        let config = SwipeableConfig::builder()
            .left_action(action("archive"))
            .right_actions([action("pin"), action("share")])
            .build()
            .unwrap();
        assert_eq!(config.actions(SwipeSide::Left).len(), 1);
        assert!(!config.has_actions(SwipeSide::Right));

        let reveal = SwipeableConfig::builder()
            .behavior(SwipeBehavior::Reveal)
            .left_action(action("archive"))
            .right_actions([action("pin"), action("share")])
            .build()
            .unwrap();
        assert!(!reveal.has_actions(SwipeSide::Left));
        assert_eq!(reveal.actions(SwipeSide::Right).len(), 2);
    }
}
