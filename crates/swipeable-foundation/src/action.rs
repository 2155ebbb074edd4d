//! Swipe actions and the rules deciding which of them are live.

use crate::gesture_constants::INTERACTIVE_PROGRESS;
use crate::types::SwipeBehavior;
use smallvec::SmallVec;
use std::rc::Rc;
use swipeable_ui_graphics::{Color, Dp, Shape};

/// Resolved action row for one side. Most rows hold a handful of buttons.
pub type ActionList = SmallVec<[SwipeAction; 4]>;

/// Appearance of an action button. Threaded through to the renderer as-is.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionCustomization {
    /// Renderer-specific icon reference (resource name, path, glyph).
    pub icon: String,
    pub icon_size: Dp,
    pub icon_color: Color,
    pub shape: Shape,
    /// Button size; also its touch target.
    pub size: Dp,
    pub container_color: Color,
}

impl ActionCustomization {
    pub fn new(icon: impl Into<String>, icon_color: Color, container_color: Color) -> Self {
        Self {
            icon: icon.into(),
            icon_size: Dp(24.0),
            icon_color,
            shape: Shape::Circle,
            size: Dp(48.0),
            container_color,
        }
    }

    pub fn with_icon_size(mut self, icon_size: Dp) -> Self {
        self.icon_size = icon_size;
        self
    }

    pub fn with_shape(mut self, shape: Shape) -> Self {
        self.shape = shape;
        self
    }

    pub fn with_size(mut self, size: Dp) -> Self {
        self.size = size;
        self
    }
}

/// One action a swipe can trigger. Cloning shares the callback; identity is
/// by reference, see [`SwipeAction::ptr_eq`].
#[derive(Clone)]
pub struct SwipeAction {
    label: Option<String>,
    customization: ActionCustomization,
    on_action: Rc<dyn Fn()>,
}

impl SwipeAction {
    pub fn new(customization: ActionCustomization, on_action: impl Fn() + 'static) -> Self {
        Self {
            label: None,
            customization,
            on_action: Rc::new(on_action),
        }
    }

    /// Accessibility label announced for the button.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn customization(&self) -> &ActionCustomization {
        &self.customization
    }

    /// Run the action's callback.
    pub fn invoke(&self) {
        (self.on_action)();
    }

    pub fn ptr_eq(&self, other: &SwipeAction) -> bool {
        Rc::ptr_eq(&self.on_action, &other.on_action)
    }
}

impl std::fmt::Debug for SwipeAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SwipeAction")
            .field("label", &self.label)
            .field("icon", &self.customization.icon)
            .finish_non_exhaustive()
    }
}

/// Active actions for one side: the single dismiss action (if any) or the
/// whole reveal row.
pub fn resolve_actions(
    behavior: SwipeBehavior,
    dismiss_action: Option<&SwipeAction>,
    reveal_actions: &[SwipeAction],
) -> ActionList {
    match behavior {
        SwipeBehavior::Dismiss => dismiss_action.into_iter().cloned().collect(),
        SwipeBehavior::Reveal => reveal_actions.iter().cloned().collect(),
    }
}

/// Reveal buttons accept taps only once their side is revealed and the
/// surface has almost finished sliding open. Dismiss buttons never do.
pub fn is_action_interactive(behavior: SwipeBehavior, revealed: bool, progress: f32) -> bool {
    behavior == SwipeBehavior::Reveal && revealed && progress > INTERACTIVE_PROGRESS
}

/// Gap between reveal buttons: the configured spacing, or 16% of the
/// largest button with a 6dp floor.
pub fn reveal_spacing(actions: &[SwipeAction], custom: Option<Dp>) -> Dp {
    custom.unwrap_or_else(|| {
        let largest = actions
            .iter()
            .map(|action| action.customization.size)
            .fold(None, |largest: Option<Dp>, size| {
                Some(largest.map_or(size, |current| current.max(size)))
            })
            .unwrap_or(Dp(48.0));
        (largest * 0.16).max(Dp(6.0))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn action(name: &str) -> SwipeAction {
        SwipeAction::new(ActionCustomization::new(name, Color::WHITE, Color::RED), || {})
            .with_label(name)
    }

    #[test]
    fn dismiss_resolves_to_zero_or_one_action() {
        let delete = action("delete");
        let row = [action("a"), action("b")];
        assert!(resolve_actions(SwipeBehavior::Dismiss, None, &row).is_empty());

        let resolved = resolve_actions(SwipeBehavior::Dismiss, Some(&delete), &row);
        assert_eq!(resolved.len(), 1);
        assert!(resolved[0].ptr_eq(&delete));
    }

    #[test]
    fn reveal_resolves_to_the_configured_row() {
        let delete = action("delete");
        let row = [action("a"), action("b")];
        let resolved = resolve_actions(SwipeBehavior::Reveal, Some(&delete), &row);
        assert_eq!(resolved.len(), 2);
        assert_eq!(resolved[1].label(), Some("b"));
    }

    #[test]
    fn interactivity_requires_reveal_and_nearly_full_progress() {
        assert!(is_action_interactive(SwipeBehavior::Reveal, true, 0.95));
        assert!(!is_action_interactive(SwipeBehavior::Reveal, true, 0.9));
        assert!(!is_action_interactive(SwipeBehavior::Reveal, false, 1.0));
        assert!(!is_action_interactive(SwipeBehavior::Dismiss, true, 1.0));
    }

    #[test]
    fn identity_is_by_reference() {
        let first = action("same");
        let second = action("same");
        assert!(first.ptr_eq(&first.clone()));
        assert!(!first.ptr_eq(&second));
    }

    #[test]
    fn invoke_runs_callback() {
        let count = Rc::new(Cell::new(0));
        let tapped = {
            let count = Rc::clone(&count);
            SwipeAction::new(
                ActionCustomization::new("archive", Color::WHITE, Color::BLUE),
                move || count.set(count.get() + 1),
            )
        };
        tapped.invoke();
        tapped.clone().invoke();
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn spacing_defaults_to_fraction_of_largest_button() {
        let small = SwipeAction::new(
            ActionCustomization::new("s", Color::WHITE, Color::RED).with_size(Dp(20.0)),
            || {},
        );
        let large = SwipeAction::new(
            ActionCustomization::new("l", Color::WHITE, Color::RED).with_size(Dp(100.0)),
            || {},
        );
        let spacing = reveal_spacing(&[small.clone(), large], None);
        assert!((spacing.0 - 16.0).abs() < 1e-4);
        assert_eq!(reveal_spacing(&[small.clone()], None), Dp(6.0));
        assert_eq!(reveal_spacing(&[small], Some(Dp(3.0))), Dp(3.0));
    }
}
