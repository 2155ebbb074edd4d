//! Drag extent and trigger point derived from the container width.

/// Resolved drag geometry for one container width.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SwipeGeometry {
    /// Furthest the content may travel from rest, in px.
    pub max_drag_distance_px: f32,
    /// Offset magnitude a release must exceed to commit, in px.
    pub trigger_threshold_px: f32,
}

impl SwipeGeometry {
    /// `max = width * threshold`, `trigger = max * threshold`.
    ///
    /// Both behaviors share the same trigger formula. Negative or non-finite
    /// widths resolve to an empty geometry.
    pub fn resolve(container_width_px: f32, threshold_fraction: f32) -> Self {
        let width = if container_width_px.is_finite() {
            container_width_px.max(0.0)
        } else {
            0.0
        };
        let max_drag_distance_px = width * threshold_fraction;
        Self {
            max_drag_distance_px,
            trigger_threshold_px: max_drag_distance_px * threshold_fraction,
        }
    }

    /// Clamp an offset into `[-max, +max]`.
    pub fn clamp(&self, offset: f32) -> f32 {
        offset.clamp(-self.max_drag_distance_px, self.max_drag_distance_px)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thirty_percent_of_thousand_pixels() {
        let geometry = SwipeGeometry::resolve(1000.0, 0.3);
        assert!((geometry.max_drag_distance_px - 300.0).abs() < 1e-3);
        assert!((geometry.trigger_threshold_px - 90.0).abs() < 1e-3);
    }

    #[test]
    fn seventy_percent_of_thousand_pixels() {
        let geometry = SwipeGeometry::resolve(1000.0, 0.7);
        assert!((geometry.max_drag_distance_px - 700.0).abs() < 1e-3);
        assert!((geometry.trigger_threshold_px - 490.0).abs() < 1e-3);
    }

    #[test]
    fn full_threshold_puts_trigger_at_max() {
        let geometry = SwipeGeometry::resolve(400.0, 1.0);
        assert_eq!(geometry.max_drag_distance_px, 400.0);
        assert_eq!(geometry.trigger_threshold_px, 400.0);
    }

    #[test]
    fn invalid_width_resolves_to_zero() {
        assert_eq!(SwipeGeometry::resolve(-5.0, 0.5), SwipeGeometry::default());
        assert_eq!(SwipeGeometry::resolve(f32::NAN, 0.5), SwipeGeometry::default());
    }

    #[test]
    fn clamp_is_inclusive_at_the_boundary() {
        let geometry = SwipeGeometry::resolve(1000.0, 0.3);
        let max = geometry.max_drag_distance_px;
        assert_eq!(geometry.clamp(max), max);
        assert_eq!(geometry.clamp(max + 0.001), max);
        assert_eq!(geometry.clamp(-max - 50.0), -max);
    }
}
