//! Per-frame view of the host button.

use kurbo::{Circle, Point};
use peniko::Color;

/// Immutable button state read by one ripple frame.
///
/// The host builds a fresh snapshot for every frame, so geometry changes
/// (e.g. a resize) are picked up without the ripple holding host state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonSnapshot {
    /// Whether the button is currently pressed.
    pub pressed: bool,
    /// The button's circular boundary; also the ripple clip.
    pub bounds: Circle,
    /// Last known touch position, used as the ripple center.
    pub touch: Point,
    /// Fill color of the ripple.
    pub ripple_color: Color,
}

impl ButtonSnapshot {
    /// Create a released snapshot touching the button center.
    pub fn new(center: Point, radius: f64, ripple_color: Color) -> Self {
        Self {
            pressed: false,
            bounds: Circle::new(center, radius),
            touch: center,
            ripple_color,
        }
    }

    /// Set the pressed flag.
    pub fn with_pressed(mut self, pressed: bool) -> Self {
        self.pressed = pressed;
        self
    }

    /// Set the touch position.
    pub fn with_touch(mut self, touch: Point) -> Self {
        self.touch = touch;
        self
    }

    /// Target radius: the button radius scaled by `factor`, truncated.
    ///
    /// Negative or non-finite results saturate to zero.
    pub fn target_radius(&self, factor: f64) -> u32 {
        let target = self.bounds.radius * factor;
        if target.is_finite() && target > 0.0 {
            // `as` saturates at u32::MAX for oversized values.
            target as u32
        } else {
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_radius_is_twice_button_radius() {
        let snapshot = ButtonSnapshot::new(Point::new(28.0, 28.0), 28.0, Color::WHITE);
        assert_eq!(snapshot.target_radius(2.0), 56);
    }

    #[test]
    fn test_target_radius_truncates() {
        let snapshot = ButtonSnapshot::new(Point::ZERO, 10.7, Color::WHITE);
        assert_eq!(snapshot.target_radius(2.0), 21);
    }

    #[test]
    fn test_target_radius_degenerate() {
        let snapshot = ButtonSnapshot::new(Point::ZERO, -4.0, Color::WHITE);
        assert_eq!(snapshot.target_radius(2.0), 0);
        let snapshot = ButtonSnapshot::new(Point::ZERO, f64::NAN, Color::WHITE);
        assert_eq!(snapshot.target_radius(2.0), 0);
    }

    #[test]
    fn test_builders() {
        let snapshot = ButtonSnapshot::new(Point::ZERO, 10.0, Color::WHITE)
            .with_pressed(true)
            .with_touch(Point::new(3.0, 4.0));
        assert!(snapshot.pressed);
        assert_eq!(snapshot.touch, Point::new(3.0, 4.0));
        assert_eq!(snapshot.bounds.center, Point::ZERO);
    }
}
