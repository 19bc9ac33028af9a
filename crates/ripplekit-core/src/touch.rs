//! Touch tracking for a round button.

use kurbo::{Circle, Point};
use peniko::Color;
use serde::{Deserialize, Serialize};

use crate::snapshot::ButtonSnapshot;

/// Pointer event type for unified mouse/touch handling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    Down { position: Point },
    Up { position: Point },
    Move { position: Point },
}

/// Tracks the pressed flag and the last touch position of one button.
#[derive(Debug, Clone)]
pub struct TouchTracker {
    /// Button boundary used for hit testing.
    bounds: Circle,
    /// Whether a press that started inside the button is active.
    pressed: bool,
    /// Last touch position; starts at the button center.
    last_position: Point,
}

impl TouchTracker {
    /// Create a tracker for a button with the given boundary.
    pub fn new(bounds: Circle) -> Self {
        Self {
            bounds,
            pressed: false,
            last_position: bounds.center,
        }
    }

    /// Update the button boundary (e.g. after a resize).
    pub fn set_bounds(&mut self, bounds: Circle) {
        self.bounds = bounds;
    }

    /// Button boundary.
    pub fn bounds(&self) -> Circle {
        self.bounds
    }

    /// Whether the button is pressed.
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Last known touch position.
    pub fn last_position(&self) -> Point {
        self.last_position
    }

    /// Whether `point` lies inside the button boundary.
    pub fn hit_test(&self, point: Point) -> bool {
        point.distance(self.bounds.center) <= self.bounds.radius
    }

    /// Process a pointer event. Returns true if the pressed flag changed.
    pub fn handle_pointer_event(&mut self, event: PointerEvent) -> bool {
        let was_pressed = self.pressed;
        match event {
            PointerEvent::Down { position } => {
                if self.hit_test(position) {
                    self.pressed = true;
                    self.last_position = position;
                }
            }
            PointerEvent::Move { position } => {
                if self.pressed {
                    self.last_position = position;
                }
            }
            PointerEvent::Up { position } => {
                if self.pressed {
                    self.pressed = false;
                    self.last_position = position;
                }
            }
        }
        was_pressed != self.pressed
    }

    /// Build the frame snapshot for the current state.
    pub fn snapshot(&self, ripple_color: Color) -> ButtonSnapshot {
        ButtonSnapshot {
            pressed: self.pressed,
            bounds: self.bounds,
            touch: self.last_position,
            ripple_color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker() -> TouchTracker {
        TouchTracker::new(Circle::new(Point::new(50.0, 50.0), 20.0))
    }

    #[test]
    fn test_press_inside() {
        let mut touch = tracker();
        assert!(touch.handle_pointer_event(PointerEvent::Down {
            position: Point::new(55.0, 45.0),
        }));
        assert!(touch.is_pressed());
        assert_eq!(touch.last_position(), Point::new(55.0, 45.0));
    }

    #[test]
    fn test_press_outside_is_ignored() {
        let mut touch = tracker();
        assert!(!touch.handle_pointer_event(PointerEvent::Down {
            position: Point::new(100.0, 100.0),
        }));
        assert!(!touch.is_pressed());
        assert_eq!(touch.last_position(), Point::new(50.0, 50.0));
    }

    #[test]
    fn test_move_and_release() {
        let mut touch = tracker();
        touch.handle_pointer_event(PointerEvent::Down {
            position: Point::new(50.0, 50.0),
        });
        assert!(!touch.handle_pointer_event(PointerEvent::Move {
            position: Point::new(60.0, 50.0),
        }));
        assert_eq!(touch.last_position(), Point::new(60.0, 50.0));

        assert!(touch.handle_pointer_event(PointerEvent::Up {
            position: Point::new(61.0, 50.0),
        }));
        assert!(!touch.is_pressed());
        assert_eq!(touch.last_position(), Point::new(61.0, 50.0));
    }

    #[test]
    fn test_move_without_press_keeps_anchor() {
        let mut touch = tracker();
        touch.handle_pointer_event(PointerEvent::Move {
            position: Point::new(60.0, 50.0),
        });
        assert_eq!(touch.last_position(), Point::new(50.0, 50.0));
    }

    #[test]
    fn test_snapshot() {
        let mut touch = tracker();
        touch.handle_pointer_event(PointerEvent::Down {
            position: Point::new(45.0, 50.0),
        });
        let snapshot = touch.snapshot(Color::BLACK);
        assert!(snapshot.pressed);
        assert_eq!(snapshot.touch, Point::new(45.0, 50.0));
        assert_eq!(snapshot.target_radius(2.0), 40);
    }
}
