//! Ripple radius state machine.
//!
//! The only stored state is the current radius. Whether the ripple is idle,
//! growing, holding or collapsing is recomputed every frame from the radius,
//! the target radius and the host's pressed flag.

use crate::config::DEFAULT_RADIUS_INCREMENT;

/// Phase of the ripple animation, derived from `(pressed, radius, target)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RipplePhase {
    /// No visible ripple and the button is not pressed.
    Idle,
    /// Pressed and still below the target radius.
    Growing,
    /// Pressed and at or beyond the target radius.
    HoldingAtTarget,
    /// Released with a visible ripple; snaps to target, then to zero.
    CollapsingFinished,
}

impl RipplePhase {
    /// Classify the animation phase. Pure, never cached.
    pub fn classify(pressed: bool, radius: u32, target: u32) -> Self {
        match (pressed, radius) {
            (false, 0) => RipplePhase::Idle,
            (false, _) => RipplePhase::CollapsingFinished,
            (true, r) if r < target => RipplePhase::Growing,
            (true, _) => RipplePhase::HoldingAtTarget,
        }
    }

    /// Get display name for this phase.
    pub fn name(self) -> &'static str {
        match self {
            RipplePhase::Idle => "Idle",
            RipplePhase::Growing => "Growing",
            RipplePhase::HoldingAtTarget => "HoldingAtTarget",
            RipplePhase::CollapsingFinished => "CollapsingFinished",
        }
    }
}

/// Ripple radius for a single button.
///
/// Created once per button and reused across press cycles; a completed
/// collapse resets the radius to zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RippleEffect {
    /// Current radius in device-independent pixels. Zero means no ripple.
    current_radius: u32,
    /// Growth per pressed frame.
    increment: u32,
}

impl Default for RippleEffect {
    fn default() -> Self {
        Self {
            current_radius: 0,
            increment: DEFAULT_RADIUS_INCREMENT,
        }
    }
}

impl RippleEffect {
    /// Create an idle ripple with the default increment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an idle ripple growing by `increment` per frame.
    pub fn with_increment(increment: u32) -> Self {
        Self {
            current_radius: 0,
            increment,
        }
    }

    /// Current radius.
    pub fn radius(&self) -> u32 {
        self.current_radius
    }

    /// Growth per pressed frame.
    pub fn increment(&self) -> u32 {
        self.increment
    }

    /// Drop any visible ripple.
    pub fn reset(&mut self) {
        self.current_radius = 0;
    }

    /// Whether the ripple is strictly between zero and `target`.
    pub fn is_drawing_in_progress(&self, target: u32) -> bool {
        self.current_radius > 0 && !self.is_drawing_finished(target)
    }

    /// Whether the ripple has reached or passed `target`.
    pub fn is_drawing_finished(&self, target: u32) -> bool {
        self.current_radius >= target
    }

    /// Phase of the ripple for the given inputs.
    pub fn phase(&self, pressed: bool, target: u32) -> RipplePhase {
        RipplePhase::classify(pressed, self.current_radius, target)
    }

    /// Advance the radius by one frame and return the new value.
    ///
    /// While pressed the radius grows as long as it is `<= target`, so it can
    /// land one increment past the target before holding. On release an
    /// in-progress ripple snaps to exactly `target`; a finished one resets to
    /// zero. An idle ripple stays idle.
    pub fn advance(&mut self, pressed: bool, target: u32) -> u32 {
        if pressed {
            if self.current_radius <= target {
                self.current_radius = self.current_radius.saturating_add(self.increment);
            }
        } else if self.is_drawing_in_progress(target) {
            self.current_radius = target;
        } else if self.is_drawing_finished(target) {
            self.current_radius = 0;
        }
        self.current_radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_idle() {
        let ripple = RippleEffect::new();
        assert_eq!(ripple.radius(), 0);
        assert_eq!(ripple.phase(false, 20), RipplePhase::Idle);
    }

    #[test]
    fn test_pressed_growth_sequence_with_overshoot() {
        let mut ripple = RippleEffect::new();
        let radii: Vec<u32> = (0..5).map(|_| ripple.advance(true, 20)).collect();
        assert_eq!(radii, vec![5, 10, 15, 20, 25]);

        // Holding: no further growth past the overshoot.
        assert_eq!(ripple.advance(true, 20), 25);
        assert_eq!(ripple.phase(true, 20), RipplePhase::HoldingAtTarget);
    }

    #[test]
    fn test_release_in_progress_snaps_to_target() {
        let mut ripple = RippleEffect::new();
        ripple.advance(true, 20);
        ripple.advance(true, 20);
        assert_eq!(ripple.radius(), 10);

        assert_eq!(ripple.advance(false, 20), 20);
        assert!(ripple.is_drawing_finished(20));
        assert_eq!(ripple.advance(false, 20), 0);
    }

    #[test]
    fn test_release_after_overshoot_resets_directly() {
        let mut ripple = RippleEffect::new();
        for _ in 0..5 {
            ripple.advance(true, 20);
        }
        assert_eq!(ripple.radius(), 25);
        assert_eq!(ripple.advance(false, 20), 0);
    }

    #[test]
    fn test_idle_is_fixed_point() {
        let mut ripple = RippleEffect::new();
        for _ in 0..10 {
            assert_eq!(ripple.advance(false, 20), 0);
        }
    }

    #[test]
    fn test_predicates() {
        let mut ripple = RippleEffect::new();
        assert!(!ripple.is_drawing_in_progress(20));
        assert!(!ripple.is_drawing_finished(20));

        ripple.advance(true, 20);
        assert!(ripple.is_drawing_in_progress(20));
        assert!(!ripple.is_drawing_finished(20));

        for _ in 0..3 {
            ripple.advance(true, 20);
        }
        assert_eq!(ripple.radius(), 20);
        assert!(!ripple.is_drawing_in_progress(20));
        assert!(ripple.is_drawing_finished(20));
    }

    #[test]
    fn test_target_shrinks_between_frames() {
        let mut ripple = RippleEffect::new();
        for _ in 0..4 {
            ripple.advance(true, 40);
        }
        assert_eq!(ripple.radius(), 20);

        // Geometry shrank: the ripple is already past the new target.
        assert_eq!(ripple.advance(true, 10), 20);
        assert_eq!(ripple.advance(false, 10), 0);
    }

    #[test]
    fn test_custom_increment() {
        let mut ripple = RippleEffect::with_increment(7);
        assert_eq!(ripple.advance(true, 20), 7);
        assert_eq!(ripple.advance(true, 20), 14);
        assert_eq!(ripple.increment(), 7);
    }

    #[test]
    fn test_reset() {
        let mut ripple = RippleEffect::new();
        ripple.advance(true, 20);
        ripple.reset();
        assert_eq!(ripple.radius(), 0);
    }

    #[test]
    fn test_classify() {
        assert_eq!(RipplePhase::classify(false, 0, 20), RipplePhase::Idle);
        assert_eq!(RipplePhase::classify(true, 0, 20), RipplePhase::Growing);
        assert_eq!(RipplePhase::classify(true, 15, 20), RipplePhase::Growing);
        assert_eq!(RipplePhase::classify(true, 20, 20), RipplePhase::HoldingAtTarget);
        assert_eq!(RipplePhase::classify(true, 25, 20), RipplePhase::HoldingAtTarget);
        assert_eq!(RipplePhase::classify(false, 10, 20), RipplePhase::CollapsingFinished);
        assert_eq!(RipplePhase::classify(false, 25, 20), RipplePhase::CollapsingFinished);
    }
}
