//! Ripple tuning parameters.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Pixels the ripple radius grows by on each pressed frame.
pub const DEFAULT_RADIUS_INCREMENT: u32 = 5;

/// Delay before the final repaint that collapses a finished ripple.
pub const DEFAULT_INVALIDATION_DELAY_MS: u64 = 100;

/// Target radius as a multiple of the button's circle radius.
pub const DEFAULT_TARGET_RADIUS_FACTOR: f64 = 2.0;

/// Configuration for a ripple effect.
///
/// Every field falls back to its default when missing from a serialized
/// document, so partial configs are valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RippleConfig {
    /// Radius growth per frame while pressed.
    pub radius_increment: u32,
    /// Delay of the last invalidation after release, in milliseconds.
    pub invalidation_delay_ms: u64,
    /// Multiplier applied to the button radius to get the target radius.
    pub target_radius_factor: f64,
}

impl Default for RippleConfig {
    fn default() -> Self {
        Self {
            radius_increment: DEFAULT_RADIUS_INCREMENT,
            invalidation_delay_ms: DEFAULT_INVALIDATION_DELAY_MS,
            target_radius_factor: DEFAULT_TARGET_RADIUS_FACTOR,
        }
    }
}

impl RippleConfig {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the radius increment.
    pub fn with_radius_increment(mut self, increment: u32) -> Self {
        self.radius_increment = increment;
        self
    }

    /// Set the delayed invalidation interval in milliseconds.
    pub fn with_invalidation_delay_ms(mut self, delay_ms: u64) -> Self {
        self.invalidation_delay_ms = delay_ms;
        self
    }

    /// Set the target radius factor.
    pub fn with_target_radius_factor(mut self, factor: f64) -> Self {
        self.target_radius_factor = factor;
        self
    }

    /// The delayed invalidation interval.
    pub fn invalidation_delay(&self) -> Duration {
        Duration::from_millis(self.invalidation_delay_ms)
    }
}
