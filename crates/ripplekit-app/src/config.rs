//! Application configuration loaded from JSON.

use peniko::Color;
use ripplekit_core::RippleConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::scheduler::DEFAULT_FRAME_INTERVAL_MS;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Geometry and color of the demo button.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ButtonConfig {
    pub center: (f64, f64),
    pub radius: f64,
    /// RGBA ripple color.
    pub ripple_color: [u8; 4],
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self {
            center: (28.0, 28.0),
            radius: 28.0,
            ripple_color: [255, 255, 255, 80],
        }
    }
}

impl ButtonConfig {
    pub fn ripple_color(&self) -> Color {
        let [r, g, b, a] = self.ripple_color;
        Color::from_rgba8(r, g, b, a)
    }
}

/// Scripted press/release cycles driven by the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScriptConfig {
    pub cycles: u32,
    /// How long each press is held.
    pub press_ms: u64,
    /// Time between release and the next press.
    pub idle_ms: u64,
    /// Touch position relative to the button center.
    pub touch_offset: (f64, f64),
}

impl Default for ScriptConfig {
    fn default() -> Self {
        Self {
            cycles: 2,
            press_ms: 240,
            idle_ms: 300,
            touch_offset: (6.0, -4.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub title: String,
    pub frame_interval_ms: u64,
    pub button: ButtonConfig,
    pub script: ScriptConfig,
    pub ripple: RippleConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "RippleKit".to_string(),
            frame_interval_ms: DEFAULT_FRAME_INTERVAL_MS,
            button: ButtonConfig::default(),
            script: ScriptConfig::default(),
            ripple: RippleConfig::default(),
        }
    }
}

impl AppConfig {
    /// Parse a config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load a config from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        Self::from_json(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_partial_json() {
        let json = r#"{"button": {"radius": 40.0}, "ripple": {"radius_increment": 4}}"#;
        let config = AppConfig::from_json(json).unwrap();
        assert!((config.button.radius - 40.0).abs() < f64::EPSILON);
        assert_eq!(config.button.center, (28.0, 28.0));
        assert_eq!(config.ripple.radius_increment, 4);
        assert_eq!(config.ripple.invalidation_delay_ms, 100);
        assert_eq!(config.frame_interval_ms, DEFAULT_FRAME_INTERVAL_MS);
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            AppConfig::from_json("{not json"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"title": "Demo", "script": {{"cycles": 5}}}}"#).unwrap();

        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.title, "Demo");
        assert_eq!(config.script.cycles, 5);
        assert_eq!(config.script.press_ms, 240);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = AppConfig::load(dir.path().join("missing.json"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_ripple_color() {
        let button = ButtonConfig::default();
        assert_eq!(button.ripple_color(), Color::from_rgba8(255, 255, 255, 80));
    }
}
