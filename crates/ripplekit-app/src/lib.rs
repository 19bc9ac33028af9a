//! RippleKit Application
//!
//! Headless host: touch input, a virtual-clock frame scheduler and the
//! ripple drawer wired into a frame loop.

mod config;
mod host;
mod scheduler;

pub use config::{AppConfig, ButtonConfig, ConfigError, ScriptConfig};
pub use host::{FrameRecord, Host};
pub use scheduler::{FrameScheduler, DEFAULT_FRAME_INTERVAL_MS};
