//! RippleKit Core Library
//!
//! Platform-agnostic ripple effect logic for round buttons: the radius state
//! machine, the invalidation contract with the host scheduler, and the
//! per-frame button snapshot the renderer reads.

pub mod config;
pub mod event;
pub mod invalidation;
pub mod radius;
pub mod snapshot;
pub mod touch;

pub use config::{
    RippleConfig, DEFAULT_INVALIDATION_DELAY_MS, DEFAULT_RADIUS_INCREMENT,
    DEFAULT_TARGET_RADIUS_FACTOR,
};
pub use event::{EventLog, LogObserver, RippleEvent, RippleObserver};
pub use invalidation::{signal, InvalidationRequest, Invalidator};
pub use radius::{RippleEffect, RipplePhase};
pub use snapshot::ButtonSnapshot;
pub use touch::{PointerEvent, TouchTracker};
