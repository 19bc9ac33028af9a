//! RippleKit Render Library
//!
//! Drawing-surface abstraction and the per-frame ripple renderer.
//! The default surface records into a Vello scene.

mod drawer;
mod recording;
mod renderer;
mod surface;

#[cfg(feature = "vello-renderer")]
mod vello_impl;

pub use drawer::RippleDrawer;
pub use recording::{DrawOp, RecordingSurface};
pub use renderer::{render_frame, ripple_brush};
pub use surface::{ClipScope, RenderResult, RendererError, Surface};

#[cfg(feature = "vello-renderer")]
pub use vello_impl::VelloSurface;
