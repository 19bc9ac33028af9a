//! Drawing surface trait abstraction.

use kurbo::Circle;
use peniko::Brush;
use thiserror::Error;

/// Renderer errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RendererError {
    #[error("Clip failed: {0}")]
    Clip(String),
    #[error("Draw failed: {0}")]
    Draw(String),
    #[error("Surface error: {0}")]
    Surface(String),
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RendererError>;

/// Drawing primitives the ripple needs from a rendering backend.
///
/// Implementations can record into a Vello scene, a software canvas, or a
/// test recorder.
pub trait Surface {
    /// Called by the host before each frame. Retained-mode surfaces reset here.
    fn begin_frame(&mut self) {}

    /// Push the current clip/transform state.
    fn save(&mut self) -> RenderResult<()>;

    /// Intersect the current clip with a circle.
    fn clip_circle(&mut self, clip: Circle) -> RenderResult<()>;

    /// Fill a circle with a brush.
    fn fill_circle(&mut self, circle: Circle, brush: &Brush) -> RenderResult<()>;

    /// Pop back to the state of the matching `save`.
    fn restore(&mut self) -> RenderResult<()>;
}

/// Saved surface state that is restored when the scope ends.
///
/// `finish` restores and reports the result; dropping an unfinished scope
/// (an early `?` return) still restores, logging any restore failure so the
/// original error reaches the caller.
pub struct ClipScope<'a, S: Surface + ?Sized> {
    surface: &'a mut S,
    active: bool,
}

impl<'a, S: Surface + ?Sized> ClipScope<'a, S> {
    /// Save the surface state and open a scope over it.
    pub fn new(surface: &'a mut S) -> RenderResult<Self> {
        surface.save()?;
        Ok(Self {
            surface,
            active: true,
        })
    }

    /// Intersect the scope's clip with a circle.
    pub fn clip_circle(&mut self, clip: Circle) -> RenderResult<()> {
        self.surface.clip_circle(clip)
    }

    /// Fill a circle inside the scope.
    pub fn fill_circle(&mut self, circle: Circle, brush: &Brush) -> RenderResult<()> {
        self.surface.fill_circle(circle, brush)
    }

    /// Close the scope, restoring the saved state.
    pub fn finish(mut self) -> RenderResult<()> {
        self.active = false;
        self.surface.restore()
    }
}

impl<S: Surface + ?Sized> Drop for ClipScope<'_, S> {
    fn drop(&mut self) {
        if self.active {
            if let Err(e) = self.surface.restore() {
                log::warn!("Failed to restore surface after aborted frame: {}", e);
            }
        }
    }
}
