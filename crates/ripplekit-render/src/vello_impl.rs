//! Vello-based surface implementation.

use kurbo::{Affine, Circle};
use peniko::{Brush, Fill};
use vello::Scene;

use crate::surface::{RenderResult, RendererError, Surface};

/// Surface that encodes ripple frames into a Vello scene.
///
/// Vello has no clip stack of its own: each `clip_circle` pushes a clip-only
/// layer and `restore` pops every layer pushed since the matching `save`.
pub struct VelloSurface {
    /// The Vello scene being built.
    scene: Scene,
    /// Layers pushed per open `save`.
    saves: Vec<usize>,
}

impl Default for VelloSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl VelloSurface {
    /// Create an empty surface.
    pub fn new() -> Self {
        Self {
            scene: Scene::new(),
            saves: Vec::new(),
        }
    }

    /// Get the built scene for rendering.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Clear the scene for a new frame.
    pub fn reset(&mut self) {
        self.scene.reset();
        self.saves.clear();
    }
}

impl Surface for VelloSurface {
    fn begin_frame(&mut self) {
        self.reset();
    }

    fn save(&mut self) -> RenderResult<()> {
        self.saves.push(0);
        Ok(())
    }

    fn clip_circle(&mut self, clip: Circle) -> RenderResult<()> {
        let Some(layers) = self.saves.last_mut() else {
            return Err(RendererError::Clip("clip outside of a saved scope".to_string()));
        };
        if !(clip.radius.is_finite() && clip.radius >= 0.0) {
            return Err(RendererError::Clip(format!("invalid clip radius {}", clip.radius)));
        }
        self.scene.push_clip_layer(Affine::IDENTITY, &clip);
        *layers += 1;
        Ok(())
    }

    fn fill_circle(&mut self, circle: Circle, brush: &Brush) -> RenderResult<()> {
        self.scene
            .fill(Fill::NonZero, Affine::IDENTITY, brush, None, &circle);
        Ok(())
    }

    fn restore(&mut self) -> RenderResult<()> {
        let layers = self
            .saves
            .pop()
            .ok_or_else(|| RendererError::Surface("restore without matching save".to_string()))?;
        for _ in 0..layers {
            self.scene.pop_layer();
        }
        Ok(())
    }
}
