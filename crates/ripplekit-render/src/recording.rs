//! Surface that records draw calls, for tests and headless hosts.

use kurbo::Circle;
use peniko::Brush;

use crate::surface::{RenderResult, RendererError, Surface};

/// A recorded surface operation.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Save,
    Clip(Circle),
    Fill { circle: Circle, brush: Brush },
    Restore,
}

/// Records every operation and tracks the save depth.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    ops: Vec<DrawOp>,
    depth: usize,
    fail_clip: bool,
    fail_fill: bool,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every `clip_circle` call fail.
    pub fn with_failing_clip(mut self) -> Self {
        self.fail_clip = true;
        self
    }

    /// Make every `fill_circle` call fail.
    pub fn with_failing_fill(mut self) -> Self {
        self.fail_fill = true;
        self
    }

    /// Recorded operations, oldest first.
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Circles filled so far.
    pub fn fills(&self) -> Vec<Circle> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Fill { circle, .. } => Some(*circle),
                _ => None,
            })
            .collect()
    }

    /// Number of unmatched `save` calls.
    pub fn depth(&self) -> usize {
        self.depth
    }
}

impl Surface for RecordingSurface {
    fn save(&mut self) -> RenderResult<()> {
        self.depth += 1;
        self.ops.push(DrawOp::Save);
        Ok(())
    }

    fn clip_circle(&mut self, clip: Circle) -> RenderResult<()> {
        if self.fail_clip {
            return Err(RendererError::Clip("invalid clip path".to_string()));
        }
        self.ops.push(DrawOp::Clip(clip));
        Ok(())
    }

    fn fill_circle(&mut self, circle: Circle, brush: &Brush) -> RenderResult<()> {
        if self.fail_fill {
            return Err(RendererError::Draw("fill rejected".to_string()));
        }
        self.ops.push(DrawOp::Fill {
            circle,
            brush: brush.clone(),
        });
        Ok(())
    }

    fn restore(&mut self) -> RenderResult<()> {
        if self.depth == 0 {
            return Err(RendererError::Surface("restore without matching save".to_string()));
        }
        self.depth -= 1;
        self.ops.push(DrawOp::Restore);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Point;

    #[test]
    fn test_records_ops() {
        let mut surface = RecordingSurface::new();
        surface.save().unwrap();
        surface.clip_circle(Circle::new(Point::ZERO, 10.0)).unwrap();
        surface.restore().unwrap();
        assert_eq!(surface.ops().len(), 3);
        assert_eq!(surface.depth(), 0);
    }

    #[test]
    fn test_unbalanced_restore_fails() {
        let mut surface = RecordingSurface::new();
        assert!(matches!(surface.restore(), Err(RendererError::Surface(_))));
    }
}
