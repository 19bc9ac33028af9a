//! Single-frame ripple rendering.

use kurbo::{Circle, Point};
use peniko::{Brush, Color};

use crate::surface::{ClipScope, RenderResult, Surface};

/// Reset `brush` to a solid fill of the ripple color.
pub fn ripple_brush(brush: &mut Brush, color: Color) {
    *brush = Brush::Solid(color);
}

/// Draw one ripple frame.
///
/// The clip is intersected with the button boundary so the ripple never
/// paints outside the button, then a circle of `radius` is filled around
/// the touch point. The surface state is restored on every exit path;
/// surface errors are returned unchanged.
pub fn render_frame<S: Surface + ?Sized>(
    surface: &mut S,
    radius: u32,
    touch: Point,
    bounds: Circle,
    brush: &Brush,
) -> RenderResult<()> {
    let mut scope = ClipScope::new(surface)?;
    scope.clip_circle(bounds)?;
    scope.fill_circle(Circle::new(touch, f64::from(radius)), brush)?;
    scope.finish()
}
