//! Per-button ripple drawer: advance, render, signal.

use peniko::{Brush, Color};
use ripplekit_core::{
    signal, ButtonSnapshot, InvalidationRequest, Invalidator, RippleConfig, RippleEffect,
    RippleEvent, RippleObserver, RipplePhase,
};

use crate::renderer::{render_frame, ripple_brush};
use crate::surface::{RenderResult, Surface};

/// Draws the ripple effect of one button frame by frame.
///
/// Each `draw` call advances the radius, renders the clipped circle and
/// returns the invalidation the host should schedule. The radius advance is
/// kept even when the surface fails.
pub struct RippleDrawer {
    /// Radius state machine.
    effect: RippleEffect,
    /// Tuning parameters.
    config: RippleConfig,
    /// Ripple brush, reset and reused every frame.
    brush: Brush,
    /// Phase after the previous frame, for change events.
    last_phase: RipplePhase,
    /// Optional event sink.
    observer: Option<Box<dyn RippleObserver>>,
}

impl Default for RippleDrawer {
    fn default() -> Self {
        Self::new(RippleConfig::default())
    }
}

impl RippleDrawer {
    /// Create an idle drawer.
    pub fn new(config: RippleConfig) -> Self {
        Self {
            effect: RippleEffect::with_increment(config.radius_increment),
            config,
            brush: Brush::Solid(Color::TRANSPARENT),
            last_phase: RipplePhase::Idle,
            observer: None,
        }
    }

    /// Attach an event observer.
    pub fn with_observer(mut self, observer: Box<dyn RippleObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Current ripple radius.
    pub fn radius(&self) -> u32 {
        self.effect.radius()
    }

    /// Target radius for a button.
    pub fn target_radius(&self, button: &ButtonSnapshot) -> u32 {
        button.target_radius(self.config.target_radius_factor)
    }

    /// Phase of the ripple for a button, without advancing.
    pub fn phase(&self, button: &ButtonSnapshot) -> RipplePhase {
        self.effect.phase(button.pressed, self.target_radius(button))
    }

    pub fn is_drawing_in_progress(&self, button: &ButtonSnapshot) -> bool {
        self.effect.is_drawing_in_progress(self.target_radius(button))
    }

    pub fn is_drawing_finished(&self, button: &ButtonSnapshot) -> bool {
        self.effect.is_drawing_finished(self.target_radius(button))
    }

    /// Drop any visible ripple and return to idle.
    pub fn reset(&mut self) {
        self.effect.reset();
        self.last_phase = RipplePhase::Idle;
    }

    /// Draw one frame and return the invalidation to schedule, if any.
    pub fn draw<S: Surface + ?Sized>(
        &mut self,
        surface: &mut S,
        button: &ButtonSnapshot,
    ) -> RenderResult<Option<InvalidationRequest>> {
        let target = self.target_radius(button);
        let from = self.effect.radius();
        let radius = self.effect.advance(button.pressed, target);
        log::trace!("Ripple effect radius updated to: {}", radius);
        self.emit(RippleEvent::RadiusUpdated { from, to: radius });

        let phase = self.effect.phase(button.pressed, target);
        if phase != self.last_phase {
            self.emit(RippleEvent::PhaseChanged {
                from: self.last_phase,
                to: phase,
            });
            self.last_phase = phase;
        }

        ripple_brush(&mut self.brush, button.ripple_color);
        render_frame(surface, radius, button.touch, button.bounds, &self.brush)?;

        let request = signal(
            button.pressed,
            radius,
            target,
            self.config.invalidation_delay(),
        );
        match request {
            Some(InvalidationRequest::Immediate) => {
                log::trace!("Ripple effect drawing in progress, invalidating the button");
            }
            Some(InvalidationRequest::Delayed(_)) => {
                log::trace!("Ripple effect drawing finished, posting the last invalidate");
            }
            None => {}
        }
        if let Some(request) = request {
            self.emit(RippleEvent::InvalidationRequested(request));
        }
        Ok(request)
    }

    /// Draw one frame and hand the resulting request to `invalidator`.
    pub fn draw_and_dispatch<S, I>(
        &mut self,
        surface: &mut S,
        button: &ButtonSnapshot,
        invalidator: &mut I,
    ) -> RenderResult<Option<InvalidationRequest>>
    where
        S: Surface + ?Sized,
        I: Invalidator + ?Sized,
    {
        let request = self.draw(surface, button)?;
        if let Some(request) = request {
            request.dispatch(invalidator);
        }
        Ok(request)
    }

    fn emit(&mut self, event: RippleEvent) {
        if let Some(observer) = self.observer.as_mut() {
            observer.on_event(&event);
        }
    }
}
