//! Host button: routes touch input and runs the frame loop.

use kurbo::{Circle, Point};
use peniko::Color;
use ripplekit_core::{InvalidationRequest, LogObserver, PointerEvent, TouchTracker};
use ripplekit_render::{RenderResult, RippleDrawer, Surface};
use std::time::Duration;

use crate::config::{AppConfig, ScriptConfig};
use crate::scheduler::FrameScheduler;

/// What one rendered frame looked like.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameRecord {
    /// Virtual time of the frame.
    pub at: Duration,
    pub pressed: bool,
    /// Ripple radius after the update.
    pub radius: u32,
    pub request: Option<InvalidationRequest>,
}

/// One round button with a ripple effect, drawn on `S`.
pub struct Host<S: Surface> {
    tracker: TouchTracker,
    drawer: RippleDrawer,
    surface: S,
    scheduler: FrameScheduler,
    ripple_color: Color,
    frames: Vec<FrameRecord>,
}

impl<S: Surface> Host<S> {
    /// Create a host for the configured button.
    pub fn new(config: &AppConfig, surface: S) -> Self {
        let (x, y) = config.button.center;
        let bounds = Circle::new(Point::new(x, y), config.button.radius);
        Self {
            tracker: TouchTracker::new(bounds),
            drawer: RippleDrawer::new(config.ripple.clone()).with_observer(Box::new(LogObserver)),
            surface,
            scheduler: FrameScheduler::new(Duration::from_millis(config.frame_interval_ms)),
            ripple_color: config.button.ripple_color(),
            frames: Vec::new(),
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn scheduler(&self) -> &FrameScheduler {
        &self.scheduler
    }

    pub fn drawer(&self) -> &RippleDrawer {
        &self.drawer
    }

    pub fn tracker(&self) -> &TouchTracker {
        &self.tracker
    }

    /// Every frame drawn so far.
    pub fn frames(&self) -> &[FrameRecord] {
        &self.frames
    }

    /// Drain the frame record.
    pub fn take_frames(&mut self) -> Vec<FrameRecord> {
        std::mem::take(&mut self.frames)
    }

    /// Change the button boundary (e.g. on resize).
    pub fn set_bounds(&mut self, bounds: Circle) {
        self.tracker.set_bounds(bounds);
    }

    /// Route a pointer event. A press state change redraws right away.
    pub fn handle_pointer_event(&mut self, event: PointerEvent) -> RenderResult<()> {
        if self.tracker.handle_pointer_event(event) {
            log::debug!("Button pressed: {}", self.tracker.is_pressed());
            self.draw_frame()?;
        }
        Ok(())
    }

    /// Draw one frame now and schedule the follow-up.
    pub fn draw_frame(&mut self) -> RenderResult<FrameRecord> {
        let snapshot = self.tracker.snapshot(self.ripple_color);
        self.surface.begin_frame();
        let request = self
            .drawer
            .draw_and_dispatch(&mut self.surface, &snapshot, &mut self.scheduler)?;
        let record = FrameRecord {
            at: self.scheduler.now(),
            pressed: snapshot.pressed,
            radius: self.drawer.radius(),
            request,
        };
        self.frames.push(record);
        Ok(record)
    }

    /// Run scheduled frames due by `deadline`, then move the clock there.
    /// Returns the number of frames drawn.
    pub fn pump_until(&mut self, deadline: Duration) -> RenderResult<usize> {
        let mut drawn = 0;
        while self.scheduler.next_due(deadline).is_some() {
            self.draw_frame()?;
            drawn += 1;
        }
        self.scheduler.advance_to(deadline);
        Ok(drawn)
    }

    /// Play scripted press/release cycles at the button.
    pub fn run_script(&mut self, script: &ScriptConfig) -> RenderResult<()> {
        let center = self.tracker.bounds().center;
        let touch = Point::new(center.x + script.touch_offset.0, center.y + script.touch_offset.1);

        for cycle in 0..script.cycles {
            log::info!("Press cycle {} at {:?}", cycle + 1, self.scheduler.now());
            self.handle_pointer_event(PointerEvent::Down { position: touch })?;
            let release_at = self.scheduler.now() + Duration::from_millis(script.press_ms);
            self.pump_until(release_at)?;

            self.handle_pointer_event(PointerEvent::Up { position: touch })?;
            let next_at = self.scheduler.now() + Duration::from_millis(script.idle_ms);
            self.pump_until(next_at)?;
        }
        Ok(())
    }
}
