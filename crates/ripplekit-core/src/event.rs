//! Structured ripple events for external observers.

use std::cell::RefCell;
use std::rc::Rc;

use crate::invalidation::InvalidationRequest;
use crate::radius::RipplePhase;

/// Something that happened during a ripple frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RippleEvent {
    /// The radius was advanced (possibly to the same value).
    RadiusUpdated { from: u32, to: u32 },
    /// The derived phase differs from the previous frame.
    PhaseChanged { from: RipplePhase, to: RipplePhase },
    /// The frame ended with an invalidation request.
    InvalidationRequested(InvalidationRequest),
}

/// Receives ripple events. Not required for correctness.
pub trait RippleObserver {
    fn on_event(&mut self, event: &RippleEvent);
}

/// Shared observer, so the host can keep reading what it collects.
impl<T: RippleObserver> RippleObserver for Rc<RefCell<T>> {
    fn on_event(&mut self, event: &RippleEvent) {
        self.borrow_mut().on_event(event);
    }
}

/// Forwards events to the `log` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogObserver;

impl RippleObserver for LogObserver {
    fn on_event(&mut self, event: &RippleEvent) {
        match event {
            RippleEvent::RadiusUpdated { from, to } => {
                log::trace!("Ripple radius updated: {} -> {}", from, to);
            }
            RippleEvent::PhaseChanged { from, to } => {
                log::debug!("Ripple phase changed: {} -> {}", from.name(), to.name());
            }
            RippleEvent::InvalidationRequested(request) => {
                log::trace!("Ripple requested invalidation: {:?}", request);
            }
        }
    }
}

/// Collects every event in order.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Vec<RippleEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded events, oldest first.
    pub fn events(&self) -> &[RippleEvent] {
        &self.events
    }

    /// Phase changes only, as `(from, to)` pairs.
    pub fn phase_changes(&self) -> Vec<(RipplePhase, RipplePhase)> {
        self.events
            .iter()
            .filter_map(|event| match *event {
                RippleEvent::PhaseChanged { from, to } => Some((from, to)),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl RippleObserver for EventLog {
    fn on_event(&mut self, event: &RippleEvent) {
        self.events.push(*event);
    }
}
