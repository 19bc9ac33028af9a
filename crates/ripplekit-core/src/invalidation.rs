//! Invalidation requests handed to the host's frame scheduler.

use std::time::Duration;

use crate::config::DEFAULT_INVALIDATION_DELAY_MS;

/// A request to re-run the frame routine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvalidationRequest {
    /// Redraw on the next animation tick.
    Immediate,
    /// Redraw once the delay has elapsed.
    Delayed(Duration),
}

impl InvalidationRequest {
    /// Delayed request with the default delay.
    pub fn delayed_default() -> Self {
        Self::Delayed(Duration::from_millis(DEFAULT_INVALIDATION_DELAY_MS))
    }

    /// Hand this request to a scheduler.
    pub fn dispatch<I: Invalidator + ?Sized>(&self, invalidator: &mut I) {
        match *self {
            InvalidationRequest::Immediate => invalidator.invalidate(),
            InvalidationRequest::Delayed(delay) => invalidator.invalidate_after(delay),
        }
    }
}

/// Host scheduler that re-invokes the frame routine.
///
/// Implementations must not call back into the drawer synchronously; the
/// next frame always runs from the host's own loop. Deduplication and
/// cancellation of pending requests are the scheduler's concern.
pub trait Invalidator {
    /// Schedule a redraw on the next tick.
    fn invalidate(&mut self);

    /// Schedule a redraw after `delay`.
    fn invalidate_after(&mut self, delay: Duration);
}

/// Decide which invalidation, if any, follows a frame.
///
/// Evaluated on the post-update radius: an in-progress ripple keeps
/// animating, a finished ripple on a released button gets one delayed
/// repaint so the full-size frame stays visible before the reset. Idle and
/// pressed-and-holding frames request nothing.
pub fn signal(
    pressed: bool,
    radius: u32,
    target: u32,
    delay: Duration,
) -> Option<InvalidationRequest> {
    let finished = radius >= target;
    if radius > 0 && !finished {
        Some(InvalidationRequest::Immediate)
    } else if finished && !pressed {
        Some(InvalidationRequest::Delayed(delay))
    } else {
        None
    }
}
