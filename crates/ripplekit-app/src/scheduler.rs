//! Virtual-clock frame scheduler.

use ripplekit_core::Invalidator;
use std::time::Duration;

/// Default animation tick (~60 fps).
pub const DEFAULT_FRAME_INTERVAL_MS: u64 = 16;

/// Schedules redraws on a simulated clock.
///
/// At most one frame is pending; a new request replaces it. Requests are
/// only recorded here and run from the host loop, never synchronously.
#[derive(Debug, Clone)]
pub struct FrameScheduler {
    /// Current virtual time.
    now: Duration,
    /// Delay of an immediate request.
    frame_interval: Duration,
    /// Due time of the pending frame.
    pending: Option<Duration>,
}

impl Default for FrameScheduler {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_FRAME_INTERVAL_MS))
    }
}

impl FrameScheduler {
    pub fn new(frame_interval: Duration) -> Self {
        Self {
            now: Duration::ZERO,
            frame_interval,
            pending: None,
        }
    }

    /// Current virtual time.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Due time of the pending frame, if any.
    pub fn pending(&self) -> Option<Duration> {
        self.pending
    }

    /// Drop the pending frame.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Move the clock forward. Never moves backwards.
    pub fn advance_to(&mut self, time: Duration) {
        self.now = self.now.max(time);
    }

    /// Take the pending frame if it is due by `deadline`, moving the clock
    /// to its due time.
    pub fn next_due(&mut self, deadline: Duration) -> Option<Duration> {
        match self.pending {
            Some(due) if due <= deadline => {
                self.pending = None;
                self.advance_to(due);
                Some(due)
            }
            _ => None,
        }
    }

    fn schedule(&mut self, due: Duration) {
        if self.pending.is_some() {
            log::trace!("Replacing pending frame with one due at {:?}", due);
        }
        self.pending = Some(due);
    }
}

impl Invalidator for FrameScheduler {
    fn invalidate(&mut self) {
        self.schedule(self.now + self.frame_interval);
    }

    fn invalidate_after(&mut self, delay: Duration) {
        self.schedule(self.now + delay);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_immediate_runs_next_tick() {
        let mut scheduler = FrameScheduler::default();
        scheduler.invalidate();
        assert_eq!(scheduler.pending(), Some(Duration::from_millis(16)));
        assert_eq!(scheduler.next_due(Duration::from_secs(1)), Some(Duration::from_millis(16)));
        assert_eq!(scheduler.now(), Duration::from_millis(16));
        assert_eq!(scheduler.pending(), None);
    }

    #[test]
    fn test_delayed_waits_for_deadline() {
        let mut scheduler = FrameScheduler::default();
        scheduler.invalidate_after(Duration::from_millis(100));
        assert_eq!(scheduler.next_due(Duration::from_millis(50)), None);
        assert_eq!(
            scheduler.next_due(Duration::from_millis(100)),
            Some(Duration::from_millis(100))
        );
    }

    #[test]
    fn test_new_request_replaces_pending() {
        let mut scheduler = FrameScheduler::default();
        scheduler.invalidate_after(Duration::from_millis(100));
        scheduler.invalidate();
        assert_eq!(scheduler.pending(), Some(Duration::from_millis(16)));

        scheduler.cancel();
        assert_eq!(scheduler.pending(), None);
    }

    #[test]
    fn test_clock_is_monotonic() {
        let mut scheduler = FrameScheduler::default();
        scheduler.advance_to(Duration::from_millis(50));
        scheduler.advance_to(Duration::from_millis(20));
        assert_eq!(scheduler.now(), Duration::from_millis(50));
    }
}
