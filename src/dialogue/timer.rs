//! Single-shot no-response timer
//!
//! The timer itself holds no clock. Arming it yields a ticket that the
//! caller schedules with its host; when the ticket comes back, `fire`
//! accepts it only if it belongs to the live arm cycle.

use std::time::Duration;
use tracing::debug;

/// Proof of one arm cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerTicket(u64);

#[derive(Debug)]
pub struct NoResponseTimer {
    window: Duration,
    epoch: u64,
    armed: bool,
}

impl NoResponseTimer {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            epoch: 0,
            armed: false,
        }
    }

    /// Start a new arm cycle, invalidating any outstanding ticket
    pub fn arm(&mut self) -> TimerTicket {
        self.epoch += 1;
        self.armed = true;
        debug!("No-response timer armed (cycle {})", self.epoch);
        TimerTicket(self.epoch)
    }

    /// Invalidate the current cycle
    pub fn cancel(&mut self) {
        if self.armed {
            debug!("No-response timer cleared (cycle {})", self.epoch);
        }
        self.epoch += 1;
        self.armed = false;
    }

    /// Accept an expired ticket. Returns `true` at most once per arm cycle.
    pub fn fire(&mut self, ticket: TimerTicket) -> bool {
        if !self.armed || ticket.0 != self.epoch {
            return false;
        }
        self.armed = false;
        true
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    pub fn window(&self) -> Duration {
        self.window
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_once_per_cycle() {
        let mut timer = NoResponseTimer::new(Duration::from_secs(10));
        let ticket = timer.arm();
        assert!(timer.is_armed());
        assert!(timer.fire(ticket));
        assert!(!timer.fire(ticket));
        assert!(!timer.is_armed());
    }

    #[test]
    fn test_rearm_invalidates_old_ticket() {
        let mut timer = NoResponseTimer::new(Duration::from_secs(10));
        let old = timer.arm();
        let new = timer.arm();
        assert!(!timer.fire(old));
        assert!(timer.fire(new));
    }

    #[test]
    fn test_cancel_invalidates_ticket() {
        let mut timer = NoResponseTimer::new(Duration::from_secs(10));
        let ticket = timer.arm();
        timer.cancel();
        assert!(!timer.is_armed());
        assert!(!timer.fire(ticket));
    }
}
