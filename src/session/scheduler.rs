use std::time::Instant;

use crate::config::MODE_RESTART_DELAY;

/// Single-slot deadline for the post-mode-change restart. A new schedule
/// replaces any pending one, so at most one restart can ever be queued.
#[derive(Debug, Default)]
pub struct RestartScheduler {
    pending: Option<Instant>,
}

impl RestartScheduler {
    pub fn schedule(&mut self, now: Instant) {
        self.pending = Some(now + MODE_RESTART_DELAY);
    }

    /// Drop any pending restart. Returns whether one was pending.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// True exactly once, the first poll at or past the deadline.
    pub fn take_due(&mut self, now: Instant) -> bool {
        match self.pending {
            Some(deadline) if now >= deadline => {
                self.pending = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn fires_only_after_the_full_delay() {
        let t0 = Instant::now();
        let mut scheduler = RestartScheduler::default();
        scheduler.schedule(t0);

        assert!(!scheduler.take_due(t0));
        assert!(!scheduler.take_due(t0 + Duration::from_millis(1999)));
        assert!(scheduler.take_due(t0 + MODE_RESTART_DELAY));
    }

    #[test]
    fn fires_at_most_once() {
        let t0 = Instant::now();
        let mut scheduler = RestartScheduler::default();
        scheduler.schedule(t0);

        let late = t0 + MODE_RESTART_DELAY + Duration::from_secs(1);
        assert!(scheduler.take_due(late));
        assert!(!scheduler.take_due(late));
        assert!(!scheduler.is_pending());
    }

    #[test]
    fn a_second_schedule_replaces_the_first() {
        let t0 = Instant::now();
        let mut scheduler = RestartScheduler::default();
        scheduler.schedule(t0);
        scheduler.schedule(t0 + Duration::from_millis(500));

        // The first deadline passes silently, only the second fires.
        assert!(!scheduler.take_due(t0 + MODE_RESTART_DELAY));
        assert!(scheduler.take_due(t0 + Duration::from_millis(500) + MODE_RESTART_DELAY));
        assert!(!scheduler.take_due(t0 + Duration::from_secs(10)));
    }

    #[test]
    fn cancel_clears_the_slot() {
        let t0 = Instant::now();
        let mut scheduler = RestartScheduler::default();

        assert!(!scheduler.cancel());
        scheduler.schedule(t0);
        assert!(scheduler.cancel());
        assert!(!scheduler.take_due(t0 + Duration::from_secs(5)));
    }
}
