//! Debouncing of viewport resizes.

use core::time::Duration;
use std::time::Instant;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct PendingResize {
    width: u32,
    deadline: Instant,
}

/// Per-instance resize debouncer.
///
/// Each call to [`on_resize`](Self::on_resize) replaces the pending resize and
/// restarts the quiet period. [`poll`](Self::poll) releases the latest width
/// once the quiet period has elapsed without another resize.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResizeCoordinator {
    quiet_period: Duration,
    pending: Option<PendingResize>,
}

impl ResizeCoordinator {
    pub const fn new(quiet_period: Duration) -> Self {
        Self {
            quiet_period,
            pending: None,
        }
    }

    /// Record a resize to `width` observed at `now`.
    pub fn on_resize(&mut self, width: u32, now: Instant) {
        let deadline = now.checked_add(self.quiet_period).unwrap_or(now);
        self.pending = Some(PendingResize { width, deadline });
    }

    /// When the pending resize becomes due.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.map(|pending| pending.deadline)
    }

    /// The pending width if its deadline has passed at `now`.
    pub fn poll(&mut self, now: Instant) -> Option<u32> {
        let pending = self.pending?;
        if pending.deadline > now {
            return None;
        }
        self.pending = None;
        Some(pending.width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const QUIET: Duration = Duration::from_millis(150);

    #[test]
    fn fires_once_after_quiet_period() {
        let start = Instant::now();
        let mut coordinator = ResizeCoordinator::new(QUIET);
        coordinator.on_resize(800, start);
        assert_eq!(coordinator.poll(start + Duration::from_millis(149)), None);
        assert_eq!(coordinator.poll(start + QUIET), Some(800));
        assert_eq!(coordinator.poll(start + Duration::from_secs(1)), None);
        assert_eq!(coordinator.next_deadline(), None);
    }

    #[test]
    fn later_resize_restarts_timer_and_wins() {
        let start = Instant::now();
        let mut coordinator = ResizeCoordinator::new(QUIET);
        coordinator.on_resize(500, start);
        coordinator.on_resize(900, start + Duration::from_millis(100));
        assert_eq!(coordinator.poll(start + QUIET), None);
        assert_eq!(
            coordinator.next_deadline(),
            Some(start + Duration::from_millis(250))
        );
        assert_eq!(coordinator.poll(start + Duration::from_millis(250)), Some(900));
    }
}
