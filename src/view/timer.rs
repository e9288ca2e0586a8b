//! Cancellable scheduled actions for the view.
//!
//! The table holds at most one action at a time: evaluate the pair after
//! the reveal delay, or hide a mismatched pair after the settle delay.
//! Time is passed in by the caller so nothing here reads a clock.

use std::time::Instant;

use log::warn;

/// Work the view owes the engine once a delay elapses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScheduledAction {
    /// Call `resolve_pending`.
    ResolvePair,
    /// Call `settle`.
    HidePair,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Scheduled {
    action: ScheduledAction,
    due: Instant,
    generation: u64,
}

/// Single-slot timer for [`ScheduledAction`]s.
///
/// Every action is tagged with the engine generation it was scheduled for.
/// An action whose generation no longer matches is dropped when polled.
#[derive(Clone, Debug, Default)]
pub struct SettleTimer {
    slot: Option<Scheduled>,
}

impl SettleTimer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `action`, replacing anything already scheduled.
    pub fn schedule(&mut self, action: ScheduledAction, due: Instant, generation: u64) {
        if let Some(previous) = self.slot.replace(Scheduled {
            action,
            due,
            generation,
        }) {
            warn!("replaced scheduled {:?} before it fired", previous.action);
        }
    }

    /// Cancel the scheduled action, returning it if there was one.
    pub fn cancel(&mut self) -> Option<ScheduledAction> {
        self.slot.take().map(|scheduled| scheduled.action)
    }

    /// Take the scheduled action if it is due at `now`.
    ///
    /// Stale actions (scheduled for another generation) are discarded and
    /// never returned.
    pub fn poll(&mut self, now: Instant, generation: u64) -> Option<ScheduledAction> {
        let scheduled = self.slot?;

        if scheduled.generation != generation {
            warn!(
                "dropping {:?} scheduled for game {} (current game {})",
                scheduled.action, scheduled.generation, generation
            );
            self.slot = None;
            return None;
        }
        if now < scheduled.due {
            return None;
        }

        self.slot = None;
        Some(scheduled.action)
    }

    /// When the scheduled action falls due, if any.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.slot.map(|scheduled| scheduled.due)
    }

    #[must_use]
    pub fn pending(&self) -> Option<ScheduledAction> {
        self.slot.map(|scheduled| scheduled.action)
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.slot.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_fires_only_when_due() {
        let start = Instant::now();
        let mut timer = SettleTimer::new();
        timer.schedule(ScheduledAction::ResolvePair, start + Duration::from_millis(400), 1);

        assert_eq!(timer.poll(start, 1), None);
        assert_eq!(timer.poll(start + Duration::from_millis(399), 1), None);
        assert_eq!(timer.deadline(), Some(start + Duration::from_millis(400)));

        assert_eq!(
            timer.poll(start + Duration::from_millis(400), 1),
            Some(ScheduledAction::ResolvePair)
        );
        assert!(timer.is_idle());
        assert_eq!(timer.poll(start + Duration::from_secs(5), 1), None);
    }

    #[test]
    fn test_cancel() {
        let now = Instant::now();
        let mut timer = SettleTimer::new();
        assert_eq!(timer.cancel(), None);

        timer.schedule(ScheduledAction::HidePair, now, 1);
        assert_eq!(timer.pending(), Some(ScheduledAction::HidePair));
        assert_eq!(timer.cancel(), Some(ScheduledAction::HidePair));
        assert_eq!(timer.poll(now, 1), None);
    }

    #[test]
    fn test_stale_generation_is_dropped() {
        let now = Instant::now();
        let mut timer = SettleTimer::new();
        timer.schedule(ScheduledAction::HidePair, now, 1);

        assert_eq!(timer.poll(now + Duration::from_secs(1), 2), None);
        assert!(timer.is_idle());
    }

    #[test]
    fn test_schedule_replaces() {
        let now = Instant::now();
        let mut timer = SettleTimer::new();
        timer.schedule(ScheduledAction::ResolvePair, now, 1);
        timer.schedule(ScheduledAction::HidePair, now + Duration::from_millis(10), 1);

        assert_eq!(timer.poll(now, 1), None);
        assert_eq!(
            timer.poll(now + Duration::from_millis(10), 1),
            Some(ScheduledAction::HidePair)
        );
    }
}
