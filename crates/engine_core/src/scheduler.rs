//! One-shot deferred events keyed on the simulated clock.

use std::time::Duration;

/// Handle for a scheduled event, used to cancel it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

#[derive(Debug)]
struct Scheduled<E> {
    id: TimerId,
    due: Duration,
    event: E,
}

/// Queue of events waiting for the clock to reach their due time.
///
/// Events come out in due order; ties go to the one scheduled first.
#[derive(Debug)]
pub struct Scheduler<E> {
    next_id: u64,
    pending: Vec<Scheduled<E>>,
}

impl<E> Default for Scheduler<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Scheduler<E> {
    pub fn new() -> Self {
        Self {
            next_id: 0,
            pending: Vec::new(),
        }
    }

    /// Schedule `event` to fire `delay` after `now`.
    pub fn schedule(&mut self, now: Duration, delay: Duration, event: E) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.pending.push(Scheduled {
            id,
            due: now.saturating_add(delay),
            event,
        });
        id
    }

    /// Cancel a pending event. Returns false if it already fired or was cancelled.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.pending.len();
        self.pending.retain(|s| s.id != id);
        let removed = self.pending.len() != before;
        if removed {
            log::trace!("Cancelled timer {:?}", id);
        }
        removed
    }

    pub fn is_pending(&self, id: TimerId) -> bool {
        self.pending.iter().any(|s| s.id == id)
    }

    /// Remove and return the earliest event due at or before `now`.
    ///
    /// Pop one at a time so that an event which cancels another due in the
    /// same frame takes effect before the other is delivered.
    pub fn pop_due(&mut self, now: Duration) -> Option<(TimerId, E)> {
        let index = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, s)| s.due <= now)
            .min_by_key(|(_, s)| (s.due, s.id.0))
            .map(|(i, _)| i)?;
        let scheduled = self.pending.remove(index);
        Some((scheduled.id, scheduled.event))
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Drop every pending event.
    pub fn clear(&mut self) {
        self.pending.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secs(s: u64) -> Duration {
        Duration::from_secs(s)
    }

    #[test]
    fn nothing_fires_before_due() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(secs(0), secs(3), "advance");
        assert!(scheduler.pop_due(secs(2)).is_none());
        assert_eq!(scheduler.len(), 1);
    }

    #[test]
    fn fires_in_due_order_then_schedule_order() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(secs(0), secs(5), "late");
        scheduler.schedule(secs(0), secs(2), "first");
        scheduler.schedule(secs(0), secs(2), "second");

        let fired: Vec<_> = std::iter::from_fn(|| scheduler.pop_due(secs(10)))
            .map(|(_, e)| e)
            .collect();
        assert_eq!(fired, vec!["first", "second", "late"]);
        assert!(scheduler.is_empty());
    }

    #[test]
    fn fires_exactly_at_due_time() {
        let mut scheduler = Scheduler::new();
        let id = scheduler.schedule(secs(1), secs(60), ());
        assert_eq!(scheduler.pop_due(secs(61)).map(|(i, _)| i), Some(id));
    }

    #[test]
    fn cancelled_event_never_fires() {
        let mut scheduler = Scheduler::new();
        let id = scheduler.schedule(secs(0), secs(1), "timeout");
        assert!(scheduler.is_pending(id));
        assert!(scheduler.cancel(id));
        assert!(!scheduler.is_pending(id));
        assert!(!scheduler.cancel(id));
        assert!(scheduler.pop_due(secs(100)).is_none());
    }

    #[test]
    fn huge_delay_saturates_instead_of_overflowing() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(secs(10), Duration::MAX, "never");
        assert!(scheduler.pop_due(secs(u32::MAX as u64)).is_none());
        assert_eq!(scheduler.len(), 1);
    }

    #[test]
    fn ids_are_not_reused_after_clear() {
        let mut scheduler = Scheduler::new();
        let a = scheduler.schedule(secs(0), secs(1), 1);
        scheduler.clear();
        let b = scheduler.schedule(secs(0), secs(1), 2);
        assert_ne!(a, b);
        assert!(!scheduler.cancel(a));
    }
}
