//! Cancellable single-shot timers driven by host time.

use std::cell::Cell;

/// Identifies one scheduling of a [`Debouncer`]. A newer schedule
/// supersedes every older ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Pending {
    ticket: Ticket,
    due_at: u64,
}

/// Holds at most one pending deadline.
///
/// Scheduling again replaces the pending deadline, so a burst of calls fires
/// once, `delay_ms` after the last one. Time only moves when the host calls
/// [`Debouncer::poll`].
#[derive(Debug, Clone)]
pub struct Debouncer {
    delay_ms: u64,
    generation: u64,
    pending: Option<Pending>,
}

impl Debouncer {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            generation: 0,
            pending: None,
        }
    }

    pub fn delay_ms(&self) -> u64 {
        self.delay_ms
    }

    /// Schedule a fire `delay_ms` after `now_ms`, cancelling any pending one.
    pub fn schedule(&mut self, now_ms: u64) -> Ticket {
        self.generation += 1;
        let ticket = Ticket(self.generation);
        self.pending = Some(Pending {
            ticket,
            due_at: now_ms.saturating_add(self.delay_ms),
        });
        ticket
    }

    /// Drop the pending fire. Returns whether one was pending.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    /// Fire if the deadline has passed. Each ticket fires at most once.
    pub fn poll(&mut self, now_ms: u64) -> Option<Ticket> {
        match self.pending {
            Some(pending) if now_ms >= pending.due_at => {
                self.pending = None;
                Some(pending.ticket)
            }
            _ => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// When the pending fire is due.
    pub fn due_at(&self) -> Option<u64> {
        self.pending.map(|p| p.due_at)
    }
}

/// The one host timer armed to wake the page at its next deadline.
///
/// Shared between the page handle and timer callbacks, so it uses interior
/// mutability. Arming returns the timer it replaces, which the caller must
/// cancel with the host.
#[derive(Debug)]
pub struct WakeupSlot<H: Copy> {
    armed: Cell<Option<H>>,
}

impl<H: Copy> WakeupSlot<H> {
    pub fn new() -> Self {
        Self {
            armed: Cell::new(None),
        }
    }

    /// Record `handle` as the armed timer.
    pub fn arm(&self, handle: H) -> Option<H> {
        self.armed.replace(Some(handle))
    }

    /// Forget the armed timer, returning it for cancellation.
    pub fn disarm(&self) -> Option<H> {
        self.armed.take()
    }

    pub fn armed(&self) -> Option<H> {
        self.armed.get()
    }
}

impl<H: Copy> Default for WakeupSlot<H> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_fires_once_after_delay() {
        let mut d = Debouncer::new(250);
        let ticket = d.schedule(1000);
        assert_eq!(d.due_at(), Some(1250));
        assert_eq!(d.poll(1249), None);
        assert_eq!(d.poll(1250), Some(ticket));
        assert_eq!(d.poll(5000), None);
        assert!(!d.is_pending());
    }

    #[test]
    fn test_reschedule_supersedes() {
        let mut d = Debouncer::new(250);
        let first = d.schedule(0);
        let second = d.schedule(200);
        assert!(second > first);
        assert_eq!(d.poll(300), None);
        assert_eq!(d.poll(450), Some(second));
    }

    #[test]
    fn test_cancel() {
        let mut d = Debouncer::new(10);
        assert!(!d.cancel());
        d.schedule(0);
        assert!(d.cancel());
        assert_eq!(d.poll(100), None);
    }

    #[test]
    fn test_wakeup_slot_keeps_one_timer() {
        let slot = WakeupSlot::new();
        assert_eq!(slot.arm(7), None);
        // Every re-arm hands back the timer to cancel.
        assert_eq!(slot.arm(8), Some(7));
        assert_eq!(slot.arm(9), Some(8));
        assert_eq!(slot.armed(), Some(9));

        assert_eq!(slot.disarm(), Some(9));
        assert_eq!(slot.disarm(), None);
        assert_eq!(slot.arm(10), None);
    }

    proptest! {
        #[test]
        fn test_burst_fires_once_after_last(gaps in prop::collection::vec(0u64..250, 1..20)) {
            let mut d = Debouncer::new(250);
            let mut now = 0;
            let mut fired = 0;
            for gap in gaps {
                now += gap;
                if d.poll(now).is_some() {
                    fired += 1;
                }
                d.schedule(now);
            }
            prop_assert_eq!(fired, 0);
            prop_assert_eq!(d.poll(now + 249), None);
            prop_assert!(d.poll(now + 250).is_some());
        }

        #[test]
        fn test_wakeup_slot_leaves_only_latest_armed(handles in prop::collection::vec(any::<i32>(), 1..30)) {
            let slot = WakeupSlot::new();
            let mut cancelled = Vec::new();
            for &handle in &handles {
                cancelled.extend(slot.arm(handle));
            }
            prop_assert_eq!(slot.armed(), handles.last().copied());
            prop_assert_eq!(&cancelled[..], &handles[..handles.len() - 1]);
        }
    }
}
