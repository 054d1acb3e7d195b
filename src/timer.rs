use dioxus::prelude::spawn;
use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;

/// Handle of a scheduled timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

/// Cancellable one-shot timers
///
/// Expiry is reported back to the owner as the returned [`TimerId`]; the
/// implementation decides how it is delivered.
pub trait Timer {
    fn schedule(&mut self, delay: Duration) -> TimerId;
    fn cancel(&mut self, id: TimerId);
}

/// Ids of scheduled timers that have neither fired nor been cancelled
#[derive(Debug, Default)]
struct LiveTimers {
    next_id: u64,
    live: HashSet<TimerId>,
}

impl LiveTimers {
    fn issue(&mut self) -> TimerId {
        self.next_id = self.next_id.wrapping_add(1);
        let id = TimerId(self.next_id);
        self.live.insert(id);
        id
    }

    fn cancel(&mut self, id: TimerId) {
        self.live.remove(&id);
    }

    /// Claim an expired timer; false when it was cancelled or already fired
    fn expire(&mut self, id: TimerId) -> bool {
        self.live.remove(&id)
    }
}

/// Timers backed by Dioxus tasks, delivering expired ids over a channel
///
/// A sleeping task whose id is no longer live finishes without reporting.
/// Must be used inside a Dioxus scope.
pub struct TaskTimer {
    timers: Rc<RefCell<LiveTimers>>,
    fired_tx: UnboundedSender<TimerId>,
}

impl TaskTimer {
    pub fn new(fired_tx: UnboundedSender<TimerId>) -> Self {
        Self {
            timers: Rc::new(RefCell::new(LiveTimers::default())),
            fired_tx,
        }
    }
}

/// Report `id` unless it was cancelled while sleeping
fn report_expiry(
    timers: &RefCell<LiveTimers>,
    fired_tx: &UnboundedSender<TimerId>,
    id: TimerId,
) -> bool {
    if !timers.borrow_mut().expire(id) {
        return false;
    }
    if fired_tx.send(id).is_err() {
        tracing::debug!(?id, "Timer receiver dropped");
        return false;
    }
    true
}

impl Timer for TaskTimer {
    fn schedule(&mut self, delay: Duration) -> TimerId {
        let id = self.timers.borrow_mut().issue();

        let timers = self.timers.clone();
        let fired_tx = self.fired_tx.clone();
        spawn(async move {
            tokio::time::sleep(delay).await;
            report_expiry(&timers, &fired_tx, id);
        });
        id
    }

    fn cancel(&mut self, id: TimerId) {
        self.timers.borrow_mut().cancel(id);
    }
}

/// Deterministic timer driven by explicit time advances
#[cfg(test)]
#[derive(Debug, Default)]
pub struct ManualTimer {
    now: Duration,
    next_id: u64,
    pending: Vec<(TimerId, Duration)>,
    pub scheduled: usize,
    pub cancelled: usize,
}

#[cfg(test)]
impl ManualTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move time forward and return the timers that expired, in deadline order
    pub fn advance(&mut self, by: Duration) -> Vec<TimerId> {
        self.now += by;
        let now = self.now;
        let mut due: Vec<(TimerId, Duration)> = self
            .pending
            .iter()
            .copied()
            .filter(|(_, deadline)| *deadline <= now)
            .collect();
        due.sort_by_key(|(id, deadline)| (*deadline, *id));
        self.pending.retain(|(_, deadline)| *deadline > now);
        due.into_iter().map(|(id, _)| id).collect()
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }
}

#[cfg(test)]
impl Timer for ManualTimer {
    fn schedule(&mut self, delay: Duration) -> TimerId {
        self.next_id += 1;
        let id = TimerId(self.next_id);
        self.pending.push((id, self.now + delay));
        self.scheduled += 1;
        id
    }

    fn cancel(&mut self, id: TimerId) {
        let before = self.pending.len();
        self.pending.retain(|(pending, _)| *pending != id);
        if self.pending.len() != before {
            self.cancelled += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_timer_fires_in_deadline_order() {
        let mut timer = ManualTimer::new();
        let late = timer.schedule(Duration::from_millis(100));
        let early = timer.schedule(Duration::from_millis(50));

        assert!(timer.advance(Duration::from_millis(49)).is_empty());
        assert_eq!(timer.advance(Duration::from_millis(1)), vec![early]);
        assert_eq!(timer.advance(Duration::from_millis(50)), vec![late]);
        assert_eq!(timer.pending(), 0);
    }

    #[test]
    fn test_cancelled_task_timer_does_not_report() {
        let timers = RefCell::new(LiveTimers::default());
        let (fired_tx, mut fired_rx) = tokio::sync::mpsc::unbounded_channel();

        let kept = timers.borrow_mut().issue();
        let cancelled = timers.borrow_mut().issue();
        assert_ne!(kept, cancelled);
        timers.borrow_mut().cancel(cancelled);

        assert!(!report_expiry(&timers, &fired_tx, cancelled));
        assert!(report_expiry(&timers, &fired_tx, kept));
        // A second expiry of the same id is stale
        assert!(!report_expiry(&timers, &fired_tx, kept));

        assert_eq!(fired_rx.try_recv().ok(), Some(kept));
        assert!(fired_rx.try_recv().is_err());
    }

    #[test]
    fn test_task_timer_reports_nothing_after_receiver_dropped() {
        let timers = RefCell::new(LiveTimers::default());
        let (fired_tx, fired_rx) = tokio::sync::mpsc::unbounded_channel();
        drop(fired_rx);

        let id = timers.borrow_mut().issue();
        assert!(!report_expiry(&timers, &fired_tx, id));
    }

    #[test]
    fn test_manual_timer_cancel() {
        let mut timer = ManualTimer::new();
        let id = timer.schedule(Duration::from_millis(10));
        timer.cancel(id);
        timer.cancel(id);

        assert!(timer.advance(Duration::from_secs(1)).is_empty());
        assert_eq!(timer.cancelled, 1);
    }
}
