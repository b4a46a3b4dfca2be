//! # Worklist: ordered job queue with an atomic busy claim.
//!
//! The worklist is the only shared mutable state between `submit` callers
//! and the drain lane: an ordered queue of not-yet-finished jobs plus an
//! observable busy flag.
//!
//! ## Rules
//! - At most one pattern's jobs populate the queue at any time; admission
//!   happens through [`Worklist::try_claim`], an atomic test-and-set on the
//!   busy flag.
//! - The busy flag is a `watch` value, so idleness is both checkable
//!   ([`Worklist::is_busy`]) and awaitable ([`Worklist::drained`]).
//! - The queue mutex is never held across an await point.

use std::collections::VecDeque;
use std::sync::Mutex;

use tokio::sync::watch;

use crate::jobs::JobRef;

/// Ordered queue of pending jobs plus the engine's idle/busy state.
pub(crate) struct Worklist {
    jobs: Mutex<VecDeque<JobRef>>,
    busy: watch::Sender<bool>,
}

impl Worklist {
    /// Creates an empty, idle worklist.
    pub fn new() -> Self {
        let (busy, _) = watch::channel(false);
        Self {
            jobs: Mutex::new(VecDeque::new()),
            busy,
        }
    }

    /// Atomically claims the busy flag for a new pattern.
    ///
    /// Returns `false` (and changes nothing) when a pattern is already in
    /// flight. Concurrent callers race through the watch sender's internal
    /// lock, so exactly one wins.
    pub fn try_claim(&self) -> bool {
        self.busy.send_if_modified(|busy| {
            if *busy {
                false
            } else {
                *busy = true;
                true
            }
        })
    }

    /// Releases the busy flag, waking any [`Worklist::drained`] waiters.
    pub fn release(&self) {
        self.busy.send_replace(false);
    }

    /// Appends jobs in order. Only the claim holder may call this.
    pub fn extend(&self, jobs: Vec<JobRef>) {
        self.jobs.lock().expect("worklist poisoned").extend(jobs);
    }

    /// Pops the next job, preserving submission order.
    pub fn pop(&self) -> Option<JobRef> {
        self.jobs.lock().expect("worklist poisoned").pop_front()
    }

    /// Drops all remaining jobs, returning how many were abandoned.
    pub fn clear(&self) -> usize {
        let mut jobs = self.jobs.lock().expect("worklist poisoned");
        let abandoned = jobs.len();
        jobs.clear();
        abandoned
    }

    /// Number of not-yet-started jobs.
    pub fn len(&self) -> usize {
        self.jobs.lock().expect("worklist poisoned").len()
    }

    /// True while a pattern is in flight.
    pub fn is_busy(&self) -> bool {
        *self.busy.borrow()
    }

    /// Waits until the worklist is idle (returns immediately if it is).
    pub async fn drained(&self) {
        let mut rx = self.busy.subscribe();
        // wait_for checks the current value before sleeping, so a release
        // racing with this call is never missed.
        let _ = rx.wait_for(|busy| !*busy).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jobs::WaitJob;
    use std::time::Duration;

    fn wait_job() -> JobRef {
        Box::new(WaitJob::new(Duration::from_millis(1)))
    }

    #[test]
    fn test_claim_is_exclusive() {
        let list = Worklist::new();
        assert!(list.try_claim());
        assert!(!list.try_claim());
        list.release();
        assert!(list.try_claim());
    }

    #[test]
    fn test_fifo_order() {
        let list = Worklist::new();
        list.extend(vec![
            Box::new(WaitJob::new(Duration::from_millis(1))) as JobRef,
            Box::new(WaitJob::new(Duration::from_millis(2))) as JobRef,
        ]);
        assert_eq!(list.len(), 2);
        let first = list.pop().unwrap();
        assert_eq!(first.name(), "wait");
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_clear_reports_abandoned() {
        let list = Worklist::new();
        list.extend(vec![wait_job(), wait_job(), wait_job()]);
        assert_eq!(list.clear(), 3);
        assert_eq!(list.len(), 0);
    }

    #[tokio::test]
    async fn test_drained_returns_immediately_when_idle() {
        let list = Worklist::new();
        list.drained().await;
    }
}
