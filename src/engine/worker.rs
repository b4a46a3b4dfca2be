//! # Serial drain lane.
//!
//! Runs the jobs of one admitted pattern strictly in order, one at a time,
//! publishing lifecycle events to the [`Bus`].
//!
//! ## Event flow
//! ```text
//! for each job, in submission order:
//!   JobStarting{ job, index } → job.run().await → JobFinished{ job, index }
//!
//! queue empty     → PatternFinished{ jobs = completed }
//! token cancelled → PatternAborted{ jobs = completed } (between jobs only)
//! ```
//!
//! ## Rules
//! - Job *i + 1* is popped only after job *i*'s `run()` has returned, so
//!   jobs never overlap — the substrate's own parallelism never leaks in.
//! - Cancellation is observed **between** jobs; a running job (including a
//!   wait job's sleep) always completes.
//! - The lane always releases the busy claim on exit, re-enabling `submit`.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::events::{Bus, Event, EventKind};

use super::worklist::Worklist;

/// Drains the worklist to empty, then releases the busy claim.
///
/// The engine spawns exactly one drain lane per admitted pattern; this is
/// the single execution context from which pulse emission happens.
pub(crate) async fn drain(worklist: Arc<Worklist>, bus: Bus, token: CancellationToken) {
    let mut completed = 0usize;

    loop {
        if token.is_cancelled() {
            worklist.clear();
            worklist.release();
            bus.publish(Event::now(EventKind::PatternAborted).with_jobs(completed));
            return;
        }

        let Some(job) = worklist.pop() else { break };

        bus.publish(
            Event::now(EventKind::JobStarting)
                .with_job(job.name())
                .with_index(completed),
        );
        job.run().await;
        bus.publish(
            Event::now(EventKind::JobFinished)
                .with_job(job.name())
                .with_index(completed),
        );
        completed += 1;
    }

    worklist.release();
    bus.publish(Event::now(EventKind::PatternFinished).with_jobs(completed));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jobs::{JobRef, WaitJob};
    use std::time::Duration;

    #[tokio::test]
    async fn test_drain_empties_and_releases() {
        let list = Arc::new(Worklist::new());
        assert!(list.try_claim());
        list.extend(vec![
            Box::new(WaitJob::new(Duration::from_millis(1))) as JobRef,
            Box::new(WaitJob::new(Duration::from_millis(1))) as JobRef,
        ]);

        let bus = Bus::new(16);
        let mut rx = bus.subscribe();
        drain(Arc::clone(&list), bus, CancellationToken::new()).await;

        assert!(!list.is_busy());
        assert_eq!(list.len(), 0);

        let mut kinds = Vec::new();
        while let Ok(ev) = rx.try_recv() {
            kinds.push(ev.kind);
        }
        assert_eq!(
            kinds,
            vec![
                EventKind::JobStarting,
                EventKind::JobFinished,
                EventKind::JobStarting,
                EventKind::JobFinished,
                EventKind::PatternFinished,
            ],
        );
    }

    #[tokio::test]
    async fn test_pre_cancelled_lane_aborts_without_running() {
        let list = Arc::new(Worklist::new());
        assert!(list.try_claim());
        list.extend(vec![
            Box::new(WaitJob::new(Duration::from_secs(60))) as JobRef,
        ]);

        let token = CancellationToken::new();
        token.cancel();

        let bus = Bus::new(16);
        let mut rx = bus.subscribe();
        drain(Arc::clone(&list), bus, token).await;

        assert!(!list.is_busy());
        assert_eq!(list.len(), 0);
        let ev = rx.try_recv().unwrap();
        assert_eq!(ev.kind, EventKind::PatternAborted);
        assert_eq!(ev.jobs, Some(0));
    }
}
