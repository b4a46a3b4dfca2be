//! # Runtime events emitted by the engine and its drain lane.
//!
//! The [`EventKind`] enum classifies event types across three categories:
//! - **Admission events**: what happened to a submitted pattern
//!   (accepted, rejected).
//! - **Job lifecycle events**: the drain lane starting and finishing
//!   individual jobs.
//! - **Engine lifecycle events**: teardown progress.
//!
//! ## Ordering guarantees
//! Each event has a globally unique sequence number (`seq`) that increases
//! monotonically. Use `seq` to restore the exact order when events are
//! delivered out of order.
//!
//! ## Example
//! ```rust
//! use staccato::{Event, EventKind};
//!
//! let ev = Event::now(EventKind::JobStarting)
//!     .with_job("pulse_heavy")
//!     .with_index(0);
//!
//! assert_eq!(ev.kind, EventKind::JobStarting);
//! assert_eq!(ev.job.as_deref(), Some("pulse_heavy"));
//! assert_eq!(ev.index, Some(0));
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::time::{Duration, SystemTime};

/// Global sequence counter for event ordering.
static EVENT_SEQ: AtomicU64 = AtomicU64::new(0);

/// Classification of runtime events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    // === Admission events ===
    /// A submitted pattern was admitted and its jobs enqueued.
    ///
    /// Sets:
    /// - `jobs`: number of jobs enqueued
    /// - `at`: wall-clock timestamp
    /// - `seq`: global sequence
    PatternAccepted,

    /// A submission was silently dropped at the admission boundary.
    ///
    /// Sets:
    /// - `reason`: `"busy"` or `"unsupported_platform"`
    /// - `jobs`: pending jobs of the in-flight pattern (busy case)
    /// - `at`: wall-clock timestamp
    /// - `seq`: global sequence
    PatternRejected,

    // === Job lifecycle events ===
    /// The drain lane is about to run a job.
    ///
    /// Sets:
    /// - `job`: job name (e.g. `"pulse_heavy"`, `"wait"`)
    /// - `index`: position within the pattern (0-based)
    /// - `at`: wall-clock timestamp
    /// - `seq`: global sequence
    JobStarting,

    /// A job's `run()` returned.
    ///
    /// Sets:
    /// - `job`: job name
    /// - `index`: position within the pattern (0-based)
    /// - `at`: wall-clock timestamp
    /// - `seq`: global sequence
    JobFinished,

    /// All jobs of the in-flight pattern completed; engine is idle again.
    ///
    /// Sets:
    /// - `jobs`: number of jobs that ran
    /// - `at`: wall-clock timestamp
    /// - `seq`: global sequence
    PatternFinished,

    /// The in-flight pattern was abandoned between jobs during teardown.
    ///
    /// Sets:
    /// - `jobs`: number of jobs that ran before the abort
    /// - `at`: wall-clock timestamp
    /// - `seq`: global sequence
    PatternAborted,

    // === Engine lifecycle events ===
    /// Teardown requested; the drain lane will stop between jobs.
    ///
    /// Sets:
    /// - `at`: wall-clock timestamp
    /// - `seq`: global sequence
    EngineStopping,

    /// Worklist drained within the configured grace window.
    ///
    /// Sets:
    /// - `at`: wall-clock timestamp
    /// - `seq`: global sequence
    Drained,

    /// Grace window exceeded; jobs were still pending at teardown.
    ///
    /// Sets:
    /// - `jobs`: pending jobs at the deadline
    /// - `at`: wall-clock timestamp
    /// - `seq`: global sequence
    GraceExceeded,
}

/// Runtime event with optional metadata.
///
/// - `seq`: monotonic global sequence for ordering
/// - `at`: wall-clock timestamp (for logs)
/// - other optional fields are set depending on the [`EventKind`]
#[derive(Debug, Clone)]
pub struct Event {
    /// Globally unique, monotonically increasing sequence number.
    pub seq: u64,
    /// Wall-clock timestamp.
    pub at: SystemTime,
    /// Event classification.
    pub kind: EventKind,

    /// Job name, if applicable.
    pub job: Option<Arc<str>>,
    /// Job position within its pattern (0-based).
    pub index: Option<usize>,
    /// Job count (enqueued, completed, or pending — see the kind docs).
    pub jobs: Option<usize>,
    /// Wait delay in milliseconds (compact).
    pub delay_ms: Option<u32>,
    /// Human-readable rejection or abort reason.
    pub reason: Option<Arc<str>>,
}

impl Event {
    /// Creates a new event of the given kind with the current timestamp
    /// and the next global sequence number.
    pub fn now(kind: EventKind) -> Self {
        Self {
            seq: EVENT_SEQ.fetch_add(1, AtomicOrdering::Relaxed),
            at: SystemTime::now(),
            kind,
            job: None,
            index: None,
            jobs: None,
            delay_ms: None,
            reason: None,
        }
    }

    /// Attaches a job name.
    #[inline]
    pub fn with_job(mut self, job: impl Into<Arc<str>>) -> Self {
        self.job = Some(job.into());
        self
    }

    /// Attaches a job position.
    #[inline]
    pub fn with_index(mut self, index: usize) -> Self {
        self.index = Some(index);
        self
    }

    /// Attaches a job count.
    #[inline]
    pub fn with_jobs(mut self, jobs: usize) -> Self {
        self.jobs = Some(jobs);
        self
    }

    /// Attaches a wait delay (stored as milliseconds).
    #[inline]
    pub fn with_delay(mut self, d: Duration) -> Self {
        let ms = d.as_millis().min(u128::from(u32::MAX)) as u32;
        self.delay_ms = Some(ms);
        self
    }

    /// Attaches a human-readable reason.
    #[inline]
    pub fn with_reason(mut self, reason: impl Into<Arc<str>>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    /// True for admission rejections (busy or unsupported host).
    #[inline]
    pub fn is_rejection(&self) -> bool {
        matches!(self.kind, EventKind::PatternRejected)
    }
}
