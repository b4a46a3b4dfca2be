//! # Engine: admission, serial execution, and teardown.
//!
//! The [`Engine`] owns the event bus, the worklist, the capability probe,
//! and the haptics handle. It admits at most one pattern at a time and
//! plays it through a single spawned drain lane.
//!
//! ## High-level architecture
//! ```text
//! submit_pattern("O-o", delay)
//!     │
//!     ├─► compile(pattern, delay, probe.tier())     (pure)
//!     ├─► jobs::from_steps(steps, haptics)
//!     ▼
//! submit(jobs)
//!     ├─► tier below Playback?  ──► PatternRejected("unsupported_platform"), drop
//!     ├─► jobs empty?           ──► drop (engine stays idle, nothing runs)
//!     ├─► try_claim() failed?   ──► PatternRejected("busy"), drop
//!     └─► extend worklist, PatternAccepted, spawn drain lane
//!                                     │
//!                                     ▼
//!                  JobStarting → run → JobFinished   (strictly in order)
//!                                     │
//!                                     ▼
//!                  PatternFinished, busy released, submit re-enabled
//! ```
//!
//! ## Rules
//! - Rejections are silent no-ops: `submit` returns `()` either way.
//!   Callers observe [`Engine::is_idle`] / [`Engine::drained`] or bus
//!   events, never a return value.
//! - The haptics handle is only invoked from the drain lane, giving
//!   context-affine platform APIs one fixed caller context.
//! - `shutdown` cancels between jobs and waits up to [`Config::grace`].

use std::sync::Arc;
use std::time::Duration;

use tokio::time;
use tokio_util::sync::CancellationToken;

use crate::capability::CapabilityProbe;
use crate::config::Config;
use crate::error::EngineError;
use crate::events::{Bus, Event, EventKind};
use crate::haptics::HapticsRef;
use crate::jobs::{self, JobRef};
use crate::pattern::compile;
use crate::subscribers::{Subscribe, SubscriberSet};

use super::{worker, worklist::Worklist};

/// Serial pulse engine with a single-flight admission guard.
///
/// Construct one per process (or per haptic device) and keep it for the
/// host's lifetime; idle/busy state is observable at any point.
///
/// ## Example
/// ```
/// use std::sync::Arc;
/// use std::time::Duration;
/// use staccato::{Config, Engine, FixedTier, NullHaptics};
///
/// #[tokio::main(flavor = "current_thread")]
/// async fn main() {
///     let engine = Engine::new(
///         Config::default(),
///         Arc::new(FixedTier::default()),
///         Arc::new(NullHaptics),
///         Vec::new(),
///     );
///
///     engine.submit_pattern("O-o", Duration::from_millis(10));
///     engine.drained().await;
///     assert!(engine.is_idle());
///     engine.shutdown().await.unwrap();
/// }
/// ```
pub struct Engine {
    cfg: Config,
    bus: Bus,
    probe: Arc<dyn CapabilityProbe>,
    haptics: HapticsRef,
    worklist: Arc<Worklist>,
    runtime_token: CancellationToken,
}

impl Engine {
    /// Creates a new engine.
    ///
    /// Must be called from within a tokio runtime (subscriber workers and
    /// the fan-out listener are spawned here). Pass an empty `subscribers`
    /// vector if event fan-out is not needed; the bus stays available
    /// either way via [`Engine::bus`].
    pub fn new(
        cfg: Config,
        probe: Arc<dyn CapabilityProbe>,
        haptics: HapticsRef,
        subscribers: Vec<Arc<dyn Subscribe>>,
    ) -> Self {
        let bus = Bus::new(cfg.bus_capacity_clamped());

        if !subscribers.is_empty() {
            Self::subscriber_listener(&bus, SubscriberSet::new(subscribers));
        }

        Self {
            cfg,
            bus,
            probe,
            haptics,
            worklist: Arc::new(Worklist::new()),
            runtime_token: CancellationToken::new(),
        }
    }

    /// Subscribes to the bus and forwards events to the subscriber set
    /// (fire-and-forget).
    fn subscriber_listener(bus: &Bus, set: SubscriberSet) {
        let mut rx = bus.subscribe();
        tokio::spawn(async move {
            while let Ok(ev) = rx.recv().await {
                set.emit(&ev);
            }
        });
    }

    /// Returns the engine's event bus (subscribe for rejection/lifecycle
    /// visibility).
    pub fn bus(&self) -> &Bus {
        &self.bus
    }

    /// Compiles `pattern` with `delay` for wait symbols and submits the
    /// resulting job chain. Convenience for compile + [`Engine::submit`].
    pub fn submit_pattern(&self, pattern: &str, delay: Duration) {
        let steps = compile(pattern, delay, self.probe.tier());
        self.submit(jobs::from_steps(steps, &self.haptics));
    }

    /// Plays `pattern` using the configured
    /// [`default_delay`](Config::default_delay) for wait symbols.
    pub fn play(&self, pattern: &str) {
        self.submit_pattern(pattern, self.cfg.default_delay);
    }

    /// Submits a pre-built ordered job chain.
    ///
    /// Silent no-op when:
    /// - the host tier is below playback capability,
    /// - `jobs` is empty (the engine stays idle, nothing runs),
    /// - a prior pattern is still in flight (checked atomically at call
    ///   time; never queued or retried).
    ///
    /// On admission the jobs are enqueued in order and a single drain lane
    /// is spawned to run them one after another.
    pub fn submit(&self, jobs: Vec<JobRef>) {
        if !self.probe.tier().supports_playback() {
            self.bus.publish(
                Event::now(EventKind::PatternRejected).with_reason("unsupported_platform"),
            );
            return;
        }
        if jobs.is_empty() {
            return;
        }
        if !self.worklist.try_claim() {
            self.bus.publish(
                Event::now(EventKind::PatternRejected)
                    .with_reason("busy")
                    .with_jobs(self.worklist.len()),
            );
            return;
        }

        let count = jobs.len();
        self.worklist.extend(jobs);
        self.bus
            .publish(Event::now(EventKind::PatternAccepted).with_jobs(count));

        tokio::spawn(worker::drain(
            Arc::clone(&self.worklist),
            self.bus.clone(),
            self.runtime_token.child_token(),
        ));
    }

    /// True when no pattern is in flight.
    pub fn is_idle(&self) -> bool {
        !self.worklist.is_busy()
    }

    /// Number of not-yet-started jobs of the in-flight pattern.
    pub fn pending(&self) -> usize {
        self.worklist.len()
    }

    /// Waits until the engine is idle (returns immediately if it is).
    ///
    /// This is the supported way to chain patterns: await `drained`, then
    /// submit the next one.
    pub async fn drained(&self) {
        self.worklist.drained().await;
    }

    /// Tears the engine down: stops the drain lane between jobs and waits
    /// up to [`Config::grace`] for it to settle.
    ///
    /// A job already running (including a wait job's sleep) completes
    /// first; jobs not yet started are abandoned. Returns
    /// [`EngineError::GraceExceeded`] if the lane is still busy at the
    /// deadline.
    pub async fn shutdown(&self) -> Result<(), EngineError> {
        self.bus.publish(Event::now(EventKind::EngineStopping));
        self.runtime_token.cancel();

        match time::timeout(self.cfg.grace, self.worklist.drained()).await {
            Ok(()) => {
                self.bus.publish(Event::now(EventKind::Drained));
                Ok(())
            }
            Err(_elapsed) => {
                let pending = self.worklist.len();
                self.bus
                    .publish(Event::now(EventKind::GraceExceeded).with_jobs(pending));
                Err(EngineError::GraceExceeded {
                    grace: self.cfg.grace,
                    pending,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::{FixedTier, Tier};
    use crate::haptics::{Haptics, HapticsFn};
    use crate::jobs::Job;
    use crate::symbols::PulseKind;
    use async_trait::async_trait;
    use std::sync::Mutex;
    use std::time::Instant;

    /// Haptics double recording emitted kinds in order.
    #[derive(Default)]
    struct Recorder {
        emitted: Mutex<Vec<PulseKind>>,
    }

    #[async_trait]
    impl Haptics for Recorder {
        async fn emit(&self, kind: PulseKind) {
            self.emitted.lock().unwrap().push(kind);
        }
    }

    fn engine_with(recorder: &Arc<Recorder>, tier: Tier) -> Engine {
        Engine::new(
            Config::default(),
            Arc::new(FixedTier(tier)),
            Arc::clone(recorder) as HapticsRef,
            Vec::new(),
        )
    }

    #[tokio::test]
    async fn test_pattern_plays_in_order() {
        let recorder = Arc::new(Recorder::default());
        let engine = engine_with(&recorder, Tier::Playback);

        engine.submit_pattern("O-o.", Duration::from_millis(5));
        engine.drained().await;

        assert_eq!(
            *recorder.emitted.lock().unwrap(),
            vec![PulseKind::Heavy, PulseKind::Medium, PulseKind::Light],
        );
        assert!(engine.is_idle());
        assert_eq!(engine.pending(), 0);
    }

    #[tokio::test]
    async fn test_second_submission_is_rejected_while_busy() {
        let recorder = Arc::new(Recorder::default());
        let engine = engine_with(&recorder, Tier::Sharpness);
        let mut rx = engine.bus().subscribe();

        // Long wait keeps pattern A in flight.
        engine.submit_pattern("O-", Duration::from_millis(200));
        assert!(!engine.is_idle());

        engine.submit_pattern("o", Duration::from_millis(1));
        // Worklist still reflects only A's jobs (pulse + wait, none started yet).
        assert_eq!(engine.pending(), 2);

        // B was dropped: only A's pulses ever reach the haptics handle.
        engine.drained().await;
        assert_eq!(*recorder.emitted.lock().unwrap(), vec![PulseKind::Heavy]);

        let mut saw_busy_rejection = false;
        while let Ok(ev) = rx.try_recv() {
            if ev.is_rejection() {
                assert_eq!(ev.reason.as_deref(), Some("busy"));
                saw_busy_rejection = true;
            }
        }
        assert!(saw_busy_rejection);
    }

    #[tokio::test]
    async fn test_unsupported_host_drops_submission() {
        let recorder = Arc::new(Recorder::default());
        let engine = engine_with(&recorder, Tier::Unsupported);
        let mut rx = engine.bus().subscribe();

        engine.submit_pattern("Oo.", Duration::from_millis(1));

        assert!(engine.is_idle());
        assert!(recorder.emitted.lock().unwrap().is_empty());
        let ev = rx.try_recv().unwrap();
        assert!(ev.is_rejection());
        assert_eq!(ev.reason.as_deref(), Some("unsupported_platform"));
    }

    #[tokio::test]
    async fn test_empty_pattern_leaves_engine_idle() {
        let recorder = Arc::new(Recorder::default());
        let engine = engine_with(&recorder, Tier::Sharpness);

        engine.submit_pattern("", Duration::from_millis(1));
        engine.submit_pattern("zq ?", Duration::from_millis(1));

        assert!(engine.is_idle());
        assert_eq!(engine.pending(), 0);
        assert!(recorder.emitted.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_sharpness_tier_selects_rigid() {
        let recorder = Arc::new(Recorder::default());
        let engine = engine_with(&recorder, Tier::Sharpness);
        engine.submit_pattern("X", Duration::from_millis(1));
        engine.drained().await;
        assert_eq!(*recorder.emitted.lock().unwrap(), vec![PulseKind::Rigid]);
    }

    #[tokio::test]
    async fn test_playback_tier_falls_back_to_heavy() {
        let recorder = Arc::new(Recorder::default());
        let engine = engine_with(&recorder, Tier::Playback);
        engine.submit_pattern("X", Duration::from_millis(1));
        engine.drained().await;
        assert_eq!(*recorder.emitted.lock().unwrap(), vec![PulseKind::Heavy]);
    }

    /// Instrumented job recording start/end instants for overlap checks.
    struct Probe {
        spans: Arc<Mutex<Vec<(Instant, Instant)>>>,
    }

    #[async_trait]
    impl Job for Probe {
        fn name(&self) -> &str {
            "probe"
        }

        async fn run(&self) {
            let started = Instant::now();
            time::sleep(Duration::from_millis(10)).await;
            self.spans.lock().unwrap().push((started, Instant::now()));
        }
    }

    #[tokio::test]
    async fn test_jobs_never_overlap() {
        let recorder = Arc::new(Recorder::default());
        let engine = engine_with(&recorder, Tier::Playback);

        let spans = Arc::new(Mutex::new(Vec::new()));
        let jobs: Vec<JobRef> = (0..3)
            .map(|_| {
                Box::new(Probe {
                    spans: Arc::clone(&spans),
                }) as JobRef
            })
            .collect();

        engine.submit(jobs);
        engine.drained().await;

        let spans = spans.lock().unwrap();
        assert_eq!(spans.len(), 3);
        for pair in spans.windows(2) {
            let (_, prev_end) = pair[0];
            let (next_start, _) = pair[1];
            assert!(next_start >= prev_end, "job started before its predecessor finished");
        }
    }

    #[tokio::test]
    async fn test_submit_reenabled_after_drain() {
        let recorder = Arc::new(Recorder::default());
        let engine = engine_with(&recorder, Tier::Playback);

        engine.submit_pattern("O", Duration::from_millis(1));
        engine.drained().await;
        engine.submit_pattern("o", Duration::from_millis(1));
        engine.drained().await;

        assert_eq!(
            *recorder.emitted.lock().unwrap(),
            vec![PulseKind::Heavy, PulseKind::Medium],
        );
    }

    #[tokio::test]
    async fn test_shutdown_idle_engine() {
        let recorder = Arc::new(Recorder::default());
        let engine = engine_with(&recorder, Tier::Playback);
        engine.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_shutdown_abandons_queued_jobs_between_jobs() {
        let recorder = Arc::new(Recorder::default());
        let engine = engine_with(&recorder, Tier::Playback);

        // One running wait plus queued pulses that must never start.
        engine.submit_pattern("-OOO", Duration::from_millis(50));
        assert!(!engine.is_idle());

        engine.shutdown().await.unwrap();
        assert!(engine.is_idle());
        assert!(recorder.emitted.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_shutdown_grace_exceeded() {
        let slow: HapticsRef = HapticsFn::arc(|_kind| async {
            time::sleep(Duration::from_millis(200)).await;
        });
        let engine = Engine::new(
            Config {
                grace: Duration::from_millis(20),
                ..Config::default()
            },
            Arc::new(FixedTier(Tier::Playback)),
            slow,
            Vec::new(),
        );

        engine.submit_pattern("O", Duration::from_millis(1));
        // Let the drain lane actually start the slow emit before teardown.
        time::sleep(Duration::from_millis(5)).await;

        let err = engine.shutdown().await.unwrap_err();
        assert_eq!(err.as_label(), "engine_grace_exceeded");
    }
}
