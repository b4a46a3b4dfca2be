//! # Pulse job.
//!
//! Emits one pulse of a fixed [`PulseKind`] through the shared haptics
//! handle. The engine awaits the emission to completion before moving on,
//! so pulses from one pattern can never overlap.

use async_trait::async_trait;

use crate::haptics::HapticsRef;
use crate::jobs::job::Job;
use crate::symbols::PulseKind;

/// Job that delegates one pulse to the haptic collaborator.
pub struct PulseJob {
    kind: PulseKind,
    haptics: HapticsRef,
}

impl PulseJob {
    /// Creates a pulse job for the given kind, holding a clone of the
    /// shared haptics handle.
    pub fn new(kind: PulseKind, haptics: HapticsRef) -> Self {
        Self { kind, haptics }
    }

    /// The pulse kind this job will emit.
    pub fn kind(&self) -> PulseKind {
        self.kind
    }
}

#[async_trait]
impl Job for PulseJob {
    fn name(&self) -> &str {
        self.kind.as_label()
    }

    async fn run(&self) {
        self.haptics.emit(self.kind).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::haptics::HapticsFn;
    use std::sync::{Arc, Mutex};

    #[tokio::test]
    async fn test_run_emits_configured_kind() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let haptics: HapticsRef = HapticsFn::arc(move |kind| {
            let sink = Arc::clone(&sink);
            async move {
                sink.lock().unwrap().push(kind);
            }
        });

        let job = PulseJob::new(PulseKind::Rigid, haptics);
        assert_eq!(job.name(), "pulse_rigid");
        job.run().await;

        assert_eq!(*seen.lock().unwrap(), vec![PulseKind::Rigid]);
    }
}
