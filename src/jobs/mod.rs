//! # Job abstractions.
//!
//! This module provides the executable layer of the pipeline:
//! - [`Job`] - trait for a run-to-completion unit of work
//! - [`JobRef`] - owned handle to a job (`Box<dyn Job>`)
//! - [`PulseJob`] - emits one pulse through the haptics collaborator
//! - [`WaitJob`] - holds the lane for a fixed duration
//! - [`from_steps`] - wraps compiled steps into jobs

mod job;
mod pulse;
mod wait;

pub use job::{Job, JobRef};
pub use pulse::PulseJob;
pub use wait::WaitJob;

use crate::haptics::HapticsRef;
use crate::symbols::Step;

/// Wraps each compiled step in an executable job, preserving order.
///
/// Pulse steps capture a clone of the shared haptics handle; wait steps
/// need nothing beyond their duration.
pub fn from_steps(steps: Vec<Step>, haptics: &HapticsRef) -> Vec<JobRef> {
    steps
        .into_iter()
        .map(|step| match step {
            Step::Pulse(kind) => Box::new(PulseJob::new(kind, haptics.clone())) as JobRef,
            Step::Wait(delay) => Box::new(WaitJob::new(delay)) as JobRef,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::haptics::NullHaptics;
    use crate::symbols::PulseKind;
    use std::sync::Arc;
    use std::time::Duration;

    #[test]
    fn test_from_steps_preserves_order_and_names() {
        let haptics: HapticsRef = Arc::new(NullHaptics);
        let jobs = from_steps(
            vec![
                Step::Pulse(PulseKind::Heavy),
                Step::Wait(Duration::from_millis(10)),
                Step::Pulse(PulseKind::Medium),
            ],
            &haptics,
        );
        let names: Vec<&str> = jobs.iter().map(|j| j.name()).collect();
        assert_eq!(names, vec!["pulse_heavy", "wait", "pulse_medium"]);
    }

    #[test]
    fn test_from_steps_empty() {
        let haptics: HapticsRef = Arc::new(NullHaptics);
        assert!(from_steps(Vec::new(), &haptics).is_empty());
    }
}
