//! # Simple logging subscriber for debugging and demos.
//!
//! [`LogWriter`] prints events to stdout in a human-readable format.
//! This is primarily useful for development, debugging, and demos.
//!
//! ## Output format
//! ```text
//! [accepted] jobs=3
//! [rejected] reason="busy" pending=2
//! [job-starting] job=pulse_heavy index=0
//! [job-finished] job=pulse_heavy index=0
//! [pattern-finished] jobs=3
//! [engine-stopping]
//! [drained]
//! ```

use async_trait::async_trait;

use crate::events::{Event, EventKind};

use super::Subscribe;

/// Simple stdout logging subscriber.
///
/// Enabled via the `logging` feature. Prints human-readable event
/// descriptions for debugging and demonstration purposes.
///
/// Not intended for production use - implement a custom [`Subscribe`] for
/// structured logging or metrics collection.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogWriter;

#[async_trait]
impl Subscribe for LogWriter {
    async fn on_event(&self, e: &Event) {
        match e.kind {
            EventKind::PatternAccepted => {
                println!("[accepted] jobs={:?}", e.jobs);
            }
            EventKind::PatternRejected => {
                println!("[rejected] reason={:?} pending={:?}", e.reason, e.jobs);
            }
            EventKind::JobStarting => {
                if let (Some(job), Some(index)) = (&e.job, e.index) {
                    println!("[job-starting] job={job} index={index}");
                }
            }
            EventKind::JobFinished => {
                if let (Some(job), Some(index)) = (&e.job, e.index) {
                    println!("[job-finished] job={job} index={index}");
                }
            }
            EventKind::PatternFinished => {
                println!("[pattern-finished] jobs={:?}", e.jobs);
            }
            EventKind::PatternAborted => {
                println!("[pattern-aborted] completed={:?}", e.jobs);
            }
            EventKind::EngineStopping => {
                println!("[engine-stopping]");
            }
            EventKind::Drained => {
                println!("[drained]");
            }
            EventKind::GraceExceeded => {
                println!("[grace-exceeded] pending={:?}", e.jobs);
            }
        }
    }

    fn name(&self) -> &'static str {
        "log_writer"
    }
}
