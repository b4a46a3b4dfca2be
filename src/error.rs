//! Error types used by the engine lifecycle.
//!
//! Submissions never error: busy and unsupported-platform rejections are
//! silent no-ops by design (callers observe idleness or bus events
//! instead). The only fallible operation is engine teardown, which reports
//! [`EngineError::GraceExceeded`] when in-flight jobs outlive the grace
//! window.

use std::time::Duration;
use thiserror::Error;

/// # Errors produced by the engine lifecycle.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum EngineError {
    /// Shutdown grace window was exceeded; the drain lane still had jobs
    /// pending when the deadline passed.
    #[error("shutdown grace {grace:?} exceeded; {pending} job(s) still pending")]
    GraceExceeded {
        /// The configured grace duration.
        grace: Duration,
        /// Jobs still in the worklist at the deadline.
        pending: usize,
    },
}

impl EngineError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use std::time::Duration;
    /// use staccato::EngineError;
    ///
    /// let err = EngineError::GraceExceeded { grace: Duration::from_secs(5), pending: 2 };
    /// assert_eq!(err.as_label(), "engine_grace_exceeded");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            EngineError::GraceExceeded { .. } => "engine_grace_exceeded",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            EngineError::GraceExceeded { grace, pending } => {
                format!("grace exceeded after {grace:?}; pending jobs={pending}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_and_message() {
        let err = EngineError::GraceExceeded {
            grace: Duration::from_secs(1),
            pending: 3,
        };
        assert_eq!(err.as_label(), "engine_grace_exceeded");
        assert!(err.as_message().contains("pending jobs=3"));
    }
}
