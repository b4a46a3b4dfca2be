//! # Job trait and handle type.
//!
//! A [`Job`] is one unit of the compiled chain: it runs to completion when
//! asked and is then discarded. Jobs carry no result value and do not
//! error; anything that can go wrong below them (platform haptic calls) is
//! handled by the collaborator that owns the failure.

use async_trait::async_trait;

/// Owned handle to a job in the worklist (`Box<dyn Job>`).
///
/// Jobs are created at compile time, executed exactly once by the engine's
/// drain task, and dropped afterwards — never reused.
pub type JobRef = Box<dyn Job>;

/// # Run-to-completion unit of work.
///
/// A `Job` has a stable [`name`](Job::name) used in lifecycle events and an
/// async [`run`](Job::run) method that holds the serial lane for the job's
/// full duration. The engine never starts job *i + 1* before job *i*'s
/// `run` has returned.
///
/// # Example
/// ```
/// use async_trait::async_trait;
/// use staccato::Job;
///
/// struct Click;
///
/// #[async_trait]
/// impl Job for Click {
///     fn name(&self) -> &str { "click" }
///
///     async fn run(&self) {
///         // do the work...
///     }
/// }
/// ```
#[async_trait]
pub trait Job: Send + Sync + 'static {
    /// Returns a stable, human-readable job name.
    fn name(&self) -> &str;

    /// Executes the job to completion. No result, no error channel.
    async fn run(&self);
}
