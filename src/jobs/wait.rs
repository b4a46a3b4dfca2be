//! # Wait job.
//!
//! Holds the serial lane for a fixed duration, then returns. The sleep is
//! not interruptible: once a wait job has started, it always runs out its
//! configured delay (engine teardown only takes effect between jobs).

use async_trait::async_trait;
use std::time::Duration;
use tokio::time;

use crate::jobs::job::Job;

/// Job that pauses the chain for a fixed duration.
pub struct WaitJob {
    delay: Duration,
}

impl WaitJob {
    /// Creates a wait job with the given delay.
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// The configured pause duration.
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

#[async_trait]
impl Job for WaitJob {
    fn name(&self) -> &str {
        "wait"
    }

    async fn run(&self) {
        time::sleep(self.delay).await;
    }
}
