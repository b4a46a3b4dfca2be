//! # Subscriber trait.
//!
//! A subscriber consumes engine [`Event`]s asynchronously through its own
//! bounded queue and worker task (see
//! [`SubscriberSet`](crate::subscribers::SubscriberSet)). Typical uses:
//! logging, metrics, test instrumentation.

use async_trait::async_trait;

use crate::events::Event;

/// Consumer of engine events.
///
/// Each subscriber gets its own bounded queue; a slow subscriber drops
/// events for itself only and never stalls the engine.
#[async_trait]
pub trait Subscribe: Send + Sync + 'static {
    /// Handles one event. Panics are caught and isolated per subscriber.
    async fn on_event(&self, event: &Event);

    /// Stable subscriber name, used when reporting drops and panics.
    fn name(&self) -> &'static str {
        "subscriber"
    }

    /// Capacity of this subscriber's event queue (clamped to ≥ 1).
    fn queue_capacity(&self) -> usize {
        64
    }
}
