//! Runtime events: types and broadcast bus.
//!
//! This module groups the event **data model** and the **bus** used to
//! publish/subscribe to runtime events emitted by the engine's admission
//! path and drain lane.
//!
//! ## Contents
//! - [`EventKind`], [`Event`] event classification and payload metadata
//! - [`Bus`] thin wrapper over `tokio::sync::broadcast`
//!
//! ## Quick reference
//! - **Publishers**: `Engine` (admission, teardown), the drain lane
//!   (per-job lifecycle).
//! - **Consumers**: the engine's subscriber listener (fans out to
//!   `SubscriberSet`), plus any caller holding a `bus.subscribe()` receiver.

mod bus;
mod event;

pub use bus::Bus;
pub use event::{Event, EventKind};
