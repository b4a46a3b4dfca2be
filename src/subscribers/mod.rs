//! Subscriber API: event consumers and fan-out.
//!
//! ## Contents
//! - [`Subscribe`] - trait for consuming engine events
//! - [`SubscriberSet`] - non-blocking fan-out with per-subscriber queues
//! - [`LogWriter`] - stdout demo subscriber (feature `logging`)

mod set;
mod subscribe;

#[cfg(feature = "logging")]
mod log;

pub use set::SubscriberSet;
pub use subscribe::Subscribe;

#[cfg(feature = "logging")]
pub use log::LogWriter;
