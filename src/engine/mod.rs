//! Runtime core: admission and serial execution.
//!
//! The only public API from this module is [`Engine`], which admits one
//! pattern at a time and plays its job chain strictly in order.
//!
//! Internal modules:
//! - [`worklist`]: ordered job queue with an atomic busy claim;
//! - [`worker`]: the serial drain lane publishing per-job lifecycle events.

mod engine;
mod worker;
mod worklist;

pub use engine::Engine;
