//! # staccato
//!
//! **staccato** compiles short textual patterns into timed chains of
//! haptic pulse jobs and plays them on a serial, single-flight engine.
//!
//! ## Architecture
//! ```text
//!   "O-o"  +  delay
//!     │
//!     ▼  per character
//! ┌──────────────┐     ┌──────────────────┐     ┌──────────────────────┐
//! │ Step::decode │ ──► │ pattern::compile │ ──► │ jobs::from_steps     │
//! │ (symbols)    │     │ (ordered steps)  │     │ (PulseJob / WaitJob) │
//! └──────────────┘     └──────────────────┘     └──────────┬───────────┘
//!                                                          ▼
//! ┌───────────────────────────────────────────────────────────────────┐
//! │  Engine                                                           │
//! │  - capability guard (CapabilityProbe → Tier)                      │
//! │  - single-flight guard (busy worklist ⇒ silent drop)              │
//! │  - Bus (broadcast events) + SubscriberSet fan-out                 │
//! └──────────────────────────────┬────────────────────────────────────┘
//!                                ▼
//!                      serial drain lane (one per pattern)
//!                         job 0 → job 1 → ... → idle
//!                                │
//!                                ▼ pulse jobs only
//!                      Haptics::emit(kind)   (injected collaborator)
//! ```
//!
//! Jobs run strictly one after another; a submission arriving while a
//! pattern is in flight is dropped silently, never queued. Malformed
//! symbols are skipped, busy/unsupported submissions are no-ops — this is
//! a best-effort, fire-and-forget feedback channel, and nothing here
//! crashes the host.
//!
//! ## Features
//! | Area            | Description                                         | Key types / traits                   |
//! |-----------------|-----------------------------------------------------|--------------------------------------|
//! | **Decoding**    | Symbol alphabet and capability-gated pulse kinds.   | [`Step`], [`PulseKind`]              |
//! | **Compilation** | Pattern string → ordered step sequence.             | [`compile`]                          |
//! | **Jobs**        | Run-to-completion units wrapping each step.         | [`Job`], [`PulseJob`], [`WaitJob`]   |
//! | **Execution**   | Single-flight serial engine with observable state.  | [`Engine`], [`Config`]               |
//! | **Collaborators**| Injectable hardware and capability seams.          | [`Haptics`], [`CapabilityProbe`]     |
//! | **Observability**| Broadcast events and subscriber fan-out.           | [`Event`], [`Bus`], [`Subscribe`]    |
//!
//! ## Optional features
//! - `logging`: exports a simple built-in [`LogWriter`] _(demo/reference only)_.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use std::time::Duration;
//! use staccato::{Config, Engine, FixedTier, HapticsFn, PulseKind};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let haptics = HapticsFn::arc(|kind: PulseKind| async move {
//!         // hand the pulse to the platform haptic API here
//!         let _ = kind;
//!     });
//!
//!     let engine = Engine::new(
//!         Config::default(),
//!         Arc::new(FixedTier::default()),
//!         haptics,
//!         Vec::new(),
//!     );
//!
//!     // heavy, pause, medium — unrecognized characters are skipped
//!     engine.submit_pattern("O-o", Duration::from_millis(100));
//!     engine.drained().await;
//!
//!     engine.shutdown().await.unwrap();
//! }
//! ```

mod capability;
mod config;
mod engine;
mod error;
mod events;
mod haptics;
mod jobs;
mod pattern;
mod subscribers;
mod symbols;

// ---- Public re-exports ----

pub use capability::{CapabilityProbe, FixedTier, Tier};
pub use config::Config;
pub use engine::Engine;
pub use error::EngineError;
pub use events::{Bus, Event, EventKind};
pub use haptics::{Haptics, HapticsFn, HapticsRef, NullHaptics};
pub use jobs::{Job, JobRef, PulseJob, WaitJob, from_steps};
pub use pattern::compile;
pub use subscribers::{Subscribe, SubscriberSet};
pub use symbols::{PulseKind, Step};

// Optional: expose a simple built-in logger subscriber (demo/reference).
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use subscribers::LogWriter;
