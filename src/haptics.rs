//! # Haptic generation collaborator.
//!
//! The engine never talks to hardware itself; pulse jobs delegate to an
//! injected [`Haptics`] handle. The handle is only ever invoked from the
//! engine's single drain task, so context-affine platform APIs see one
//! fixed caller context.
//!
//! ## Rules
//! - `emit` carries no result: platform-level generation failures are
//!   handled inside the implementation, never surfaced to the engine.
//! - Implementations must be `Send + Sync`; the handle is shared across
//!   jobs as `Arc<dyn Haptics>`.
//!
//! ## Example
//! ```
//! use staccato::{HapticsFn, HapticsRef, PulseKind};
//!
//! let h: HapticsRef = HapticsFn::arc(|kind: PulseKind| async move {
//!     // drive the platform haptic API here
//!     let _ = kind;
//! });
//! ```

use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;

use crate::symbols::PulseKind;

/// Shared handle to a haptic collaborator (`Arc<dyn Haptics>`).
pub type HapticsRef = Arc<dyn Haptics>;

/// Physically emits a single pulse of the given kind.
///
/// Called synchronously (awaited to completion) from the engine's drain
/// task; the engine blocks on it, so implementations should return once
/// the platform call has been handed off.
#[async_trait]
pub trait Haptics: Send + Sync + 'static {
    /// Emits one pulse. Failures are this collaborator's own business.
    async fn emit(&self, kind: PulseKind);
}

/// Function-backed haptics implementation.
///
/// Wraps a closure that creates a fresh future per emitted pulse, so no
/// shared mutable state is needed. Prefer [`HapticsFn::arc`] when you
/// immediately need a [`HapticsRef`].
#[derive(Debug)]
pub struct HapticsFn<F> {
    f: F,
}

impl<F> HapticsFn<F> {
    /// Creates a new function-backed haptics handle.
    pub fn new(f: F) -> Self {
        Self { f }
    }

    /// Creates the handle and returns it as a shared [`HapticsRef`]-compatible `Arc`.
    pub fn arc(f: F) -> Arc<Self> {
        Arc::new(Self::new(f))
    }
}

#[async_trait]
impl<F, Fut> Haptics for HapticsFn<F>
where
    F: Fn(PulseKind) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = ()> + Send + 'static,
{
    async fn emit(&self, kind: PulseKind) {
        (self.f)(kind).await;
    }
}

/// Haptics handle that does nothing.
///
/// Useful on hosts without hardware and in demos; pulse timing is still
/// observable through engine events.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullHaptics;

#[async_trait]
impl Haptics for NullHaptics {
    async fn emit(&self, _kind: PulseKind) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[tokio::test]
    async fn test_haptics_fn_forwards_kind() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let h = HapticsFn::arc(move |kind| {
            let sink = Arc::clone(&sink);
            async move {
                sink.lock().unwrap().push(kind);
            }
        });

        h.emit(PulseKind::Heavy).await;
        h.emit(PulseKind::Soft).await;

        assert_eq!(
            *seen.lock().unwrap(),
            vec![PulseKind::Heavy, PulseKind::Soft],
        );
    }

    #[tokio::test]
    async fn test_null_haptics_is_a_no_op() {
        NullHaptics.emit(PulseKind::Light).await;
    }
}
