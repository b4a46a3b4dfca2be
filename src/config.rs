//! # Engine configuration.
//!
//! Provides [`Config`], centralized settings for the pulse engine.
//!
//! ## Sentinel values
//! - `grace = 0s` → `shutdown` does not wait for in-flight jobs at all
//! - `bus_capacity` is clamped to a minimum of 1 by the bus

use std::time::Duration;

/// Global configuration for the pulse engine.
///
/// ## Field semantics
/// - `grace`: maximum wait for the in-flight chain to settle during
///   [`shutdown`](crate::Engine::shutdown)
/// - `bus_capacity`: event bus ring buffer size (min 1; clamped by Bus)
/// - `default_delay`: wait-symbol delay used by the
///   [`play`](crate::Engine::play) convenience entry point
///
/// All fields are public for flexibility. Prefer the helper accessors to
/// avoid sprinkling sentinel checks across the codebase.
#[derive(Clone, Debug)]
pub struct Config {
    /// Maximum time `shutdown` waits for the drain lane to go idle before
    /// reporting [`EngineError::GraceExceeded`](crate::EngineError).
    ///
    /// Teardown only takes effect between jobs; a running wait job always
    /// completes its full delay, which is what this window absorbs.
    pub grace: Duration,

    /// Capacity of the event bus broadcast ring buffer.
    ///
    /// Receivers lagging behind more than `bus_capacity` events observe
    /// `Lagged` and skip older items. Minimum value is 1 (enforced by Bus).
    pub bus_capacity: usize,

    /// Delay substituted for `-` symbols when playing via
    /// [`Engine::play`](crate::Engine::play).
    pub default_delay: Duration,
}

impl Config {
    /// Returns a bus capacity clamped to a minimum of 1.
    #[inline]
    pub fn bus_capacity_clamped(&self) -> usize {
        self.bus_capacity.max(1)
    }
}

impl Default for Config {
    /// Default configuration:
    ///
    /// - `grace = 5s` (longer than any sensible single wait symbol)
    /// - `bus_capacity = 256` (good baseline for short patterns)
    /// - `default_delay = 100ms` (a comfortable inter-pulse pause)
    fn default() -> Self {
        Self {
            grace: Duration::from_secs(5),
            bus_capacity: 256,
            default_delay: Duration::from_millis(100),
        }
    }
}
