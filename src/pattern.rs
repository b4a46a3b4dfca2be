//! # Pattern compiler.
//!
//! Turns a full pattern string plus a wait delay into an ordered sequence
//! of [`Step`]s. Pure transformation: nothing here runs, sleeps, or touches
//! hardware.
//!
//! ## Rules
//! - Characters are decoded left to right; order in the output mirrors
//!   order in the input.
//! - Unrecognized characters contribute nothing (lenient skip).
//! - The result may be empty — a valid outcome, the engine then simply has
//!   nothing to do.
//!
//! ## Example
//! ```
//! use std::time::Duration;
//! use staccato::{compile, PulseKind, Step, Tier};
//!
//! let d = Duration::from_millis(100);
//! let steps = compile("O-o", d, Tier::Playback);
//! assert_eq!(
//!     steps,
//!     vec![
//!         Step::Pulse(PulseKind::Heavy),
//!         Step::Wait(d),
//!         Step::Pulse(PulseKind::Medium),
//!     ],
//! );
//! ```

use std::time::Duration;

use crate::capability::Tier;
use crate::symbols::Step;

/// Compiles a pattern string into an ordered step sequence.
///
/// `delay` is substituted for every wait symbol (`-`). `tier` decides
/// whether `X`/`x` decode to the sharpness variants or fall back.
pub fn compile(pattern: &str, delay: Duration, tier: Tier) -> Vec<Step> {
    let sharpness = tier.supports_sharpness();
    pattern
        .chars()
        .filter_map(|c| Step::decode(c, delay, sharpness))
        .collect()
}
