//! # Symbol alphabet and token decoder.
//!
//! Maps one input character to a semantic [`Step`] — either a pulse of a
//! given [`PulseKind`] or a fixed wait. Decoding is the leaf of the pipeline:
//!
//! ```text
//! pattern chars ──► Step::decode ──► Step ──► pattern::compile ──► Engine
//! ```
//!
//! ## Alphabet
//! | Symbol | Step                                            |
//! |--------|-------------------------------------------------|
//! | `O`    | `Pulse(Heavy)`                                  |
//! | `o`    | `Pulse(Medium)`                                 |
//! | `.`    | `Pulse(Light)`                                  |
//! | `X`    | `Pulse(Rigid)`, or `Pulse(Heavy)` without the sharpness tier |
//! | `x`    | `Pulse(Soft)`, or `Pulse(Light)` without the sharpness tier  |
//! | `-`    | `Wait(delay)`                                   |
//!
//! Any other character decodes to `None`. This is deliberate lenient
//! parsing — unrecognized symbols are skipped, never surfaced as errors.
//!
//! ## Rules
//! - `decode` is a pure function: no side effects, deterministic for a
//!   given `sharpness` flag.
//! - Soft/rigid are capability-gated alternates; exactly one kind is
//!   selected per pulse symbol, never both.

use std::time::Duration;

/// Intensity/sharpness tier of a single pulse.
///
/// Ordered loosely by "weight": light < medium < heavy. `Soft` and `Rigid`
/// are sharpness variants of light and heavy that only exist on hosts with
/// the extended capability tier (see [`Tier`](crate::Tier)).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PulseKind {
    /// Gentle tap.
    Light,
    /// Mid-weight tap.
    Medium,
    /// Strong tap.
    Heavy,
    /// Soft-edged variant of [`PulseKind::Light`] (sharpness tier only).
    Soft,
    /// Hard-edged variant of [`PulseKind::Heavy`] (sharpness tier only).
    Rigid,
}

impl PulseKind {
    /// Returns a short stable label (snake_case) for use in logs/events.
    ///
    /// # Example
    /// ```
    /// use staccato::PulseKind;
    ///
    /// assert_eq!(PulseKind::Rigid.as_label(), "pulse_rigid");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            PulseKind::Light => "pulse_light",
            PulseKind::Medium => "pulse_medium",
            PulseKind::Heavy => "pulse_heavy",
            PulseKind::Soft => "pulse_soft",
            PulseKind::Rigid => "pulse_rigid",
        }
    }
}

/// One decoded element of a pattern: emit a pulse or hold a pause.
///
/// Immutable once constructed. Produced by [`Step::decode`], consumed by
/// [`compile`](crate::pattern::compile) and wrapped into jobs by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Emit a single pulse of the given kind.
    Pulse(PulseKind),
    /// Hold for the given duration before the next step.
    Wait(Duration),
}

impl Step {
    /// Decodes one symbol into a step, or `None` for unrecognized symbols.
    ///
    /// `delay` is the duration substituted for wait symbols (`-`).
    /// `sharpness` reports whether the host supports the soft/rigid
    /// variants; without it `X`/`x` fall back to heavy/light.
    ///
    /// # Example
    /// ```
    /// use std::time::Duration;
    /// use staccato::{PulseKind, Step};
    ///
    /// let d = Duration::from_millis(100);
    /// assert_eq!(Step::decode('O', d, true), Some(Step::Pulse(PulseKind::Heavy)));
    /// assert_eq!(Step::decode('-', d, true), Some(Step::Wait(d)));
    /// assert_eq!(Step::decode('X', d, false), Some(Step::Pulse(PulseKind::Heavy)));
    /// assert_eq!(Step::decode('z', d, true), None);
    /// ```
    pub fn decode(symbol: char, delay: Duration, sharpness: bool) -> Option<Step> {
        match symbol {
            'O' => Some(Step::Pulse(PulseKind::Heavy)),
            'o' => Some(Step::Pulse(PulseKind::Medium)),
            '.' => Some(Step::Pulse(PulseKind::Light)),
            'X' if sharpness => Some(Step::Pulse(PulseKind::Rigid)),
            'X' => Some(Step::Pulse(PulseKind::Heavy)),
            'x' if sharpness => Some(Step::Pulse(PulseKind::Soft)),
            'x' => Some(Step::Pulse(PulseKind::Light)),
            '-' => Some(Step::Wait(delay)),
            _ => None,
        }
    }
}
