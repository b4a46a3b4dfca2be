//! # Host capability tiers.
//!
//! The engine never inspects the host directly; it asks an injected
//! [`CapabilityProbe`] for a [`Tier`]. This keeps the core testable without
//! a real device and decouples decoding/admission from any concrete host or
//! version check.
//!
//! ## Rules
//! - [`Tier::Unsupported`] gates submission: the engine silently drops
//!   patterns on such hosts.
//! - [`Tier::Sharpness`] gates the decoder's soft/rigid branch; below it,
//!   `X`/`x` fall back to heavy/light.
//! - Probes are read-only and environment-derived; a probe's answer is
//!   sampled once per call, never cached by the engine.

/// Pulse-playback capability of the current host, from none to full.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Tier {
    /// No pulse playback at all; submissions are dropped.
    Unsupported,
    /// Basic playback: light/medium/heavy pulses and waits.
    Playback,
    /// Extended playback: adds the soft/rigid sharpness variants.
    Sharpness,
}

impl Tier {
    /// True if the host can play pulses at all (gates `submit`).
    #[inline]
    pub fn supports_playback(&self) -> bool {
        *self >= Tier::Playback
    }

    /// True if the soft/rigid sharpness variants are available
    /// (gates the decoder's `X`/`x` branch).
    #[inline]
    pub fn supports_sharpness(&self) -> bool {
        *self >= Tier::Sharpness
    }
}

/// Read-only source of the host's capability tier.
///
/// Implementations wrap whatever platform query applies (device model,
/// OS version, build target). Tests use [`FixedTier`].
pub trait CapabilityProbe: Send + Sync + 'static {
    /// Returns the current capability tier.
    fn tier(&self) -> Tier;
}

/// Probe returning a constant tier.
///
/// Useful for tests and for hosts whose capability is known at build time.
///
/// # Example
/// ```
/// use staccato::{CapabilityProbe, FixedTier, Tier};
///
/// let probe = FixedTier(Tier::Playback);
/// assert!(probe.tier().supports_playback());
/// assert!(!probe.tier().supports_sharpness());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FixedTier(pub Tier);

impl CapabilityProbe for FixedTier {
    fn tier(&self) -> Tier {
        self.0
    }
}

impl Default for FixedTier {
    /// Full capability; the common case on modern hosts.
    fn default() -> Self {
        FixedTier(Tier::Sharpness)
    }
}
