// ============================================================================
// Validation Context
// Per-call caller policy for freshness and rescaling
// ============================================================================

use crate::numeric::ScalingFlags;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Caller-supplied policy evaluated against a single reading.
///
/// Each call is fully independent: the context carries the caller's notion of
/// "now", its staleness tolerance, and the rescale flag set. Nothing in it is
/// retained between calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ValidationContext {
    /// Current unix timestamp (seconds) from the caller's clock
    pub now: u64,

    /// Maximum tolerable age in seconds. Zero means the reading must carry
    /// exactly this context's `now`; `u64::MAX` is effectively unbounded.
    pub stale_after: u64,

    /// Rescale behavior (rounding direction, overflow policy)
    pub scaling: ScalingFlags,
}

impl ValidationContext {
    /// Create a context with the default flag set (truncate, fail on overflow).
    pub fn new(now: u64, stale_after: u64) -> Self {
        Self {
            now,
            stale_after,
            scaling: ScalingFlags::new(),
        }
    }

    /// Zero-tolerance context: only a reading reported exactly at `now` passes.
    pub fn exact(now: u64) -> Self {
        Self::new(now, 0)
    }

    /// Context that accepts a reading of any age.
    ///
    /// No sentinel involved: an age can never exceed `u64::MAX` seconds.
    pub fn unbounded(now: u64) -> Self {
        Self::new(now, u64::MAX)
    }

    /// Builder method: replace the rescale flag set.
    pub fn with_scaling(mut self, scaling: ScalingFlags) -> Self {
        self.scaling = scaling;
        self
    }
}
