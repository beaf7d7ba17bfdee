// ============================================================================
// Guard Factory
// Creates price guards with fluent configuration
// ============================================================================

use super::price_guard::PriceGuard;
use crate::interfaces::OracleSource;
use crate::numeric::ScalingFlags;

/// Builder for creating price guards with fluent API
///
/// # Example
/// ```
/// use price_guard::guard::PriceGuardBuilder;
/// use price_guard::domain::RawReading;
/// use price_guard::interfaces::StaticSource;
///
/// let source = StaticSource::new(RawReading::new(100, 1_000, 6));
/// let guard = PriceGuardBuilder::new()
///     .stale_after(300)
///     .round_up()
///     .saturate_on_overflow()
///     .build(Box::new(source));
///
/// assert!(guard.read_at(1_000).is_ok());
/// ```
pub struct PriceGuardBuilder {
    stale_after: u64,
    scaling: ScalingFlags,
}

impl PriceGuardBuilder {
    /// Create a builder with zero staleness tolerance and default scaling
    /// flags. Zero tolerance only accepts a reading stamped exactly at the
    /// read instant, so callers almost always want [`stale_after`](Self::stale_after).
    pub fn new() -> Self {
        Self {
            stale_after: 0,
            scaling: ScalingFlags::new(),
        }
    }

    /// Set the maximum tolerable reading age in seconds.
    pub fn stale_after(mut self, seconds: u64) -> Self {
        self.stale_after = seconds;
        self
    }

    /// Round away from zero when down-scaling discards digits.
    pub fn round_up(mut self) -> Self {
        self.scaling = self.scaling.round_up();
        self
    }

    /// Clamp to the maximum representable price instead of failing when
    /// up-scaling overflows.
    pub fn saturate_on_overflow(mut self) -> Self {
        self.scaling = self.scaling.saturate_on_overflow();
        self
    }

    /// Build the guard around the given oracle source.
    pub fn build(self, source: Box<dyn OracleSource>) -> PriceGuard {
        PriceGuard::new(source, self.stale_after).with_scaling(self.scaling)
    }
}

impl Default for PriceGuardBuilder {
    fn default() -> Self {
        Self::new()
    }
}
