// ============================================================================
// Price Guard
// Fetching entry point wrapping the pure validate-then-rescale path
// ============================================================================

use super::errors::NormalizeResult;
use super::validator::normalize;
use crate::domain::{CanonicalPrice, ValidationContext};
use crate::interfaces::OracleSource;
use crate::numeric::ScalingFlags;
use chrono::Utc;

/// Entry point that reads from a live oracle source and normalizes the
/// result.
///
/// Owns the collaborator plus the caller's standing policy; every read
/// stamps the current wall clock and delegates to [`normalize`]. The guard
/// adds no validation logic of its own, only I/O.
pub struct PriceGuard {
    /// The external oracle reader collaborator
    source: Box<dyn OracleSource>,

    /// Maximum tolerable reading age in seconds
    stale_after: u64,

    /// Rescale behavior applied after validation
    scaling: ScalingFlags,
}

impl PriceGuard {
    /// Create a guard around an oracle source with the given staleness
    /// tolerance and default scaling flags.
    pub fn new(source: Box<dyn OracleSource>, stale_after: u64) -> Self {
        Self {
            source,
            stale_after,
            scaling: ScalingFlags::new(),
        }
    }

    /// Builder method: replace the rescale flag set.
    pub fn with_scaling(mut self, scaling: ScalingFlags) -> Self {
        self.scaling = scaling;
        self
    }

    /// Fetch the latest reading and normalize it against the current wall
    /// clock.
    pub fn read(&self) -> NormalizeResult<CanonicalPrice> {
        self.read_at(Utc::now().timestamp().max(0) as u64)
    }

    /// Fetch the latest reading and normalize it against a caller-supplied
    /// clock. Deterministic variant of [`read`](Self::read) for tests and
    /// replay.
    pub fn read_at(&self, now: u64) -> NormalizeResult<CanonicalPrice> {
        let reading = self.source.latest_reading().inspect_err(|err| {
            tracing::debug!("oracle source {} failed: {}", self.source.name(), err);
        })?;

        let ctx = ValidationContext::new(now, self.stale_after).with_scaling(self.scaling);
        let result = normalize(&reading, &ctx);

        match &result {
            Ok(price) => {
                tracing::debug!("normalized reading from {}: {}", self.source.name(), price);
            },
            Err(err) => {
                tracing::debug!("rejected reading from {}: {}", self.source.name(), err);
            },
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RawReading;
    use crate::guard::NormalizeError;
    use crate::interfaces::{SourceError, SourceResult, StaticSource};
    use crate::numeric::NumericError;

    struct DownSource;

    impl OracleSource for DownSource {
        fn latest_reading(&self) -> SourceResult<RawReading> {
            Err(SourceError::new("rpc timeout"))
        }

        fn name(&self) -> &str {
            "down"
        }
    }

    #[test]
    fn test_read_at_normalizes() {
        let source = StaticSource::new(RawReading::new(100, 1_000, 6));
        let guard = PriceGuard::new(Box::new(source), 0);

        let price = guard.read_at(1_000).unwrap();
        assert_eq!(price.raw_value(), 100_000_000_000_000);
    }

    #[test]
    fn test_read_at_applies_policy() {
        let source = StaticSource::new(RawReading::new(100, 900, 6));
        let guard = PriceGuard::new(Box::new(source), 50);

        assert_eq!(
            guard.read_at(1_000),
            Err(NormalizeError::Stale {
                reported_at: 900,
                stale_after: 50
            })
        );
    }

    #[test]
    fn test_read_at_applies_scaling_flags() {
        let source = StaticSource::new(RawReading::new(i128::MAX, 1_000, 0));
        let guard = PriceGuard::new(Box::new(source), 0)
            .with_scaling(ScalingFlags::new().saturate_on_overflow());

        assert_eq!(guard.read_at(1_000), Ok(CanonicalPrice::MAX));
    }

    #[test]
    fn test_source_failure_propagates() {
        let guard = PriceGuard::new(Box::new(DownSource), 0);
        assert_eq!(
            guard.read_at(1_000),
            Err(NormalizeError::Source(SourceError::new("rpc timeout")))
        );
    }

    #[test]
    fn test_future_reading_rejected_through_guard() {
        let source = StaticSource::new(RawReading::new(5, 2_000, 8));
        let guard = PriceGuard::new(Box::new(source), 1_000);

        assert_eq!(
            guard.read_at(1_000),
            Err(NormalizeError::Arithmetic(NumericError::Overflow))
        );
    }
}
