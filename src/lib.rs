// ============================================================================
// Price Guard Library
// Oracle price validation and canonical fixed-point normalization
// ============================================================================

//! # Price Guard
//!
//! A validation-and-normalization layer between a consumer of price data and
//! an external price-reporting oracle.
//!
//! ## Features
//!
//! - **Typed rejection** of non-positive, stale, and future-stamped readings
//! - **Canonical 18-digit fixed point** output regardless of source precision
//! - **Caller-selected scaling flags** (rounding direction, overflow policy)
//! - **Pure core**: the validate-then-rescale path is side-effect free and
//!   fully unit-testable; I/O lives only in the fetching entry point
//!
//! ## Example
//!
//! ```rust
//! use price_guard::prelude::*;
//!
//! // The oracle collaborator; real deployments wrap an RPC or contract call
//! let source = StaticSource::new(RawReading::new(100, 1_000, 6));
//!
//! // Accept readings up to five minutes old
//! let guard = PriceGuardBuilder::new()
//!     .stale_after(300)
//!     .build(Box::new(source));
//!
//! let price = guard.read_at(1_000).unwrap();
//! assert_eq!(price.raw_value(), 100 * 10u128.pow(12)); // rescaled 6 -> 18
//!
//! // The pure path needs no source at all
//! let reading = RawReading::new(100, 1_000, 6);
//! let ctx = ValidationContext::new(1_000, 300);
//! assert_eq!(normalize(&reading, &ctx).unwrap(), price);
//! ```

pub mod domain;
pub mod guard;
pub mod interfaces;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{CanonicalPrice, RawReading, ValidationContext};
    pub use crate::guard::{
        normalize, validate, NormalizeError, NormalizeResult, PriceGuard, PriceGuardBuilder,
    };
    pub use crate::interfaces::{OracleSource, SourceError, SourceResult, StaticSource};
    pub use crate::numeric::{NumericError, OverflowPolicy, Rounding, ScalingFlags};
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;

    #[test]
    fn test_fresh_reading_is_rescaled() {
        // value=100 at 6 decimals, reported exactly now, zero tolerance
        let reading = RawReading::new(100, 1_000, 6);
        let ctx = ValidationContext::exact(1_000);

        let price = normalize(&reading, &ctx).unwrap();
        assert_eq!(price.raw_value(), 100 * 10u128.pow(12));
        assert_eq!(price.to_string(), "0.000100000000000000");
    }

    #[test]
    fn test_zero_value_rejected() {
        let reading = RawReading::new(0, 1_000, 6);
        let ctx = ValidationContext::exact(1_000);

        assert_eq!(
            normalize(&reading, &ctx),
            Err(NormalizeError::NotPositive(0))
        );
    }

    #[test]
    fn test_stale_reading_rejected() {
        // age = 100 seconds against a 50 second tolerance
        let reading = RawReading::new(5, 100, 8);
        let ctx = ValidationContext::new(200, 50);

        assert_eq!(
            normalize(&reading, &ctx),
            Err(NormalizeError::Stale {
                reported_at: 100,
                stale_after: 50
            })
        );
    }

    #[test]
    fn test_future_reading_rejected() {
        // reported_at=300 with now=200: integrity failure, regardless of the
        // generous tolerance
        let reading = RawReading::new(5, 300, 8);
        let ctx = ValidationContext::new(200, 1_000);

        assert_eq!(
            normalize(&reading, &ctx),
            Err(NormalizeError::Arithmetic(NumericError::Overflow))
        );
    }

    #[test]
    fn test_end_to_end_through_guard() {
        let source = StaticSource::new(RawReading::new(4_200_000_000, 1_700_000_000, 8));
        let guard = PriceGuardBuilder::new()
            .stale_after(300)
            .build(Box::new(source));

        // 42.0 at 8 decimals -> 42 * 10^18
        let price = guard.read_at(1_700_000_100).unwrap();
        assert_eq!(price.integer_part(), 42);
        assert_eq!(price.fractional_part(), 0);
    }

    #[test]
    fn test_saturating_guard_clamps_instead_of_failing() {
        let source = StaticSource::new(RawReading::new(i128::MAX, 1_000, 2));
        let guard = PriceGuardBuilder::new()
            .saturate_on_overflow()
            .build(Box::new(source));

        assert_eq!(guard.read_at(1_000), Ok(CanonicalPrice::MAX));
    }
}
