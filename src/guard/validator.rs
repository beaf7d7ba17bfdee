// ============================================================================
// Validator
// Correctness checks and the fused validate-then-rescale operation
// ============================================================================

use super::errors::{NormalizeError, NormalizeResult};
use crate::domain::{CanonicalPrice, RawReading, ValidationContext};
use crate::numeric::{rescale, NumericError};

/// Apply the correctness checks to a raw reading.
///
/// Checks run in a fixed order and short-circuit on the first violation:
/// 1. Positivity: `value <= 0` fails with [`NormalizeError::NotPositive`].
///    An invalid price is a more fundamental problem than a stale one, so it
///    is checked first.
/// 2. Time sanity and staleness: the age is a checked subtraction. A report
///    timestamp in the future fails with an arithmetic error rather than
///    wrapping, since it signals corrupt oracle data rather than old data.
///    A surviving age is then compared against `stale_after`; zero tolerance
///    accepts only a reading stamped exactly at `now`.
pub fn validate(reading: &RawReading, ctx: &ValidationContext) -> NormalizeResult<()> {
    if reading.value <= 0 {
        return Err(NormalizeError::NotPositive(reading.value));
    }

    let age = reading
        .age_at(ctx.now)
        .ok_or(NormalizeError::Arithmetic(NumericError::Overflow))?;
    if age > ctx.stale_after {
        return Err(NormalizeError::Stale {
            reported_at: reading.reported_at,
            stale_after: ctx.stale_after,
        });
    }

    Ok(())
}

/// Validate a raw reading and rescale it to the canonical 18 fractional
/// digits.
///
/// This is the single externally meaningful operation of the crate: either a
/// fully validated, fully rescaled price comes back, or a typed failure does.
/// There is no partial result.
///
/// # Example
/// ```
/// use price_guard::guard::normalize;
/// use price_guard::domain::{RawReading, ValidationContext};
///
/// let reading = RawReading::new(100, 1_000, 6);
/// let ctx = ValidationContext::exact(1_000);
///
/// let price = normalize(&reading, &ctx).unwrap();
/// assert_eq!(price.raw_value(), 100_000_000_000_000);
/// ```
pub fn normalize(reading: &RawReading, ctx: &ValidationContext) -> NormalizeResult<CanonicalPrice> {
    validate(reading, ctx)?;

    // Positivity has been established, but the sign change still goes
    // through a checked conversion rather than a cast.
    let magnitude =
        u128::try_from(reading.value).map_err(|_| NormalizeError::Arithmetic(NumericError::Overflow))?;

    let scaled = rescale(magnitude, reading.source_decimals, ctx.scaling)?;
    Ok(CanonicalPrice::from_raw(scaled))
}

// ============================================================================
// Tests
// ============================================================================
