// ============================================================================
// Fixed-Point Rescaler
// Converts integer values between decimal precisions with checked arithmetic
// ============================================================================

use super::errors::{NumericError, NumericResult};
use std::cmp::Ordering;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of fractional decimal digits every canonical price carries.
pub const CANONICAL_DECIMALS: u8 = 18;

/// The canonical scale factor (10^18).
pub const CANONICAL_SCALE: u128 = pow10(CANONICAL_DECIMALS);

/// Largest exponent for which 10^n fits in a u128.
const MAX_POW10: u8 = 38;

/// Compute 10^n at compile time.
///
/// Callers must keep `n <= MAX_POW10`; larger exponents do not fit in a u128.
const fn pow10(n: u8) -> u128 {
    let mut result: u128 = 1;
    let mut i = 0;
    while i < n {
        result *= 10;
        i += 1;
    }
    result
}

// ============================================================================
// Scaling Flags
// ============================================================================

/// Rounding direction applied when down-scaling discards fractional digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Rounding {
    /// Truncate toward zero (default)
    Down,
    /// Round away from zero on any nonzero remainder
    Up,
}

/// Policy applied when up-scaling exceeds the representable range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum OverflowPolicy {
    /// Fail with `NumericError::Overflow` (default)
    Fail,
    /// Clamp to `u128::MAX` instead of failing
    Saturate,
}

/// Caller-supplied flag set controlling rescale behavior.
///
/// Defaults to truncating division and fail-on-overflow. The fluent setters
/// select the alternative behaviors:
///
/// ```
/// use price_guard::numeric::ScalingFlags;
///
/// let flags = ScalingFlags::new().round_up().saturate_on_overflow();
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScalingFlags {
    /// Rounding direction for down-scaling
    pub rounding: Rounding,

    /// Overflow policy for up-scaling
    pub on_overflow: OverflowPolicy,
}

impl ScalingFlags {
    /// Default flag set: truncate, fail on overflow.
    pub const fn new() -> Self {
        Self {
            rounding: Rounding::Down,
            on_overflow: OverflowPolicy::Fail,
        }
    }

    /// Round away from zero when down-scaling discards digits.
    pub const fn round_up(mut self) -> Self {
        self.rounding = Rounding::Up;
        self
    }

    /// Clamp to `u128::MAX` instead of failing when up-scaling overflows.
    pub const fn saturate_on_overflow(mut self) -> Self {
        self.on_overflow = OverflowPolicy::Saturate;
        self
    }
}

impl Default for ScalingFlags {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Rescaling
// ============================================================================

/// Rescale a non-negative value from `source_decimals` fractional digits to
/// the canonical 18.
///
/// Up-scaling multiplies by `10^(18 - source_decimals)` with checked
/// arithmetic; down-scaling divides by `10^(source_decimals - 18)` with the
/// rounding direction selected by `flags`.
///
/// # Errors
/// Returns `Overflow` if up-scaling exceeds the u128 range and the flag set
/// does not request saturation.
#[inline]
pub fn rescale(value: u128, source_decimals: u8, flags: ScalingFlags) -> NumericResult<u128> {
    match source_decimals.cmp(&CANONICAL_DECIMALS) {
        Ordering::Equal => Ok(value),

        Ordering::Less => {
            let factor = pow10(CANONICAL_DECIMALS - source_decimals);
            match (value.checked_mul(factor), flags.on_overflow) {
                (Some(scaled), _) => Ok(scaled),
                (None, OverflowPolicy::Saturate) => Ok(u128::MAX),
                (None, OverflowPolicy::Fail) => Err(NumericError::Overflow),
            }
        },

        Ordering::Greater => {
            let digits = source_decimals - CANONICAL_DECIMALS;
            if digits > MAX_POW10 {
                // Divisor exceeds the u128 range, so the true quotient is
                // below one for every representable value.
                return Ok(match flags.rounding {
                    Rounding::Up if value > 0 => 1,
                    _ => 0,
                });
            }

            let divisor = pow10(digits);
            let quotient = value / divisor;
            match flags.rounding {
                Rounding::Up if value % divisor != 0 => Ok(quotient + 1),
                _ => Ok(quotient),
            }
        },
    }
}

// ============================================================================
// Tests
// ============================================================================
