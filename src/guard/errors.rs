// ============================================================================
// Normalization Errors
// Error taxonomy for the validate-then-rescale entry points
// ============================================================================

use crate::interfaces::SourceError;
use crate::numeric::NumericError;
use std::fmt;

/// Errors surfaced by the normalization entry points.
///
/// Every variant carries the offending values, so callers can assert on the
/// exact condition that fired without re-deriving it. Nothing is retried or
/// recovered here; retry policy belongs to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NormalizeError {
    /// Reported value is zero or negative
    NotPositive(i128),

    /// Reading age exceeds the caller's tolerance
    Stale { reported_at: u64, stale_after: u64 },

    /// Report timestamp lies in the future, or rescaling overflowed without
    /// a saturate flag set
    Arithmetic(NumericError),

    /// The oracle collaborator failed to produce a reading. Only the
    /// fetching entry point can surface this; the pure path never does.
    Source(SourceError),
}

impl fmt::Display for NormalizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NormalizeError::NotPositive(value) => {
                write!(f, "reported value {} is not positive", value)
            },
            NormalizeError::Stale {
                reported_at,
                stale_after,
            } => write!(
                f,
                "reading reported at {} is older than the tolerated {} seconds",
                reported_at, stale_after
            ),
            NormalizeError::Arithmetic(err) => write!(f, "{}", err),
            NormalizeError::Source(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for NormalizeError {}

impl From<NumericError> for NormalizeError {
    fn from(err: NumericError) -> Self {
        NormalizeError::Arithmetic(err)
    }
}

impl From<SourceError> for NormalizeError {
    fn from(err: SourceError) -> Self {
        NormalizeError::Source(err)
    }
}

/// Result type alias for normalization operations
pub type NormalizeResult<T> = Result<T, NormalizeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            NormalizeError::NotPositive(-5).to_string(),
            "reported value -5 is not positive"
        );
        assert_eq!(
            NormalizeError::Stale {
                reported_at: 100,
                stale_after: 50
            }
            .to_string(),
            "reading reported at 100 is older than the tolerated 50 seconds"
        );
    }

    #[test]
    fn test_from_conversions() {
        assert_eq!(
            NormalizeError::from(NumericError::Overflow),
            NormalizeError::Arithmetic(NumericError::Overflow)
        );
        assert_eq!(
            NormalizeError::from(SourceError::new("down")),
            NormalizeError::Source(SourceError::new("down"))
        );
    }
}
