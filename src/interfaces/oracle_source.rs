// ============================================================================
// Oracle Source Interface
// Defines the contract for the external price reporting collaborator
// ============================================================================

use crate::domain::RawReading;
use std::fmt;

/// Failure to obtain a reading from the collaborator.
///
/// Carries the collaborator's reason verbatim; the core adds nothing to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceError {
    /// Collaborator-supplied failure description
    pub reason: String,
}

impl SourceError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "oracle source unavailable: {}", self.reason)
    }
}

impl std::error::Error for SourceError {}

/// Result type alias for source reads
pub type SourceResult<T> = Result<T, SourceError>;

/// The one outward boundary of the crate: an oracle reader.
///
/// Implementations wrap whatever transport reaches the actual oracle (a
/// contract call, an RPC client, a feed cache). The returned tuple carries no
/// freshness or validity guarantee; callers validate every field.
pub trait OracleSource: Send + Sync {
    /// Fetch the latest reported value, its report timestamp, and the
    /// source's decimal precision.
    fn latest_reading(&self) -> SourceResult<RawReading>;

    /// Get the source name for logging/metrics
    fn name(&self) -> &str;
}

/// Fixed-reading source for tests and examples.
pub struct StaticSource {
    reading: RawReading,
}

impl StaticSource {
    pub fn new(reading: RawReading) -> Self {
        Self { reading }
    }
}

impl OracleSource for StaticSource {
    fn latest_reading(&self) -> SourceResult<RawReading> {
        Ok(self.reading)
    }

    fn name(&self) -> &str {
        "static"
    }
}
