// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod oracle_source;

pub use oracle_source::{OracleSource, SourceError, SourceResult, StaticSource};
