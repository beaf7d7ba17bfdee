// ============================================================================
// Numeric Module
// Fixed-point rescaling for oracle price normalization
// ============================================================================
//
// This module provides:
// - rescale: precision conversion to the canonical 18 fractional digits
// - ScalingFlags: caller-selected rounding direction and overflow policy
// - NumericError: error types for arithmetic operations
//
// Design principles:
// - No floating-point operations
// - All arithmetic is checked and returns Result (no panics)
// - Powers of ten computed at compile time

mod errors;
mod rescale;

pub use errors::{NumericError, NumericResult};
pub use rescale::{
    rescale, OverflowPolicy, Rounding, ScalingFlags, CANONICAL_DECIMALS, CANONICAL_SCALE,
};
