// ============================================================================
// Numeric Module
// Fixed-point binary arithmetic for float-free, deterministic computation
// ============================================================================
//
// This module provides:
// - Fixed<S, I, F>: Fixed-point number with storage word S, intermediate
//   word I and F fractional bits
// - RawInt / Intermediate: the integer kinds Fixed is generic over
// - NumericError: Error types for arithmetic operations
// - Q-format type aliases for common use cases
//
// Design principles:
// - No floating-point operations outside explicit conversions
// - All fallible arithmetic returns Result (no saturation, no wraparound)
// - Widen-multiply-round-narrow through the intermediate type
// - Compile-time configurable precision via const generics

mod errors;
mod fixed;
mod format;
mod raw;

pub use errors::{NumericError, NumericResult};
pub use fixed::{Fixed, Fixed16_16, Fixed20_12, Fixed32_32, Fixed8_8};
pub use raw::{Intermediate, RawInt};

pub(crate) use raw::isqrt_rounded;
