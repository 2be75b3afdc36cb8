// ============================================================================
// Shared helpers for integration tests
// ============================================================================

#![allow(dead_code)]

use fixtrig::numeric::{Fixed, Intermediate, NumericResult, RawInt};

/// Relative tolerance every approximation must meet
pub const TOLERANCE: f64 = 0.025;

/// Floor on the reference magnitude, so exact zeros need an exact result
pub const EPSILON: f64 = 1e-9;

/// True when `value` is within `tolerance` of `reference`, measured
/// relative to `max(|reference|, EPSILON)`.
pub fn has_maximum_error(value: f64, reference: f64, tolerance: f64) -> bool {
    (value - reference).abs() <= tolerance * reference.abs().max(EPSILON)
}

/// Convert `input`, apply `function`, and compare against `reference`.
///
/// Panics with the failing input so sweep failures are self-describing.
pub fn check<S, I, const F: u32>(
    name: &str,
    input: f64,
    function: fn(Fixed<S, I, F>) -> NumericResult<Fixed<S, I, F>>,
    reference: f64,
) where
    S: RawInt,
    I: Intermediate<S>,
{
    let x = Fixed::<S, I, F>::from_f64(input)
        .unwrap_or_else(|e| panic!("{}: cannot represent input {}: {}", name, input, e));
    let value = function(x)
        .unwrap_or_else(|e| panic!("{}({}) failed: {}", name, input, e))
        .to_f64();
    assert!(
        has_maximum_error(value, reference, TOLERANCE),
        "{}({}) = {}, expected {}",
        name,
        input,
        value,
        reference
    );
}

/// Whole degrees in `[-limit, limit]`
pub fn degrees(limit: i32) -> impl Iterator<Item = i32> {
    -limit..=limit
}
