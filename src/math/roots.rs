// ============================================================================
// Roots
// Square root and hypotenuse through the intermediate integer type
// ============================================================================

use crate::numeric::{isqrt_rounded, Fixed, Intermediate, NumericError, NumericResult, RawInt};

/// Square root of `x`, rounded to the nearest quantum.
///
/// The raw value is widened to `I` and pre-shifted by `F`, so the integer
/// root of `raw·2^F` is directly the raw result.
///
/// # Errors
/// Returns `DomainError` if `x` is negative.
///
/// # Example
/// ```
/// use fixtrig::math::sqrt;
/// use fixtrig::numeric::Fixed16_16;
///
/// let two = Fixed16_16::from_integer(2)?;
/// assert!((sqrt(two)?.to_f64() - std::f64::consts::SQRT_2).abs() < 1e-4);
/// # Ok::<(), fixtrig::numeric::NumericError>(())
/// ```
pub fn sqrt<S: RawInt, I: Intermediate<S>, const F: u32>(
    x: Fixed<S, I, F>,
) -> NumericResult<Fixed<S, I, F>> {
    if x.is_negative() {
        tracing::debug!("sqrt domain error at raw value {}", x.raw());
        return Err(NumericError::DomainError);
    }

    // raw < 2^(S-1) and F < S, so the shifted value is below 2^(2S-2)
    let scaled = I::from(x.raw()) << F;
    Fixed::from_wide(isqrt_rounded(scaled))
}

/// `sqrt(a² + b²)` without intermediate overflow of the squares.
///
/// Both squares are kept at `2F` fractional bits in `I` and a single root
/// brings the sum back to `F` bits.
///
/// # Errors
/// Returns `Overflow` if the sum of squares exceeds `I` or the result
/// exceeds the storage range.
pub fn hypot<S: RawInt, I: Intermediate<S>, const F: u32>(
    a: Fixed<S, I, F>,
    b: Fixed<S, I, F>,
) -> NumericResult<Fixed<S, I, F>> {
    let a = I::from(a.raw());
    let b = I::from(b.raw());
    let sum = (a * a).checked_add(b * b).ok_or(NumericError::Overflow)?;
    Fixed::from_wide(isqrt_rounded(sum))
}
