// ============================================================================
// Inverse Trigonometric Functions
// atan, atan2, asin and acos from a single arctangent kernel on [0, 1]
// ============================================================================

use super::constants::{horner, ATAN_COEFFS};
use super::roots::sqrt;
use crate::numeric::{Fixed, Intermediate, NumericError, NumericResult, RawInt};

/// `atan(x)` for `0 <= x <= 1`.
#[inline]
fn atan_unit<S: RawInt, I: Intermediate<S>, const F: u32>(
    x: Fixed<S, I, F>,
) -> NumericResult<Fixed<S, I, F>> {
    let x2 = x.checked_mul(x)?;
    x.checked_mul(horner(x2, &ATAN_COEFFS)?)
}

/// `|x|`, with MIN mirrored onto MAX (one quantum short of its magnitude).
#[inline]
fn magnitude<S: RawInt, I: Intermediate<S>, const F: u32>(x: Fixed<S, I, F>) -> Fixed<S, I, F> {
    x.checked_abs().unwrap_or(Fixed::MAX)
}

/// `atan(a / b)` for `a, b >= 0`, not both zero, in `[0, π/2]`.
///
/// The smaller operand is always divided by the larger, so the kernel
/// only ever sees arguments in `[0, 1]` and the quotient cannot overflow.
fn atan_ratio<S: RawInt, I: Intermediate<S>, const F: u32>(
    a: Fixed<S, I, F>,
    b: Fixed<S, I, F>,
) -> NumericResult<Fixed<S, I, F>> {
    if a > b {
        Fixed::<S, I, F>::half_pi()?.checked_sub(atan_unit(b.checked_div(a)?)?)
    } else {
        atan_unit(a.checked_div(b)?)
    }
}

#[inline]
fn with_sign<S: RawInt, I: Intermediate<S>, const F: u32>(
    value: Fixed<S, I, F>,
    negative: bool,
) -> NumericResult<Fixed<S, I, F>> {
    if negative {
        value.checked_neg()
    } else {
        Ok(value)
    }
}

/// Arctangent of `x`, in `[-π/2, π/2]`.
///
/// Arguments beyond ±1 use `atan(x) = π/2 − atan(1/x)`.
///
/// # Errors
/// Returns `Overflow` for layouts too narrow to hold π/2.
pub fn atan<S: RawInt, I: Intermediate<S>, const F: u32>(
    x: Fixed<S, I, F>,
) -> NumericResult<Fixed<S, I, F>> {
    let base = atan_ratio(magnitude(x), Fixed::one()?)?;
    with_sign(base, x.is_negative())
}

/// Four-quadrant arctangent of `y / x`, in `[-π, π]`.
///
/// - `x == 0`: `±π/2` by the sign of `y`
/// - `x == 0, y == 0`: `0`
/// - `y == 0, x < 0`: `π`
///
/// # Example
/// ```
/// use fixtrig::math::atan2;
/// use fixtrig::numeric::Fixed20_12;
///
/// let one = Fixed20_12::one()?;
/// let angle = atan2(one, -one)?;
/// assert!((angle.to_f64() - 3.0 * std::f64::consts::FRAC_PI_4).abs() < 0.002);
/// assert_eq!(atan2(Fixed20_12::ZERO, Fixed20_12::ZERO)?, Fixed20_12::ZERO);
/// # Ok::<(), fixtrig::numeric::NumericError>(())
/// ```
pub fn atan2<S: RawInt, I: Intermediate<S>, const F: u32>(
    y: Fixed<S, I, F>,
    x: Fixed<S, I, F>,
) -> NumericResult<Fixed<S, I, F>> {
    if x.is_zero() {
        if y.is_zero() {
            return Ok(Fixed::ZERO);
        }
        return with_sign(Fixed::half_pi()?, y.is_negative());
    }

    let base = atan_ratio(magnitude(y), magnitude(x))?;
    let angle = if x.is_negative() {
        Fixed::<S, I, F>::pi()?.checked_sub(base)?
    } else {
        base
    };
    with_sign(angle, y.is_negative())
}

/// Arcsine of `x`, in `[-π/2, π/2]`.
///
/// Computed as `atan(x / sqrt(1 − x²))`; at `|x| = 1` (or wherever
/// `1 − x²` rounds to zero) the result is exactly `±π/2`.
///
/// # Errors
/// Returns `DomainError` if `|x| > 1`.
pub fn asin<S: RawInt, I: Intermediate<S>, const F: u32>(
    x: Fixed<S, I, F>,
) -> NumericResult<Fixed<S, I, F>> {
    let one = Fixed::<S, I, F>::one()?;
    let abs = magnitude(x);
    if abs > one {
        tracing::debug!("asin domain error at raw value {}", x.raw());
        return Err(NumericError::DomainError);
    }

    let cos_sq = one.checked_sub(abs.checked_mul(abs)?)?;
    let base = if cos_sq.is_zero() {
        Fixed::half_pi()?
    } else {
        atan_ratio(abs, sqrt(cos_sq)?)?
    };
    with_sign(base, x.is_negative())
}

/// Arccosine of `x`, in `[0, π]`, as `π/2 − asin(x)`.
///
/// # Errors
/// Returns `DomainError` if `|x| > 1`.
pub fn acos<S: RawInt, I: Intermediate<S>, const F: u32>(
    x: Fixed<S, I, F>,
) -> NumericResult<Fixed<S, I, F>> {
    Fixed::<S, I, F>::half_pi()?.checked_sub(asin(x)?)
}
