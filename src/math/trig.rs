// ============================================================================
// Trigonometric Functions
// sin, cos and tan from polynomial kernels on [-π/4, π/4]
// ============================================================================

use super::constants::{horner, COS_COEFFS, SIN_COEFFS};
use super::reduce::reduce_angle;
use crate::numeric::{Fixed, Intermediate, NumericError, NumericResult, RawInt};

/// `sin(r)` for `|r| <= π/4`.
#[inline]
fn sin_kernel<S: RawInt, I: Intermediate<S>, const F: u32>(
    r: Fixed<S, I, F>,
) -> NumericResult<Fixed<S, I, F>> {
    let r2 = r.checked_mul(r)?;
    r.checked_mul(horner(r2, &SIN_COEFFS)?)
}

/// `cos(r)` for `|r| <= π/4`.
#[inline]
fn cos_kernel<S: RawInt, I: Intermediate<S>, const F: u32>(
    r: Fixed<S, I, F>,
) -> NumericResult<Fixed<S, I, F>> {
    let r2 = r.checked_mul(r)?;
    horner(r2, &COS_COEFFS)
}

/// Sine of `angle` (radians).
///
/// # Errors
/// Returns `Overflow` for layouts too narrow to hold π/2 or 1.
///
/// # Example
/// ```
/// use fixtrig::math::sin;
/// use fixtrig::numeric::Fixed20_12;
///
/// let x = Fixed20_12::from_f64(std::f64::consts::FRAC_PI_6)?;
/// assert!((sin(x)?.to_f64() - 0.5).abs() < 0.001);
/// # Ok::<(), fixtrig::numeric::NumericError>(())
/// ```
pub fn sin<S: RawInt, I: Intermediate<S>, const F: u32>(
    angle: Fixed<S, I, F>,
) -> NumericResult<Fixed<S, I, F>> {
    let reduced = reduce_angle(angle)?;
    let r = reduced.remainder;
    match reduced.quadrant {
        0 => sin_kernel(r),
        1 => cos_kernel(r),
        2 => sin_kernel(r)?.checked_neg(),
        _ => cos_kernel(r)?.checked_neg(),
    }
}

/// Cosine of `angle` (radians).
///
/// # Errors
/// Returns `Overflow` for layouts too narrow to hold π/2 or 1.
pub fn cos<S: RawInt, I: Intermediate<S>, const F: u32>(
    angle: Fixed<S, I, F>,
) -> NumericResult<Fixed<S, I, F>> {
    let reduced = reduce_angle(angle)?;
    let r = reduced.remainder;
    match reduced.quadrant {
        0 => cos_kernel(r),
        1 => sin_kernel(r)?.checked_neg(),
        2 => cos_kernel(r)?.checked_neg(),
        _ => sin_kernel(r),
    }
}

/// Sine and cosine of `angle` sharing a single range reduction.
pub fn sin_cos<S: RawInt, I: Intermediate<S>, const F: u32>(
    angle: Fixed<S, I, F>,
) -> NumericResult<(Fixed<S, I, F>, Fixed<S, I, F>)> {
    let reduced = reduce_angle(angle)?;
    let s = sin_kernel(reduced.remainder)?;
    let c = cos_kernel(reduced.remainder)?;
    Ok(match reduced.quadrant {
        0 => (s, c),
        1 => (c, s.checked_neg()?),
        2 => (s.checked_neg()?, c.checked_neg()?),
        _ => (c.checked_neg()?, s),
    })
}

/// Tangent of `angle` (radians).
///
/// Odd quadrants use `tan(r + π/2) = -cos(r) / sin(r)`, so the quotient
/// is always formed from the kernels directly.
///
/// # Errors
/// - `Singularity` if the angle reduces onto a pole of tan (the divisor
///   kernel is exactly zero at this precision)
/// - `Overflow` / `Underflow` if the quotient is out of range, which
///   happens close to a pole in narrow layouts
pub fn tan<S: RawInt, I: Intermediate<S>, const F: u32>(
    angle: Fixed<S, I, F>,
) -> NumericResult<Fixed<S, I, F>> {
    let reduced = reduce_angle(angle)?;
    let s = sin_kernel(reduced.remainder)?;
    let c = cos_kernel(reduced.remainder)?;

    let (numerator, denominator) = if reduced.quadrant % 2 == 0 {
        (s, c)
    } else {
        (c, s.checked_neg()?)
    };

    if denominator.is_zero() {
        tracing::debug!("tan singularity at raw angle {}", angle.raw());
        return Err(NumericError::Singularity);
    }

    numerator.checked_div(denominator)
}
