// ============================================================================
// Range Reduction
// Maps an angle onto a quadrant and a remainder in [-π/4, π/4]
// ============================================================================

use super::constants::{CONST_FRAC_BITS, TWO_PI};
use crate::numeric::{Fixed, Intermediate, NumericResult, RawInt};

/// A reduced angle: `angle ≡ quadrant·π/2 + remainder (mod 2π)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Reduced<S: RawInt, I: Intermediate<S>, const F: u32> {
    /// Quadrant index in `0..4`
    pub quadrant: u8,
    /// Remaining angle, within `[-π/4, π/4]` up to rounding
    pub remainder: Fixed<S, I, F>,
}

/// Reduce `angle` (radians) for the sine and cosine kernels.
///
/// 1. Fold modulo 2π at the constants' full precision (skipped when 2π is
///    not representable, since every value of such a layout already lies
///    inside (-2π, 2π)).
/// 2. Wrap into [-π, π].
/// 3. Pick the nearest multiple of π/2 and keep the difference.
///
/// Every step uses checked arithmetic and a fixed number of operations.
///
/// # Errors
/// Returns `Overflow` if π/2 is not representable in this layout.
pub(crate) fn reduce_angle<S: RawInt, I: Intermediate<S>, const F: u32>(
    angle: Fixed<S, I, F>,
) -> NumericResult<Reduced<S, I, F>> {
    let half_pi = Fixed::<S, I, F>::half_pi()?;

    let mut x = if Fixed::<S, I, F>::two_pi().is_ok() {
        fold_two_pi(angle)?
    } else {
        angle
    };

    if let Ok(pi) = Fixed::<S, I, F>::pi() {
        if x > pi {
            x = x.checked_sub(pi)?.checked_sub(pi)?;
        } else if x < pi.checked_neg()? {
            x = x.checked_add(pi)?.checked_add(pi)?;
        }
    }

    // |x| <= π here, so the multiple is one of -2..=2
    let multiple = x.checked_div(half_pi)?.round()?.integer_part();
    let remainder = x.checked_sub(half_pi.checked_mul_int(multiple)?)?;

    Ok(Reduced {
        quadrant: multiple.rem_euclid(4) as u8,
        remainder,
    })
}

/// `angle mod 2π`, truncated toward zero, rounded once back to `F` bits.
///
/// Folding against 2π rounded to `F` bits would scale its rounding error by
/// the number of whole turns, so the angle is widened to the 60-bit scale of
/// the constant instead.
fn fold_two_pi<S: RawInt, I: Intermediate<S>, const F: u32>(
    angle: Fixed<S, I, F>,
) -> NumericResult<Fixed<S, I, F>> {
    // 2π fits, so F <= S::BITS - 4 <= 60; |raw| < 2^63 then keeps the
    // widened value below 2^123
    let widened = angle.raw().to_i128() << (CONST_FRAC_BITS - F);
    Fixed::from_i128_scaled(widened % i128::from(TWO_PI), CONST_FRAC_BITS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    type Q12 = Fixed<i32, i64, 12>;

    fn q(value: f64) -> Q12 {
        Q12::from_f64(value).unwrap()
    }

    fn assert_close(actual: Q12, expected: f64) {
        let error = (actual.to_f64() - expected).abs();
        assert!(error <= 4.0 / 4096.0, "got {}, expected {}", actual, expected);
    }

    #[test]
    fn test_zero_stays_in_first_quadrant() {
        let reduced = reduce_angle(Q12::ZERO).unwrap();
        assert_eq!(reduced.quadrant, 0);
        assert_eq!(reduced.remainder, Q12::ZERO);
    }

    #[test]
    fn test_quadrant_selection() {
        let reduced = reduce_angle(q(FRAC_PI_2 + 0.1)).unwrap();
        assert_eq!(reduced.quadrant, 1);
        assert_close(reduced.remainder, 0.1);

        let reduced = reduce_angle(q(-FRAC_PI_2 - 0.2)).unwrap();
        assert_eq!(reduced.quadrant, 3);
        assert_close(reduced.remainder, -0.2);

        let reduced = reduce_angle(q(-PI)).unwrap();
        assert_eq!(reduced.quadrant, 2);
        assert_close(reduced.remainder, 0.0);
    }

    #[test]
    fn test_large_angles_fold_modulo_two_pi() {
        let reduced = reduce_angle(q(10.0 * PI + 0.3)).unwrap();
        assert_eq!(reduced.quadrant, 0);
        assert_close(reduced.remainder, 0.3);

        // -1800 degrees is five full turns
        let reduced = reduce_angle(q(-10.0 * PI)).unwrap();
        assert_eq!(reduced.quadrant, 0);
        assert!(reduced.remainder.to_f64().abs() < 0.01);
    }

    #[test]
    fn test_many_turns_keep_the_remainder() {
        // Q12 holds these integers exactly; f64 reduces them to ~1e-10
        for angle in [10_000.0f64, 100_000.0, 500_000.0] {
            let reduced = reduce_angle(Q12::from_f64(angle).unwrap()).unwrap();
            let offset = angle - f64::from(reduced.quadrant) * FRAC_PI_2;
            let expected = (offset + PI).rem_euclid(2.0 * PI) - PI;
            assert_close(reduced.remainder, expected);
        }

        // 500000 rad is 79577 turns plus 2.9628 rad
        let reduced = reduce_angle(Q12::from_integer(500_000).unwrap()).unwrap();
        assert_eq!(reduced.quadrant, 2);
    }

    #[test]
    fn test_layout_without_two_pi() {
        // Q2.13 cannot hold 2π; 3.0 is reduced to quadrant 2
        type Q13 = Fixed<i16, i32, 13>;
        let reduced = reduce_angle(Q13::from_f64(3.0).unwrap()).unwrap();
        assert_eq!(reduced.quadrant, 2);
        assert!((reduced.remainder.to_f64() - (3.0 - PI)).abs() < 0.001);
    }

    #[test]
    fn test_layout_without_half_pi() {
        type Q7 = Fixed<i8, i16, 7>;
        assert!(reduce_angle(Q7::from_raw(10)).is_err());
    }

    #[test]
    fn test_remainder_bound_quickcheck() {
        fn prop(raw: i32) -> bool {
            let reduced = reduce_angle(Q12::from_raw(raw)).unwrap();
            reduced.quadrant < 4 && reduced.remainder.to_f64().abs() <= FRAC_PI_4 + 8.0 / 4096.0
        }
        quickcheck::quickcheck(prop as fn(i32) -> bool);
    }
}
