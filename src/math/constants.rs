// ============================================================================
// Approximation Constants
// Reduction constants and polynomial coefficient tables
// ============================================================================
//
// Every constant is a raw i64 with CONST_FRAC_BITS fractional bits and is
// rounded to the instantiation's precision when loaded, so one table serves
// every (S, I, F) combination.

use crate::numeric::{Fixed, Intermediate, NumericResult, RawInt};

/// Fractional bits of every raw constant in this module
pub(crate) const CONST_FRAC_BITS: u32 = 60;

/// π × 2^60
pub(crate) const PI: i64 = 0x3243_F6A8_885A_308D;

/// π/2 × 2^60
pub(crate) const HALF_PI: i64 = 0x1921_FB54_442D_1847;

/// π/4 × 2^60
pub(crate) const QUARTER_PI: i64 = 0x0C90_FDAA_2216_8C23;

/// 2π × 2^60
pub(crate) const TWO_PI: i64 = 0x6487_ED51_10B4_611A;

/// Minimax sine kernel on [-π/4, π/4]:
/// `sin(r) ≈ r·(1 + r²·(s1 + r²·(s2 + r²·s3)))`
///
/// s1 = -1.6666654611e-1, s2 = 8.3321608736e-3, s3 = -1.9515295891e-4
pub(crate) const SIN_COEFFS: [i64; 4] = [
    1_152_921_504_606_846_976,
    -192_153_445_108_767_639,
    9_606_327_451_017_213,
    -224_996_043_014_995,
];

/// Minimax cosine kernel on [-π/4, π/4]:
/// `cos(r) ≈ 1 + r²·(-1/2 + r²·(c2 + r²·(c3 + r²·c4)))`
///
/// c2 = 4.166664568298827e-2, c3 = -1.388731625493765e-3,
/// c4 = 2.443315711809948e-5
pub(crate) const COS_COEFFS: [i64; 5] = [
    1_152_921_504_606_846_976,
    -576_460_752_303_423_488,
    48_038_371_832_751_221,
    -1_601_098_555_159_384,
    28_169_512_266_895,
];

/// Arctangent kernel on [0, 1], absolute error below 1e-5:
/// `atan(x) ≈ x·(a1 + x²·(a3 + x²·(a5 + x²·(a7 + x²·a9))))`
///
/// a1 = 0.9998660, a3 = -0.3302995, a5 = 0.1801410, a7 = -0.0851330,
/// a9 = 0.0208351
pub(crate) const ATAN_COEFFS: [i64; 5] = [
    1_152_767_013_125_229_659,
    -380_809_396_510_889_253,
    207_688_432_761_382_021,
    -98_151_666_451_694_704,
    24_021_234_840_634_117,
];

impl<S: RawInt, I: Intermediate<S>, const F: u32> Fixed<S, I, F> {
    /// π at this precision.
    ///
    /// # Errors
    /// Returns `Overflow` if π is out of range for this layout.
    #[inline]
    pub fn pi() -> NumericResult<Self> {
        Self::from_scaled(PI, CONST_FRAC_BITS)
    }

    /// π/2 at this precision.
    #[inline]
    pub fn half_pi() -> NumericResult<Self> {
        Self::from_scaled(HALF_PI, CONST_FRAC_BITS)
    }

    /// π/4 at this precision.
    #[inline]
    pub fn quarter_pi() -> NumericResult<Self> {
        Self::from_scaled(QUARTER_PI, CONST_FRAC_BITS)
    }

    /// 2π at this precision.
    #[inline]
    pub fn two_pi() -> NumericResult<Self> {
        Self::from_scaled(TWO_PI, CONST_FRAC_BITS)
    }
}

/// Evaluate `c0 + x·(c1 + x·(c2 + ...))` with Horner's method.
///
/// Coefficients are raw constants in ascending order of power.
pub(crate) fn horner<S: RawInt, I: Intermediate<S>, const F: u32>(
    x: Fixed<S, I, F>,
    coeffs: &[i64],
) -> NumericResult<Fixed<S, I, F>> {
    let mut terms = coeffs.iter().rev();
    let mut acc = match terms.next() {
        Some(&c) => Fixed::from_scaled(c, CONST_FRAC_BITS)?,
        None => return Ok(Fixed::ZERO),
    };

    for &c in terms {
        acc = acc
            .checked_mul(x)?
            .checked_add(Fixed::from_scaled(c, CONST_FRAC_BITS)?)?;
    }

    Ok(acc)
}
