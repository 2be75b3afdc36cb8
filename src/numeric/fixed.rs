// ============================================================================
// Fixed-Point Binary Number
// Scaled-integer arithmetic with compile-time storage, intermediate and
// fractional-bit parameters
// ============================================================================

use super::errors::{NumericError, NumericResult};
use super::raw::{round_shr, Intermediate, RawInt};
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, Sub, SubAssign};

/// Fixed-point binary number with compile-time precision.
///
/// Internally stores `value × 2^F` in the storage integer `S`. Products and
/// quotients are formed in the intermediate integer `I` and narrowed back.
///
/// # Type Parameters
/// - `S`: storage integer (`i8`, `i16`, `i32`, `i64`)
/// - `I`: intermediate integer, at least twice as wide as `S`
/// - `F`: number of fractional bits, `0 <= F < S::BITS`
///
/// Both width requirements are checked at compile time:
///
/// ```compile_fail
/// use fixtrig::numeric::Fixed;
///
/// // i32 cannot hold the product of two i32 raw values
/// let x = Fixed::<i32, i32, 12>::from_integer(1);
/// ```
///
/// # Overflow policy
/// Every fallible operation has a `checked_*` form returning
/// [`NumericResult`]. Results above the storage range are reported as
/// [`NumericError::Overflow`], results below it as
/// [`NumericError::Underflow`]. Nothing saturates and nothing wraps.
/// The operator impls (`+`, `-`, `*`, `/`, `%`, unary `-`) panic on those
/// same failures, like primitive integers do in debug builds.
///
/// # Rounding
/// Multiplication, division, float conversion and precision reduction
/// round to nearest, ties away from zero.
///
/// # Example
/// ```
/// use fixtrig::numeric::Fixed;
///
/// type Q = Fixed<i32, i64, 12>;
///
/// let a = Q::from_f64(2.5)?;
/// let b = Q::from_integer(4)?;
/// assert_eq!(a.checked_mul(b)?, Q::from_integer(10)?);
/// assert_eq!(b.checked_div(Q::ZERO), Err(fixtrig::numeric::NumericError::DivisionByZero));
/// # Ok::<(), fixtrig::numeric::NumericError>(())
/// ```
#[derive(Clone, Copy)]
#[repr(transparent)]
pub struct Fixed<S, I, const F: u32> {
    raw: S,
    wide: PhantomData<I>,
}

impl<S: RawInt, I: Intermediate<S>, const F: u32> Fixed<S, I, F> {
    const LAYOUT: () = {
        assert!(
            I::BITS >= 2 * S::BITS,
            "intermediate type must be at least twice as wide as the storage type"
        );
        assert!(F < S::BITS, "fractional bits must be fewer than the storage bits");
    };

    /// Number of fractional bits
    pub const FRAC_BITS: u32 = F;

    /// Zero value
    pub const ZERO: Self = {
        let () = Self::LAYOUT;
        Self {
            raw: S::ZERO,
            wide: PhantomData,
        }
    };

    /// Smallest positive value (one quantum, `2^-F`)
    pub const EPSILON: Self = {
        let () = Self::LAYOUT;
        Self {
            raw: S::ONE,
            wide: PhantomData,
        }
    };

    /// Maximum representable value
    pub const MAX: Self = {
        let () = Self::LAYOUT;
        Self {
            raw: S::MAX,
            wide: PhantomData,
        }
    };

    /// Minimum representable value
    pub const MIN: Self = {
        let () = Self::LAYOUT;
        Self {
            raw: S::MIN,
            wide: PhantomData,
        }
    };

    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from raw internal representation (`value × 2^F`).
    #[inline]
    pub fn from_raw(raw: S) -> Self {
        let () = Self::LAYOUT;
        Self {
            raw,
            wide: PhantomData,
        }
    }

    /// One (1.0).
    ///
    /// # Errors
    /// Returns `Overflow` when `F == S::BITS - 1` (range is `[-1, 1)`).
    #[inline]
    pub fn one() -> NumericResult<Self> {
        Self::from_integer(1)
    }

    /// Create from an integer value.
    ///
    /// # Errors
    /// Returns `Overflow` or `Underflow` if `value << F` does not fit in `S`.
    #[inline]
    pub fn from_integer(value: i64) -> NumericResult<Self> {
        Self::from_i128_scaled(i128::from(value), 0)
    }

    /// Create from a raw value expressed with `frac_bits` fractional bits.
    ///
    /// Extra precision is dropped with round-half-away-from-zero; missing
    /// precision is filled with zero bits. Used to load the constant tables
    /// at any instantiation's precision.
    ///
    /// # Errors
    /// Returns `Overflow` or `Underflow` if the rescaled value does not fit.
    #[inline]
    pub fn from_scaled(raw: i64, frac_bits: u32) -> NumericResult<Self> {
        Self::from_i128_scaled(i128::from(raw), frac_bits)
    }

    pub(crate) fn from_i128_scaled(value: i128, frac_bits: u32) -> NumericResult<Self> {
        let rescaled = if frac_bits > F {
            let shift = frac_bits - F;
            if shift >= i128::BITS - 1 {
                0
            } else {
                round_shr(value, shift)
            }
        } else {
            // F < 64, so the multiplier is at most 2^63
            value
                .checked_mul(1i128 << (F - frac_bits))
                .ok_or_else(|| NumericError::out_of_range(value < 0))?
        };

        S::from_i128(rescaled)
            .map(Self::from_raw)
            .ok_or_else(|| NumericError::out_of_range(rescaled < 0))
    }

    /// Narrow an intermediate raw value back to storage.
    #[inline]
    pub(crate) fn from_wide(wide: I) -> NumericResult<Self> {
        let negative = wide < I::ZERO;
        <I as TryInto<S>>::try_into(wide)
            .map(Self::from_raw)
            .map_err(|_| NumericError::out_of_range(negative))
    }

    /// Convert to another fractional-bit count `G`.
    ///
    /// Shifts left when `G > F`; shifts right with rounding when `G < F`.
    ///
    /// # Errors
    /// Returns `Overflow` or `Underflow` if the value does not fit at `G`.
    #[inline]
    pub fn rescale<const G: u32>(self) -> NumericResult<Fixed<S, I, G>> {
        Fixed::<S, I, G>::from_i128_scaled(self.raw.to_i128(), F)
    }

    // ========================================================================
    // Floating-point conversion (API boundaries only)
    // ========================================================================

    /// Create from an `f64`, rounding half away from zero to `F` bits.
    ///
    /// # Errors
    /// - `InvalidInput` for NaN or infinity
    /// - `Overflow` / `Underflow` if the value is out of range
    pub fn from_f64(value: f64) -> NumericResult<Self> {
        if !value.is_finite() {
            return Err(NumericError::InvalidInput);
        }

        let scaled = (value * pow2(F)).round();
        let negative = scaled < 0.0;
        if scaled.abs() >= pow2(i128::BITS - 1) {
            return Err(NumericError::out_of_range(negative));
        }

        S::from_i128(scaled as i128)
            .map(Self::from_raw)
            .ok_or(NumericError::out_of_range(negative))
    }

    /// Create from an `f32`, rounding half away from zero to `F` bits.
    #[inline]
    pub fn from_f32(value: f32) -> NumericResult<Self> {
        Self::from_f64(f64::from(value))
    }

    /// Convert to `f64` (exact while the raw value has at most 53
    /// significant bits).
    #[inline]
    pub fn to_f64(self) -> f64 {
        self.raw.to_f64() / pow2(F)
    }

    /// Convert to `f32`.
    #[inline]
    pub fn to_f32(self) -> f32 {
        self.to_f64() as f32
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Get the raw internal value (`value × 2^F`).
    #[inline]
    pub fn raw(self) -> S {
        self.raw
    }

    /// Get the integer part (truncated toward zero).
    #[inline]
    pub fn integer_part(self) -> i64 {
        // S is at most 64 bits wide (I must be twice as wide as S), and the
        // truncated value is a whole number so the shift is exact
        (self.trunc().raw.to_i128() >> F) as i64
    }

    /// Get the fractional bits of the raw value (always non-negative,
    /// the distance above [`floor`](Self::floor) in quanta).
    #[inline]
    pub fn fractional_raw(self) -> S {
        self.raw - self.floor().raw
    }

    /// Check if value is zero.
    #[inline]
    pub fn is_zero(self) -> bool {
        self.raw == S::ZERO
    }

    /// Check if value is positive.
    #[inline]
    pub fn is_positive(self) -> bool {
        self.raw > S::ZERO
    }

    /// Check if value is negative.
    #[inline]
    pub fn is_negative(self) -> bool {
        self.raw < S::ZERO
    }

    /// Returns the minimum of two values.
    #[inline]
    pub fn min(self, other: Self) -> Self {
        Self::from_raw(self.raw.min(other.raw))
    }

    /// Returns the maximum of two values.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self::from_raw(self.raw.max(other.raw))
    }

    /// Restrict the value to `[lo, hi]`.
    #[inline]
    pub fn clamp(self, lo: Self, hi: Self) -> Self {
        debug_assert!(lo <= hi);
        self.max(lo).min(hi)
    }

    /// Sign of the value: -1, 0 or 1.
    ///
    /// # Errors
    /// Returns `Overflow` when 1 is not representable and `self` is positive.
    #[inline]
    pub fn signum(self) -> NumericResult<Self> {
        if self.is_zero() {
            Ok(Self::ZERO)
        } else if self.is_negative() {
            Self::from_integer(-1)
        } else {
            Self::one()
        }
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    /// Checked addition.
    ///
    /// # Errors
    /// Returns `Overflow` or `Underflow` if the result is out of range.
    #[inline]
    pub fn checked_add(self, rhs: Self) -> NumericResult<Self> {
        self.raw
            .checked_add(rhs.raw)
            .map(Self::from_raw)
            .ok_or_else(|| NumericError::out_of_range(rhs.raw < S::ZERO))
    }

    /// Checked subtraction.
    ///
    /// # Errors
    /// Returns `Overflow` or `Underflow` if the result is out of range.
    #[inline]
    pub fn checked_sub(self, rhs: Self) -> NumericResult<Self> {
        self.raw
            .checked_sub(rhs.raw)
            .map(Self::from_raw)
            .ok_or_else(|| NumericError::out_of_range(rhs.raw > S::ZERO))
    }

    /// Checked multiplication with round half away from zero.
    ///
    /// Widens both operands to `I`, multiplies, rounds away the extra `F`
    /// fractional bits and narrows back to `S`.
    ///
    /// # Errors
    /// Returns `Overflow` or `Underflow` if the result is out of range.
    #[inline]
    pub fn checked_mul(self, rhs: Self) -> NumericResult<Self> {
        // |a|, |b| <= 2^(S-1), so |a * b| <= 2^(2S-2) fits in I
        let product = I::from(self.raw) * I::from(rhs.raw);
        Self::from_wide(round_shr(product, F))
    }

    /// Multiply by an integer (no rescaling needed).
    ///
    /// # Errors
    /// Returns `Overflow` or `Underflow` if the result is out of range.
    #[inline]
    pub fn checked_mul_int(self, rhs: i64) -> NumericResult<Self> {
        // i64 × i64 always fits in i128
        let product = self.raw.to_i128() * i128::from(rhs);
        S::from_i128(product)
            .map(Self::from_raw)
            .ok_or_else(|| NumericError::out_of_range(product < 0))
    }

    /// Checked division with round half away from zero.
    ///
    /// The dividend is widened to `I` and pre-shifted by `F` so the quotient
    /// keeps full fractional precision.
    ///
    /// # Errors
    /// - `DivisionByZero` if `rhs` is zero
    /// - `Overflow` / `Underflow` if the quotient is out of range
    pub fn checked_div(self, rhs: Self) -> NumericResult<Self> {
        if rhs.raw == S::ZERO {
            return Err(NumericError::DivisionByZero);
        }

        let negative = (self.raw < S::ZERO) != (rhs.raw < S::ZERO);
        let dividend = abs_wide(I::from(self.raw)) << F;
        let divisor = abs_wide(I::from(rhs.raw));
        let two = I::ONE + I::ONE;

        // |dividend| <= 2^(2S-2), adding half the divisor cannot overflow I
        let quotient = (dividend + divisor / two) / divisor;
        Self::from_wide(if negative { -quotient } else { quotient })
    }

    /// Checked remainder, truncated toward zero (sign follows `self`).
    ///
    /// # Errors
    /// Returns `DivisionByZero` if `rhs` is zero.
    #[inline]
    pub fn checked_rem(self, rhs: Self) -> NumericResult<Self> {
        if rhs.raw == S::ZERO {
            return Err(NumericError::DivisionByZero);
        }
        // MIN % -1 is the only remaining failure of the primitive and is 0
        Ok(Self::from_raw(self.raw.checked_rem(rhs.raw).unwrap_or(S::ZERO)))
    }

    /// Checked negation.
    ///
    /// # Errors
    /// Returns `Overflow` when negating [`Fixed::MIN`].
    #[inline]
    pub fn checked_neg(self) -> NumericResult<Self> {
        self.raw
            .checked_neg()
            .map(Self::from_raw)
            .ok_or(NumericError::Overflow)
    }

    /// Get absolute value.
    ///
    /// # Errors
    /// Returns `Overflow` for [`Fixed::MIN`].
    #[inline]
    pub fn checked_abs(self) -> NumericResult<Self> {
        if self.is_negative() {
            self.checked_neg()
        } else {
            Ok(self)
        }
    }

    // ========================================================================
    // Rounding
    // ========================================================================

    /// Largest integer value less than or equal to `self`.
    #[inline]
    pub fn floor(self) -> Self {
        // Arithmetic shift rounds toward negative infinity; the result is
        // never below MIN because MIN is itself a whole number
        Self::from_raw((self.raw >> F) << F)
    }

    /// Integer value with the fractional part removed (toward zero).
    #[inline]
    pub fn trunc(self) -> Self {
        Self::from_raw(self.raw - self.fract().raw)
    }

    /// Fractional part, carrying the sign of `self`.
    #[inline]
    pub fn fract(self) -> Self {
        // For F == S::BITS - 1 the unit wraps to MIN, and `raw % MIN` still
        // yields the fractional part of a value in [-1, 1)
        let unit = S::ONE << F;
        Self::from_raw(self.raw % unit)
    }

    /// Smallest integer value greater than or equal to `self`.
    ///
    /// # Errors
    /// Returns `Overflow` if the next integer is out of range.
    #[inline]
    pub fn ceil(self) -> NumericResult<Self> {
        let floor = self.floor();
        if floor == self {
            Ok(self)
        } else {
            floor.checked_add(Self::one()?)
        }
    }

    /// Nearest integer value, ties away from zero.
    ///
    /// # Errors
    /// Returns `Overflow` or `Underflow` if the rounded value is out of range.
    #[inline]
    pub fn round(self) -> NumericResult<Self> {
        let rounded = round_shr(self.raw.to_i128(), F) << F;
        S::from_i128(rounded)
            .map(Self::from_raw)
            .ok_or_else(|| NumericError::out_of_range(rounded < 0))
    }
}

#[inline]
fn abs_wide<T: RawInt>(value: T) -> T {
    if value < T::ZERO {
        -value
    } else {
        value
    }
}

/// 2^bits as an exact `f64`.
#[inline]
fn pow2(bits: u32) -> f64 {
    2f64.powi(bits as i32)
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl<S: RawInt, I: Intermediate<S>, const F: u32> Default for Fixed<S, I, F> {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl<S: RawInt, I: Intermediate<S>, const F: u32> PartialEq for Fixed<S, I, F> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl<S: RawInt, I: Intermediate<S>, const F: u32> Eq for Fixed<S, I, F> {}

impl<S: RawInt, I: Intermediate<S>, const F: u32> PartialOrd for Fixed<S, I, F> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<S: RawInt, I: Intermediate<S>, const F: u32> Ord for Fixed<S, I, F> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.raw.cmp(&other.raw)
    }
}

impl<S: RawInt, I: Intermediate<S>, const F: u32> Hash for Fixed<S, I, F> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.raw.hash(state);
    }
}

impl<S: RawInt, I: Intermediate<S>, const F: u32> Neg for Fixed<S, I, F> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        self.checked_neg().expect("Fixed negation overflow")
    }
}

// Infallible operators for ergonomics (panic on overflow - use checked_* in production)
impl<S: RawInt, I: Intermediate<S>, const F: u32> Add for Fixed<S, I, F> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        self.checked_add(rhs).expect("Fixed addition overflow")
    }
}

impl<S: RawInt, I: Intermediate<S>, const F: u32> Sub for Fixed<S, I, F> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.checked_sub(rhs).expect("Fixed subtraction overflow")
    }
}

impl<S: RawInt, I: Intermediate<S>, const F: u32> Mul for Fixed<S, I, F> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        self.checked_mul(rhs).expect("Fixed multiplication overflow")
    }
}

impl<S: RawInt, I: Intermediate<S>, const F: u32> Div for Fixed<S, I, F> {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self::Output {
        self.checked_div(rhs).expect("Fixed division failed")
    }
}

impl<S: RawInt, I: Intermediate<S>, const F: u32> Rem for Fixed<S, I, F> {
    type Output = Self;

    #[inline]
    fn rem(self, rhs: Self) -> Self::Output {
        self.checked_rem(rhs).expect("Fixed remainder by zero")
    }
}

impl<S: RawInt, I: Intermediate<S>, const F: u32> AddAssign for Fixed<S, I, F> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<S: RawInt, I: Intermediate<S>, const F: u32> SubAssign for Fixed<S, I, F> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<S: RawInt, I: Intermediate<S>, const F: u32> MulAssign for Fixed<S, I, F> {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<S: RawInt, I: Intermediate<S>, const F: u32> DivAssign for Fixed<S, I, F> {
    #[inline]
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

// ============================================================================
// Type Aliases for Common Use Cases
// ============================================================================

/// Q16.16 in a 32-bit word
pub type Fixed16_16 = Fixed<i32, i64, 16>;

/// Q20.12 in a 32-bit word
pub type Fixed20_12 = Fixed<i32, i64, 12>;

/// Q8.8 in a 16-bit word
pub type Fixed8_8 = Fixed<i16, i32, 8>;

/// Q32.32 in a 64-bit word
pub type Fixed32_32 = Fixed<i64, i128, 32>;

// ============================================================================
// Tests
// ============================================================================
