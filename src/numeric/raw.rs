// ============================================================================
// Raw Integer Kinds
// Storage and intermediate integer abstractions for fixed-point values
// ============================================================================

use std::fmt::{Debug, Display};
use std::hash::Hash;
use std::ops::{Add, Div, Mul, Neg, Rem, Shl, Shr, Sub};

/// Signed integer kind usable as the storage word `S` or the intermediate
/// word `I` of a [`Fixed`](super::Fixed) value.
///
/// Implemented for `i8`, `i16`, `i32`, `i64` and `i128`. Plain operators
/// are only used by the fixed-point core where the bit budget proves they
/// cannot overflow; everything else goes through the `checked_*` forms.
pub trait RawInt:
    Copy
    + Ord
    + Hash
    + Debug
    + Display
    + Default
    + Send
    + Sync
    + 'static
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Rem<Output = Self>
    + Neg<Output = Self>
    + Shl<u32, Output = Self>
    + Shr<u32, Output = Self>
{
    /// Width of the integer in bits
    const BITS: u32;
    const ZERO: Self;
    const ONE: Self;
    const MIN: Self;
    const MAX: Self;

    fn checked_add(self, rhs: Self) -> Option<Self>;
    fn checked_sub(self, rhs: Self) -> Option<Self>;
    fn checked_mul(self, rhs: Self) -> Option<Self>;
    fn checked_div(self, rhs: Self) -> Option<Self>;
    fn checked_rem(self, rhs: Self) -> Option<Self>;
    fn checked_neg(self) -> Option<Self>;

    /// Lossless widening to `i128`.
    fn to_i128(self) -> i128;

    /// Narrowing from `i128`; `None` when the value does not fit.
    fn from_i128(value: i128) -> Option<Self>;

    /// Nearest `f64` (exact up to 53 significant bits).
    fn to_f64(self) -> f64;
}

macro_rules! raw_int_impl {
    ($($T:ty),*) => {
        $(
            impl RawInt for $T {
                const BITS: u32 = <$T>::BITS;
                const ZERO: Self = 0;
                const ONE: Self = 1;
                const MIN: Self = <$T>::MIN;
                const MAX: Self = <$T>::MAX;

                #[inline(always)]
                fn checked_add(self, rhs: Self) -> Option<Self> {
                    <$T>::checked_add(self, rhs)
                }

                #[inline(always)]
                fn checked_sub(self, rhs: Self) -> Option<Self> {
                    <$T>::checked_sub(self, rhs)
                }

                #[inline(always)]
                fn checked_mul(self, rhs: Self) -> Option<Self> {
                    <$T>::checked_mul(self, rhs)
                }

                #[inline(always)]
                fn checked_div(self, rhs: Self) -> Option<Self> {
                    <$T>::checked_div(self, rhs)
                }

                #[inline(always)]
                fn checked_rem(self, rhs: Self) -> Option<Self> {
                    <$T>::checked_rem(self, rhs)
                }

                #[inline(always)]
                fn checked_neg(self) -> Option<Self> {
                    <$T>::checked_neg(self)
                }

                #[inline(always)]
                fn to_i128(self) -> i128 {
                    i128::from(self)
                }

                #[inline(always)]
                fn from_i128(value: i128) -> Option<Self> {
                    <$T>::try_from(value).ok()
                }

                #[inline(always)]
                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

raw_int_impl!(i8, i16, i32, i64, i128);

/// Intermediate integer kind for a storage kind `S`.
///
/// Widening from `S` is infallible and narrowing back is checked. The
/// width requirement (`I::BITS >= 2 * S::BITS`) cannot be expressed as a
/// trait bound; [`Fixed`](super::Fixed) asserts it at compile time.
pub trait Intermediate<S: RawInt>: RawInt + From<S> + TryInto<S> {}

impl<S: RawInt, I: RawInt + From<S> + TryInto<S>> Intermediate<S> for I {}

/// Shift right by `bits`, rounding half away from zero on the magnitude.
///
/// Callers guarantee `bits < T::BITS` and that `|value| + 2^(bits-1)`
/// fits in `T`.
#[inline]
pub(crate) fn round_shr<T: RawInt>(value: T, bits: u32) -> T {
    if bits == 0 {
        return value;
    }
    let half = T::ONE << (bits - 1);
    if value >= T::ZERO {
        (value + half) >> bits
    } else {
        -((-value + half) >> bits)
    }
}

/// Integer square root of a non-negative `value`, rounded to nearest.
///
/// Digit-by-digit method: one result bit per iteration, no division.
pub(crate) fn isqrt_rounded<T: RawInt>(value: T) -> T {
    let mut remainder = value;
    let mut root = T::ZERO;
    let mut bit = T::ONE << (T::BITS - 2);

    while bit > remainder {
        bit = bit >> 2;
    }

    while bit != T::ZERO {
        let trial = root + bit;
        if remainder >= trial {
            remainder = remainder - trial;
            root = (root >> 1) + bit;
        } else {
            root = root >> 1;
        }
        bit = bit >> 2;
    }

    // remainder == value - root²; round up when value >= (root + 1/2)²
    if remainder > root {
        root + T::ONE
    } else {
        root
    }
}
