// ============================================================================
// Math Module
// Float-free transcendental functions over Fixed<S, I, F>
// ============================================================================
//
// This module provides:
// - sin, cos, tan, sin_cos: quadrant reduction plus minimax kernels
// - atan, atan2, asin, acos: one arctangent kernel on [0, 1]
// - sqrt, hypot: integer square root in the intermediate type
// - pi, half_pi, quarter_pi, two_pi: constants at any precision
//
// Every function is generic over the storage type, the intermediate type
// and the fractional bits, uses only checked arithmetic, and runs a fixed
// number of operations. Constant and coefficient tables are rescaled from
// 60 fractional bits on load.

mod constants;
mod inverse;
mod reduce;
mod roots;
mod trig;

pub use inverse::{acos, asin, atan, atan2};
pub use roots::{hypot, sqrt};
pub use trig::{cos, sin, sin_cos, tan};

use crate::numeric::{Fixed, Intermediate, NumericResult, RawInt};

/// Method forms of the free functions, so `x.sin()` reads like `f64`.
impl<S: RawInt, I: Intermediate<S>, const F: u32> Fixed<S, I, F> {
    /// See [`sin`].
    #[inline]
    pub fn sin(self) -> NumericResult<Self> {
        trig::sin(self)
    }

    /// See [`cos`].
    #[inline]
    pub fn cos(self) -> NumericResult<Self> {
        trig::cos(self)
    }

    /// See [`tan`].
    #[inline]
    pub fn tan(self) -> NumericResult<Self> {
        trig::tan(self)
    }

    /// See [`sin_cos`].
    #[inline]
    pub fn sin_cos(self) -> NumericResult<(Self, Self)> {
        trig::sin_cos(self)
    }

    /// See [`atan`].
    #[inline]
    pub fn atan(self) -> NumericResult<Self> {
        inverse::atan(self)
    }

    /// Four-quadrant arctangent of `self / x` (`self` is the y coordinate).
    #[inline]
    pub fn atan2(self, x: Self) -> NumericResult<Self> {
        inverse::atan2(self, x)
    }

    /// See [`asin`].
    #[inline]
    pub fn asin(self) -> NumericResult<Self> {
        inverse::asin(self)
    }

    /// See [`acos`].
    #[inline]
    pub fn acos(self) -> NumericResult<Self> {
        inverse::acos(self)
    }

    /// See [`sqrt`].
    #[inline]
    pub fn sqrt(self) -> NumericResult<Self> {
        roots::sqrt(self)
    }

    /// See [`hypot`].
    #[inline]
    pub fn hypot(self, other: Self) -> NumericResult<Self> {
        roots::hypot(self, other)
    }
}
