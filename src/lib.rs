// ============================================================================
// Fixed-Point Trigonometry Library
// Deterministic scaled-integer arithmetic with float-free transcendentals
// ============================================================================

//! # fixtrig
//!
//! Fixed-point binary numbers and trigonometric approximations that never
//! touch floating-point hardware.
//!
//! ## Features
//!
//! - **Generic layout** `Fixed<S, I, F>`: storage integer, intermediate
//!   integer and fractional bits chosen at compile time
//! - **Checked arithmetic** with explicit `Overflow` / `Underflow` /
//!   `DivisionByZero` errors, never wraparound
//! - **Trigonometry** `sin`, `cos`, `tan`, `atan`, `atan2`, `asin`, `acos`
//!   plus `sqrt` and `hypot`, within 2.5% of the exact functions
//! - **Deterministic**: identical results on every platform
//!
//! ## Example
//!
//! ```rust
//! use fixtrig::prelude::*;
//!
//! type Q = Fixed<i32, i64, 12>;
//!
//! let angle = Q::from_f64(30f64.to_radians())?;
//! let (s, c) = angle.sin_cos()?;
//! assert!((s.to_f64() - 0.5).abs() < 0.001);
//! assert!((c.to_f64() - 0.866).abs() < 0.001);
//!
//! let back = atan2(s, c)?;
//! assert!((back.to_f64() - angle.to_f64()).abs() < 0.001);
//!
//! // Poles and domain violations are reported, not approximated
//! let right = Q::half_pi()?;
//! assert_eq!(right.tan(), Err(NumericError::Singularity));
//! assert_eq!(Q::from_integer(2)?.asin(), Err(NumericError::DomainError));
//! # Ok::<(), NumericError>(())
//! ```

pub mod math;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::math::{acos, asin, atan, atan2, cos, hypot, sin, sin_cos, sqrt, tan};
    pub use crate::numeric::{
        Fixed, Fixed16_16, Fixed20_12, Fixed32_32, Fixed8_8, Intermediate, NumericError,
        NumericResult, RawInt,
    };
}
