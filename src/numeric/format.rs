// ============================================================================
// Formatting, Parsing and Interop
// Exact decimal rendering and parsing using integer arithmetic only
// ============================================================================

use super::errors::{NumericError, NumericResult};
use super::fixed::Fixed;
use super::raw::{Intermediate, RawInt};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;

// ============================================================================
// Display and Debug
// ============================================================================

impl<S: RawInt, I: Intermediate<S>, const F: u32> fmt::Debug for Fixed<S, I, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Fixed<{}, {}, {}>({}, raw={})",
            std::any::type_name::<S>(),
            std::any::type_name::<I>(),
            F,
            self,
            self.raw()
        )
    }
}

impl<S: RawInt, I: Intermediate<S>, const F: u32> fmt::Display for Fixed<S, I, F> {
    /// Writes the exact decimal expansion of `raw / 2^F`.
    ///
    /// Without a precision the expansion is printed in full (it always
    /// terminates, after at most `F` digits). With `{:.N}` exactly `N`
    /// digits are printed, truncated.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let raw = self.raw().to_i128();
        let magnitude = raw.unsigned_abs();
        let mask = (1u128 << F) - 1;
        let int_part = magnitude >> F;
        let mut frac = magnitude & mask;

        if raw < 0 {
            write!(f, "-")?;
        }
        write!(f, "{}", int_part)?;

        match f.precision() {
            Some(0) => Ok(()),
            Some(digits) => {
                write!(f, ".")?;
                for _ in 0..digits {
                    frac *= 10;
                    write!(f, "{}", frac >> F)?;
                    frac &= mask;
                }
                Ok(())
            },
            None if frac == 0 => Ok(()),
            None => {
                write!(f, ".")?;
                while frac != 0 {
                    frac *= 10;
                    write!(f, "{}", frac >> F)?;
                    frac &= mask;
                }
                Ok(())
            },
        }
    }
}

// ============================================================================
// String Parsing
// ============================================================================

impl<S: RawInt, I: Intermediate<S>, const F: u32> std::str::FromStr for Fixed<S, I, F> {
    type Err = NumericError;

    /// Parse from a decimal string, rounding half away from zero to `F` bits.
    ///
    /// Every fractional digit takes part in the rounding, however long the
    /// input.
    ///
    /// # Examples
    /// - "123" -> 123.0
    /// - "-0.5" -> -0.5
    /// - "+.25" -> 0.25
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        // Check for sign
        let (is_negative, s) = if let Some(rest) = s.strip_prefix('-') {
            (true, rest)
        } else if let Some(rest) = s.strip_prefix('+') {
            (false, rest)
        } else {
            (false, s)
        };

        // Split on decimal point
        let (int_str, frac_str) = match s.split_once('.') {
            Some((int_str, frac_str)) => (int_str, frac_str),
            None => (s, ""),
        };

        let is_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if (int_str.is_empty() && frac_str.is_empty()) || !is_digits(int_str) || !is_digits(frac_str) {
            return Err(NumericError::InvalidInput);
        }

        let out_of_range = NumericError::out_of_range(is_negative);

        // Parse integer part (all digits, so a parse failure means too large)
        let int_val: u64 = if int_str.is_empty() {
            0
        } else {
            int_str.parse().map_err(|_| out_of_range)?
        };

        let frac_raw = fraction_to_raw(frac_str.as_bytes(), F);

        // int_val < 2^64 and F < 64, so the shifted value fits in u128
        let magnitude = (u128::from(int_val) << F) + frac_raw;
        let magnitude = i128::try_from(magnitude).map_err(|_| out_of_range)?;
        let raw = if is_negative { -magnitude } else { magnitude };

        S::from_i128(raw).map(Self::from_raw).ok_or(out_of_range)
    }
}

/// `round(0.digits × 2^frac_bits)`, halves rounded up, for ASCII `digits`.
///
/// Every input digit takes part: the fraction is doubled in place once per
/// bit, and the carry out of the leading digit is the next binary digit.
fn fraction_to_raw(digits: &[u8], frac_bits: u32) -> u128 {
    let mut digits: Vec<u8> = digits.iter().map(|b| b - b'0').collect();
    let mut raw = 0u128;

    // One extra bit past frac_bits is the rounding bit
    for _ in 0..=frac_bits {
        let mut carry = 0;
        for digit in digits.iter_mut().rev() {
            let doubled = *digit * 2 + carry;
            *digit = doubled % 10;
            carry = doubled / 10;
        }
        raw = (raw << 1) | u128::from(carry);
    }

    (raw + 1) >> 1
}

// ============================================================================
// Conversion from rust_decimal (for API boundaries)
// ============================================================================

impl<S: RawInt, I: Intermediate<S>, const F: u32> Fixed<S, I, F> {
    /// Convert from rust_decimal::Decimal.
    ///
    /// This is intended for API boundaries only (parsing user input).
    /// The value is rounded half away from zero to `F` fractional bits.
    ///
    /// # Errors
    /// Returns `Overflow` or `Underflow` if the value is too large.
    pub fn from_decimal(d: Decimal) -> NumericResult<Self> {
        let out_of_range = NumericError::out_of_range(d.is_sign_negative());
        let multiplier = Decimal::from(1u64 << F);

        let scaled = d
            .checked_mul(multiplier)
            .ok_or(out_of_range)?
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);

        let raw = scaled.to_i128().ok_or(out_of_range)?;
        S::from_i128(raw).map(Self::from_raw).ok_or(out_of_range)
    }

    /// Convert to rust_decimal::Decimal.
    ///
    /// Exact whenever the quotient fits in 28 significant digits; intended
    /// for display and reporting.
    pub fn to_decimal(self) -> Decimal {
        // S is at most 64 bits wide
        let raw = self.raw().to_i128() as i64;
        Decimal::from(raw) / Decimal::from(1u64 << F)
    }
}

// ============================================================================
// Serialization (raw representation)
// ============================================================================

#[cfg(feature = "serde")]
impl<S, I, const F: u32> serde::Serialize for Fixed<S, I, F>
where
    S: RawInt + serde::Serialize,
    I: Intermediate<S>,
{
    fn serialize<Ser: serde::Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
        serde::Serialize::serialize(&self.raw(), serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, S, I, const F: u32> serde::Deserialize<'de> for Fixed<S, I, F>
where
    S: RawInt + serde::Deserialize<'de>,
    I: Intermediate<S>,
{
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        <S as serde::Deserialize<'de>>::deserialize(deserializer).map(Self::from_raw)
    }
}
