// ============================================================================
// Numeric Errors
// Error types for fixed-point arithmetic and transcendental functions
// ============================================================================

use std::fmt;

/// Errors that can occur during fixed-point operations.
///
/// Every failure is fully determined by the operands: nothing here is
/// transient, and no operation ever wraps around silently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Result exceeded the storage type's maximum value
    Overflow,
    /// Result below the storage type's minimum value
    Underflow,
    /// Attempted division by zero
    DivisionByZero,
    /// Argument outside the function's mathematical domain (e.g. `asin(2)`)
    DomainError,
    /// Argument sits on a pole of the function (e.g. `tan(π/2)`)
    Singularity,
    /// Input string or value is invalid (unparseable text, NaN, infinity)
    InvalidInput,
}

impl NumericError {
    /// Classify an out-of-range result by the sign it would have had.
    #[inline]
    pub(crate) fn out_of_range(negative: bool) -> Self {
        if negative {
            NumericError::Underflow
        } else {
            NumericError::Overflow
        }
    }
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::Overflow => {
                write!(f, "arithmetic overflow: result exceeded maximum value")
            },
            NumericError::Underflow => {
                write!(f, "arithmetic underflow: result below minimum value")
            },
            NumericError::DivisionByZero => write!(f, "division by zero"),
            NumericError::DomainError => {
                write!(f, "domain error: argument outside the function's domain")
            },
            NumericError::Singularity => {
                write!(f, "singularity: function is undefined at this argument")
            },
            NumericError::InvalidInput => write!(f, "invalid input: could not parse value"),
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
