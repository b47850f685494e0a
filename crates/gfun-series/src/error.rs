//! Errors raised when a series operation cannot be constructed.

use thiserror::Error;

/// Errors that can occur when building a derived series.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SeriesError {
    /// The operation divides by a constant term that is numerically zero.
    #[error("division by zero: cannot take the {operation} of a series with zero constant term")]
    DivisionByZero {
        /// Name of the failing operation.
        operation: &'static str,
    },

    /// The integer exponent is non-negative but too large for the power cache.
    #[error("integer exponent {0} is out of range (at most {max})", max = u32::MAX)]
    ExponentOutOfRange(i64),

    /// The exponent is neither a non-negative integer nor a real number.
    #[error("cannot raise a power series to the exponent {0}")]
    UnsupportedExponent(String),
}

/// Result type for series operations.
pub type Result<T> = std::result::Result<T, SeriesError>;
