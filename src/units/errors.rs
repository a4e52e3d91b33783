//! units::errors — error type and result alias for the quantity algebra.
//!
//! Purpose
//! -------
//! Provide a single error enum, [`QuantityError`], covering every way a
//! dimension or quantity operation can be rejected: unit disagreement,
//! array-length disagreement, invalid exponents, failed conversions to bare
//! numbers, and catalog lookups.
//!
//! Key behaviors
//! -------------
//! - Attach human-readable `Display` messages to each variant, embedding the
//!   offending dimensions or values so diagnostics are meaningful on their own.
//! - Implement `From<QuantityError> for PyErr` (feature `python-bindings`) so
//!   the Python layer surfaces the Rust message as a `ValueError`.
//!
//! Invariants & assumptions
//! ------------------------
//! - Numeric edge cases (division by zero, NaN propagation) are *not* errors;
//!   they surface as IEEE results in the payload.
//! - Every variant is cheap to clone and comparable, so tests can match on
//!   exact values.
//!
//! Conventions
//! -----------
//! - Dimensions are carried as [`Dimension`] values and rendered through
//!   [`Dimension::describe`], so a dimensionless side prints as
//!   `dimensionless` instead of an empty string.
//! - DataArray and quadrature errors live in their own `errors` modules and
//!   wrap this type through `From`.

use crate::units::dimension::Dimension;

#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

/// Result alias for dimension and quantity operations.
pub type QuantityResult<T> = Result<T, QuantityError>;

/// QuantityError — failures of the dimension/quantity algebra.
///
/// Variants
/// --------
/// - `DimensionMismatch { left, right }`
///   An operation requiring equal dimensions (add, subtract, ordering,
///   modulo) received unequal ones.
/// - `ShapeMismatch { left, right }`
///   Two array payloads of different lengths were combined elementwise.
/// - `InvalidExponent { reason }`
///   A power operation received a complex, array-valued, non-finite or
///   dimensioned exponent.
/// - `UnitConversion { unit, target }`
///   A quantity with a non-trivial dimension was converted to a bare number.
/// - `UnsupportedOperation { op, reason }`
///   The payload kind does not support the operation (e.g. ordering complex
///   numbers, reading a scalar out of an array).
/// - `InvalidUnit { target, residual }`
///   A display/conversion target unit leaves a residual dimension.
/// - `UnknownUnit { symbol }`
///   The symbol is not registered in the unit catalog.
/// - `IndexOutOfBounds { index, len }`
///   Element access past the end of an array payload.
/// - `InvalidFormatOption { value, reason }`
///   Display options outside their admissible range.
#[derive(Debug, Clone, PartialEq)]
pub enum QuantityError {
    // ---- Dimensional consistency ----
    DimensionMismatch { left: Dimension, right: Dimension },

    // ---- Payload shape / kind ----
    ShapeMismatch { left: usize, right: usize },
    InvalidExponent { reason: &'static str },
    UnitConversion { unit: Dimension, target: &'static str },
    UnsupportedOperation { op: &'static str, reason: &'static str },
    IndexOutOfBounds { index: usize, len: usize },

    // ---- Units and display ----
    InvalidUnit { target: String, residual: Dimension },
    UnknownUnit { symbol: String },
    InvalidFormatOption { value: usize, reason: &'static str },
}

impl std::error::Error for QuantityError {}

impl std::fmt::Display for QuantityError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuantityError::DimensionMismatch { left, right } => write!(
                f,
                "Error with physical units: cannot add, subtract or compare {} with {}.",
                left.describe(),
                right.describe()
            ),
            QuantityError::ShapeMismatch { left, right } => {
                write!(f, "Array payloads have different lengths: {left} and {right}.")
            }
            QuantityError::InvalidExponent { reason } => {
                write!(f, "The power of a physical quantity must be a real number; {reason}")
            }
            QuantityError::UnitConversion { unit, target } => write!(
                f,
                "Cannot convert physical quantity (unit = {}) to {target}.",
                unit.describe()
            ),
            QuantityError::UnsupportedOperation { op, reason } => {
                write!(f, "Unsupported operation '{op}': {reason}")
            }
            QuantityError::IndexOutOfBounds { index, len } => {
                write!(f, "Index {index} is out of bounds for an array of length {len}.")
            }
            QuantityError::InvalidUnit { target, residual } => write!(
                f,
                "{target} is not the right unit: a residual dimension {} remains.",
                residual.describe()
            ),
            QuantityError::UnknownUnit { symbol } => {
                write!(f, "{symbol} is not a valid unit string.")
            }
            QuantityError::InvalidFormatOption { value, reason } => {
                write!(f, "Invalid display option {value}: {reason}")
            }
        }
    }
}

#[cfg(feature = "python-bindings")]
impl From<QuantityError> for PyErr {
    fn from(err: QuantityError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}
