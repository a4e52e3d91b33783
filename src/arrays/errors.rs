//! arrays::errors — error type and result alias for sampled-function arrays.
//!
//! Purpose
//! -------
//! Provide [`ArrayError`], covering construction failures of a
//! [`DataArray`](crate::arrays::DataArray) (lengths, ordering, element kinds),
//! failures of the resampling arithmetic, evaluation and integration bounds,
//! and function sampling. Errors raised by the quantity algebra are wrapped
//! through `From<QuantityError>`.
//!
//! Conventions
//! -----------
//! - `axis` fields name the offending axis as `"X"` or `"Y"`.
//! - Bounds and offending values are carried as raw SI `f64` values.
//! - Under `python-bindings`, every variant surfaces as a `ValueError`.

use crate::units::{dimension::Dimension, errors::QuantityError};

#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

/// Result alias for DataArray operations.
pub type ArrayResult<T> = Result<T, ArrayError>;

/// ArrayError — failures of DataArray construction and operations.
///
/// Variants
/// --------
/// - `Shape { x_len, y_len, reason }`
///   X and Y lengths disagree or are shorter than two samples.
/// - `NonRealAxis { axis }`
///   An axis was built from a complex or scalar payload.
/// - `InvalidSampleCount { n }`
///   Fewer than two sample points were requested.
/// - `NonScalarSample { index }`
///   A sampled function returned an array or complex value.
/// - `UnsortedArray { index }`
///   X is not strictly ascending at `index` (or the resampling step is not
///   positive).
/// - `DimensionMismatch { left, right, axis }`
///   Two axes (or an axis and a bound) that must share a dimension do not.
/// - `UnitMismatch { expected, got }`
///   The evaluation point of `at` is not expressed in the X dimension.
/// - `OutOfRange { value, min, max }`
///   An evaluation point or integration bound lies outside the sampled range.
/// - `InvalidInterval { xmin, xmax }`
///   Integration or sampling bounds are reversed.
/// - `NoOverlap { x_min, x_max }`
///   Two arrays combined by resampling have disjoint X ranges.
/// - `InvalidExponent { reason }` / `InvalidScalar { reason }`
///   A power or scaling operand is not a real scalar of the right kind.
/// - `InconsistentUnit { index, expected, got }`
///   A sampled function changed its output dimension along the interval.
/// - `Quantity(QuantityError)`
///   Failure propagated from the quantity algebra.
#[derive(Debug, Clone, PartialEq)]
pub enum ArrayError {
    // ---- Construction ----
    Shape { x_len: usize, y_len: usize, reason: &'static str },
    NonRealAxis { axis: &'static str },
    InvalidSampleCount { n: usize },
    NonScalarSample { index: usize },
    UnsortedArray { index: usize },

    // ---- Units ----
    DimensionMismatch { left: Dimension, right: Dimension, axis: &'static str },
    UnitMismatch { expected: Dimension, got: Dimension },
    InconsistentUnit { index: usize, expected: Dimension, got: Dimension },

    // ---- Ranges ----
    OutOfRange { value: f64, min: f64, max: f64 },
    InvalidInterval { xmin: f64, xmax: f64 },
    NoOverlap { x_min: f64, x_max: f64 },

    // ---- Operands ----
    InvalidExponent { reason: &'static str },
    InvalidScalar { reason: &'static str },

    // ---- Propagated ----
    Quantity(QuantityError),
}

impl std::error::Error for ArrayError {}

impl std::fmt::Display for ArrayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArrayError::Shape { x_len, y_len, reason } => {
                write!(f, "Invalid DataArray shape (len(X) = {x_len}, len(Y) = {y_len}): {reason}")
            }
            ArrayError::NonRealAxis { axis } => {
                write!(f, "{axis} must be a one-dimensional array of real numbers.")
            }
            ArrayError::InvalidSampleCount { n } => {
                write!(f, "At least two sample points are required; got {n}.")
            }
            ArrayError::NonScalarSample { index } => write!(
                f,
                "The sampled function must return a real scalar quantity (sample {index})."
            ),
            ArrayError::UnsortedArray { index } => {
                write!(
                    f,
                    "X must be sorted in strictly ascending order (violated at index {index})."
                )
            }
            ArrayError::DimensionMismatch { left, right, axis } => write!(
                f,
                "The {axis} units are not the same: {} vs {}.",
                left.describe(),
                right.describe()
            ),
            ArrayError::UnitMismatch { expected, got } => write!(
                f,
                "Input has the wrong unit: expected {}, got {}.",
                expected.describe(),
                got.describe()
            ),
            ArrayError::InconsistentUnit { index, expected, got } => write!(
                f,
                "The function output unit is not consistent: sample {index} is {} instead of {}.",
                got.describe(),
                expected.describe()
            ),
            ArrayError::OutOfRange { value, min, max } => {
                write!(f, "Value {value} lies outside the sampled range [{min}, {max}].")
            }
            ArrayError::InvalidInterval { xmin, xmax } => {
                write!(f, "Invalid interval: xmin = {xmin} is greater than xmax = {xmax}.")
            }
            ArrayError::NoOverlap { x_min, x_max } => write!(
                f,
                "The X ranges do not overlap: common range would be [{x_min}, {x_max}]."
            ),
            ArrayError::InvalidExponent { reason } => write!(f, "Invalid exponent: {reason}"),
            ArrayError::InvalidScalar { reason } => write!(f, "Invalid scalar operand: {reason}"),
            ArrayError::Quantity(err) => write!(f, "{err}"),
        }
    }
}

impl From<QuantityError> for ArrayError {
    fn from(err: QuantityError) -> Self {
        ArrayError::Quantity(err)
    }
}

#[cfg(feature = "python-bindings")]
impl From<ArrayError> for PyErr {
    fn from(err: ArrayError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}
