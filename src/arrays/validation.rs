//! arrays::validation — reusable checks for DataArray axes and operands.
//!
//! Purpose
//! -------
//! Centralize the small checks shared by DataArray constructors and
//! operations, so every entry point fails fast with the same structured
//! [`ArrayError`].
//!
//! Key behaviors
//! -------------
//! - Axis shape: equal lengths, at least two samples.
//! - Axis kind: only real 1-D payloads become axes.
//! - Strict ascending order of X.
//! - Scalar operands for scaling and powers.
//!
//! Conventions
//! -----------
//! - Helpers never panic on invalid inputs and perform no logging.
//! - A NaN in X counts as an ordering violation.

use crate::{
    arrays::errors::{ArrayError, ArrayResult},
    units::{magnitude::Magnitude, quantity::Quantity},
};
use ndarray::{Array1, ArrayView1};
use std::cmp::Ordering;

/// Smallest number of samples a DataArray may hold.
pub const MIN_SAMPLES: usize = 2;

/// Validate that X and Y have equal lengths of at least [`MIN_SAMPLES`].
///
/// Errors
/// ------
/// - `ArrayError::Shape` with the two lengths and the violated rule.
pub fn validate_axes(x: ArrayView1<f64>, y: ArrayView1<f64>) -> ArrayResult<()> {
    let (x_len, y_len) = (x.len(), y.len());
    if x_len != y_len {
        return Err(ArrayError::Shape {
            x_len,
            y_len,
            reason: "X and Y must have the same length.",
        });
    }
    if x_len < MIN_SAMPLES {
        return Err(ArrayError::Shape {
            x_len,
            y_len,
            reason: "at least two samples are required.",
        });
    }
    Ok(())
}

/// Validate that `x` is strictly ascending.
///
/// Errors
/// ------
/// - `ArrayError::UnsortedArray { index }` at the first `i` with
///   `x[i] <= x[i - 1]` (or a NaN).
pub fn check_ascending(x: ArrayView1<f64>) -> ArrayResult<()> {
    for (i, pair) in x.windows(2).into_iter().enumerate() {
        if pair[1].partial_cmp(&pair[0]) != Some(Ordering::Greater) {
            return Err(ArrayError::UnsortedArray { index: i + 1 });
        }
    }
    Ok(())
}

/// Extract the raw values of a real array quantity used as an axis.
///
/// Errors
/// ------
/// - `ArrayError::NonRealAxis { axis }` for scalar or complex payloads.
pub fn real_axis(q: &Quantity, axis: &'static str) -> ArrayResult<Array1<f64>> {
    match q.magnitude() {
        Magnitude::RealArray(a) => Ok(a.clone()),
        _ => Err(ArrayError::NonRealAxis { axis }),
    }
}

/// Validate a requested number of sample points.
///
/// Errors
/// ------
/// - `ArrayError::InvalidSampleCount { n }` when `n < MIN_SAMPLES`.
pub fn validate_sample_count(n: usize) -> ArrayResult<usize> {
    if n < MIN_SAMPLES {
        return Err(ArrayError::InvalidSampleCount { n });
    }
    Ok(n)
}

/// The value of a real scalar operand.
///
/// Errors
/// ------
/// - `ArrayError::InvalidScalar` for complex or array payloads.
pub fn real_scalar(q: &Quantity) -> ArrayResult<f64> {
    q.magnitude()
        .as_real()
        .ok_or(ArrayError::InvalidScalar { reason: "the operand must be a real scalar." })
}
