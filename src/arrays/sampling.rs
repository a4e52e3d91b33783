//! arrays::sampling — build a DataArray by sampling a unit-aware function.
//!
//! Purpose
//! -------
//! Evaluate a function `f: Quantity -> Quantity` at evenly spaced points of
//! an interval and collect the results into a [`DataArray`], checking that
//! the function keeps a single output unit along the way.
//!
//! Conventions
//! -----------
//! - Sample points are `linspace(xmin, xmax, n)`, both ends included, each
//!   passed to `f` as a scalar quantity in the bounds' dimension.
//! - The output dimension is taken from the first sample.

use crate::{
    arrays::{
        data_array::DataArray,
        errors::{ArrayError, ArrayResult},
        validation::{real_scalar, validate_sample_count},
    },
    units::{errors::QuantityResult, magnitude::Magnitude, operand::Operand, quantity::Quantity},
};
use ndarray::Array1;
use std::cmp::Ordering;

/// Number of samples used when the caller does not choose one.
pub const DEFAULT_SAMPLE_COUNT: usize = 50;

/// Sample `f` at `n` evenly spaced points of `[xmin, xmax]`.
///
/// Parameters
/// ----------
/// - `f`: `FnMut(&Quantity) -> QuantityResult<Quantity>`
///   Function to sample; must return a real scalar quantity of a fixed
///   dimension.
/// - `xmin`, `xmax`: `impl Into<Operand>`
///   Interval bounds sharing one dimension, `xmin < xmax`.
/// - `n`: `usize`
///   Number of samples, at least two.
///
/// Returns
/// -------
/// `ArrayResult<DataArray>`
///   X in the bounds' dimension, Y in the function's output dimension.
///
/// Errors
/// ------
/// - `ArrayError::DimensionMismatch` when the bounds' dimensions differ.
/// - `ArrayError::InvalidScalar` when a bound is not a real scalar.
/// - `ArrayError::InvalidInterval` unless `xmin < xmax`.
/// - `ArrayError::InvalidSampleCount` when `n < 2`.
/// - `ArrayError::NonScalarSample` when `f` returns an array or a complex.
/// - `ArrayError::InconsistentUnit` when the output dimension changes.
/// - `ArrayError::Quantity` for errors returned by `f`.
pub fn sample_function<F>(
    mut f: F, xmin: impl Into<Operand>, xmax: impl Into<Operand>, n: usize,
) -> ArrayResult<DataArray>
where
    F: FnMut(&Quantity) -> QuantityResult<Quantity>,
{
    let (lo, hi) = (xmin.into().promote(), xmax.into().promote());
    if lo.dimension() != hi.dimension() {
        return Err(ArrayError::DimensionMismatch {
            left: lo.dimension(),
            right: hi.dimension(),
            axis: "X",
        });
    }
    let (a, b) = (real_scalar(&lo)?, real_scalar(&hi)?);
    if a.partial_cmp(&b) != Some(Ordering::Less) {
        return Err(ArrayError::InvalidInterval { xmin: a, xmax: b });
    }
    let n = validate_sample_count(n)?;

    let x_unit = lo.dimension();
    let xs = Array1::linspace(a, b, n);
    let mut ys = Vec::with_capacity(n);
    let mut y_unit = None;

    for (index, &x) in xs.iter().enumerate() {
        let out = f(&Quantity::new(x, x_unit))?;
        let expected = *y_unit.get_or_insert(out.dimension());
        if out.dimension() != expected {
            return Err(ArrayError::InconsistentUnit { index, expected, got: out.dimension() });
        }
        match out.magnitude() {
            Magnitude::Real(v) => ys.push(*v),
            _ => return Err(ArrayError::NonScalarSample { index }),
        }
    }

    DataArray::from_raw(xs, x_unit, Array1::from(ys), y_unit.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{
        catalog,
        dimension::{BaseUnit, Dimension},
    };
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Sampling a linear function into the reference ramp.
    // - Bound, count and output validation.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Sampling `x / s * kg + 1 kg` reproduces the reference ramp.
    //
    // Given
    // -----
    // - f(x) = x / (1 s) * (1 kg) + 1 kg on [0 s, 3 s], n = 4.
    //
    // Expect
    // ------
    // - X = [0, 1, 2, 3] s, Y = [1, 2, 3, 4] kg.
    fn sample_linear_function() {
        let s = catalog::unit("s").unwrap();
        let kg = catalog::unit("kg").unwrap();

        let line = |x: &Quantity| x.div(&s)?.mul(&kg)?.add(&kg);

        let data = sample_function(line, 0.0 * &s, 3.0 * &s, 4).unwrap();

        let (x, y) = (array![0.0, 1.0, 2.0, 3.0], array![1.0, 2.0, 3.0, 4.0]);
        let expected = DataArray::from_raw(x, s.dimension(), y, kg.dimension()).unwrap();
        assert_eq!(data, expected);
    }

    #[test]
    // Purpose
    // -------
    // Invalid bounds and counts are rejected before sampling.
    //
    // Given
    // -----
    // - bounds (0 s, 1 m); (2 s, 1 s); n = 1.
    //
    // Expect
    // ------
    // - `DimensionMismatch`, `InvalidInterval`, `InvalidSampleCount`.
    fn sample_rejects_invalid_requests() {
        let s = catalog::unit("s").unwrap();
        let m = catalog::unit("m").unwrap();
        let identity = |x: &Quantity| Ok(x.clone());

        let mixed = sample_function(identity, 0.0 * &s, m, 4);
        assert!(matches!(mixed, Err(ArrayError::DimensionMismatch { .. })));
        assert!(matches!(
            sample_function(identity, 2.0 * &s, 1.0 * &s, 4),
            Err(ArrayError::InvalidInterval { .. })
        ));
        let single = sample_function(identity, 0.0, 1.0, 1);
        assert_eq!(single, Err(ArrayError::InvalidSampleCount { n: 1 }));
    }

    #[test]
    // Purpose
    // -------
    // A function that changes unit or returns arrays is rejected.
    //
    // Given
    // -----
    // - f returning metres for x < 0.5 and seconds afterwards; f returning an
    //   array.
    //
    // Expect
    // ------
    // - `InconsistentUnit { index: 1, .. }`; `NonScalarSample { index: 0 }`.
    fn sample_rejects_inconsistent_outputs() {
        let m = Dimension::base(BaseUnit::Metre);
        let s = Dimension::base(BaseUnit::Second);

        let switching = sample_function(
            |x| {
                let v = x.to_scalar()?;
                Ok(Quantity::new(v, if v < 0.5 { m } else { s }))
            },
            0.0,
            1.0,
            3,
        );
        let arrays =
            sample_function(|_| Ok(Quantity::dimensionless(array![1.0, 2.0])), 0.0, 1.0, 3);

        assert!(matches!(switching, Err(ArrayError::InconsistentUnit { index: 1, .. })));
        assert_eq!(arrays, Err(ArrayError::NonScalarSample { index: 0 }));
    }
}
