//! arrays::integ — definite integrals of sampled functions.
//!
//! Purpose
//! -------
//! Integrate a [`DataArray`] over a sub-interval of its X range with the
//! trapezoidal rule, interpolating linearly at the two bounds.
//!
//! Key behaviors
//! -------------
//! - The integration points are `(xmin, A(xmin))`, every sample strictly
//!   inside `(xmin, xmax)`, then `(xmax, A(xmax))`.
//! - The result carries the dimension `X * Y`.
//!
//! Invariants & assumptions
//! ------------------------
//! - Checks run in a fixed order: X ordering, bound dimensions, bound
//!   kinds, interval orientation, then range.
//! - `xmin == xmax` integrates to zero; bounds that coincide with samples
//!   add zero-width segments only.

use crate::{
    arrays::{
        data_array::DataArray,
        errors::{ArrayError, ArrayResult},
        interp::interp,
        validation::{check_ascending, real_scalar},
    },
    units::{operand::Operand, quantity::Quantity},
};

impl DataArray {
    /// Definite integral of `Y dX` between `xmin` and `xmax`.
    ///
    /// Parameters
    /// ----------
    /// - `xmin`, `xmax`: `impl Into<Operand>`
    ///   Real scalar bounds expressed in the X dimension (bare numbers are
    ///   accepted for dimensionless X).
    ///
    /// Returns
    /// -------
    /// `ArrayResult<Quantity>`
    ///   A scalar quantity of dimension `X * Y`.
    ///
    /// Errors
    /// ------
    /// - `ArrayError::UnsortedArray` unless X is strictly ascending.
    /// - `ArrayError::DimensionMismatch` when a bound is not in the X
    ///   dimension.
    /// - `ArrayError::InvalidScalar` when a bound is not a real scalar.
    /// - `ArrayError::InvalidInterval` when `xmin > xmax`.
    /// - `ArrayError::OutOfRange` when a bound lies outside `[min X, max X]`.
    pub fn integ(
        &self, xmin: impl Into<Operand>, xmax: impl Into<Operand>,
    ) -> ArrayResult<Quantity> {
        check_ascending(self.x().view())?;

        let (lo, hi) = (xmin.into().promote(), xmax.into().promote());
        for bound in [&lo, &hi] {
            if bound.dimension() != self.x_unit() {
                return Err(ArrayError::DimensionMismatch {
                    left: bound.dimension(),
                    right: self.x_unit(),
                    axis: "X",
                });
            }
        }
        let (a, b) = (real_scalar(&lo)?, real_scalar(&hi)?);
        if a > b {
            return Err(ArrayError::InvalidInterval { xmin: a, xmax: b });
        }
        self.check_in_range(a)?;
        self.check_in_range(b)?;

        let (xs, ys) = (self.x().view(), self.y().view());
        let mut points = Vec::with_capacity(xs.len() + 2);
        points.push((a, interp(a, xs, ys)));
        points.extend(
            xs.iter().zip(ys.iter()).filter(|(x, _)| a < **x && **x < b).map(|(x, y)| (*x, *y)),
        );
        points.push((b, interp(b, xs, ys)));

        Ok(Quantity::new(trapezoid(&points), self.x_unit() * self.y_unit()))
    }
}

/// Trapezoidal rule over ordered `(x, y)` points.
pub fn trapezoid(points: &[(f64, f64)]) -> f64 {
    points.windows(2).map(|w| 0.5 * (w[1].0 - w[0].0) * (w[0].1 + w[1].1)).sum()
}
