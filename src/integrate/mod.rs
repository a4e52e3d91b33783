//! integrate — unit-aware definite integrals of quantity-valued functions.
//!
//! Purpose
//! -------
//! Integrate a function `f: Quantity -> Quantity` between two quantity
//! bounds by stripping units, handing a plain `f64 -> f64` integrand to a
//! pluggable [`Quadrature`], and re-attaching the product dimension `X * Y`
//! to the result.
//!
//! Key behaviors
//! -------------
//! - Bounds are promoted (bare numbers become dimensionless) and must share
//!   one dimension.
//! - `f(a)` is evaluated once up front to learn the output dimension; any
//!   later evaluation in a different dimension aborts the integration with
//!   [`IntegrateError::InconsistentUnit`].
//! - Integrator failures arrive as `anyhow::Error` and are turned back into
//!   typed [`IntegrateError`] values.
//!
//! Invariants & assumptions
//! ------------------------
//! - Integrand values must be real scalars; complex or array outputs are
//!   rejected with [`IntegrateError::NonScalarValue`].
//!
//! Downstream usage
//! ----------------
//! - Use [`integrate_fn`] with [`AdaptiveSimpson::default()`] for a
//!   ready-made integrator, or implement [`Quadrature`] for another scheme.

pub mod errors;
pub mod quadrature;

pub use self::errors::{IntegrateError, IntegrateResult};
pub use self::quadrature::{AdaptiveSimpson, QuadOptions, Quadrature};

use crate::units::{
    errors::QuantityResult, magnitude::Magnitude, operand::Operand, quantity::Quantity,
};

/// Definite integral of `f` from `a` to `b`.
///
/// Parameters
/// ----------
/// - `f`: `FnMut(&Quantity) -> QuantityResult<Quantity>`
///   Integrand; must return real scalar quantities of one dimension.
/// - `a`, `b`: `impl Into<Operand>`
///   Bounds sharing one dimension.
/// - `quad`: `&Q`
///   Numeric integrator.
///
/// Returns
/// -------
/// `IntegrateResult<Quantity>`
///   The integral, of dimension `dim(a) * dim(f)`.
///
/// Errors
/// ------
/// - `IntegrateError::DimensionMismatch` when the bounds disagree.
/// - `IntegrateError::NonScalarValue` for non-real bounds or values.
/// - `IntegrateError::InconsistentUnit` when `f` changes unit.
/// - `IntegrateError::NotConvergent` from the integrator.
/// - `IntegrateError::Quantity` for errors returned by `f`.
pub fn integrate_fn<F, Q>(
    mut f: F, a: impl Into<Operand>, b: impl Into<Operand>, quad: &Q,
) -> IntegrateResult<Quantity>
where
    F: FnMut(&Quantity) -> QuantityResult<Quantity>,
    Q: Quadrature + ?Sized,
{
    let (lo, hi) = (a.into().promote(), b.into().promote());
    if lo.dimension() != hi.dimension() {
        return Err(IntegrateError::DimensionMismatch {
            left: lo.dimension(),
            right: hi.dimension(),
        });
    }
    let x_unit = lo.dimension();
    let a = scalar_value(&lo, "integration bound")?;
    let b = scalar_value(&hi, "integration bound")?;

    let first = f(&lo)?;
    let y_unit = first.dimension();
    scalar_value(&first, "integrand value")?;

    let mut integrand = |x: f64| -> anyhow::Result<f64> {
        let out = f(&Quantity::new(x, x_unit))?;
        if out.dimension() != y_unit {
            return Err(anyhow::Error::new(IntegrateError::InconsistentUnit {
                at: x,
                expected: y_unit,
                got: out.dimension(),
            }));
        }
        Ok(scalar_value(&out, "integrand value")?)
    };

    let value = quad.integrate(&mut integrand, a, b)?;
    Ok(Quantity::new(value, x_unit * y_unit))
}

fn scalar_value(q: &Quantity, what: &'static str) -> IntegrateResult<f64> {
    match q.magnitude() {
        Magnitude::Real(v) => Ok(*v),
        _ => Err(IntegrateError::NonScalarValue { what }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{catalog, errors::QuantityError};
    use approx::assert_relative_eq;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Unit bookkeeping of `integrate_fn`.
    // - Bound validation and unit changes of the integrand.
    // - Propagation of integrand errors.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Integrating a velocity over time yields a distance.
    //
    // Given
    // -----
    // - v(t) = 2 m/s² · t on [0 s, 3 s].
    //
    // Expect
    // ------
    // - 9 m.
    fn integrates_velocity_into_distance() {
        let s = catalog::unit("s").unwrap();
        let m = catalog::unit("m").unwrap();
        let accel = (2.0 * &m).div(s.powf(2.0).unwrap()).unwrap();

        let quad = AdaptiveSimpson::default();

        let distance = integrate_fn(|t| accel.mul(t), 0.0 * &s, 3.0 * &s, &quad).unwrap();

        assert_eq!(distance.dimension(), m.dimension());
        assert_relative_eq!(distance.magnitude().as_real().unwrap(), 9.0, max_relative = 1e-10);
    }

    #[test]
    // Purpose
    // -------
    // Bounds must share a dimension.
    //
    // Given
    // -----
    // - a = 0 s, b = 1 m.
    //
    // Expect
    // ------
    // - `DimensionMismatch`.
    fn rejects_mismatched_bounds() {
        let s = catalog::unit("s").unwrap();
        let m = catalog::unit("m").unwrap();

        let quad = AdaptiveSimpson::default();

        let err = integrate_fn(|x| Ok(x.clone()), 0.0 * &s, m, &quad).unwrap_err();

        assert!(matches!(err, IntegrateError::DimensionMismatch { .. }));
    }

    #[test]
    // Purpose
    // -------
    // A unit change inside the interval is reported with its location.
    //
    // Given
    // -----
    // - f(x) dimensionless for x < 0.5, in metres afterwards, on [0, 1].
    //
    // Expect
    // ------
    // - `InconsistentUnit` with `at >= 0.5`.
    fn reports_inconsistent_units() {
        let m = catalog::unit("m").unwrap();

        let err = integrate_fn(
            |x| {
                let v = x.to_scalar()?;
                if v < 0.5 { Ok(Quantity::dimensionless(v)) } else { m.mul(v) }
            },
            0.0,
            1.0,
            &AdaptiveSimpson::default(),
        )
        .unwrap_err();

        assert!(matches!(err, IntegrateError::InconsistentUnit { at, .. } if at >= 0.5));
    }

    #[test]
    // Purpose
    // -------
    // Errors raised by the integrand come back typed.
    //
    // Given
    // -----
    // - An integrand that asks the catalog for an unknown unit.
    //
    // Expect
    // ------
    // - `IntegrateError::Quantity(UnknownUnit { .. })`.
    fn integrand_errors_come_back_typed() {
        let err = integrate_fn(
            |x| if x.to_scalar()? > 0.5 { catalog::unit("furlong") } else { Ok(x.clone()) },
            0.0,
            1.0,
            &AdaptiveSimpson::default(),
        )
        .unwrap_err();

        assert!(matches!(err, IntegrateError::Quantity(QuantityError::UnknownUnit { .. })));
    }
}
