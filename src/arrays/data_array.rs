//! arrays::data_array — sampled 1-D functions with units on both axes.
//!
//! Purpose
//! -------
//! Provide [`DataArray`], a pair of equal-length raw `f64` sequences (X and
//! Y) together with one [`Dimension`] per axis. Binary arithmetic between
//! two arrays first aligns them on a common uniform grid by linear
//! interpolation, then combines the Y values and the Y units with the same
//! rules as quantity arithmetic.
//!
//! Key behaviors
//! -------------
//! - Construction from two array quantities ([`DataArray::new`]) or from raw
//!   values plus dimensions ([`DataArray::from_raw`]), both requiring a
//!   strictly ascending X; [`DataArray::from_unsorted`] defers the ordering
//!   check to the operations that need it.
//! - Resampling arithmetic: `add`, `sub`, `mul`, `div`.
//! - Scalar operations: `scale`, `div_scalar`, `powf`, `neg`, `invert`, `abs`.
//! - Evaluation at a point ([`DataArray::at`]) by linear interpolation.
//! - Plotting data in SI or caller-chosen units.
//!
//! Invariants & assumptions
//! ------------------------
//! - X and Y are 1-D, real, of equal length ≥ 2; they are owned and never
//!   mutated after construction.
//! - Stored values are expressed in SI units of the axis dimension.
//! - Every order-sensitive operation re-checks that X is strictly ascending.
//!
//! Conventions
//! -----------
//! - Resampling grid: overlap of both X ranges, sampled with the smallest
//!   spacing of either grid (see [`common_grid`]).
//! - Equality compares raw values and both dimensions without resampling;
//!   arrays of different lengths are unequal.
//!
//! Downstream usage
//! ----------------
//! - `arrays::sampling::sample_function` builds arrays from unit-aware
//!   functions; `arrays::integ` adds definite integration.
//! - The Python `DataArray` class wraps this type one-to-one.

use crate::{
    arrays::{
        errors::{ArrayError, ArrayResult},
        interp::{common_grid, interp, interp_many},
        validation::{check_ascending, real_axis, real_scalar, validate_axes},
    },
    units::{
        dimension::Dimension,
        errors::QuantityError,
        format::{FormatOptions, display_number},
        magnitude::Magnitude,
        operand::Operand,
        quantity::Quantity,
    },
};
use ndarray::{Array1, Zip};

/// DataArray — a sampled function `Y(X)` with a unit on each axis.
///
/// Fields
/// ------
/// - `x`, `y`: raw SI values, equal lengths ≥ 2.
/// - `x_unit`, `y_unit`: dimensions of the two axes.
#[derive(Debug, Clone)]
pub struct DataArray {
    x: Array1<f64>,
    y: Array1<f64>,
    x_unit: Dimension,
    y_unit: Dimension,
}

/// PlotData — raw axis values and unit labels handed to a plotting backend.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotData {
    pub x: Array1<f64>,
    pub y: Array1<f64>,
    pub x_label: String,
    pub y_label: String,
}

impl DataArray {
    /// Build from two real array quantities.
    ///
    /// Errors
    /// ------
    /// - `ArrayError::NonRealAxis` for scalar or complex payloads.
    /// - `ArrayError::Shape` for unequal lengths or fewer than two samples.
    /// - `ArrayError::UnsortedArray` unless X is strictly ascending.
    pub fn new(x: &Quantity, y: &Quantity) -> ArrayResult<Self> {
        let data = Self::from_unsorted(x, y)?;
        check_ascending(data.x.view())?;
        Ok(data)
    }

    /// Build from two real array quantities without the ordering check.
    pub fn from_unsorted(x: &Quantity, y: &Quantity) -> ArrayResult<Self> {
        let xs = real_axis(x, "X")?;
        let ys = real_axis(y, "Y")?;
        validate_axes(xs.view(), ys.view())?;
        Ok(Self { x: xs, y: ys, x_unit: x.dimension(), y_unit: y.dimension() })
    }

    /// Build from raw SI values and their dimensions.
    ///
    /// Errors
    /// ------
    /// - `ArrayError::Shape` / `ArrayError::UnsortedArray` as in
    ///   [`DataArray::new`].
    pub fn from_raw(
        x: Array1<f64>, x_unit: Dimension, y: Array1<f64>, y_unit: Dimension,
    ) -> ArrayResult<Self> {
        validate_axes(x.view(), y.view())?;
        check_ascending(x.view())?;
        Ok(Self { x, y, x_unit, y_unit })
    }

    pub fn x(&self) -> &Array1<f64> {
        &self.x
    }

    pub fn y(&self) -> &Array1<f64> {
        &self.y
    }

    pub fn x_unit(&self) -> Dimension {
        self.x_unit
    }

    pub fn y_unit(&self) -> Dimension {
        self.y_unit
    }

    /// Number of samples (always ≥ 2).
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// X as an array quantity.
    pub fn x_quantity(&self) -> Quantity {
        Quantity::new(self.x.clone(), self.x_unit)
    }

    /// Y as an array quantity.
    pub fn y_quantity(&self) -> Quantity {
        Quantity::new(self.y.clone(), self.y_unit)
    }

    // ---- Resampling arithmetic ----

    /// `self + rhs` on the common grid; X and Y units must match.
    pub fn add(&self, rhs: &DataArray) -> ArrayResult<DataArray> {
        self.require_same_x(rhs)?;
        self.require_same_y(rhs)?;
        self.combine(rhs, self.y_unit, |a, b| a + b)
    }

    /// `self - rhs` on the common grid; X and Y units must match.
    pub fn sub(&self, rhs: &DataArray) -> ArrayResult<DataArray> {
        self.require_same_x(rhs)?;
        self.require_same_y(rhs)?;
        self.combine(rhs, self.y_unit, |a, b| a - b)
    }

    /// `self * rhs` on the common grid; Y units multiply.
    pub fn mul(&self, rhs: &DataArray) -> ArrayResult<DataArray> {
        self.require_same_x(rhs)?;
        self.combine(rhs, self.y_unit * rhs.y_unit, |a, b| a * b)
    }

    /// `self / rhs` on the common grid; Y units divide.
    pub fn div(&self, rhs: &DataArray) -> ArrayResult<DataArray> {
        self.require_same_x(rhs)?;
        self.combine(rhs, self.y_unit / rhs.y_unit, |a, b| a / b)
    }

    fn combine<F>(&self, rhs: &DataArray, y_unit: Dimension, op: F) -> ArrayResult<DataArray>
    where
        F: Fn(f64, f64) -> f64,
    {
        check_ascending(self.x.view())?;
        check_ascending(rhs.x.view())?;
        let grid = common_grid(self.x.view(), rhs.x.view())?;

        let lhs_y = interp_many(grid.view(), self.x.view(), self.y.view());
        let rhs_y = interp_many(grid.view(), rhs.x.view(), rhs.y.view());
        let y = Zip::from(&lhs_y).and(&rhs_y).map_collect(|&a, &b| op(a, b));

        Ok(DataArray { x: grid, y, x_unit: self.x_unit, y_unit })
    }

    // ---- Scalar operations ----

    /// Multiply Y by a real scalar (bare number or quantity).
    ///
    /// Errors
    /// ------
    /// - `ArrayError::InvalidScalar` unless `factor` is a real scalar.
    pub fn scale(&self, factor: impl Into<Operand>) -> ArrayResult<DataArray> {
        let factor = factor.into().promote();
        let value = real_scalar(&factor)?;
        Ok(self.with_y(self.y.mapv(|v| v * value), self.y_unit * factor.dimension()))
    }

    /// Divide Y by a real scalar (bare number or quantity).
    ///
    /// Errors
    /// ------
    /// - `ArrayError::InvalidScalar` unless `divisor` is a real scalar.
    pub fn div_scalar(&self, divisor: impl Into<Operand>) -> ArrayResult<DataArray> {
        let divisor = divisor.into().promote();
        let value = real_scalar(&divisor)?;
        Ok(self.with_y(self.y.mapv(|v| v / value), self.y_unit / divisor.dimension()))
    }

    /// Raise Y (values and unit) to a real, finite, dimensionless power.
    ///
    /// Errors
    /// ------
    /// - `ArrayError::InvalidExponent` for any other exponent.
    pub fn powf(&self, exponent: impl Into<Operand>) -> ArrayResult<DataArray> {
        let power = exponent.into().real_exponent().map_err(|err| match err {
            QuantityError::InvalidExponent { reason } => ArrayError::InvalidExponent { reason },
            other => ArrayError::Quantity(other),
        })?;
        let y_unit = self.y_unit.powf(power)?;
        Ok(self.with_y(self.y.mapv(|v| v.powf(power)), y_unit))
    }

    /// `0 - self`.
    pub fn neg(&self) -> DataArray {
        self.with_y(self.y.mapv(|v| 0.0 - v), self.y_unit)
    }

    /// `1 / self`: reciprocal values, inverted Y unit.
    pub fn invert(&self) -> DataArray {
        self.with_y(self.y.mapv(|v| 1.0 / v), self.y_unit.recip())
    }

    /// Elementwise absolute value; the Y unit is kept.
    pub fn abs(&self) -> DataArray {
        self.with_y(self.y.mapv(f64::abs), self.y_unit)
    }

    // ---- Evaluation ----

    /// Linear interpolation of Y at the scalar `x`.
    ///
    /// Errors
    /// ------
    /// - `ArrayError::InvalidScalar` unless `x` is a real scalar.
    /// - `ArrayError::UnitMismatch` unless `x` carries the X dimension.
    /// - `ArrayError::UnsortedArray` unless X is strictly ascending.
    /// - `ArrayError::OutOfRange` outside `[min X, max X]`.
    pub fn at(&self, x: impl Into<Operand>) -> ArrayResult<Quantity> {
        let x = x.into().promote();
        let value = real_scalar(&x)?;
        if x.dimension() != self.x_unit {
            return Err(ArrayError::UnitMismatch { expected: self.x_unit, got: x.dimension() });
        }
        check_ascending(self.x.view())?;
        self.check_in_range(value)?;
        Ok(Quantity::new(interp(value, self.x.view(), self.y.view()), self.y_unit))
    }

    // ---- Plotting ----

    /// Raw values and SI unit labels for both axes.
    pub fn plot_data(&self) -> PlotData {
        PlotData {
            x: self.x.clone(),
            y: self.y.clone(),
            x_label: self.x_unit.to_string(),
            y_label: self.y_unit.to_string(),
        }
    }

    /// Both axes expressed as multiples of `x_unit` and `y_unit`.
    ///
    /// Errors
    /// ------
    /// - `ArrayError::InvalidScalar` unless both units are real scalars.
    /// - `ArrayError::Quantity(QuantityError::InvalidUnit)` when a unit does
    ///   not match its axis dimension.
    pub fn without_units(
        &self, x_unit: &Quantity, y_unit: &Quantity,
    ) -> ArrayResult<(Array1<f64>, Array1<f64>)> {
        Ok((strip_axis(self.x_quantity(), x_unit)?, strip_axis(self.y_quantity(), y_unit)?))
    }

    // ---- Internals ----

    fn with_y(&self, y: Array1<f64>, y_unit: Dimension) -> DataArray {
        DataArray { x: self.x.clone(), y, x_unit: self.x_unit, y_unit }
    }

    pub(crate) fn x_range(&self) -> (f64, f64) {
        (self.x[0], self.x[self.x.len() - 1])
    }

    pub(crate) fn check_in_range(&self, value: f64) -> ArrayResult<()> {
        let (min, max) = self.x_range();
        if value < min || value > max || value.is_nan() {
            return Err(ArrayError::OutOfRange { value, min, max });
        }
        Ok(())
    }

    fn require_same_x(&self, rhs: &DataArray) -> ArrayResult<()> {
        if self.x_unit != rhs.x_unit {
            return Err(ArrayError::DimensionMismatch {
                left: self.x_unit,
                right: rhs.x_unit,
                axis: "X",
            });
        }
        Ok(())
    }

    fn require_same_y(&self, rhs: &DataArray) -> ArrayResult<()> {
        if self.y_unit != rhs.y_unit {
            return Err(ArrayError::DimensionMismatch {
                left: self.y_unit,
                right: rhs.y_unit,
                axis: "Y",
            });
        }
        Ok(())
    }
}

fn strip_axis(axis: Quantity, unit: &Quantity) -> ArrayResult<Array1<f64>> {
    real_scalar(unit)?;
    match axis.value_in(unit)? {
        Magnitude::RealArray(values) => Ok(values),
        _ => Err(ArrayError::InvalidScalar { reason: "the unit must be a real scalar." }),
    }
}

impl PartialEq for DataArray {
    fn eq(&self, other: &Self) -> bool {
        self.x_unit == other.x_unit
            && self.y_unit == other.y_unit
            && self.x == other.x
            && self.y == other.y
    }
}

impl std::fmt::Display for DataArray {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let opts = FormatOptions::default();
        write!(f, "DataArray with units : {} | {}", self.x_unit, self.y_unit)?;
        for (x, y) in self.x.iter().zip(self.y.iter()) {
            write!(f, "\n[{} {}]", display_number(*x, &opts), display_number(*y, &opts))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{catalog, dimension::BaseUnit};
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Constructor validation (kinds, lengths, ordering).
    // - Resampling arithmetic and unit rules.
    // - Scalar operations, evaluation and equality.
    // - Plotting helpers and `Display`.
    //
    // They intentionally DO NOT cover:
    // - Integration and function sampling (see `integ` and `sampling`).
    // -------------------------------------------------------------------------

    fn seconds() -> Dimension {
        Dimension::base(BaseUnit::Second)
    }

    fn kilograms() -> Dimension {
        Dimension::base(BaseUnit::Kilogram)
    }

    fn ramp() -> DataArray {
        let (x, y) = (array![0.0, 1.0, 2.0, 3.0], array![1.0, 2.0, 3.0, 4.0]);
        DataArray::from_raw(x, seconds(), y, kilograms()).unwrap()
    }

    #[test]
    // Purpose
    // -------
    // Verify constructor validation.
    //
    // Given
    // -----
    // - A descending X; X/Y of different lengths; a scalar X.
    //
    // Expect
    // ------
    // - `UnsortedArray`, `Shape`, `NonRealAxis`; `from_unsorted` accepts the
    //   descending X.
    fn new_validates_inputs() {
        let desc = Quantity::new(array![3.0, 2.0, 1.0, 0.0], seconds());
        let y4 = Quantity::new(array![1.0, 2.0, 3.0, 4.0], kilograms());
        let y3 = Quantity::new(array![1.0, 2.0, 3.0], kilograms());

        assert_eq!(DataArray::new(&desc, &y4), Err(ArrayError::UnsortedArray { index: 1 }));
        assert!(matches!(DataArray::new(&ramp().x_quantity(), &y3), Err(ArrayError::Shape { .. })));
        assert_eq!(
            DataArray::new(&Quantity::new(1.0, seconds()), &y4),
            Err(ArrayError::NonRealAxis { axis: "X" })
        );
        assert!(DataArray::from_unsorted(&desc, &y4).is_ok());
    }

    #[test]
    // Purpose
    // -------
    // Adding two arrays resamples onto the common grid.
    //
    // Given
    // -----
    // - A = ramp on [0, 3]; B = constant 10 kg on [1, 2.5] with step 0.5.
    //
    // Expect
    // ------
    // - Grid [1, 1.5, 2, 2.5]; Y = A(x) + 10.
    fn add_resamples_on_common_grid() {
        let a = ramp();
        let (x, y) = (array![1.0, 1.5, 2.5], array![10.0, 10.0, 10.0]);
        let b = DataArray::from_raw(x, seconds(), y, kilograms()).unwrap();

        let sum = a.add(&b).unwrap();

        assert_eq!(sum.x(), &array![1.0, 1.5, 2.0, 2.5]);
        assert_eq!(sum.y(), &array![12.0, 12.5, 13.0, 13.5]);
        assert_eq!(sum.y_unit(), kilograms());
    }

    #[test]
    // Purpose
    // -------
    // Unit rules of the binary operators.
    //
    // Given
    // -----
    // - A (s → kg), a copy with Y in s, a copy with X in m.
    //
    // Expect
    // ------
    // - add across Y units fails on axis "Y"; mul across X units fails on
    //   axis "X"; A * A has Y unit kg**2 and A / A is dimensionless.
    fn binary_operators_follow_unit_rules() {
        let a = ramp();
        let (x, y) = (a.x().clone(), a.y().clone());
        let y_in_s = DataArray::from_raw(x.clone(), seconds(), y.clone(), seconds()).unwrap();
        let metres = Dimension::base(BaseUnit::Metre);
        let x_in_m = DataArray::from_raw(x, metres, y, kilograms()).unwrap();

        assert!(matches!(a.add(&y_in_s), Err(ArrayError::DimensionMismatch { axis: "Y", .. })));
        assert!(matches!(a.mul(&x_in_m), Err(ArrayError::DimensionMismatch { axis: "X", .. })));
        assert_eq!(a.mul(&a).unwrap().y_unit(), kilograms().powf(2.0).unwrap());
        assert!(a.div(&a).unwrap().y_unit().is_dimensionless());
    }

    #[test]
    // Purpose
    // -------
    // Scalar scaling combines units and rejects non-scalar operands.
    //
    // Given
    // -----
    // - A scaled by 2, by 1 m/s (catalog), and by an array.
    //
    // Expect
    // ------
    // - Y doubled; Y unit kg*m/s; `InvalidScalar` for the array.
    fn scale_combines_units() {
        let a = ramp();
        let speed = catalog::unit("m").unwrap().div(catalog::unit("s").unwrap()).unwrap();

        assert_eq!(a.scale(2.0).unwrap().y(), &array![2.0, 4.0, 6.0, 8.0]);
        assert_eq!(a.scale(&speed).unwrap().y_unit(), kilograms() * speed.dimension());
        assert_eq!(a.div_scalar(2.0).unwrap().y(), &array![0.5, 1.0, 1.5, 2.0]);
        assert!(matches!(a.scale(array![1.0, 2.0]), Err(ArrayError::InvalidScalar { .. })));
    }

    #[test]
    // Purpose
    // -------
    // Unary operations and powers.
    //
    // Given
    // -----
    // - A = ramp.
    //
    // Expect
    // ------
    // - neg flips Y; invert gives 1/Y in 1/kg; abs(neg) == A; A**2 squares
    //   values and unit; a complex exponent is rejected.
    fn unary_operations_and_powers() {
        let a = ramp();

        assert_eq!(a.neg().y(), &array![-1.0, -2.0, -3.0, -4.0]);
        assert_eq!(a.invert().y_unit(), kilograms().recip());
        assert_abs_diff_eq!(a.invert().y()[3], 0.25);
        assert_eq!(a.neg().abs(), a);
        assert_eq!(a.powf(2.0).unwrap().y(), &array![1.0, 4.0, 9.0, 16.0]);
        assert!(matches!(
            a.powf(num_complex::Complex64::new(0.0, 1.0)),
            Err(ArrayError::InvalidExponent { .. })
        ));
    }

    #[test]
    // Purpose
    // -------
    // Evaluation checks units and range, then interpolates.
    //
    // Given
    // -----
    // - A = ramp; x = 1.5 s, 1.5 m, 4 s.
    //
    // Expect
    // ------
    // - 2.5 kg; `UnitMismatch`; `OutOfRange`.
    fn at_interpolates_within_range() {
        let a = ramp();
        let s = catalog::unit("s").unwrap();

        assert_eq!(a.at(1.5 * &s).unwrap(), Quantity::new(2.5, kilograms()));
        assert!(matches!(a.at(catalog::unit("m").unwrap()), Err(ArrayError::UnitMismatch { .. })));
        assert_eq!(a.at(4.0 * &s), Err(ArrayError::OutOfRange { value: 4.0, min: 0.0, max: 3.0 }));
    }

    #[test]
    // Purpose
    // -------
    // Plotting helpers and display.
    //
    // Given
    // -----
    // - A = ramp; units ms and g.
    //
    // Expect
    // ------
    // - Labels "s" and "kg"; X in ms is 1000 * X; Y in g is 1000 * Y;
    //   display header "DataArray with units : s | kg".
    fn plot_helpers_and_display() {
        let a = ramp();

        let plot = a.plot_data();
        let (ms, g) = (catalog::unit("ms").unwrap(), catalog::unit("g").unwrap());
        let (xs, ys) = a.without_units(&ms, &g).unwrap();

        assert_eq!((plot.x_label.as_str(), plot.y_label.as_str()), ("s", "kg"));
        assert_abs_diff_eq!(xs[2], 2000.0, epsilon = 1e-9);
        assert_abs_diff_eq!(ys[3], 4000.0, epsilon = 1e-9);
        assert!(a.to_string().starts_with("DataArray with units : s | kg\n[0.000E+00 1.000]"));
    }
}
