//! units::quantity — a numeric payload bound to a physical dimension.
//!
//! Purpose
//! -------
//! Provide [`Quantity`], the value type of the crate: a [`Magnitude`]
//! (real/complex scalar or 1-D array) tagged with exactly one [`Dimension`]
//! and an optional display label. Every operation returns a new value;
//! quantities are never mutated in place.
//!
//! Key behaviors
//! -------------
//! - Unit-checked arithmetic: `add`/`sub`/`rem` and the ordering comparisons
//!   require equal dimensions; `mul`/`div`/`pow` combine them.
//! - Bare numbers are accepted wherever a quantity is, through
//!   [`Operand`] and its promotion to a dimensionless quantity.
//! - Conversions to bare numbers (`to_scalar`, `to_integer`, `to_complex`,
//!   `unwrap_dimensionless`) only succeed for dimensionless quantities.
//! - Formatting in SI units (`format`), in a caller-provided unit
//!   (`format_in`) or in a catalog unit (`format_as`).
//!
//! Invariants & assumptions
//! ------------------------
//! - The label is cosmetic: it never takes part in equality or arithmetic.
//! - Division by zero and NaN propagate as IEEE values in the payload.
//!
//! Conventions
//! -----------
//! - Labels compose as `a*b`, `a/b`, `1/b` and `a**p`; a compound operand is
//!   parenthesized when it appears as a divisor or base.
//! - `equals` never fails: mismatched dimensions simply compare unequal.
//!   `less_equal` / `greater_equal` are `less_than || equals` /
//!   `greater_than || equals`.
//!
//! Downstream usage
//! ----------------
//! - `arrays::DataArray` stores raw SI values and rebuilds quantities with
//!   [`Quantity::new`] when evaluating or integrating.
//! - The unit catalog builds its entries through scalar multiplication and
//!   [`Quantity::with_label`].

use crate::units::{
    catalog,
    dimension::Dimension,
    errors::{QuantityError, QuantityResult},
    format::{FormatOptions, display_magnitude},
    magnitude::{Magnitude, Truth, floored_rem},
    operand::Operand,
};
use ndarray::Array1;
use num_complex::Complex64;
use std::ops::{Div, Mul, Neg};

/// Quantity — a magnitude, its dimension and an optional display label.
///
/// Fields
/// ------
/// - `magnitude`: numeric payload, expressed in SI units of `dimension`.
/// - `dimension`: exponents over the eight base units.
/// - `label`: human-readable unit name (`"km"`, `"N*m"`), display only.
#[derive(Debug, Clone)]
pub struct Quantity {
    magnitude: Magnitude,
    dimension: Dimension,
    label: Option<String>,
}

impl Quantity {
    /// Bind a payload to a dimension, without a label.
    pub fn new(magnitude: impl Into<Magnitude>, dimension: Dimension) -> Self {
        Self { magnitude: magnitude.into(), dimension, label: None }
    }

    /// A dimensionless quantity.
    pub fn dimensionless(magnitude: impl Into<Magnitude>) -> Self {
        Self::new(magnitude, Dimension::dimensionless())
    }

    /// The SI unit of `dimension`: magnitude 1.
    pub fn unit(dimension: Dimension) -> Self {
        Self::new(1.0, dimension)
    }

    /// Attach a display label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn magnitude(&self) -> &Magnitude {
        &self.magnitude
    }

    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// The SI unit matching this quantity's dimension.
    pub fn si_unit(&self) -> Quantity {
        Quantity::unit(self.dimension)
    }

    pub fn is_dimensionless(&self) -> bool {
        self.dimension.is_dimensionless()
    }

    /// `true` for scalar payloads.
    pub fn is_scalar(&self) -> bool {
        self.magnitude.is_scalar()
    }

    /// Number of elements of an array payload, `None` for scalars.
    pub fn len(&self) -> Option<usize> {
        self.magnitude.len()
    }

    /// Element `index` of an array-valued quantity, as a scalar quantity.
    ///
    /// # Errors
    /// - [`QuantityError::IndexOutOfBounds`] past the end of the array.
    /// - [`QuantityError::UnsupportedOperation`] for scalar payloads.
    pub fn get(&self, index: usize) -> QuantityResult<Quantity> {
        Ok(Quantity {
            magnitude: self.magnitude.get(index)?,
            dimension: self.dimension,
            label: self.label.clone(),
        })
    }

    // ---- Arithmetic ----

    /// `self + rhs`; dimensions must be equal.
    pub fn add(&self, rhs: impl Into<Operand>) -> QuantityResult<Quantity> {
        let rhs = rhs.into().promote();
        self.require_same_dimension(&rhs)?;
        let magnitude =
            Magnitude::zip_with(&self.magnitude, &rhs.magnitude, |a, b| a + b, |a, b| a + b)?;
        Ok(self.derive(magnitude, self.dimension, self.label.clone()))
    }

    /// `self - rhs`; dimensions must be equal.
    pub fn sub(&self, rhs: impl Into<Operand>) -> QuantityResult<Quantity> {
        let rhs = rhs.into().promote();
        self.require_same_dimension(&rhs)?;
        let magnitude =
            Magnitude::zip_with(&self.magnitude, &rhs.magnitude, |a, b| a - b, |a, b| a - b)?;
        Ok(self.derive(magnitude, self.dimension, self.label.clone()))
    }

    /// `self * rhs`; dimensions multiply.
    ///
    /// # Errors
    /// - [`QuantityError::ShapeMismatch`] for arrays of different lengths.
    pub fn mul(&self, rhs: impl Into<Operand>) -> QuantityResult<Quantity> {
        let rhs = rhs.into().promote();
        let magnitude =
            Magnitude::zip_with(&self.magnitude, &rhs.magnitude, |a, b| a * b, |a, b| a * b)?;
        let label = product_label(self, &rhs);
        Ok(self.derive(magnitude, self.dimension * rhs.dimension, label))
    }

    /// `self / rhs`; dimensions divide. Division by zero yields IEEE values.
    ///
    /// # Errors
    /// - [`QuantityError::ShapeMismatch`] for arrays of different lengths.
    pub fn div(&self, rhs: impl Into<Operand>) -> QuantityResult<Quantity> {
        let rhs = rhs.into().promote();
        let magnitude =
            Magnitude::zip_with(&self.magnitude, &rhs.magnitude, |a, b| a / b, |a, b| a / b)?;
        let label = quotient_label(self, &rhs);
        Ok(self.derive(magnitude, self.dimension / rhs.dimension, label))
    }

    /// Floored modulo `self % rhs`; dimensions must be equal and both
    /// payloads real.
    pub fn rem(&self, rhs: impl Into<Operand>) -> QuantityResult<Quantity> {
        let rhs = rhs.into().promote();
        self.require_same_dimension(&rhs)?;
        if self.magnitude.is_complex() || rhs.magnitude.is_complex() {
            return Err(QuantityError::UnsupportedOperation {
                op: "%",
                reason: "modulo is only defined for real payloads.",
            });
        }
        let magnitude =
            Magnitude::zip_with(&self.magnitude, &rhs.magnitude, floored_rem, |a, _| a)?;
        Ok(self.derive(magnitude, self.dimension, self.label.clone()))
    }

    /// `self ** exponent`; the exponent must be a real, finite,
    /// dimensionless scalar.
    pub fn pow(&self, exponent: impl Into<Operand>) -> QuantityResult<Quantity> {
        let power = exponent.into().real_exponent()?;
        self.powf(power)
    }

    /// `self ** power` for a plain `f64` power.
    ///
    /// # Errors
    /// - [`QuantityError::InvalidExponent`] when `power` is not finite.
    pub fn powf(&self, power: f64) -> QuantityResult<Quantity> {
        let dimension = self.dimension.powf(power)?;
        let label = self.label().map(|l| format!("{}**{}", parenthesize(l), render_power(power)));
        Ok(self.derive(self.magnitude.powf(power), dimension, label))
    }

    /// `-self`.
    pub fn neg(&self) -> Quantity {
        self.derive(self.magnitude.scale(-1.0), self.dimension, self.label.clone())
    }

    /// `1 / self`.
    pub fn recip(&self) -> Quantity {
        let label = self.label().map(|l| format!("1/{}", parenthesize(l)));
        self.derive(self.magnitude.recip(), self.dimension.recip(), label)
    }

    /// Elementwise absolute value (modulus for complex payloads).
    pub fn abs(&self) -> Quantity {
        self.derive(self.magnitude.abs(), self.dimension, self.label.clone())
    }

    // ---- Comparisons ----

    /// Elementwise `==`. Mismatched dimensions compare unequal.
    pub fn equals(&self, rhs: impl Into<Operand>) -> Truth {
        self.equals_quantity(&rhs.into().promote())
    }

    /// Elementwise `!=`; dimensions must be equal.
    pub fn not_equal(&self, rhs: impl Into<Operand>) -> QuantityResult<Truth> {
        let rhs = rhs.into().promote();
        self.require_same_dimension(&rhs)?;
        let kernel = |a: f64, b: f64| a != b;
        Magnitude::compare(&self.magnitude, &rhs.magnitude, "!=", kernel, Some(|a, b| a != b))
    }

    /// Elementwise `<`; dimensions must be equal, payloads real.
    pub fn less_than(&self, rhs: impl Into<Operand>) -> QuantityResult<Truth> {
        self.ordering(rhs.into().promote(), "<", |a, b| a < b)
    }

    /// Elementwise `>`; dimensions must be equal, payloads real.
    pub fn greater_than(&self, rhs: impl Into<Operand>) -> QuantityResult<Truth> {
        self.ordering(rhs.into().promote(), ">", |a, b| a > b)
    }

    /// `less_than || equals`.
    pub fn less_equal(&self, rhs: impl Into<Operand>) -> QuantityResult<Truth> {
        let rhs = rhs.into().promote();
        let lt = self.ordering(rhs.clone(), "<=", |a, b| a < b)?;
        lt.or(&self.equals_quantity(&rhs))
    }

    /// `greater_than || equals`.
    pub fn greater_equal(&self, rhs: impl Into<Operand>) -> QuantityResult<Truth> {
        let rhs = rhs.into().promote();
        let gt = self.ordering(rhs.clone(), ">=", |a, b| a > b)?;
        gt.or(&self.equals_quantity(&rhs))
    }

    // ---- Conversions ----

    /// The value of a dimensionless real scalar.
    ///
    /// # Errors
    /// - [`QuantityError::UnitConversion`] unless dimensionless.
    /// - [`QuantityError::UnsupportedOperation`] for complex or array payloads.
    pub fn to_scalar(&self) -> QuantityResult<f64> {
        self.require_dimensionless("float")?;
        match &self.magnitude {
            Magnitude::Real(v) => Ok(*v),
            Magnitude::Complex(_) => Err(QuantityError::UnsupportedOperation {
                op: "float",
                reason: "complex values cannot be converted to a real number.",
            }),
            _ => Err(QuantityError::UnsupportedOperation {
                op: "float",
                reason: "only scalar quantities convert to a number.",
            }),
        }
    }

    /// The value of a dimensionless real scalar, truncated toward zero.
    pub fn to_integer(&self) -> QuantityResult<i64> {
        let value = self.to_scalar()?;
        if !value.is_finite() {
            return Err(QuantityError::UnsupportedOperation {
                op: "int",
                reason: "non-finite values cannot be converted to an integer.",
            });
        }
        Ok(value.trunc() as i64)
    }

    /// The value of a dimensionless scalar as a complex number.
    pub fn to_complex(&self) -> QuantityResult<Complex64> {
        self.require_dimensionless("complex")?;
        match &self.magnitude {
            Magnitude::Real(v) => Ok(Complex64::new(*v, 0.0)),
            Magnitude::Complex(c) => Ok(*c),
            _ => Err(QuantityError::UnsupportedOperation {
                op: "complex",
                reason: "only scalar quantities convert to a number.",
            }),
        }
    }

    /// The payload of a dimensionless real array.
    pub fn to_array(&self) -> QuantityResult<Array1<f64>> {
        self.require_dimensionless("array")?;
        match &self.magnitude {
            Magnitude::RealArray(a) => Ok(a.clone()),
            _ => Err(QuantityError::UnsupportedOperation {
                op: "array",
                reason: "only real array quantities convert to an array.",
            }),
        }
    }

    /// A bare number when dimensionless, the quantity itself otherwise.
    pub fn unwrap_dimensionless(self) -> Operand {
        if self.is_dimensionless() {
            Operand::Number(self.magnitude)
        } else {
            Operand::Quantity(self)
        }
    }

    /// The payload expressed in multiples of `unit`.
    ///
    /// # Errors
    /// - [`QuantityError::InvalidUnit`] when `self / unit` is not
    ///   dimensionless.
    pub fn value_in(&self, unit: &Quantity) -> QuantityResult<Magnitude> {
        let ratio = self.div(unit)?;
        if !ratio.is_dimensionless() {
            return Err(QuantityError::InvalidUnit {
                target: unit.unit_name(),
                residual: ratio.dimension,
            });
        }
        Ok(ratio.magnitude)
    }

    // ---- Formatting ----

    /// Render with the default [`FormatOptions`].
    pub fn format(&self) -> String {
        self.format_with(&FormatOptions::default())
    }

    /// `<number><prefix><dimension><suffix>`.
    pub fn format_with(&self, opts: &FormatOptions) -> String {
        format!(
            "{}{}{}{}",
            display_magnitude(&self.magnitude, opts),
            opts.unit_prefix,
            self.dimension,
            opts.unit_suffix
        )
    }

    /// Render as `<number> <unit name>` in multiples of `target`.
    ///
    /// # Errors
    /// - [`QuantityError::InvalidUnit`] when a residual dimension remains.
    pub fn format_in(&self, target: &Quantity) -> QuantityResult<String> {
        self.format_in_with(target, &FormatOptions::default())
    }

    /// [`Quantity::format_in`] with explicit display options.
    pub fn format_in_with(
        &self, target: &Quantity, opts: &FormatOptions,
    ) -> QuantityResult<String> {
        let value = self.value_in(target)?;
        Ok(format!("{} {}", display_magnitude(&value, opts), target.unit_name()))
    }

    /// Render in the catalog unit named `symbol`.
    ///
    /// # Errors
    /// - [`QuantityError::UnknownUnit`] when `symbol` is not registered.
    /// - [`QuantityError::InvalidUnit`] when the dimensions disagree.
    pub fn format_as(&self, symbol: &str) -> QuantityResult<String> {
        let target = catalog::unit(symbol)?;
        self.format_in(&target)
    }

    // ---- Internals ----

    fn derive(
        &self, magnitude: Magnitude, dimension: Dimension, label: Option<String>,
    ) -> Quantity {
        Quantity { magnitude, dimension, label }
    }

    fn unit_name(&self) -> String {
        self.label.clone().unwrap_or_else(|| self.dimension.describe())
    }

    fn require_same_dimension(&self, rhs: &Quantity) -> QuantityResult<()> {
        if self.dimension != rhs.dimension {
            return Err(QuantityError::DimensionMismatch {
                left: self.dimension,
                right: rhs.dimension,
            });
        }
        Ok(())
    }

    fn require_dimensionless(&self, target: &'static str) -> QuantityResult<()> {
        if !self.is_dimensionless() {
            return Err(QuantityError::UnitConversion { unit: self.dimension, target });
        }
        Ok(())
    }

    fn equals_quantity(&self, rhs: &Quantity) -> Truth {
        if self.dimension != rhs.dimension {
            return Truth::Scalar(false);
        }
        let kernel = |a: f64, b: f64| a == b;
        Magnitude::compare(&self.magnitude, &rhs.magnitude, "==", kernel, Some(|a, b| a == b))
            .unwrap_or(Truth::Scalar(false))
    }

    fn ordering(
        &self, rhs: Quantity, op: &'static str, kernel: fn(f64, f64) -> bool,
    ) -> QuantityResult<Truth> {
        self.require_same_dimension(&rhs)?;
        Magnitude::compare(&self.magnitude, &rhs.magnitude, op, kernel, None)
    }
}

/// Parenthesize compound labels used as divisors or bases.
fn parenthesize(label: &str) -> String {
    if label.contains(['*', '/']) { format!("({label})") } else { label.to_string() }
}

fn render_power(power: f64) -> String {
    if power.fract() == 0.0 { format!("{}", power as i64) } else { format!("{power}") }
}

/// Label of one operand inside a composed label.
///
/// An unlabelled operand with a dimension stands in with its SI unit
/// expression; a bare number contributes nothing.
fn operand_label(q: &Quantity) -> Option<String> {
    match &q.label {
        Some(label) => Some(label.clone()),
        None if !q.dimension.is_dimensionless() => Some(q.dimension.to_string()),
        None => None,
    }
}

fn product_label(lhs: &Quantity, rhs: &Quantity) -> Option<String> {
    if lhs.label.is_none() && rhs.label.is_none() {
        return None;
    }
    match (operand_label(lhs), operand_label(rhs)) {
        (Some(a), Some(b)) => Some(format!("{a}*{b}")),
        (Some(a), None) => Some(a),
        (None, Some(b)) => Some(b),
        (None, None) => None,
    }
}

fn quotient_label(lhs: &Quantity, rhs: &Quantity) -> Option<String> {
    if lhs.label.is_none() && rhs.label.is_none() {
        return None;
    }
    match (operand_label(lhs), operand_label(rhs)) {
        (Some(a), Some(b)) => Some(format!("{a}/{}", parenthesize(&b))),
        (Some(a), None) => Some(a),
        (None, Some(b)) => Some(format!("1/{}", parenthesize(&b))),
        (None, None) => None,
    }
}

impl PartialEq for Quantity {
    fn eq(&self, other: &Self) -> bool {
        self.equals_quantity(other).all()
    }
}

impl std::fmt::Display for Quantity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.format())
    }
}

impl From<f64> for Quantity {
    fn from(value: f64) -> Self {
        Quantity::dimensionless(value)
    }
}

impl From<Complex64> for Quantity {
    fn from(value: Complex64) -> Self {
        Quantity::dimensionless(value)
    }
}

impl From<Array1<f64>> for Quantity {
    fn from(value: Array1<f64>) -> Self {
        Quantity::dimensionless(value)
    }
}

impl Mul<&Quantity> for f64 {
    type Output = Quantity;

    fn mul(self, rhs: &Quantity) -> Quantity {
        rhs.derive(rhs.magnitude.scale(self), rhs.dimension, rhs.label.clone())
    }
}

impl Mul<f64> for &Quantity {
    type Output = Quantity;

    fn mul(self, rhs: f64) -> Quantity {
        rhs * self
    }
}

impl Div<f64> for &Quantity {
    type Output = Quantity;

    fn div(self, rhs: f64) -> Quantity {
        let magnitude = self.magnitude.map(|v| v / rhs, |c| c / rhs);
        self.derive(magnitude, self.dimension, self.label.clone())
    }
}

impl Neg for &Quantity {
    type Output = Quantity;

    fn neg(self) -> Quantity {
        Quantity::neg(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::dimension::BaseUnit;
    use approx::assert_relative_eq;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Dimension checks in add/sub/rem and the ordering comparisons.
    // - Dimension combination in mul/div/pow and label composition.
    // - Promotion of bare numbers and explicit unwrapping.
    // - Conversions and the three formatting entry points.
    //
    // They intentionally DO NOT cover:
    // - Catalog contents, which are tested in `catalog`.
    // -------------------------------------------------------------------------

    fn metres(v: f64) -> Quantity {
        Quantity::new(v, Dimension::base(BaseUnit::Metre))
    }

    fn seconds(v: f64) -> Quantity {
        Quantity::new(v, Dimension::base(BaseUnit::Second))
    }

    #[test]
    // Purpose
    // -------
    // Verify that adding quantities of different dimensions fails while
    // equal dimensions add their payloads.
    //
    // Given
    // -----
    // - 2 m + 3 m and 2 m + 1 s.
    //
    // Expect
    // ------
    // - 5 m; `DimensionMismatch { left: m, right: s }`.
    fn add_requires_equal_dimensions() {
        // Arrange
        let a = metres(2.0);

        // Act
        let sum = a.add(metres(3.0)).unwrap();
        let err = a.add(seconds(1.0)).unwrap_err();

        // Assert
        assert_eq!(sum, metres(5.0));
        assert_eq!(
            err,
            QuantityError::DimensionMismatch {
                left: Dimension::base(BaseUnit::Metre),
                right: Dimension::base(BaseUnit::Second),
            }
        );
    }

    #[test]
    // Purpose
    // -------
    // Check that `(a / b) * b` recovers `a` and that dimensions combine.
    //
    // Given
    // -----
    // - a = 7 m, b = 3 s.
    //
    // Expect
    // ------
    // - a / b has dimension m/s; (a / b) * b ≈ 7 m.
    fn div_then_mul_recovers_original() {
        let a = metres(7.0);
        let b = seconds(3.0);

        let speed = a.div(&b).unwrap();
        let back = speed.mul(&b).unwrap();

        assert_eq!(speed.dimension().to_string(), "m/s");
        assert_eq!(back.dimension(), a.dimension());
        assert_relative_eq!(back.magnitude().as_real().unwrap(), 7.0, max_relative = 1e-15);
    }

    #[test]
    // Purpose
    // -------
    // Bare numbers are promoted to dimensionless quantities.
    //
    // Given
    // -----
    // - 1 m + 1.0 and (2.0 dimensionless) + 1.0.
    //
    // Expect
    // ------
    // - The first fails; the second unwraps to `Number(Real(3.0))`.
    fn bare_numbers_promote_to_dimensionless() {
        let err = metres(1.0).add(1.0);
        let ok = Quantity::dimensionless(2.0).add(1.0).unwrap();

        assert!(matches!(err, Err(QuantityError::DimensionMismatch { .. })));
        assert_eq!(ok.unwrap_dimensionless(), Operand::Number(Magnitude::Real(3.0)));
    }

    #[test]
    // Purpose
    // -------
    // Ensure a dimensioned result is not unwrapped and conversions reject it.
    //
    // Given
    // -----
    // - 4 m.
    //
    // Expect
    // ------
    // - `unwrap_dimensionless` returns `Operand::Quantity`; `to_scalar`
    //   fails with `UnitConversion`.
    fn conversions_require_dimensionless() {
        let q = metres(4.0);

        assert!(matches!(q.clone().unwrap_dimensionless(), Operand::Quantity(_)));
        assert!(matches!(q.to_scalar(), Err(QuantityError::UnitConversion { .. })));
        assert_eq!(Quantity::dimensionless(-2.7).to_integer().unwrap(), -2);
        assert_eq!(Quantity::dimensionless(2.0).to_complex().unwrap(), Complex64::new(2.0, 0.0));
    }

    #[test]
    // Purpose
    // -------
    // Verify `pow` validates the exponent and scales the dimension.
    //
    // Given
    // -----
    // - (3 m) ** 2, (4 m) ** 0.5, (3 m) ** (1 s), (3 m) ** (1 + 1j).
    //
    // Expect
    // ------
    // - 9 m**2; 2 m**0.5; `InvalidExponent` for the last two.
    fn pow_validates_exponent() {
        let sq = metres(3.0).pow(2.0).unwrap();
        let root = metres(4.0).pow(0.5).unwrap();

        assert_eq!(sq, Quantity::new(9.0, Dimension::base(BaseUnit::Metre).powf(2.0).unwrap()));
        assert_eq!(root.dimension().to_string(), "m**0.5");
        let with_unit = metres(3.0).pow(seconds(1.0));
        assert!(matches!(with_unit, Err(QuantityError::InvalidExponent { .. })));
        assert!(matches!(
            metres(3.0).pow(Complex64::new(1.0, 1.0)),
            Err(QuantityError::InvalidExponent { .. })
        ));
    }

    #[test]
    // Purpose
    // -------
    // Check the comparison family and its dimension rules.
    //
    // Given
    // -----
    // - 1 m vs 2 m, 1 m vs 1 s, and an array [1, 2, 3] m vs 2 m.
    //
    // Expect
    // ------
    // - `less_than` true; `equals` false across dimensions; ordering across
    //   dimensions fails; elementwise `less_equal` [true, true, false].
    fn comparisons_follow_dimension_rules() {
        let one = metres(1.0);
        let arr = Quantity::new(array![1.0, 2.0, 3.0], Dimension::base(BaseUnit::Metre));

        assert_eq!(one.less_than(metres(2.0)).unwrap(), Truth::Scalar(true));
        assert_eq!(one.equals(seconds(1.0)), Truth::Scalar(false));
        let (greater, unequal) = (one.greater_than(seconds(1.0)), one.not_equal(seconds(1.0)));
        assert!(matches!(greater, Err(QuantityError::DimensionMismatch { .. })));
        assert!(matches!(unequal, Err(QuantityError::DimensionMismatch { .. })));
        assert_eq!(arr.less_equal(metres(2.0)).unwrap(), Truth::Array(array![true, true, false]));
        assert_eq!(Quantity::dimensionless(3.0), Quantity::from(3.0));
    }

    #[test]
    // Purpose
    // -------
    // Modulo is floored and rejects mismatched dimensions.
    //
    // Given
    // -----
    // - (-1 m) % (3 m) and (1 m) % (1 s).
    //
    // Expect
    // ------
    // - 2 m; `DimensionMismatch`.
    fn rem_is_floored_and_unit_checked() {
        assert_eq!(metres(-1.0).rem(metres(3.0)).unwrap(), metres(2.0));
        let mixed = metres(1.0).rem(seconds(1.0));
        assert!(matches!(mixed, Err(QuantityError::DimensionMismatch { .. })));
    }

    #[test]
    // Purpose
    // -------
    // Verify unary operations and the infallible operator impls.
    //
    // Given
    // -----
    // - q = 2 s.
    //
    // Expect
    // ------
    // - -q = -2 s, 1/q = 0.5 1/s, |-q| = 2 s, 3*q = 6 s, q/4 = 0.5 s.
    fn unary_and_scalar_operators() {
        let q = seconds(2.0);

        assert_eq!(-&q, seconds(-2.0));
        assert_eq!(q.recip(), Quantity::new(0.5, Dimension::base(BaseUnit::Second).recip()));
        assert_eq!((-&q).abs(), q);
        assert_eq!(3.0 * &q, seconds(6.0));
        assert_eq!(&q / 4.0, seconds(0.5));
    }

    #[test]
    // Purpose
    // -------
    // Labels compose through mul/div/pow and never affect equality.
    //
    // Given
    // -----
    // - km (labelled 1000 m), h (labelled 3600 s).
    //
    // Expect
    // ------
    // - km/h labelled "km/h"; 1/h labelled "1/h"; (km/h)**2 labelled
    //   "(km/h)**2"; km == 1000 m despite the label.
    fn labels_compose_and_do_not_affect_equality() {
        let km = metres(1000.0).with_label("km");
        let h = seconds(3600.0).with_label("h");

        let speed = km.div(&h).unwrap();

        assert_eq!(speed.label(), Some("km/h"));
        assert_eq!(h.recip().label(), Some("1/h"));
        assert_eq!(speed.powf(2.0).unwrap().label(), Some("(km/h)**2"));
        assert_eq!(km, metres(1000.0));
    }

    #[test]
    // Purpose
    // -------
    // An unlabelled operand with a dimension still shows up in the label.
    //
    // Given
    // -----
    // - km (labelled 1000 m), an unlabelled 1 s, a bare 2.0.
    //
    // Expect
    // ------
    // - km * (1 s) labelled "km*s" and km / (1 s) labelled "km/s".
    // - 2 * km keeps "km"; formatting 6096 m·s in km*s reads "6.096 km*s".
    fn unlabelled_dimensioned_operands_enter_the_label() {
        let km = metres(1000.0).with_label("km");
        let s = Quantity::unit(Dimension::base(BaseUnit::Second));

        let km_s = km.mul(&s).unwrap();

        assert_eq!(km_s.label(), Some("km*s"));
        assert_eq!(km.div(&s).unwrap().label(), Some("km/s"));
        assert_eq!(km.mul(2.0).unwrap().label(), Some("km"));
        assert_eq!(metres(6096.0).mul(&s).unwrap().format_in(&km_s).unwrap(), "6.096 km*s");
    }

    #[test]
    // Purpose
    // -------
    // Check SI formatting and formatting in a target unit.
    //
    // Given
    // -----
    // - 6096 m, formatted plainly and in a 1000 m unit labelled "km";
    //   6096 m formatted in seconds.
    //
    // Expect
    // ------
    // - "6.096E+03  m [PHYS]", "6.096 km", `InvalidUnit`.
    fn format_variants() {
        let q = metres(6096.0);
        let km = metres(1000.0).with_label("km");

        assert_eq!(q.format(), "6.096E+03  m [PHYS]");
        assert_eq!(q.to_string(), q.format());
        assert_eq!(q.format_in(&km).unwrap(), "6.096 km");
        assert!(matches!(q.format_in(&seconds(1.0)), Err(QuantityError::InvalidUnit { .. })));
    }

    #[test]
    // Purpose
    // -------
    // Converting into a unit and multiplying back recovers the value.
    //
    // Given
    // -----
    // - 2.5 km expressed in m.
    //
    // Expect
    // ------
    // - `value_in(m) == 2500`, and 2500 * m == 2.5 km.
    fn value_in_round_trips_through_unit() {
        let km = metres(1000.0).with_label("km");
        let q = 2.5 * &km;

        let value = q.value_in(&metres(1.0)).unwrap();

        assert_eq!(value, Magnitude::Real(2500.0));
        assert_eq!(metres(1.0).mul(value).unwrap(), q);
    }

    #[test]
    // Purpose
    // -------
    // Indexing returns scalar elements and checks bounds.
    //
    // Given
    // -----
    // - [1, 2] s.
    //
    // Expect
    // ------
    // - get(1) = 2 s; get(2) fails with `IndexOutOfBounds`.
    fn get_is_bounds_checked() {
        let arr = Quantity::new(array![1.0, 2.0], Dimension::base(BaseUnit::Second));

        assert_eq!(arr.get(1).unwrap(), seconds(2.0));
        assert_eq!(arr.get(2).unwrap_err(), QuantityError::IndexOutOfBounds { index: 2, len: 2 });
    }
}
