//! units::operand — explicit promotion of bare numbers to quantities.
//!
//! Every binary quantity operation accepts `impl Into<Operand>`, so callers
//! can pass a `Quantity`, a `&Quantity`, an `f64`, a complex number or an
//! `Array1`. [`Operand::promote`] turns bare numbers into dimensionless
//! quantities before any arithmetic takes place.

use crate::units::{
    dimension::Dimension,
    errors::{QuantityError, QuantityResult},
    magnitude::Magnitude,
    quantity::Quantity,
};
use ndarray::Array1;
use num_complex::Complex64;

/// `Operand` — a bare number or a quantity.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    Number(Magnitude),
    Quantity(Quantity),
}

impl Operand {
    /// Wrap a bare number as a dimensionless quantity; quantities pass
    /// through unchanged.
    pub fn promote(self) -> Quantity {
        match self {
            Operand::Number(magnitude) => Quantity::new(magnitude, Dimension::dimensionless()),
            Operand::Quantity(q) => q,
        }
    }

    /// `true` for bare numbers and for dimensionless quantities.
    pub fn is_dimensionless(&self) -> bool {
        match self {
            Operand::Number(_) => true,
            Operand::Quantity(q) => q.is_dimensionless(),
        }
    }

    /// Interpret the operand as a power: a real, finite, dimensionless
    /// scalar.
    ///
    /// # Errors
    /// - [`QuantityError::InvalidExponent`] for dimensioned, complex,
    ///   array-valued or non-finite operands.
    pub fn real_exponent(&self) -> QuantityResult<f64> {
        let magnitude = match self {
            Operand::Number(m) => m,
            Operand::Quantity(q) if q.is_dimensionless() => q.magnitude(),
            Operand::Quantity(_) => {
                return Err(QuantityError::InvalidExponent {
                    reason: "the exponent has a physical unit.",
                });
            }
        };
        match magnitude {
            Magnitude::Real(p) if p.is_finite() => Ok(*p),
            Magnitude::Real(_) => {
                Err(QuantityError::InvalidExponent { reason: "the exponent is not finite." })
            }
            _ => Err(QuantityError::InvalidExponent {
                reason: "the exponent must be a real scalar.",
            }),
        }
    }
}

impl From<Quantity> for Operand {
    fn from(value: Quantity) -> Self {
        Operand::Quantity(value)
    }
}

impl From<&Quantity> for Operand {
    fn from(value: &Quantity) -> Self {
        Operand::Quantity(value.clone())
    }
}

impl From<Magnitude> for Operand {
    fn from(value: Magnitude) -> Self {
        Operand::Number(value)
    }
}

impl From<f64> for Operand {
    fn from(value: f64) -> Self {
        Operand::Number(Magnitude::Real(value))
    }
}

impl From<i32> for Operand {
    fn from(value: i32) -> Self {
        Operand::Number(Magnitude::from(value))
    }
}

impl From<Complex64> for Operand {
    fn from(value: Complex64) -> Self {
        Operand::Number(Magnitude::Complex(value))
    }
}

impl From<Array1<f64>> for Operand {
    fn from(value: Array1<f64>) -> Self {
        Operand::Number(Magnitude::RealArray(value))
    }
}

impl From<Array1<Complex64>> for Operand {
    fn from(value: Array1<Complex64>) -> Self {
        Operand::Number(Magnitude::ComplexArray(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::dimension::BaseUnit;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Promotion of bare numbers.
    // - Exponent extraction rules.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that bare numbers promote to dimensionless quantities and
    // quantities pass through.
    //
    // Given
    // -----
    // - 2.0 and 3 s.
    //
    // Expect
    // ------
    // - A dimensionless 2.0; the unchanged 3 s.
    fn promote_wraps_numbers_only() {
        let secs = Quantity::new(3.0, Dimension::base(BaseUnit::Second));

        assert_eq!(Operand::from(2.0).promote(), Quantity::dimensionless(2.0));
        assert_eq!(Operand::from(&secs).promote(), secs);
        assert!(!Operand::from(secs).is_dimensionless());
    }

    #[test]
    // Purpose
    // -------
    // Check which operands are accepted as exponents.
    //
    // Given
    // -----
    // - 2.0, dimensionless 0.5, NaN, an array, 1 m.
    //
    // Expect
    // ------
    // - 2.0 and 0.5 accepted; the rest rejected with `InvalidExponent`.
    fn real_exponent_accepts_only_finite_real_scalars() {
        let metre = Quantity::new(1.0, Dimension::base(BaseUnit::Metre));

        assert_eq!(Operand::from(2.0).real_exponent().unwrap(), 2.0);
        assert_eq!(Operand::from(Quantity::dimensionless(0.5)).real_exponent().unwrap(), 0.5);
        let bad_exponents =
            [Operand::from(f64::NAN), Operand::from(array![1.0, 2.0]), Operand::from(metre)];
        for bad in bad_exponents {
            assert!(matches!(bad.real_exponent(), Err(QuantityError::InvalidExponent { .. })));
        }
    }
}
