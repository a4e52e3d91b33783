//! units::magnitude — numeric payloads carried by quantities.
//!
//! Purpose
//! -------
//! Model the value part of a quantity as a closed tagged union instead of
//! inspecting argument types at run time. A [`Magnitude`] is either a real or
//! complex scalar, or a 1-D `ndarray` of reals or complexes.
//!
//! Key behaviors
//! -------------
//! - Elementwise binary kernels with scalar ↔ array broadcasting and
//!   real → complex promotion ([`Magnitude::zip_with`]).
//! - Unary maps (`powf`, `abs`, scaling, reciprocal) that preserve the
//!   payload kind.
//! - Elementwise comparisons returning a [`Truth`] (scalar or array of
//!   booleans).
//!
//! Invariants & assumptions
//! ------------------------
//! - Array payloads are always 1-D and owned; no views escape this module.
//! - Division by zero and NaN propagate as IEEE values; only shape
//!   disagreement between two arrays is an error.
//!
//! Conventions
//! -----------
//! - Modulo follows floored-division semantics: the result takes the sign of
//!   the divisor (`-1 % 3 == 2`, `1 % -3 == -2`).

use crate::units::errors::{QuantityError, QuantityResult};
use ndarray::{Array1, Zip};
use num_complex::Complex64;

/// `Magnitude` — scalar or 1-D array payload, real or complex.
#[derive(Debug, Clone, PartialEq)]
pub enum Magnitude {
    Real(f64),
    Complex(Complex64),
    RealArray(Array1<f64>),
    ComplexArray(Array1<Complex64>),
}

/// Complex view of a magnitude, used once promotion has happened.
enum ComplexForm {
    Scalar(Complex64),
    Array(Array1<Complex64>),
}

impl Magnitude {
    /// `true` for `Real` and `Complex`.
    pub fn is_scalar(&self) -> bool {
        matches!(self, Magnitude::Real(_) | Magnitude::Complex(_))
    }

    /// `true` for the two complex variants.
    pub fn is_complex(&self) -> bool {
        matches!(self, Magnitude::Complex(_) | Magnitude::ComplexArray(_))
    }

    /// Number of elements for array payloads, `None` for scalars.
    pub fn len(&self) -> Option<usize> {
        match self {
            Magnitude::RealArray(a) => Some(a.len()),
            Magnitude::ComplexArray(a) => Some(a.len()),
            _ => None,
        }
    }

    /// The value of a real scalar payload.
    pub fn as_real(&self) -> Option<f64> {
        match self {
            Magnitude::Real(v) => Some(*v),
            _ => None,
        }
    }

    /// A borrowed real array payload.
    pub fn as_real_array(&self) -> Option<&Array1<f64>> {
        match self {
            Magnitude::RealArray(a) => Some(a),
            _ => None,
        }
    }

    /// Element `index` of an array payload as a scalar payload.
    pub fn get(&self, index: usize) -> QuantityResult<Magnitude> {
        let out_of_bounds = |len| QuantityError::IndexOutOfBounds { index, len };
        match self {
            Magnitude::RealArray(a) => {
                a.get(index).map(|&v| Magnitude::Real(v)).ok_or_else(|| out_of_bounds(a.len()))
            }
            Magnitude::ComplexArray(a) => {
                a.get(index).map(|&v| Magnitude::Complex(v)).ok_or_else(|| out_of_bounds(a.len()))
            }
            _ => Err(QuantityError::UnsupportedOperation {
                op: "index",
                reason: "scalar payloads cannot be indexed.",
            }),
        }
    }

    fn to_complex_form(&self) -> ComplexForm {
        match self {
            Magnitude::Real(v) => ComplexForm::Scalar(Complex64::new(*v, 0.0)),
            Magnitude::Complex(c) => ComplexForm::Scalar(*c),
            Magnitude::RealArray(a) => ComplexForm::Array(a.mapv(|v| Complex64::new(v, 0.0))),
            Magnitude::ComplexArray(a) => ComplexForm::Array(a.clone()),
        }
    }

    /// Apply an elementwise binary kernel with broadcasting.
    ///
    /// Parameters
    /// ----------
    /// - `lhs`, `rhs`: `&Magnitude`
    ///   Operands. A scalar broadcasts against an array; two arrays must have
    ///   equal lengths.
    /// - `real`: `Fn(f64, f64) -> f64`
    ///   Kernel used when both operands are real.
    /// - `complex`: `Fn(Complex64, Complex64) -> Complex64`
    ///   Kernel used once either operand is complex (the other is promoted).
    ///
    /// Errors
    /// ------
    /// - `QuantityError::ShapeMismatch`
    ///   Returned when two array operands differ in length.
    pub fn zip_with<R, C>(
        lhs: &Magnitude, rhs: &Magnitude, real: R, complex: C,
    ) -> QuantityResult<Magnitude>
    where
        R: Fn(f64, f64) -> f64,
        C: Fn(Complex64, Complex64) -> Complex64,
    {
        use Magnitude::{Real, RealArray};

        match (lhs, rhs) {
            (Real(a), Real(b)) => Ok(Real(real(*a, *b))),
            (Real(a), RealArray(b)) => Ok(RealArray(b.mapv(|v| real(*a, v)))),
            (RealArray(a), Real(b)) => Ok(RealArray(a.mapv(|v| real(v, *b)))),
            (RealArray(a), RealArray(b)) => {
                check_lengths(a.len(), b.len())?;
                Ok(RealArray(Zip::from(a).and(b).map_collect(|&x, &y| real(x, y))))
            }
            _ => match (lhs.to_complex_form(), rhs.to_complex_form()) {
                (ComplexForm::Scalar(a), ComplexForm::Scalar(b)) => {
                    Ok(Magnitude::Complex(complex(a, b)))
                }
                (ComplexForm::Scalar(a), ComplexForm::Array(b)) => {
                    Ok(Magnitude::ComplexArray(b.mapv(|v| complex(a, v))))
                }
                (ComplexForm::Array(a), ComplexForm::Scalar(b)) => {
                    Ok(Magnitude::ComplexArray(a.mapv(|v| complex(v, b))))
                }
                (ComplexForm::Array(a), ComplexForm::Array(b)) => {
                    check_lengths(a.len(), b.len())?;
                    Ok(Magnitude::ComplexArray(
                        Zip::from(&a).and(&b).map_collect(|&x, &y| complex(x, y)),
                    ))
                }
            },
        }
    }

    /// Elementwise comparison of two payloads.
    ///
    /// Real payloads use `real`; complex payloads are only accepted when
    /// `complex` is provided (equality and inequality).
    ///
    /// Errors
    /// ------
    /// - `QuantityError::ShapeMismatch` for arrays of different lengths.
    /// - `QuantityError::UnsupportedOperation` for ordering complex payloads.
    pub fn compare<R>(
        lhs: &Magnitude, rhs: &Magnitude, op: &'static str, real: R,
        complex: Option<fn(Complex64, Complex64) -> bool>,
    ) -> QuantityResult<Truth>
    where
        R: Fn(f64, f64) -> bool,
    {
        use Magnitude::{Real, RealArray};

        match (lhs, rhs) {
            (Real(a), Real(b)) => Ok(Truth::Scalar(real(*a, *b))),
            (Real(a), RealArray(b)) => Ok(Truth::Array(b.mapv(|v| real(*a, v)))),
            (RealArray(a), Real(b)) => Ok(Truth::Array(a.mapv(|v| real(v, *b)))),
            (RealArray(a), RealArray(b)) => {
                check_lengths(a.len(), b.len())?;
                Ok(Truth::Array(Zip::from(a).and(b).map_collect(|&x, &y| real(x, y))))
            }
            _ => {
                let complex = complex.ok_or(QuantityError::UnsupportedOperation {
                    op,
                    reason: "complex numbers are not ordered.",
                })?;
                match (lhs.to_complex_form(), rhs.to_complex_form()) {
                    (ComplexForm::Scalar(a), ComplexForm::Scalar(b)) => {
                        Ok(Truth::Scalar(complex(a, b)))
                    }
                    (ComplexForm::Scalar(a), ComplexForm::Array(b)) => {
                        Ok(Truth::Array(b.mapv(|v| complex(a, v))))
                    }
                    (ComplexForm::Array(a), ComplexForm::Scalar(b)) => {
                        Ok(Truth::Array(a.mapv(|v| complex(v, b))))
                    }
                    (ComplexForm::Array(a), ComplexForm::Array(b)) => {
                        check_lengths(a.len(), b.len())?;
                        Ok(Truth::Array(Zip::from(&a).and(&b).map_collect(|&x, &y| complex(x, y))))
                    }
                }
            }
        }
    }

    /// Apply a unary kernel elementwise, keeping the payload kind.
    pub fn map<R, C>(&self, real: R, complex: C) -> Magnitude
    where
        R: Fn(f64) -> f64,
        C: Fn(Complex64) -> Complex64,
    {
        match self {
            Magnitude::Real(v) => Magnitude::Real(real(*v)),
            Magnitude::Complex(c) => Magnitude::Complex(complex(*c)),
            Magnitude::RealArray(a) => Magnitude::RealArray(a.mapv(real)),
            Magnitude::ComplexArray(a) => Magnitude::ComplexArray(a.mapv(complex)),
        }
    }

    /// Multiply every element by a real factor.
    pub fn scale(&self, factor: f64) -> Magnitude {
        self.map(|v| v * factor, |c| c * factor)
    }

    /// Elementwise reciprocal `1 / x`.
    pub fn recip(&self) -> Magnitude {
        self.map(|v| 1.0 / v, |c| Complex64::new(1.0, 0.0) / c)
    }

    /// Elementwise real power.
    pub fn powf(&self, power: f64) -> Magnitude {
        self.map(|v| v.powf(power), |c| c.powf(power))
    }

    /// Elementwise absolute value (modulus for complex payloads).
    pub fn abs(&self) -> Magnitude {
        match self {
            Magnitude::Real(v) => Magnitude::Real(v.abs()),
            Magnitude::Complex(c) => Magnitude::Real(c.norm()),
            Magnitude::RealArray(a) => Magnitude::RealArray(a.mapv(f64::abs)),
            Magnitude::ComplexArray(a) => Magnitude::RealArray(a.mapv(|v| v.norm())),
        }
    }
}

fn check_lengths(left: usize, right: usize) -> QuantityResult<()> {
    if left != right {
        return Err(QuantityError::ShapeMismatch { left, right });
    }
    Ok(())
}

/// Floored modulo: the result carries the sign of `divisor`.
pub fn floored_rem(value: f64, divisor: f64) -> f64 {
    let r = value % divisor;
    if r != 0.0 && (r < 0.0) != (divisor < 0.0) { r + divisor } else { r }
}

impl From<f64> for Magnitude {
    fn from(value: f64) -> Self {
        Magnitude::Real(value)
    }
}

impl From<i32> for Magnitude {
    fn from(value: i32) -> Self {
        Magnitude::Real(f64::from(value))
    }
}

impl From<Complex64> for Magnitude {
    fn from(value: Complex64) -> Self {
        Magnitude::Complex(value)
    }
}

impl From<Array1<f64>> for Magnitude {
    fn from(value: Array1<f64>) -> Self {
        Magnitude::RealArray(value)
    }
}

impl From<Array1<Complex64>> for Magnitude {
    fn from(value: Array1<Complex64>) -> Self {
        Magnitude::ComplexArray(value)
    }
}

/// `Truth` — outcome of a comparison: one boolean, or one per element.
#[derive(Debug, Clone, PartialEq)]
pub enum Truth {
    Scalar(bool),
    Array(Array1<bool>),
}

impl Truth {
    /// `true` when every element is `true`.
    pub fn all(&self) -> bool {
        match self {
            Truth::Scalar(b) => *b,
            Truth::Array(a) => a.iter().all(|&b| b),
        }
    }

    /// `true` when at least one element is `true`.
    pub fn any(&self) -> bool {
        match self {
            Truth::Scalar(b) => *b,
            Truth::Array(a) => a.iter().any(|&b| b),
        }
    }

    /// The scalar outcome, `None` for elementwise results.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Truth::Scalar(b) => Some(*b),
            Truth::Array(_) => None,
        }
    }

    /// Elementwise logical or, used for `<=` / `>=`.
    pub fn or(&self, other: &Truth) -> QuantityResult<Truth> {
        match (self, other) {
            (Truth::Scalar(a), Truth::Scalar(b)) => Ok(Truth::Scalar(*a || *b)),
            (Truth::Scalar(a), Truth::Array(b)) | (Truth::Array(b), Truth::Scalar(a)) => {
                Ok(Truth::Array(b.mapv(|v| *a || v)))
            }
            (Truth::Array(a), Truth::Array(b)) => {
                check_lengths(a.len(), b.len())?;
                Ok(Truth::Array(Zip::from(a).and(b).map_collect(|&x, &y| x || y)))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Broadcasting and length checks in `zip_with`.
    // - Real → complex promotion.
    // - Comparison kernels and the complex-ordering rejection.
    // - Floored modulo sign conventions.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify scalar ↔ array broadcasting and the array length check.
    //
    // Given
    // -----
    // - 2.0 * [1, 2, 3]; [1, 2] + [1, 2, 3].
    //
    // Expect
    // ------
    // - [2, 4, 6]; `ShapeMismatch { left: 2, right: 3 }`.
    fn zip_with_broadcasts_and_checks_lengths() {
        let scalar = Magnitude::Real(2.0);
        let arr = Magnitude::RealArray(array![1.0, 2.0, 3.0]);
        let short = Magnitude::RealArray(array![1.0, 2.0]);

        let scaled = Magnitude::zip_with(&scalar, &arr, |a, b| a * b, |a, b| a * b).unwrap();
        let err = Magnitude::zip_with(&short, &arr, |a, b| a + b, |a, b| a + b).unwrap_err();

        assert_eq!(scaled, Magnitude::RealArray(array![2.0, 4.0, 6.0]));
        assert_eq!(err, QuantityError::ShapeMismatch { left: 2, right: 3 });
    }

    #[test]
    // Purpose
    // -------
    // Check that mixing a real array with a complex scalar promotes the
    // result to a complex array.
    //
    // Given
    // -----
    // - [1, 2] + (0 + 1j).
    //
    // Expect
    // ------
    // - [1 + 1j, 2 + 1j] as `ComplexArray`.
    fn zip_with_promotes_to_complex() {
        let arr = Magnitude::RealArray(array![1.0, 2.0]);
        let i = Magnitude::Complex(Complex64::new(0.0, 1.0));

        let sum = Magnitude::zip_with(&arr, &i, |a, b| a + b, |a, b| a + b).unwrap();

        assert_eq!(
            sum,
            Magnitude::ComplexArray(array![Complex64::new(1.0, 1.0), Complex64::new(2.0, 1.0)])
        );
    }

    #[test]
    // Purpose
    // -------
    // Ensure ordering complex values is rejected while equality works.
    //
    // Given
    // -----
    // - lhs = 1 + 1j, rhs = 1 + 1j.
    //
    // Expect
    // ------
    // - `<` fails with `UnsupportedOperation`; `==` is `Scalar(true)`.
    fn compare_rejects_complex_ordering() {
        let c = Magnitude::Complex(Complex64::new(1.0, 1.0));

        let lt = Magnitude::compare(&c, &c, "<", |a, b| a < b, None);
        let eq = Magnitude::compare(&c, &c, "==", |a, b| a == b, Some(|a, b| a == b));

        assert!(matches!(lt, Err(QuantityError::UnsupportedOperation { .. })));
        assert_eq!(eq.unwrap(), Truth::Scalar(true));
    }

    #[test]
    // Purpose
    // -------
    // Verify floored modulo follows the divisor's sign.
    //
    // Given
    // -----
    // - (-1) mod 3, 1 mod (-3), 7 mod 3.
    //
    // Expect
    // ------
    // - 2, -2, 1.
    fn floored_rem_takes_sign_of_divisor() {
        assert_eq!(floored_rem(-1.0, 3.0), 2.0);
        assert_eq!(floored_rem(1.0, -3.0), -2.0);
        assert_eq!(floored_rem(7.0, 3.0), 1.0);
    }

    #[test]
    // Purpose
    // -------
    // Check `Truth::or` and the reductions.
    //
    // Given
    // -----
    // - [true, false] or false; [false, false].
    //
    // Expect
    // ------
    // - [true, false]: `any` true, `all` false; [false, false]: `any` false.
    fn truth_or_and_reductions() {
        let a = Truth::Array(array![true, false]);

        let combined = a.or(&Truth::Scalar(false)).unwrap();

        assert!(combined.any());
        assert!(!combined.all());
        assert!(!Truth::Array(array![false, false]).any());
        assert_eq!(Truth::Scalar(true).as_bool(), Some(true));
    }
}
