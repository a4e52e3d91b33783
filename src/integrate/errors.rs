//! Unified error handling for unit-aware quadrature.
//!
//! This module defines `IntegrateError`, returned by [`integrate_fn`] and by
//! the validated [`QuadOptions`] constructor. Numeric integrators talk
//! `anyhow::Error` at their seam; the wrapper recovers typed errors by
//! downcasting and falls back to the `Anyhow` variant otherwise.
//!
//! [`integrate_fn`]: crate::integrate::integrate_fn
//! [`QuadOptions`]: crate::integrate::QuadOptions

use crate::units::{dimension::Dimension, errors::QuantityError};

#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

/// Unified error type for quadrature.
#[derive(Debug, Clone, PartialEq)]
pub enum IntegrateError {
    // ---- Units ----
    /// The two bounds are expressed in different dimensions.
    DimensionMismatch { left: Dimension, right: Dimension },

    /// The integrand changed its output dimension at `at`.
    InconsistentUnit { at: f64, expected: Dimension, got: Dimension },

    // ---- Inputs ----
    /// A bound or an integrand value is not a real scalar.
    NonScalarValue { what: &'static str },

    // ---- Convergence ----
    /// The integrator stopped before reaching the requested tolerance.
    NotConvergent { message: String },

    // ---- Options ----
    InvalidTolerance { tol: f64, reason: &'static str },
    InvalidMaxDepth { depth: usize, reason: &'static str },
    InvalidMaxEvals { evals: usize, reason: &'static str },

    // ---- Propagated ----
    Quantity(QuantityError),

    // ---- Anyhow catchall ----
    Anyhow(String),
}

pub type IntegrateResult<T> = Result<T, IntegrateError>;

impl std::error::Error for IntegrateError {}

impl From<QuantityError> for IntegrateError {
    fn from(err: QuantityError) -> Self {
        IntegrateError::Quantity(err)
    }
}

impl From<anyhow::Error> for IntegrateError {
    fn from(err: anyhow::Error) -> Self {
        let err = match err.downcast::<IntegrateError>() {
            Ok(typed) => return typed,
            Err(err) => err,
        };
        match err.downcast::<QuantityError>() {
            Ok(typed) => IntegrateError::Quantity(typed),
            Err(err) => IntegrateError::Anyhow(err.to_string()),
        }
    }
}

impl std::fmt::Display for IntegrateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Units ----
            IntegrateError::DimensionMismatch { left, right } => write!(
                f,
                "Integration Error: bounds have different units ({} vs {})",
                left.describe(),
                right.describe()
            ),
            IntegrateError::InconsistentUnit { at, expected, got } => write!(
                f,
                "Integration Error: integrand unit changed at x = {at} ({} instead of {})",
                got.describe(),
                expected.describe()
            ),

            // ---- Inputs ----
            IntegrateError::NonScalarValue { what } => {
                write!(f, "Integration Error: {what} must be a real scalar")
            }

            // ---- Convergence ----
            IntegrateError::NotConvergent { message } => {
                write!(f, "Integration Error: not convergent: {message}")
            }

            // ---- Options ----
            IntegrateError::InvalidTolerance { tol, reason } => {
                write!(f, "Integration Error: invalid tolerance {tol}: {reason}")
            }
            IntegrateError::InvalidMaxDepth { depth, reason } => {
                write!(f, "Integration Error: invalid maximum depth {depth}: {reason}")
            }
            IntegrateError::InvalidMaxEvals { evals, reason } => {
                write!(f, "Integration Error: invalid evaluation budget {evals}: {reason}")
            }

            // ---- Propagated ----
            IntegrateError::Quantity(err) => write!(f, "Integration Error: {err}"),

            // ---- Anyhow catchall ----
            IntegrateError::Anyhow(msg) => write!(f, "Integration Error: {msg}"),
        }
    }
}

#[cfg(feature = "python-bindings")]
impl From<IntegrateError> for PyErr {
    fn from(err: IntegrateError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Recovery of typed errors from `anyhow::Error`.
    // - The string fallback for foreign errors.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Typed errors survive a round trip through `anyhow::Error`.
    //
    // Given
    // -----
    // - `NotConvergent` and `QuantityError::UnknownUnit` wrapped in anyhow.
    //
    // Expect
    // ------
    // - The same `IntegrateError` and `IntegrateError::Quantity(..)`.
    fn from_anyhow_recovers_typed_errors() {
        let nc = IntegrateError::NotConvergent { message: "depth".to_string() };
        let q = QuantityError::UnknownUnit { symbol: "furlong".to_string() };

        let back_nc = IntegrateError::from(anyhow::Error::new(nc.clone()));
        let back_q = IntegrateError::from(anyhow::Error::new(q.clone()));

        assert_eq!(back_nc, nc);
        assert_eq!(back_q, IntegrateError::Quantity(q));
    }

    #[test]
    // Purpose
    // -------
    // Foreign errors fall back to the `Anyhow` variant.
    //
    // Given
    // -----
    // - `anyhow!("integrand exploded")`.
    //
    // Expect
    // ------
    // - `Anyhow("integrand exploded")`.
    fn from_anyhow_falls_back_to_message() {
        let err = IntegrateError::from(anyhow!("integrand exploded"));

        assert_eq!(err, IntegrateError::Anyhow("integrand exploded".to_string()));
    }
}
