//! utils — crate-wide plumbing shared by the numeric modules and the bindings.
//!
//! Purpose
//! -------
//! Host the pieces that do not belong to any single domain module: the
//! terminal logger used for debug tracing (feature `obs_slog`) and the
//! conversions from Python objects to Rust operands (feature
//! `python-bindings`).
//!
//! Key behaviors
//! -------------
//! - [`term_logger`] lazily builds one asynchronous terminal logger and hands
//!   out a `'static` reference to it.
//! - [`extract_f64_array`] accepts numpy arrays, pandas-like objects exposing
//!   `to_numpy`, and plain float sequences.
//! - [`extract_operand`] turns a Python value (quantity, number, complex or
//!   array-like) into an [`Operand`].
//!
//! Conventions
//! -----------
//! - Extraction failures surface as Python `TypeError`s; domain failures are
//!   converted from the typed error enums at the call site.

#[cfg(feature = "obs_slog")]
use std::sync::LazyLock;

#[cfg(feature = "python-bindings")]
use ndarray::Array1;

#[cfg(feature = "python-bindings")]
use num_complex::Complex64;

#[cfg(feature = "python-bindings")]
use pyo3::{exceptions::PyTypeError, prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use numpy::{
    IntoPyArray,    // Vec → PyArray
    PyArrayMethods, // .readonly()
    PyReadonlyArray1,
};

#[cfg(feature = "python-bindings")]
use crate::{PyQuantity, units::operand::Operand};

/// Shared terminal logger for debug tracing.
///
/// Built on first use from a `slog_term` full-format drain behind a
/// `slog_async` worker, so logging calls never block numeric loops.
#[cfg(feature = "obs_slog")]
pub fn term_logger() -> &'static slog::Logger {
    static LOGGER: LazyLock<slog::Logger> = LazyLock::new(|| {
        use slog::Drain;

        let decorator = slog_term::TermDecorator::new().build();
        let drain = slog_term::FullFormat::new(decorator).build().fuse();
        let drain = slog_async::Async::new(drain).build().fuse();
        slog::Logger::root(drain, slog::o!("crate" => "rust_quantities"))
    });
    &LOGGER
}

#[cfg(feature = "python-bindings")]
#[inline]
pub fn extract_f64_array<'py>(
    py: Python<'py>, raw_data: &Bound<'py, PyAny>,
) -> PyResult<PyReadonlyArray1<'py, f64>> {
    if let Ok(arr_ro) = raw_data.extract::<PyReadonlyArray1<f64>>() {
        if arr_ro.as_slice().is_ok() {
            return Ok(arr_ro);
        }
    }

    if let Ok(obj) = raw_data.call_method("to_numpy", (false,), None) {
        if let Ok(series_ro) = obj.extract::<PyReadonlyArray1<f64>>() {
            if series_ro.as_slice().is_ok() {
                return Ok(series_ro);
            }
        }
    }

    let vec: Vec<f64> = raw_data.extract().map_err(|_| {
        PyTypeError::new_err("expected a 1-D numpy.ndarray, pandas.Series, or sequence of float64")
    })?;
    Ok(vec.into_pyarray(py).readonly())
}

/// Owned copy of a 1-D float array-like.
#[cfg(feature = "python-bindings")]
pub fn extract_array1<'py>(py: Python<'py>, raw_data: &Bound<'py, PyAny>) -> PyResult<Array1<f64>> {
    Ok(extract_f64_array(py, raw_data)?.as_array().to_owned())
}

/// Convert a Python value into an [`Operand`].
///
/// Accepted, in order: `Quantity` instances, real numbers (including
/// Python ints), complex numbers, complex 1-D arrays, and real 1-D
/// array-likes.
///
/// # Errors
/// - `TypeError` when the value matches none of the accepted kinds.
#[cfg(feature = "python-bindings")]
pub fn extract_operand<'py>(py: Python<'py>, value: &Bound<'py, PyAny>) -> PyResult<Operand> {
    if let Ok(q) = value.downcast::<PyQuantity>() {
        return Ok(Operand::Quantity(q.borrow().inner.clone()));
    }
    if let Ok(v) = value.extract::<f64>() {
        return Ok(Operand::from(v));
    }
    if let Ok(c) = value.extract::<Complex64>() {
        return Ok(Operand::from(c));
    }
    if let Ok(arr) = value.extract::<PyReadonlyArray1<Complex64>>() {
        return Ok(Operand::from(arr.as_array().to_owned()));
    }
    extract_array1(py, value).map(Operand::from).map_err(|_| {
        PyTypeError::new_err(format!(
            "cannot interpret a value of type '{}' as a quantity",
            value.get_type().name().map(|n| n.to_string()).unwrap_or_default()
        ))
    })
}
