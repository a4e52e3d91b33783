//! rust_quantities — unit-checked physical quantities and sampled data arrays.
//!
//! Purpose
//! -------
//! Serve as the crate root for Rust callers and as the PyO3 bridge that exposes
//! the quantity algebra, the resampling `DataArray` and unit-aware integration
//! to Python via the `_rust_quantities` extension module. When the
//! `python-bindings` feature is enabled, this module defines the
//! Python-facing classes and submodules used by the `rust_quantities`
//! package.
//!
//! Key behaviors
//! -------------
//! - Re-export the core Rust modules (`units`, `arrays`, `integrate`) as the
//!   public crate surface.
//! - Define `#[pyclass]` wrappers and the `#[pymodule]` initializer for the
//!   `_rust_quantities` Python extension.
//! - Create and register Python submodules (`units`, `arrays`, `integrate`)
//!   under `rust_quantities` so that dot-notation imports work as expected.
//!
//! Invariants & assumptions
//! ------------------------
//! - All unit bookkeeping and numerics live in the inner Rust modules; this
//!   file performs only FFI glue, argument conversion and error mapping.
//! - Python callables handed to `sample_function` / `integrate` receive
//!   `Quantity` objects and must return quantities or plain numbers; an
//!   exception raised by the callable aborts the operation and is re-raised
//!   unchanged.
//!
//! Conventions
//! -----------
//! - Python-exposed classes live under `_rust_quantities.<submodule>` and are
//!   registered as `rust_quantities.<submodule>` in `sys.modules`.
//! - Plain Python numbers, complex numbers and 1-D array-likes are accepted
//!   wherever a quantity operand is expected and behave as dimensionless
//!   values.
//! - Errors from core Rust code are propagated as rich error types internally
//!   and converted to `ValueError` at the PyO3 boundary; unconvertible
//!   arguments raise `TypeError`.
//!
//! Downstream usage
//! ----------------
//! - Native Rust code should depend directly on [`units`], [`arrays`] and
//!   [`integrate`] and can ignore the items guarded by `python-bindings`.
//!
//! Testing notes
//! -------------
//! - Core behavior is covered by unit tests in the inner modules and by
//!   `tests/integration_data_array_pipeline.rs`.

pub mod arrays;
pub mod integrate;
pub mod units;
pub mod utils;

#[cfg(feature = "python-bindings")]
use std::cell::RefCell;

#[cfg(feature = "python-bindings")]
use numpy::IntoPyArray;

#[cfg(feature = "python-bindings")]
use pyo3::{
    exceptions::PyTypeError,
    prelude::*,
    pyclass::CompareOp,
    types::{PyAny, PyBool, PyTuple},
};

#[cfg(feature = "python-bindings")]
use crate::{
    arrays::{DEFAULT_SAMPLE_COUNT, DataArray},
    integrate::{AdaptiveSimpson, QuadOptions},
    units::{
        DISPLAY_DIGITS, FormatOptions, Magnitude, Operand, Quantity, QuantityError, QuantityResult,
        Truth, catalog, constants,
    },
    utils::extract_operand,
};

/// Quantity — Python-facing wrapper around [`Quantity`].
///
/// Purpose
/// -------
/// Give Python a value-with-unit type whose arithmetic, comparisons and
/// formatting are checked by the Rust quantity algebra.
///
/// Parameters
/// ----------
/// Constructed from Python via `Quantity(value, unit=None)`:
/// - `value`: number, complex, 1-D array-like, or another `Quantity`.
/// - `unit`: `Option<&str>`
///   Catalog symbol (e.g. `"km"`, `"kft"`) the value is expressed in; the
///   stored magnitude is converted to SI.
///
/// Notes
/// -----
/// - Binary operators return `NotImplemented` for operands they cannot
///   interpret, so Python can fall back to the reflected operator of the
///   other type (e.g. `DataArray.__rmul__`).
#[cfg(feature = "python-bindings")]
#[pyclass(name = "Quantity", module = "rust_quantities.units")]
#[derive(Clone)]
pub struct PyQuantity {
    pub(crate) inner: Quantity,
}

#[cfg(feature = "python-bindings")]
impl From<Quantity> for PyQuantity {
    fn from(inner: Quantity) -> Self {
        PyQuantity { inner }
    }
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl PyQuantity {
    #[new]
    #[pyo3(signature = (value, unit = None))]
    fn new<'py>(py: Python<'py>, value: &Bound<'py, PyAny>, unit: Option<&str>) -> PyResult<Self> {
        let q = extract_operand(py, value)?.promote();
        match unit {
            Some(symbol) => Ok(q.mul(catalog::unit(symbol)?)?.into()),
            None => Ok(q.into()),
        }
    }

    /// The catalog unit named `symbol`, as a quantity of magnitude one.
    #[staticmethod]
    #[pyo3(text_signature = "(symbol)")]
    fn unit(symbol: &str) -> PyResult<Self> {
        Ok(catalog::unit(symbol)?.into())
    }

    /// Magnitude in SI units: float, complex or numpy array.
    #[getter]
    fn magnitude(&self, py: Python<'_>) -> PyResult<PyObject> {
        magnitude_to_py(py, self.inner.magnitude())
    }

    /// SI dimension, e.g. `"kg*m/s**2"` (empty when dimensionless).
    #[getter]
    fn dimension(&self) -> String {
        self.inner.dimension().to_string()
    }

    #[getter]
    fn label(&self) -> Option<String> {
        self.inner.label().map(str::to_string)
    }

    fn is_dimensionless(&self) -> bool {
        self.inner.is_dimensionless()
    }

    /// Magnitude expressed in multiples of the catalog unit `symbol`.
    #[pyo3(text_signature = "($self, symbol)")]
    fn value_in(&self, py: Python<'_>, symbol: &str) -> PyResult<PyObject> {
        let value = self.inner.value_in(&catalog::unit(symbol)?)?;
        magnitude_to_py(py, &value)
    }

    /// Render in SI units, or in the catalog unit `unit` when given.
    #[pyo3(signature = (unit = None, digits = None))]
    fn format(&self, unit: Option<&str>, digits: Option<usize>) -> PyResult<String> {
        let opts = FormatOptions::new(digits.unwrap_or(DISPLAY_DIGITS), None)?;
        match unit {
            Some(symbol) => Ok(self.inner.format_in_with(&catalog::unit(symbol)?, &opts)?),
            None => Ok(self.inner.format_with(&opts)),
        }
    }

    fn __repr__(&self) -> String {
        self.inner.format()
    }

    fn __str__(&self) -> String {
        self.inner.format()
    }

    // ---- Arithmetic ----

    fn __add__<'py>(&self, py: Python<'py>, other: &Bound<'py, PyAny>) -> PyResult<PyObject> {
        let Some(rhs) = try_operand(py, other) else { return Ok(py.NotImplemented()) };
        quantity_to_py(py, self.inner.add(rhs))
    }

    fn __radd__<'py>(&self, py: Python<'py>, other: &Bound<'py, PyAny>) -> PyResult<PyObject> {
        let Some(lhs) = try_operand(py, other) else { return Ok(py.NotImplemented()) };
        quantity_to_py(py, lhs.promote().add(&self.inner))
    }

    fn __sub__<'py>(&self, py: Python<'py>, other: &Bound<'py, PyAny>) -> PyResult<PyObject> {
        let Some(rhs) = try_operand(py, other) else { return Ok(py.NotImplemented()) };
        quantity_to_py(py, self.inner.sub(rhs))
    }

    fn __rsub__<'py>(&self, py: Python<'py>, other: &Bound<'py, PyAny>) -> PyResult<PyObject> {
        let Some(lhs) = try_operand(py, other) else { return Ok(py.NotImplemented()) };
        quantity_to_py(py, lhs.promote().sub(&self.inner))
    }

    fn __mul__<'py>(&self, py: Python<'py>, other: &Bound<'py, PyAny>) -> PyResult<PyObject> {
        let Some(rhs) = try_operand(py, other) else { return Ok(py.NotImplemented()) };
        quantity_to_py(py, self.inner.mul(rhs))
    }

    fn __rmul__<'py>(&self, py: Python<'py>, other: &Bound<'py, PyAny>) -> PyResult<PyObject> {
        let Some(lhs) = try_operand(py, other) else { return Ok(py.NotImplemented()) };
        quantity_to_py(py, lhs.promote().mul(&self.inner))
    }

    fn __truediv__<'py>(&self, py: Python<'py>, other: &Bound<'py, PyAny>) -> PyResult<PyObject> {
        let Some(rhs) = try_operand(py, other) else { return Ok(py.NotImplemented()) };
        quantity_to_py(py, self.inner.div(rhs))
    }

    fn __rtruediv__<'py>(&self, py: Python<'py>, other: &Bound<'py, PyAny>) -> PyResult<PyObject> {
        let Some(lhs) = try_operand(py, other) else { return Ok(py.NotImplemented()) };
        quantity_to_py(py, lhs.promote().div(&self.inner))
    }

    fn __mod__<'py>(&self, py: Python<'py>, other: &Bound<'py, PyAny>) -> PyResult<PyObject> {
        let Some(rhs) = try_operand(py, other) else { return Ok(py.NotImplemented()) };
        quantity_to_py(py, self.inner.rem(rhs))
    }

    fn __rmod__<'py>(&self, py: Python<'py>, other: &Bound<'py, PyAny>) -> PyResult<PyObject> {
        let Some(lhs) = try_operand(py, other) else { return Ok(py.NotImplemented()) };
        quantity_to_py(py, lhs.promote().rem(&self.inner))
    }

    fn __pow__<'py>(
        &self, py: Python<'py>, other: &Bound<'py, PyAny>, _modulo: Option<&Bound<'py, PyAny>>,
    ) -> PyResult<PyObject> {
        let Some(exponent) = try_operand(py, other) else { return Ok(py.NotImplemented()) };
        quantity_to_py(py, self.inner.pow(exponent))
    }

    fn __rpow__<'py>(
        &self, py: Python<'py>, other: &Bound<'py, PyAny>, _modulo: Option<&Bound<'py, PyAny>>,
    ) -> PyResult<PyObject> {
        let Some(base) = try_operand(py, other) else { return Ok(py.NotImplemented()) };
        quantity_to_py(py, base.promote().pow(&self.inner))
    }

    fn __neg__(&self) -> Self {
        self.inner.neg().into()
    }

    fn __pos__(&self) -> Self {
        self.clone()
    }

    fn __abs__(&self) -> Self {
        self.inner.abs().into()
    }

    // ---- Comparisons ----

    fn __richcmp__<'py>(
        &self, py: Python<'py>, other: &Bound<'py, PyAny>, op: CompareOp,
    ) -> PyResult<PyObject> {
        let Some(rhs) = try_operand(py, other) else { return Ok(py.NotImplemented()) };
        let truth = match op {
            CompareOp::Eq => self.inner.equals(rhs),
            CompareOp::Ne => self.inner.not_equal(rhs)?,
            CompareOp::Lt => self.inner.less_than(rhs)?,
            CompareOp::Le => self.inner.less_equal(rhs)?,
            CompareOp::Gt => self.inner.greater_than(rhs)?,
            CompareOp::Ge => self.inner.greater_equal(rhs)?,
        };
        Ok(truth_to_py(py, truth))
    }

    // ---- Conversions ----

    fn __float__(&self) -> PyResult<f64> {
        Ok(self.inner.to_scalar()?)
    }

    fn __int__(&self) -> PyResult<i64> {
        Ok(self.inner.to_integer()?)
    }

    fn __complex__(&self) -> PyResult<num_complex::Complex64> {
        Ok(self.inner.to_complex()?)
    }

    fn __len__(&self) -> PyResult<usize> {
        self.inner.len().ok_or_else(|| PyTypeError::new_err("scalar quantities have no length"))
    }

    fn __getitem__(&self, index: usize) -> PyResult<Self> {
        Ok(self.inner.get(index)?.into())
    }
}

/// DataArray — Python-facing wrapper around [`DataArray`].
///
/// Purpose
/// -------
/// Expose sampled functions `Y(X)` with units to Python. Operands sampled on
/// different grids are resampled onto a common grid before combining.
///
/// Parameters
/// ----------
/// Constructed from Python via
/// `DataArray(x, y, x_unit=None, y_unit=None, strict=True)`:
/// - `x`, `y`: array-likes or array-valued `Quantity` objects of equal length.
/// - `x_unit`, `y_unit`: `Option<&str>`
///   Catalog symbols the raw values are expressed in.
/// - `strict`: `bool`
///   When false, accept an X that is not strictly ascending; the ordering
///   is then checked by the operations that need it.
#[cfg(feature = "python-bindings")]
#[pyclass(name = "DataArray", module = "rust_quantities.arrays")]
pub struct PyDataArray {
    inner: DataArray,
}

#[cfg(feature = "python-bindings")]
impl From<DataArray> for PyDataArray {
    fn from(inner: DataArray) -> Self {
        PyDataArray { inner }
    }
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl PyDataArray {
    #[new]
    #[pyo3(signature = (x, y, x_unit = None, y_unit = None, strict = true))]
    fn new<'py>(
        py: Python<'py>, x: &Bound<'py, PyAny>, y: &Bound<'py, PyAny>, x_unit: Option<&str>,
        y_unit: Option<&str>, strict: bool,
    ) -> PyResult<Self> {
        let x = axis_quantity(py, x, x_unit)?;
        let y = axis_quantity(py, y, y_unit)?;
        let inner =
            if strict { DataArray::new(&x, &y)? } else { DataArray::from_unsorted(&x, &y)? };
        Ok(inner.into())
    }

    /// X samples as an array-valued `Quantity`.
    #[getter]
    fn x(&self) -> PyQuantity {
        self.inner.x_quantity().into()
    }

    /// Y samples as an array-valued `Quantity`.
    #[getter]
    fn y(&self) -> PyQuantity {
        self.inner.y_quantity().into()
    }

    #[getter]
    fn x_unit(&self) -> String {
        self.inner.x_unit().to_string()
    }

    #[getter]
    fn y_unit(&self) -> String {
        self.inner.y_unit().to_string()
    }

    /// Linearly interpolated value at `x`.
    fn __call__<'py>(&self, py: Python<'py>, x: &Bound<'py, PyAny>) -> PyResult<PyQuantity> {
        Ok(self.inner.at(extract_operand(py, x)?)?.into())
    }

    /// Trapezoidal integral of Y over `[xmin, xmax]`.
    #[pyo3(text_signature = "($self, xmin, xmax)")]
    fn integ<'py>(
        &self, py: Python<'py>, xmin: &Bound<'py, PyAny>, xmax: &Bound<'py, PyAny>,
    ) -> PyResult<PyQuantity> {
        Ok(self.inner.integ(extract_operand(py, xmin)?, extract_operand(py, xmax)?)?.into())
    }

    /// Pointwise reciprocal `1 / Y`.
    fn invert(&self) -> Self {
        self.inner.invert().into()
    }

    /// Plain arrays for plotting.
    ///
    /// With no units: `(x, y, x_label, y_label)` in SI units. With both
    /// `x_unit` and `y_unit`: `(x, y)` in multiples of those catalog units.
    #[pyo3(signature = (x_unit = None, y_unit = None))]
    fn plot_data<'py>(
        &self, py: Python<'py>, x_unit: Option<&str>, y_unit: Option<&str>,
    ) -> PyResult<Bound<'py, PyTuple>> {
        match (x_unit, y_unit) {
            (Some(xu), Some(yu)) => {
                let (x, y) = self.inner.without_units(&catalog::unit(xu)?, &catalog::unit(yu)?)?;
                (x.into_pyarray(py), y.into_pyarray(py)).into_pyobject(py)
            }
            (None, None) => {
                let plot = self.inner.plot_data();
                let (x, y) = (plot.x.into_pyarray(py), plot.y.into_pyarray(py));
                (x, y, plot.x_label, plot.y_label).into_pyobject(py)
            }
            _ => Err(PyTypeError::new_err("x_unit and y_unit must be given together")),
        }
    }

    fn __len__(&self) -> usize {
        self.inner.len()
    }

    fn __repr__(&self) -> String {
        self.inner.to_string()
    }

    // ---- Arithmetic ----

    fn __add__(&self, other: &Bound<'_, PyAny>) -> PyResult<PyObject> {
        let py = other.py();
        let Ok(rhs) = other.downcast::<PyDataArray>() else { return Ok(py.NotImplemented()) };
        array_to_py(py, self.inner.add(&rhs.borrow().inner))
    }

    fn __sub__(&self, other: &Bound<'_, PyAny>) -> PyResult<PyObject> {
        let py = other.py();
        let Ok(rhs) = other.downcast::<PyDataArray>() else { return Ok(py.NotImplemented()) };
        array_to_py(py, self.inner.sub(&rhs.borrow().inner))
    }

    fn __mul__(&self, other: &Bound<'_, PyAny>) -> PyResult<PyObject> {
        let py = other.py();
        if let Ok(rhs) = other.downcast::<PyDataArray>() {
            return array_to_py(py, self.inner.mul(&rhs.borrow().inner));
        }
        let Some(factor) = try_operand(py, other) else { return Ok(py.NotImplemented()) };
        array_to_py(py, self.inner.scale(factor))
    }

    fn __rmul__(&self, other: &Bound<'_, PyAny>) -> PyResult<PyObject> {
        let py = other.py();
        let Some(factor) = try_operand(py, other) else { return Ok(py.NotImplemented()) };
        array_to_py(py, self.inner.scale(factor))
    }

    fn __truediv__(&self, other: &Bound<'_, PyAny>) -> PyResult<PyObject> {
        let py = other.py();
        if let Ok(rhs) = other.downcast::<PyDataArray>() {
            return array_to_py(py, self.inner.div(&rhs.borrow().inner));
        }
        let Some(divisor) = try_operand(py, other) else { return Ok(py.NotImplemented()) };
        array_to_py(py, self.inner.div_scalar(divisor))
    }

    fn __rtruediv__(&self, other: &Bound<'_, PyAny>) -> PyResult<PyObject> {
        let py = other.py();
        let Some(numerator) = try_operand(py, other) else { return Ok(py.NotImplemented()) };
        array_to_py(py, self.inner.invert().scale(numerator))
    }

    fn __pow__(
        &self, other: &Bound<'_, PyAny>, _modulo: Option<&Bound<'_, PyAny>>,
    ) -> PyResult<PyObject> {
        let py = other.py();
        let Some(exponent) = try_operand(py, other) else { return Ok(py.NotImplemented()) };
        array_to_py(py, self.inner.powf(exponent))
    }

    fn __neg__(&self) -> Self {
        self.inner.neg().into()
    }

    fn __abs__(&self) -> Self {
        self.inner.abs().into()
    }

    fn __richcmp__(&self, other: &Bound<'_, PyAny>, op: CompareOp) -> PyResult<PyObject> {
        let py = other.py();
        let Ok(rhs) = other.downcast::<PyDataArray>() else { return Ok(py.NotImplemented()) };
        let equal = self.inner == rhs.borrow().inner;
        match op {
            CompareOp::Eq => Ok(PyBool::new(py, equal).to_owned().into_any().unbind()),
            CompareOp::Ne => Ok(PyBool::new(py, !equal).to_owned().into_any().unbind()),
            _ => Ok(py.NotImplemented()),
        }
    }
}

/// sample_function(f, xmin, xmax, n=50)
///
/// Sample the Python callable `f` at `n` evenly spaced points of
/// `[xmin, xmax]` and return the samples as a `DataArray`.
///
/// Errors
/// ------
/// - Exceptions raised by `f` are re-raised unchanged.
/// - `ValueError` for invalid bounds, counts or inconsistent output units.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(name = "sample_function", signature = (f, xmin, xmax, n = DEFAULT_SAMPLE_COUNT))]
fn py_sample_function<'py>(
    py: Python<'py>, f: &Bound<'py, PyAny>, xmin: &Bound<'py, PyAny>, xmax: &Bound<'py, PyAny>,
    n: usize,
) -> PyResult<PyDataArray> {
    let (lo, hi) = (extract_operand(py, xmin)?, extract_operand(py, xmax)?);
    let failure = RefCell::new(None);
    let sampled = arrays::sample_function(|x| call_quantity_fn(py, f, x, &failure), lo, hi, n);
    if let Some(err) = failure.into_inner() {
        return Err(err);
    }
    Ok(sampled?.into())
}

/// integrate(f, a, b, abs_tol=None, rel_tol=None, max_depth=None, max_evals=None)
///
/// Definite integral of the Python callable `f` from `a` to `b` by adaptive
/// Simpson quadrature, returned as a `Quantity` of unit `unit(a) * unit(f)`.
///
/// Errors
/// ------
/// - Exceptions raised by `f` are re-raised unchanged.
/// - `ValueError` for mismatched bounds, unit changes of `f`, invalid
///   options or non-convergence.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(
    name = "integrate",
    signature = (f, a, b, abs_tol = None, rel_tol = None, max_depth = None, max_evals = None)
)]
fn py_integrate<'py>(
    py: Python<'py>, f: &Bound<'py, PyAny>, a: &Bound<'py, PyAny>, b: &Bound<'py, PyAny>,
    abs_tol: Option<f64>, rel_tol: Option<f64>, max_depth: Option<usize>, max_evals: Option<usize>,
) -> PyResult<PyQuantity> {
    let quad = AdaptiveSimpson::new(QuadOptions::new(abs_tol, rel_tol, max_depth, max_evals)?);
    let (lo, hi) = (extract_operand(py, a)?, extract_operand(py, b)?);
    let failure = RefCell::new(None);
    let integral = integrate::integrate_fn(|x| call_quantity_fn(py, f, x, &failure), lo, hi, &quad);
    if let Some(err) = failure.into_inner() {
        return Err(err);
    }
    Ok(integral?.into())
}

/// Registered unit symbols, sorted.
#[cfg(feature = "python-bindings")]
#[pyfunction]
fn symbols() -> Vec<String> {
    catalog::symbols().map(str::to_string).collect()
}

/// Energy `h c / λ` of a photon of wavelength `wavelength`.
#[cfg(feature = "python-bindings")]
#[pyfunction]
fn photon_energy(wavelength: PyRef<'_, PyQuantity>) -> PyResult<PyQuantity> {
    Ok(constants::photon_energy(&wavelength.inner)?.into())
}

// ---- Conversion helpers ----

#[cfg(feature = "python-bindings")]
fn try_operand<'py>(py: Python<'py>, value: &Bound<'py, PyAny>) -> Option<Operand> {
    extract_operand(py, value).ok()
}

#[cfg(feature = "python-bindings")]
fn axis_quantity<'py>(
    py: Python<'py>, raw: &Bound<'py, PyAny>, unit: Option<&str>,
) -> PyResult<Quantity> {
    let q = extract_operand(py, raw)?.promote();
    match unit {
        Some(symbol) => Ok(q.mul(catalog::unit(symbol)?)?),
        None => Ok(q),
    }
}

#[cfg(feature = "python-bindings")]
fn quantity_to_py(py: Python<'_>, result: QuantityResult<Quantity>) -> PyResult<PyObject> {
    Ok(Bound::new(py, PyQuantity::from(result?))?.into_any().unbind())
}

#[cfg(feature = "python-bindings")]
fn array_to_py(py: Python<'_>, result: arrays::ArrayResult<DataArray>) -> PyResult<PyObject> {
    Ok(Bound::new(py, PyDataArray::from(result?))?.into_any().unbind())
}

#[cfg(feature = "python-bindings")]
fn magnitude_to_py(py: Python<'_>, magnitude: &Magnitude) -> PyResult<PyObject> {
    let obj = match magnitude {
        Magnitude::Real(v) => (*v).into_pyobject(py)?.into_any().unbind(),
        Magnitude::Complex(c) => (*c).into_pyobject(py)?.into_any().unbind(),
        Magnitude::RealArray(a) => a.clone().into_pyarray(py).into_any().unbind(),
        Magnitude::ComplexArray(a) => a.clone().into_pyarray(py).into_any().unbind(),
    };
    Ok(obj)
}

#[cfg(feature = "python-bindings")]
fn truth_to_py(py: Python<'_>, truth: Truth) -> PyObject {
    match truth {
        Truth::Scalar(b) => PyBool::new(py, b).to_owned().into_any().unbind(),
        Truth::Array(a) => a.into_pyarray(py).into_any().unbind(),
    }
}

/// Call a Python function of one quantity from inside a Rust sampling loop.
///
/// A Python exception is parked in `failure` and replaced by a
/// `QuantityError` so the Rust loop stops; the caller re-raises the parked
/// exception.
#[cfg(feature = "python-bindings")]
fn call_quantity_fn<'py>(
    py: Python<'py>, f: &Bound<'py, PyAny>, x: &Quantity, failure: &RefCell<Option<PyErr>>,
) -> QuantityResult<Quantity> {
    let out = Bound::new(py, PyQuantity::from(x.clone()))
        .and_then(|arg| f.call1((arg,)))
        .and_then(|out| extract_operand(py, &out));
    match out {
        Ok(value) => Ok(value.promote()),
        Err(err) => {
            *failure.borrow_mut() = Some(err);
            Err(QuantityError::UnsupportedOperation {
                op: "call",
                reason: "the Python callable raised an exception.",
            })
        }
    }
}

/// _rust_quantities — PyO3 module initializer for the Python extension.
///
/// Purpose
/// -------
/// Define the `_rust_quantities` Python module and register its submodules
/// used by the public `rust_quantities` package.
///
/// Key behaviors
/// -------------
/// - Create `units`, `arrays` and `integrate` submodules and attach them to
///   the parent module.
/// - Register the submodules in `sys.modules` so they are importable via
///   dotted paths from Python.
///
/// Errors
/// ------
/// - `PyErr`
///   If creating submodules or manipulating `sys.modules` fails.
#[cfg(feature = "python-bindings")]
#[pymodule]
fn _rust_quantities<'py>(_py: Python<'py>, m: &Bound<'py, PyModule>) -> PyResult<()> {
    let units_mod = PyModule::new(_py, "units")?;
    let arrays_mod = PyModule::new(_py, "arrays")?;
    let integrate_mod = PyModule::new(_py, "integrate")?;
    units_module(_py, m, &units_mod)?;
    arrays_module(_py, m, &arrays_mod)?;
    integrate_module(_py, m, &integrate_mod)?;

    // Manually add submodules into sys.modules to allow for dot notation.
    let modules = _py.import("sys")?.getattr("modules")?;
    modules.set_item("rust_quantities.units", units_mod)?;
    modules.set_item("rust_quantities.arrays", arrays_mod)?;
    modules.set_item("rust_quantities.integrate", integrate_mod)?;
    Ok(())
}

#[cfg(feature = "python-bindings")]
fn units_module<'py>(
    _py: Python, parent: &Bound<'py, PyModule>, m: &Bound<'py, PyModule>,
) -> PyResult<()> {
    m.add_class::<PyQuantity>()?;
    m.add_function(wrap_pyfunction!(symbols, m)?)?;
    m.add_function(wrap_pyfunction!(photon_energy, m)?)?;
    m.add("earth_mass", PyQuantity::from(constants::earth_mass()))?;
    m.add("earth_radius", PyQuantity::from(constants::earth_radius()))?;
    m.add("speed_of_light", PyQuantity::from(constants::speed_of_light()))?;
    m.add("gravitational_constant", PyQuantity::from(constants::gravitational_constant()))?;
    m.add("elementary_charge", PyQuantity::from(constants::elementary_charge()))?;
    m.add("planck", PyQuantity::from(constants::planck()))?;
    m.add("boltzmann", PyQuantity::from(constants::boltzmann()))?;
    parent.add_submodule(m)?;
    Ok(())
}

#[cfg(feature = "python-bindings")]
fn arrays_module<'py>(
    _py: Python, parent: &Bound<'py, PyModule>, m: &Bound<'py, PyModule>,
) -> PyResult<()> {
    m.add_class::<PyDataArray>()?;
    m.add_function(wrap_pyfunction!(py_sample_function, m)?)?;
    parent.add_submodule(m)?;
    Ok(())
}

#[cfg(feature = "python-bindings")]
fn integrate_module<'py>(
    _py: Python, parent: &Bound<'py, PyModule>, m: &Bound<'py, PyModule>,
) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(py_integrate, m)?)?;
    parent.add_submodule(m)?;
    Ok(())
}
