//! arrays — sampled functions with units: resampling, evaluation, integration.
//!
//! Purpose
//! -------
//! Provide [`DataArray`], a 1-D sampled function `Y(X)` whose axes each carry
//! a physical dimension, together with the numeric kernels it relies on.
//! Arrays sampled on different grids can be combined directly: both operands
//! are interpolated onto a common grid before the operator is applied.
//!
//! Key behaviors
//! -------------
//! - [`data_array`]: the container, its constructors and arithmetic.
//! - [`interp`]: clamped linear interpolation and the common-grid rule.
//! - [`integ`]: trapezoidal definite integrals over partial intervals.
//! - [`sampling`]: [`sample_function`], building arrays from unit-aware
//!   functions.
//! - [`validation`]: shared axis and operand checks.
//!
//! Invariants & assumptions
//! ------------------------
//! - X and Y are real, equal-length, with at least two samples; values are
//!   stored in SI units of their axis dimension.
//! - Order-sensitive operations require a strictly ascending X and report
//!   [`ArrayError::UnsortedArray`] otherwise.
//!
//! Conventions
//! -----------
//! - Unit rules mirror quantity arithmetic: `add`/`sub` need equal Y units,
//!   `mul`/`div` combine them; every binary operation needs equal X units.
//! - Only linear interpolation is performed; no extrapolation beyond
//!   clamping to the end values during resampling.
//!
//! Testing notes
//! -------------
//! - Unit tests live next to each submodule; the end-to-end scenario
//!   (construction, resampling, integration, sampling, display) lives in
//!   `tests/integration_data_array_pipeline.rs`.

pub mod data_array;
pub mod errors;
pub mod integ;
pub mod interp;
pub mod sampling;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::data_array::{DataArray, PlotData};
pub use self::errors::{ArrayError, ArrayResult};
pub use self::sampling::{DEFAULT_SAMPLE_COUNT, sample_function};

pub mod prelude {
    pub use super::{
        ArrayError, ArrayResult, DEFAULT_SAMPLE_COUNT, DataArray, PlotData, sample_function,
    };
}
