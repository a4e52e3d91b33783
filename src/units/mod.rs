//! units — dimensions, quantities and the unit catalog.
//!
//! Purpose
//! -------
//! Provide unit-checked physical-quantity arithmetic: numbers (real or
//! complex, scalar or 1-D array) tagged with an exponent vector over the
//! eight base units, combined under the usual dimensional rules. This is the
//! foundation the `arrays` and `integrate` layers build on.
//!
//! Key behaviors
//! -------------
//! - [`dimension`]: the [`Dimension`] exponent vector, its algebra and its
//!   `kg*m/s**2`-style rendering.
//! - [`magnitude`]: the [`Magnitude`] payload union with broadcasting kernels
//!   and the [`Truth`] comparison outcome.
//! - [`operand`]: [`Operand`], the "bare number or quantity" argument type,
//!   and its promotion rule.
//! - [`quantity`]: [`Quantity`] with arithmetic, comparisons, conversions and
//!   formatting.
//! - [`catalog`] and [`constants`]: named units (`km`, `N`, `kft`) and
//!   physical constants as ready-made quantities.
//! - [`format`]: [`FormatOptions`] and number rendering.
//!
//! Invariants & assumptions
//! ------------------------
//! - Dimensions compare by exact equality of their `f64` exponents; every
//!   exponent produced by catalog units and integral powers is exact.
//! - Quantities store their payload in SI units of their dimension; labels
//!   are for display only.
//! - All values are immutable; the catalog is built once and never mutated.
//!
//! Conventions
//! -----------
//! - Fallible operations are named methods returning [`QuantityResult`];
//!   only infallible scalar scaling (`f64 * &q`, `&q * f64`, `&q / f64`,
//!   `-&q`) is exposed through `std::ops`.
//! - Arithmetic never unwraps dimensionless results implicitly; callers use
//!   [`Quantity::unwrap_dimensionless`] or `to_scalar`.
//!
//! Downstream usage
//! ----------------
//! - Build quantities from the catalog, then combine them:
//!
//!   ```
//!   use rust_quantities::units::catalog;
//!
//!   let altitude = 20.0 * &catalog::unit("kft").unwrap();
//!   assert_eq!(altitude.format(), "6.096E+03  m [PHYS]");
//!   assert_eq!(altitude.format_as("km").unwrap(), "6.096 km");
//!   assert!(altitude.add(catalog::unit("s").unwrap()).is_err());
//!   ```
//!
//! Testing notes
//! -------------
//! - Each submodule carries its own unit tests; the integration test in
//!   `tests/` exercises the catalog together with `DataArray`.

pub mod catalog;
pub mod constants;
pub mod dimension;
pub mod errors;
pub mod format;
pub mod magnitude;
pub mod operand;
pub mod quantity;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::dimension::{BaseUnit, Dimension, N_BASE_UNITS};
pub use self::errors::{QuantityError, QuantityResult};
pub use self::format::{DISPLAY_DIGITS, FormatOptions};
pub use self::magnitude::{Magnitude, Truth};
pub use self::operand::Operand;
pub use self::quantity::Quantity;

pub mod prelude {
    pub use super::{
        BaseUnit, Dimension, FormatOptions, Magnitude, Operand, Quantity, QuantityError,
        QuantityResult, Truth, catalog,
    };
}
