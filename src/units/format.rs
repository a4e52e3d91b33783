//! units::format — display options and number rendering for quantities.
//!
//! Purpose
//! -------
//! Turn magnitudes into short, readable strings. Scalars switch between
//! fixed-point and scientific notation depending on their magnitude; arrays
//! are printed with a fixed number of decimals.
//!
//! Key behaviors
//! -------------
//! - [`FormatOptions`] bundles the display precision, the scientific-notation
//!   threshold and the unit prefix/suffix, with a validated constructor.
//! - [`display_number`] renders one real number; [`display_magnitude`]
//!   renders any payload kind.
//!
//! Conventions
//! -----------
//! - Fixed point is used when `10^-t <= |v| < 10^t` (`t` = exponent
//!   threshold), scientific notation otherwise, both with `display_digits`
//!   decimals.
//! - Scientific exponents carry an explicit sign and at least two digits
//!   (`6.096E+03`, `1.000E-05`).
//! - Complex scalars print as `(<re> + <im>j)`.

use crate::units::{
    errors::{QuantityError, QuantityResult},
    magnitude::Magnitude,
};
use num_complex::Complex64;

/// Default number of decimals shown for a quantity.
pub const DISPLAY_DIGITS: usize = 3;

/// Separator between a number and its unit expression.
pub const UNIT_PREFIX: &str = "  ";

/// Marker appended after the unit expression of a quantity.
pub const UNIT_SUFFIX: &str = " [PHYS]";

/// Largest precision accepted by [`FormatOptions::new`].
const MAX_DISPLAY_DIGITS: usize = 17;

/// `FormatOptions` — how quantities are turned into strings.
///
/// Fields
/// ------
/// - `display_digits`: decimals shown in both notations.
/// - `exp_threshold`: decimal exponent beyond which scientific notation is
///   used (defaults to `display_digits`).
/// - `unit_prefix` / `unit_suffix`: text around the unit expression.
#[derive(Debug, Clone, PartialEq)]
pub struct FormatOptions {
    pub display_digits: usize,
    pub exp_threshold: usize,
    pub unit_prefix: String,
    pub unit_suffix: String,
}

impl FormatOptions {
    /// Construct validated display options.
    ///
    /// # Rules
    /// - `display_digits` must be at most 17 (the useful precision of `f64`).
    /// - `exp_threshold` defaults to `display_digits` and must be at most 300.
    ///
    /// # Errors
    /// - [`QuantityError::InvalidFormatOption`] when either bound is violated.
    pub fn new(display_digits: usize, exp_threshold: Option<usize>) -> QuantityResult<Self> {
        if display_digits > MAX_DISPLAY_DIGITS {
            return Err(QuantityError::InvalidFormatOption {
                value: display_digits,
                reason: "display digits must be at most 17.",
            });
        }
        let exp_threshold = exp_threshold.unwrap_or(display_digits);
        if exp_threshold > 300 {
            return Err(QuantityError::InvalidFormatOption {
                value: exp_threshold,
                reason: "exponent threshold must be at most 300.",
            });
        }
        Ok(Self {
            display_digits,
            exp_threshold,
            unit_prefix: UNIT_PREFIX.to_string(),
            unit_suffix: UNIT_SUFFIX.to_string(),
        })
    }
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            display_digits: DISPLAY_DIGITS,
            exp_threshold: DISPLAY_DIGITS,
            unit_prefix: UNIT_PREFIX.to_string(),
            unit_suffix: UNIT_SUFFIX.to_string(),
        }
    }
}

/// Render a real number with the fixed/scientific switch.
pub fn display_number(value: f64, opts: &FormatOptions) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf".to_string() } else { "-inf".to_string() };
    }

    let limit = 10f64.powi(opts.exp_threshold as i32);
    let magnitude = value.abs();
    if magnitude >= limit || magnitude < 1.0 / limit {
        scientific(value, opts.display_digits)
    } else {
        format!("{value:.prec$}", prec = opts.display_digits)
    }
}

/// Render a complex number as `(<re> + <im>j)`.
pub fn display_complex(value: Complex64, opts: &FormatOptions) -> String {
    format!("({} + {}j)", display_number(value.re, opts), display_number(value.im, opts))
}

/// Render any payload: scalars through [`display_number`] /
/// [`display_complex`], arrays as `[v0 v1 ...]` with fixed decimals.
pub fn display_magnitude(magnitude: &Magnitude, opts: &FormatOptions) -> String {
    let prec = opts.display_digits;
    match magnitude {
        Magnitude::Real(v) => display_number(*v, opts),
        Magnitude::Complex(c) => display_complex(*c, opts),
        Magnitude::RealArray(a) => {
            let items: Vec<String> = a.iter().map(|v| format!("{v:.prec$}")).collect();
            format!("[{}]", items.join(" "))
        }
        Magnitude::ComplexArray(a) => {
            let items: Vec<String> =
                a.iter().map(|c| format!("{:.prec$}{:+.prec$}j", c.re, c.im)).collect();
            format!("[{}]", items.join(" "))
        }
    }
}

/// `d.dddE±XX` with `digits` decimals in the mantissa.
fn scientific(value: f64, digits: usize) -> String {
    let raw = format!("{value:.digits$E}");
    match raw.split_once('E') {
        Some((mantissa, exp)) => {
            let exp: i32 = exp.parse().unwrap_or(0);
            let sign = if exp < 0 { '-' } else { '+' };
            format!("{mantissa}E{sign}{:02}", exp.abs())
        }
        None => raw,
    }
}
