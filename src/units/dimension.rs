//! units::dimension — exponent vectors over the SI base units.
//!
//! Purpose
//! -------
//! Represent the physical "shape" of a quantity (e.g. `kg*m/s**2`)
//! independently of its numeric value. A [`Dimension`] is an immutable vector
//! holding one real exponent per [`BaseUnit`].
//!
//! Key behaviors
//! -------------
//! - Build the dimensionless identity or a single base unit.
//! - Combine dimensions with `*` / `/` (exponents add / subtract); both are
//!   total operations.
//! - Raise to a real power with [`Dimension::powf`] (exponents scale;
//!   fractional exponents are allowed).
//! - Render as a product-of-powers expression through `Display`.
//!
//! Invariants & assumptions
//! ------------------------
//! - Exactly [`N_BASE_UNITS`] exponents, default 0.
//! - Equality is exact over the exponent vector; no tolerance is applied, so
//!   `m**0.5 * m**0.5 == m` holds but a rounded exponent such as `1/3 * 3`
//!   may not.
//!
//! Conventions
//! -----------
//! - Storage order follows [`BaseUnit::ALL`]: length, time, mass, current,
//!   temperature, luminous intensity, amount of substance, plane angle.
//! - Display order is the ASCII order of the base-unit symbols
//!   (`A, K, cd, kg, m, mol, rad, s`), numerator first.

use crate::units::errors::{QuantityError, QuantityResult};
use std::ops::{Div, Mul};

/// Number of base units tracked by a [`Dimension`].
pub const N_BASE_UNITS: usize = 8;

/// Base units of the dimension vector, in storage order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BaseUnit {
    /// Length (metre).
    Metre,
    /// Time (second).
    Second,
    /// Mass (kilogram).
    Kilogram,
    /// Electric current (ampere).
    Ampere,
    /// Thermodynamic temperature (kelvin).
    Kelvin,
    /// Luminous intensity (candela).
    Candela,
    /// Amount of substance (mole).
    Mole,
    /// Plane angle (radian).
    Radian,
}

impl BaseUnit {
    /// All base units in storage order.
    pub const ALL: [BaseUnit; N_BASE_UNITS] = [
        BaseUnit::Metre,
        BaseUnit::Second,
        BaseUnit::Kilogram,
        BaseUnit::Ampere,
        BaseUnit::Kelvin,
        BaseUnit::Candela,
        BaseUnit::Mole,
        BaseUnit::Radian,
    ];

    /// SI symbol used in unit expressions.
    pub fn symbol(self) -> &'static str {
        match self {
            BaseUnit::Metre => "m",
            BaseUnit::Second => "s",
            BaseUnit::Kilogram => "kg",
            BaseUnit::Ampere => "A",
            BaseUnit::Kelvin => "K",
            BaseUnit::Candela => "cd",
            BaseUnit::Mole => "mol",
            BaseUnit::Radian => "rad",
        }
    }

    /// Position of this unit in the exponent vector.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Inverse of [`BaseUnit::symbol`].
    pub fn from_symbol(symbol: &str) -> Option<BaseUnit> {
        BaseUnit::ALL.into_iter().find(|unit| unit.symbol() == symbol)
    }
}

/// `Dimension` — exponent vector over the base units.
///
/// Purpose
/// -------
/// Carry the unit of a quantity without its value. Dimensions are plain
/// `Copy` values; every operation returns a new one.
///
/// Fields
/// ------
/// - `exponents`: `[f64; N_BASE_UNITS]`
///   One exponent per [`BaseUnit`], in [`BaseUnit::ALL`] order.
///
/// Invariants
/// ----------
/// - Exponents are finite. `powf` rejects non-finite powers, and `*` / `/`
///   of finite exponents stay finite.
///
/// Examples
/// --------
/// ```rust
/// # use rust_quantities::units::dimension::{BaseUnit, Dimension};
/// let m = Dimension::base(BaseUnit::Metre);
/// let s = Dimension::base(BaseUnit::Second);
/// let kg = Dimension::base(BaseUnit::Kilogram);
/// let energy = kg * m * m / (s * s);
/// assert_eq!(energy.to_string(), "kg*m**2/s**2");
/// assert_eq!(energy / energy, Dimension::dimensionless());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Dimension {
    exponents: [f64; N_BASE_UNITS],
}

impl Dimension {
    /// The dimensionless identity (all exponents zero).
    pub const fn dimensionless() -> Self {
        Dimension { exponents: [0.0; N_BASE_UNITS] }
    }

    /// A single base unit raised to the first power.
    pub fn base(unit: BaseUnit) -> Self {
        let mut exponents = [0.0; N_BASE_UNITS];
        exponents[unit.index()] = 1.0;
        Dimension { exponents }
    }

    /// Build a dimension from an explicit exponent vector.
    pub const fn from_exponents(exponents: [f64; N_BASE_UNITS]) -> Self {
        Dimension { exponents }
    }

    /// Exponent of one base unit.
    pub fn exponent(&self, unit: BaseUnit) -> f64 {
        self.exponents[unit.index()]
    }

    /// Full exponent vector in storage order.
    pub fn exponents(&self) -> &[f64; N_BASE_UNITS] {
        &self.exponents
    }

    /// `true` when every exponent is zero.
    pub fn is_dimensionless(&self) -> bool {
        self.exponents.iter().all(|&e| e == 0.0)
    }

    /// Reciprocal dimension (every exponent negated).
    pub fn recip(&self) -> Self {
        Dimension::dimensionless() / *self
    }

    /// Raise the dimension to a real power.
    ///
    /// Parameters
    /// ----------
    /// - `power`: `f64`
    ///   Scale factor applied to every exponent. Fractional values are
    ///   allowed (`m**0.5`).
    ///
    /// Errors
    /// ------
    /// - `QuantityError::InvalidExponent`
    ///   Returned when `power` is NaN or infinite.
    pub fn powf(&self, power: f64) -> QuantityResult<Self> {
        if !power.is_finite() {
            return Err(QuantityError::InvalidExponent {
                reason: "exponent must be finite.",
            });
        }
        let mut exponents = self.exponents;
        for e in exponents.iter_mut() {
            *e *= power;
        }
        Ok(Dimension { exponents })
    }

    /// Like `Display`, but spells out the dimensionless case.
    pub fn describe(&self) -> String {
        if self.is_dimensionless() { "dimensionless".to_string() } else { self.to_string() }
    }
}

impl Mul for Dimension {
    type Output = Dimension;

    fn mul(self, rhs: Dimension) -> Dimension {
        let mut exponents = self.exponents;
        for (e, r) in exponents.iter_mut().zip(rhs.exponents) {
            *e += r;
        }
        Dimension { exponents }
    }
}

impl Div for Dimension {
    type Output = Dimension;

    fn div(self, rhs: Dimension) -> Dimension {
        let mut exponents = self.exponents;
        for (e, r) in exponents.iter_mut().zip(rhs.exponents) {
            *e -= r;
        }
        Dimension { exponents }
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_dimensionless() {
            return Ok(());
        }

        let mut terms: Vec<(&'static str, f64)> = BaseUnit::ALL
            .iter()
            .map(|&unit| (unit.symbol(), self.exponent(unit)))
            .filter(|&(_, e)| e != 0.0)
            .collect();
        terms.sort_by(|a, b| a.0.cmp(b.0));

        let numerator: Vec<String> =
            terms.iter().filter(|(_, e)| *e > 0.0).map(|&(sym, e)| render_power(sym, e)).collect();
        let denominator: Vec<String> =
            terms.iter().filter(|(_, e)| *e < 0.0).map(|&(sym, e)| render_power(sym, -e)).collect();

        let numerator = if numerator.is_empty() { "1".to_string() } else { numerator.join("*") };
        match denominator.len() {
            0 => write!(f, "{numerator}"),
            1 => write!(f, "{numerator}/{}", denominator[0]),
            _ => write!(f, "{numerator}/({})", denominator.join("*")),
        }
    }
}

/// Render `symbol**exponent`, eliding a unit exponent and printing integral
/// exponents without a decimal point.
fn render_power(symbol: &str, exponent: f64) -> String {
    if exponent == 1.0 {
        symbol.to_string()
    } else if exponent.fract() == 0.0 && exponent.abs() < i64::MAX as f64 {
        format!("{symbol}**{}", exponent as i64)
    } else {
        format!("{symbol}**{exponent}")
    }
}
