//! units::catalog — process-wide registry of named units.
//!
//! Purpose
//! -------
//! Map unit symbols (`"km"`, `"N"`, `"kft"`) to labelled [`Quantity`] values
//! expressed in SI base units. The registry is built on first access and is
//! read-only afterwards, so lookups are safe from any thread.
//!
//! Key behaviors
//! -------------
//! - SI base units `m, s, kg, A, K, cd, mol, rad`, plus `g = 1e-3 kg`.
//! - Derived units (`Hz`, `N`, `Pa`, `J`, `W`, `C`, `V`, `F`, `Ohm`, `S`,
//!   `sr`) and the time helpers `hr`, `mn`.
//! - Decimal prefixes from `T` (1e12) to `f` (1e-15) on every base unit and
//!   on `g`; a prefixed symbol never overrides an existing entry (`kg`).
//! - Imperial/nautical helpers `ft`, `NM`, `yard`, `inch`, `kft`.
//!
//! Conventions
//! -----------
//! - Every entry carries its own symbol as label, so formatting in a
//!   catalog unit prints the symbol.
//! - Micro is registered twice, as `mu` and `micro` (`mus`, `microm`).

use crate::units::{
    dimension::{BaseUnit, Dimension},
    errors::{QuantityError, QuantityResult},
    quantity::Quantity,
};
use std::collections::BTreeMap;
use std::sync::LazyLock;

/// Decimal prefixes and their factors.
const PREFIXES: [(&str, f64); 14] = [
    ("T", 1e12),
    ("G", 1e9),
    ("M", 1e6),
    ("k", 1e3),
    ("h", 1e2),
    ("da", 1e1),
    ("d", 1e-1),
    ("c", 1e-2),
    ("m", 1e-3),
    ("mu", 1e-6),
    ("micro", 1e-6),
    ("n", 1e-9),
    ("p", 1e-12),
    ("f", 1e-15),
];

/// Symbols that accept a decimal prefix.
const PREFIXABLE: [&str; 8] = ["m", "s", "g", "A", "K", "cd", "mol", "rad"];

static REGISTRY: LazyLock<UnitRegistry> = LazyLock::new(UnitRegistry::standard);

/// UnitRegistry — symbol → labelled unit quantity.
#[derive(Debug, Clone, Default)]
pub struct UnitRegistry {
    units: BTreeMap<String, Quantity>,
}

impl UnitRegistry {
    /// The standard catalog described in the module docs.
    pub fn standard() -> Self {
        let mut reg = UnitRegistry::default();

        let [m, s, kg, a, _, _, _, rad] = BaseUnit::ALL.map(Dimension::base);
        for unit in BaseUnit::ALL {
            reg.insert(unit.symbol(), 1.0, Dimension::base(unit));
        }
        reg.insert("g", 1e-3, kg);

        let newton = kg * m / (s * s);
        let joule = newton * m;
        let watt = joule / s;
        let coulomb = a * s;
        let volt = watt / a;
        reg.insert("Hz", 1.0, s.recip());
        reg.insert("N", 1.0, newton);
        reg.insert("Pa", 1.0, newton / (m * m));
        reg.insert("J", 1.0, joule);
        reg.insert("W", 1.0, watt);
        reg.insert("C", 1.0, coulomb);
        reg.insert("V", 1.0, volt);
        reg.insert("F", 1.0, coulomb / volt);
        reg.insert("Ohm", 1.0, volt / a);
        reg.insert("S", 1.0, a / volt);
        reg.insert("sr", 1.0, rad * rad);
        reg.insert("hr", 3600.0, s);
        reg.insert("mn", 60.0, s);

        for base in PREFIXABLE {
            let Some(unit) = reg.get(base).cloned() else { continue };
            let factor = unit.magnitude().as_real().unwrap_or(1.0);
            for (prefix, scale) in PREFIXES {
                let symbol = format!("{prefix}{base}");
                if !reg.units.contains_key(&symbol) {
                    reg.insert(&symbol, scale * factor, unit.dimension());
                }
            }
        }

        let ft = 0.3048;
        reg.insert("ft", ft, m);
        reg.insert("kft", 1000.0 * ft, m);
        reg.insert("NM", 1852.0, m);
        reg.insert("yard", 0.9144, m);
        reg.insert("inch", 2.54 * 1e-2, m);
        reg
    }

    fn insert(&mut self, symbol: &str, factor: f64, dimension: Dimension) {
        self.units.insert(symbol.to_string(), Quantity::new(factor, dimension).with_label(symbol));
    }

    /// The unit registered under `symbol`.
    pub fn get(&self, symbol: &str) -> Option<&Quantity> {
        self.units.get(symbol)
    }

    /// Registered symbols in lexicographic order.
    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.units.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

/// The process-wide catalog.
pub fn registry() -> &'static UnitRegistry {
    &REGISTRY
}

/// Borrow the unit registered under `symbol`.
pub fn lookup(symbol: &str) -> Option<&'static Quantity> {
    REGISTRY.get(symbol)
}

/// A copy of the unit registered under `symbol`.
///
/// # Errors
/// - [`QuantityError::UnknownUnit`] when `symbol` is not registered.
pub fn unit(symbol: &str) -> QuantityResult<Quantity> {
    lookup(symbol).cloned().ok_or_else(|| QuantityError::UnknownUnit { symbol: symbol.to_string() })
}

/// Registered symbols in lexicographic order.
pub fn symbols() -> impl Iterator<Item = &'static str> {
    REGISTRY.symbols()
}
