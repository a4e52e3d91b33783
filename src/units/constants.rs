//! units::constants — physical constants as SI quantities.
//!
//! Values follow CODATA 2018 (exact SI definitions for `c`, `q`, `h`,
//! `k_B`) and the IUGG mean Earth radius.

use crate::units::{
    dimension::{BaseUnit, Dimension},
    errors::{QuantityError, QuantityResult},
    quantity::Quantity,
};

fn dim(powers: &[(BaseUnit, f64)]) -> Dimension {
    powers
        .iter()
        .fold(Dimension::dimensionless(), |acc, &(unit, p)| {
            let mut exponents = *acc.exponents();
            exponents[unit.index()] += p;
            Dimension::from_exponents(exponents)
        })
}

fn joule() -> Dimension {
    dim(&[(BaseUnit::Kilogram, 1.0), (BaseUnit::Metre, 2.0), (BaseUnit::Second, -2.0)])
}

/// Mass of the Earth, `5.97219e24 kg`.
pub fn earth_mass() -> Quantity {
    Quantity::new(5.97219e24, Dimension::base(BaseUnit::Kilogram))
}

/// Mean radius of the Earth, `6371 km`.
pub fn earth_radius() -> Quantity {
    Quantity::new(6.371e6, Dimension::base(BaseUnit::Metre))
}

/// Speed of light in vacuum, `299792458 m/s`.
pub fn speed_of_light() -> Quantity {
    Quantity::new(299_792_458.0, dim(&[(BaseUnit::Metre, 1.0), (BaseUnit::Second, -1.0)]))
}

/// Newtonian constant of gravitation, `6.67430e-11 m**3/(kg*s**2)`.
pub fn gravitational_constant() -> Quantity {
    Quantity::new(
        6.674_30e-11,
        dim(&[(BaseUnit::Metre, 3.0), (BaseUnit::Kilogram, -1.0), (BaseUnit::Second, -2.0)]),
    )
}

/// Elementary charge, `1.602176634e-19 C`.
pub fn elementary_charge() -> Quantity {
    Quantity::new(1.602_176_634e-19, dim(&[(BaseUnit::Ampere, 1.0), (BaseUnit::Second, 1.0)]))
}

/// Planck constant, `6.62607015e-34 J*s`.
pub fn planck() -> Quantity {
    Quantity::new(6.626_070_15e-34, joule() * Dimension::base(BaseUnit::Second))
}

/// Boltzmann constant, `1.380649e-23 J/K`.
pub fn boltzmann() -> Quantity {
    Quantity::new(1.380_649e-23, joule() / Dimension::base(BaseUnit::Kelvin))
}

/// Energy of a photon of the given wavelength, `h * c / λ`.
///
/// # Errors
/// - [`QuantityError::DimensionMismatch`] unless `wavelength` is a length.
pub fn photon_energy(wavelength: &Quantity) -> QuantityResult<Quantity> {
    let length = Dimension::base(BaseUnit::Metre);
    if wavelength.dimension() != length {
        return Err(QuantityError::DimensionMismatch {
            left: wavelength.dimension(),
            right: length,
        });
    }
    planck().mul(speed_of_light())?.div(wavelength)
}
