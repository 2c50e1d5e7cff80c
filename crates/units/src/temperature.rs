use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Sub};

/// Boltzmann constant in erg/K
pub const BOLTZMANN_ERG_PER_K: f64 = 1.38e-16;

/// Kelvin per keV (k_B × 1 K = 8.617e-8 keV)
pub const KELVIN_PER_KEV: f64 = 1.160_45e7;

/// A physical temperature quantity using f64 precision.
///
/// The `Temperature` struct represents temperature with Kelvin as the base unit.
/// Post-shock plasma in young remnants sits at 10⁷–10⁹ K, so X-ray
/// astronomers usually quote it as an energy in keV; both views are provided.
///
/// # Examples
///
/// ```rust
/// use units::Temperature;
///
/// let plasma = Temperature::from_kelvin(1.0e8);
/// let kev = plasma.to_kev(); // ~8.6 keV
///
/// assert!(kev > 8.0 && kev < 9.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Temperature(f64); // Base unit: Kelvin

impl Temperature {
    pub fn zero() -> Self {
        Self(0.0)
    }

    /// Creates a new `Temperature` from a value in Kelvin.
    pub fn from_kelvin(value: f64) -> Self {
        Self(value)
    }

    /// Creates a new `Temperature` from a thermal energy k_B·T in keV.
    pub fn from_kev(value: f64) -> Self {
        Self(value * KELVIN_PER_KEV)
    }

    /// Creates a temperature from a thermal energy k_B·T in erg.
    pub fn from_thermal_energy_erg(value: f64) -> Self {
        Self(value / BOLTZMANN_ERG_PER_K)
    }

    /// Returns the temperature in Kelvin.
    pub fn to_kelvin(&self) -> f64 {
        self.0
    }

    /// Returns k_B·T in keV.
    pub fn to_kev(&self) -> f64 {
        self.0 / KELVIN_PER_KEV
    }
}

impl Add for Temperature {
    type Output = Temperature;

    fn add(self, rhs: Temperature) -> Temperature {
        Temperature(self.0 + rhs.0)
    }
}

impl Sub for Temperature {
    type Output = Temperature;

    fn sub(self, rhs: Temperature) -> Temperature {
        Temperature(self.0 - rhs.0)
    }
}

impl Mul<f64> for Temperature {
    type Output = Temperature;

    fn mul(self, rhs: f64) -> Temperature {
        Temperature(self.0 * rhs)
    }
}
