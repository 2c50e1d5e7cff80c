use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::{Add, Div, Mul, Sub};

/// Atomic mass unit in grams, as used for tracer particle masses
pub const AMU_G: f64 = 1.66e-24;

/// Mass of the Sun in grams (1.98847 × 10³³ g)
pub const SOLAR_MASS_G: f64 = 1.98847e33;

/// A physical mass quantity using f64 precision.
///
/// The `Mass` struct represents mass values with grams as the base unit.
/// Tracer particles carry masses of a few tens of AMU while ejecta and swept-up
/// masses are naturally quoted in solar masses.
///
/// # Examples
///
/// ```rust
/// use units::Mass;
///
/// let iron = Mass::from_amu(56.0);
/// let ejecta = Mass::from_solar_masses(1.4);
///
/// assert!(iron.to_grams() < 1e-22);
/// assert!(ejecta.to_grams() > 1e33);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Mass(f64); // Base unit: grams

impl Mass {
    pub fn zero() -> Self {
        Self(0.0)
    }

    pub fn from_grams(value: f64) -> Self {
        Self(value)
    }

    /// Creates a mass from a value in atomic mass units.
    pub fn from_amu(value: f64) -> Self {
        Self(value * AMU_G)
    }

    pub fn from_solar_masses(value: f64) -> Self {
        Self(value * SOLAR_MASS_G)
    }

    pub fn to_grams(&self) -> f64 {
        self.0
    }

    pub fn to_amu(&self) -> f64 {
        self.0 / AMU_G
    }

    pub fn to_solar_masses(&self) -> f64 {
        self.0 / SOLAR_MASS_G
    }
}

impl Add for Mass {
    type Output = Mass;

    fn add(self, rhs: Mass) -> Mass {
        Mass(self.0 + rhs.0)
    }
}

impl Sub for Mass {
    type Output = Mass;

    fn sub(self, rhs: Mass) -> Mass {
        Mass(self.0 - rhs.0)
    }
}

impl Mul<f64> for Mass {
    type Output = Mass;

    fn mul(self, rhs: f64) -> Mass {
        Mass(self.0 * rhs)
    }
}

impl Div<f64> for Mass {
    type Output = Mass;

    fn div(self, rhs: f64) -> Mass {
        Mass(self.0 / rhs)
    }
}

impl Sum for Mass {
    fn sum<I: Iterator<Item = Mass>>(iter: I) -> Mass {
        iter.fold(Mass::zero(), |acc, m| acc + m)
    }
}
