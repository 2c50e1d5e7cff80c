use serde::{Deserialize, Serialize};
use std::ops::{Div, Mul};

use crate::mass::AMU_G;

/// A physical volume density (mass per volume) quantity using f64 precision.
///
/// Base unit is g/cm³. The interstellar medium is absurdly thin in these units
/// (~1e-24 g/cm³, about one hydrogen atom per cm³), so a number-density view
/// is provided alongside.
///
/// ```rust
/// use units::VolumeDensity;
///
/// let ism = VolumeDensity::from_grams_per_cm3(1.0e-24);
/// let n = ism.to_number_density(1.0); // ~0.6 particles per cm³ of hydrogen
/// assert!(n > 0.5 && n < 0.7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct VolumeDensity(f64); // Base unit: g/cm³

impl VolumeDensity {
    pub fn zero() -> Self {
        Self(0.0)
    }

    pub fn from_grams_per_cm3(value: f64) -> Self {
        Self(value)
    }

    /// Creates a density from a number density (cm⁻³) and a mean molecular weight.
    pub fn from_number_density(n_per_cm3: f64, mean_molecular_weight: f64) -> Self {
        Self(n_per_cm3 * mean_molecular_weight * AMU_G)
    }

    pub fn to_grams_per_cm3(&self) -> f64 {
        self.0
    }

    /// Number density (cm⁻³) for the given mean molecular weight.
    pub fn to_number_density(&self, mean_molecular_weight: f64) -> f64 {
        self.0 / (mean_molecular_weight * AMU_G)
    }
}

impl Mul<f64> for VolumeDensity {
    type Output = VolumeDensity;

    fn mul(self, rhs: f64) -> VolumeDensity {
        VolumeDensity(self.0 * rhs)
    }
}

impl Div<f64> for VolumeDensity {
    type Output = VolumeDensity;

    fn div(self, rhs: f64) -> VolumeDensity {
        VolumeDensity(self.0 / rhs)
    }
}

/// Ratio of two densities (compression factor)
impl Div for VolumeDensity {
    type Output = f64;

    fn div(self, rhs: VolumeDensity) -> f64 {
        self.0 / rhs.0
    }
}
