use serde::{Deserialize, Serialize};
use std::ops::{Div, Mul};

/// One "foe" (ten to the fifty-one ergs), the canonical supernova energy
pub const FOE_ERG: f64 = 1.0e51;

/// An energy using f64 precision, base unit erg.
///
/// ```rust
/// use units::Energy;
///
/// let sn = Energy::from_foe(1.0);
/// assert_eq!(sn.to_erg(), 1.0e51);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Energy(f64); // Base unit: erg

impl Energy {
    pub fn from_erg(value: f64) -> Self {
        Self(value)
    }

    pub fn from_foe(value: f64) -> Self {
        Self(value * FOE_ERG)
    }

    pub fn to_erg(&self) -> f64 {
        self.0
    }

    pub fn to_foe(&self) -> f64 {
        self.0 / FOE_ERG
    }
}

impl Mul<f64> for Energy {
    type Output = Energy;

    fn mul(self, rhs: f64) -> Energy {
        Energy(self.0 * rhs)
    }
}

impl Div<f64> for Energy {
    type Output = Energy;

    fn div(self, rhs: f64) -> Energy {
        Energy(self.0 / rhs)
    }
}
