use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

use crate::length::Length;
use crate::time::Time;

pub const KM_TO_CM: f64 = 1.0e5;

/// A speed using f64 precision.
///
/// Base unit is km/s, the unit shock and ejecta speeds are quoted in.
/// Internally the blast-wave laws work in cm/s, hence the CGS conversions.
///
/// ```rust
/// use units::Velocity;
///
/// let shock = Velocity::from_km_per_sec(5_000.0);
/// assert_eq!(shock.to_cm_per_sec(), 5.0e8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Velocity(f64); // Base unit: km/s

impl Velocity {
    pub fn zero() -> Self {
        Self(0.0)
    }

    pub fn from_km_per_sec(value: f64) -> Self {
        Self(value)
    }

    pub fn from_cm_per_sec(value: f64) -> Self {
        Self(value / KM_TO_CM)
    }

    pub fn to_km_per_sec(&self) -> f64 {
        self.0
    }

    pub fn to_cm_per_sec(&self) -> f64 {
        self.0 * KM_TO_CM
    }

    /// Distance covered at this speed over `time`.
    pub fn distance_over(&self, time: Time) -> Length {
        Length::from_cm(self.to_cm_per_sec() * time.to_seconds())
    }
}

impl Add for Velocity {
    type Output = Velocity;

    fn add(self, rhs: Velocity) -> Velocity {
        Velocity(self.0 + rhs.0)
    }
}

impl Sub for Velocity {
    type Output = Velocity;

    fn sub(self, rhs: Velocity) -> Velocity {
        Velocity(self.0 - rhs.0)
    }
}

impl Mul<f64> for Velocity {
    type Output = Velocity;

    fn mul(self, rhs: f64) -> Velocity {
        Velocity(self.0 * rhs)
    }
}

impl Div<f64> for Velocity {
    type Output = Velocity;

    fn div(self, rhs: f64) -> Velocity {
        Velocity(self.0 / rhs)
    }
}
