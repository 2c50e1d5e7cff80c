use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// One parsec in centimeters
pub const PC_TO_CM: f64 = 3.086e18;
pub const PC_TO_KM: f64 = PC_TO_CM / 1.0e5;
/// One light year in centimeters
pub const LY_TO_CM: f64 = 9.461e17;

/// A physical length quantity using f64 precision.
///
/// The `Length` struct represents length values with parsecs as the base unit,
/// the natural scale for supernova remnants (a few pc after a few centuries,
/// tens of pc by the end of the Sedov phase).
///
/// # Examples
///
/// ```rust
/// use units::Length;
///
/// let shell = Length::from_parsecs(5.0);
/// let front = Length::from_cm(3.086e19);
///
/// assert!(front > shell);
/// let in_cm = shell.to_cm();
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Length(f64); // Base unit: parsec

impl Length {
    /// Creates a zero length value
    pub fn zero() -> Self {
        Self(0.0)
    }

    /// Creates a new `Length` from a value in parsecs.
    pub fn from_parsecs(value: f64) -> Self {
        Self(value)
    }

    /// Creates a new `Length` from a value in light years.
    pub fn from_light_years(value: f64) -> Self {
        Self(value * LY_TO_CM / PC_TO_CM)
    }

    /// Creates a new `Length` from a value in kilometers.
    pub fn from_km(value: f64) -> Self {
        Self(value / PC_TO_KM)
    }

    /// Creates a new `Length` from a value in centimeters.
    pub fn from_cm(value: f64) -> Self {
        Self(value / PC_TO_CM)
    }

    /// Returns the length in parsecs.
    pub fn to_parsecs(&self) -> f64 {
        self.0
    }

    /// Converts the length to light years.
    pub fn to_light_years(&self) -> f64 {
        self.0 * PC_TO_CM / LY_TO_CM
    }

    /// Converts the length to kilometers.
    pub fn to_km(&self) -> f64 {
        self.0 * PC_TO_KM
    }

    /// Converts the length to centimeters.
    pub fn to_cm(&self) -> f64 {
        self.0 * PC_TO_CM
    }

    /// Returns the maximum of two lengths.
    pub fn max(self, other: Self) -> Self {
        if self.0 > other.0 { self } else { other }
    }
}

impl Add for Length {
    type Output = Length;

    fn add(self, rhs: Length) -> Length {
        Length(self.0 + rhs.0)
    }
}

impl Sub for Length {
    type Output = Length;

    fn sub(self, rhs: Length) -> Length {
        Length(self.0 - rhs.0)
    }
}

impl Mul<f64> for Length {
    type Output = Length;

    fn mul(self, rhs: f64) -> Length {
        Length(self.0 * rhs)
    }
}

impl Div<f64> for Length {
    type Output = Length;

    fn div(self, rhs: f64) -> Length {
        Length(self.0 / rhs)
    }
}

/// Division of Length by Length returns a dimensionless ratio
impl Div for Length {
    type Output = f64;

    fn div(self, rhs: Length) -> f64 {
        self.0 / rhs.0
    }
}

/// Allow f64 * Length (commutative multiplication)
impl Mul<Length> for f64 {
    type Output = Length;

    fn mul(self, rhs: Length) -> Length {
        rhs * self
    }
}
