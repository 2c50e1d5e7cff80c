use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// Seconds per year, to the precision used by the blast-wave scaling laws
pub const SECONDS_PER_YEAR: f64 = 3.156e7;

const KYR_TO_YEARS: f64 = 1_000.0;

/// A physical time quantity using f64 precision.
///
/// The `Time` struct represents time with years as the base unit. Remnant ages
/// run from decades (free expansion) to tens of kyr (end of the Sedov phase).
///
/// # Examples
///
/// ```rust
/// use units::Time;
///
/// let age = Time::from_years(500.0);
/// let step = Time::from_years(10.0);
///
/// let later = age + step;
/// assert_eq!(later.to_years(), 510.0);
/// let seconds = later.to_seconds();
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Time(f64); // Base unit: Years

impl Time {
    /// Creates a zero time value
    pub fn zero() -> Self {
        Self(0.0)
    }

    /// Creates a new `Time` from a value in years.
    pub fn from_years(value: f64) -> Self {
        Self(value)
    }

    /// Creates a time from a value in thousand years (kyr)
    pub fn from_kyr(value: f64) -> Self {
        Self(value * KYR_TO_YEARS)
    }

    /// Creates a new `Time` from a value in seconds.
    pub fn from_seconds(value: f64) -> Self {
        Self(value / SECONDS_PER_YEAR)
    }

    /// Returns the time in years.
    pub fn to_years(&self) -> f64 {
        self.0
    }

    /// Returns the time in thousand years
    pub fn to_kyr(&self) -> f64 {
        self.0 / KYR_TO_YEARS
    }

    /// Converts the time to seconds.
    pub fn to_seconds(&self) -> f64 {
        self.0 * SECONDS_PER_YEAR
    }
}

impl Add for Time {
    type Output = Time;

    fn add(self, rhs: Time) -> Time {
        Time(self.0 + rhs.0)
    }
}

impl Sub for Time {
    type Output = Time;

    fn sub(self, rhs: Time) -> Time {
        Time(self.0 - rhs.0)
    }
}

impl Mul<f64> for Time {
    type Output = Time;

    fn mul(self, rhs: f64) -> Time {
        Time(self.0 * rhs)
    }
}

impl Div<f64> for Time {
    type Output = Time;

    fn div(self, rhs: f64) -> Time {
        Time(self.0 / rhs)
    }
}

/// Division of Time by Time returns a dimensionless ratio
impl Div for Time {
    type Output = f64;

    fn div(self, rhs: Time) -> f64 {
        self.0 / rhs.0
    }
}
