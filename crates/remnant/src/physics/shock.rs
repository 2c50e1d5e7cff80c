//! Macroscopic shock properties from the Sedov-Taylor scaling laws.

use serde::Serialize;
use units::temperature::BOLTZMANN_ERG_PER_K;
use units::{Energy, Length, Temperature, Time, Velocity, VolumeDensity};

use crate::constants::{MEAN_MOLECULAR_WEIGHT, SEDOV_BETA, SHOCK_SPEED_FACTOR};

/// Shock radius R = β (E/ρ)^{1/5} t^{2/5}.
///
/// Zero for t ≤ 0.
pub fn shock_radius(energy: Energy, density: VolumeDensity, time: Time) -> Length {
    let t_sec = time.to_seconds();
    if t_sec <= 0.0 {
        return Length::zero();
    }
    let e_over_rho = energy.to_erg() / density.to_grams_per_cm3();
    Length::from_cm(SEDOV_BETA * e_over_rho.powf(0.2) * t_sec.powf(0.4))
}

/// Shock speed dR/dt = 0.4 R / t.
///
/// Zero for t ≤ 0, where R/t would be 0/0.
pub fn shock_velocity(energy: Energy, density: VolumeDensity, time: Time) -> Velocity {
    let t_sec = time.to_seconds();
    if t_sec <= 0.0 {
        return Velocity::zero();
    }
    let radius_cm = shock_radius(energy, density, time).to_cm();
    Velocity::from_cm_per_sec(SHOCK_SPEED_FACTOR * radius_cm / t_sec)
}

/// Post-shock temperature T = (3/16) μ v² / k_B, with v in cm/s.
///
/// The particle mass is folded into the model's temperature scale, so values
/// are large compared with a physical plasma temperature. Only ratios and
/// the ordering in time are meaningful.
pub fn post_shock_temperature(shock_speed: Velocity) -> Temperature {
    let v = shock_speed.to_cm_per_sec();
    Temperature::from_kelvin((3.0 / 16.0) * MEAN_MOLECULAR_WEIGHT * v * v / BOLTZMANN_ERG_PER_K)
}

/// Snapshot of the blast wave at one instant.
///
/// Derived on every query from (energy, density, time); never stored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ShockState {
    /// Time since explosion (years)
    pub time: Time,
    /// Shock radius (pc)
    pub radius: Length,
    /// Shock speed (km/s)
    pub velocity: Velocity,
    /// Post-shock temperature (K)
    pub temperature: Temperature,
}

impl ShockState {
    /// Evaluate the scaling laws at `time`.
    ///
    /// ```
    /// use remnant::ShockState;
    /// use units::{Energy, Time, VolumeDensity};
    ///
    /// let state = ShockState::at(
    ///     Energy::from_erg(1e51),
    ///     VolumeDensity::from_grams_per_cm3(1e-24),
    ///     Time::from_years(1_000.0),
    /// );
    /// // A canonical remnant is a few parsecs across after a millennium
    /// assert!(state.radius.to_parsecs() > 3.0 && state.radius.to_parsecs() < 8.0);
    /// ```
    pub fn at(energy: Energy, density: VolumeDensity, time: Time) -> Self {
        let radius = shock_radius(energy, density, time);
        let velocity = shock_velocity(energy, density, time);
        Self {
            time,
            radius,
            velocity,
            temperature: post_shock_temperature(velocity),
        }
    }
}
