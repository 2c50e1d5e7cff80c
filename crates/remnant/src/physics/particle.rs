//! Tracer particles.
//!
//! The authoritative state of a tracer is its self-similar position
//! (ξ, θ, φ). Position, velocity, temperature and density are rebuilt from
//! it after every update and are never integrated on their own.

use nalgebra::{Point3, Vector3};
use rand::Rng;
use rand_chacha::ChaChaRng;
use rand_distr::StandardNormal;
use serde::Serialize;
use units::{Mass, Velocity, VolumeDensity};

use super::ShockState;
use super::profiles::{density_profile, temperature_profile, velocity_profile};
use crate::config::ElementSpecies;
use crate::constants::{ANGULAR_JITTER, CORE_SCALE, CORE_SPREAD, MASS_JITTER_RANGE, PI, TAU};

/// Stable identity of a tracer; doubles as its index in the model's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ParticleId(pub u32);

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Particle {
    pub id: ParticleId,
    /// Name of the source species
    pub element: String,
    /// Display tag of the source species
    pub tag: String,
    pub mass: f64,              // g
    pub mass_number: u32,       // A
    pub diffusion: f64,         // cm²/s, D0/√A
    pub xi: f64,                // r/R, in [0, 1]
    pub theta: f64,             // azimuth, unbounded
    pub phi: f64,               // polar angle, in [0, π]
    pub position: Point3<f64>,  // pc
    pub velocity: Vector3<f64>, // km/s
    pub temperature: f64,       // K
    pub density: f64,           // g/cm³
}

impl Particle {
    /// Draw a new tracer of `species` near the explosion centre.
    ///
    /// ξ = |N(0, 0.1)| × 0.1, direction uniform on the sphere, and mass
    /// A × AMU × U(0.5, 1.5). Derived fields start at their t = 0 values.
    pub fn spawn(id: ParticleId, species: &ElementSpecies, rng: &mut ChaChaRng) -> Self {
        let normal: f64 = rng.sample(StandardNormal);
        let xi = ((normal * CORE_SPREAD).abs() * CORE_SCALE).min(1.0);
        let phi = rng.random_range(-1.0..1.0_f64).acos();
        let theta = rng.random_range(0.0..TAU);
        let jitter = rng.random_range(MASS_JITTER_RANGE.0..MASS_JITTER_RANGE.1);
        let mass = Mass::from_amu(f64::from(species.mass_number)) * jitter;

        Self {
            id,
            element: species.name.clone(),
            tag: species.tag.clone(),
            mass: mass.to_grams(),
            // Positive once the config has been validated
            mass_number: species.mass_number.unsigned_abs(),
            diffusion: species.diffusion_coefficient(),
            xi,
            theta,
            phi,
            position: Point3::origin(),
            velocity: Vector3::zeros(),
            temperature: 0.0,
            density: 0.0,
        }
    }

    /// Advance ξ, θ, φ over `dt_seconds` and rebuild the derived fields.
    ///
    /// The radial displacement is the advective term v_s·f(ξ)·dt plus a 3D
    /// random-walk step of length √(2 D dt) projected onto the radial axis
    /// through a freshly drawn polar angle. Only the advective speed is
    /// recorded in `velocity`.
    pub fn advance(
        &mut self,
        shock: &ShockState,
        dt_seconds: f64,
        ambient: VolumeDensity,
        rng: &mut ChaChaRng,
    ) {
        let radial_speed = shock.velocity.to_cm_per_sec() * velocity_profile(self.xi);
        let advective = radial_speed * dt_seconds;

        let step_length = (2.0 * self.diffusion * dt_seconds).sqrt();
        let diffusion_phi = rng.random_range(-1.0..1.0_f64).acos();
        let diffusive = step_length * diffusion_phi.cos();

        let radius_cm = shock.radius.to_cm();
        if radius_cm > 0.0 {
            self.xi = (self.xi + (advective + diffusive) / radius_cm).clamp(0.0, 1.0);
        }

        self.theta += rng.random_range(-ANGULAR_JITTER..ANGULAR_JITTER);
        self.phi = reflect_polar(self.phi + rng.random_range(-ANGULAR_JITTER..ANGULAR_JITTER));

        self.refresh(shock, Velocity::from_cm_per_sec(radial_speed), ambient);
    }

    /// Rebuild position, velocity, temperature and density from (ξ, θ, φ).
    pub(crate) fn refresh(
        &mut self,
        shock: &ShockState,
        radial_speed: Velocity,
        ambient: VolumeDensity,
    ) {
        let direction = self.direction();
        self.position = Point3::from(direction * (self.xi * shock.radius.to_parsecs()));
        self.velocity = direction * radial_speed.to_km_per_sec();
        self.temperature = shock.temperature.to_kelvin() * temperature_profile(self.xi);
        self.density = ambient.to_grams_per_cm3() * density_profile(self.xi);
    }

    /// Unit vector along (θ, φ), φ measured from +z.
    pub fn direction(&self) -> Vector3<f64> {
        let (sin_phi, cos_phi) = self.phi.sin_cos();
        let (sin_theta, cos_theta) = self.theta.sin_cos();
        Vector3::new(sin_phi * cos_theta, sin_phi * sin_theta, cos_phi)
    }

    /// Distance from the explosion centre (pc).
    pub fn radius(&self) -> f64 {
        self.position.coords.norm()
    }

    /// Azimuth of the projected position, mapped to [0, 2π].
    pub fn azimuth(&self) -> f64 {
        self.position.y.atan2(self.position.x) + PI
    }
}

/// Fold a perturbed polar angle back into [0, π].
///
/// Single reflection at each pole, valid for perturbations smaller than π.
pub fn reflect_polar(phi: f64) -> f64 {
    let mut phi = phi;
    if phi < 0.0 {
        phi = -phi;
    }
    if phi > PI {
        phi = TAU - phi;
    }
    phi
}
