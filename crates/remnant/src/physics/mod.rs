//! Blast-wave physics: closed-form shock laws, self-similar profiles, and the
//! tracer-particle ensemble advanced by [`PhysicsModel`].
//!
//! # Model
//!
//! The shock follows the Sedov-Taylor scaling R ∝ (E/ρ)^{1/5} t^{2/5}. Each
//! tracer carries a self-similar radius ξ = r/R plus two angles; every step
//! moves ξ by an advective term (the interior velocity profile) and a
//! diffusive random walk projected onto the radial axis, then rebuilds the
//! Cartesian and thermal fields from (ξ, θ, φ).
//!
//! The profiles are approximations tuned for visual plausibility, not
//! solutions of the Sedov ODEs.
//!
//! # References
//! - Sedov (1959) - "Similarity and Dimensional Methods in Mechanics"
//! - Taylor (1950) - "The formation of a blast wave by a very intense explosion"
//! - Draine (2011) - "Physics of the Interstellar and Intergalactic Medium", ch. 39

mod model;
mod particle;
mod profiles;
mod shock;

#[cfg(test)]
mod particle_test;

pub use model::PhysicsModel;
pub use particle::{Particle, ParticleId, reflect_polar};
pub use profiles::{density_profile, temperature_profile, velocity_profile};
pub use shock::{ShockState, post_shock_temperature, shock_radius, shock_velocity};
