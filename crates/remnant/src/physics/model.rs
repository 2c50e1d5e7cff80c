//! The tracer ensemble and its time integrator.

use log::{debug, info};
use rand::SeedableRng;
use rand_chacha::ChaChaRng;
use units::{Time, Velocity};

use super::{Particle, ParticleId, ShockState};
use crate::config::{ElementSpecies, ModelConfig};
use crate::error::Result;

/// Owns the explosion parameters, the clock, the particle arena and the
/// random source every stochastic draw goes through.
///
/// Callers only ever see the ensemble through shared references, so the
/// model is the sole writer of particle state.
///
/// # Examples
///
/// ```
/// use remnant::{ModelConfig, PhysicsModel};
/// use units::Time;
///
/// let mut model = PhysicsModel::with_seed(ModelConfig::default(), 7).unwrap();
/// assert_eq!(model.particles().len(), 2000);
///
/// model.step(Time::from_years(100.0));
/// let state = model.state();
/// assert_eq!(state.time.to_years(), 100.0);
/// assert!(state.radius.to_parsecs() > 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct PhysicsModel {
    config: ModelConfig,
    time: Time,
    particles: Vec<Particle>,
    rng: ChaChaRng,
}

impl PhysicsModel {
    /// Build a model drawing from an injected random source.
    ///
    /// Fails with `InvalidConfiguration` before any particle is created.
    pub fn new(config: ModelConfig, mut rng: ChaChaRng) -> Result<Self> {
        config.validate()?;
        let particles = populate(&config, &mut rng);
        Ok(Self {
            config,
            time: Time::zero(),
            particles,
            rng,
        })
    }

    /// Build a model with a ChaCha stream seeded from `seed`.
    pub fn with_seed(config: ModelConfig, seed: u64) -> Result<Self> {
        Self::new(config, ChaChaRng::seed_from_u64(seed))
    }

    /// Build a model seeded from `config.seed`.
    pub fn from_config(config: ModelConfig) -> Result<Self> {
        let seed = config.seed;
        Self::with_seed(config, seed)
    }

    /// Replace the configuration and rebuild the ensemble at t = 0.
    ///
    /// The new configuration is validated first; on error the model is left
    /// exactly as it was. The random stream continues rather than restarting.
    pub fn reset(&mut self, config: ModelConfig) -> Result<()> {
        config.validate()?;
        self.particles = populate(&config, &mut self.rng);
        self.config = config;
        self.time = Time::zero();
        Ok(())
    }

    /// Swap in a fresh random stream without touching the ensemble.
    pub fn reseed(&mut self, seed: u64) {
        self.rng = ChaChaRng::seed_from_u64(seed);
    }

    /// Advance the simulation by `dt`.
    ///
    /// The shock state is evaluated once at the new time and shared by every
    /// particle. `dt` is not validated: zero or negative steps are a caller
    /// bug and give physically meaningless results without panicking.
    pub fn step(&mut self, dt: Time) {
        self.time = self.time + dt;
        let shock = self.state();
        let dt_seconds = dt.to_seconds();
        let ambient = self.config.density;

        for particle in &mut self.particles {
            particle.advance(&shock, dt_seconds, ambient, &mut self.rng);
        }

        debug!(
            "t = {:.1} yr, R = {:.3} pc, v = {:.0} km/s",
            shock.time.to_years(),
            shock.radius.to_parsecs(),
            shock.velocity.to_km_per_sec()
        );
    }

    /// Read-only view of the ensemble, ordered by id.
    ///
    /// Coordinates change in place on every step; clone if a snapshot must
    /// outlive the next call to [`PhysicsModel::step`].
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particle(&self, id: ParticleId) -> Option<&Particle> {
        self.particles.get(id.0 as usize)
    }

    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    /// Current shock properties, recomputed from (energy, density, time).
    pub fn state(&self) -> ShockState {
        ShockState::at(self.config.energy, self.config.density, self.time)
    }

    pub fn time(&self) -> Time {
        self.time
    }

    pub fn species(&self) -> &[ElementSpecies] {
        &self.config.elements
    }

    pub fn config(&self) -> &ModelConfig {
        &self.config
    }
}

/// Create the ensemble species by species, ids contiguous from zero.
fn populate(config: &ModelConfig, rng: &mut ChaChaRng) -> Vec<Particle> {
    let counts = config.species_counts();
    let total: usize = counts.iter().sum();
    let initial = ShockState::at(config.energy, config.density, Time::zero());

    let mut particles = Vec::with_capacity(total);
    for (species, &count) in config.elements.iter().zip(&counts) {
        for _ in 0..count {
            let id = ParticleId(particles.len() as u32);
            let mut particle = Particle::spawn(id, species, rng);
            particle.refresh(&initial, Velocity::zero(), config.density);
            particles.push(particle);
        }
        info!("Spawned {count} {} tracers (A = {})", species.name, species.mass_number);
    }

    let dropped = config.particle_budget.saturating_sub(total);
    if dropped > 0 {
        info!("{dropped} of {} tracers lost to per-species rounding", config.particle_budget);
    }

    particles
}
