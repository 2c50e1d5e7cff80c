//! Supernova remnant blast-wave model.
//!
//! An ensemble of tracer particles is carried outward by the Sedov-Taylor
//! self-similar flow, spread by a per-element random walk, and summarized
//! every step into radial and azimuthal distributions plus a bounded time
//! series of the shock state.
//!
//! # Architecture
//!
//! - [`PhysicsModel`] owns the explosion parameters, the clock, the particle
//!   arena and a seedable ChaCha random source. It is the only writer of
//!   particle state.
//! - [`StatisticsAggregator`] reads a particle snapshot and a [`ShockState`]
//!   and rebuilds its outputs from scratch on each ingest.
//! - [`Simulation`] runs the two in lockstep for an external driver (an
//!   animation loop, a test, a batch job).
//!
//! Rendering, UI and wall-clock pacing live outside this crate.
//!
//! # Example
//!
//! ```
//! use remnant::{AggregatorConfig, ModelConfig, Simulation};
//! use units::Time;
//!
//! let mut sim = Simulation::new(ModelConfig::default(), AggregatorConfig::default()).unwrap();
//! for _ in 0..10 {
//!     sim.advance(Time::from_years(50.0));
//! }
//!
//! let state = sim.state();
//! println!(
//!     "t = {} yr, R = {:.2} pc, v = {:.0} km/s",
//!     state.time.to_years(),
//!     state.radius.to_parsecs(),
//!     state.velocity.to_km_per_sec()
//! );
//! ```

pub mod config;
pub mod constants;
pub mod error;
pub mod physics;
pub mod simulation;
pub mod statistics;


pub use config::{ElementSpecies, ModelConfig};
pub use error::{RemnantError, Result};
pub use physics::{Particle, ParticleId, PhysicsModel, ShockState};
pub use simulation::Simulation;
pub use statistics::{
    AggregatorConfig, AngularBin, RadialBin, SpeciesSummary, StatisticsAggregator, TimeSeries,
    TimeSeriesSample,
};
