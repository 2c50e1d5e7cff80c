//! Aggregates particle snapshots into histograms and a bounded history.

use log::trace;
use serde::{Deserialize, Serialize};

use super::{
    AngularBin, RadialBin, SpeciesSummary, TimeSeries, TimeSeriesSample, angular_histogram,
    radial_histogram, summarize_species,
};
use crate::error::{Result, invalid};
use crate::physics::{Particle, ShockState};

/// Bin counts and history length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AggregatorConfig {
    pub radial_bins: usize,
    pub angular_bins: usize,
    pub history_capacity: usize,
}

impl Default for AggregatorConfig {
    fn default() -> Self {
        Self {
            radial_bins: 50,
            angular_bins: 36,
            history_capacity: 100,
        }
    }
}

impl AggregatorConfig {
    pub fn validate(&self) -> Result<()> {
        if self.radial_bins == 0 || self.angular_bins == 0 {
            return Err(invalid("histograms need at least one bin"));
        }
        if self.history_capacity == 0 {
            return Err(invalid("time series capacity must be positive"));
        }
        Ok(())
    }
}

/// Consumes (particles, state) pairs and keeps the latest distributions plus
/// a FIFO time series.
///
/// Never mutates or retains the particles it is given; each `ingest`
/// recomputes every distribution from that snapshot alone. The caller is
/// trusted to pass a particle set and state from the same model and step.
///
/// ```
/// use remnant::{ModelConfig, PhysicsModel, StatisticsAggregator};
/// use units::Time;
///
/// let mut model = PhysicsModel::with_seed(ModelConfig::default(), 1).unwrap();
/// let mut stats = StatisticsAggregator::default();
///
/// model.step(Time::from_years(50.0));
/// stats.ingest(model.particles(), &model.state());
///
/// let total: usize = stats.radial_histogram().iter().map(|b| b.count).sum();
/// assert_eq!(total, model.particle_count());
/// assert_eq!(stats.time_series().len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct StatisticsAggregator {
    config: AggregatorConfig,
    radial: Vec<RadialBin>,
    angular: Vec<AngularBin>,
    species: Vec<SpeciesSummary>,
    history: TimeSeries,
}

impl Default for StatisticsAggregator {
    fn default() -> Self {
        Self::with_valid_config(AggregatorConfig::default())
    }
}

impl StatisticsAggregator {
    pub fn new(config: AggregatorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::with_valid_config(config))
    }

    fn with_valid_config(config: AggregatorConfig) -> Self {
        Self {
            config,
            radial: Vec::new(),
            angular: Vec::new(),
            species: Vec::new(),
            history: TimeSeries::with_capacity(config.history_capacity),
        }
    }

    /// Rebuild all distributions from `particles` and append one sample.
    pub fn ingest(&mut self, particles: &[Particle], state: &ShockState) {
        self.radial = radial_histogram(particles, state.radius, self.config.radial_bins);
        self.angular = angular_histogram(particles, self.config.angular_bins);
        self.species = summarize_species(particles);
        self.history.push(TimeSeriesSample::from_state(state, particles.len()));

        trace!(
            "Ingested {} tracers at t = {:.1} yr ({} samples held)",
            particles.len(),
            state.time.to_years(),
            self.history.len()
        );
    }

    /// Radial distribution from the latest ingest (empty before the first).
    pub fn radial_histogram(&self) -> &[RadialBin] {
        &self.radial
    }

    /// Azimuthal distribution from the latest ingest (empty before the first).
    pub fn angular_histogram(&self) -> &[AngularBin] {
        &self.angular
    }

    pub fn species_summary(&self) -> &[SpeciesSummary] {
        &self.species
    }

    pub fn time_series(&self) -> &TimeSeries {
        &self.history
    }

    pub fn config(&self) -> &AggregatorConfig {
        &self.config
    }

    /// Drop all outputs and history, keeping the configuration.
    pub fn clear(&mut self) {
        self.radial.clear();
        self.angular.clear();
        self.species.clear();
        self.history.clear();
    }
}
