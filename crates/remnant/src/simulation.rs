//! Pairs one model with one aggregator and runs them in lockstep.
//!
//! Each call to [`Simulation::advance`] performs exactly one physics step
//! followed by one ingest. How often it is called, and with what `dt`, is up
//! to the caller; nothing here sleeps or schedules.

use log::info;
use units::Time;

use crate::config::ModelConfig;
use crate::error::Result;
use crate::physics::{PhysicsModel, ShockState};
use crate::statistics::{AggregatorConfig, StatisticsAggregator};

#[derive(Debug, Clone)]
pub struct Simulation {
    model: PhysicsModel,
    statistics: StatisticsAggregator,
}

impl Simulation {
    /// Build a model seeded from `config.seed` and ingest its t = 0 state.
    ///
    /// ```
    /// use remnant::{AggregatorConfig, ModelConfig, Simulation};
    /// use units::Time;
    ///
    /// let mut sim = Simulation::new(ModelConfig::default(), AggregatorConfig::default()).unwrap();
    /// let state = sim.run(Time::from_years(10.0), 20);
    ///
    /// assert_eq!(state.time.to_years(), 200.0);
    /// assert_eq!(sim.statistics().time_series().len(), 21);
    /// ```
    pub fn new(model_config: ModelConfig, aggregator_config: AggregatorConfig) -> Result<Self> {
        let statistics = StatisticsAggregator::new(aggregator_config)?;
        let model = PhysicsModel::from_config(model_config)?;
        Ok(Self::from_parts(model, statistics))
    }

    /// Wrap an existing model and aggregator, ingesting the current state.
    pub fn from_parts(model: PhysicsModel, mut statistics: StatisticsAggregator) -> Self {
        statistics.ingest(model.particles(), &model.state());
        Self { model, statistics }
    }

    /// One step of `dt`, then one ingest. Returns the new shock state.
    pub fn advance(&mut self, dt: Time) -> ShockState {
        self.model.step(dt);
        let state = self.model.state();
        self.statistics.ingest(self.model.particles(), &state);
        state
    }

    /// Advance `steps` times with a fixed `dt`.
    pub fn run(&mut self, dt: Time, steps: usize) -> ShockState {
        for _ in 0..steps {
            self.advance(dt);
        }
        self.model.state()
    }

    /// Rebuild the model from `config` and restart the statistics.
    ///
    /// On an invalid config neither half is touched.
    pub fn reset(&mut self, config: ModelConfig) -> Result<()> {
        self.model.reset(config)?;
        self.statistics.clear();
        self.statistics.ingest(self.model.particles(), &self.model.state());
        info!("Simulation reset with {} tracers", self.model.particle_count());
        Ok(())
    }

    pub fn model(&self) -> &PhysicsModel {
        &self.model
    }

    pub fn statistics(&self) -> &StatisticsAggregator {
        &self.statistics
    }

    pub fn state(&self) -> ShockState {
        self.model.state()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ElementSpecies;
    use units::Energy;

    fn sim() -> Simulation {
        Simulation::new(ModelConfig::default(), AggregatorConfig::default()).unwrap()
    }

    #[test]
    fn construction_ingests_initial_state() {
        let sim = sim();

        assert_eq!(sim.statistics().time_series().len(), 1);
        assert_eq!(sim.statistics().time_series().latest().map(|s| s.time), Some(0.0));
        assert_eq!(sim.statistics().radial_histogram().len(), 50);
    }

    #[test]
    fn advance_steps_and_ingests_once() {
        let mut sim = sim();
        let state = sim.advance(Time::from_years(100.0));

        assert_eq!(state.time.to_years(), 100.0);
        assert_eq!(sim.statistics().time_series().len(), 2);
        assert_eq!(
            sim.statistics().time_series().latest().map(|s| s.radius),
            Some(state.radius.to_parsecs())
        );
    }

    #[test]
    fn reset_restarts_history() {
        let mut sim = sim();
        sim.run(Time::from_years(50.0), 10);

        let config = ModelConfig::default()
            .with_elements(vec![ElementSpecies::iron().with_fraction(1.0)]);
        sim.reset(config).unwrap();

        assert_eq!(sim.state().time, Time::zero());
        assert_eq!(sim.statistics().time_series().len(), 1);
        assert_eq!(sim.model().particle_count(), 2000);
    }

    #[test]
    fn invalid_reset_keeps_running_state() {
        let mut sim = sim();
        sim.run(Time::from_years(50.0), 4);

        let bad = ModelConfig::default().with_energy(Energy::from_erg(0.0));
        assert!(sim.reset(bad).is_err());

        assert_eq!(sim.state().time.to_years(), 200.0);
        assert_eq!(sim.statistics().time_series().len(), 5);
    }

    #[test]
    fn invalid_aggregator_config_fails_construction() {
        let config = AggregatorConfig {
            angular_bins: 0,
            ..AggregatorConfig::default()
        };

        assert!(Simulation::new(ModelConfig::default(), config).is_err());
    }
}
