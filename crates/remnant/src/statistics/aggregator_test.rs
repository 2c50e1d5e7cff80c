//! Tests for the statistics aggregator fed by a live model.

use units::Time;

use crate::config::ModelConfig;
use crate::error::RemnantError;
use crate::physics::PhysicsModel;
use crate::statistics::{AggregatorConfig, StatisticsAggregator};

fn model() -> PhysicsModel {
    PhysicsModel::with_seed(ModelConfig::default(), 42).unwrap()
}

#[test]
fn default_config_matches_reference_layout() {
    let stats = StatisticsAggregator::default();

    assert_eq!(stats.config().radial_bins, 50);
    assert_eq!(stats.config().angular_bins, 36);
    assert_eq!(stats.time_series().capacity(), 100);
    assert!(stats.radial_histogram().is_empty());
}

#[test]
fn invalid_configs_are_rejected() {
    let zero_bins = AggregatorConfig {
        radial_bins: 0,
        ..AggregatorConfig::default()
    };
    let zero_history = AggregatorConfig {
        history_capacity: 0,
        ..AggregatorConfig::default()
    };

    assert!(matches!(
        StatisticsAggregator::new(zero_bins),
        Err(RemnantError::InvalidConfiguration(_))
    ));
    assert!(StatisticsAggregator::new(zero_history).is_err());
}

#[test]
fn every_ingest_conserves_particle_count() {
    let mut model = model();
    let mut stats = StatisticsAggregator::default();

    for _ in 0..40 {
        model.step(Time::from_years(25.0));
        stats.ingest(model.particles(), &model.state());

        let radial: usize = stats.radial_histogram().iter().map(|b| b.count).sum();
        let angular: usize = stats.angular_histogram().iter().map(|b| b.count).sum();
        assert_eq!(radial, model.particle_count());
        assert_eq!(angular, model.particle_count());
        assert_eq!(stats.radial_histogram().len(), 50);
        assert_eq!(stats.angular_histogram().len(), 36);
    }
}

#[test]
fn ingest_at_time_zero_is_finite() {
    let model = model();
    let mut stats = StatisticsAggregator::default();

    stats.ingest(model.particles(), &model.state());

    assert_eq!(stats.radial_histogram()[0].count, model.particle_count());
    assert!(stats.radial_histogram().iter().all(|b| b.density.is_finite()));
}

#[test]
fn radial_mass_matches_ensemble_mass() {
    let mut model = model();
    let mut stats = StatisticsAggregator::default();
    model.step(Time::from_years(400.0));
    stats.ingest(model.particles(), &model.state());

    let binned: f64 = stats.radial_histogram().iter().map(|b| b.mass).sum();
    let total: f64 = model.particles().iter().map(|p| p.mass).sum();

    assert!(((binned - total) / total).abs() < 1e-12);
}

#[test]
fn time_series_is_capped_and_fifo() {
    let mut model = model();
    let config = AggregatorConfig {
        history_capacity: 10,
        ..AggregatorConfig::default()
    };
    let mut stats = StatisticsAggregator::new(config).unwrap();

    for _ in 0..25 {
        model.step(Time::from_years(10.0));
        stats.ingest(model.particles(), &model.state());
        assert!(stats.time_series().len() <= 10);
    }

    let times: Vec<f64> = stats.time_series().iter().map(|s| s.time).collect();
    assert_eq!(times.len(), 10);
    assert!(times.windows(2).all(|w| w[0] < w[1]));
    // Fifteen samples (t = 10..150) were evicted
    assert!(times[0] > 150.0);
    assert_eq!(stats.time_series().latest().map(|s| s.particle_count), Some(2000));
}

#[test]
fn species_summary_tracks_composition() {
    let mut model = model();
    let mut stats = StatisticsAggregator::default();
    model.step(Time::from_years(100.0));
    stats.ingest(model.particles(), &model.state());

    let summary = stats.species_summary();
    let names: Vec<&str> = summary.iter().map(|s| s.element.as_str()).collect();
    assert_eq!(names, vec!["Fe", "Si", "O", "C"]);
    let counts: Vec<usize> = summary.iter().map(|s| s.count).collect();
    assert_eq!(counts, vec![300, 500, 700, 500]);
}

#[test]
fn ingest_is_a_pure_function_of_the_snapshot() {
    let mut model = model();
    model.step(Time::from_years(75.0));

    let mut a = StatisticsAggregator::default();
    let mut b = StatisticsAggregator::default();
    // b sees an extra, older snapshot first
    b.ingest(model.particles(), &model.state());
    a.ingest(model.particles(), &model.state());
    b.ingest(model.particles(), &model.state());

    assert_eq!(a.radial_histogram(), b.radial_histogram());
    assert_eq!(a.angular_histogram(), b.angular_histogram());
}

#[test]
fn clear_drops_outputs() {
    let model = model();
    let mut stats = StatisticsAggregator::default();
    stats.ingest(model.particles(), &model.state());

    stats.clear();

    assert!(stats.time_series().is_empty());
    assert!(stats.radial_histogram().is_empty());
    assert!(stats.species_summary().is_empty());
}
